use {
    crate::{
        cleanup::{Cleanup, CleanupFailure, Outcome},
        error::{Error, SetStatus},
        report::{Log, Report},
        resources::{ResourceAt, Resources},
        validity::Validity,
    },
    std::{
        fmt::{self, Debug, Formatter},
        mem,
        panic::{self, AssertUnwindSafe},
    },
};

#[must_use = "the resources are cleaned up as soon as the guard is dropped"]
/// Owns a fixed set of resources and runs `F` over them exactly once.
///
/// The cleanup runs when the guard is dropped, or earlier through [Self::release]. Moving the
/// guard moves the obligation with it, and the type cannot be cloned, so no resource set is ever
/// cleaned up twice. [Self::steal] hands the resources back without cleaning them up.
///
/// Failures of the cleanup routine, either an `Err` return or a panic, are sent to `P` and never
/// propagated, including when the guard is dropped while the thread is already unwinding.
///
/// # Examples
///
/// ```
/// # use {scopedref::scoped, std::cell::Cell};
/// let closed = Cell::new(None);
/// let mut fd = scoped!(|fd: i32| closed.set(Some(fd)), 5);
///
/// assert_eq!(fd.get(), Ok(&5));
/// fd.release();
/// assert_eq!(closed.get(), Some(5));
/// assert!(fd.get().is_err());
/// ```
pub struct ScopedRef<F, R, P = Log>
where
    F: Cleanup<R>,
    R: Resources,
    P: Report,
{
    /// `None` once released.
    resources: Option<R>,
    /// `None` once released.
    cleanup: Option<F>,
    reporter: P,
}
impl<F, R> ScopedRef<F, R>
where
    F: Cleanup<R>,
    R: Resources,
{
    /// Guard `resources`, reporting cleanup failures through [log].
    pub const fn new(cleanup: F, resources: R) -> Self {
        Self::with_reporter(cleanup, resources, Log)
    }
}
impl<F, R, P> ScopedRef<F, R, P>
where
    F: Cleanup<R>,
    R: Resources,
    P: Report,
{
    /// Guard `resources`, sending cleanup failures to `reporter`.
    pub const fn with_reporter(cleanup: F, resources: R, reporter: P) -> Self {
        Self {
            resources: Some(resources),
            cleanup: Some(cleanup),
            reporter,
        }
    }

    /// Returns true once the resources were cleaned up, stolen or taken.
    pub const fn is_released(&self) -> bool {
        self.resources.is_none()
    }
    /// Returns true if the guard still owns its resources and every one of them is
    /// [valid](Validity).
    pub fn is_live(&self) -> bool
    where
        R: Validity,
    {
        self.resources
            .as_ref()
            .is_some_and(|resources| resources.is_valid())
    }

    /// Clean up now instead of at the end of the scope. Does nothing if already released.
    pub fn release(&mut self) {
        let (Some(resources), Some(cleanup)) = (self.resources.take(), self.cleanup.take()) else {
            return;
        };

        let failure = match panic::catch_unwind(AssertUnwindSafe(|| cleanup.cleanup(resources))) {
            Ok(outcome) => outcome.into_failure(),
            Err(payload) => Some(CleanupFailure::from_panic(payload)),
        };
        match failure {
            Some(failure) => self.reporter.report(&failure),
            None => log::trace!("released {} resource(s)", R::COUNT),
        }
    }

    /// Move the guard out of `self`, leaving behind a released guard that cleans up nothing.
    pub fn take(&mut self) -> Self
    where
        P: Clone,
    {
        log::trace!("moving {} resource(s) to a new guard", R::COUNT);

        Self {
            resources: self.resources.take(),
            cleanup: self.cleanup.take(),
            reporter: self.reporter.clone(),
        }
    }

    /// Give up ownership of the resources without cleaning them up.
    ///
    /// # Examples
    ///
    /// ```
    /// # use scopedref::{Error, scoped};
    /// let mut guard = scoped!(|_: i32, _: u8| {}, 1, 7);
    ///
    /// assert_eq!(guard.steal(), Ok((1, 7)));
    /// assert_eq!(guard.steal(), Err(Error::AlreadyReleased));
    /// ```
    pub fn steal(&mut self) -> Result<R, Error> {
        let resources = self.resources.take().ok_or(Error::AlreadyReleased)?;
        self.cleanup = None;

        log::trace!("{} resource(s) stolen from guard", R::COUNT);
        Ok(resources)
    }

    /// The first resource.
    pub fn get(&self) -> Result<&<R as ResourceAt<0>>::Output, Error>
    where
        R: ResourceAt<0>,
    {
        self.get_at::<0>()
    }
    /// The resource in slot `I`.
    pub fn get_at<const I: usize>(&self) -> Result<&<R as ResourceAt<I>>::Output, Error>
    where
        R: ResourceAt<I>,
    {
        self.resources
            .as_ref()
            .map(<R as ResourceAt<I>>::at)
            .ok_or(Error::AlreadyReleased)
    }

    /// [Self::get] that returns `None` once released.
    pub fn try_get(&self) -> Option<&<R as ResourceAt<0>>::Output>
    where
        R: ResourceAt<0>,
    {
        self.get().ok()
    }
    /// [Self::get_at] that returns `None` once released.
    pub fn try_get_at<const I: usize>(&self) -> Option<&<R as ResourceAt<I>>::Output>
    where
        R: ResourceAt<I>,
    {
        self.get_at::<I>().ok()
    }

    /// Overwrite the first resource.
    ///
    /// The overwritten value is dropped without running the cleanup routine on it. Use
    /// [Self::replace] to get it back and release it yourself.
    pub fn set(&mut self, resource: <R as ResourceAt<0>>::Output) -> Result<(), Error>
    where
        R: ResourceAt<0>,
    {
        self.set_at::<0>(resource)
    }
    /// Overwrite the resource in slot `I`, with the same caveat as [Self::set].
    pub fn set_at<const I: usize>(
        &mut self,
        resource: <R as ResourceAt<I>>::Output,
    ) -> Result<(), Error>
    where
        R: ResourceAt<I>,
    {
        self.replace_at::<I>(resource).map(drop)
    }

    /// [Self::set] that reports a released guard through [SetStatus] instead.
    pub fn try_set(&mut self, resource: <R as ResourceAt<0>>::Output) -> SetStatus
    where
        R: ResourceAt<0>,
    {
        self.set(resource).into()
    }
    /// [Self::set_at] that reports a released guard through [SetStatus] instead.
    pub fn try_set_at<const I: usize>(
        &mut self,
        resource: <R as ResourceAt<I>>::Output,
    ) -> SetStatus
    where
        R: ResourceAt<I>,
    {
        self.set_at::<I>(resource).into()
    }

    /// Overwrite the first resource, returning the previous one. Cleaning it up is now the
    /// caller's job.
    pub fn replace(
        &mut self,
        resource: <R as ResourceAt<0>>::Output,
    ) -> Result<<R as ResourceAt<0>>::Output, Error>
    where
        R: ResourceAt<0>,
    {
        self.replace_at::<0>(resource)
    }
    /// Overwrite the resource in slot `I`, returning the previous one.
    pub fn replace_at<const I: usize>(
        &mut self,
        resource: <R as ResourceAt<I>>::Output,
    ) -> Result<<R as ResourceAt<I>>::Output, Error>
    where
        R: ResourceAt<I>,
    {
        self.resources
            .as_mut()
            .map(|resources| mem::replace(resources.at_mut(), resource))
            .ok_or(Error::AlreadyReleased)
    }
}
impl<F, R, P> Drop for ScopedRef<F, R, P>
where
    F: Cleanup<R>,
    R: Resources,
    P: Report,
{
    fn drop(&mut self) {
        self.release();
    }
}
impl<F, R, P> From<&ScopedRef<F, R, P>> for bool
where
    F: Cleanup<R>,
    R: Resources + Validity,
    P: Report,
{
    fn from(guard: &ScopedRef<F, R, P>) -> Self {
        guard.is_live()
    }
}
impl<F, R, P> Debug for ScopedRef<F, R, P>
where
    F: Cleanup<R>,
    R: Resources + Debug,
    P: Report,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedRef")
            .field("resources", &self.resources)
            .field("released", &self.is_released())
            .finish_non_exhaustive()
    }
}
