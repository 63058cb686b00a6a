use {
    crate::resources::tuples,
    std::{
        any::Any,
        fmt::{self, Display, Formatter},
    },
};

/// A routine that releases a resource tuple, taking every resource as a positional argument.
///
/// Implemented for any `FnOnce(A, B, ..) -> O` where `O` is an [Outcome], so plain closures
/// and functions work as is:
///
/// ```
/// # use scopedref::Cleanup;
/// fn close(fd: i32, _name: &str) {}
///
/// close.cleanup((3, "socket"));
/// ```
pub trait Cleanup<R> {
    type Output: Outcome;

    fn cleanup(self, resources: R) -> Self::Output;
}

macro_rules! impl_cleanup {
    ($count:literal; $($index:tt => $ty:ident),+) => {
        impl<Routine, Ret, $($ty),+> Cleanup<($($ty,)+)> for Routine
        where
            Routine: FnOnce($($ty),+) -> Ret,
            Ret: Outcome,
        {
            type Output = Ret;

            fn cleanup(self, resources: ($($ty,)+)) -> Ret {
                self($(resources.$index),+)
            }
        }
    };
}
tuples!(impl_cleanup);

/// What a cleanup routine returned, seen as success or failure.
pub trait Outcome {
    /// Returns `None` if the cleanup succeeded.
    fn into_failure(self) -> Option<CleanupFailure>;
}
impl Outcome for () {
    fn into_failure(self) -> Option<CleanupFailure> {
        None
    }
}
impl<T, E> Outcome for Result<T, E>
where
    E: Display,
{
    fn into_failure(self) -> Option<CleanupFailure> {
        self.err().map(|err| CleanupFailure::Error(err.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A cleanup routine that did not finish cleanly.
///
/// These never reach the owner of the guard; they go to its [Report](crate::Report) instead.
pub enum CleanupFailure {
    /// The routine returned an error.
    Error(String),
    /// The routine panicked. Holds the panic message when it was a string.
    Panic(String),
}
impl CleanupFailure {
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => payload
                .downcast_ref::<&'static str>()
                .copied()
                .unwrap_or("unknown panic payload")
                .to_owned(),
        };

        Self::Panic(message)
    }
}
impl Display for CleanupFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(message) => write!(f, "cleanup routine returned an error: {}", message),
            Self::Panic(message) => write!(f, "cleanup routine panicked: {}", message),
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::panic};

    #[test]
    fn spreads_arguments() {
        let mut seen = None;

        (|fd: i32, count: usize, name: &str| seen = Some((fd, count, name.to_owned())))
            .cleanup((5, 3, "log"));

        assert_eq!(seen, Some((5, 3, "log".to_owned())));
    }

    #[test]
    fn outcome() {
        assert_eq!(().into_failure(), None);
        assert_eq!(Ok::<u8, &str>(1).into_failure(), None);
        assert_eq!(
            Err::<(), _>("bad descriptor").into_failure(),
            Some(CleanupFailure::Error("bad descriptor".to_owned()))
        );
    }

    #[test]
    fn panic_payload() {
        let payload = panic::catch_unwind(|| panic!("static")).unwrap_err();
        assert_eq!(
            CleanupFailure::from_panic(payload),
            CleanupFailure::Panic("static".to_owned())
        );

        let payload = panic::catch_unwind(|| panic!("formatted {}", 1)).unwrap_err();
        assert_eq!(
            CleanupFailure::from_panic(payload),
            CleanupFailure::Panic("formatted 1".to_owned())
        );

        let payload = panic::catch_unwind(|| panic::panic_any(7_u8)).unwrap_err();
        assert_eq!(
            CleanupFailure::from_panic(payload),
            CleanupFailure::Panic("unknown panic payload".to_owned())
        );
    }
}
