use {
    crate::resources::tuples,
    std::{
        ffi::{OsStr, OsString},
        fs::File,
        net::{TcpListener, TcpStream, UdpSocket},
        num::{
            NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
            NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
        },
        ops::{Deref, DerefMut},
        path::{Path, PathBuf},
        process::Child,
        ptr::NonNull,
        rc::Rc,
        sync::Arc,
    },
};

/// Decides whether a resource currently refers to something live.
///
/// The default method treats every value as valid, so opting a type in is an empty impl:
///
/// ```
/// # use scopedref::Validity;
/// struct Socket(u32);
/// impl Validity for Socket {}
///
/// assert!(Socket(3).is_valid());
/// ```
///
/// Pointer shaped types override it so that their null or sentinel form is invalid. Foreign types
/// without an impl can be wrapped in [AlwaysValid].
pub trait Validity {
    fn is_valid(&self) -> bool {
        true
    }
}

macro_rules! always_valid {
    ($($ty:ty),* $(,)?) => {
        $(impl Validity for $ty {})*
    };
}
always_valid!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, (), str,
    String, OsStr, OsString, Path, PathBuf, File, TcpListener, TcpStream, UdpSocket, Child,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI128, NonZeroIsize, NonZeroU8,
    NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU128, NonZeroUsize,
);
#[cfg(unix)]
always_valid!(
    std::os::fd::OwnedFd,
    std::os::fd::BorrowedFd<'_>,
    std::os::unix::net::UnixListener,
    std::os::unix::net::UnixStream,
    std::os::unix::net::UnixDatagram,
);
#[cfg(windows)]
always_valid!(
    std::os::windows::io::OwnedHandle,
    std::os::windows::io::BorrowedHandle<'_>,
    std::os::windows::io::OwnedSocket,
    std::os::windows::io::BorrowedSocket<'_>,
);

impl<T> Validity for Vec<T> {}
impl<T> Validity for Box<T> where T: ?Sized {}
impl<T> Validity for Rc<T> where T: ?Sized {}
impl<T> Validity for Arc<T> where T: ?Sized {}
impl<T> Validity for NonNull<T> where T: ?Sized {}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
/// Marks any value as [valid](Validity), for resource types this crate has no impl for.
///
/// ```
/// # use scopedref::{AlwaysValid, scoped};
/// struct Handle(u32);
///
/// let guard = scoped!(|_: AlwaysValid<Handle>| {}, AlwaysValid(Handle(4)));
/// assert!(guard.is_live());
/// assert_eq!(guard.get().map(|handle| handle.0.0), Ok(4));
/// ```
pub struct AlwaysValid<T>(pub T);
impl<T> AlwaysValid<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}
impl<T> Validity for AlwaysValid<T> {}
impl<T> AsRef<T> for AlwaysValid<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}
impl<T> AsMut<T> for AlwaysValid<T> {
    fn as_mut(&mut self) -> &mut T {
        &mut self.0
    }
}
impl<T> Deref for AlwaysValid<T> {
    type Target = T;
    fn deref(&self) -> &T {
        self.as_ref()
    }
}
impl<T> DerefMut for AlwaysValid<T> {
    fn deref_mut(&mut self) -> &mut T {
        self.as_mut()
    }
}

impl<T> Validity for *const T
where
    T: ?Sized,
{
    fn is_valid(&self) -> bool {
        !self.is_null()
    }
}
impl<T> Validity for *mut T
where
    T: ?Sized,
{
    fn is_valid(&self) -> bool {
        !self.is_null()
    }
}

/// `None` is the sentinel form.
impl<T> Validity for Option<T>
where
    T: Validity,
{
    fn is_valid(&self) -> bool {
        self.as_ref().is_some_and(T::is_valid)
    }
}

impl<T> Validity for &T
where
    T: Validity + ?Sized,
{
    fn is_valid(&self) -> bool {
        T::is_valid(self)
    }
}
impl<T> Validity for &mut T
where
    T: Validity + ?Sized,
{
    fn is_valid(&self) -> bool {
        T::is_valid(self)
    }
}

macro_rules! impl_validity {
    ($count:literal; $($index:tt => $ty:ident),+) => {
        /// Valid only if every element is.
        impl<$($ty),+> Validity for ($($ty,)+)
        where
            $($ty: Validity),+
        {
            fn is_valid(&self) -> bool {
                $(self.$index.is_valid())&&+
            }
        }
    };
}
tuples!(impl_validity);

#[cfg(test)]
mod tests {
    use {super::*, std::ptr};

    #[test]
    fn always() {
        assert!(0_i32.is_valid());
        assert!((-1_i32).is_valid());
        assert!("".is_valid());
        assert!(String::new().is_valid());
        assert!(NonNull::<u8>::dangling().is_valid());
    }

    #[test]
    fn pointers() {
        let mut value = 5_u8;

        assert!(!ptr::null::<u8>().is_valid());
        assert!(!ptr::null_mut::<u8>().is_valid());
        assert!((&raw const value).is_valid());
        assert!((&raw mut value).is_valid());
        assert!(!(&ptr::null_mut::<u8>()).is_valid());
    }

    fn assert_valid_type<T>()
    where
        T: Validity + ?Sized,
    {
    }

    #[test]
    fn handles() {
        assert_valid_type::<TcpListener>();
        assert_valid_type::<TcpStream>();
        assert_valid_type::<UdpSocket>();
        assert_valid_type::<Child>();
        assert_valid_type::<Path>();
        #[cfg(unix)]
        assert_valid_type::<std::os::fd::BorrowedFd<'static>>();
        #[cfg(windows)]
        assert_valid_type::<std::os::windows::io::OwnedHandle>();

        assert!(PathBuf::from("/tmp/lock").is_valid());
        assert!(OsString::from("pipe").is_valid());
        assert!(Rc::new(1_u8).is_valid());
        assert!(Arc::<str>::from("shared").is_valid());
        assert!(NonZeroU32::MIN.is_valid());
        assert!((Arc::new(3_i32), PathBuf::new()).is_valid());
    }

    #[test]
    fn always_valid() {
        let sender = AlwaysValid(std::sync::mpsc::channel::<u8>().0);

        assert!(sender.is_valid());
        assert!(sender.send(1).is_err());
        assert!(AlwaysValid(ptr::null::<u8>()).is_valid());
        assert!(AlwaysValid(ptr::null::<u8>()).into_inner().is_null());
    }

    #[test]
    fn option() {
        assert!(!None::<i32>.is_valid());
        assert!(Some(3_i32).is_valid());
        assert!(!Some(ptr::null::<u8>()).is_valid());
    }

    #[test]
    fn conjunction() {
        let value = 1_u8;

        assert!((1_i32, "two", &raw const value).is_valid());
        assert!(!(1_i32, ptr::null::<u8>(), 3_u64).is_valid());
        assert!(!(None::<u8>,).is_valid());
    }
}
