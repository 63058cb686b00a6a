use std::{
    error::Error as StdError,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Errors from accessing a [ScopedRef](crate::ScopedRef).
pub enum Error {
    /// The resources were already cleaned up or stolen.
    AlreadyReleased,
}
impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyReleased => write!(f, "resource already released"),
        }
    }
}
impl StdError for Error {}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumIs, strum::IntoStaticStr)]
#[repr(i32)]
#[strum(serialize_all = "snake_case")]
/// Result of the non failing setters.
///
/// Converts into the numeric status code with [i32::from].
pub enum SetStatus {
    /// The resource was replaced.
    Set = 0,
    /// Nothing was written since the guard no longer owns anything.
    Released = 1,
}
impl From<SetStatus> for i32 {
    fn from(status: SetStatus) -> Self {
        status as i32
    }
}
impl<T> From<Result<T, Error>> for SetStatus {
    fn from(result: Result<T, Error>) -> Self {
        match result {
            Ok(_) => Self::Set,
            Err(Error::AlreadyReleased) => Self::Released,
        }
    }
}
