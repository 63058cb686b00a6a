//! Owning guards for externally allocated resources.
//!
//! A [ScopedRef] bundles one or more resources (pointers, descriptors, handles) with the routine
//! that releases them, and runs that routine exactly once: when the guard goes out of scope, or
//! earlier through [ScopedRef::release]. Ownership can be moved around but never shared, and
//! [ScopedRef::steal] hands it back to the caller without cleaning up.
//!
//! ```
//! # use {scopedref::scoped, std::{cell::RefCell, ptr}};
//! let freed = RefCell::new(Vec::new());
//! let mut buffer = [0_u8; 4];
//!
//! {
//!     let guard = scoped!(
//!         |ptr: *mut u8, len: usize| freed.borrow_mut().push((ptr, len)),
//!         buffer.as_mut_ptr(),
//!         buffer.len(),
//!     );
//!     assert!(guard.is_live());
//!     assert_eq!(guard.get_at::<1>(), Ok(&4));
//! }
//!
//! assert_eq!(freed.into_inner(), [(buffer.as_mut_ptr(), 4)]);
//!
//! let null = scoped!(|_: *mut u8| {}, ptr::null_mut());
//! assert!(!null.is_live());
//! ```

pub mod cleanup;
pub mod error;
pub mod guard;
pub mod report;
pub mod resources;
pub mod validity;

pub use {
    cleanup::{Cleanup, CleanupFailure, Outcome},
    error::{Error, SetStatus},
    guard::ScopedRef,
    report::{Ignore, Log, Report},
    resources::{ResourceAt, Resources},
    validity::{AlwaysValid, Validity},
};

/// Guard a resource tuple with `cleanup`. See [scoped!] for the variadic form.
pub const fn scoped<F, R>(cleanup: F, resources: R) -> ScopedRef<F, R>
where
    F: Cleanup<R>,
    R: Resources,
{
    ScopedRef::new(cleanup, resources)
}

/// Guard every resource after the cleanup routine, in order.
///
/// ```
/// # use scopedref::scoped;
/// let guard = scoped!(|fd: i32, name: &str| println!("closing {} ({})", name, fd), 3, "log");
/// assert_eq!(guard.get(), Ok(&3));
/// ```
#[macro_export]
macro_rules! scoped {
    ($cleanup:expr, $($resource:expr),+ $(,)?) => {
        $crate::scoped($cleanup, ($($resource,)+))
    };
}
