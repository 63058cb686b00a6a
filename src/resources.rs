//! Fixed arity resource bundles.
//!
//! A [ScopedRef](crate::ScopedRef) stores its resources as a plain tuple. The traits here only
//! exist for tuples, so the arity and the type of every slot are known at compile time, and
//! asking for a slot that does not exist is a type error rather than a runtime failure:
//!
//! ```compile_fail
//! # use scopedref::ResourceAt;
//! fn third<R: ResourceAt<2>>(resources: &R) -> &R::Output {
//!     resources.at()
//! }
//!
//! third(&(1, 2));
//! ```

/// Tuples of one to twelve resources.
pub trait Resources {
    /// How many resources the tuple holds.
    const COUNT: usize;
}

/// Access to the resource in slot `I`.
///
/// Only implemented when `I` is smaller than the tuple's [Resources::COUNT].
pub trait ResourceAt<const I: usize>: Resources {
    type Output;

    fn at(&self) -> &Self::Output;
    fn at_mut(&mut self) -> &mut Self::Output;
}

/// Invoke `$m` once for every supported tuple arity.
///
/// `$m` receives `$count; $($index => $Type),+`.
macro_rules! tuples {
    ($m:ident) => {
        $m!(1; 0 => A);
        $m!(2; 0 => A, 1 => B);
        $m!(3; 0 => A, 1 => B, 2 => C);
        $m!(4; 0 => A, 1 => B, 2 => C, 3 => D);
        $m!(5; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E);
        $m!(6; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F);
        $m!(7; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G);
        $m!(8; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H);
        $m!(9; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I);
        $m!(10; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J);
        $m!(11; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K);
        $m!(12; 0 => A, 1 => B, 2 => C, 3 => D, 4 => E, 5 => F, 6 => G, 7 => H, 8 => I, 9 => J, 10 => K, 11 => L);
    };
}
pub(crate) use tuples;

macro_rules! impl_resources {
    ($count:literal; $($index:tt => $ty:ident),+) => {
        impl<$($ty),+> Resources for ($($ty,)+) {
            const COUNT: usize = $count;
        }
        impl_resources!(@slots ($($ty),+); $($index => $ty),+);
    };
    (@slots $all:tt; $($index:tt => $ty:ident),+) => {
        $(impl_resources!(@slot $all; $index => $ty);)+
    };
    (@slot ($($all:ident),+); $index:tt => $ty:ident) => {
        impl<$($all),+> ResourceAt<$index> for ($($all,)+) {
            type Output = $ty;

            fn at(&self) -> &$ty {
                &self.$index
            }
            fn at_mut(&mut self) -> &mut $ty {
                &mut self.$index
            }
        }
    };
}
tuples!(impl_resources);
