//! Bound strategies for one concrete type.

use alloc::string::String;
use core::fmt;

use super::{CalculateImpl, DrawImpl, FormatImpl, SerializeImpl, Via};

pub type FormatFn<T> = fn(&T) -> String;
pub type CalculateFn<T> = fn(&T) -> i32;
pub type SinkFn<T> = fn(&T, &mut dyn fmt::Write) -> fmt::Result;

/// A resolved function pointer together with how it was resolved.
#[derive(Clone, Copy)]
pub struct Binding<F> {
    via: Via,
    func: F,
}

impl<F: Copy> Binding<F> {
    pub fn via(&self) -> Via {
        self.via
    }

    pub fn func(&self) -> F {
        self.func
    }
}

impl<T: ?Sized> Binding<FormatFn<T>> {
    #[inline(always)]
    pub fn call(&self, value: &T) -> String {
        (self.func)(value)
    }
}

impl<T: ?Sized> Binding<CalculateFn<T>> {
    #[inline(always)]
    pub fn call(&self, value: &T) -> i32 {
        (self.func)(value)
    }
}

impl<T: ?Sized> Binding<SinkFn<T>> {
    #[inline(always)]
    pub fn call(&self, value: &T, out: &mut dyn fmt::Write) -> fmt::Result {
        (self.func)(value, out)
    }
}

impl<F> fmt::Debug for Binding<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Binding").field(&self.via).finish()
    }
}

/// The capability profile of `T`: one binding per operation.
///
/// Built once per type by `T::profile()` and copied into every handle that
/// wraps a `T`. Resolution has no side effects, so two calls always agree.
pub struct Profile<T: ?Sized> {
    pub format: Binding<FormatFn<T>>,
    pub calculate: Binding<CalculateFn<T>>,
    pub serialize: Binding<SinkFn<T>>,
    pub draw: Binding<SinkFn<T>>,
}

impl<T: ?Sized> Profile<T> {
    /// Bind the four selected strategy tags.
    ///
    /// The tags are only used for their types. `resolve!` produces them from
    /// the probes; generic wrappers pass them directly.
    pub fn bind<F, C, S, D>(_format: F, _calculate: C, _serialize: S, _draw: D) -> Self
    where
        F: FormatImpl<T>,
        C: CalculateImpl<T>,
        S: SerializeImpl<T>,
        D: DrawImpl<T>,
    {
        Profile {
            format: Binding { via: F::VIA, func: F::format },
            calculate: Binding { via: C::VIA, func: C::calculate },
            serialize: Binding { via: S::VIA, func: S::serialize },
            draw: Binding { via: D::VIA, func: D::draw },
        }
    }

    pub fn strategies(&self) -> Strategies {
        Strategies {
            format: self.format.via,
            calculate: self.calculate.via,
            serialize: self.serialize.via,
            draw: self.draw.via,
        }
    }
}

impl<T: ?Sized> Clone for Profile<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Profile<T> {}

impl<T: ?Sized> fmt::Debug for Profile<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Profile")
            .field("type", &core::any::type_name::<T>())
            .field("strategies", &self.strategies())
            .finish()
    }
}

/// How each operation of a type was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Strategies {
    pub format: Via,
    pub calculate: Via,
    pub serialize: Via,
    pub draw: Via,
}

impl fmt::Display for Strategies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "format={:?} calculate={:?} serialize={:?} draw={:?}",
            self.format, self.calculate, self.serialize, self.draw
        )
    }
}
