//! Base mix-in and the indirection wrapper.

use alloc::format;
use alloc::string::String;
use core::fmt;

use super::{Calculate, Draw, Format, Serialize, Shape};
use crate::dispatch::{Base, Member, Profile};

/// State shared by every type that extends the base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ShapeBase {
    pub size_x: i32,
    pub size_y: i32,
}

impl ShapeBase {
    pub const fn new(size_x: i32, size_y: i32) -> Self {
        Self { size_x, size_y }
    }

    /// Header the base prepends to the formatted output of its owner.
    pub fn describe(&self) -> String {
        format!("[X:{}|Y:{}]\n", self.size_x, self.size_y)
    }
}

/// A type that embeds a [`ShapeBase`].
///
/// Extending the base takes precedence over every other strategy: the base
/// then resolves the owner's member or free implementation on its own, without
/// looking at `Extends` again.
///
/// `#[derive(Shape)]` implements this for the field marked `#[shape(base)]`.
pub trait Extends {
    fn shape_base(&self) -> &ShapeBase;
}

/// Attaches a [`ShapeBase`] to an existing shape without touching its type.
///
/// Every operation goes through the base first, then through `T`'s own
/// resolved strategy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Indirect<T> {
    pub inner: T,
    pub base: ShapeBase,
}

impl<T> Indirect<T> {
    pub fn new(inner: T) -> Self {
        Self { inner, base: ShapeBase::default() }
    }

    pub fn with_base(inner: T, base: ShapeBase) -> Self {
        Self { inner, base }
    }

    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> Extends for Indirect<T> {
    fn shape_base(&self) -> &ShapeBase {
        &self.base
    }
}

impl<T: Shape> Format for Indirect<T> {
    fn format(&self) -> String {
        T::profile().format.call(&self.inner)
    }
}

impl<T: Shape> Calculate for Indirect<T> {
    fn calculate(&self) -> i32 {
        T::profile().calculate.call(&self.inner)
    }
}

impl<T: Shape> Serialize for Indirect<T> {
    fn serialize(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        T::profile().serialize.call(&self.inner, out)
    }
}

impl<T: Shape> Draw for Indirect<T> {
    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        T::profile().draw.call(&self.inner, out)
    }
}

impl<T: fmt::Display> fmt::Display for Indirect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Indirect({})", self.inner)
    }
}

// Generic, so the probes cannot run here; the strategies are spelled out.
impl<T: Shape> Shape for Indirect<T> {
    fn profile() -> Profile<Self> {
        Profile::bind(
            Base::<Member>::new(),
            Base::<Member>::new(),
            Base::<Member>::new(),
            Base::<Member>::new(),
        )
    }
}
