use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;

use super::model::{Concept, Model};
use crate::capability::Shape;
use crate::dispatch::Strategies;
use crate::error::TypeMismatch;

/// Non-owning, type-erased handle to a [`Shape`] that lives elsewhere.
///
/// The referenced value must outlive the view; the borrow checker enforces it.
/// Copies of a view refer to the same value.
///
/// ```compile_fail
/// use core::fmt;
/// use tola_erase::{Format, Shape, ShapeRef};
///
/// #[derive(Clone, Shape)]
/// struct Dot;
///
/// impl Format for Dot {
///     fn format(&self) -> String { String::from(".") }
/// }
///
/// impl fmt::Display for Dot {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("Dot") }
/// }
///
/// let view = {
///     let dot = Dot;
///     ShapeRef::new(&dot)
/// };
/// view.format();
/// ```
pub struct ShapeRef<'a> {
    inner: Box<dyn Concept<'a> + 'a>,
}

impl<'a> ShapeRef<'a> {
    pub fn new<T: Shape>(value: &'a T) -> Self {
        log::trace!("viewing `{}`", core::any::type_name::<T>());
        Self { inner: Box::new(Model::new(value)) }
    }

    pub(crate) fn from_concept(inner: Box<dyn Concept<'a> + 'a>) -> Self {
        Self { inner }
    }

    pub fn type_id(&self) -> TypeId {
        self.inner.type_tag()
    }

    pub fn type_name(&self) -> &'static str {
        self.inner.type_name()
    }

    /// Asks the referenced value whether it is a `T`.
    pub fn is<T: Shape>(&self) -> bool {
        self.inner.is(TypeId::of::<T>())
    }

    /// The referenced value, borrowed for as long as the value itself.
    pub fn downcast_ref<T: Shape>(&self) -> Option<&'a T> {
        self.inner.referent()?.downcast_ref::<T>()
    }

    pub fn try_as<T: Shape>(&self) -> Result<&'a T, TypeMismatch> {
        self.downcast_ref::<T>().ok_or_else(|| TypeMismatch {
            expected: core::any::type_name::<T>(),
            found: self.inner.type_name(),
        })
    }

    /// Reinterpret the referenced value as a `T` without checking.
    ///
    /// # Safety
    ///
    /// The referenced value must be a `T` (`self.is::<T>()`). Anything else is
    /// undefined behavior. Debug builds assert it.
    pub unsafe fn as_unchecked<T: Shape>(&self) -> &'a T {
        debug_assert!(
            self.is::<T>(),
            "`{}` read as `{}`",
            self.inner.type_name(),
            core::any::type_name::<T>()
        );
        // SAFETY: every `ShapeRef` wraps a borrowing model, so a referent exists.
        let any: &'a dyn Any = unsafe { self.inner.referent().unwrap_unchecked() };
        // SAFETY: the caller guarantees the concrete type is `T`.
        unsafe { &*(any as *const dyn Any as *const T) }
    }

    pub fn format(&self) -> String {
        self.inner.format()
    }

    pub fn calculate(&self) -> i32 {
        self.inner.calculate()
    }

    pub fn serialize(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.inner.serialize(out)
    }

    pub fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.inner.draw(out)
    }

    pub fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.inner.print(out)
    }

    pub fn strategies(&self) -> Strategies {
        self.inner.strategies()
    }
}

impl Clone for ShapeRef<'_> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone_box() }
    }
}

impl<'a, T: Shape> From<&'a T> for ShapeRef<'a> {
    fn from(value: &'a T) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for ShapeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.print(f)
    }
}

impl fmt::Debug for ShapeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeRef").field("type", &self.inner.type_name()).finish_non_exhaustive()
    }
}
