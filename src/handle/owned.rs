use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;

use super::model::{Concept, Model, Owned};
use super::ShapeRef;
use crate::capability::Shape;
use crate::dispatch::Strategies;
use crate::error::TypeMismatch;

/// Owning, type-erased handle to any [`Shape`].
///
/// Holds exactly one value. Cloning deep-copies it through the erased
/// interface; the clone and the original never share state.
///
/// ```
/// use core::fmt;
/// use tola_erase::{Format, Shape, ShapeBox};
///
/// #[derive(Clone, Shape)]
/// struct Label(&'static str);
///
/// impl Format for Label {
///     fn format(&self) -> String { format!("<{}>", self.0) }
/// }
///
/// impl fmt::Display for Label {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.0) }
/// }
///
/// let shape = ShapeBox::new(Label("hi"));
/// assert_eq!(shape.format(), "<hi>");
/// assert_eq!(shape.calculate(), 0);
/// assert_eq!(shape.to_string(), "hi");
/// assert!(shape.is::<Label>());
/// ```
pub struct ShapeBox {
    inner: Box<dyn Concept<'static>>,
    type_id: TypeId,
    type_name: &'static str,
}

impl ShapeBox {
    pub fn new<T: Shape>(value: T) -> Self {
        let model = Model::new(Owned(value));
        log::debug!(
            "erasing `{}` ({})",
            core::any::type_name::<T>(),
            model.strategies()
        );
        Self {
            inner: Box::new(model),
            type_id: TypeId::of::<T>(),
            type_name: core::any::type_name::<T>(),
        }
    }

    // ========================================================================
    // Type recovery
    // ========================================================================

    /// Identity of the stored value's concrete type.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// True iff the stored value is exactly a `T`.
    pub fn is<T: Shape>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub fn downcast_ref<T: Shape>(&self) -> Option<&T> {
        self.inner.as_any().downcast_ref::<T>()
    }

    /// Mutable access to the stored value. Changes are seen by every later
    /// operation on this handle and by nothing else.
    pub fn downcast_mut<T: Shape>(&mut self) -> Option<&mut T> {
        self.inner.as_any_mut()?.downcast_mut::<T>()
    }

    pub fn try_as<T: Shape>(&self) -> Result<&T, TypeMismatch> {
        self.downcast_ref::<T>().ok_or_else(|| TypeMismatch {
            expected: core::any::type_name::<T>(),
            found: self.type_name,
        })
    }

    pub fn try_as_mut<T: Shape>(&mut self) -> Result<&mut T, TypeMismatch> {
        let found = self.type_name;
        self.downcast_mut::<T>().ok_or(TypeMismatch {
            expected: core::any::type_name::<T>(),
            found,
        })
    }

    /// Reinterpret the stored value as a `T` without checking.
    ///
    /// # Safety
    ///
    /// The stored value must be a `T` (`self.is::<T>()`). Anything else is
    /// undefined behavior. Debug builds assert it.
    pub unsafe fn as_unchecked<T: Shape>(&self) -> &T {
        debug_assert!(
            self.is::<T>(),
            "`{}` read as `{}`",
            self.type_name,
            core::any::type_name::<T>()
        );
        let any: &dyn Any = self.inner.as_any();
        // SAFETY: the caller guarantees the concrete type is `T`.
        unsafe { &*(any as *const dyn Any as *const T) }
    }

    // ========================================================================
    // Operations
    // ========================================================================

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

    /// The stored value's `Display` output.
    pub fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.inner.print(out)
    }

    /// How each operation of the stored type was resolved.
    pub fn strategies(&self) -> Strategies {
        self.inner.strategies()
    }

    /// Borrow the stored value as a non-owning handle.
    pub fn view(&self) -> ShapeRef<'_> {
        ShapeRef::from_concept(self.inner.view())
    }
}

impl Clone for ShapeBox {
    fn clone(&self) -> Self {
        log::trace!("cloning `{}`", self.type_name);
        Self {
            inner: self.inner.clone_box(),
            type_id: self.type_id,
            type_name: self.type_name,
        }
    }
}

impl fmt::Display for ShapeBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.inner.print(f)
    }
}

impl fmt::Debug for ShapeBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeBox").field("type", &self.type_name).finish_non_exhaustive()
    }
}
