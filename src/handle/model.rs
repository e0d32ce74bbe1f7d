//! The erased interface and its one generic model.
//!
//! `Concept` is the object-safe interface behind both handles. `Model<S>`
//! implements it for any storage slot: an owned value for [`ShapeBox`](super::ShapeBox),
//! a shared reference for [`ShapeRef`](super::ShapeRef).

use alloc::boxed::Box;
use alloc::string::String;
use core::any::{Any, TypeId};
use core::fmt;

use crate::capability::Shape;
use crate::dispatch::{Profile, Strategies};

// =============================================================================
// Storage Slots
// =============================================================================

pub(crate) trait Slot: Clone {
    type Target: Shape;

    fn get(&self) -> &Self::Target;

    /// `None` for borrowed slots.
    fn get_mut(&mut self) -> Option<&mut Self::Target>;
}

#[derive(Clone)]
pub(crate) struct Owned<T>(pub(crate) T);

impl<T: Shape> Slot for Owned<T> {
    type Target = T;

    fn get(&self) -> &T {
        &self.0
    }

    fn get_mut(&mut self) -> Option<&mut T> {
        Some(&mut self.0)
    }
}

impl<T: Shape> Slot for &T {
    type Target = T;

    fn get(&self) -> &T {
        self
    }

    fn get_mut(&mut self) -> Option<&mut T> {
        None
    }
}

/// Access to the slot's target for the full lifetime `'a`.
pub(crate) trait Lend<'a>: Slot + 'a {
    /// `None` for owned slots.
    fn referent(&self) -> Option<&'a Self::Target>;
}

impl<'a, T: Shape> Lend<'a> for Owned<T> {
    fn referent(&self) -> Option<&'a T> {
        None
    }
}

impl<'a, T: Shape> Lend<'a> for &'a T {
    fn referent(&self) -> Option<&'a T> {
        Some(*self)
    }
}

// =============================================================================
// Concept
// =============================================================================

pub(crate) trait Concept<'a> {
    fn format(&self) -> String;
    fn calculate(&self) -> i32;
    fn serialize(&self, out: &mut dyn fmt::Write) -> fmt::Result;
    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result;
    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result;

    /// Prototype: an independent model with the same slot contents.
    fn clone_box(&self) -> Box<dyn Concept<'a> + 'a>;

    /// A borrowing model over the same value.
    fn view(&self) -> Box<dyn Concept<'_> + '_>;

    fn type_tag(&self) -> TypeId;
    fn type_name(&self) -> &'static str;
    fn is(&self, id: TypeId) -> bool;
    fn strategies(&self) -> Strategies;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> Option<&mut dyn Any>;

    /// The borrowed value itself, outliving `&self`. `None` when owned.
    fn referent(&self) -> Option<&'a dyn Any>;
}

pub(crate) struct Model<S: Slot> {
    slot: S,
    profile: Profile<S::Target>,
}

impl<S: Slot> Model<S> {
    pub(crate) fn new(slot: S) -> Self {
        Model { slot, profile: <S::Target as Shape>::profile() }
    }
}

impl<'a, S: Lend<'a>> Concept<'a> for Model<S> {
    fn format(&self) -> String {
        self.profile.format.call(self.slot.get())
    }

    fn calculate(&self) -> i32 {
        self.profile.calculate.call(self.slot.get())
    }

    fn serialize(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.profile.serialize.call(self.slot.get(), out)
    }

    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        self.profile.draw.call(self.slot.get(), out)
    }

    fn print(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        write!(out, "{}", self.slot.get())
    }

    fn clone_box(&self) -> Box<dyn Concept<'a> + 'a> {
        Box::new(Model { slot: self.slot.clone(), profile: self.profile })
    }

    fn view(&self) -> Box<dyn Concept<'_> + '_> {
        Box::new(Model { slot: self.slot.get(), profile: self.profile })
    }

    fn type_tag(&self) -> TypeId {
        TypeId::of::<S::Target>()
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<S::Target>()
    }

    fn is(&self, id: TypeId) -> bool {
        TypeId::of::<S::Target>() == id
    }

    fn strategies(&self) -> Strategies {
        self.profile.strategies()
    }

    fn as_any(&self) -> &dyn Any {
        self.slot.get()
    }

    fn as_any_mut(&mut self) -> Option<&mut dyn Any> {
        self.slot.get_mut().map(|value| value as &mut dyn Any)
    }

    fn referent(&self) -> Option<&'a dyn Any> {
        self.slot.referent().map(|value| value as &'a dyn Any)
    }
}
