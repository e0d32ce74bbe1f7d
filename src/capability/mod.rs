//! # Layer 0: Capabilities
//!
//! The surfaces a concrete type can use to take part in a [`ShapeBox`](crate::ShapeBox).
//!
//! | Operation | Member | Free function | Output |
//! |-----------|--------|---------------|--------|
//! | format    | [`Format`]    | [`FreeFormat`]    | `String` |
//! | calculate | [`Calculate`] | [`FreeCalculate`] | `i32` |
//! | serialize | [`Serialize`] | [`FreeSerialize`] | writes to a sink |
//! | draw      | [`Draw`]      | [`FreeDraw`]      | writes to a sink |
//! | print     | `Display`     | -                 | writes to a sink |
//!
//! A third surface is the base mix-in: a type that embeds a [`ShapeBase`] and
//! implements [`Extends`] defers every operation to the base, which resolves
//! the type's own member or free implementation underneath it.
//!
//! The `Free*` traits are never written by hand. `#[shape_fn]` generates them
//! from a plain function:
//!
//! ```ignore
//! #[shape_fn]
//! fn format(circle: &Circle) -> String { ... }
//! // impl FreeFormat for Circle { fn free_format(value: &Self) -> String { format(value) } }
//! ```

pub mod base;

use alloc::string::String;
use core::fmt;

pub use base::{Extends, Indirect, ShapeBase};

use crate::dispatch::Profile;

// =============================================================================
// Participation Contract
// =============================================================================

/// A value that can be stored behind a type-erased handle.
///
/// `Display` is the universal contract (`print`). Every other operation is
/// resolved once into the [`Profile`] returned by [`Shape::profile`].
///
/// Implement it with `#[derive(Shape)]` on concrete types. Generic wrappers
/// implement it by hand with [`Profile::bind`], as [`Indirect`] does.
///
/// A type with no `format` strategy is rejected at compile time:
///
/// ```compile_fail
/// use core::fmt;
/// use tola_erase::Shape;
///
/// #[derive(Clone, Shape)]
/// struct Blank;
///
/// impl fmt::Display for Blank {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("Blank") }
/// }
/// ```
///
/// and so is a type that cannot print itself:
///
/// ```compile_fail
/// use tola_erase::{Format, Shape};
///
/// #[derive(Clone, Shape)]
/// struct Mute;
///
/// impl Format for Mute {
///     fn format(&self) -> String { String::from("mute") }
/// }
/// ```
///
/// A free function must name its operation:
///
/// ```compile_fail
/// use tola_erase::shape_fn;
///
/// struct Square(i32);
///
/// #[shape_fn]
/// fn area(square: &Square) -> i32 { square.0 * square.0 }
/// ```
pub trait Shape: Clone + fmt::Display + 'static {
    /// Resolved strategies for every operation of `Self`.
    fn profile() -> Profile<Self>;
}

// =============================================================================
// Member Surfaces
// =============================================================================

/// Member `format`: textual rendering.
pub trait Format {
    fn format(&self) -> String;
}

/// Member `calculate`: a numeric summary.
pub trait Calculate {
    fn calculate(&self) -> i32;
}

/// Member `serialize`: writes a serialized form to a sink.
pub trait Serialize {
    fn serialize(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

/// Member `draw`: writes a drawing to a sink.
pub trait Draw {
    fn draw(&self, out: &mut dyn fmt::Write) -> fmt::Result;
}

// =============================================================================
// Free-Function Surfaces (generated by #[shape_fn])
// =============================================================================

#[doc(hidden)]
pub trait FreeFormat {
    fn free_format(value: &Self) -> String;
}

#[doc(hidden)]
pub trait FreeCalculate {
    fn free_calculate(value: &Self) -> i32;
}

#[doc(hidden)]
pub trait FreeSerialize {
    fn free_serialize(value: &Self, out: &mut dyn fmt::Write) -> fmt::Result;
}

#[doc(hidden)]
pub trait FreeDraw {
    fn free_draw(value: &Self, out: &mut dyn fmt::Write) -> fmt::Result;
}
