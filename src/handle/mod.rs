//! # Layer 3: Uniform Handles
//!
//! Two handles over one erased interface:
//!
//! - [`ShapeBox`] owns its value and deep-copies on clone.
//! - [`ShapeRef`] borrows a value owned elsewhere.
//!
//! Both carry the [`Profile`](crate::Profile) resolved for the concrete type,
//! so an operation is one virtual call followed by one function pointer.

mod model;
mod owned;
mod view;

pub use owned::ShapeBox;
pub use view::ShapeRef;
