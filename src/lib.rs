#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, enables std for log and thiserror

//! # tola-erase
//!
//! **Type-erased shapes with compile-time strategy resolution.**
//!
//! Unrelated concrete types go into one [`ShapeBox`] (or a borrowed
//! [`ShapeRef`]) and answer the same operations. How each type answers is
//! decided at compile time, once per type, from what it provides:
//!
//! 1. it embeds a [`ShapeBase`] (`#[shape(base)]`): the base runs first, then
//!    the type's own member or free implementation;
//! 2. it implements the member trait ([`Format`], [`Calculate`], ...);
//! 3. a free function is registered for it with `#[shape_fn]`;
//! 4. nothing: a neutral default, or a compile error for `format`.
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Capabilities                                            |
//! |  - Shape, Format/Calculate/Serialize/Draw, Free*, ShapeBase       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Detection                                               |
//! |  - Detect<T> consts, Probe<T> autoref chains, resolve!            |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatch                                                |
//! |  - strategy tags (Member, Free, Base<I>, ...), Profile<T>         |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Handles          |  Layer 4: Nodes                      |
//! |  - ShapeBox, ShapeRef      |  - Node (ShapeBox + branches)        |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use core::fmt;
//! use tola_erase::prelude::*;
//!
//! #[derive(Clone, Shape)]
//! struct Circle { radius: i32 }
//!
//! impl Format for Circle {
//!     fn format(&self) -> String { format!("circle r={}", self.radius) }
//! }
//!
//! impl fmt::Display for Circle {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("Circle") }
//! }
//!
//! #[derive(Clone, Shape)]
//! struct Square { side: i32 }
//!
//! #[shape_fn]
//! fn format(square: &Square) -> String { format!("square a={}", square.side) }
//!
//! #[shape_fn]
//! fn calculate(square: &Square) -> i32 { square.side * square.side }
//!
//! impl fmt::Display for Square {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("Square") }
//! }
//!
//! let shapes = vec![ShapeBox::new(Circle { radius: 2 }), ShapeBox::new(Square { side: 3 })];
//!
//! assert_eq!(shapes[0].format(), "circle r=2");
//! assert_eq!(shapes[1].format(), "square a=3");
//! assert_eq!(shapes[1].calculate(), 9);
//! assert_eq!(shapes[1].strategies().format, Via::Free);
//! ```

// Allow `::tola_erase` to work inside the crate itself
extern crate self as tola_erase;

extern crate alloc;

// =============================================================================
// Layer 0: Capabilities
// =============================================================================
pub mod capability;

// =============================================================================
// Layer 1: Detection
// =============================================================================
pub mod detect;

// =============================================================================
// Layer 2: Dispatch
// =============================================================================
pub mod dispatch;

// =============================================================================
// Layer 3-4: Handles and nodes
// =============================================================================
pub mod handle;
pub mod tree;

pub mod error;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use capability::{Calculate, Draw, Extends, Format, Indirect, Serialize, Shape, ShapeBase};
pub use dispatch::{Binding, Profile, Strategies, Via};
pub use error::TypeMismatch;
pub use handle::{ShapeBox, ShapeRef};
pub use tree::Node;

// Re-export proc-macros
pub use macros::{Shape, shape_fn};

/// Paths used by generated code. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use alloc::string::String;
    pub use core::fmt;
}

/// Common items for defining and using shapes.
pub mod prelude {
    pub use crate::capability::{Calculate, Draw, Extends, Format, Serialize, Shape, ShapeBase};
    pub use crate::dispatch::{Strategies, Via};
    pub use crate::handle::{ShapeBox, ShapeRef};
    pub use crate::tree::Node;
    pub use crate::Indirect;
    pub use macros::{Shape, shape_fn};
}
