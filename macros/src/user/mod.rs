//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `#[derive(Shape)]` | on struct/enum | Resolve strategies, wire `#[shape(base)]` |
//! | `#[shape_fn]` | on fn | Register a free-function operation |

mod derive_shape;
mod shape_fn;

pub use derive_shape::expand_derive_shape;
pub use shape_fn::expand_shape_fn;
