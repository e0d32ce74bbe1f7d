//! Procedural macros for the tola-erase shape system
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `#[derive(Shape)]` | struct/enum | Implement `Shape` by resolving every operation |
//! | `#[shape(base)]` | field | Mark the embedded `ShapeBase` |
//! | `#[shape_fn]` | fn | Register a free function for its parameter's type |
//!
//! ## Example
//!
//! ```ignore
//! #[derive(Clone, Shape)]
//! struct Square { side: i32 }
//!
//! #[shape_fn]
//! fn format(square: &Square) -> String { format!("side {}", square.side) }
//!
//! impl fmt::Display for Square { ... }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations
// =============================================================================

mod common;
mod user;

// =============================================================================
// User Macros (user/)
// =============================================================================

/// Derive `Shape` for a concrete type.
///
/// Every operation is resolved where the type is defined: base mix-in first,
/// then member trait, then a `#[shape_fn]` function, then the default.
/// Mark at most one `ShapeBase` field with `#[shape(base)]` to extend the base.
///
/// ```ignore
/// #[derive(Clone, Shape)]
/// struct Husky {
///     #[shape(base)]
///     base: ShapeBase,
///     name: String,
/// }
/// ```
#[proc_macro_derive(Shape, attributes(shape))]
pub fn derive_shape(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);
    user::expand_derive_shape(input).into()
}

/// Register a free function as a shape operation.
///
/// The operation is taken from the attribute (`#[shape_fn(draw)]`) or, when
/// absent, from the function name. The first parameter must be `&Type`; sink
/// operations (`serialize`, `draw`) take `&mut dyn fmt::Write` second.
///
/// ```ignore
/// #[shape_fn]
/// fn calculate(square: &Square) -> i32 { square.side * square.side }
///
/// #[shape_fn(draw)]
/// fn draw_square(square: &Square, out: &mut dyn fmt::Write) -> fmt::Result {
///     out.write_str("[]")
/// }
/// ```
#[proc_macro_attribute]
pub fn shape_fn(attr: TokenStream, item: TokenStream) -> TokenStream {
    let arg = parse_macro_input!(attr as common::OperationArg);
    let func = parse_macro_input!(item as syn::ItemFn);
    user::expand_shape_fn(arg, func).into()
}
