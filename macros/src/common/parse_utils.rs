//! Common parsing utilities

use syn::{
    parse::{Parse, ParseStream},
    Ident,
};

use super::Operation;

// =============================================================================
// `#[shape_fn(...)]` arguments
// =============================================================================

/// Optional explicit operation: `#[shape_fn]` or `#[shape_fn(format)]`.
pub struct OperationArg {
    pub op: Option<(Operation, Ident)>,
}

impl Parse for OperationArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Ok(OperationArg { op: None });
        }
        let ident: Ident = input.parse()?;
        let op = Operation::from_name(&ident.to_string()).ok_or_else(|| {
            syn::Error::new_spanned(
                &ident,
                format!("unknown operation `{}`; expected one of {}", ident, Operation::expected_list()),
            )
        })?;
        if !input.is_empty() {
            return Err(input.error("`#[shape_fn]` takes at most one operation name"));
        }
        Ok(OperationArg { op: Some((op, ident)) })
    }
}

// =============================================================================
// Attribute Detection
// =============================================================================

/// Check if an attribute is `#[shape(...)]`
pub fn is_shape_attr(attr: &syn::Attribute) -> bool {
    attr.path().is_ident("shape")
}
