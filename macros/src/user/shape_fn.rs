use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{FnArg, ItemFn, ReturnType, Signature, Type, spanned::Spanned};

use crate::common::{Operation, OperationArg};

/// #[shape_fn] registers a free function as an operation of its first
/// parameter's type.
///
/// ```ignore
/// #[shape_fn]
/// fn calculate(square: &Square) -> i32 { square.side * square.side }
///
/// // impl FreeCalculate for Square {
/// //     fn free_calculate(value: &Self) -> i32 { calculate(value) }
/// // }
/// ```
pub fn expand_shape_fn(arg: OperationArg, func: ItemFn) -> TokenStream2 {
    match shape_fn(arg, &func) {
        Ok(registration) => quote! {
            #func
            #registration
        },
        Err(err) => {
            let err = err.to_compile_error();
            quote! {
                #func
                #err
            }
        }
    }
}

fn shape_fn(arg: OperationArg, func: &ItemFn) -> syn::Result<TokenStream2> {
    let sig = &func.sig;
    let name = &sig.ident;

    let op = match arg.op {
        Some((op, _)) => op,
        None => Operation::from_name(&name.to_string()).ok_or_else(|| {
            syn::Error::new_spanned(
                name,
                format!(
                    "cannot infer the operation from `{}`; name the function one of {} or write `#[shape_fn(<operation>)]`",
                    name,
                    Operation::expected_list()
                ),
            )
        })?,
    };

    if !sig.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&sig.generics, "`#[shape_fn]` functions cannot be generic"));
    }
    check_output(op, sig)?;
    if sig.inputs.len() != op.arity() {
        let expected = if op.is_sink() { "`(&Type, &mut dyn fmt::Write)`" } else { "`(&Type)`" };
        return Err(syn::Error::new(
            sig.inputs.span(),
            format!("`{}` takes {}", op.name(), expected),
        ));
    }

    let target = match sig.inputs.first() {
        Some(FnArg::Typed(pat)) => match &*pat.ty {
            Type::Reference(reference) if reference.mutability.is_none() => &*reference.elem,
            other => {
                return Err(syn::Error::new_spanned(other, "the first parameter must be `&Type`"));
            }
        },
        Some(FnArg::Receiver(receiver)) => {
            return Err(syn::Error::new_spanned(receiver, "`#[shape_fn]` takes a free function, not a method"));
        }
        None => return Err(syn::Error::new_spanned(sig, "the first parameter must be `&Type`")),
    };

    let free_trait = op.free_trait(name.span());
    let free_method = op.free_method(name.span());

    let registration = if op.is_sink() {
        quote! {
            impl ::tola_erase::capability::#free_trait for #target {
                #[inline]
                fn #free_method(
                    value: &Self,
                    out: &mut dyn ::tola_erase::__private::fmt::Write,
                ) -> ::tola_erase::__private::fmt::Result {
                    #name(value, out)
                }
            }
        }
    } else {
        let output = match op {
            Operation::Calculate => quote! { i32 },
            _ => quote! { ::tola_erase::__private::String },
        };
        quote! {
            impl ::tola_erase::capability::#free_trait for #target {
                #[inline]
                fn #free_method(value: &Self) -> #output {
                    #name(value)
                }
            }
        }
    };

    Ok(registration)
}

/// Compares the written return type's last path segment with the operation's.
fn check_output(op: Operation, sig: &Signature) -> syn::Result<()> {
    let matches = match &sig.output {
        ReturnType::Default => false,
        ReturnType::Type(_, ty) => match &**ty {
            Type::Path(path) if path.qself.is_none() => path
                .path
                .segments
                .last()
                .is_some_and(|segment| segment.ident == op.returns() && segment.arguments.is_none()),
            _ => false,
        },
    };
    if matches {
        return Ok(());
    }
    let message = format!("`{}` must return {}", op.name(), op.returns_display());
    match &sig.output {
        ReturnType::Default => Err(syn::Error::new_spanned(sig, message)),
        ReturnType::Type(_, ty) => Err(syn::Error::new_spanned(ty, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(arg: OperationArg, func: ItemFn) -> syn::Result<String> {
        shape_fn(arg, &func).map(|tokens| tokens.to_string())
    }

    #[test]
    fn test_infers_from_name() {
        let func: ItemFn = syn::parse_quote! {
            fn calculate(square: &Square) -> i32 { square.side }
        };
        let out = expand(OperationArg { op: None }, func).unwrap();
        assert!(out.contains("FreeCalculate for Square"));
        assert!(out.contains("calculate (value)"));
    }

    #[test]
    fn test_explicit_sink_operation() {
        let func: ItemFn = syn::parse_quote! {
            fn draw_square(square: &Square, out: &mut dyn fmt::Write) -> fmt::Result { Ok(()) }
        };
        let arg: OperationArg = syn::parse_quote! { draw };
        let out = expand(arg, func).unwrap();
        assert!(out.contains("FreeDraw for Square"));
        assert!(out.contains("draw_square (value , out)"));
    }

    #[test]
    fn test_rejections() {
        let unnamed: ItemFn = syn::parse_quote! { fn area(s: &Square) -> i32 { 0 } };
        assert!(expand(OperationArg { op: None }, unnamed).is_err());

        let by_value: ItemFn = syn::parse_quote! { fn format(s: Square) -> String { String::new() } };
        assert!(expand(OperationArg { op: None }, by_value).is_err());

        let missing_sink: ItemFn = syn::parse_quote! { fn serialize(s: &Square) -> fmt::Result { Ok(()) } };
        assert!(expand(OperationArg { op: None }, missing_sink).is_err());

        let generic: ItemFn = syn::parse_quote! { fn format<T>(s: &T) -> String { String::new() } };
        assert!(expand(OperationArg { op: None }, generic).is_err());
    }

    #[test]
    fn test_return_type_must_match_operation() {
        let wrong: ItemFn = syn::parse_quote! { fn calculate(s: &Square) -> String { String::new() } };
        let err = expand(OperationArg { op: None }, wrong).unwrap_err();
        assert_eq!(err.to_string(), "`calculate` must return `i32`");

        let unit: ItemFn = syn::parse_quote! { fn format(s: &Square) {} };
        let err = expand(OperationArg { op: None }, unit).unwrap_err();
        assert_eq!(err.to_string(), "`format` must return `String`");

        let sink: ItemFn = syn::parse_quote! {
            fn draw(s: &Square, out: &mut dyn fmt::Write) -> String { String::new() }
        };
        let err = expand(OperationArg { op: None }, sink).unwrap_err();
        assert_eq!(err.to_string(), "`draw` must return `fmt::Result`");

        let qualified: ItemFn = syn::parse_quote! {
            fn format(s: &Square) -> std::string::String { String::new() }
        };
        assert!(expand(OperationArg { op: None }, qualified).is_ok());

        let core_result: ItemFn = syn::parse_quote! {
            fn serialize(s: &Square, out: &mut dyn core::fmt::Write) -> core::fmt::Result { Ok(()) }
        };
        assert!(expand(OperationArg { op: None }, core_result).is_ok());
    }
}
