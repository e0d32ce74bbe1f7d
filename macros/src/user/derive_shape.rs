use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index, Member};

use crate::common::is_shape_attr;

/// #[derive(Shape)] resolves every operation at the type's definition site.
///
/// ```ignore
/// #[derive(Clone, Shape)]
/// struct Husky { #[shape(base)] base: ShapeBase, name: String }
///
/// // impl Shape for Husky { fn profile() -> Profile<Self> { resolve!(Self) } }
/// // impl Extends for Husky { fn shape_base(&self) -> &ShapeBase { &self.base } }
/// ```
pub fn expand_derive_shape(input: DeriveInput) -> TokenStream2 {
    match derive_shape(&input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn derive_shape(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "`#[derive(Shape)]` needs a concrete type; implement `Shape` for generic types with `Profile::bind`",
        ));
    }

    if let Some(attr) = input.attrs.iter().find(|attr| is_shape_attr(attr)) {
        return Err(syn::Error::new_spanned(attr, "`#[shape(...)]` belongs on a field"));
    }

    let base = match &input.data {
        Data::Struct(data) => find_base_field(&data.fields)?,
        Data::Enum(data) => {
            for variant in &data.variants {
                reject_shape_attrs(&variant.fields, "enum variants")?;
            }
            None
        }
        Data::Union(data) => {
            reject_shape_attrs(&Fields::Named(data.fields.clone()), "unions")?;
            None
        }
    };

    let extends = base.map(|member| {
        quote! {
            impl ::tola_erase::Extends for #ident {
                fn shape_base(&self) -> &::tola_erase::ShapeBase {
                    &self.#member
                }
            }
        }
    });

    Ok(quote! {
        impl ::tola_erase::Shape for #ident {
            fn profile() -> ::tola_erase::Profile<Self> {
                ::tola_erase::resolve!(Self)
            }
        }

        #extends
    })
}

/// The field marked `#[shape(base)]`, if any.
fn find_base_field(fields: &Fields) -> syn::Result<Option<Member>> {
    let mut found: Option<Member> = None;

    for (index, field) in fields.iter().enumerate() {
        for attr in field.attrs.iter().filter(|attr| is_shape_attr(attr)) {
            let mut is_base = false;
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("base") {
                    is_base = true;
                    Ok(())
                } else {
                    Err(meta.error("unknown `shape` option; expected `base`"))
                }
            })?;

            if !is_base {
                continue;
            }
            if found.is_some() {
                return Err(syn::Error::new_spanned(attr, "only one field can be `#[shape(base)]`"));
            }
            found = Some(match &field.ident {
                Some(name) => Member::Named(name.clone()),
                None => Member::Unnamed(Index::from(index)),
            });
        }
    }

    Ok(found)
}

fn reject_shape_attrs(fields: &Fields, kind: &str) -> syn::Result<()> {
    for field in fields {
        if let Some(attr) = field.attrs.iter().find(|attr| is_shape_attr(attr)) {
            return Err(syn::Error::new_spanned(
                attr,
                format!("`#[shape(base)]` is not supported on {}", kind),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_struct_has_no_extends() {
        let input: DeriveInput = syn::parse_quote! { struct Dot; };
        let out = derive_shape(&input).unwrap().to_string();
        assert!(out.contains("resolve !"));
        assert!(!out.contains("Extends"));
    }

    #[test]
    fn test_base_field_named_and_tuple() {
        let named: DeriveInput = syn::parse_quote! {
            struct Husky { name: String, #[shape(base)] base: ShapeBase }
        };
        assert!(derive_shape(&named).unwrap().to_string().contains("& self . base"));

        let tuple: DeriveInput = syn::parse_quote! {
            struct Tagged(u8, #[shape(base)] ShapeBase);
        };
        assert!(derive_shape(&tuple).unwrap().to_string().contains("& self . 1"));
    }

    #[test]
    fn test_rejections() {
        let generic: DeriveInput = syn::parse_quote! { struct Wrap<T>(T); };
        assert!(derive_shape(&generic).is_err());

        let twice: DeriveInput = syn::parse_quote! {
            struct Twice { #[shape(base)] a: ShapeBase, #[shape(base)] b: ShapeBase }
        };
        assert!(derive_shape(&twice).is_err());

        let unknown: DeriveInput = syn::parse_quote! {
            struct Odd { #[shape(root)] a: ShapeBase }
        };
        assert!(derive_shape(&unknown).is_err());

        let on_enum: DeriveInput = syn::parse_quote! {
            enum Either { Left(#[shape(base)] ShapeBase) }
        };
        assert!(derive_shape(&on_enum).is_err());
    }
}
