use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, GenericParam, Index, Member};

use crate::common::{StructuralArgs, field_count, type_seed};

/// #[derive(StructuralValue)] implements the contract field by field.
///
/// - equality: exact same type, every field equal under dispatch
/// - hash: per-type seed combined with every field's dispatched hash
/// - string: `Name { a: .., b: .. }`, `Name(.., ..)` or `Name`
///
/// With `#[structural(transparent)]` a single-field struct hashes and prints
/// as its field. Equality still requires the exact same type.
pub fn expand_derive_structural(mut input: DeriveInput) -> TokenStream2 {
    let args = match StructuralArgs::from_attrs(&input.attrs) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    let fields = match &input.data {
        Data::Struct(data) => data.fields.clone(),
        Data::Enum(_) | Data::Union(_) => {
            return syn::Error::new_spanned(
                &input.ident,
                "StructuralValue can only be derived for structs; implement it by hand for enums",
            )
            .to_compile_error();
        }
    };

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return syn::Error::new_spanned(
            lifetime,
            "StructuralValue cannot be derived for types with lifetime parameters",
        )
        .to_compile_error();
    }

    if args.transparent && field_count(&fields) != 1 {
        return syn::Error::new_spanned(
            &input.ident,
            "#[structural(transparent)] requires exactly one field",
        )
        .to_compile_error();
    }

    // Every type parameter must itself take part in dispatch
    let params: Vec<_> = input
        .generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(ty) => Some(ty.ident.clone()),
            _ => None,
        })
        .collect();
    let where_clause = input.generics.make_where_clause();
    for param in &params {
        where_clause
            .predicates
            .push(syn::parse_quote!(#param: ::flatval::Dynamic));
    }

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let members = members(&fields);

    let hash_body = if args.transparent {
        quote! { dispatch.hash_of(&self.#(#members)*) }
    } else {
        let seed = type_seed(&ident.to_string());
        quote! {
            ::flatval::HashCombiner::with_seed(#seed as i32)
                #(.add(dispatch.hash_of(&self.#members)))*
                .finish()
        }
    };

    let string_body = if args.transparent {
        quote! { dispatch.string_of(&self.#(#members)*) }
    } else {
        display_body(&ident.to_string(), &fields, &members)
    };

    quote! {
        #[allow(unused_variables)]
        impl #impl_generics ::flatval::StructuralValue for #ident #ty_generics #where_clause {
            fn equals(
                &self,
                other: &dyn ::flatval::Dynamic,
                dispatch: &::flatval::DispatchRegistry,
            ) -> bool {
                match ::flatval::Dynamic::as_any(other).downcast_ref::<Self>() {
                    ::core::option::Option::Some(other) => {
                        true #(&& dispatch.are_equal(&self.#members, &other.#members))*
                    }
                    ::core::option::Option::None => false,
                }
            }

            fn hash_code(&self, dispatch: &::flatval::DispatchRegistry) -> i32 {
                #hash_body
            }

            fn to_display_string(&self, dispatch: &::flatval::DispatchRegistry) -> ::std::string::String {
                #string_body
            }
        }
    }
}

fn members(fields: &Fields) -> Vec<Member> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .filter_map(|field| field.ident.clone().map(Member::Named))
            .collect(),
        Fields::Unnamed(unnamed) => (0..unnamed.unnamed.len())
            .map(|i| Member::Unnamed(Index::from(i)))
            .collect(),
        Fields::Unit => Vec::new(),
    }
}

fn display_body(name: &str, fields: &Fields, members: &[Member]) -> TokenStream2 {
    if members.is_empty() {
        return quote! { ::std::string::String::from(#name) };
    }

    let (labels, template): (Vec<String>, String) = match fields {
        Fields::Named(_) => (
            members
                .iter()
                .map(|member| match member {
                    Member::Named(field) => format!("{}: {{}}", field.unraw()),
                    Member::Unnamed(index) => format!("{}: {{}}", index.index),
                })
                .collect(),
            format!("{} {{{{ {{}} }}}}", name),
        ),
        _ => (members.iter().map(|_| String::from("{}")).collect(), format!("{}({{}})", name)),
    };
    quote! {
        let parts: ::std::vec::Vec<::std::string::String> = ::std::vec![
            #(::std::format!(#labels, dispatch.string_of(&self.#members))),*
        ];
        ::std::format!(#template, parts.join(", "))
    }
}
