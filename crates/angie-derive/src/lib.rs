//! `#[derive(Record)]` for angie.
//!
//! Implements `angie::Record` for structs with named fields. Each field's
//! declared type is mapped to a `FieldKind`:
//!
//! | Rust type         | `FieldKind`    |
//! |-------------------|----------------|
//! | `i32`             | `Int32`        |
//! | `i64`             | `Int64`        |
//! | `String`          | `Text`         |
//! | `Option<String>`  | `OptionalText` |
//! | `DateTime<Utc>`   | `Timestamp`    |
//! | `Uuid`            | `Uuid`         |
//! | anything else     | `Unsupported`  |
//!
//! Matching is on the last path segment, so `chrono::DateTime<chrono::Utc>`
//! and `std::string::String` are recognised. Type aliases are not.
//!
//! Mark a field `#[angie(skip)]` to hide it from the generator entirely.
//! `construct()` delegates to `Default`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
    parse_macro_input, Attribute, Data, DeriveInput, Fields, GenericArgument, Ident,
    PathArguments, Type,
};

#[proc_macro_derive(Record, attributes(angie))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Declared kind of one field, mirroring `angie::FieldKind`.
enum Kind {
    Int32,
    Int64,
    Text,
    OptionalText,
    Timestamp,
    Uuid,
    Unsupported(String),
}

struct FieldInfo {
    ident: Ident,
    name: String,
    kind: Kind,
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let record = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields: Vec<&syn::Field> = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => named.named.iter().collect(),
            Fields::Unit => Vec::new(),
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    record,
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                record,
                "Record can only be derived for structs",
            ))
        }
    };

    let mut infos = Vec::new();
    for field in fields {
        if is_skipped(&field.attrs)? {
            continue;
        }
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        infos.push(FieldInfo {
            name: ident.unraw().to_string(),
            ident,
            kind: classify(&field.ty),
        });
    }

    let descriptors = infos.iter().map(|info| {
        let name = &info.name;
        let kind = kind_tokens(&info.kind);
        quote! { ::angie::FieldDescriptor::new(#name, #kind) }
    });

    let ref_arms = infos.iter().map(|info| {
        let name = &info.name;
        let ident = &info.ident;
        let value = match variant(&info.kind) {
            Some(variant) => quote! { ::angie::FieldRef::#variant(&self.#ident) },
            None => quote! { ::angie::FieldRef::Unsupported },
        };
        quote! { #name => ::core::option::Option::Some(#value), }
    });

    let mut_arms = infos.iter().map(|info| {
        let name = &info.name;
        let ident = &info.ident;
        let value = match variant(&info.kind) {
            Some(variant) => quote! { ::angie::FieldMut::#variant(&mut self.#ident) },
            None => quote! { ::angie::FieldMut::Unsupported },
        };
        quote! { #name => ::core::option::Option::Some(#value), }
    });

    Ok(quote! {
        impl #impl_generics ::angie::Record for #record #ty_generics #where_clause {
            fn construct() -> ::core::result::Result<Self, ::angie::GenerateError> {
                ::core::result::Result::Ok(<Self as ::core::default::Default>::default())
            }

            fn descriptors() -> ::std::vec::Vec<::angie::FieldDescriptor> {
                ::std::vec![#(#descriptors),*]
            }

            fn field(&self, name: &str) -> ::core::option::Option<::angie::FieldRef<'_>> {
                match name {
                    #(#ref_arms)*
                    _ => ::core::option::Option::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> ::core::option::Option<::angie::FieldMut<'_>> {
                match name {
                    #(#mut_arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}

/// Whether the field carries `#[angie(skip)]`.
fn is_skipped(attrs: &[Attribute]) -> syn::Result<bool> {
    let mut skip = false;
    for attr in attrs {
        if !attr.path().is_ident("angie") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown angie attribute, expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

fn classify(ty: &Type) -> Kind {
    let unsupported = || Kind::Unsupported(quote!(#ty).to_string().replace(' ', ""));

    let Type::Path(path) = ty else {
        return unsupported();
    };
    if path.qself.is_some() {
        return unsupported();
    }
    let Some(segment) = path.path.segments.last() else {
        return unsupported();
    };

    match (segment.ident.to_string().as_str(), &segment.arguments) {
        ("i32", PathArguments::None) => Kind::Int32,
        ("i64", PathArguments::None) => Kind::Int64,
        ("String", PathArguments::None) => Kind::Text,
        ("Uuid", PathArguments::None) => Kind::Uuid,
        ("Option", args) if single_type_arg_is(args, "String") => Kind::OptionalText,
        ("DateTime", args) if single_type_arg_is(args, "Utc") => Kind::Timestamp,
        _ => unsupported(),
    }
}

/// Whether `args` is `<T>` where the last segment of `T` is `expected`.
fn single_type_arg_is(args: &PathArguments, expected: &str) -> bool {
    let PathArguments::AngleBracketed(args) = args else {
        return false;
    };
    if args.args.len() != 1 {
        return false;
    }
    match args.args.first() {
        Some(GenericArgument::Type(Type::Path(inner))) => inner
            .path
            .segments
            .last()
            .is_some_and(|s| s.ident == expected && s.arguments.is_none()),
        _ => false,
    }
}

fn variant(kind: &Kind) -> Option<Ident> {
    let name = match kind {
        Kind::Int32 => "Int32",
        Kind::Int64 => "Int64",
        Kind::Text => "Text",
        Kind::OptionalText => "OptionalText",
        Kind::Timestamp => "Timestamp",
        Kind::Uuid => "Uuid",
        Kind::Unsupported(_) => return None,
    };
    Some(format_ident!("{}", name))
}

fn kind_tokens(kind: &Kind) -> TokenStream2 {
    match (kind, variant(kind)) {
        (Kind::Unsupported(type_name), _) => {
            quote! { ::angie::FieldKind::Unsupported(#type_name) }
        }
        (_, Some(variant)) => quote! { ::angie::FieldKind::#variant },
        (_, None) => quote! { ::angie::FieldKind::Unsupported("") },
    }
}
