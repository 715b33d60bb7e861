extern crate proc_macro;
use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Error, Fields, LitStr, ext::IdentExt, parse_macro_input, parse_quote,
};

#[proc_macro_derive(FromValue)]
pub fn derive_from_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    // TODO: support enums, e.g. unit variants from strings
    let schema = if let Data::Struct(data) = &input.data {
        data
    } else {
        return Error::new_spanned(&input, "FromValue can only be derived for structs")
            .to_compile_error()
            .into();
    };

    let fields = if let Fields::Named(data) = &schema.fields {
        data
    } else {
        return Error::new_spanned(
            &input,
            "FromValue can only be derived for structs with named fields",
        )
        .to_compile_error()
        .into();
    };

    let struct_name = &input.ident;

    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::json_reader::FromValue));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // (field ident, local slot ident, JSON key, field type)
    let members: Vec<_> = fields
        .named
        .iter()
        .filter_map(|f| {
            let ident = f.ident.as_ref()?;
            let slot = format_ident!("__field_{}", ident.unraw());
            let key = LitStr::new(&ident.unraw().to_string(), ident.span());
            Some((ident, slot, key, &f.ty))
        })
        .collect();

    let slot_decls = members.iter().map(|(_, slot, _, ty)| {
        quote! {
            let mut #slot: ::core::option::Option<#ty> = ::core::option::Option::None;
        }
    });

    let member_branches = members.iter().map(|(_, slot, key, ty)| {
        quote! {
            #key => {
                #slot = ::core::option::Option::Some(
                    <#ty as ::json_reader::FromValue>::from_value(__value)
                        .map_err(|err| err.in_field(#key))?,
                );
            }
        }
    });

    let constructor_fields = members.iter().map(|(ident, slot, key, ty)| {
        quote! {
            #ident: match #slot {
                ::core::option::Option::Some(value) => value,
                ::core::option::Option::None => <#ty as ::json_reader::FromValue>::missing_field(#key)?,
            }
        }
    });

    let expanded = quote! {
        impl #impl_generics ::json_reader::FromValue for #struct_name #ty_generics #where_clause {
            fn from_value(
                value: ::json_reader::Value,
            ) -> ::core::result::Result<Self, ::json_reader::ConvertError> {
                let __object = match value {
                    ::json_reader::Value::Object(object) => object,
                    other => {
                        return ::core::result::Result::Err(::json_reader::ConvertError::TypeMismatch {
                            expected: "object",
                            found: other.type_name(),
                        });
                    }
                };

                #( #slot_decls )*

                for (__key, __value) in __object {
                    match __key.as_str() {
                        #( #member_branches )*
                        __unknown => {
                            return ::core::result::Result::Err(
                                ::json_reader::ConvertError::UnknownField(__unknown.to_string()),
                            );
                        }
                    }
                }

                ::core::result::Result::Ok(#struct_name {
                    #( #constructor_fields ),*
                })
            }
        }
    };

    expanded.into()
}
