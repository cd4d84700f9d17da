use crate::tags::Tags;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Result};

/// A `let` statement binding every named field of `self` by reference.
fn bind_fields(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(name, "`ErrorKind` can only be derived for structs"));
    };

    match &data.fields {
        Fields::Named(fields) => {
            let names = fields.named.iter().map(|field| &field.ident);
            Ok(quote! {
                #[allow(unused_variables)]
                let #name { #(#names),* } = self;
            })
        },
        Fields::Unnamed(_) => Err(syn::Error::new_spanned(
            name,
            "`ErrorKind` cannot be derived for tuple structs",
        )),
        Fields::Unit => Ok(TokenStream::new()),
    }
}

pub fn error_kind(input: &DeriveInput) -> Result<TokenStream> {
    let name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "error kinds cannot be generic"));
    }

    let Tags { message, labels, help } = Tags::from_attrs(name.span(), &input.attrs)?;
    let bind = bind_fields(input)?;

    let labels = match labels {
        Some(labels) => quote! {
            (#labels).into_iter().map(|label| label.to_string()).collect()
        },
        None => quote! { Vec::new() },
    };
    let help = match help {
        Some(help) => quote! { Some((#help).to_string()) },
        None => quote! { None },
    };

    Ok(quote! {
        impl sym_error::ErrorKind for #name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn message(&self) -> String {
                #bind
                (#message).to_string()
            }

            fn labels(&self) -> Vec<String> {
                #bind
                #labels
            }

            fn help(&self) -> Option<String> {
                #bind
                #help
            }
        }
    })
}
