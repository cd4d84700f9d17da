use proc_macro2::Span;
use syn::{Attribute, Expr, Result};

/// The tags of an `#[error(...)]` attribute.
pub struct Tags {
    pub message: Expr,
    pub labels: Option<Expr>,
    pub help: Option<Expr>,
}

impl Tags {
    /// Finds the `error` attribute among `attrs` and reads its tags. `span` is used to report a
    /// missing attribute.
    pub fn from_attrs(span: Span, attrs: &[Attribute]) -> Result<Self> {
        let attr = attrs.iter()
            .find(|attr| attr.path().is_ident("error"))
            .ok_or_else(|| syn::Error::new(span, "missing `#[error(...)]` attribute"))?;

        let (mut message, mut labels, mut help) = (None, None, None);
        attr.parse_nested_meta(|meta| {
            let slot = if meta.path.is_ident("message") {
                &mut message
            } else if meta.path.is_ident("labels") {
                &mut labels
            } else if meta.path.is_ident("help") {
                &mut help
            } else {
                return Err(meta.error("unknown tag, expected `message`, `labels`, or `help`"));
            };

            if slot.is_some() {
                return Err(meta.error("this tag is given more than once"));
            }
            *slot = Some(meta.value()?.parse::<Expr>()?);
            Ok(())
        })?;

        let message = message.ok_or_else(|| {
            syn::Error::new_spanned(attr, "the `error` attribute needs a `message` tag")
        })?;
        Ok(Self { message, labels, help })
    }
}
