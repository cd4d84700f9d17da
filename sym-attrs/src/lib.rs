mod expand;
mod tags;

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

/// Derives `sym_error::ErrorKind` for a struct with named fields or a unit struct.
///
/// The struct must carry an `error` attribute describing the error:
/// ```
/// use sym_attrs::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown variable `{}`", name),
///     labels = ["this variable"],
///     help = "define it before using it",
/// )]
/// pub struct UnknownVariable {
///     name: String,
/// }
/// ```
///
/// | Tag       | Required | Description                                                |
/// | --------- | -------- | ---------------------------------------------------------- |
/// | `message` | yes      | The message shown at the top of the report.                |
/// | `labels`  | no       | An array of label texts, attached to the spans in order.   |
/// | `help`    | no       | A hint describing how to fix the error.                    |
///
/// Tag values are expressions whose result implements [`ToString`]. The fields of the struct are
/// in scope by reference while they are evaluated.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    expand::error_kind(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
