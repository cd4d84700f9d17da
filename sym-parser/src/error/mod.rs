pub mod kind;

pub use sym_error::Error;
