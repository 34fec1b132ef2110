//! Input formats and their parse errors
//!
//! An [`InputFormat`] turns one line of user text into an encoded [`Srgb`](crate::Srgb).

mod error;
mod input_format;

pub use error::ParseColorError;
pub use input_format::InputFormat;
