//! Response body handling.
//!
//! Every operation names a [`ResponseFormat`] that turns the raw body of a
//! successful response into its output: [`JsonFormat`] for data operations,
//! [`EmptyFormat`] for operations that return nothing.

mod format;

pub use format::{EmptyFormat, JsonFormat, ResponseFormat};
