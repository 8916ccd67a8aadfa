//! Diagnostics for the Kiwi front end.
//!
//! A [`Diagnostic`] carries an [`ErrorCode`] for searchability, a message, and
//! labelled spans pointing at the offending tokens. Rendering to a terminal is
//! left to the embedding tool.

mod diagnostic;
mod error_code;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
