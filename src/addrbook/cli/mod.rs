//! Command-line client. Parses arguments, calls the API, prints results.
//!
//! Nothing here decides what a valid contact is; that lives in the library.

pub mod args;
pub mod print;
