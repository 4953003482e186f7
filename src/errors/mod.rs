//! Error types and error handling for the front end.
//!
//! The lexer itself never fails: characters it does not recognise come out as
//! `unknown` tokens. The types here are used where such a token has to be
//! rejected, and by the command-line driver. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for rejected input and driver failures
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
