//! Shared scaffolding for the Hack assembler and VM translator.
//!
//! Both tools clean source lines the same way (modulo whitespace handling), report errors through the
//! same typed hierarchy, and set up logging identically. Factoring that out here keeps the two
//! translation cores focused on their own grammar.

pub mod clean;
pub mod error;
pub mod fsutil;
pub mod logging;

pub use error::{HackError, Result};
