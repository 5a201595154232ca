//! VM translator for the `Nand2Tetris` stack machine.
//!
//! Translates Hack VM commands (`.vm`) into Hack symbolic assembly (`.asm`).
//!
//! # Architecture
//!
//! - [`parser`]: classifies each VM command line into its kind and arguments.
//! - [`code_writer`]: stateful assembly code generation for arithmetic, memory access, branching,
//!   and function call/return.
//! - [`driver`]: wires the parser and code writer together across one or many input files.
//!
//! # Example
//!
//! ```rust
//! use vmtranslator::driver::{translate, VmFile};
//!
//! let lines: Vec<String> = vec!["push constant 7".to_string(), "push constant 8".to_string(), "add".to_string()];
//! let file = VmFile { short_name: "Add", lines: &lines };
//! let mut out = Vec::new();
//! translate(&[file], false, &mut out).unwrap();
//! assert!(String::from_utf8(out).unwrap().contains("M=D+M"));
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod code_writer;
pub mod driver;
pub mod parser;

pub use code_writer::{CodeWriter, Segment};
pub use driver::translate;
pub use parser::{Command, CommandType, Parser};
