//! Classification of cleaned VM command lines.
//!
//! Unlike the assembler's parser, there is no line-by-line state machine here: each VM line is a
//! self-contained command, so parsing is a straightforward split-and-match.

use hack_common::clean::clean_vm_line;
use hack_common::{HackError, Result};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CommandType {
    Arithmetic,
    Push,
    Pop,
    Label,
    Goto,
    IfGoto,
    Function,
    Call,
    Return,
}

const ARITHMETIC_COMMANDS: &[&str] = &["add", "sub", "neg", "eq", "gt", "lt", "and", "or", "not"];

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Command {
    pub kind: CommandType,
    /// The command mnemonic itself for `Arithmetic`, the segment name for `Push`/`Pop`, the
    /// label/function name otherwise. Empty for `Return`.
    pub arg1: String,
    /// The index or local/argument count. Unused (`0`) for commands with no second argument.
    pub arg2: i32,
}

/// Splits every non-blank, non-comment line of `lines` into a classified [`Command`].
pub struct Parser<'a> {
    path: &'a str,
    lines: std::iter::Enumerate<std::slice::Iter<'a, String>>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(path: &'a str, lines: &'a [String]) -> Self {
        Self {
            path,
            lines: lines.iter().enumerate(),
        }
    }

    /// Returns the next classified command, or `Ok(None)` once the input is exhausted.
    pub fn next_command(&mut self) -> Result<Option<Command>> {
        for (idx, raw) in self.lines.by_ref() {
            let Some(cleaned) = clean_vm_line(raw) else {
                continue;
            };
            let tokens: Vec<&str> = cleaned.split(' ').collect();
            return Self::classify(self.path, idx + 1, &tokens).map(Some);
        }
        Ok(None)
    }

    fn classify(path: &str, line_no: usize, tokens: &[&str]) -> Result<Command> {
        let bad_command = || HackError::InvalidCommand {
            path: path.to_string(),
            line: line_no,
            tokens: tokens.iter().map(|s| (*s).to_string()).collect(),
        };

        match tokens {
            [cmd] if ARITHMETIC_COMMANDS.contains(cmd) => Ok(Command {
                kind: CommandType::Arithmetic,
                arg1: (*cmd).to_string(),
                arg2: 0,
            }),
            ["return"] => Ok(Command {
                kind: CommandType::Return,
                arg1: String::new(),
                arg2: 0,
            }),
            ["push", segment, index] => Ok(Command {
                kind: CommandType::Push,
                arg1: (*segment).to_string(),
                arg2: parse_index(index).ok_or_else(bad_command)?,
            }),
            ["pop", segment, index] => Ok(Command {
                kind: CommandType::Pop,
                arg1: (*segment).to_string(),
                arg2: parse_index(index).ok_or_else(bad_command)?,
            }),
            ["label", name] => Ok(Command {
                kind: CommandType::Label,
                arg1: (*name).to_string(),
                arg2: 0,
            }),
            ["goto", name] => Ok(Command {
                kind: CommandType::Goto,
                arg1: (*name).to_string(),
                arg2: 0,
            }),
            ["if-goto", name] => Ok(Command {
                kind: CommandType::IfGoto,
                arg1: (*name).to_string(),
                arg2: 0,
            }),
            ["function", name, count] => Ok(Command {
                kind: CommandType::Function,
                arg1: (*name).to_string(),
                arg2: parse_index(count).ok_or_else(bad_command)?,
            }),
            ["call", name, count] => Ok(Command {
                kind: CommandType::Call,
                arg1: (*name).to_string(),
                arg2: parse_index(count).ok_or_else(bad_command)?,
            }),
            _ => Err(bad_command()),
        }
    }
}

fn parse_index(token: &str) -> Option<i32> {
    token.parse().ok()
}
