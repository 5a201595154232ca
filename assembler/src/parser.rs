//! Parser module for Hack assembly language
//!
//! Provides zero-copy parsing with performance optimizations:
//! - Byte-level comment detection for speed
//! - Manual whitespace trimming to avoid allocations
//! - Aggressive inlining for hot paths

use hack_common::clean::clean_asm_line;
use hack_common::{HackError, Result};

#[derive(Debug, PartialEq, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // Command suffix is intentional and clear
pub enum CommandType {
    /// @Xxx where Xxx is either a symbol or a decimal number
    ACommand,
    /// dest=comp;jump
    CCommand,
    /// (Xxx) where Xxx is a symbol
    LCommand,
}

/// Parser for assembly lines with zero-copy string slicing.
///
/// `clean_asm_line` does the comment-stripping and whitespace-removal (Hack assembly carries no
/// significant whitespace at all), so everything this type sees afterward is already free of
/// comments and blank lines; it only has to classify and slice.
pub struct ParserLines<'a> {
    path: &'a str,
    lines: std::iter::Enumerate<std::slice::Iter<'a, String>>,
    current_line: String,
    current_line_no: usize,
    current_command_type: Option<CommandType>,
}

impl<'a> ParserLines<'a> {
    /// Creates a new parser from a slice of lines, tagged with `path` for error diagnostics.
    #[inline]
    #[must_use]
    pub fn new(path: &'a str, lines: &'a [String]) -> Self {
        Self {
            path,
            lines: lines.iter().enumerate(),
            current_line: String::new(),
            current_line_no: 0,
            current_command_type: None,
        }
    }

    /// Creates a new parser from a slice of lines with no path context (used by tests and the
    /// library's own doctest).
    #[inline]
    #[must_use]
    pub fn from_lines(lines: &'a [String]) -> Self {
        Self::new("<memory>", lines)
    }

    /// 1-based line number of the line last returned by [`Self::advance`].
    #[inline]
    #[must_use]
    pub fn current_line_no(&self) -> usize {
        self.current_line_no
    }

    /// Advances to the next valid command, skipping comments and blank lines.
    ///
    /// Returns `Ok(false)` once the input is exhausted. Fails if a line classifies as an
    /// A-instruction or label with an empty symbol (`@` or `()` alone).
    pub fn advance(&mut self) -> Result<bool> {
        for (idx, line) in self.lines.by_ref() {
            let Some(cleaned) = clean_asm_line(line) else {
                continue;
            };

            self.current_line_no = idx + 1;
            self.current_command_type = Some(Self::classify_command(&cleaned));

            if matches!(
                self.current_command_type,
                Some(CommandType::ACommand | CommandType::LCommand)
            ) && cleaned.len() <= 2
            {
                return Err(HackError::InvalidInstruction {
                    path: self.path.to_string(),
                    line: self.current_line_no,
                    text: cleaned,
                });
            }

            self.current_line = cleaned;
            return Ok(true);
        }

        self.current_command_type = None;
        Ok(false)
    }

    /// Classifies command type based on first character
    #[inline]
    fn classify_command(line: &str) -> CommandType {
        match line.as_bytes()[0] {
            b'@' => CommandType::ACommand,
            b'(' => CommandType::LCommand,
            _ => CommandType::CCommand,
        }
    }

    /// Returns the current command type
    #[inline]
    pub fn command_type(&self) -> Result<CommandType> {
        self.current_command_type.ok_or_else(|| self.state_error())
    }

    /// Returns the symbol from A-command or L-command
    ///
    /// # Errors
    /// Returns error if called on C-command or if no command is available
    #[inline]
    pub fn symbol(&self) -> Result<&str> {
        match self.current_command_type {
            Some(CommandType::ACommand) => Ok(&self.current_line[1..]),
            Some(CommandType::LCommand) => {
                let len = self.current_line.len();
                Ok(&self.current_line[1..len - 1])
            }
            Some(CommandType::CCommand) => Err(self.state_error()),
            None => Err(self.state_error()),
        }
    }

    /// Returns the dest part of a C-command. Empty string if no dest part exists.
    #[inline]
    pub fn dest(&self) -> Result<Option<&str>> {
        match self.current_command_type {
            Some(CommandType::CCommand) => Ok(Some(
                self.current_line
                    .find('=')
                    .map_or("", |pos| &self.current_line[..pos]),
            )),
            Some(_) => Ok(None),
            None => Err(self.state_error()),
        }
    }

    /// Returns the comp part of a C-command
    #[inline]
    pub fn comp(&self) -> Result<Option<&str>> {
        match self.current_command_type {
            Some(CommandType::CCommand) => {
                let start = self.current_line.find('=').map_or(0, |pos| pos + 1);
                let end = self
                    .current_line
                    .find(';')
                    .unwrap_or(self.current_line.len());
                Ok(Some(&self.current_line[start..end]))
            }
            Some(_) => Ok(None),
            None => Err(self.state_error()),
        }
    }

    /// Returns the jump part of a C-command. Empty string if no jump part exists.
    #[inline]
    pub fn jump(&self) -> Result<Option<&str>> {
        match self.current_command_type {
            Some(CommandType::CCommand) => Ok(Some(
                self.current_line
                    .find(';')
                    .map_or("", |pos| &self.current_line[pos + 1..]),
            )),
            Some(_) => Ok(None),
            None => Err(self.state_error()),
        }
    }

    fn state_error(&self) -> HackError {
        HackError::InvalidInstruction {
            path: self.path.to_string(),
            line: self.current_line_no,
            text: self.current_line.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_classification() {
        assert_eq!(ParserLines::classify_command("@100"), CommandType::ACommand);
        assert_eq!(
            ParserLines::classify_command("(LOOP)"),
            CommandType::LCommand
        );
        assert_eq!(ParserLines::classify_command("D=M"), CommandType::CCommand);
    }

    #[test]
    fn test_parser_advance() {
        let lines = vec![
            "// comment".to_string(),
            String::new(),
            "@100".to_string(),
            "D=M // inline comment".to_string(),
        ];
        let mut parser = ParserLines::from_lines(&lines);

        assert!(parser.advance().unwrap());
        assert_eq!(parser.command_type().unwrap(), CommandType::ACommand);
        assert_eq!(parser.symbol().unwrap(), "100");
        assert_eq!(parser.current_line_no(), 3);

        assert!(parser.advance().unwrap());
        assert_eq!(parser.command_type().unwrap(), CommandType::CCommand);
        assert_eq!(parser.dest().unwrap(), Some("D"));
        assert_eq!(parser.comp().unwrap(), Some("M"));

        assert!(!parser.advance().unwrap());
    }

    #[test]
    fn test_c_command_parsing() {
        let lines = vec!["MD=D+1;JMP".to_string()];
        let mut parser = ParserLines::from_lines(&lines);
        parser.advance().unwrap();

        assert_eq!(parser.dest().unwrap(), Some("MD"));
        assert_eq!(parser.comp().unwrap(), Some("D+1"));
        assert_eq!(parser.jump().unwrap(), Some("JMP"));
    }

    #[test]
    fn test_c_command_no_dest() {
        let lines = vec!["D+1;JMP".to_string()];
        let mut parser = ParserLines::from_lines(&lines);
        parser.advance().unwrap();

        assert_eq!(parser.dest().unwrap(), Some(""));
        assert_eq!(parser.comp().unwrap(), Some("D+1"));
        assert_eq!(parser.jump().unwrap(), Some("JMP"));
    }

    #[test]
    fn test_c_command_no_jump() {
        let lines = vec!["D=D+1".to_string()];
        let mut parser = ParserLines::from_lines(&lines);
        parser.advance().unwrap();

        assert_eq!(parser.dest().unwrap(), Some("D"));
        assert_eq!(parser.comp().unwrap(), Some("D+1"));
        assert_eq!(parser.jump().unwrap(), Some(""));
    }

    #[test]
    fn test_l_command_parsing() {
        let lines = vec!["(LOOP)".to_string()];
        let mut parser = ParserLines::from_lines(&lines);
        parser.advance().unwrap();

        assert_eq!(parser.command_type().unwrap(), CommandType::LCommand);
        assert_eq!(parser.symbol().unwrap(), "LOOP");
    }

    #[test]
    fn test_whitespace_handling() {
        let lines = vec!["   @ 100   ".to_string(), "  D = M  // comment  ".to_string()];
        let mut parser = ParserLines::from_lines(&lines);

        assert!(parser.advance().unwrap());
        assert_eq!(parser.symbol().unwrap(), "100");

        assert!(parser.advance().unwrap());
        assert_eq!(parser.dest().unwrap(), Some("D"));
    }

    #[test]
    fn test_empty_a_instruction_is_fatal() {
        let lines = vec!["@".to_string()];
        let mut parser = ParserLines::from_lines(&lines);
        assert!(parser.advance().is_err());
    }

    #[test]
    fn test_empty_label_is_fatal() {
        let lines = vec!["()".to_string()];
        let mut parser = ParserLines::from_lines(&lines);
        assert!(parser.advance().is_err());
    }
}
