//! Line-cleanup rules shared by both parsers.
//!
//! Strips `//` comments and decides what's left of each source line. The assembler and the VM
//! translator agree on comment stripping but differ on whitespace: the assembler has no use for
//! whitespace at all, while the VM translator's commands are token-separated and need exactly one
//! space between tokens preserved.

/// Strips a trailing `//...` comment, using a byte scan rather than `str::find` for the common
/// case of short lines.
#[inline]
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for i in 0..bytes.len().saturating_sub(1) {
        if bytes[i] == b'/' && bytes[i + 1] == b'/' {
            return &line[..i];
        }
    }
    line
}

/// Cleans one line for the assembler: strips comments, then removes *all* whitespace.
///
/// Returns `None` if nothing is left once comments and whitespace are gone.
#[inline]
#[must_use]
pub fn clean_asm_line(line: &str) -> Option<String> {
    let stripped = strip_comment(line);
    let cleaned: String = stripped.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

/// Cleans one line for the VM translator: strips comments, trims the ends, and collapses internal
/// whitespace runs to a single space so `split(' ')` yields exactly the command's tokens.
///
/// Returns `None` if nothing is left once comments and whitespace are gone.
#[inline]
#[must_use]
pub fn clean_vm_line(line: &str) -> Option<String> {
    let stripped = strip_comment(line).trim();
    if stripped.is_empty() {
        return None;
    }
    let mut cleaned = String::with_capacity(stripped.len());
    let mut last_was_space = false;
    for ch in stripped.chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                cleaned.push(' ');
            }
            last_was_space = true;
        } else {
            cleaned.push(ch);
            last_was_space = false;
        }
    }
    Some(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("@100 // comment"), "@100 ");
        assert_eq!(strip_comment("D=M"), "D=M");
        assert_eq!(strip_comment("// only comment"), "");
    }

    #[test]
    fn test_clean_asm_line_removes_all_whitespace() {
        assert_eq!(clean_asm_line("  @ 100  // hi"), Some("@100".to_string()));
        assert_eq!(clean_asm_line("   // just a comment"), None);
        assert_eq!(clean_asm_line(""), None);
    }

    #[test]
    fn test_clean_vm_line_collapses_whitespace() {
        assert_eq!(
            clean_vm_line("  push   constant   7 // load 7"),
            Some("push constant 7".to_string())
        );
        assert_eq!(clean_vm_line("add"), Some("add".to_string()));
        assert_eq!(clean_vm_line("  // nothing here"), None);
    }
}
