//! The two-pass assembly algorithm.
//!
//! Pass 1 walks the cleaned source once, recording the ROM address of every label without
//! emitting any code. Pass 2 walks it again, resolving symbols and emitting one binary line per
//! A- or C-instruction.

use crate::code;
use crate::parser::{CommandType, ParserLines};
use crate::symbol_table::SymbolTable;
use hack_common::{HackError, Result};

/// Highest RAM address a Hack program may use for its own variables before running into the
/// memory-mapped screen buffer at 16384.
const MAX_VARIABLE_ADDRESS: u16 = 16383;

/// Highest value an A-instruction's 15-bit address field can hold without truncation.
const MAX_A_VALUE: u16 = 0x7FFF;

/// Assembles `lines` (already split, one source line per entry) into Hack machine code, one
/// binary string per instruction. `path` is carried into diagnostics only.
pub fn assemble(path: &str, lines: &[String]) -> Result<Vec<String>> {
    let mut symbol_table = SymbolTable::new();
    first_pass(path, lines, &mut symbol_table)?;
    second_pass(path, lines, &mut symbol_table)
}

/// Pass 1: binds every label to the ROM address of the instruction that follows it.
pub fn first_pass(path: &str, lines: &[String], symbol_table: &mut SymbolTable) -> Result<()> {
    let mut rom_address: u16 = 0;
    let mut parser = ParserLines::new(path, lines);

    while parser.advance()? {
        match parser.command_type()? {
            CommandType::LCommand => {
                let symbol = parser.symbol()?;
                symbol_table.add_entry(symbol, rom_address);
            }
            CommandType::ACommand | CommandType::CCommand => {
                rom_address += 1;
            }
        }
    }

    Ok(())
}

/// Pass 2: resolves every symbol and encodes every instruction.
pub fn second_pass(
    path: &str,
    lines: &[String],
    symbol_table: &mut SymbolTable,
) -> Result<Vec<String>> {
    let mut ram_address: u16 = 16;
    let mut parser = ParserLines::new(path, lines);
    let mut output = Vec::new();

    while parser.advance()? {
        match parser.command_type()? {
            CommandType::ACommand => {
                let symbol = parser.symbol()?;
                let address = if let Ok(value) = symbol.parse::<u16>() {
                    if value > MAX_A_VALUE {
                        log::warn!(
                            "{path}:{}: literal address {value} exceeds the 15-bit A-instruction \
                             range; truncating to 15 bits",
                            parser.current_line_no()
                        );
                    }
                    value
                } else {
                    let addr = symbol_table.get_or_insert(symbol, &mut ram_address);
                    if addr > MAX_VARIABLE_ADDRESS {
                        log::warn!(
                            "{path}:{}: variable {symbol} allocated at {addr}, past the start of \
                             the screen map; truncating to 15 bits",
                            parser.current_line_no()
                        );
                    }
                    addr
                };
                output.push(code::encode_a_instruction(address & 0x7FFF));
            }
            CommandType::CCommand => {
                let dest = parser.dest()?.unwrap_or_default();
                let comp = parser.comp()?.unwrap_or_default();
                let jump = parser.jump()?.unwrap_or_default();

                let instruction = code::encode_c_instruction(dest, comp, jump).map_err(|e| {
                    if let HackError::BadField { field, text } = e {
                        HackError::InvalidInstruction {
                            path: path.to_string(),
                            line: parser.current_line_no(),
                            text: format!("invalid {field} mnemonic {text:?}"),
                        }
                    } else {
                        e
                    }
                })?;
                output.push(instruction);
            }
            CommandType::LCommand => {}
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_resolves_labels_and_variables() {
        let lines = vec![
            "(LOOP)".to_string(),
            "@i".to_string(),
            "D=M".to_string(),
            "@LOOP".to_string(),
            "0;JMP".to_string(),
        ];

        let out = assemble("test.asm", &lines).unwrap();
        assert_eq!(out.len(), 4);
        assert_eq!(out[0], "0000000000010000"); // @i -> RAM[16]
        assert_eq!(out[2], "0000000000000000"); // @LOOP -> ROM[0]
        assert_eq!(out[3], "1110101010000111"); // 0;JMP
    }

    #[test]
    fn test_assemble_rejects_bad_mnemonic() {
        let lines = vec!["D=FOO".to_string()];
        let err = assemble("bad.asm", &lines).unwrap_err();
        assert!(matches!(err, HackError::InvalidInstruction { line: 1, .. }));
    }

    #[test]
    fn test_assemble_numeric_a_instruction() {
        let lines = vec!["@16384".to_string()];
        let out = assemble("screen.asm", &lines).unwrap();
        assert_eq!(out[0], "0100000000000000");
    }

    #[test]
    fn test_literal_address_past_15_bits_is_truncated() {
        let lines = vec!["@40000".to_string()];
        let out = assemble("overflow.asm", &lines).unwrap();
        // 40000 & 0x7FFF == 7232
        assert_eq!(out[0], code::encode_a_instruction(40000 & 0x7FFF));
    }
}
