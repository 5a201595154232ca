//! Code generation module for Hack assembly language
//!
//! Translates assembly mnemonics to binary machine code using perfect hash functions (PHF).
//! PHF provides O(1) lookup with zero runtime overhead - the hash table is computed at compile time.
//!
//! # Performance
//! - All lookups use PHF maps: O(1) compile-time perfect hashing
//! - String formatting uses standard library (optimized by LLVM)
//! - Hot paths are inlined for better performance

use hack_common::{HackError, Result};
use phf::phf_map;

/// Destination mnemonic to binary code mapping (3 bits)
///
/// Maps destination mnemonics to their 3-bit binary representation.
/// Empty string represents null destination.
static DEST_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "000",
    "M" => "001",
    "D" => "010",
    "MD" => "011",
    "A" => "100",
    "AM" => "101",
    "AD" => "110",
    "AMD" => "111",
};

/// Computation mnemonic to binary code mapping (7 bits: 1 bit 'a' + 6 bits 'cccccc')
///
/// Includes both a=0 (A register) and a=1 (M register) variants.
/// The first bit indicates which register to use: 0 for A, 1 for M.
static COMP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    // a=0 (A register operations)
    "0" => "0101010",
    "1" => "0111111",
    "-1" => "0111010",
    "D" => "0001100",
    "A" => "0110000",
    "!D" => "0001101",
    "!A" => "0110001",
    "-D" => "0001111",
    "-A" => "0110011",
    "D+1" => "0011111",
    "A+1" => "0110111",
    "D-1" => "0001110",
    "A-1" => "0110010",
    "D+A" => "0000010",
    "D-A" => "0010011",
    "A-D" => "0000111",
    "D&A" => "0000000",
    "D|A" => "0010101",

    // a=1 (M register operations)
    "M" => "1110000",
    "!M" => "1110001",
    "-M" => "1110011",
    "M+1" => "1110111",
    "M-1" => "1110010",
    "D+M" => "1000010",
    "D-M" => "1010011",
    "M-D" => "1000111",
    "D&M" => "1000000",
    "D|M" => "1010101",
};

/// Jump mnemonic to binary code mapping (3 bits)
///
/// Maps jump mnemonics to their 3-bit binary representation.
/// Empty string represents no jump.
static JUMP_MAP: phf::Map<&'static str, &'static str> = phf_map! {
    "" => "000",
    "JGT" => "001",
    "JEQ" => "010",
    "JGE" => "011",
    "JLT" => "100",
    "JNE" => "101",
    "JLE" => "110",
    "JMP" => "111",
};

/// Validates mnemonics for all three parts of a C-instruction.
///
/// # Example
/// ```
/// use assembler::code::validate_mnemonics;
/// let (d, c, j) = validate_mnemonics("D", "D+1", "JMP");
/// assert!(d && c && j);
/// ```
#[inline]
#[must_use]
pub fn validate_mnemonics(
    dest_mnemonic: &str,
    comp_mnemonic: &str,
    jump_mnemonic: &str,
) -> (bool, bool, bool) {
    (
        DEST_MAP.contains_key(dest_mnemonic),
        COMP_MAP.contains_key(comp_mnemonic),
        JUMP_MAP.contains_key(jump_mnemonic),
    )
}

/// Encodes a complete C-instruction, rejecting mnemonics that aren't in the Hack instruction set.
///
/// C-instruction format: 111accccccdddjjj (16 bits)
/// - 111: C-instruction prefix (3 bits)
/// - acccccc: computation (7 bits)
/// - ddd: destination (3 bits)
/// - jjj: jump (3 bits)
///
/// # Example
/// ```
/// use assembler::code::encode_c_instruction;
/// let instruction = encode_c_instruction("D", "D+1", "").unwrap();
/// assert_eq!(instruction, "1110011111010000");
/// ```
///
/// # Errors
/// Returns [`HackError::BadField`] naming whichever of dest/comp/jump isn't a recognized mnemonic.
#[inline]
pub fn encode_c_instruction(
    dest_mnemonic: &str,
    comp_mnemonic: &str,
    jump_mnemonic: &str,
) -> Result<String> {
    let (dest_ok, comp_ok, jump_ok) =
        validate_mnemonics(dest_mnemonic, comp_mnemonic, jump_mnemonic);

    if !comp_ok {
        return Err(HackError::BadField {
            field: "comp",
            text: comp_mnemonic.to_string(),
        });
    }
    if !dest_ok {
        return Err(HackError::BadField {
            field: "dest",
            text: dest_mnemonic.to_string(),
        });
    }
    if !jump_ok {
        return Err(HackError::BadField {
            field: "jump",
            text: jump_mnemonic.to_string(),
        });
    }

    Ok(format!(
        "111{}{}{}",
        COMP_MAP[comp_mnemonic], DEST_MAP[dest_mnemonic], JUMP_MAP[jump_mnemonic]
    ))
}

/// Encodes an A-instruction
///
/// A-instruction format: 0vvvvvvvvvvvvvvv (16 bits)
/// - 0: A-instruction prefix (1 bit)
/// - vvvvvvvvvvvvvvv: 15-bit address/value
///
/// # Example
/// ```
/// use assembler::code::encode_a_instruction;
/// let instruction = encode_a_instruction(100);
/// assert_eq!(instruction, "0000000001100100");
/// ```
#[inline]
#[must_use]
pub fn encode_a_instruction(address: u16) -> String {
    format!("{address:016b}")
}
