//! Ties the parser and code writer together for one or many input files.

use crate::code_writer::{CodeWriter, Segment};
use crate::parser::{Command, CommandType, Parser};
use hack_common::{HackError, Result};
use std::io::Write;

/// One `.vm` source file: its short name (for static-variable mangling and `setFileName`) and its
/// already-read, newline-split lines.
pub struct VmFile<'a> {
    pub short_name: &'a str,
    pub lines: &'a [String],
}

/// Translates `files` into assembly, writing to `out`. `emit_bootstrap` controls whether the
/// `SP=256; call Sys.init 0` prologue is written first: only a directory input (a full program)
/// gets the bootstrap, not a lone file, per the external-interfaces spec for this tool.
pub fn translate<W: Write>(files: &[VmFile], emit_bootstrap: bool, out: W) -> Result<()> {
    let mut writer = CodeWriter::new(out);

    if emit_bootstrap {
        writer.write_init().map_err(|e| HackError::io("<bootstrap>", e))?;
    }

    for file in files {
        writer.set_file_name(file.short_name);
        let mut parser = Parser::new(file.short_name, file.lines);
        while let Some(command) = parser.next_command()? {
            write_command(&mut writer, file.short_name, &command)?;
        }
    }

    writer
        .flush()
        .map_err(|e| HackError::io("<output>", e))
}

fn write_command<W: Write>(writer: &mut CodeWriter<W>, path: &str, command: &Command) -> Result<()> {
    let io_err = |e: std::io::Error| HackError::io(path.to_string(), e);

    match command.kind {
        CommandType::Arithmetic => writer.write_arithmetic(&command.arg1).map_err(io_err),
        CommandType::Push | CommandType::Pop => {
            let segment = Segment::parse(&command.arg1).ok_or_else(|| HackError::BadField {
                field: "segment",
                text: command.arg1.clone(),
            })?;
            if command.kind == CommandType::Push {
                writer.write_push(segment, command.arg2).map_err(io_err)
            } else {
                writer.write_pop(segment, command.arg2).map_err(io_err)
            }
        }
        CommandType::Label => writer.write_label(&command.arg1).map_err(io_err),
        CommandType::Goto => writer.write_goto(&command.arg1).map_err(io_err),
        CommandType::IfGoto => writer.write_if(&command.arg1).map_err(io_err),
        CommandType::Function => writer
            .write_function(&command.arg1, u16::try_from(command.arg2).unwrap_or(0))
            .map_err(io_err),
        CommandType::Call => writer
            .write_call(&command.arg1, u16::try_from(command.arg2).unwrap_or(0))
            .map_err(io_err),
        CommandType::Return => writer.write_return().map_err(io_err),
    }
}
