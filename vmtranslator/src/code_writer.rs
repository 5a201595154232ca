//! Code generation for the VM-to-assembly lowering.
//!
//! One `CodeWriter` is shared across every `.vm` file being translated into a single `.asm`
//! output: `cmp_counter` and `ret_counter` must stay monotonic across file boundaries so that
//! comparison and return-address labels never collide, and `current_function` must persist across
//! files so that a `label`/`goto` near the top of a file (before its first `function` command)
//! still scopes correctly.

use std::fmt;
use std::io::{self, Write};

/// Addressable VM memory segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Argument,
    Local,
    This,
    That,
    Constant,
    Static,
    Pointer,
    Temp,
}

impl Segment {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "argument" => Some(Self::Argument),
            "local" => Some(Self::Local),
            "this" => Some(Self::This),
            "that" => Some(Self::That),
            "constant" => Some(Self::Constant),
            "static" => Some(Self::Static),
            "pointer" => Some(Self::Pointer),
            "temp" => Some(Self::Temp),
            _ => None,
        }
    }

    /// The base-pointer symbol for the four segments accessed as `*(base + index)`.
    fn base_symbol(self) -> Option<&'static str> {
        match self {
            Self::Argument => Some("ARG"),
            Self::Local => Some("LCL"),
            Self::This => Some("THIS"),
            Self::That => Some("THAT"),
            _ => None,
        }
    }

    /// The lowercase VM-source token for this segment, the inverse of [`Self::parse`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Argument => "argument",
            Self::Local => "local",
            Self::This => "this",
            Self::That => "that",
            Self::Constant => "constant",
            Self::Static => "static",
            Self::Pointer => "pointer",
            Self::Temp => "temp",
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub struct CodeWriter<W: Write> {
    out: W,
    file_short_name: String,
    current_function: String,
    cmp_counter: u32,
    ret_counter: u32,
}

impl<W: Write> CodeWriter<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            file_short_name: String::new(),
            current_function: String::new(),
            cmp_counter: 0,
            ret_counter: 0,
        }
    }

    /// Called once per input file. Updates the static-segment mangling prefix. Does not touch
    /// `current_function`: a file may contain labels/gotos before its first `function` command,
    /// and those still need to resolve against whatever function scope is active, which for the
    /// very first file defaults to the file's own short name.
    pub fn set_file_name(&mut self, short_name: &str) {
        if self.current_function.is_empty() {
            self.current_function = short_name.to_string();
        }
        self.file_short_name = short_name.to_string();
    }

    /// Emits the bootstrap prologue: `SP = 256`, then `call Sys.init 0`. Must run exactly once,
    /// before any translated VM command.
    pub fn write_init(&mut self) -> io::Result<()> {
        writeln!(self.out, "// bootstrap")?;
        writeln!(self.out, "@256")?;
        writeln!(self.out, "D=A")?;
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "M=D")?;
        self.write_call("Sys.init", 0)
    }

    pub fn write_arithmetic(&mut self, command: &str) -> io::Result<()> {
        writeln!(self.out, "// {command}")?;
        match command {
            "add" => self.binary_prologue_then("M=D+M"),
            "sub" => self.binary_prologue_then("M=M-D"),
            "and" => self.binary_prologue_then("M=D&M"),
            "or" => self.binary_prologue_then("M=D|M"),
            "neg" => self.unary_prologue_then("M=-M"),
            "not" => self.unary_prologue_then("M=!M"),
            "eq" => self.write_comparison("EQ", "JEQ"),
            "gt" => self.write_comparison("GT", "JGT"),
            "lt" => self.write_comparison("LT", "JLT"),
            other => unreachable!("unknown arithmetic command reached the code writer: {other}"),
        }
    }

    fn binary_prologue(&mut self) -> io::Result<()> {
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "M=M-1")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "D=M")?;
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "M=M-1")?;
        writeln!(self.out, "A=M")
    }

    fn unary_prologue(&mut self) -> io::Result<()> {
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "M=M-1")?;
        writeln!(self.out, "A=M")
    }

    fn binary_prologue_then(&mut self, op: &str) -> io::Result<()> {
        self.binary_prologue()?;
        writeln!(self.out, "{op}")?;
        self.inc_sp()
    }

    fn unary_prologue_then(&mut self, op: &str) -> io::Result<()> {
        self.unary_prologue()?;
        writeln!(self.out, "{op}")?;
        self.inc_sp()
    }

    fn write_comparison(&mut self, prefix: &str, jump: &str) -> io::Result<()> {
        self.binary_prologue()?;
        let n = self.cmp_counter;
        self.cmp_counter += 1;
        writeln!(self.out, "D=M-D")?;
        writeln!(self.out, "M=-1")?;
        writeln!(self.out, "@{prefix}{n}")?;
        writeln!(self.out, "D;{jump}")?;
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "M=0")?;
        writeln!(self.out, "({prefix}{n})")?;
        self.inc_sp()
    }

    fn inc_sp(&mut self) -> io::Result<()> {
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "M=M+1")
    }

    pub fn write_push(&mut self, segment: Segment, index: i32) -> io::Result<()> {
        writeln!(self.out, "// push {segment} {index}")?;
        match segment {
            Segment::Constant => {
                writeln!(self.out, "@{index}")?;
                writeln!(self.out, "D=A")?;
            }
            Segment::Static => {
                writeln!(self.out, "@{}.{index}", self.file_short_name)?;
                writeln!(self.out, "D=M")?;
            }
            Segment::Pointer => {
                writeln!(self.out, "@THIS")?;
                writeln!(self.out, "D=A")?;
                writeln!(self.out, "@{index}")?;
                writeln!(self.out, "A=D+A")?;
                writeln!(self.out, "D=M")?;
            }
            Segment::Temp => {
                writeln!(self.out, "@R5")?;
                writeln!(self.out, "D=A")?;
                writeln!(self.out, "@{index}")?;
                writeln!(self.out, "A=D+A")?;
                writeln!(self.out, "D=M")?;
            }
            _ => {
                let base = segment.base_symbol().unwrap();
                writeln!(self.out, "@{base}")?;
                writeln!(self.out, "D=M")?;
                writeln!(self.out, "@{index}")?;
                writeln!(self.out, "A=D+A")?;
                writeln!(self.out, "D=M")?;
            }
        }

        writeln!(self.out, "@SP")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "M=D")?;
        self.inc_sp()
    }

    pub fn write_pop(&mut self, segment: Segment, index: i32) -> io::Result<()> {
        writeln!(self.out, "// pop {segment} {index}")?;

        if segment == Segment::Constant {
            // No destination to write to; popping just discards the top of the stack.
            writeln!(self.out, "@SP")?;
            return writeln!(self.out, "M=M-1");
        }

        match segment {
            Segment::Static => {
                writeln!(self.out, "@SP")?;
                writeln!(self.out, "M=M-1")?;
                writeln!(self.out, "A=M")?;
                writeln!(self.out, "D=M")?;
                return writeln!(self.out, "@{}.{index}\nM=D", self.file_short_name);
            }
            Segment::Pointer => {
                writeln!(self.out, "@THIS")?;
                writeln!(self.out, "D=A")?;
            }
            Segment::Temp => {
                writeln!(self.out, "@R5")?;
                writeln!(self.out, "D=A")?;
            }
            _ => {
                let base = segment.base_symbol().unwrap();
                writeln!(self.out, "@{base}")?;
                writeln!(self.out, "D=M")?;
            }
        }

        writeln!(self.out, "@{index}")?;
        writeln!(self.out, "D=D+A")?;
        writeln!(self.out, "@R13")?;
        writeln!(self.out, "M=D")?;
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "M=M-1")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "D=M")?;
        writeln!(self.out, "@R13")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "M=D")
    }

    pub fn write_label(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "// label {label}")?;
        writeln!(self.out, "({}${label})", self.current_function)
    }

    pub fn write_goto(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "// goto {label}")?;
        writeln!(self.out, "@{}${label}", self.current_function)?;
        writeln!(self.out, "0;JMP")
    }

    pub fn write_if(&mut self, label: &str) -> io::Result<()> {
        writeln!(self.out, "// if-goto {label}")?;
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "M=M-1")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "D=M")?;
        writeln!(self.out, "@{}${label}", self.current_function)?;
        writeln!(self.out, "D;JNE")
    }

    pub fn write_function(&mut self, name: &str, num_locals: u16) -> io::Result<()> {
        writeln!(self.out, "// function {name} {num_locals}")?;
        writeln!(self.out, "({name})")?;
        for _ in 0..num_locals {
            writeln!(self.out, "@SP")?;
            writeln!(self.out, "A=M")?;
            writeln!(self.out, "M=0")?;
            self.inc_sp()?;
        }
        self.current_function = name.to_string();
        Ok(())
    }

    pub fn write_call(&mut self, name: &str, num_args: u16) -> io::Result<()> {
        let return_label = format!("{name}$returnAddr{}", self.ret_counter);
        self.ret_counter += 1;

        writeln!(self.out, "// call {name} {num_args}")?;
        writeln!(self.out, "@{return_label}")?;
        writeln!(self.out, "D=A")?;
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "M=D")?;
        self.inc_sp()?;

        for reg in ["LCL", "ARG", "THIS", "THAT"] {
            writeln!(self.out, "@{reg}")?;
            writeln!(self.out, "D=M")?;
            writeln!(self.out, "@SP")?;
            writeln!(self.out, "A=M")?;
            writeln!(self.out, "M=D")?;
            self.inc_sp()?;
        }

        writeln!(self.out, "// ARG = SP - {num_args} - 5")?;
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "D=M")?;
        if num_args != 0 {
            writeln!(self.out, "@{num_args}")?;
            writeln!(self.out, "D=D-A")?;
        }
        writeln!(self.out, "@5")?;
        writeln!(self.out, "D=D-A")?;
        writeln!(self.out, "@ARG")?;
        writeln!(self.out, "M=D")?;

        writeln!(self.out, "// LCL = SP")?;
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "D=M")?;
        writeln!(self.out, "@LCL")?;
        writeln!(self.out, "M=D")?;

        writeln!(self.out, "@{name}")?;
        writeln!(self.out, "0;JMP")?;
        writeln!(self.out, "({return_label})")
    }

    pub fn write_return(&mut self) -> io::Result<()> {
        let frame = format!("{}$FRAME", self.current_function);
        let ret = format!("{}$RET", self.current_function);

        writeln!(self.out, "// return")?;
        writeln!(self.out, "@LCL")?;
        writeln!(self.out, "D=M")?;
        writeln!(self.out, "@{frame}")?;
        writeln!(self.out, "M=D")?;

        self.write_offset(&ret, &frame, 5)?;

        writeln!(self.out, "@SP")?;
        writeln!(self.out, "M=M-1")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "D=M")?;
        writeln!(self.out, "@ARG")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "M=D")?;

        writeln!(self.out, "@ARG")?;
        writeln!(self.out, "D=M+1")?;
        writeln!(self.out, "@SP")?;
        writeln!(self.out, "M=D")?;

        self.write_offset("THAT", &frame, 1)?;
        self.write_offset("THIS", &frame, 2)?;
        self.write_offset("ARG", &frame, 3)?;
        self.write_offset("LCL", &frame, 4)?;

        writeln!(self.out, "@{ret}")?;
        writeln!(self.out, "A=M")?;
        writeln!(self.out, "0;JMP")
    }

    /// `res_var = *(offset_var - offset)`.
    fn write_offset(&mut self, res_var: &str, offset_var: &str, offset: u16) -> io::Result<()> {
        writeln!(self.out, "@{offset_var}")?;
        writeln!(self.out, "D=M")?;
        writeln!(self.out, "@{offset}")?;
        writeln!(self.out, "D=D-A")?;
        writeln!(self.out, "A=D")?;
        writeln!(self.out, "D=M")?;
        writeln!(self.out, "@{res_var}")?;
        writeln!(self.out, "M=D")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
