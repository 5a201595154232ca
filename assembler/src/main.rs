//! Hack Assembler - Main Entry Point
//!
//! A two-pass assembler for the Hack assembly language.
//!
//! # Usage
//! ```bash
//! assembler <input.asm> [output.hack] --log info
//! ```

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

use clap::Parser;
use hack_common::Result;
use simplelog::LevelFilter;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::str::FromStr;

use assembler::driver;

#[derive(Parser, Debug)]
#[command(name = "assembler", about = "Two-pass Hack assembler")]
struct Args {
    /// Path to the `.asm` source file.
    input: String,

    /// Output path. Defaults to the input path with its extension replaced by `.hack`.
    output: Option<String>,

    #[arg(long = "log", value_parser = <LevelFilter as FromStr>::from_str, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

/// Reads assembly file into memory
fn read_lines(path: &str) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| hack_common::HackError::io(path, e))?;
    let reader = BufReader::new(file);
    reader
        .lines()
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|e| hack_common::HackError::io(path, e))
}

/// Determines the output file path by swapping the input's extension for `.hack`.
fn output_path(input: &str, explicit_output: Option<&str>) -> String {
    explicit_output.map_or_else(
        || {
            std::path::Path::new(input)
                .with_extension("hack")
                .to_string_lossy()
                .into_owned()
        },
        std::string::ToString::to_string,
    )
}

fn run(args: &Args) -> Result<String> {
    let lines = read_lines(&args.input)?;
    let encoded = driver::assemble(&args.input, &lines)?;

    let output = output_path(&args.input, args.output.as_deref());
    let output_file = File::create(&output).map_err(|e| hack_common::HackError::io(&output, e))?;
    let mut writer = BufWriter::new(output_file);
    for line in &encoded {
        writeln!(writer, "{line}").map_err(|e| hack_common::HackError::io(&output, e))?;
    }
    writer
        .flush()
        .map_err(|e| hack_common::HackError::io(&output, e))?;

    Ok(output)
}

fn main() {
    let args = Args::parse();
    hack_common::logging::init(args.log_level);

    match run(&args) {
        Ok(output) => log::info!("assembly complete, wrote {output}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_generation() {
        assert_eq!(output_path("test.asm", None), "test.hack");
        assert_eq!(output_path("test.asm", Some("custom.hack")), "custom.hack");
        assert_eq!(output_path("dir/file.asm", None), "dir/file.hack");
        assert_eq!(output_path("path/to/file.asm", None), "path/to/file.hack");
    }

    #[test]
    fn test_output_path_explicit() {
        assert_eq!(output_path("any.asm", Some("out.hack")), "out.hack");
        assert_eq!(
            output_path("any.asm", Some("path/to/out.hack")),
            "path/to/out.hack"
        );
    }
}
