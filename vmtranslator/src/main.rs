use clap::Parser as ClapParser;
use hack_common::fsutil::{list_vm_files, strip_suffix_exact};
use hack_common::{HackError, Result};
use simplelog::LevelFilter;
use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use vmtranslator::driver::{translate, VmFile};

#[derive(ClapParser, Debug)]
#[command(name = "vmtranslator", about = "Hack VM-to-assembly translator")]
struct Args {
    /// A single `.vm` file, or a directory containing one or more `.vm` files.
    input: String,

    #[arg(long = "log", value_parser = <LevelFilter as FromStr>::from_str, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
}

fn read_file(path: &Path) -> Result<Vec<String>> {
    let mut contents = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut contents))
        .map_err(|e| HackError::io(path.display().to_string(), e))?;
    Ok(contents.lines().map(str::to_string).collect())
}

/// Resolves `input` into the list of `.vm` files to translate (in lexicographic order for a
/// directory) plus whether a bootstrap prologue is required. Per this tool's external-interfaces
/// spec, a directory of VM files is a full program and gets the bootstrap; a single file does not.
fn resolve_inputs(input: &str) -> Result<(Vec<PathBuf>, bool)> {
    let path = Path::new(input);
    if path.is_dir() {
        let files = list_vm_files(path)?;
        Ok((files, true))
    } else {
        Ok((vec![path.to_path_buf()], false))
    }
}

fn output_path(input: &str) -> String {
    let path = Path::new(input);
    if path.is_dir() {
        let name = path
            .file_name()
            .map_or_else(|| "Out".to_string(), |n| n.to_string_lossy().into_owned());
        path.join(format!("{name}.asm")).to_string_lossy().into_owned()
    } else {
        path.with_extension("asm").to_string_lossy().into_owned()
    }
}

fn run(args: &Args) -> Result<String> {
    let (paths, emit_bootstrap) = resolve_inputs(&args.input)?;
    let file_lines: Vec<Vec<String>> = paths.iter().map(|p| read_file(p)).collect::<Result<_>>()?;
    let short_names: Vec<String> = paths
        .iter()
        .map(|p| strip_suffix_exact(&p.file_name().unwrap().to_string_lossy(), ".vm"))
        .collect();

    let files: Vec<VmFile> = short_names
        .iter()
        .zip(file_lines.iter())
        .map(|(name, lines)| VmFile {
            short_name: name,
            lines,
        })
        .collect();

    let out_path = output_path(&args.input);
    let out_file = File::create(&out_path).map_err(|e| HackError::io(out_path.clone(), e))?;
    translate(&files, emit_bootstrap, BufWriter::new(out_file))?;
    Ok(out_path)
}

fn main() {
    let args = Args::parse();
    hack_common::logging::init(args.log_level);
    match run(&args) {
        Ok(output) => log::info!("translation complete, wrote {output}"),
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    }
}
