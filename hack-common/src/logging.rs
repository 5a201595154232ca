//! One-line logger setup shared by both binaries.
//!
//! Mirrors the `TermLogger::init` call in `c8asm`'s `bin/assemble.rs`: everything goes to stderr so
//! translated output can still be piped from stdout if a caller wants that, and the filter is scoped
//! to this workspace's own crates so a dependency's chatter doesn't drown out ours.

use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

/// Initializes the global logger. Safe to call once per process; a second call is a logic error in
/// the caller (both binaries call it exactly once, at the top of `main`).
pub fn init(level: LevelFilter) {
    TermLogger::init(
        level,
        ConfigBuilder::new()
            .add_filter_allow_str("assembler")
            .add_filter_allow_str("vmtranslator")
            .add_filter_allow_str("hack_common")
            .build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .expect("could not set up logging");
}
