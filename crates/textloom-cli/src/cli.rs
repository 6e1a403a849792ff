//! CLI argument definitions for textloom.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `parse` | Run the full pipeline and emit ordered segments |
//! | `extract` | Emit extracted blocks and the placeholder text |
//! | `check` | Report whether the input contains any block marker |
//! | `validate` | Validate every extracted block against definitions |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--pretty` | `false` | Pretty-print JSON output |
//!
//! Input is read from a file path, or from stdin when the path is `-`.
//!
//! # Examples
//!
//! ```bash
//! # Parse a streamed transcript against remote definitions
//! textloom parse reply.md --definitions https://example.test/definitions.json
//!
//! # Validate against a local definitions file
//! textloom validate reply.md --definitions ./definitions.json --pretty
//!
//! # Cheap marker probe for plain text
//! textloom check reply.md
//! ```

use clap::{Args, Parser, Subcommand};

/// Extract, validate, and resolve component blocks embedded in streamed text.
#[derive(Debug, Parser)]
#[command(
    name = "textloom",
    author,
    version,
    about = "Component-block extraction pipeline for streamed text"
)]
pub struct Cli {
    /// Pretty-print JSON output.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the full pipeline: extract, validate, resolve, reassemble.
    Parse(ParseArgs),
    /// Extract blocks and show the placeholder-substituted text.
    Extract(InputArgs),
    /// Report whether the input contains any opening block marker.
    Check(InputArgs),
    /// Validate every extracted block against a definitions document.
    Validate(ParseArgs),
}

#[derive(Debug, Args)]
pub struct InputArgs {
    /// Input file path, or '-' for stdin.
    pub input: String,
}

#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Input file path, or '-' for stdin.
    pub input: String,

    /// Definitions locator: an http(s) url or a local path.
    #[arg(long)]
    pub definitions: String,

    /// Definitions cache TTL in milliseconds.
    #[arg(long, default_value_t = 300_000)]
    pub ttl_ms: u64,

    /// Root under which component paths are resolved.
    #[arg(long, default_value = textloom_core::DEFAULT_BASE_PATH)]
    pub base_path: String,
}
