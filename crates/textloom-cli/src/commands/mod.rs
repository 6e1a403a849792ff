mod check;
mod extract;
mod parse;
mod validate;

use serde_json::Value;
use tokio::io::AsyncReadExt;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Outcome of one command invocation.
pub struct CommandResult {
    pub body: Value,
    /// Blocks that degraded to error or warning artifacts; a non-zero count
    /// maps to exit code 3.
    pub degraded_blocks: usize,
}

impl CommandResult {
    pub fn ok(body: Value) -> Self {
        Self {
            body,
            degraded_blocks: 0,
        }
    }

    pub fn with_degraded(mut self, degraded_blocks: usize) -> Self {
        self.degraded_blocks = degraded_blocks;
        self
    }
}

pub async fn run(cli: &Cli) -> Result<CommandResult, CliError> {
    match &cli.command {
        Command::Parse(args) => parse::run(args).await,
        Command::Extract(args) => extract::run(args).await,
        Command::Check(args) => check::run(args).await,
        Command::Validate(args) => validate::run(args).await,
    }
}

/// Read the input document from a file path, or from stdin for `-`.
pub(crate) async fn read_input(path: &str) -> Result<String, CliError> {
    if path == "-" {
        let mut buffer = String::new();
        tokio::io::stdin().read_to_string(&mut buffer).await?;
        Ok(buffer)
    } else {
        Ok(tokio::fs::read_to_string(path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn read_input_loads_file_contents() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("reply.md");
        std::fs::write(&path, "streamed text").expect("write");

        let text = read_input(path.to_str().expect("utf8 path"))
            .await
            .expect("readable");
        assert_eq!(text, "streamed text");
    }

    #[tokio::test]
    async fn read_input_surfaces_missing_file_as_io_error() {
        let error = read_input("/definitely/not/here.md")
            .await
            .expect_err("missing file");
        assert!(matches!(error, CliError::Io(_)));
    }
}
