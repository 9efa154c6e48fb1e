//! CLI module for the mnema-server binary.
//!
//! Uses clap for argument parsing. Connection settings come from the
//! environment (see [`crate::utils::config`]); the flags here only override
//! where the server listens and how much it logs.

use clap::Parser;

/// Mnema - memory-augmented chat gateway
#[derive(Parser, Debug)]
#[command(
    name = "mnema-server",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Mnema - memory-augmented chat gateway",
    long_about = "A gateway that conducts memory-augmented chat conversations against a\n\
                  hosted memory API and an LLM completion service.\n\n\
                  Credentials and endpoints are read from the environment:\n\
                  MEMORY_API_URL, MEMORY_API_KEY, OPENAI_API_KEY (required),\n\
                  OPENAI_API_BASE, COMPLETION_MODEL, HOST, PORT (optional)."
)]
pub struct Cli {
    /// Host address to bind, overriding HOST
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind, overriding PORT
    #[arg(long)]
    pub port: Option<u16>,

    /// Enable verbose (debug-level) logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
