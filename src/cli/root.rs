use clap::{Parser, Subcommand};

use crate::cli::whoami;

/// Sessid command
#[derive(Parser, Debug)]
#[command(version, propagate_version = true, subcommand_required = true)]
pub struct SessidCommand {
    /// Subcommand
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the user a session acts as
    Whoami(whoami::WhoamiCommand),
}

/// Parse command line args
pub fn parse() -> SessidCommand {
    SessidCommand::parse()
}
