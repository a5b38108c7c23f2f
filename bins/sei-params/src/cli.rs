use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Inspect and validate EVM module parameters",
    long_about = None
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the genesis default parameter set
    Defaults,
    /// Apply a genesis override file to the defaults and validate it
    Validate {
        #[clap(long, value_parser)]
        genesis: PathBuf,
    },
    /// List the registered parameter keys and their value kinds
    Keys,
}
