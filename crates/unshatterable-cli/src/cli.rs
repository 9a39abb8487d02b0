use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "unshatterable",
    about = "Unshatterable: block definitions from code",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register the demo blocks and write their documents
    Build(BuildArgs),
    /// Print a demo block's document without writing it
    Show(ShowArgs),
    /// Print the condition expression for a property value
    Condition(ConditionArgs),
}

#[derive(Args)]
pub struct BuildArgs {
    /// Config file (JSON, or TOML by extension)
    #[arg(short, long, default_value = "unshatterable-config.json")]
    pub config: PathBuf,
    /// Override the configured output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Write compact JSON regardless of config
    #[arg(long)]
    pub minimize: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    pub identifier: String,
}

#[derive(Args)]
pub struct ConditionArgs {
    pub property: String,
    /// JSON scalar (`4`, `true`, `"abc"`); anything unparsable is a string
    pub value: String,
}
