use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "nxos2forti")]
#[command(about = "Convert NX-OS VLAN interfaces into FortiGate VLAN interfaces")]
pub struct Cli {
    /// Log debug diagnostics; RUST_LOG directives are added on top.
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert an NX-OS interface config into FortiGate CLI.
    Convert(ConvertArgs),
    /// Show the interface records parsed from an NX-OS config.
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// NX-OS config; its first line names the uplink interface.
    pub input: PathBuf,
    /// Output file path. Parent directories are created as needed.
    #[arg(short, long, default_value = "output/forti_config.txt")]
    pub output: PathBuf,
    /// Uplink interface name, instead of the input's first line.
    #[arg(long)]
    pub uplink: Option<String>,
    /// TOML file overriding the fixed interface values (vdom, role, ...).
    #[arg(long)]
    pub settings: Option<PathBuf>,
    /// Enclose the output in `config system interface` / `end`.
    #[arg(long)]
    pub wrap: bool,
    /// Print the conversion summary as JSON.
    #[arg(long)]
    pub summary_json: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub input: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
