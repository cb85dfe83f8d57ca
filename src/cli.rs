use crate::domain::constants::DEFAULT_REPORT_DIR;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "depage",
    version,
    about = "Report and check how old your dependencies are on Maven Central"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Dependency manifest (TOML); defaults to ./dependencies.toml when present"
    )]
    pub manifest: Option<PathBuf>,
    #[arg(
        long = "dependency",
        short = 'd',
        global = true,
        value_name = "GROUP:ARTIFACT:VERSION",
        help = "Extra dependency coordinate (repeatable)"
    )]
    pub dependencies: Vec<String>,
    #[arg(
        long,
        global = true,
        help = "Skip dependencies whose group or artifact contains this string"
    )]
    pub ignore: Option<String>,
    #[arg(long, global = true, help = "Registry base URL")]
    pub registry: Option<String>,
    #[arg(long, global = true, help = "Parallel registry lookups")]
    pub workers: Option<usize>,
    #[arg(long, global = true, help = "Config file (TOML)")]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the age of every dependency
    Show,
    /// Fail when a dependency is older than the single given limit
    Check {
        #[arg(long, default_value_t = 0)]
        years: u64,
        #[arg(long, default_value_t = 0)]
        days: u64,
        #[arg(long, default_value_t = 0)]
        hours: u64,
        #[arg(long, default_value_t = 0)]
        minutes: u64,
    },
    /// Write a dependency age report file
    Report {
        #[arg(long, help = "Report type: json, html or excel")]
        format: Option<String>,
        #[arg(long, default_value = DEFAULT_REPORT_DIR)]
        out_dir: PathBuf,
    },
}
