//! Command-line interface definitions for headdoc

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI structure for the headdoc application
#[derive(Parser)]
#[command(name = "headdoc")]
#[command(version)]
#[command(about = "Assemble HTML pages from a TOML head description", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands for headdoc
#[derive(Subcommand)]
pub enum Commands {
    /// Render a page described by a TOML file
    Render {
        /// Page description file
        #[arg(value_name = "PAGE")]
        page: PathBuf,

        /// Write the page here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Override the doctype from the page file
        #[arg(long, value_name = "ID")]
        doctype: Option<String>,

        /// Render a single section (e.g. `title`, `scripts`) instead of the page
        #[arg(short, long, value_name = "NAME")]
        section: Option<String>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the known doctype identifiers
    Doctypes,

    /// Print the status line and fallback page for an HTTP status code
    Status {
        /// HTTP status code
        code: u16,

        /// Message shown on the page
        #[arg(short, long, default_value = "")]
        message: String,
    },
}
