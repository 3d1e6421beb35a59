use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cloud-gallery")]
#[command(about = "Browse and manage files in a cloud storage bucket")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend API base URL (overrides the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List stored files
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Upload a local file
    Upload {
        /// Path of the file to upload
        path: PathBuf,
    },
    /// Delete a stored file
    #[command(alias = "rm")]
    Delete {
        /// Storage key of the file
        key: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Download a stored file through its view link
    Download {
        /// Storage key of the file
        key: String,
        /// Output path (defaults to the file's display name; existing files are never replaced)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Print the view link of a stored file
    Open {
        /// Storage key of the file
        key: String,
    },
    /// Manage the backend configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Save the backend API base URL
    Init {
        /// Backend API base URL (e.g. <http://localhost:5000/api>)
        #[arg(value_name = "URL")]
        base_url: String,
    },
    /// Show the active configuration
    Show,
}
