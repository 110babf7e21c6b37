use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// bundle-overlay - bundle a project from its transpiled sources
#[derive(Parser, Debug)]
#[command(name = "bundle-overlay")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle the project once
    Build {
        #[command(flatten)]
        project: ProjectArgs,
    },

    /// Bundle, then rebuild whenever the source directory changes
    Watch {
        #[command(flatten)]
        project: ProjectArgs,
    },
}

/// Project layout and config location shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Project root (defaults to `ionic_root_dir`, then the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source directory (defaults to `<root>/src`)
    #[arg(long)]
    pub src: Option<PathBuf>,

    /// Web root (defaults to `<root>/www`)
    #[arg(long)]
    pub www: Option<PathBuf>,

    /// Scratch directory (defaults to `<root>/.tmp`)
    #[arg(long)]
    pub tmp: Option<PathBuf>,

    /// Bundle output directory (defaults to `<www>/build`)
    #[arg(long = "build-dir")]
    pub build_dir: Option<PathBuf>,

    /// Bundler config file; wins over environment variables and -w
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bundler config file, unless `ionic_webpack` is set
    #[arg(short = 'w', long = "webpack")]
    pub webpack: Option<PathBuf>,

    /// JSON manifest of transpiled sources to serve instead of the files on disk
    #[arg(long)]
    pub transpiled: Option<PathBuf>,
}
