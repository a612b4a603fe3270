use clap::{Parser, Subcommand};
use gitoscope::commands::*;
use gitoscope::core::{
    config::{GitoscopeConfig, REPO_ENV_VAR},
    error::{GitoscopeError, Result},
    git::GitRepo,
    print_error,
};
use std::env;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gitoscope")]
#[command(about = "Read-only inspector for a git repository's status and object graph")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Repository to inspect (defaults to $GITOSCOPE_REPO, the config file, then the current directory)
    #[arg(long, global = true)]
    repo: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the working copy / cache / tree presence of every file
    Status {
        /// Print the status map as JSON
        #[arg(long)]
        json: bool,
    },
    /// Decode a commit object
    Commit {
        /// Commit identifier
        id: String,
    },
    /// Decode a tree object
    Tree {
        /// Tree identifier
        id: String,
    },
    /// Decode a blob object
    Blob {
        /// Blob identifier
        id: String,
    },
    /// List references, HEAD last
    Refs,
    /// Print the content of a path from one source
    Show {
        /// One of: tree, cache, working
        source: String,
        /// Repository-relative path
        path: String,
    },
}

fn open_repository(flag: Option<PathBuf>) -> Result<GitRepo> {
    let config = GitoscopeConfig::load()?;
    let path = config.resolve_repository(flag, env::var(REPO_ENV_VAR).ok())?;
    log::debug!("Inspecting repository at {}", path.display());
    GitRepo::open(&path)
}

fn run(cli: Cli) -> Result<()> {
    let git_repo = open_repository(cli.repo)?;

    match cli.command {
        Commands::Status { json } => execute_status(&git_repo, json),
        Commands::Commit { id } => execute_commit(&git_repo, &id),
        Commands::Tree { id } => execute_tree(&git_repo, &id),
        Commands::Blob { id } => execute_blob(&git_repo, &id),
        Commands::Refs => execute_refs(&git_repo),
        Commands::Show { source, path } => execute_show(&git_repo, &source, &path),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    let default_filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Err(e) = run(cli) {
        if let GitoscopeError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }

    Ok(())
}
