//! ovelha CLI library

#![forbid(unsafe_code)]

pub mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub use commands::GenerateCommand;

/// Command line interface
#[derive(Debug, Parser)]
#[command(name = "ovelha")]
#[command(version)]
#[command(about = "Generate Spring Boot and Vue scaffolds from an Ovelha model", long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the Spring Boot backend
    #[command(name = "generate_back", alias = "generate-back")]
    GenerateBack {
        /// Model, destination and config
        #[command(flatten)]
        args: GenerateArgs,

        /// Database driver for the generated project
        #[arg(long, value_enum)]
        database: Option<DatabaseBackend>,
    },
    /// Generate the Vue frontend
    #[command(name = "generate_front", alias = "generate-front")]
    GenerateFront {
        /// Model, destination and config
        #[command(flatten)]
        args: GenerateArgs,
    },
}

/// Arguments shared by both generators
#[derive(Debug, Clone, Args)]
pub struct GenerateArgs {
    /// Model file (`.json` or `.toml`)
    pub source: PathBuf,

    /// Output directory (default: `<source dir>/generated`)
    #[arg(short, long)]
    pub destination: Option<PathBuf>,

    /// Configuration file (default: `./ovelha.toml` when present)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

/// Database backend for generated Spring Boot projects
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum DatabaseBackend {
    /// `PostgreSQL` driver
    Postgres,
    /// H2 in-memory driver
    H2,
}

impl From<DatabaseBackend> for ovelha::config::DatabaseBackend {
    fn from(backend: DatabaseBackend) -> Self {
        match backend {
            DatabaseBackend::Postgres => Self::Postgres,
            DatabaseBackend::H2 => Self::H2,
        }
    }
}

impl Cli {
    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns an error if the model or configuration cannot be loaded or
    /// generation fails
    pub fn execute(self) -> Result<()> {
        let command = match self.command {
            Commands::GenerateBack { args, database } => {
                GenerateCommand::backend(args).with_database(database.map(Into::into))
            }
            Commands::GenerateFront { args } => GenerateCommand::frontend(args),
        };
        command.execute()
    }
}
