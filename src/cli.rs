use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{init_database, serve};

#[derive(Parser)]
#[command(name = "stockrust")]
#[command(about = "StockRust inventory tracker API server and CLI tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    ///
    /// Pending migrations are applied on startup, so a fresh database
    /// file works without a separate init step.
    Serve {
        /// Database URL
        ///
        /// For SQLite databases, use:
        ///   - sqlite://stockrust.db?mode=rwc (relative path, created on demand)
        ///   - sqlite:///absolute/path/to/database.sqlite (absolute path)
        #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite://stockrust.db?mode=rwc")]
        database_url: String,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Initialize the database using migrations
    InitDb {
        /// Database URL
        #[arg(short, long, env = "DATABASE_URL", default_value = "sqlite://stockrust.db?mode=rwc")]
        database_url: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { database_url, bind_address } => {
                serve(&database_url, &bind_address).await?;
            }
            Commands::InitDb { database_url } => {
                init_database(&database_url).await?;
            }
        }
        Ok(())
    }
}
