// SPDX-License-Identifier: PMPL-1.0-or-later

//! stagehand: build and install helper commands
//!
//! The build system invokes one subcommand per job: `countries` during the
//! build to regenerate the country lookup entries, and the post-install
//! subcommands after files have been copied into the prefix.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use stagehand::countries::{self, ConvertConfig, WORLD_TABLE};
use stagehand::install::{hooks, InstallEnv};

#[derive(Parser)]
#[command(name = "stagehand")]
#[command(version = "1.0.0")]
#[command(about = "Build and install helpers for the desktop package")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate country map entries from the world table
    Countries {
        /// Table to read (defaults to world.csv in the working directory)
        #[arg(value_name = "TABLE")]
        table: Option<PathBuf>,

        /// Write the entries to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Compile the installed gsettings schemas (skipped for staged installs)
    CompileSchemas,

    /// Run every post-install step: schema compile, then icon-cache refresh
    PostInstall,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Countries { table, output } => {
            let config = ConvertConfig {
                input: table.unwrap_or_else(|| PathBuf::from(WORLD_TABLE)),
                output,
            };

            let written = countries::run(&config)?;

            if let Some(dest) = &config.output {
                println!("{} entries written to {}", written, dest.display());
            }
        }

        Commands::CompileSchemas => {
            let env = InstallEnv::from_env()?;
            hooks::run_steps(&hooks::schema_steps(&env))?;
        }

        Commands::PostInstall => {
            let env = InstallEnv::from_env()?;
            hooks::run_steps(&hooks::post_install_steps(&env))?;
        }
    }

    Ok(())
}
