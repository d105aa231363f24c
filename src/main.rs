//! Sitebuild CLI - static site build tool
//!
//! Usage: sitebuild [build]
//!
//! Reads `index.html`, replaces the `__API_BASE__` marker with the value of
//! `API_BASE_URL`, and writes the result to `dist/index.html`, resetting
//! `dist/` first. Running without a subcommand is the same as `sitebuild
//! build` with all defaults.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use sitebuild::{run_build, ApiBase, BuildOptions};

/// Sitebuild - static site build tool
#[derive(Parser, Debug)]
#[command(name = "sitebuild")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Inject the API base URL and write the deployable page
    Build {
        /// Path to the source page
        #[arg(short, long, default_value = "index.html")]
        source: PathBuf,

        /// Output directory (deleted and recreated on every run)
        #[arg(short, long, default_value = "dist")]
        out_dir: PathBuf,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Build {
            source,
            out_dir,
            dry_run,
        }) => cmd_build(
            BuildOptions {
                source,
                out_dir,
                dry_run,
            },
            cli.json,
        ),
        None => cmd_build(BuildOptions::default(), cli.json),
    }
}

fn cmd_build(options: BuildOptions, json: bool) -> Result<()> {
    let api_base = ApiBase::from_env();
    let report = run_build(&options, &api_base)?;

    if json {
        let output = serde_json::json!({
            "event": "build",
            "api_base": report.api_base,
            "output": report.output,
            "dry_run": report.dry_run,
        });
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("API base injected as: {}", report.api_base.label());
        if report.dry_run {
            println!("Would generate {} (dry run)", report.output.display());
        } else {
            println!("Generated {}", report.output.display());
        }
    }

    Ok(())
}
