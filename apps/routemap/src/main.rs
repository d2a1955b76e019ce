use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use routemap_inspect::{Config, OutputFormat};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "routemap")]
#[command(about = "Inspect the routing table of a file-system routed project", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Scan the routes directory and print its routes and middleware
    Routes(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::Routes(cfg) => {
            info!("Scanning routes (format: {:?})", cfg.format);
            let format = cfg.format;

            let result = routemap_inspect::run_route_scan(cfg)?;
            let elapsed_ms = start.elapsed().as_millis();

            match format {
                OutputFormat::Json => {
                    routemap_inspect::print_json(&mut stdout, &result.configuration)?;
                }
                OutputFormat::Tree => {
                    routemap_inspect::print_route_tree(&mut stdout, &result)?;
                    writeln!(
                        stdout,
                        "\n{} Finished in {}ms on {} routes in {} directories.",
                        "●".bright_blue(),
                        elapsed_ms.to_string().cyan(),
                        result.route_count().to_string().cyan(),
                        result.directory_count().to_string().cyan()
                    )?;
                }
            }
            stdout.flush()?;

            if !result.conflicts.is_empty() {
                if format == OutputFormat::Json {
                    let mut stderr = std::io::stderr();
                    routemap_inspect::print_conflicts(&mut stderr, &result.conflicts)?;
                }
                // Non-zero exit to fail CI
                std::process::exit(1);
            }

            Ok(())
        }
    }
}
