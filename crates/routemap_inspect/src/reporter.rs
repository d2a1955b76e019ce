use std::io::{self, Write};

use colored::Colorize;
use log::{debug, trace};
use routemap_core::{RouteConfiguration, join_route, to_path_pattern};

use crate::types::{RouteConflict, ScanResult};

pub fn print_route_tree<W: Write>(writer: &mut W, result: &ScanResult) -> io::Result<()> {
    let cfg = &result.configuration;
    debug!("Printing route tree for {} directories", cfg.directories.len());

    if let Some(global) = &cfg.global_middleware {
        writeln!(writer, "{} {} ({})", "◆".magenta(), global.path.bright_white(), global.name.dimmed())?;
    }

    for dir in &cfg.directories {
        trace!("Printing directory {} with {} files", dir.route, dir.files.len());
        write!(writer, "{} ({})", to_path_pattern(&dir.route).blue().bold(), dir.name.dimmed())?;
        if let Some(middleware) = &dir.middleware {
            write!(writer, " {} {}", "◆".magenta(), middleware.path)?;
        }
        writeln!(writer)?;

        for (idx, file) in dir.files.iter().enumerate() {
            let is_last = idx == dir.files.len() - 1;
            let prefix = if is_last { "└──" } else { "├──" };
            let full_route = to_path_pattern(&join_route(&dir.route, &file.route));
            writeln!(
                writer,
                "{}  {} → {} ({})",
                prefix.dimmed(),
                full_route.green(),
                file.path,
                file.name.dimmed()
            )?;
        }
    }

    writeln!(writer)?;
    print_summary(writer, result)?;
    if !result.conflicts.is_empty() {
        writeln!(writer)?;
        print_conflicts(writer, &result.conflicts)?;
    }

    writer.flush()?;
    Ok(())
}

pub fn print_json<W: Write>(writer: &mut W, configuration: &RouteConfiguration) -> io::Result<()> {
    debug!("Printing route configuration as JSON");
    serde_json::to_writer_pretty(&mut *writer, &configuration.to_json())?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub fn print_conflicts<W: Write>(writer: &mut W, conflicts: &[RouteConflict]) -> io::Result<()> {
    writeln!(
        writer,
        "{} Route conflicts detected ({})\n",
        "⚠".yellow().bold(),
        conflicts.len().to_string().yellow()
    )?;
    for conflict in conflicts {
        writeln!(writer, "{}", to_path_pattern(&conflict.route).red().bold())?;
        for (idx, file) in conflict.files.iter().enumerate() {
            let prefix = if idx == conflict.files.len() - 1 { "└──" } else { "├──" };
            writeln!(writer, "{}  {}", prefix.dimmed(), file)?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn print_summary<W: Write>(writer: &mut W, result: &ScanResult) -> io::Result<()> {
    writeln!(writer, "{}", "─".repeat(60).dimmed())?;
    writeln!(writer, "{}", "Summary".bold())?;
    writeln!(writer, "  Directories: {}", result.directory_count().to_string().cyan())?;
    writeln!(writer, "  Routes: {}", result.route_count().to_string().cyan())?;
    writeln!(writer, "  Middleware: {}", result.middleware_count().to_string().cyan())?;
    Ok(())
}
