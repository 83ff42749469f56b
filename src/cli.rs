//! Command-line interface components.

use crate::config::Config;
use crate::content::PortfolioContent;
use crate::loader::{LoadOutcome, LoadStats, StructuredRecordLoader};
use crate::models::ContentKind;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "portfolio-content")]
#[command(about = "Load and validate CSV-backed portfolio content")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Directory containing projects.csv and certifications.csv
    ///
    /// Overrides the PORTFOLIO_DATA_DIR environment variable.
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print projects as a JSON array
    Projects {
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Print certifications as a JSON array
    Certifications {
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Show how many records each content file provides
    Summary {
        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,
    },

    /// Check a content file and report skipped rows
    Validate {
        /// CSV file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Content type the file holds (projects, certifications)
        #[arg(short, long)]
        kind: ContentKind,

        #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
        format: OutputFormat,

        /// Fail when any row was skipped
        #[arg(long)]
        strict: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    ///
    /// Verbose mode also lets dependency crates log at `info`.
    pub fn log_directive(&self) -> String {
        let crate_directive = format!("portfolio_content={}", self.log_level());
        if self.verbose {
            format!("info,{}", crate_directive)
        } else {
            crate_directive
        }
    }

    /// Environment configuration with CLI overrides applied
    pub fn resolve_config(&self) -> crate::Result<Config> {
        let config = Config::from_env()?;
        Ok(match &self.data_dir {
            Some(data_dir) => config.with_data_dir(data_dir),
            None => config,
        })
    }
}

/// Command implementations and report rendering
pub mod commands {
    use super::*;
    use anyhow::{Context, Result};
    use colored::*;
    use tracing::{debug, info};

    /// Execute the selected subcommand
    pub fn run(args: &Args) -> Result<()> {
        let config = args
            .resolve_config()
            .context("Failed to resolve content configuration")?;
        debug!("Using configuration: {:?}", config);

        match &args.command {
            Command::Projects { compact } => {
                let content = PortfolioContent::load(&config);
                println!("{}", content.projects_json(!compact)?);
            }
            Command::Certifications { compact } => {
                let content = PortfolioContent::load(&config);
                println!("{}", content.certifications_json(!compact)?);
            }
            Command::Summary { format } => {
                let reports: Vec<(ContentKind, LoadStats)> =
                    [ContentKind::Projects, ContentKind::Certifications]
                        .into_iter()
                        .map(|kind| {
                            let loader = StructuredRecordLoader::for_kind(kind);
                            let (_, stats) = loader.load_with_stats(&config.path_for(kind));
                            (kind, stats)
                        })
                        .collect();
                render_summary(&reports, *format)?;
            }
            Command::Validate {
                file,
                kind,
                format,
                strict,
            } => {
                info!("Validating {} file: {}", kind, file.display());
                let loader = StructuredRecordLoader::for_kind(*kind);
                let (_, stats) = loader.load_with_stats(file);
                render_validation(*kind, &stats, *format)?;
                check_validation(&stats, *strict)?;
            }
        }

        Ok(())
    }

    /// Turn a validation report into the command's exit status
    pub fn check_validation(stats: &LoadStats, strict: bool) -> Result<()> {
        match stats.outcome {
            LoadOutcome::Loaded if strict && stats.has_skipped_rows() => anyhow::bail!(
                "{} row(s) in {} are missing expected fields",
                stats.rows_skipped(),
                stats.path.display()
            ),
            LoadOutcome::Loaded => Ok(()),
            _ => anyhow::bail!("{}", stats.summary()),
        }
    }

    fn render_summary(reports: &[(ContentKind, LoadStats)], format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => {
                let json: serde_json::Map<String, serde_json::Value> = reports
                    .iter()
                    .map(|(kind, stats)| -> Result<(String, serde_json::Value)> {
                        Ok((kind.to_string(), serde_json::to_value(stats)?))
                    })
                    .collect::<Result<_>>()?;
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Human => {
                println!("{}", "Portfolio content".bright_green().bold());
                for (kind, stats) in reports {
                    println!(
                        "  {:<15} {}",
                        kind.to_string().bright_cyan(),
                        outcome_line(stats)
                    );
                }
            }
        }
        Ok(())
    }

    fn render_validation(kind: ContentKind, stats: &LoadStats, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => {
                let mut json = serde_json::to_value(stats)?;
                json["kind"] = serde_json::Value::String(kind.to_string());
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Human => {
                println!(
                    "{} {}",
                    "Validating".bright_green().bold(),
                    stats.path.display()
                );
                println!(
                    "  Expected fields: {}",
                    kind.expected_fields().join(", ").bright_black()
                );
                println!("  {}", outcome_line(stats));
                for row in &stats.skipped {
                    println!(
                        "  {} line {}: missing {}",
                        "skipped".yellow(),
                        row.line.to_string().bright_yellow(),
                        row.missing.join(", ")
                    );
                }
            }
        }
        Ok(())
    }

    fn outcome_line(stats: &LoadStats) -> String {
        match stats.outcome {
            LoadOutcome::Loaded if stats.has_skipped_rows() => format!(
                "{} {} of {} rows ({} skipped)",
                "ok".yellow(),
                stats.rows_accepted,
                stats.rows_read,
                stats.rows_skipped()
            ),
            LoadOutcome::Loaded => format!("{} {} rows", "ok".green(), stats.rows_accepted),
            LoadOutcome::FileMissing => {
                format!("{} {}", "missing".red(), stats.path.display())
            }
            LoadOutcome::FileUnreadable => format!(
                "{} {}",
                "unreadable".red().bold(),
                stats.error.as_deref().unwrap_or_default()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_validate_command() {
        let args = Args::try_parse_from([
            "portfolio-content",
            "validate",
            "data/projects.csv",
            "--kind",
            "projects",
            "--strict",
        ])
        .unwrap();

        match args.command {
            Command::Validate {
                file,
                kind,
                format,
                strict,
            } => {
                assert_eq!(file, PathBuf::from("data/projects.csv"));
                assert_eq!(kind, ContentKind::Projects);
                assert_eq!(format, OutputFormat::Human);
                assert!(strict);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "portfolio-content",
            "projects",
            "--compact",
            "--data-dir",
            "/srv/content",
            "-q",
        ])
        .unwrap();

        assert_eq!(args.data_dir, Some(PathBuf::from("/srv/content")));
        assert_eq!(args.log_level(), "warn");
        assert!(matches!(args.command, Command::Projects { compact: true }));
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = Args::try_parse_from([
            "portfolio-content",
            "validate",
            "skills.csv",
            "--kind",
            "skills",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_directive_follows_verbosity() {
        let default = Args::try_parse_from(["portfolio-content", "summary"]).unwrap();
        assert_eq!(default.log_directive(), "portfolio_content=info");

        let verbose = Args::try_parse_from(["portfolio-content", "summary", "-v"]).unwrap();
        assert_eq!(verbose.log_directive(), "info,portfolio_content=debug");

        let quiet = Args::try_parse_from(["portfolio-content", "summary", "-q"]).unwrap();
        assert_eq!(quiet.log_directive(), "portfolio_content=warn");
    }

    #[test]
    fn test_verbose_and_quiet_conflict() {
        let result = Args::try_parse_from(["portfolio-content", "summary", "-v", "-q"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_validation_outcomes() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "title,issuer,date,category,url").unwrap();
        writeln!(file, "Git,GitHub,2023,git,#").unwrap();
        writeln!(file, "Truncated,Row").unwrap();
        file.flush().unwrap();

        let loader = StructuredRecordLoader::for_kind(ContentKind::Certifications);
        let (_, stats) = loader.load_with_stats(file.path());

        assert!(commands::check_validation(&stats, false).is_ok());
        assert!(commands::check_validation(&stats, true).is_err());

        let dir = tempfile::TempDir::new().unwrap();
        let (_, missing) = loader.load_with_stats(&dir.path().join("absent.csv"));
        assert!(commands::check_validation(&missing, false).is_err());
    }
}
