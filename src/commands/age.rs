use crate::cli::{Cli, Commands};
use crate::domain::constants::DEFAULT_PROJECT_NAME;
use crate::domain::models::{
    DependencyCoordinate, Manifest, Settings, ThresholdPolicy, Violation,
};
use crate::services::age_info::{age_map_from, generate_age_map, generate_timestamp_map};
use crate::services::output::{padded_row, print_json, print_out};
use crate::services::registry::TimestampSource;
use crate::services::report::{write_report, ReportFormat};
use crate::services::threshold::{run_check, CheckError};
use tracing::{error, info, warn};

pub struct RunContext<'a> {
    pub settings: &'a Settings,
    pub manifest: &'a Manifest,
    pub dependencies: &'a [DependencyCoordinate],
    pub source: &'a dyn TimestampSource,
    pub now: i64,
}

pub fn handle_age_commands(cli: &Cli, ctx: &RunContext) -> anyhow::Result<()> {
    let ignore = ctx.settings.ignore.as_deref();
    match &cli.command {
        Commands::Show => {
            let ages = generate_age_map(
                ctx.dependencies,
                ignore,
                ctx.source,
                ctx.settings.workers,
                ctx.now,
            );
            if ages.is_empty() && !cli.json {
                println!("no dependencies to inspect");
                return Ok(());
            }
            let width = ages
                .entries()
                .iter()
                .map(|e| e.name.len())
                .max()
                .unwrap_or(0);
            print_out(cli.json, ages.entries(), |e| {
                padded_row(&e.name, &e.age, width)
            })?;
        }
        Commands::Check {
            years,
            days,
            hours,
            minutes,
        } => {
            let policy = ThresholdPolicy {
                years: *years,
                days: *days,
                hours: *hours,
                minutes: *minutes,
            };
            let outcome = run_check(
                ctx.dependencies,
                ignore,
                ctx.source,
                ctx.settings.workers,
                &policy,
                ctx.now,
            );
            match outcome {
                Ok(summary) => {
                    if cli.json {
                        print_json(true, Vec::<Violation>::new())?;
                    } else {
                        println!(
                            "{} dependencies younger than {} {}",
                            summary.checked, summary.limit.limit, summary.limit.unit
                        );
                    }
                }
                Err(CheckError::Violations(violations)) => {
                    for v in &violations {
                        error!("{}", v);
                    }
                    if cli.json {
                        print_json(false, &violations)?;
                    }
                    return Err(CheckError::Violations(violations).into());
                }
                Err(e) => return Err(e.into()),
            }
        }
        Commands::Report { format, out_dir } => {
            let Some(raw) = format else {
                warn!("Report not generated because of missing report type");
                return Ok(());
            };
            let format: ReportFormat = match raw.parse() {
                Ok(f) => f,
                Err(e) => {
                    warn!("Report not generated because of {}", e);
                    return Ok(());
                }
            };
            let timestamps = generate_timestamp_map(
                ctx.dependencies,
                ignore,
                ctx.source,
                ctx.settings.workers,
            );
            let ages = age_map_from(&timestamps, ctx.now);
            let project = ctx
                .manifest
                .project
                .name
                .as_deref()
                .unwrap_or(DEFAULT_PROJECT_NAME);
            let path = write_report(format, out_dir, project, &ages)?;
            info!("Report with {} entries saved to {}", ages.len(), path.display());
            if cli.json {
                print_json(true, path.to_string_lossy())?;
            } else {
                println!("report saved to {}", path.display());
            }
        }
    }
    Ok(())
}
