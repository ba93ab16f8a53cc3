//! Assign command implementation for the dronefleet CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dronefleet_core::{
    AStarPathFinder, AssignmentReport, DeliveryProblem, GreedyScheduler, Order, Scheduler,
    Vehicle, plan_routes,
};
use dronefleet_fs::{create_utf8_file, open_utf8_file};
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::{BufReader, Write};

use crate::report::write_text_report;
use crate::{
    ARG_ASSIGN_OUTPUT, ARG_ASSIGN_PROBLEM, ARG_ASSIGN_ROUTES, CliError, DEFAULT_OUTPUT,
    ENV_ASSIGN_PROBLEM,
};

/// CLI arguments for the `assign` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Assign every order in a problem file to the fastest \
                 feasible drone, earliest deadline first. Prints a report \
                 per drone and writes the assignments as JSON. Paths can \
                 come from CLI flags, configuration files, or environment \
                 variables.",
    about = "Assign delivery orders to a drone fleet"
)]
#[ortho_config(prefix = "DRONEFLEET")]
pub(crate) struct AssignArgs {
    /// Path to a JSON file describing the fleet and the orders.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) problem: Option<Utf8PathBuf>,
    /// Where to write the assignment JSON (defaults to `output.json`).
    #[arg(long = ARG_ASSIGN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Also write each drone's grid route as JSON to this path.
    #[arg(long = ARG_ASSIGN_ROUTES, value_name = "path")]
    #[serde(default)]
    pub(crate) routes: Option<Utf8PathBuf>,
}

impl AssignArgs {
    pub(crate) fn into_config(self) -> Result<AssignConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        AssignConfig::try_from(merged)
    }
}

/// Resolved `assign` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AssignConfig {
    /// Path to the JSON problem file.
    pub(crate) problem: Utf8PathBuf,
    /// Destination of the assignment JSON.
    pub(crate) output: Utf8PathBuf,
    /// Destination of the route JSON, when requested.
    pub(crate) routes: Option<Utf8PathBuf>,
}

impl AssignConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.problem, ARG_ASSIGN_PROBLEM)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match dronefleet_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<AssignArgs> for AssignConfig {
    type Error = CliError;

    fn try_from(args: AssignArgs) -> Result<Self, Self::Error> {
        let problem = args.problem.ok_or(CliError::MissingArgument {
            field: ARG_ASSIGN_PROBLEM,
            env: ENV_ASSIGN_PROBLEM,
        })?;
        let output = args
            .output
            .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT));

        Ok(Self {
            problem,
            output,
            routes: args.routes,
        })
    }
}

pub(super) fn run_assign(args: AssignArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_assign_with(args, &GreedyScheduler, &mut stdout)
}

pub(super) fn run_assign_with(
    args: AssignArgs,
    scheduler: &dyn Scheduler,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = resolve_assign_config(args)?;
    let (mut vehicles, mut orders) = load_fleet(&config.problem)?;
    info!(
        "loaded {} vehicles and {} orders from {}",
        vehicles.len(),
        orders.len(),
        config.problem
    );

    let outcome = scheduler.assign(&mut vehicles, &mut orders);
    info!(
        "assigned {} of {} orders",
        orders.len().saturating_sub(outcome.unassigned.len()),
        orders.len()
    );
    write_text_report(writer, &vehicles, &outcome).map_err(CliError::WriteReport)?;

    let report = AssignmentReport::from_fleet(&vehicles, &outcome);
    write_json(&config.output, &report)?;
    writeln!(writer, "Drone assignments saved to '{}'.", config.output)
        .map_err(CliError::WriteReport)?;

    if let Some(routes_path) = &config.routes {
        let routes = plan_routes(&vehicles, &orders, &AStarPathFinder);
        write_json(routes_path, &routes)?;
        info!("wrote {} routes to {routes_path}", routes.len());
    }
    Ok(())
}

fn resolve_assign_config(args: AssignArgs) -> Result<AssignConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`DeliveryProblem`] from disk.
pub(super) fn load_problem(path: &Utf8Path) -> Result<DeliveryProblem, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenProblem {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParseProblem {
        path: path.to_path_buf(),
        source,
    })
}

fn load_fleet(path: &Utf8Path) -> Result<(Vec<Vehicle>, Vec<Order>), CliError> {
    load_problem(path)?
        .into_parts()
        .map_err(|source| CliError::InvalidProblem {
            path: path.to_path_buf(),
            source,
        })
}

fn write_json<T: Serialize + ?Sized>(path: &Utf8Path, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(|source| {
        CliError::SerialiseOutput {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let write_error = |source: std::io::Error| CliError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    let mut file = create_utf8_file(path).map_err(write_error)?;
    file.write_all(payload.as_bytes()).map_err(write_error)?;
    file.write_all(b"\n").map_err(write_error)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<AssignConfig, CliError> {
    let merged = AssignArgs::merge_from_layers(layers).map_err(CliError::from)?;
    AssignConfig::try_from(merged)
}
