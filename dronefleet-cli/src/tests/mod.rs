//! Shared test harness modules for the dronefleet CLI.
#![expect(
    clippy::expect_used,
    reason = "Tests use expect to surface unexpected CLI outcomes"
)]

use super::*;
use crate::assign::{
    AssignArgs, AssignConfig, config_from_layers_for_test, load_problem, run_assign_with,
};

mod helpers;
