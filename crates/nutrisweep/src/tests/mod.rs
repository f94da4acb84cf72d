//! End-to-end tests for the command-line front end
//!
//! - `scenario_file` - loading scenario files from disk
//! - `report` - running the sweeps and rendering the output


use std::path::{Path, PathBuf};

use crate::scenario::Scenario;

pub(crate) fn sample_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("scenarios/sample.yaml")
}

pub(crate) fn sample() -> Scenario {
    Scenario::load(&sample_path()).unwrap()
}
