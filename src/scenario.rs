/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};
use serde::Deserialize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::dispatcher::Dispatcher;
use crate::shared::Request;

/***************************************/
/*       Public data structures        */
/***************************************/

/// A list of requests to submit, stored as TOML `[[requests]]` tables.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    #[serde(default)]
    pub requests: Vec<Request>,
}

#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error("failed to access scenario file {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse scenario file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize scenario: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl Scenario {
    /// Submits every request in file order and returns how many were admitted.
    pub fn submit(&self, dispatcher: &mut Dispatcher) -> usize {
        let before = dispatcher.pending_count();
        for request in &self.requests {
            dispatcher.add_request(request.floor, request.direction, request.priority);
        }
        let admitted = dispatcher.pending_count() - before;
        debug!("Admitted {} of {} scenario requests", admitted, self.requests.len());
        admitted
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let scenario_str = fs::read_to_string(path).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let scenario: Scenario = toml::from_str(&scenario_str)?;
    info!("Loaded {} request(s) from {:?}", scenario.requests.len(), path);
    Ok(scenario)
}

pub fn save_scenario(path: &Path, scenario: &Scenario) -> Result<(), ScenarioError> {
    let toml_string = toml::to_string(scenario)?;
    fs::write(path, toml_string).map_err(|source| ScenarioError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/***************************************/
/*             Unit tests              */
/***************************************/
