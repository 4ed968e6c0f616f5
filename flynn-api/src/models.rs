use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A running job (process) of an app
#[derive(Debug, Clone, Deserialize)]
pub struct Job {
  pub id: String,
  #[serde(rename = "type")]
  pub job_type: String,
  pub state: String,
}

/// Request body for a one-off job
#[derive(Debug, Serialize)]
pub struct NewJob {
  pub cmd: Vec<String>,
}

/// Desired process counts per type for an app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
  pub processes: BTreeMap<String, i32>,
}

/// A domain routed to an app
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
  pub domain: String,
}
