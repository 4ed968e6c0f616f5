//! # Job Endpoints
//!
//! Controller endpoints for one-off jobs, process listing, and log
//! retrieval.

use anyhow::{Context, Result};
use reqwest::StatusCode;

use crate::client::Client;
use crate::models::{Job, NewJob};

impl Client {
  /// Run a one-off job in the app's environment
  pub async fn run_job(&self, app: &str, cmd: Vec<String>) -> Result<Job> {
    let url = format!("{}/apps/{}/jobs", self.base_url, app);

    let response = self
      .authenticated(self.client.post(&url))
      .json(&NewJob { cmd })
      .send()
      .await
      .context("Failed to submit job to controller")?;

    match response.status() {
      StatusCode::OK | StatusCode::CREATED => {
        response.json::<Job>().await.context("Failed to parse job response")
      }
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("App {} not found", app)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// List the app's running jobs
  pub async fn list_jobs(&self, app: &str) -> Result<Vec<Job>> {
    let url = format!("{}/apps/{}/jobs", self.base_url, app);

    let response = self
      .authenticated(self.client.get(&url))
      .send()
      .await
      .context("Failed to fetch job list from controller")?;

    match response.status() {
      StatusCode::OK => {
        response
          .json::<Vec<Job>>()
          .await
          .context("Failed to parse job list")
      }
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("App {} not found", app)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Fetch the app's log output
  pub async fn get_log(&self, app: &str) -> Result<String> {
    let url = format!("{}/apps/{}/log", self.base_url, app);

    let response = self
      .authenticated(self.client.get(&url))
      .send()
      .await
      .context("Failed to fetch log from controller")?;

    match response.status() {
      StatusCode::OK => response.text().await.context("Failed to read log body"),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("App {} not found", app)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
