//! # App Endpoints
//!
//! Controller endpoints for formation scaling and domain routing.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use reqwest::StatusCode;

use crate::client::Client;
use crate::models::{Domain, Formation};

impl Client {
  /// Replace the app's formation with the given process counts
  pub async fn put_formation(&self, app: &str, processes: BTreeMap<String, i32>) -> Result<Formation> {
    let url = format!("{}/apps/{}/formation", self.base_url, app);

    let response = self
      .authenticated(self.client.put(&url))
      .json(&Formation { processes })
      .send()
      .await
      .context("Failed to update formation")?;

    match response.status() {
      StatusCode::OK => {
        response
          .json::<Formation>()
          .await
          .context("Failed to parse formation response")
      }
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("App {} not found", app)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Route a domain to the app
  pub async fn add_domain(&self, app: &str, domain: &str) -> Result<Domain> {
    let url = format!("{}/apps/{}/domains", self.base_url, app);

    let response = self
      .authenticated(self.client.post(&url))
      .json(&Domain {
        domain: domain.to_string(),
      })
      .send()
      .await
      .context("Failed to add domain")?;

    match response.status() {
      StatusCode::OK | StatusCode::CREATED => {
        response
          .json::<Domain>()
          .await
          .context("Failed to parse domain response")
      }
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("App {} not found", app)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
