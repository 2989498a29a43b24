//! Startup provisioning of the subject index.

use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{info, warn};

use crate::{EsStore, Result, mapping, store::check};

/// What to do with the index before the server starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionMode {
  /// Delete the index, then create it empty with the current mapping.
  /// Every start wipes existing data. A failed delete is logged and the
  /// create is still attempted.
  #[default]
  Recreate,
  /// Create the index only when it does not exist yet.
  CreateIfAbsent,
  /// Leave the index alone.
  Skip,
}

impl EsStore {
  /// Prepare the index according to `mode`.
  pub async fn provision(&self, mode: ProvisionMode) -> Result<()> {
    match mode {
      ProvisionMode::Skip => {
        info!(index = %self.index, "index provisioning skipped");
        Ok(())
      }
      ProvisionMode::CreateIfAbsent => {
        if self.index_exists().await? {
          info!(index = %self.index, "index already exists");
          Ok(())
        } else {
          self.create_index().await
        }
      }
      ProvisionMode::Recreate => {
        if let Err(e) = self.delete_index().await {
          warn!(index = %self.index, error = %e, "failed to delete existing index");
        }
        self.create_index().await
      }
    }
  }

  async fn index_exists(&self) -> Result<bool> {
    let resp = self
      .client
      .head(self.url(&[self.index.as_str()]))
      .send()
      .await?;
    if resp.status() == StatusCode::NOT_FOUND {
      return Ok(false);
    }
    check(resp).await?;
    Ok(true)
  }

  /// A missing index is not an error.
  async fn delete_index(&self) -> Result<()> {
    let resp = self
      .client
      .delete(self.url(&[self.index.as_str()]))
      .send()
      .await?;
    if resp.status() == StatusCode::NOT_FOUND {
      info!(index = %self.index, "no existing index to delete");
      return Ok(());
    }
    check(resp).await?;
    info!(index = %self.index, "deleted existing index");
    Ok(())
  }

  async fn create_index(&self) -> Result<()> {
    let resp = self
      .client
      .put(self.url(&[self.index.as_str()]))
      .json(&mapping::index_body())
      .send()
      .await?;
    check(resp).await?;
    info!(index = %self.index, "created index");
    Ok(())
  }
}
