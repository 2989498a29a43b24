//! [`EsStore`] — the Elasticsearch implementation of [`SubjectStore`].

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::Deserialize;
use serde_json::Value;
use syllabus_core::{codec, store::SubjectStore, subject::Subject};

use crate::{Error, Result, provision::ProvisionMode};

const REFRESH: [(&str, &str); 1] = [("refresh", "true")];

// ─── Configuration ────────────────────────────────────────────────────────────

/// Connection settings for the cluster.
#[derive(Debug, Clone, Deserialize)]
pub struct EsConfig {
  /// Base URL, e.g. `http://localhost:9200`.
  pub url:                  String,
  /// Name of the index holding subject documents.
  pub index:                String,
  #[serde(default)]
  pub provision:            ProvisionMode,
  /// Per-request timeout. `None` waits indefinitely.
  #[serde(default)]
  pub request_timeout_secs: Option<u64>,
}

// ─── Response envelopes ──────────────────────────────────────────────────────

#[derive(Deserialize)]
struct GetResponse {
  #[serde(default)]
  found:  bool,
  #[serde(rename = "_source")]
  source: Option<Value>,
}

#[derive(Deserialize)]
struct WriteResponse {
  #[serde(rename = "_id")]
  id: String,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A subject store backed by a single Elasticsearch index.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct EsStore {
  pub(crate) client: Client,
  base:              Url,
  pub(crate) index:  String,
}

impl EsStore {
  /// Build the HTTP client. Does not contact the cluster.
  pub fn new(config: &EsConfig) -> Result<Self> {
    let base = Url::parse(&config.url).map_err(|e| Error::InvalidUrl {
      url:    config.url.clone(),
      reason: e.to_string(),
    })?;
    if base.cannot_be_a_base() {
      return Err(Error::InvalidUrl {
        url:    config.url.clone(),
        reason: "not a base url".to_owned(),
      });
    }

    let mut builder = Client::builder();
    if let Some(secs) = config.request_timeout_secs {
      builder = builder.timeout(Duration::from_secs(secs));
    }
    let client = builder.build().map_err(Error::Client)?;

    Ok(Self {
      client,
      base,
      index: config.index.clone(),
    })
  }

  pub fn index(&self) -> &str { &self.index }

  /// `{base}/{segments...}`, each segment percent-encoded.
  pub(crate) fn url(&self, segments: &[&str]) -> Url {
    let mut url = self.base.clone();
    // `new` rejects cannot-be-a-base URLs, so this always succeeds.
    if let Ok(mut path) = url.path_segments_mut() {
      path.pop_if_empty().extend(segments);
    }
    url
  }

  /// URL of the document `id`. `.` and `..` cannot be addressed as a path
  /// segment (URL normalisation folds them, even percent-encoded), so they
  /// are refused.
  fn doc_url(&self, id: &str) -> Result<Url> {
    if id == "." || id == ".." {
      return Err(Error::UnaddressableId(id.to_owned()));
    }
    Ok(self.url(&[self.index.as_str(), "_doc", id]))
  }
}

/// Turn a non-success status into [`Error::Backend`].
pub(crate) async fn check(resp: Response) -> Result<Response> {
  let status = resp.status();
  if status.is_success() {
    return Ok(resp);
  }
  let body = resp.text().await.unwrap_or_default();
  Err(Error::Backend {
    status: status.as_u16(),
    body,
  })
}

impl SubjectStore for EsStore {
  type Error = Error;

  async fn index_subject(&self, subject: Subject) -> Result<String> {
    let doc = codec::encode(&subject)?;

    let req = if subject.code.is_empty() {
      self.client.post(self.url(&[self.index.as_str(), "_doc"]))
    } else {
      self.client.put(self.doc_url(&subject.code)?)
    };
    let resp = req.query(&REFRESH).json(&doc).send().await?;

    let ack: WriteResponse = check(resp)
      .await?
      .json()
      .await
      .map_err(Error::InvalidResponse)?;
    Ok(ack.id)
  }

  async fn get_subject(&self, id: String) -> Result<Option<Subject>> {
    let resp = self.client.get(self.doc_url(&id)?).send().await?;
    if resp.status() == StatusCode::NOT_FOUND {
      return Ok(None);
    }

    let envelope: GetResponse = check(resp)
      .await?
      .json()
      .await
      .map_err(Error::InvalidResponse)?;
    if !envelope.found {
      return Ok(None);
    }

    let subject = envelope.source.map(codec::decode_value).transpose()?;
    Ok(subject)
  }

  async fn replace_subject(&self, id: String, subject: Subject) -> Result<()> {
    let doc = codec::encode(&subject)?;
    let resp = self
      .client
      .put(self.doc_url(&id)?)
      .query(&REFRESH)
      .json(&doc)
      .send()
      .await?;
    check(resp).await?;
    Ok(())
  }

  async fn delete_subject(&self, id: String) -> Result<()> {
    let resp = self
      .client
      .delete(self.doc_url(&id)?)
      .query(&REFRESH)
      .send()
      .await?;
    check(resp).await?;
    Ok(())
  }
}
