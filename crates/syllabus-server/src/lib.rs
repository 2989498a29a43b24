//! HTTP server wiring for the subject index.
//!
//! Configuration loading and the top-level router. The binary in `main.rs`
//! owns the store and the listener.

use std::{path::Path, sync::Arc};

use axum::Router;
use config::{Config, ConfigError, Environment, File, Source};
use serde::Deserialize;
use syllabus_core::store::SubjectStore;
use syllabus_store_es::{EsConfig, EsStore, ProvisionMode};
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration.
///
/// Read from an optional TOML file, then from `SYLLABUS_*` environment
/// variables (`__` separates nested keys). Every key has a default.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:          String,
  pub port:          u16,
  pub elasticsearch: EsConfig,
}

impl ServerConfig {
  /// Load from `path` (missing file is fine) and the environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::from_file(File::from(path).required(false))
  }

  fn from_file<F>(file: F) -> Result<Self, ConfigError>
  where
    F: Source + Send + Sync + 'static,
  {
    Config::builder()
      .set_default("host", "0.0.0.0")?
      .set_default("port", 8000_i64)?
      .set_default("elasticsearch.url", "http://localhost:9200")?
      .set_default("elasticsearch.index", "thongtinmonhoc")?
      .add_source(file)
      .add_source(
        Environment::with_prefix("SYLLABUS")
          .prefix_separator("_")
          .separator("__"),
      )
      .build()?
      .try_deserialize()
  }

  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }
}

// ─── Startup ──────────────────────────────────────────────────────────────────

/// Provision the index, logging any failure. Startup goes on regardless; a
/// missing or stale index shows up later as failed requests.
pub async fn provision(store: &EsStore, mode: ProvisionMode) {
  if let Err(e) = store.provision(mode).await {
    tracing::error!(index = store.index(), error = %e, "index provisioning failed");
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// The API router with per-request tracing.
pub fn app<S>(store: S) -> Router
where
  S: SubjectStore + 'static,
{
  syllabus_api::api_router(Arc::new(store)).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use config::FileFormat;
  use serde_json::json;
  use syllabus_core::memory::MemoryStore;
  use tower::ServiceExt as _;
  use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
  };

  fn from_toml(toml: &str) -> ServerConfig {
    ServerConfig::from_file(File::from_str(toml, FileFormat::Toml)).unwrap()
  }

  #[test]
  fn defaults_match_fixed_deployment() {
    let cfg = ServerConfig::load(Path::new("does-not-exist.toml")).unwrap();
    assert_eq!(cfg.address(), "0.0.0.0:8000");
    assert_eq!(cfg.elasticsearch.url, "http://localhost:9200");
    assert_eq!(cfg.elasticsearch.index, "thongtinmonhoc");
    assert_eq!(cfg.elasticsearch.provision, ProvisionMode::Recreate);
    assert!(cfg.elasticsearch.request_timeout_secs.is_none());
  }

  #[test]
  fn file_overrides_defaults() {
    let cfg = from_toml(
      r#"
      port = 9000

      [elasticsearch]
      index = "subjects_dev"
      provision = "create_if_absent"
      request_timeout_secs = 5
      "#,
    );
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.elasticsearch.url, "http://localhost:9200");
    assert_eq!(cfg.elasticsearch.index, "subjects_dev");
    assert_eq!(cfg.elasticsearch.provision, ProvisionMode::CreateIfAbsent);
    assert_eq!(cfg.elasticsearch.request_timeout_secs, Some(5));
  }

  #[test]
  fn unknown_provision_mode_is_rejected() {
    let result = ServerConfig::from_file(File::from_str(
      "[elasticsearch]\nprovision = \"sometimes\"\n",
      FileFormat::Toml,
    ));
    assert!(result.is_err());
  }

  #[tokio::test]
  async fn app_serves_api_routes() {
    let req = Request::builder()
      .method("POST")
      .uri("/subjects")
      .body(Body::from(r#"{"ma_mh":"CS101","so_tin_chi":4}"#))
      .unwrap();
    let resp = app(MemoryStore::new()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
  }

  #[tokio::test]
  async fn app_has_no_health_endpoint() {
    let req = Request::builder()
      .uri("/health")
      .body(Body::empty())
      .unwrap();
    let resp = app(MemoryStore::new()).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn failed_provisioning_does_not_stop_serving() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
      .and(path("/thongtinmonhoc"))
      .respond_with(ResponseTemplate::new(200))
      .mount(&server)
      .await;
    Mock::given(method("PUT"))
      .and(path("/thongtinmonhoc"))
      .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
      .expect(1)
      .mount(&server)
      .await;
    Mock::given(method("PUT"))
      .and(path("/thongtinmonhoc/_doc/CS101"))
      .respond_with(
        ResponseTemplate::new(201).set_body_json(json!({ "_id": "CS101" })),
      )
      .expect(1)
      .mount(&server)
      .await;

    let mut cfg = ServerConfig::load(Path::new("does-not-exist.toml")).unwrap();
    cfg.elasticsearch.url = server.uri();
    let store = EsStore::new(&cfg.elasticsearch).unwrap();

    provision(&store, ProvisionMode::Recreate).await;

    let req = Request::builder()
      .method("POST")
      .uri("/subjects")
      .body(Body::from(r#"{"ma_mh":"CS101","so_tin_chi":4}"#))
      .unwrap();
    let resp = app(store).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
  }
}
