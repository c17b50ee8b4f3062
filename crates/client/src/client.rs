//! HTTP client for the upstream contest API.
//!
//! This module provides:
//! - Listing fetch with normalization
//! - Refresh cycles reported to a [`ContestSink`]
//! - Result submission that never raises
//! - HEAD health probe and pass-through sync
//!
//! Every request is bounded by the configured timeout.

use std::time::Instant;

use chrono::Utc;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::{debug, error, warn};

use rush_core::{ApiConfig, Config, Contest, Error, Result};
use rush_ingestion::{ContestNormalizer, Normalized};

use crate::health::{ApiStatus, HealthReport, SyncReport};
use crate::sink::ContestSink;

/// Client for the contest API.
pub struct ContestClient {
    /// The underlying HTTP client
    http: Client,
    /// Endpoint and timeout
    api: ApiConfig,
    /// Normalizer applied to every listing
    normalizer: ContestNormalizer,
}

impl ContestClient {
    /// Create a client from the full configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let normalizer = ContestNormalizer::new(config.normalizer)?;
        Self::with_normalizer(config.api, normalizer)
    }

    /// Create a client with an already built normalizer.
    pub fn with_normalizer(api: ApiConfig, normalizer: ContestNormalizer) -> Result<Self> {
        let http = Client::builder()
            .timeout(api.timeout())
            .build()
            .map_err(|e| Error::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::from_parts(http, api, normalizer))
    }

    fn from_parts(http: Client, api: ApiConfig, normalizer: ContestNormalizer) -> Self {
        Self {
            http,
            api,
            normalizer,
        }
    }

    /// Endpoint configuration.
    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// GET the listing and return the JSON body as-is.
    pub async fn fetch_raw(&self) -> Result<Value> {
        debug!(url = %self.api.base_url, "fetching contests");

        let response = self
            .http
            .get(&self.api.base_url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let body = self.json_body(response).await?;
        debug!(kind = rush_ingestion::raw::json_kind(&body), "contest API responded");
        Ok(body)
    }

    /// Fetch the listing and normalize it at the current time.
    pub async fn fetch_contests(&self) -> Result<Normalized> {
        let payload = self.fetch_raw().await?;
        Ok(self.normalizer.normalize(&payload, Utc::now()))
    }

    /// Run one refresh cycle against `sink`.
    ///
    /// The sink sees `start` and then either `success` (records plus
    /// per-record issues) or `failure`. The records are also returned on
    /// success.
    pub async fn refresh<S>(&self, sink: &mut S) -> Option<Vec<Contest>>
    where
        S: ContestSink + ?Sized,
    {
        sink.start();

        match self.fetch_contests().await {
            Ok(normalized) => {
                sink.success(normalized.clone());
                Some(normalized.into_contests())
            }
            Err(e) => {
                error!(error = %e, "error fetching contests from API");
                sink.failure(e.to_string());
                None
            }
        }
    }

    /// POST results for one contest to `{base_url}{contest_id}/results/`.
    ///
    /// Returns the parsed response body, or `None` on any failure (logged).
    pub async fn post_results(&self, contest_id: &str, results: &Value) -> Option<Value> {
        let url = self.api.results_url(contest_id);
        debug!(%url, "posting contest results");

        match self.send_results(&url, results).await {
            Ok(body) => Some(body),
            Err(e) => {
                error!(error = %e, contest_id, "error posting contest results");
                None
            }
        }
    }

    /// Probe the listing endpoint with a HEAD request.
    pub async fn check_health(&self) -> HealthReport {
        let started = Instant::now();
        let outcome = self.http.head(&self.api.base_url).send().await;
        let checked_at = Utc::now();

        match outcome {
            Ok(response) if response.status().is_success() => HealthReport {
                status: ApiStatus::Online,
                checked_at,
                latency_ms: Some(started.elapsed().as_millis() as u64),
                detail: None,
            },
            Ok(response) => HealthReport {
                status: ApiStatus::Offline,
                checked_at,
                latency_ms: Some(started.elapsed().as_millis() as u64),
                detail: Some(format!("status {}", response.status().as_u16())),
            },
            Err(e) => {
                let e = self.transport_error(e);
                warn!(error = %e, "error checking API status");
                HealthReport {
                    status: ApiStatus::Offline,
                    checked_at,
                    latency_ms: None,
                    detail: Some(e.to_string()),
                }
            }
        }
    }

    /// Fetch the listing without transforming it and summarize the outcome.
    pub async fn sync(&self) -> SyncReport {
        match self.fetch_raw().await {
            Ok(data) => {
                let report = SyncReport::synced(data);
                debug!(message = %report.message, "contest sync finished");
                report
            }
            Err(e) => {
                error!(error = %e, "error syncing contests");
                SyncReport::failed(e.to_string())
            }
        }
    }

    async fn send_results(&self, url: &str, results: &Value) -> Result<Value> {
        let response = self
            .http
            .post(url)
            .json(results)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        self.json_body(response).await
    }

    /// Check the status and decode a JSON body.
    async fn json_body(&self, response: Response) -> Result<Value> {
        let status = response.status();
        if !status.is_success() {
            return Err(Error::UpstreamStatus(status.as_u16()));
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                Error::data(format!("response body is not JSON: {}", e))
            } else {
                self.transport_error(e)
            }
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout(self.api.timeout_ms)
        } else {
            Error::http(e.to_string())
        }
    }
}
