use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::http_client::build_http_client;
use crate::models::{OnPageData, TechnicalData};

/// Shown in place of recommendations whenever the insight service cannot be
/// reached or returns something unusable.
pub const INSIGHTS_FALLBACK: &str = "We couldn't generate AI-powered insights at this time. \
     Please check your setup and try again.";

/// Request timeout for the insight service, in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Serialize)]
struct InsightRequest {
    #[serde(rename = "onPageSeoData")]
    on_page_seo_data: String,
    #[serde(rename = "technicalSeoData")]
    technical_seo_data: String,
}

#[derive(Debug, Deserialize)]
struct InsightResponse {
    recommendations: String,
}

/// Injected capability that turns structured audit data into a prose
/// recommendation paragraph. Tests substitute a double for this trait so the
/// core never depends on a live service.
#[async_trait]
pub trait InsightService {
    async fn request_insights(
        &self,
        on_page: &OnPageData,
        technical: &TechnicalData,
    ) -> Result<String>;
}

/// HTTP-backed insight service: POSTs the pretty-printed audit groups to a
/// text-completion endpoint and expects `{ "recommendations": "..." }` back.
pub struct HttpInsightService {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpInsightService {
    pub fn new(endpoint: String, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            client: build_http_client(REQUEST_TIMEOUT_SECS)?,
            endpoint,
            api_key,
        })
    }
}

#[async_trait]
impl InsightService for HttpInsightService {
    async fn request_insights(
        &self,
        on_page: &OnPageData,
        technical: &TechnicalData,
    ) -> Result<String> {
        if self.endpoint.is_empty() {
            bail!("no insight endpoint configured");
        }

        let body = InsightRequest {
            on_page_seo_data: serde_json::to_string_pretty(on_page)?,
            technical_seo_data: serde_json::to_string_pretty(technical)?,
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .context("Failed to send request to insight service")?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            bail!("Insight service error {}: {}", status, error_text);
        }

        let parsed: InsightResponse = response
            .json()
            .await
            .context("Failed to parse insight service response")?;

        Ok(parsed.recommendations)
    }
}

/// Requests recommendations and recovers locally from every failure kind
/// (network, timeout, non-2xx, malformed schema) by substituting the fixed
/// fallback string. Never propagates an error to the caller.
pub async fn generate_insights(
    service: &dyn InsightService,
    on_page: &OnPageData,
    technical: &TechnicalData,
) -> String {
    match service.request_insights(on_page, technical).await {
        Ok(recommendations) => recommendations,
        Err(e) => {
            tracing::warn!(error = %e, "Insight generation failed, using fallback message");
            INSIGHTS_FALLBACK.to_string()
        }
    }
}
