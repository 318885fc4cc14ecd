//! Studio backend HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::dto::{
    AttachAssetBody, AttachAssetResponse, CampaignResponse, CreateCampaignBody, ErrorResponse,
    GenerateBody, GenerateResponse, HealthResponse, PersonaResponse,
};
use crate::domain::entities::{Campaign, CampaignId, GeneratedAsset, Persona, PersonaDraft, PersonaId};
use crate::domain::errors::ApiError;
use crate::domain::ports::{
    AttachReceipt, CampaignPort, GenerateRequest, HealthStatus, PersonaPort, StudioPort,
};

/// Default backend address, the FastAPI dev server.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
const USER_AGENT: &str = concat!("digi-studio/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter implementing every studio port.
pub struct StudioApiClient {
    client: Client,
    base_url: String,
}

impl StudioApiClient {
    /// Creates client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, ApiError> {
        Self::with_base_url(DEFAULT_API_URL, Duration::from_secs(30))
    }

    /// Creates client with custom base URL and per-request timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::unexpected(format!("failed to create HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn send_error(e: &reqwest::Error) -> ApiError {
        warn!(error = %e, "Failed to reach studio backend");
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_connect() {
            ApiError::network("failed to connect to studio backend")
        } else {
            ApiError::network(e.to_string())
        }
    }

    async fn handle_error_response(status: StatusCode, response: Response, resource: &str) -> ApiError {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.into_message().unwrap_or_else(|| format!("HTTP {status}")),
            Err(_) => format!("HTTP {status}"),
        };

        match status {
            StatusCode::NOT_FOUND => ApiError::not_found(resource),
            StatusCode::GATEWAY_TIMEOUT | StatusCode::REQUEST_TIMEOUT => ApiError::Timeout,
            StatusCode::SERVICE_UNAVAILABLE => ApiError::network("studio backend is unavailable"),
            _ => ApiError::status(status.as_u16(), message),
        }
    }

    async fn check(response: Response, resource: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Self::handle_error_response(status, response, resource).await)
        }
    }

    async fn decode<T: DeserializeOwned>(response: Response, resource: &str) -> Result<T, ApiError> {
        let response = Self::check(response, resource).await?;
        response.json::<T>().await.map_err(|e| {
            warn!(resource, error = %e, "Failed to parse backend response");
            ApiError::decode(e.to_string())
        })
    }
}

#[async_trait]
impl PersonaPort for StudioApiClient {
    async fn list_personas(&self) -> Result<Vec<Persona>, ApiError> {
        debug!("Fetching personas");
        let response = self
            .client
            .get(self.url("/api/personas"))
            .send()
            .await
            .map_err(|e| Self::send_error(&e))?;

        let personas: Vec<PersonaResponse> = Self::decode(response, "personas").await?;
        Ok(personas.into_iter().map(Persona::from).collect())
    }

    async fn create_persona(&self, draft: &PersonaDraft) -> Result<Persona, ApiError> {
        let response = self
            .client
            .post(self.url("/api/personas"))
            .json(draft)
            .send()
            .await
            .map_err(|e| Self::send_error(&e))?;

        let created: PersonaResponse = Self::decode(response, "personas").await?;
        Ok(created.into_persona_with(draft))
    }

    async fn delete_persona(&self, id: &PersonaId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/api/personas/{id}")))
            .send()
            .await
            .map_err(|e| Self::send_error(&e))?;

        Self::check(response, &format!("persona {id}")).await?;
        Ok(())
    }
}

#[async_trait]
impl CampaignPort for StudioApiClient {
    async fn list_campaigns(&self) -> Result<Vec<Campaign>, ApiError> {
        debug!("Fetching campaigns");
        let response = self
            .client
            .get(self.url("/api/campaigns"))
            .send()
            .await
            .map_err(|e| Self::send_error(&e))?;

        let campaigns: Vec<CampaignResponse> = Self::decode(response, "campaigns").await?;
        Ok(campaigns.into_iter().map(Campaign::from).collect())
    }

    async fn create_campaign(&self, name: &str) -> Result<Campaign, ApiError> {
        let response = self
            .client
            .post(self.url("/api/campaigns"))
            .json(&CreateCampaignBody { name })
            .send()
            .await
            .map_err(|e| Self::send_error(&e))?;

        let created: CampaignResponse = Self::decode(response, "campaigns").await?;
        Ok(created.into())
    }

    async fn attach_asset(
        &self,
        campaign_id: &CampaignId,
        asset: &GeneratedAsset,
    ) -> Result<AttachReceipt, ApiError> {
        let body = AttachAssetBody {
            url: asset.url(),
            asset_type: asset.asset_type(),
            persona_id: asset.persona_id().as_str(),
        };
        let resource = format!("campaign {campaign_id}");

        let response = self
            .client
            .post(self.url(&format!("/api/campaigns/{campaign_id}/assets")))
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::send_error(&e))?;

        let response = Self::check(response, &resource).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("failed to read {resource} ack: {e}")))?;
        // An empty ack body still counts as success.
        let ack = if body.iter().all(u8::is_ascii_whitespace) {
            AttachAssetResponse::default()
        } else {
            serde_json::from_slice::<AttachAssetResponse>(&body).map_err(|e| {
                warn!(resource = %resource, error = %e, "Failed to parse attach ack");
                ApiError::decode(e.to_string())
            })?
        };

        if ack.is_error() {
            return Err(ApiError::rejected(
                ack.message.unwrap_or_else(|| format!("{resource} refused the asset")),
            ));
        }

        Ok(AttachReceipt {
            asset_count: ack.new_count,
        })
    }
}

#[async_trait]
impl StudioPort for StudioApiClient {
    async fn health_check(&self) -> Result<HealthStatus, ApiError> {
        debug!("Performing studio backend health check");
        let response = self
            .client
            .get(self.url("/health"))
            .send()
            .await
            .map_err(|e| Self::send_error(&e))?;

        let health: HealthResponse = Self::decode(response, "health").await?;
        Ok(HealthStatus {
            status: health.status,
            service: health.service,
        })
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<GeneratedAsset, ApiError> {
        let body = GenerateBody {
            asset_type: request.asset_type,
            persona_id: request.persona_id.as_str(),
            prompt: &request.prompt,
        };

        let response = self
            .client
            .post(self.url("/api/generate"))
            .json(&body)
            .send()
            .await
            .map_err(|e| Self::send_error(&e))?;

        let generated: GenerateResponse = Self::decode(response, "generation").await?;
        Ok(GeneratedAsset::new(
            generated.url,
            request.asset_type,
            request.persona_id.clone(),
        ))
    }

    async fn fetch_asset(&self, url: &str) -> Result<Bytes, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Self::send_error(&e))?;

        let response = Self::check(response, "asset").await?;
        response
            .bytes()
            .await
            .map_err(|e| ApiError::network(format!("failed to read asset body: {e}")))
    }
}
