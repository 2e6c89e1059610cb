//! Backend HTTP do serviço de tradução.

use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::debug;

use super::backend::TranslationBackend;
use crate::types::config::ApiConfig;
use crate::types::requests::{ExistingTranslationsRequest, TranslationRequest};
use crate::types::responses::ApiTranslations;
use crate::{GlossaError, GlossaResult};

/// Header de autenticação da API.
const API_KEY_HEADER: &str = "x-api-key";

/// Backend HTTP (reqwest + rustls) do serviço de tradução.
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpBackend {
    /// Cria um novo backend HTTP.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Chave de autenticação da API
    /// * `base_url` - URL base do serviço
    /// * `timeout` - Timeout por requisição
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> GlossaResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Cria um backend a partir da configuração da API.
    pub fn from_config(config: &ApiConfig) -> GlossaResult<Self> {
        Self::new(
            config.api_key.clone(),
            config.base_url.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Monta a URL de um endpoint.
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Envia um POST autenticado com corpo JSON.
    async fn post<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> GlossaResult<reqwest::Response> {
        let response = self
            .client
            .post(self.endpoint(path))
            .header(API_KEY_HEADER, &self.api_key)
            .json(body)
            .send()
            .await?;
        Ok(response)
    }
}

#[async_trait]
impl TranslationBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn translate_batch(&self, request: &TranslationRequest) -> GlossaResult<ApiTranslations> {
        debug!(
            request_id = %request.request_id,
            texts = request.len(),
            "Enviando lote de tradução"
        );

        let response = self.post("v1/translate", request).await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GlossaError::api(status.as_u16(), message));
        }

        let payload: ApiTranslations = response.json().await?;
        Ok(payload)
    }

    async fn fetch_existing(
        &self,
        request: &ExistingTranslationsRequest,
    ) -> GlossaResult<Option<ApiTranslations>> {
        let response = self.post("v1/translations/existing", request).await?;
        let status = response.status();

        // 404 = nenhuma tradução armazenada para o par
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GlossaError::api(status.as_u16(), message));
        }

        let payload: ApiTranslations = response.json().await?;
        Ok(Some(payload))
    }

    async fn is_reachable(&self) -> bool {
        self.client
            .get(self.endpoint("v1/health"))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}
