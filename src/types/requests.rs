//! Tipos de requisição do Glossa.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Requisição de tradução em lote enviada ao serviço remoto.
///
/// Os textos são indexados pela chave de 32 bits calculada por
/// [`crate::client::text_key`], o mesmo esquema usado pelos SDKs das
/// outras plataformas do serviço.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationRequest {
    /// ID único da requisição.
    pub request_id: String,

    /// Locale de origem.
    pub source_locale: String,

    /// Locale de destino.
    pub target_locale: String,

    /// Textos a traduzir, indexados pela chave de texto.
    pub texts: HashMap<String, String>,
}

impl TranslationRequest {
    /// Cria uma nova requisição de tradução.
    pub fn new(source_locale: impl Into<String>, target_locale: impl Into<String>) -> Self {
        Self {
            request_id: uuid::Uuid::new_v4().to_string(),
            source_locale: source_locale.into(),
            target_locale: target_locale.into(),
            texts: HashMap::new(),
        }
    }

    /// Define os textos da requisição.
    pub fn with_texts(mut self, texts: HashMap<String, String>) -> Self {
        self.texts = texts;
        self
    }

    /// Número de textos na requisição.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// Retorna `true` se não há textos a traduzir.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Requisição de traduções já existentes no serviço para um par de locales.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExistingTranslationsRequest {
    /// Locale de origem.
    pub source_locale: String,

    /// Locale de destino.
    pub target_locale: String,
}

impl ExistingTranslationsRequest {
    /// Cria uma nova requisição de traduções existentes.
    pub fn new(source_locale: impl Into<String>, target_locale: impl Into<String>) -> Self {
        Self {
            source_locale: source_locale.into(),
            target_locale: target_locale.into(),
        }
    }
}
