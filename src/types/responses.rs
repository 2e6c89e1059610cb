//! Tipos de resposta do Glossa.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Corpo de resposta do serviço de tradução.
///
/// As traduções vêm indexadas pela mesma chave de texto enviada na
/// requisição, nunca pelo texto original.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiTranslations {
    /// Traduções por chave de texto.
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

/// Resultado detalhado de uma chamada de tradução.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationOutcome {
    /// ID da requisição remota (se houve chamada de rede).
    pub request_id: Option<String>,

    /// Traduções por texto original.
    pub translations: HashMap<String, String>,

    /// Quantos textos foram servidos pelo cache.
    pub cache_hits: usize,

    /// Quantos textos vieram do serviço remoto.
    pub fetched: usize,

    /// Quantos textos caíram no fallback (texto original).
    pub fallbacks: usize,

    /// Timestamp da operação.
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl TranslationOutcome {
    /// Cria um resultado vazio.
    pub fn empty() -> Self {
        Self {
            request_id: None,
            translations: HashMap::new(),
            cache_hits: 0,
            fetched: 0,
            fallbacks: 0,
            timestamp: chrono::Utc::now(),
        }
    }

    /// Total de textos traduzidos (incluindo fallbacks).
    pub fn total(&self) -> usize {
        self.translations.len()
    }

    /// Retorna `true` se nenhuma chamada de rede foi necessária.
    pub fn fully_cached(&self) -> bool {
        self.fetched == 0 && self.fallbacks == 0
    }
}
