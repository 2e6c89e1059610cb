//! Tipos de erro do Glossa.

use thiserror::Error;

/// Tipo de resultado padrão do Glossa.
pub type GlossaResult<T> = Result<T, GlossaError>;

/// Erros possíveis no Glossa.
#[derive(Error, Debug)]
pub enum GlossaError {
    #[error("Erro de configuração: {0}")]
    Config(String),

    #[error("Locale inválido: '{0}'")]
    InvalidLocale(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao parsear TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Erro ao serializar TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Erro de JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Erro de HTTP: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API de tradução retornou status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Configuração não encontrada em: {0}")]
    ConfigNotFound(String),

    #[cfg(feature = "cli")]
    #[error("Erro no prompt interativo: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

impl GlossaError {
    /// Cria um erro genérico.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }

    /// Cria um erro de configuração.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Cria um erro de resposta da API.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
