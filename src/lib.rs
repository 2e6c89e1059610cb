//! # Glossa
//!
//! Cliente de tradução com cache compartilhado.
//!
//! Glossa traduz lotes de textos pelo serviço remoto de tradução,
//! consultando antes um cache limitado e thread-safe compartilhado por
//! todos os clientes do processo, para evitar chamadas de rede
//! redundantes.
//!
//! ## Módulos
//!
//! - [`cache`] - Cache de traduções compartilhado (chave texto + par de locales)
//! - [`client`] - Cliente [`Translator`](client::Translator) e transporte HTTP
//! - [`cli`] - Interface de linha de comando
//! - [`types`] - Tipos compartilhados (config, erros, requisições, respostas)
//!
//! ## Exemplo
//!
//! ```ignore
//! use glossa::client::Translator;
//!
//! #[tokio::main]
//! async fn main() -> glossa::GlossaResult<()> {
//!     let translator = Translator::new("minha-api-key", "en", "fr")?;
//!     let translations = translator.translate(&["Hello, world!"]).await;
//!     println!("{:?}", translations.get("Hello, world!"));
//!     Ok(())
//! }
//! ```

pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod client;
pub mod types;

pub use types::config::Config;
pub use types::errors::{GlossaError, GlossaResult};
