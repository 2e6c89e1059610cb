//! Cliente de tradução do Glossa.
//!
//! Este módulo contém o cliente [`Translator`], o trait de transporte
//! [`TranslationBackend`] e a implementação HTTP de produção.

mod backend;
mod hashing;
mod http;
mod locale;
mod translator;

pub use backend::TranslationBackend;
pub use hashing::text_key;
pub use http::HttpBackend;
pub use locale::validate_locale;
pub use translator::Translator;
