//! Cache compartilhado de traduções.
//!
//! Este módulo implementa o cache de traduções usado por todos os
//! [`Translator`](crate::client::Translator) do processo: um armazenamento
//! chave-valor limitado, thread-safe, com despejo por ordem de inserção e
//! uma instância global preguiçosa para compartilhamento entre clientes.

mod translations;

pub use translations::{
    clear_global_cache, global_cache, CacheKey, CacheStats, TranslationCache, DEFAULT_CAPACITY,
};
