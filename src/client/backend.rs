//! Trait base para backends de tradução.

use async_trait::async_trait;

use crate::types::requests::{ExistingTranslationsRequest, TranslationRequest};
use crate::types::responses::ApiTranslations;
use crate::GlossaResult;

/// Trait para backends do serviço de tradução.
///
/// Um backend encapsula o transporte até o serviço remoto e fornece uma
/// interface unificada para o [`Translator`](crate::client::Translator).
/// A implementação de produção é [`HttpBackend`](crate::client::HttpBackend);
/// testes substituem por um backend em memória.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Retorna o nome do backend.
    fn name(&self) -> &str;

    /// Traduz um lote de textos.
    ///
    /// # Arguments
    ///
    /// * `request` - Requisição com os textos indexados pela chave de texto
    ///
    /// # Returns
    ///
    /// Traduções indexadas pela mesma chave de texto da requisição.
    async fn translate_batch(&self, request: &TranslationRequest) -> GlossaResult<ApiTranslations>;

    /// Busca traduções já armazenadas no serviço para um par de locales.
    ///
    /// Retorna `Ok(None)` quando o serviço não tem nada armazenado para o
    /// par (a resposta "não há traduções" não é um erro).
    async fn fetch_existing(
        &self,
        request: &ExistingTranslationsRequest,
    ) -> GlossaResult<Option<ApiTranslations>>;

    /// Verifica se o serviço está acessível.
    async fn is_reachable(&self) -> bool {
        true
    }
}
