//! Cliente de tradução do Glossa.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, warn};

use super::backend::TranslationBackend;
use super::hashing::text_key;
use super::http::HttpBackend;
use super::locale::validate_locale;
use crate::cache::{self, CacheStats, TranslationCache};
use crate::types::config::{ApiConfig, Config};
use crate::types::requests::{ExistingTranslationsRequest, TranslationRequest};
use crate::types::responses::TranslationOutcome;
use crate::{GlossaError, GlossaResult};

/// Cliente do serviço de tradução.
///
/// Cada instância traduz de um locale de origem para um locale de destino.
/// Por padrão todas as instâncias do processo compartilham o cache global:
/// uma tradução buscada por um cliente fica disponível para os demais sem
/// nova chamada de rede.
pub struct Translator {
    source: String,
    target: String,
    backend: Arc<dyn TranslationBackend>,
    cache: Arc<TranslationCache>,
    max_batch_size: usize,
    // Traduções já armazenadas no serviço para o par ativo,
    // indexadas pela chave de texto (preenchido por prefetch_existing)
    existing: Mutex<HashMap<String, String>>,
}

impl Translator {
    /// Cria um novo tradutor usando o backend HTTP padrão e o cache global.
    ///
    /// Falha se a API key for vazia ou algum locale for inválido.
    pub fn new(
        api_key: impl Into<String>,
        source_locale: impl Into<String>,
        target_locale: impl Into<String>,
    ) -> GlossaResult<Self> {
        let api_config = ApiConfig {
            api_key: api_key.into(),
            ..ApiConfig::default()
        };
        let config = Config {
            api: api_config,
            ..Config::default()
        };
        Self::from_config(&config, source_locale, target_locale)
    }

    /// Cria um tradutor a partir de uma configuração completa.
    ///
    /// Com `cache.shared = false` a instância recebe um cache privado com a
    /// capacidade configurada em vez do cache global do processo.
    pub fn from_config(
        config: &Config,
        source_locale: impl Into<String>,
        target_locale: impl Into<String>,
    ) -> GlossaResult<Self> {
        if config.api.api_key.trim().is_empty() {
            return Err(GlossaError::config("API key não pode ser vazia"));
        }

        let backend = Arc::new(HttpBackend::from_config(&config.api)?);
        let cache = if config.cache.shared {
            cache::global_cache()
        } else {
            Arc::new(TranslationCache::new(config.cache.capacity))
        };

        let mut translator =
            Self::with_backend(backend, source_locale, target_locale)?.with_cache(cache);
        translator.max_batch_size = config.api.max_batch_size.max(1);
        Ok(translator)
    }

    /// Cria um tradutor com um backend customizado e o cache global.
    ///
    /// É o ponto de entrada para testes e transportes alternativos.
    pub fn with_backend(
        backend: Arc<dyn TranslationBackend>,
        source_locale: impl Into<String>,
        target_locale: impl Into<String>,
    ) -> GlossaResult<Self> {
        let source = source_locale.into();
        let target = target_locale.into();
        validate_locale(&source)?;
        validate_locale(&target)?;

        Ok(Self {
            source,
            target,
            backend,
            cache: cache::global_cache(),
            max_batch_size: ApiConfig::default().max_batch_size,
            existing: Mutex::new(HashMap::new()),
        })
    }

    /// Substitui o cache usado pela instância.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<TranslationCache>) -> Self {
        self.cache = cache;
        self
    }

    /// Usa um cache privado (não compartilhado) com a capacidade dada.
    #[must_use]
    pub fn with_private_cache(self, capacity: usize) -> Self {
        self.with_cache(Arc::new(TranslationCache::new(capacity)))
    }

    /// Define o tamanho máximo de lote por requisição.
    #[must_use]
    pub fn with_max_batch_size(mut self, max_batch_size: usize) -> Self {
        self.max_batch_size = max_batch_size.max(1);
        self
    }

    /// Locale de origem ativo.
    pub fn source_locale(&self) -> &str {
        &self.source
    }

    /// Locale de destino ativo.
    pub fn target_locale(&self) -> &str {
        &self.target
    }

    /// Troca o par de locales ativo.
    ///
    /// O cache mantém as entradas de todos os pares; apenas as traduções
    /// pré-carregadas do serviço são descartadas, por serem do par anterior.
    pub fn set_languages(
        &mut self,
        source_locale: impl Into<String>,
        target_locale: impl Into<String>,
    ) -> GlossaResult<()> {
        let source = source_locale.into();
        let target = target_locale.into();
        validate_locale(&source)?;
        validate_locale(&target)?;

        self.source = source;
        self.target = target;
        self.lock_existing().clear();
        Ok(())
    }

    /// Retorna o cache usado por esta instância.
    pub fn cache(&self) -> Arc<TranslationCache> {
        Arc::clone(&self.cache)
    }

    /// Número total de entradas no cache (todos os pares de locales).
    pub fn cache_size(&self) -> usize {
        self.cache.size()
    }

    /// Estatísticas do cache desta instância.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Remove do cache as entradas do par de locales ativo.
    pub fn clear_cache(&self) {
        self.cache.clear_pair(&self.source, &self.target);
    }

    /// Limpa o cache global compartilhado do processo (todos os pares).
    pub fn clear_global_cache() {
        cache::clear_global_cache();
    }

    /// Pré-carrega as traduções já armazenadas no serviço para o par ativo.
    ///
    /// Retorna quantas traduções foram carregadas. A resposta "nada
    /// armazenado" do serviço não é um erro e carrega zero.
    pub async fn prefetch_existing(&self) -> GlossaResult<usize> {
        let request = ExistingTranslationsRequest::new(&self.source, &self.target);

        match self.backend.fetch_existing(&request).await? {
            None => {
                debug!(
                    source = %self.source,
                    target = %self.target,
                    "Serviço não tem traduções armazenadas para o par"
                );
                Ok(0)
            }
            Some(payload) => {
                let count = payload.translations.len();
                self.lock_existing().extend(payload.translations);
                debug!(
                    source = %self.source,
                    target = %self.target,
                    count,
                    "Traduções existentes pré-carregadas"
                );
                Ok(count)
            }
        }
    }

    /// Traduz um lote de textos.
    ///
    /// Retorna um mapa de texto original para texto traduzido cobrindo
    /// todas as entradas. A operação é total: falhas do serviço remoto
    /// resultam no texto original como tradução (fallback), nunca em erro.
    pub async fn translate<S: AsRef<str>>(&self, texts: &[S]) -> HashMap<String, String> {
        self.translate_report(texts).await.translations
    }

    /// Traduz um único texto.
    pub async fn translate_one(&self, text: &str) -> String {
        self.translate(&[text])
            .await
            .remove(text)
            .unwrap_or_else(|| text.to_string())
    }

    /// Traduz um lote de textos retornando o resultado detalhado.
    ///
    /// Mesma semântica de [`translate`](Self::translate), com contadores de
    /// cache hits, textos buscados no serviço e fallbacks.
    pub async fn translate_report<S: AsRef<str>>(&self, texts: &[S]) -> TranslationOutcome {
        let mut outcome = TranslationOutcome::empty();
        let mut missing: Vec<String> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for text in texts {
            let text = text.as_ref();
            if !seen.insert(text) {
                continue;
            }

            // Texto vazio ou só de espaços traduz para ele mesmo, sem rede
            if text.trim().is_empty() {
                outcome.translations.insert(text.to_string(), text.to_string());
                continue;
            }

            if let Some(translated) = self.cache.get(text, &self.source, &self.target) {
                outcome.translations.insert(text.to_string(), translated);
                outcome.cache_hits += 1;
                continue;
            }

            // Tradução pré-carregada do serviço: promove para o cache
            let prefetched = self.lock_existing().get(&text_key(text)).cloned();
            if let Some(translated) = prefetched {
                self.cache.set(text, &translated, &self.source, &self.target);
                outcome.translations.insert(text.to_string(), translated);
                outcome.cache_hits += 1;
                continue;
            }

            missing.push(text.to_string());
        }

        if missing.is_empty() {
            return outcome;
        }

        for chunk in missing.chunks(self.max_batch_size) {
            let keyed: HashMap<String, String> = chunk
                .iter()
                .map(|text| (text_key(text), text.clone()))
                .collect();
            let request =
                TranslationRequest::new(&self.source, &self.target).with_texts(keyed);

            if outcome.request_id.is_none() {
                outcome.request_id = Some(request.request_id.clone());
            }

            match self.backend.translate_batch(&request).await {
                Ok(payload) => {
                    let mut fetched: HashMap<String, String> = HashMap::new();
                    for text in chunk {
                        match payload.translations.get(&text_key(text)) {
                            Some(translated) => {
                                fetched.insert(text.clone(), translated.clone());
                            }
                            None => {
                                warn!(text = %text, "Resposta do serviço sem tradução para o texto");
                                outcome
                                    .translations
                                    .insert(text.clone(), text.clone());
                                outcome.fallbacks += 1;
                            }
                        }
                    }

                    // Inserção em bloco: o cache despeja no máximo o
                    // excedente de entradas novas, de uma vez
                    self.cache.set_batch(&fetched, &self.source, &self.target);
                    outcome.fetched += fetched.len();
                    outcome.translations.extend(fetched);
                }
                Err(e) => {
                    warn!(
                        backend = self.backend.name(),
                        error = %e,
                        texts = chunk.len(),
                        "Falha na tradução remota, usando texto original"
                    );
                    for text in chunk {
                        outcome.translations.insert(text.clone(), text.clone());
                        outcome.fallbacks += 1;
                    }
                }
            }
        }

        outcome
    }

    fn lock_existing(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.existing.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
