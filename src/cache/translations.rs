//! Cache compartilhado de traduções.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lru::LruCache;
use once_cell::sync::Lazy;

/// Capacidade padrão do cache (número de entradas).
pub const DEFAULT_CAPACITY: usize = 1000;

/// Chave composta de uma entrada do cache.
///
/// Duas chaves são iguais somente quando texto, locale de origem e locale
/// de destino coincidem exatamente (comparação case-sensitive, sem
/// normalização).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    /// Texto original.
    pub text: String,

    /// Locale de origem.
    pub source: String,

    /// Locale de destino.
    pub target: String,
}

impl CacheKey {
    /// Cria uma nova chave composta.
    pub fn new(
        text: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            source: source.into(),
            target: target.into(),
        }
    }

    /// Retorna `true` se a chave pertence ao par de locales dado.
    fn matches_pair(&self, source: &str, target: &str) -> bool {
        self.source == source && self.target == target
    }
}

/// Estatísticas do cache.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Número atual de entradas.
    pub size: usize,

    /// Capacidade máxima.
    pub capacity: usize,

    /// Número de acertos (cache hits).
    pub hits: u64,

    /// Número de erros (cache misses).
    pub misses: u64,
}

impl CacheStats {
    /// Calcula a taxa de acerto.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Cache de traduções com limite de capacidade e despejo por ordem de inserção.
///
/// Todas as operações são atômicas sob um único lock interno, então a mesma
/// instância pode ser usada por várias threads sem sincronização externa.
/// Quando a capacidade é excedida por uma chave nova, a entrada inserida há
/// mais tempo é removida. Sobrescrever uma chave existente renova a posição
/// dela na ordem de despejo; leituras nunca alteram a ordem.
pub struct TranslationCache {
    entries: Mutex<LruCache<CacheKey, String>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl TranslationCache {
    /// Cria um novo cache com a capacidade dada.
    ///
    /// Capacidade zero é ajustada para [`DEFAULT_CAPACITY`].
    pub fn new(capacity: usize) -> Self {
        let cap =
            NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::new(DEFAULT_CAPACITY).unwrap());
        Self {
            entries: Mutex::new(LruCache::new(cap)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cria um cache com a capacidade padrão.
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }

    /// Busca a tradução de um texto para um par de locales.
    ///
    /// Retorna `None` se não houver entrada. A leitura não altera a ordem
    /// de despejo.
    pub fn get(&self, text: &str, source: &str, target: &str) -> Option<String> {
        let key = CacheKey::new(text, source, target);
        let entries = self.lock();
        // peek não reordena: leitura não conta como uso para o despejo
        let value = entries.peek(&key).cloned();
        drop(entries);

        match value {
            Some(v) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(v)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insere ou sobrescreve a tradução de um texto.
    ///
    /// Se a chave é nova e o cache está cheio, a entrada mais antiga é
    /// removida antes da inserção.
    pub fn set(&self, text: &str, translated: &str, source: &str, target: &str) {
        let key = CacheKey::new(text, source, target);
        let mut entries = self.lock();
        entries.put(key, translated.to_string());
    }

    /// Insere um lote de traduções para um par de locales.
    ///
    /// O lote é aplicado como uma única operação: o número de chaves
    /// realmente novas é calculado antes, apenas o excedente de entradas
    /// mais antigas é removido, e nenhuma thread observa o cache acima da
    /// capacidade. Um lote vazio não tem efeito.
    pub fn set_batch(&self, translations: &HashMap<String, String>, source: &str, target: &str) {
        if translations.is_empty() {
            return;
        }

        let mut entries = self.lock();

        let net_new = translations
            .keys()
            .filter(|text| !entries.contains(&CacheKey::new(text.as_str(), source, target)))
            .count();

        let capacity = entries.cap().get();
        let overflow = (entries.len() + net_new).saturating_sub(capacity);
        for _ in 0..overflow {
            if entries.pop_lru().is_none() {
                break;
            }
        }

        for (text, translated) in translations {
            entries.put(CacheKey::new(text.as_str(), source, target), translated.clone());
        }
    }

    /// Remove todas as entradas de todos os pares de locales.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Remove apenas as entradas de um par de locales específico.
    pub fn clear_pair(&self, source: &str, target: &str) {
        let mut entries = self.lock();
        let to_remove: Vec<CacheKey> = entries
            .iter()
            .filter(|(key, _)| key.matches_pair(source, target))
            .map(|(key, _)| key.clone())
            .collect();

        for key in to_remove {
            entries.pop(&key);
        }
    }

    /// Número atual de entradas (todos os pares de locales).
    pub fn size(&self) -> usize {
        self.lock().len()
    }

    /// Capacidade máxima do cache.
    pub fn capacity(&self) -> usize {
        self.lock().cap().get()
    }

    /// Retorna estatísticas do cache.
    pub fn stats(&self) -> CacheStats {
        let entries = self.lock();
        CacheStats {
            size: entries.len(),
            capacity: entries.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    /// Adquire o lock interno, recuperando de poisoning.
    ///
    /// Nenhuma operação do cache pode deixar o mapa em estado inválido,
    /// então um lock envenenado ainda contém dados consistentes.
    fn lock(&self) -> MutexGuard<'_, LruCache<CacheKey, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TranslationCache {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

/// Instância global do cache, criada na primeira chamada de [`global_cache`].
static GLOBAL_CACHE: Lazy<Arc<TranslationCache>> =
    Lazy::new(|| Arc::new(TranslationCache::with_default_capacity()));

/// Retorna o cache global compartilhado do processo.
///
/// Todas as chamadas retornam a mesma instância; traduções inseridas por um
/// cliente ficam visíveis para todos os outros que usam o cache global.
pub fn global_cache() -> Arc<TranslationCache> {
    Arc::clone(&GLOBAL_CACHE)
}

/// Limpa todas as entradas do cache global.
///
/// A instância continua a mesma: referências já obtidas via
/// [`global_cache`] permanecem válidas e passam a observar o cache vazio.
pub fn clear_global_cache() {
    GLOBAL_CACHE.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let cache = TranslationCache::new(10);

        assert_eq!(cache.size(), 0);
        assert!(cache.get("Hello", "en", "fr").is_none());

        cache.set("Hello", "Bonjour", "en", "fr");
        assert_eq!(cache.get("Hello", "en", "fr").as_deref(), Some("Bonjour"));
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_language_pair_isolation() {
        let cache = TranslationCache::new(10);

        // Mesmo texto, pares diferentes = entradas separadas
        cache.set("Hello", "Bonjour", "en", "fr");
        cache.set("Hello", "Hola", "en", "es");
        cache.set("Hello", "Guten Tag", "en", "de");

        assert_eq!(cache.get("Hello", "en", "fr").as_deref(), Some("Bonjour"));
        assert_eq!(cache.get("Hello", "en", "es").as_deref(), Some("Hola"));
        assert_eq!(cache.get("Hello", "en", "de").as_deref(), Some("Guten Tag"));
        assert_eq!(cache.size(), 3);
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let cache = TranslationCache::new(10);

        cache.set("Hello", "Bonjour", "en", "fr");
        assert!(cache.get("hello", "en", "fr").is_none());
        assert!(cache.get("Hello", "EN", "fr").is_none());
    }

    #[test]
    fn test_overwrite_keeps_size() {
        let cache = TranslationCache::new(10);

        cache.set("Hello", "Bonjour", "en", "fr");
        cache.set("Hello", "Salut", "en", "fr");

        assert_eq!(cache.get("Hello", "en", "fr").as_deref(), Some("Salut"));
        assert_eq!(cache.size(), 1);
    }

    #[test]
    fn test_fifo_eviction() {
        let cache = TranslationCache::new(3);

        cache.set("a", "1", "en", "fr");
        cache.set("b", "2", "en", "fr");
        cache.set("c", "3", "en", "fr");
        // Leituras não devem proteger "a" do despejo
        assert!(cache.get("a", "en", "fr").is_some());

        cache.set("d", "4", "en", "fr");

        assert!(cache.get("a", "en", "fr").is_none());
        assert!(cache.get("b", "en", "fr").is_some());
        assert!(cache.get("c", "en", "fr").is_some());
        assert!(cache.get("d", "en", "fr").is_some());
        assert_eq!(cache.size(), 3);
    }

    #[test]
    fn test_eviction_is_one_for_one() {
        let cache = TranslationCache::new(3);

        for (i, text) in ["a", "b", "c", "d", "e"].iter().enumerate() {
            cache.set(text, &i.to_string(), "en", "fr");
            assert!(cache.size() <= 3);
        }

        // Apenas os 3 últimos permanecem
        assert!(cache.get("a", "en", "fr").is_none());
        assert!(cache.get("b", "en", "fr").is_none());
        assert!(cache.get("c", "en", "fr").is_some());
        assert!(cache.get("d", "en", "fr").is_some());
        assert!(cache.get("e", "en", "fr").is_some());
    }

    #[test]
    fn test_overwrite_refreshes_eviction_order() {
        let cache = TranslationCache::new(3);

        cache.set("a", "1", "en", "fr");
        cache.set("b", "2", "en", "fr");
        cache.set("c", "3", "en", "fr");

        // Sobrescrever "a" renova a posição dela; "b" vira a mais antiga
        cache.set("a", "1bis", "en", "fr");
        cache.set("d", "4", "en", "fr");

        assert!(cache.get("a", "en", "fr").is_some());
        assert!(cache.get("b", "en", "fr").is_none());
    }

    #[test]
    fn test_set_batch() {
        let cache = TranslationCache::new(10);

        let translations = HashMap::from([
            ("Hello".to_string(), "Bonjour".to_string()),
            ("Goodbye".to_string(), "Au revoir".to_string()),
            ("Thank you".to_string(), "Merci".to_string()),
        ]);

        cache.set_batch(&translations, "en", "fr");
        assert_eq!(cache.size(), 3);

        for (english, french) in &translations {
            assert_eq!(cache.get(english, "en", "fr"), Some(french.clone()));
        }
    }

    #[test]
    fn test_set_batch_with_eviction() {
        let cache = TranslationCache::new(5);

        for i in 0..5 {
            cache.set(&format!("text_{i}"), &format!("translation_{i}"), "en", "fr");
        }
        assert_eq!(cache.size(), 5);

        let batch = HashMap::from([
            ("new_1".to_string(), "trans_1".to_string()),
            ("new_2".to_string(), "trans_2".to_string()),
        ]);
        cache.set_batch(&batch, "en", "fr");

        // Continua no limite, com as novas presentes e as 2 mais antigas fora
        assert_eq!(cache.size(), 5);
        assert_eq!(cache.get("new_1", "en", "fr").as_deref(), Some("trans_1"));
        assert_eq!(cache.get("new_2", "en", "fr").as_deref(), Some("trans_2"));
        assert!(cache.get("text_0", "en", "fr").is_none());
        assert!(cache.get("text_1", "en", "fr").is_none());
        assert!(cache.get("text_2", "en", "fr").is_some());
    }

    #[test]
    fn test_set_batch_overwrite_has_no_capacity_impact() {
        let cache = TranslationCache::new(3);

        cache.set("Hello", "Bonjour", "en", "fr");
        cache.set("Goodbye", "Au revoir", "en", "fr");

        let batch = HashMap::from([
            ("Hello".to_string(), "Salut".to_string()),
            ("Thank you".to_string(), "Merci".to_string()),
        ]);
        cache.set_batch(&batch, "en", "fr");

        assert_eq!(cache.size(), 3);
        assert_eq!(cache.get("Hello", "en", "fr").as_deref(), Some("Salut"));
        assert_eq!(cache.get("Goodbye", "en", "fr").as_deref(), Some("Au revoir"));
        assert_eq!(cache.get("Thank you", "en", "fr").as_deref(), Some("Merci"));
    }

    #[test]
    fn test_set_batch_larger_than_capacity() {
        let cache = TranslationCache::new(3);

        let batch: HashMap<String, String> =
            (0..10).map(|i| (format!("t{i}"), format!("v{i}"))).collect();
        cache.set_batch(&batch, "en", "fr");

        assert_eq!(cache.size(), 3);
    }

    #[test]
    fn test_empty_batch_is_noop() {
        let cache = TranslationCache::new(10);

        cache.set("Hello", "Bonjour", "en", "fr");
        cache.set_batch(&HashMap::new(), "en", "fr");

        assert_eq!(cache.size(), 1);
        assert_eq!(cache.get("Hello", "en", "fr").as_deref(), Some("Bonjour"));
    }

    #[test]
    fn test_clear_pair() {
        let cache = TranslationCache::new(10);

        cache.set("Hello", "Bonjour", "en", "fr");
        cache.set("Hello", "Hola", "en", "es");
        cache.set("Goodbye", "Adiós", "en", "es");
        assert_eq!(cache.size(), 3);

        cache.clear_pair("en", "fr");

        assert!(cache.get("Hello", "en", "fr").is_none());
        assert_eq!(cache.get("Hello", "en", "es").as_deref(), Some("Hola"));
        assert_eq!(cache.size(), 2);
    }

    #[test]
    fn test_clear_all() {
        let cache = TranslationCache::new(10);

        cache.set("Hello", "Bonjour", "en", "fr");
        cache.set("Hello", "Hola", "en", "es");

        cache.clear();
        assert_eq!(cache.size(), 0);
        assert!(cache.get("Hello", "en", "fr").is_none());
    }

    #[test]
    fn test_zero_capacity_falls_back_to_default() {
        let cache = TranslationCache::new(0);
        assert_eq!(cache.capacity(), DEFAULT_CAPACITY);
    }

    #[test]
    fn test_stats() {
        let cache = TranslationCache::new(10);

        cache.set("Hello", "Bonjour", "en", "fr");

        cache.get("Hello", "en", "fr"); // hit
        cache.get("Missing", "en", "fr"); // miss
        cache.get("Hello", "en", "fr"); // hit

        let stats = cache.stats();
        assert_eq!(stats.size, 1);
        assert_eq!(stats.capacity, 10);
        assert_eq!(stats.hits, 2);
        assert_eq!(stats.misses, 1);
        assert!((stats.hit_rate() - 0.666).abs() < 0.01);
    }

    #[test]
    fn test_concurrent_access() {
        use std::thread;

        let cache = Arc::new(TranslationCache::new(1000));
        let mut handles = Vec::new();

        for thread_id in 0..5 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    let text = format!("text_{thread_id}_{i}");
                    let translation = format!("translation_{thread_id}_{i}");
                    cache.set(&text, &translation, "en", "fr");
                }
                for i in 0..100 {
                    let text = format!("text_{thread_id}_{i}");
                    let expected = format!("translation_{thread_id}_{i}");
                    assert_eq!(cache.get(&text, "en", "fr"), Some(expected));
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        assert_eq!(cache.size(), 500);
    }

    #[test]
    fn test_concurrent_batches_respect_capacity() {
        use std::thread;

        let cache = Arc::new(TranslationCache::new(50));
        let mut handles = Vec::new();

        for thread_id in 0..4 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for round in 0..20 {
                    let batch: HashMap<String, String> = (0..10)
                        .map(|i| (format!("t{thread_id}_{round}_{i}"), format!("v{i}")))
                        .collect();
                    cache.set_batch(&batch, "en", "fr");
                    assert!(cache.size() <= 50);
                }
            }));
        }

        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        assert!(cache.size() <= 50);
    }

    #[test]
    fn test_global_cache_is_singleton() {
        // Par de locales exclusivo deste teste para não interferir com
        // outros testes que usam o cache global em paralelo
        let first = global_cache();
        let second = global_cache();
        assert!(Arc::ptr_eq(&first, &second));

        first.set("Hello", "Hallo", "en", "de-singleton-test");
        assert_eq!(
            second.get("Hello", "en", "de-singleton-test").as_deref(),
            Some("Hallo")
        );

        first.clear_pair("en", "de-singleton-test");
    }
}
