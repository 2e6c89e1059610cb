//! Implementação dos comandos CLI do Glossa.

use std::collections::HashMap;
use std::path::PathBuf;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cache;
use crate::client::{HttpBackend, TranslationBackend, Translator};
use crate::types::config::Config;
use crate::GlossaResult;

/// Initializes configuration in the specified directory.
pub async fn init(path: Option<PathBuf>) -> GlossaResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("glossa.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        println!("Use 'glossa config' to modify.");
        return Ok(());
    }

    // The config file carries the API key, keep it out of version control
    update_gitignore(&target_dir)?;

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Glossa initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!();
    println!("Next steps:");
    println!("  1. Set your API key: glossa config");
    println!("  2. Check the service: glossa status");
    println!("  3. Translate: glossa translate --from en --to fr \"Hello\"");

    Ok(())
}

/// Updates or creates .gitignore to include glossa.toml.
fn update_gitignore(target_dir: &PathBuf) -> GlossaResult<()> {
    let gitignore_path = target_dir.join(".gitignore");
    let glossa_entry = "glossa.toml";
    let glossa_comment = "# Glossa - local configuration (contains the API key)";

    if gitignore_path.exists() {
        let content = std::fs::read_to_string(&gitignore_path)?;

        if content.lines().any(|line| line.trim() == glossa_entry) {
            tracing::debug!(".gitignore already contains glossa.toml");
            return Ok(());
        }

        let mut new_content = content.trim_end().to_string();
        if !new_content.is_empty() {
            new_content.push_str("\n\n");
        }
        new_content.push_str(glossa_comment);
        new_content.push('\n');
        new_content.push_str(glossa_entry);
        new_content.push('\n');

        std::fs::write(&gitignore_path, new_content)?;
        println!(".gitignore updated with glossa.toml");
    } else {
        let content = format!("{}\n{}\n", glossa_comment, glossa_entry);
        std::fs::write(&gitignore_path, content)?;
        println!(".gitignore created with glossa.toml");
    }

    Ok(())
}

/// Traduz textos pela linha de comando.
pub async fn translate(
    texts: &[String],
    from: &str,
    to: &str,
    config: &Config,
) -> GlossaResult<()> {
    // Argumentos @arquivo são expandidos em um texto por linha
    let mut inputs: Vec<String> = Vec::new();
    for text in texts {
        if let Some(file_path) = text.strip_prefix('@') {
            let content = std::fs::read_to_string(file_path)?;
            inputs.extend(
                content
                    .lines()
                    .filter(|line| !line.trim().is_empty())
                    .map(|line| line.to_string()),
            );
        } else {
            inputs.push(text.clone());
        }
    }

    if inputs.is_empty() {
        println!("Nada a traduzir.");
        return Ok(());
    }

    let translator = Translator::from_config(config, from, to)?;

    match translator.prefetch_existing().await {
        Ok(count) if count > 0 => {
            println!("{} traduções existentes carregadas do serviço", count);
        }
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Falha ao pré-carregar traduções existentes");
        }
    }

    let bar = ProgressBar::new(inputs.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("[{bar:30}] {pos}/{len} textos")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let chunk_size = config.api.max_batch_size.max(1);
    let mut translations: HashMap<String, String> = HashMap::new();
    let mut cache_hits = 0;
    let mut fetched = 0;
    let mut fallbacks = 0;

    for chunk in inputs.chunks(chunk_size) {
        let outcome = translator.translate_report(chunk).await;
        cache_hits += outcome.cache_hits;
        fetched += outcome.fetched;
        fallbacks += outcome.fallbacks;
        translations.extend(outcome.translations);
        bar.inc(chunk.len() as u64);
    }
    bar.finish_and_clear();

    let mut printed: Vec<&str> = Vec::new();
    for text in &inputs {
        if printed.contains(&text.as_str()) {
            continue;
        }
        printed.push(text);
        if let Some(translated) = translations.get(text) {
            println!("{} -> {}", text, translated);
        }
    }

    println!();
    println!(
        "{} do cache, {} do serviço, {} fallbacks",
        cache_hits, fetched, fallbacks
    );
    if fallbacks > 0 {
        println!("Aviso: textos em fallback mantiveram o texto original.");
    }

    Ok(())
}

/// Mostra status do serviço e do cache.
pub async fn status(config: &Config) -> GlossaResult<()> {
    println!("Verificando serviço de tradução...\n");

    if config.api.api_key.trim().is_empty() {
        println!("  ○ API key não configurada");
        println!("    Configure com 'glossa config' antes de traduzir.");
    } else {
        let backend = HttpBackend::from_config(&config.api)?;
        let reachable = backend.is_reachable().await;
        let status_icon = if reachable { "✓" } else { "✗" };
        let status_text = if reachable {
            "disponível"
        } else {
            "inacessível"
        };
        println!("  {} {} - {}", status_icon, config.api.base_url, status_text);
    }

    println!();
    let stats = cache::global_cache().stats();
    println!("Cache de traduções:");
    println!("  capacidade: {} entradas", stats.capacity);
    println!(
        "  modo: {}",
        if config.cache.shared {
            "compartilhado no processo"
        } else {
            "privado por instância"
        }
    );

    Ok(())
}

/// Configura opções interativamente.
pub async fn config_cmd(config_path: &PathBuf) -> GlossaResult<()> {
    use super::interactive::{run_interactive_config, show_config_summary};

    // Mostra resumo antes de editar
    if config_path.exists() {
        let config = Config::load(config_path)?;
        show_config_summary(&config);
    }

    run_interactive_config(config_path)
}

/// Diagnostica problemas de configuração.
pub async fn doctor(config: &Config) -> GlossaResult<()> {
    println!("Diagnosticando configuração do Glossa...\n");

    let mut issues: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    println!("✓ Configuração carregada");

    if config.api.api_key.trim().is_empty() {
        issues.push("API key não configurada - traduções remotas não funcionarão".to_string());
    } else {
        println!("✓ API key configurada");
    }

    match reqwest::Url::parse(&config.api.base_url) {
        Ok(_) => println!("✓ URL base válida: {}", config.api.base_url),
        Err(_) => issues.push(format!("URL base inválida: {}", config.api.base_url)),
    }

    if config.api.timeout_secs == 0 {
        warnings.push("Timeout de 0 segundos - requisições falharão imediatamente".to_string());
    }

    if config.api.max_batch_size == 0 {
        warnings.push("max_batch_size 0 será tratado como 1".to_string());
    }

    if config.cache.capacity == 0 {
        warnings.push(format!(
            "Capacidade de cache 0 cai no padrão de {} entradas",
            cache::DEFAULT_CAPACITY
        ));
    } else {
        println!("✓ Cache com capacidade de {} entradas", config.cache.capacity);
    }

    // Só sonda o serviço quando há credencial para usar
    if !config.api.api_key.trim().is_empty() {
        let backend = HttpBackend::from_config(&config.api)?;
        if backend.is_reachable().await {
            println!("✓ Serviço de tradução acessível");
        } else {
            warnings.push(format!(
                "Serviço inacessível em {} (rede ou API key?)",
                config.api.base_url
            ));
        }
    }

    println!();
    if issues.is_empty() && warnings.is_empty() {
        println!("✓ Tudo OK! Glossa está pronto para uso.");
    } else {
        if !warnings.is_empty() {
            println!("Avisos:");
            for warning in warnings {
                println!("  ⚠ {}", warning);
            }
        }
        if !issues.is_empty() {
            println!("Problemas:");
            for issue in issues {
                println!("  ✗ {}", issue);
            }
        }
    }

    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("glossa {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Cliente de tradução com cache compartilhado");
    println!("https://github.com/glossa-dev/glossa-rs");
}
