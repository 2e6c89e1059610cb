//! Configuração interativa do Glossa.
//!
//! Este módulo implementa a configuração interativa usando dialoguer.

use std::path::PathBuf;

use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::types::config::Config;
use crate::GlossaResult;

/// Executa a configuração interativa.
pub fn run_interactive_config(config_path: &PathBuf) -> GlossaResult<()> {
    let theme = ColorfulTheme::default();

    println!("\n🔧 Configuração Interativa do Glossa\n");

    // Carrega config existente ou cria nova
    let mut config = if config_path.exists() {
        Config::load(config_path)?
    } else {
        println!("Criando nova configuração...\n");
        Config::default_config()
    };

    // Menu principal
    loop {
        let options = vec![
            "Configurações Gerais",
            "API de Tradução",
            "Cache",
            "Salvar e Sair",
            "Sair sem Salvar",
        ];

        let selection = Select::with_theme(&theme)
            .with_prompt("O que deseja configurar?")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => configure_general(&theme, &mut config)?,
            1 => configure_api(&theme, &mut config)?,
            2 => configure_cache(&theme, &mut config)?,
            3 => {
                config.save(config_path)?;
                println!("\n✓ Configuração salva em: {}\n", config_path.display());
                break;
            }
            4 => {
                if Confirm::with_theme(&theme)
                    .with_prompt("Deseja realmente sair sem salvar?")
                    .default(false)
                    .interact()?
                {
                    println!("\nSaindo sem salvar.\n");
                    break;
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Configura opções gerais.
fn configure_general(theme: &ColorfulTheme, config: &mut Config) -> GlossaResult<()> {
    println!("\n📋 Configurações Gerais\n");

    // Log level
    let log_levels = vec!["error", "warn", "info", "debug", "trace"];
    let current_idx = log_levels
        .iter()
        .position(|&l| l == config.general.log_level)
        .unwrap_or(2);

    let log_level_idx = Select::with_theme(theme)
        .with_prompt("Nível de log")
        .items(&log_levels)
        .default(current_idx)
        .interact()?;

    config.general.log_level = log_levels[log_level_idx].to_string();

    // Log format
    let log_formats = vec!["text", "json"];
    let current_format_idx = log_formats
        .iter()
        .position(|&f| f == config.general.log_format)
        .unwrap_or(0);

    let log_format_idx = Select::with_theme(theme)
        .with_prompt("Formato de log")
        .items(&log_formats)
        .default(current_format_idx)
        .interact()?;

    config.general.log_format = log_formats[log_format_idx].to_string();

    println!("\n✓ Configurações gerais atualizadas.\n");
    Ok(())
}

/// Configura a API de tradução.
fn configure_api(theme: &ColorfulTheme, config: &mut Config) -> GlossaResult<()> {
    println!("\n🌐 API de Tradução\n");

    let api_key: String = Input::with_theme(theme)
        .with_prompt("API key")
        .default(config.api.api_key.clone())
        .allow_empty(true)
        .interact_text()?;
    config.api.api_key = api_key;

    let base_url: String = Input::with_theme(theme)
        .with_prompt("URL base do serviço")
        .default(config.api.base_url.clone())
        .interact_text()?;
    config.api.base_url = base_url;

    let timeout: u64 = Input::with_theme(theme)
        .with_prompt("Timeout por requisição (segundos)")
        .default(config.api.timeout_secs)
        .interact_text()?;
    config.api.timeout_secs = timeout;

    let max_batch: usize = Input::with_theme(theme)
        .with_prompt("Máximo de textos por requisição")
        .default(config.api.max_batch_size)
        .interact_text()?;
    config.api.max_batch_size = max_batch;

    println!("\n✓ Configurações da API atualizadas.\n");
    Ok(())
}

/// Configura o cache de traduções.
fn configure_cache(theme: &ColorfulTheme, config: &mut Config) -> GlossaResult<()> {
    println!("\n💾 Cache de Traduções\n");

    let capacity: usize = Input::with_theme(theme)
        .with_prompt("Capacidade máxima (entradas)")
        .default(config.cache.capacity)
        .interact_text()?;
    config.cache.capacity = capacity;

    let shared = Confirm::with_theme(theme)
        .with_prompt("Compartilhar o cache entre todas as instâncias do processo?")
        .default(config.cache.shared)
        .interact()?;
    config.cache.shared = shared;

    println!("\n✓ Configurações de cache atualizadas.\n");
    Ok(())
}

/// Mostra um resumo da configuração atual.
pub fn show_config_summary(config: &Config) {
    println!("\nConfiguração atual:");
    println!("  log: {} ({})", config.general.log_level, config.general.log_format);
    println!(
        "  api: {} (timeout {}s, lotes de {})",
        config.api.base_url, config.api.timeout_secs, config.api.max_batch_size
    );
    println!(
        "  api key: {}",
        if config.api.api_key.trim().is_empty() {
            "não configurada"
        } else {
            "configurada"
        }
    );
    println!(
        "  cache: {} entradas, {}",
        config.cache.capacity,
        if config.cache.shared {
            "compartilhado"
        } else {
            "privado"
        }
    );
    println!();
}
