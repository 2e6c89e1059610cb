//! Interface de linha de comando do Glossa.

pub mod commands;
pub mod interactive;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Glossa - cliente de tradução com cache compartilhado.
#[derive(Parser, Debug)]
#[command(name = "glossa")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "glossa.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Traduz textos usando o serviço remoto e o cache.
    Translate {
        /// Textos a traduzir (ou @arquivo com um texto por linha).
        #[arg(required = true)]
        texts: Vec<String>,

        /// Locale de origem (ex.: en).
        #[arg(short = 'f', long)]
        from: String,

        /// Locale de destino (ex.: fr).
        #[arg(short = 't', long)]
        to: String,
    },

    /// Mostra status do serviço e do cache.
    Status,

    /// Configura opções interativamente.
    Config,

    /// Diagnostica problemas de configuração.
    Doctor,

    /// Mostra versão.
    Version,
}
