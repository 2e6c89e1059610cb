//! Validação de identificadores de locale.

use crate::{GlossaError, GlossaResult};

/// Valida um identificador de locale (`en`, `pt-BR`, `zh-Hans`).
///
/// Aceita um subtag de idioma de 2 ou 3 letras ASCII, seguido de subtags
/// alfanuméricos de até 8 caracteres separados por `-`. Os identificadores
/// são usados exatamente como recebidos: o cache e o serviço comparam
/// locales de forma case-sensitive, sem normalização.
pub fn validate_locale(locale: &str) -> GlossaResult<()> {
    if locale.is_empty() {
        return Err(GlossaError::InvalidLocale(locale.to_string()));
    }

    let mut subtags = locale.split('-');

    let language = subtags.next().unwrap_or_default();
    if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(GlossaError::InvalidLocale(locale.to_string()));
    }

    for subtag in subtags {
        if subtag.is_empty()
            || subtag.len() > 8
            || !subtag.chars().all(|c| c.is_ascii_alphanumeric())
        {
            return Err(GlossaError::InvalidLocale(locale.to_string()));
        }
    }

    Ok(())
}
