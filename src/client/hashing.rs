//! Chave de texto usada no protocolo do serviço de tradução.

/// Calcula a chave de 32 bits de um texto.
///
/// O serviço indexa textos pelo hash rolante `h = 31*h + c` sobre os
/// caracteres, com overflow de 32 bits com sinal, renderizado em decimal.
/// Todos os SDKs do serviço usam o mesmo esquema, então a chave de um texto
/// é idêntica em qualquer plataforma.
pub fn text_key(text: &str) -> String {
    let hash = text
        .chars()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(c as i32));
    hash.to_string()
}
