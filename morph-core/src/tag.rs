//! # Opções de Tag Nomeadas
//!
//! Uma análise multi-tag associa cada **chave de opção** a uma tag morfológica:
//!
//! ```text
//! { a  → N.SG}{ b  → V.3SG}
//! ```
//!
//! [`TagOptions`] guarda esses pares na ordem de inserção (que é a ordem de
//! serialização), mas a igualdade trata o mapeamento como um conjunto de pares.
//! O tipo nunca fica vazio: só é construído a partir de uma primeira entrada.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::error::MorphError;

/// Chave sintética usada ao converter uma análise de tag única em multi-tag.
pub const PLACEHOLDER_KEY: &str = "a";

/// Mapeamento ordenado e não vazio `chave de opção → tag`.
///
/// # Exemplo
/// ```rust
/// use morph_core::tag::TagOptions;
///
/// let mut tags = TagOptions::new("a", "N");
/// tags.insert("b", "V");
/// tags.insert("a", "ADJ"); // última escrita vence, posição mantida
///
/// assert_eq!(tags.get("a"), Some("ADJ"));
/// assert_eq!(tags.morph_info(), "{ a  → ADJ}{ b  → V}");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<(String, String)>", into = "Vec<(String, String)>")]
pub struct TagOptions {
    entries: Vec<(String, String)>,
}

impl TagOptions {
    /// Cria o mapeamento com sua primeira entrada.
    pub fn new(key: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            entries: vec![(key.into(), tag.into())],
        }
    }

    /// Insere ou substitui uma entrada.
    ///
    /// Uma chave já existente tem o valor trocado **no lugar** (a ordem não muda)
    /// e o valor anterior é devolvido.
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<String>) -> Option<String> {
        let key = key.into();
        let tag = tag.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, tag)),
            None => {
                self.entries.push((key, tag));
                None
            }
        }
    }

    /// Variante encadeável de [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, tag: impl Into<String>) -> Self {
        self.insert(key, tag);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_singleton(&self) -> bool {
        self.entries.len() == 1
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Primeira entrada inserida. Sempre existe.
    pub fn first(&self) -> (&str, &str) {
        let (k, v) = &self.entries[0];
        (k, v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Renderização `{ chave  → tag}` de todas as entradas, na ordem de inserção.
    pub fn morph_info(&self) -> String {
        render(self.iter())
    }

    /// Mesma renderização, com as entradas ordenadas por chave.
    /// Independe da ordem de inserção, por isso é a base do hash.
    pub(crate) fn canonical_morph_info(&self) -> String {
        let mut sorted: Vec<(&str, &str)> = self.iter().collect();
        sorted.sort_unstable();
        render(sorted.into_iter())
    }
}

fn render<'a>(entries: impl Iterator<Item = (&'a str, &'a str)>) -> String {
    let mut out = String::new();
    for (key, tag) in entries {
        let _ = write!(out, "{{ {key}  → {tag}}}");
    }
    out
}

impl PartialEq for TagOptions {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for TagOptions {}

impl TryFrom<Vec<(String, String)>> for TagOptions {
    type Error = MorphError;

    fn try_from(pairs: Vec<(String, String)>) -> Result<Self, Self::Error> {
        let mut pairs = pairs.into_iter();
        let (key, tag) = pairs.next().ok_or(MorphError::EmptyTagOptions)?;
        let mut options = TagOptions::new(key, tag);
        for (key, tag) in pairs {
            options.insert(key, tag);
        }
        Ok(options)
    }
}

impl From<TagOptions> for Vec<(String, String)> {
    fn from(options: TagOptions) -> Self {
        options.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_last_write_wins_keeps_position() {
        let mut tags = TagOptions::new("a", "N").with("b", "V");
        let previous = tags.insert("a", "ADJ");
        assert_eq!(previous.as_deref(), Some("N"));
        assert_eq!(tags.len(), 2);
        assert_eq!(tags.first(), ("a", "ADJ"));
        assert_eq!(tags.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_morph_info_exact_spacing() {
        let tags = TagOptions::new("x", "N.SG").with("y", "V.3SG");
        assert_eq!(tags.morph_info(), "{ x  → N.SG}{ y  → V.3SG}");
    }

    #[test]
    fn test_equality_ignores_order() {
        let ab = TagOptions::new("a", "N").with("b", "V");
        let ba = TagOptions::new("b", "V").with("a", "N");
        assert_eq!(ab, ba);
        assert_ne!(ab.morph_info(), ba.morph_info());
        assert_eq!(ab.canonical_morph_info(), ba.canonical_morph_info());
    }

    #[test]
    fn test_equality_checks_values_and_size() {
        let ab = TagOptions::new("a", "N").with("b", "V");
        assert_ne!(ab, TagOptions::new("a", "N").with("b", "ADJ"));
        assert_ne!(ab, TagOptions::new("a", "N"));
    }

    #[test]
    fn test_try_from_empty_is_rejected() {
        let err = TagOptions::try_from(Vec::new()).unwrap_err();
        assert_eq!(err, MorphError::EmptyTagOptions);
    }

    #[test]
    fn test_serde_pairs() {
        let tags = TagOptions::new("a", "N").with("b", "V");
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"[["a","N"],["b","V"]]"#);

        let back: TagOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
        assert!(serde_json::from_str::<TagOptions>("[]").is_err());
    }
}
