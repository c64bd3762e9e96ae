//! # Análise Morfológica — Tag Única e Multi-Tag
//!
//! Uma análise descreve uma forma de palavra com cinco informações:
//!
//! | Campo          | Significado                              | Exemplo     |
//! |----------------|------------------------------------------|-------------|
//! | `segmentation` | Palavra segmentada em morfemas           | `ev-ler-i`  |
//! | `translation`  | Tradução / glosa                         | `house-PL-ACC` |
//! | `morph_info`   | Tag(s) morfológica(s)                    | `N.PL.ACC`  |
//! | `pos`          | Classe gramatical                        | `NOUN`      |
//! | `det`          | Marcador de determinante / lema          | `DEF`       |
//!
//! Existem duas variantes, reunidas no tipo soma [`MorphAnalysis`]:
//!
//! - [`SingleTagAnalysis`]: exatamente uma tag.
//! - [`MultiTagAnalysis`]: várias opções nomeadas (`{ a  → N}{ b  → V}`).
//!
//! ## Equivalência entre variantes
//!
//! Uma multi-tag com **uma única opção** é equivalente à tag única com o mesmo
//! valor: são iguais (`==`) e têm o mesmo hash. Com duas ou mais opções, uma
//! multi-tag nunca é igual a uma tag única.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::TagLookupError;
use crate::tag::{TagOptions, PLACEHOLDER_KEY};

/// Separador de campos no formato textual canônico.
pub const FIELD_SEPARATOR: &str = " @ ";

/// Análise com exatamente uma tag morfológica.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleTagAnalysis {
    segmentation: String,
    translation: String,
    tag: String,
    pos: String,
    det: String,
}

/// Análise com várias opções de tag, indexadas por chave.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MultiTagAnalysis {
    segmentation: String,
    translation: String,
    tags: TagOptions,
    pos: String,
    det: String,
}

/// Uma análise morfológica, de qualquer variante.
///
/// É a porta de entrada para consultas: as variantes expõem os mesmos
/// métodos, mas aqui eles funcionam sem saber qual variante se tem em mãos.
///
/// # Igualdade não transitiva
///
/// O colapso do singleton torna `==` não transitivo: `{ x  → N}` e `{ y  → N}`
/// são ambos iguais à tag única `N`, mas diferentes entre si (chaves
/// distintas). `Eq` e `Hash` são consistentes par a par, porém o conteúdo de
/// um `HashSet<MorphAnalysis>` pode depender da ordem de inserção quando essas
/// três formas se misturam.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MorphAnalysis {
    Single(SingleTagAnalysis),
    Multi(MultiTagAnalysis),
}

/// Hash da 5-upla `(segmentation, translation, morph_info, pos, det)`.
fn hash_fields<H: Hasher>(state: &mut H, fields: [&str; 5]) {
    for field in fields {
        field.hash(state);
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: [&str; 5]) -> fmt::Result {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            f.write_str(FIELD_SEPARATOR)?;
        }
        f.write_str(field)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// SingleTagAnalysis
// ---------------------------------------------------------------------------

impl SingleTagAnalysis {
    pub fn new(
        segmentation: impl Into<String>,
        translation: impl Into<String>,
        tag: impl Into<String>,
        pos: impl Into<String>,
        det: impl Into<String>,
    ) -> Self {
        Self {
            segmentation: segmentation.into(),
            translation: translation.into(),
            tag: tag.into(),
            pos: pos.into(),
            det: det.into(),
        }
    }

    pub fn segmentation(&self) -> &str {
        &self.segmentation
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn det(&self) -> &str {
        &self.det
    }

    /// Para tag única, `morph_info` é a própria tag.
    pub fn morph_info(&self) -> &str {
        &self.tag
    }

    /// Devolve a tag ignorando `key`, com um aviso: indexar uma análise de tag
    /// única não faz sentido.
    pub fn tag_at_with(&self, key: &str, sink: &dyn DiagnosticSink) -> &str {
        sink.emit(Diagnostic::IndexIgnored {
            segmentation: self.segmentation.clone(),
            key: key.to_string(),
        });
        &self.tag
    }

    /// [`tag_at_with`](Self::tag_at_with) com diagnósticos para `tracing`.
    pub fn tag_at(&self, key: &str) -> &str {
        self.tag_at_with(key, &TracingSink)
    }

    /// Forma multi-tag com uma única opção sob a chave [`PLACEHOLDER_KEY`].
    pub fn to_multi(&self) -> MultiTagAnalysis {
        self.clone().into_multi()
    }

    pub fn into_multi(self) -> MultiTagAnalysis {
        MultiTagAnalysis {
            segmentation: self.segmentation,
            translation: self.translation,
            tags: TagOptions::new(PLACEHOLDER_KEY, self.tag),
            pos: self.pos,
            det: self.det,
        }
    }

    fn common(&self) -> [&str; 4] {
        [&self.segmentation, &self.translation, &self.pos, &self.det].map(String::as_str)
    }

    fn fields(&self) -> [&str; 5] {
        [&self.segmentation, &self.translation, &self.tag, &self.pos, &self.det].map(String::as_str)
    }
}

impl PartialEq for SingleTagAnalysis {
    fn eq(&self, other: &Self) -> bool {
        self.common() == other.common() && self.tag == other.tag
    }
}

impl Eq for SingleTagAnalysis {}

impl PartialEq<MultiTagAnalysis> for SingleTagAnalysis {
    fn eq(&self, other: &MultiTagAnalysis) -> bool {
        self.common() == other.common() && other.sole_tag() == Some(self.tag.as_str())
    }
}

impl Hash for SingleTagAnalysis {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_fields(state, self.fields());
    }
}

impl fmt::Display for SingleTagAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_fields(f, self.fields())
    }
}

// ---------------------------------------------------------------------------
// MultiTagAnalysis
// ---------------------------------------------------------------------------

impl MultiTagAnalysis {
    pub fn new(
        segmentation: impl Into<String>,
        translation: impl Into<String>,
        tags: TagOptions,
        pos: impl Into<String>,
        det: impl Into<String>,
    ) -> Self {
        Self {
            segmentation: segmentation.into(),
            translation: translation.into(),
            tags,
            pos: pos.into(),
            det: det.into(),
        }
    }

    pub fn segmentation(&self) -> &str {
        &self.segmentation
    }

    pub fn translation(&self) -> &str {
        &self.translation
    }

    pub fn tags(&self) -> &TagOptions {
        &self.tags
    }

    pub fn pos(&self) -> &str {
        &self.pos
    }

    pub fn det(&self) -> &str {
        &self.det
    }

    /// Concatenação de `{ chave  → tag}` na ordem de inserção.
    pub fn morph_info(&self) -> String {
        self.tags.morph_info()
    }

    pub fn is_singleton(&self) -> bool {
        self.tags.is_singleton()
    }

    /// A única tag, se houver exatamente uma opção.
    fn sole_tag(&self) -> Option<&str> {
        self.is_singleton().then(|| self.tags.first().1)
    }

    /// Converte para tag única usando a primeira opção inserida (descarta a chave).
    ///
    /// Determinístico para qualquer mapeamento; só é semanticamente fiel quando
    /// [`is_singleton`](Self::is_singleton).
    pub fn to_single(&self) -> SingleTagAnalysis {
        SingleTagAnalysis::new(
            self.segmentation.as_str(),
            self.translation.as_str(),
            self.tags.first().1,
            self.pos.as_str(),
            self.det.as_str(),
        )
    }

    /// Já está na forma multi-tag: devolve a si mesma.
    pub fn to_multi(&self) -> &MultiTagAnalysis {
        self
    }

    /// [`single_tag_with`](Self::single_tag_with) com diagnósticos para `tracing`.
    pub fn single_tag(&self) -> Result<&str, TagLookupError> {
        self.single_tag_with(&TracingSink)
    }

    /// [`tag_at_with`](Self::tag_at_with) com diagnósticos para `tracing`.
    pub fn tag_at(&self, key: &str) -> Result<&str, TagLookupError> {
        self.tag_at_with(key, &TracingSink)
    }

    /// Tag sem chave explícita.
    ///
    /// - Uma opção: devolve a tag e emite um aviso `IndexOmitted`.
    /// - Várias opções: emite um erro `AmbiguousTag` e devolve
    ///   [`TagLookupError::Ambiguous`].
    pub fn single_tag_with(&self, sink: &dyn DiagnosticSink) -> Result<&str, TagLookupError> {
        match self.sole_tag() {
            Some(tag) => {
                sink.emit(Diagnostic::IndexOmitted {
                    segmentation: self.segmentation.clone(),
                    tag: tag.to_string(),
                });
                Ok(tag)
            }
            None => {
                sink.emit(Diagnostic::AmbiguousTag {
                    segmentation: self.segmentation.clone(),
                    options: self.tags.len(),
                });
                Err(TagLookupError::Ambiguous { options: self.tags.len() })
            }
        }
    }

    /// Tag da opção `key`; chave inexistente emite `MissingKey` e devolve erro.
    pub fn tag_at_with(&self, key: &str, sink: &dyn DiagnosticSink) -> Result<&str, TagLookupError> {
        self.tags.get(key).ok_or_else(|| {
            sink.emit(Diagnostic::MissingKey {
                segmentation: self.segmentation.clone(),
                key: key.to_string(),
            });
            TagLookupError::MissingKey { key: key.to_string() }
        })
    }

    fn common(&self) -> [&str; 4] {
        [&self.segmentation, &self.translation, &self.pos, &self.det].map(String::as_str)
    }
}

impl PartialEq for MultiTagAnalysis {
    fn eq(&self, other: &Self) -> bool {
        self.common() == other.common() && self.tags == other.tags
    }
}

impl Eq for MultiTagAnalysis {}

impl PartialEq<SingleTagAnalysis> for MultiTagAnalysis {
    fn eq(&self, other: &SingleTagAnalysis) -> bool {
        other == self
    }
}

impl Hash for MultiTagAnalysis {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self.sole_tag() {
            // Mesmo hash da tag única equivalente.
            Some(tag) => hash_fields(
                state,
                [self.segmentation.as_str(), self.translation.as_str(), tag, self.pos.as_str(), self.det.as_str()],
            ),
            None => {
                let info = self.tags.canonical_morph_info();
                hash_fields(
                    state,
                    [&self.segmentation, &self.translation, &info, &self.pos, &self.det].map(String::as_str),
                )
            }
        }
    }
}

impl fmt::Display for MultiTagAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let info = self.morph_info();
        write_fields(
            f,
            [&self.segmentation, &self.translation, &info, &self.pos, &self.det].map(String::as_str),
        )
    }
}

// ---------------------------------------------------------------------------
// MorphAnalysis
// ---------------------------------------------------------------------------

impl MorphAnalysis {
    /// Parseia o formato canônico. Veja [`crate::parser::parse`].
    pub fn parse(input: &str) -> crate::error::Result<Self> {
        crate::parser::parse(input)
    }

    pub fn segmentation(&self) -> &str {
        match self {
            MorphAnalysis::Single(a) => a.segmentation(),
            MorphAnalysis::Multi(a) => a.segmentation(),
        }
    }

    pub fn translation(&self) -> &str {
        match self {
            MorphAnalysis::Single(a) => a.translation(),
            MorphAnalysis::Multi(a) => a.translation(),
        }
    }

    pub fn pos(&self) -> &str {
        match self {
            MorphAnalysis::Single(a) => a.pos(),
            MorphAnalysis::Multi(a) => a.pos(),
        }
    }

    pub fn det(&self) -> &str {
        match self {
            MorphAnalysis::Single(a) => a.det(),
            MorphAnalysis::Multi(a) => a.det(),
        }
    }

    pub fn morph_info(&self) -> Cow<'_, str> {
        match self {
            MorphAnalysis::Single(a) => Cow::Borrowed(a.morph_info()),
            MorphAnalysis::Multi(a) => Cow::Owned(a.morph_info()),
        }
    }

    /// Tag única conta como singleton.
    pub fn is_singleton(&self) -> bool {
        match self {
            MorphAnalysis::Single(_) => true,
            MorphAnalysis::Multi(a) => a.is_singleton(),
        }
    }

    pub fn tag_count(&self) -> usize {
        match self {
            MorphAnalysis::Single(_) => 1,
            MorphAnalysis::Multi(a) => a.tags().len(),
        }
    }

    /// Forma multi-tag. Uma multi-tag é devolvida emprestada, sem cópia.
    pub fn to_multi(&self) -> Cow<'_, MultiTagAnalysis> {
        match self {
            MorphAnalysis::Single(a) => Cow::Owned(a.to_multi()),
            MorphAnalysis::Multi(a) => Cow::Borrowed(a),
        }
    }

    pub fn into_multi(self) -> MultiTagAnalysis {
        match self {
            MorphAnalysis::Single(a) => a.into_multi(),
            MorphAnalysis::Multi(a) => a,
        }
    }

    /// Forma de tag única (primeira opção no caso multi-tag).
    pub fn to_single(&self) -> Cow<'_, SingleTagAnalysis> {
        match self {
            MorphAnalysis::Single(a) => Cow::Borrowed(a),
            MorphAnalysis::Multi(a) => Cow::Owned(a.to_single()),
        }
    }

    /// A tag aplicável quando não há ambiguidade; diagnósticos vão para `tracing`.
    pub fn single_tag(&self) -> Result<&str, TagLookupError> {
        self.single_tag_with(&TracingSink)
    }

    pub fn single_tag_with(&self, sink: &dyn DiagnosticSink) -> Result<&str, TagLookupError> {
        match self {
            MorphAnalysis::Single(a) => Ok(a.tag()),
            MorphAnalysis::Multi(a) => a.single_tag_with(sink),
        }
    }

    /// A tag da opção `key`; diagnósticos vão para `tracing`.
    pub fn tag_at(&self, key: &str) -> Result<&str, TagLookupError> {
        self.tag_at_with(key, &TracingSink)
    }

    pub fn tag_at_with(&self, key: &str, sink: &dyn DiagnosticSink) -> Result<&str, TagLookupError> {
        match self {
            MorphAnalysis::Single(a) => Ok(a.tag_at_with(key, sink)),
            MorphAnalysis::Multi(a) => a.tag_at_with(key, sink),
        }
    }
}

impl From<SingleTagAnalysis> for MorphAnalysis {
    fn from(analysis: SingleTagAnalysis) -> Self {
        MorphAnalysis::Single(analysis)
    }
}

impl From<MultiTagAnalysis> for MorphAnalysis {
    fn from(analysis: MultiTagAnalysis) -> Self {
        MorphAnalysis::Multi(analysis)
    }
}

impl PartialEq for MorphAnalysis {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (MorphAnalysis::Single(a), MorphAnalysis::Single(b)) => a == b,
            (MorphAnalysis::Single(a), MorphAnalysis::Multi(b)) => a == b,
            (MorphAnalysis::Multi(a), MorphAnalysis::Single(b)) => a == b,
            (MorphAnalysis::Multi(a), MorphAnalysis::Multi(b)) => a == b,
        }
    }
}

impl Eq for MorphAnalysis {}

impl PartialEq<SingleTagAnalysis> for MorphAnalysis {
    fn eq(&self, other: &SingleTagAnalysis) -> bool {
        match self {
            MorphAnalysis::Single(a) => a == other,
            MorphAnalysis::Multi(a) => a == other,
        }
    }
}

impl PartialEq<MultiTagAnalysis> for MorphAnalysis {
    fn eq(&self, other: &MultiTagAnalysis) -> bool {
        match self {
            MorphAnalysis::Single(a) => a == other,
            MorphAnalysis::Multi(a) => a == other,
        }
    }
}

impl PartialEq<MorphAnalysis> for SingleTagAnalysis {
    fn eq(&self, other: &MorphAnalysis) -> bool {
        other == self
    }
}

impl PartialEq<MorphAnalysis> for MultiTagAnalysis {
    fn eq(&self, other: &MorphAnalysis) -> bool {
        other == self
    }
}

impl Hash for MorphAnalysis {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            MorphAnalysis::Single(a) => a.hash(state),
            MorphAnalysis::Multi(a) => a.hash(state),
        }
    }
}

impl fmt::Display for MorphAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MorphAnalysis::Single(a) => fmt::Display::fmt(a, f),
            MorphAnalysis::Multi(a) => fmt::Display::fmt(a, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::RandomState;
    use std::collections::HashSet;
    use std::hash::BuildHasher;

    use super::*;
    use crate::diagnostics::{CollectingSink, Severity};

    fn single(tag: &str) -> SingleTagAnalysis {
        SingleTagAnalysis::new("ev-ler", "house-PL", tag, "NOUN", "DEF")
    }

    fn multi(tags: TagOptions) -> MultiTagAnalysis {
        MultiTagAnalysis::new("ev-ler", "house-PL", tags, "NOUN", "DEF")
    }

    #[test]
    fn test_singleton_multi_equals_single_both_ways() {
        let s = single("N");
        let m = multi(TagOptions::new("x", "N"));
        assert!(s == m);
        assert!(m == s);
        assert_eq!(MorphAnalysis::from(s), MorphAnalysis::from(m));
    }

    #[test]
    fn test_non_singleton_multi_never_equals_single() {
        let s = single("N");
        let m = multi(TagOptions::new("x", "N").with("y", "V"));
        assert!(s != m);
        assert!(m != s);
        assert_ne!(MorphAnalysis::from(m), MorphAnalysis::from(s));
    }

    #[test]
    fn test_common_fields_must_match() {
        let a = single("N");
        let b = SingleTagAnalysis::new("ev-ler", "house-PL", "N", "NOUN", "INDEF");
        assert_ne!(a, b);
        let m = MultiTagAnalysis::new("ev", "house-PL", TagOptions::new("x", "N"), "NOUN", "DEF");
        assert!(a != m);
    }

    #[test]
    fn test_hash_consistent_for_singleton_collapse() {
        let state = RandomState::new();
        let s = MorphAnalysis::from(single("N"));
        let m = MorphAnalysis::from(multi(TagOptions::new("x", "N")));
        assert_eq!(state.hash_one(&s), state.hash_one(&m));
        assert_eq!(state.hash_one(single("N")), state.hash_one(multi(TagOptions::new("k", "N"))));

        let set: HashSet<MorphAnalysis> = [s, m].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_hash_ignores_insertion_order() {
        let state = RandomState::new();
        let ab = multi(TagOptions::new("a", "N").with("b", "V"));
        let ba = multi(TagOptions::new("b", "V").with("a", "N"));
        assert_eq!(ab, ba);
        assert_eq!(state.hash_one(&ab), state.hash_one(&ba));
    }

    #[test]
    fn test_display_single() {
        assert_eq!(single("N.PL").to_string(), "ev-ler @ house-PL @ N.PL @ NOUN @ DEF");
    }

    #[test]
    fn test_display_multi_keeps_insertion_order() {
        let m = multi(TagOptions::new("b", "V").with("a", "N"));
        assert_eq!(
            m.to_string(),
            "ev-ler @ house-PL @ { b  → V}{ a  → N} @ NOUN @ DEF"
        );
    }

    #[test]
    fn test_to_multi_uses_placeholder_key() {
        let m = single("N").to_multi();
        assert!(m.is_singleton());
        assert_eq!(m.tags().first(), (PLACEHOLDER_KEY, "N"));
    }

    #[test]
    fn test_to_multi_on_multi_borrows() {
        let a = MorphAnalysis::from(multi(TagOptions::new("a", "N").with("b", "V")));
        assert!(matches!(a.to_multi(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_to_multi_to_single_round_trip() {
        let s = single("N");
        assert_eq!(s.to_multi().to_single(), s);
    }

    #[test]
    fn test_to_single_is_deterministic() {
        let m = multi(TagOptions::new("a", "N").with("b", "V"));
        assert_eq!(m.to_single(), m.to_single());
        assert_eq!(m.to_single().tag(), "N");
    }

    #[test]
    fn test_single_tag_on_single_is_silent() {
        let sink = CollectingSink::new();
        let a = MorphAnalysis::from(single("N"));
        assert_eq!(a.single_tag_with(&sink), Ok("N"));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_single_tag_on_singleton_multi_warns() {
        let sink = CollectingSink::new();
        let a = MorphAnalysis::from(multi(TagOptions::new("a", "N")));
        assert_eq!(a.single_tag_with(&sink), Ok("N"));
        let events = sink.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity(), Severity::Warning);
        assert!(matches!(events[0], Diagnostic::IndexOmitted { .. }));
    }

    #[test]
    fn test_single_tag_on_ambiguous_multi_is_absent() {
        let sink = CollectingSink::new();
        let a = MorphAnalysis::from(multi(TagOptions::new("a", "N").with("b", "V")));
        assert_eq!(
            a.single_tag_with(&sink),
            Err(TagLookupError::Ambiguous { options: 2 })
        );
        let events = sink.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity(), Severity::Error);
    }

    #[test]
    fn test_tag_at_on_multi() {
        let sink = CollectingSink::new();
        let a = MorphAnalysis::from(multi(TagOptions::new("a", "N").with("b", "V")));

        assert_eq!(a.tag_at_with("a", &sink), Ok("N"));
        assert!(sink.is_empty());

        assert_eq!(
            a.tag_at_with("c", &sink),
            Err(TagLookupError::MissingKey { key: "c".into() })
        );
        let events = sink.take();
        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], Diagnostic::MissingKey { key, .. } if key == "c"));
    }

    #[test]
    fn test_tag_at_on_single_ignores_key_with_warning() {
        let sink = CollectingSink::new();
        let a = MorphAnalysis::from(single("N"));
        assert_eq!(a.tag_at_with("zzz", &sink), Ok("N"));
        let events = sink.take();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].severity(), Severity::Warning);
        assert!(matches!(events[0], Diagnostic::IndexIgnored { .. }));
    }

    #[test]
    fn test_default_sink_lookups_still_answer() {
        let a = MorphAnalysis::from(multi(TagOptions::new("a", "N").with("b", "V")));
        assert!(a.single_tag().is_err());
        assert_eq!(a.tag_at("b"), Ok("V"));
    }

    #[test]
    fn test_accessors_and_counts() {
        let a = MorphAnalysis::from(multi(TagOptions::new("a", "N").with("b", "V")));
        assert_eq!(a.segmentation(), "ev-ler");
        assert_eq!(a.translation(), "house-PL");
        assert_eq!(a.pos(), "NOUN");
        assert_eq!(a.det(), "DEF");
        assert_eq!(a.tag_count(), 2);
        assert!(!a.is_singleton());
        assert_eq!(a.morph_info(), "{ a  → N}{ b  → V}");
        assert!(MorphAnalysis::from(single("N")).is_singleton());
    }

    #[test]
    fn test_serde_kind_tag() {
        let a = MorphAnalysis::from(multi(TagOptions::new("a", "N").with("b", "V")));
        let json = serde_json::to_value(&a).unwrap();
        assert_eq!(json["kind"], "multi");
        assert_eq!(json["tags"][1][0], "b");

        let back: MorphAnalysis = serde_json::from_value(json).unwrap();
        assert_eq!(back, a);
    }

    #[test]
    fn test_equality_is_not_transitive_across_keys() {
        let x = multi(TagOptions::new("x", "N"));
        let s = single("N");
        let y = multi(TagOptions::new("y", "N"));
        assert!(x == s);
        assert!(s == y);
        assert!(x != y);

        let set: HashSet<MorphAnalysis> =
            [MorphAnalysis::from(x), MorphAnalysis::from(y)].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_variant_lookups_without_sink() {
        let s = single("N");
        assert_eq!(s.tag_at("qualquer"), "N");

        let m = multi(TagOptions::new("a", "N").with("b", "V"));
        assert_eq!(m.tag_at("b"), Ok("V"));
        assert_eq!(m.tag_at("c"), Err(TagLookupError::MissingKey { key: "c".into() }));
        assert_eq!(m.single_tag(), Err(TagLookupError::Ambiguous { options: 2 }));
        assert_eq!(multi(TagOptions::new("a", "N")).single_tag(), Ok("N"));
    }

    #[test]
    fn test_multi_to_multi_is_identity() {
        let m = multi(TagOptions::new("a", "N").with("b", "V"));
        assert!(std::ptr::eq(m.to_multi(), &m));
    }

    #[test]
    fn test_variants_compare_with_morph_analysis() {
        let s = single("N");
        let m = multi(TagOptions::new("x", "N"));
        let wrapped_s = MorphAnalysis::from(s.clone());
        let wrapped_m = MorphAnalysis::from(m.clone());
        assert!(s == wrapped_m);
        assert!(m == wrapped_s);
        assert!(wrapped_s == m);
        assert!(multi(TagOptions::new("x", "N").with("y", "V")) != wrapped_s);
    }
}
