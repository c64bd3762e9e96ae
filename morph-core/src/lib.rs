//! # morph-core — Análises Morfológicas e seu Formato Canônico
//!
//! Este crate representa **uma** análise morfológica de uma palavra (segmentação,
//! tradução, classe gramatical, marcador de determinante e uma ou mais tags) e
//! define o formato textual usado para trocá-la entre os estágios de um pipeline
//! linguístico. Ele não calcula tags a partir de texto bruto: apenas representa
//! e (de)serializa análises já prontas.
//!
//! ## Arquitetura
//!
//! 1.  **Opções de tag** ([`tag`]): mapeamento ordenado e não vazio `chave → tag`.
//! 2.  **Modelo** ([`analysis`]): tipo soma [`MorphAnalysis`] com as variantes
//!     [`SingleTagAnalysis`] e [`MultiTagAnalysis`], igualdade entre variantes,
//!     hash consistente e normalização.
//! 3.  **Formato** ([`parser`]): parsing e serialização da linha canônica
//!     `segmentação @ tradução @ tags @ POS @ DET`.
//! 4.  **Diagnósticos** ([`diagnostics`]): avisos e erros das consultas de tag,
//!     entregues a um destino injetável (por padrão, `tracing`).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use morph_core::{MorphAnalysis, TagLookupError};
//! use morph_core::diagnostics::CollectingSink;
//!
//! let analysis: MorphAnalysis = "ev-ler @ house-PL @ {a → N.PL}{b → V.3PL} @ NOUN @ DEF"
//!     .parse()
//!     .unwrap();
//!
//! let sink = CollectingSink::new();
//! assert_eq!(analysis.tag_at_with("b", &sink), Ok("V.3PL"));
//! assert_eq!(
//!     analysis.single_tag_with(&sink),
//!     Err(TagLookupError::Ambiguous { options: 2 })
//! );
//! assert_eq!(sink.take().len(), 1);
//! ```

pub mod analysis;
pub mod diagnostics;
pub mod error;
pub mod parser;
pub mod tag;

pub use analysis::{MorphAnalysis, MultiTagAnalysis, SingleTagAnalysis};
pub use diagnostics::{Diagnostic, DiagnosticSink, Severity, TracingSink};
pub use error::{MorphError, Result, TagLookupError};
pub use parser::{parse, parse_lines, ParseMode};
pub use tag::TagOptions;
