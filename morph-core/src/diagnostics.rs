//! # Diagnósticos — Eventos de Aviso e Erro das Consultas de Tag
//!
//! As consultas [`single_tag`] e [`tag_at`] são puras, exceto por um efeito
//! colateral: quando precisam "adivinhar" (aviso) ou não conseguem responder
//! (erro), emitem um [`Diagnostic`]. Quem decide para onde o evento vai é um
//! [`DiagnosticSink`] injetado pelo chamador.
//!
//! ## Destinos disponíveis
//!
//! | Destino                          | Uso                                        |
//! |----------------------------------|--------------------------------------------|
//! | [`TracingSink`]                  | Padrão: `tracing::warn!` / `tracing::error!` |
//! | `mpsc::Sender<Diagnostic>`       | Streaming para outro estágio do pipeline   |
//! | [`CollectingSink`]               | Acumula em memória (testes, relatórios)    |
//! | [`SilentSink`]                   | Descarta tudo                              |
//!
//! Emitir nunca altera o fluxo de controle: o destino não devolve nada.
//!
//! [`single_tag`]: crate::analysis::MorphAnalysis::single_tag
//! [`tag_at`]: crate::analysis::MorphAnalysis::tag_at

use std::fmt;
use std::sync::{mpsc, Mutex};

use serde::{Deserialize, Serialize};

/// Gravidade de um diagnóstico.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// A consulta respondeu, mas usando um valor padrão.
    Warning,
    /// A consulta não pôde ser resolvida.
    Error,
}

/// Eventos emitidos pelas consultas de tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Diagnostic {
    /// **Aviso**: análise multi-tag com uma única opção consultada sem chave.
    /// A tag única foi devolvida, mas uma chave explícita era esperada.
    IndexOmitted { segmentation: String, tag: String },
    /// **Aviso**: chave usada numa análise de tag única, onde indexar não faz sentido.
    IndexIgnored { segmentation: String, key: String },
    /// **Erro**: várias opções e nenhuma chave para desambiguar.
    AmbiguousTag { segmentation: String, options: usize },
    /// **Erro**: a chave pedida não existe.
    MissingKey { segmentation: String, key: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::IndexOmitted { .. } | Diagnostic::IndexIgnored { .. } => Severity::Warning,
            Diagnostic::AmbiguousTag { .. } | Diagnostic::MissingKey { .. } => Severity::Error,
        }
    }

    /// Identificador estável do evento (campo `code` nos logs).
    pub fn code(&self) -> &'static str {
        match self {
            Diagnostic::IndexOmitted { .. } => "index_omitted",
            Diagnostic::IndexIgnored { .. } => "index_ignored",
            Diagnostic::AmbiguousTag { .. } => "ambiguous_tag",
            Diagnostic::MissingKey { .. } => "missing_key",
        }
    }

    /// Segmentação da análise que originou o evento.
    pub fn segmentation(&self) -> &str {
        match self {
            Diagnostic::IndexOmitted { segmentation, .. }
            | Diagnostic::IndexIgnored { segmentation, .. }
            | Diagnostic::AmbiguousTag { segmentation, .. }
            | Diagnostic::MissingKey { segmentation, .. } => segmentation,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IndexOmitted { segmentation, tag } => write!(
                f,
                "{segmentation}: chave de opção esperada mas omitida, usando a única tag {tag:?}"
            ),
            Diagnostic::IndexIgnored { segmentation, key } => write!(
                f,
                "{segmentation}: chave {key:?} ignorada, a análise tem uma única tag"
            ),
            Diagnostic::AmbiguousTag { segmentation, options } => write!(
                f,
                "{segmentation}: tag ambígua entre {options} opções"
            ),
            Diagnostic::MissingKey { segmentation, key } => write!(
                f,
                "{segmentation}: chave de opção {key:?} inexistente"
            ),
        }
    }
}

/// Destino dos diagnósticos.
///
/// `emit` é "dispare e esqueça": não retorna nada e não pode interromper a consulta.
pub trait DiagnosticSink {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Encaminha cada diagnóstico para `tracing`, com campos estruturados.
///
/// O crate nunca instala um subscriber; sem um, os eventos são descartados.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        let code = diagnostic.code();
        match &diagnostic {
            Diagnostic::IndexOmitted { segmentation, tag } => tracing::warn!(
                code,
                segmentation = segmentation.as_str(),
                tag = tag.as_str(),
                "{diagnostic}"
            ),
            Diagnostic::IndexIgnored { segmentation, key } => tracing::warn!(
                code,
                segmentation = segmentation.as_str(),
                key = key.as_str(),
                "{diagnostic}"
            ),
            Diagnostic::AmbiguousTag { segmentation, options } => tracing::error!(
                code,
                segmentation = segmentation.as_str(),
                options = *options as u64,
                "{diagnostic}"
            ),
            Diagnostic::MissingKey { segmentation, key } => tracing::error!(
                code,
                segmentation = segmentation.as_str(),
                key = key.as_str(),
                "{diagnostic}"
            ),
        }
    }
}

/// Descarta todos os diagnósticos.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn emit(&self, _diagnostic: Diagnostic) {}
}

// Receptor já fechado não é problema de quem emite.
impl DiagnosticSink for mpsc::Sender<Diagnostic> {
    fn emit(&self, diagnostic: Diagnostic) {
        let _ = self.send(diagnostic);
    }
}

/// Acumula os diagnósticos em memória, na ordem de emissão.
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cópia dos eventos acumulados até agora.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Remove e devolve os eventos acumulados.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.events.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
