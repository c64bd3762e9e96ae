//! # Erros do crate
//!
//! Dois tipos de erro bem distintos convivem aqui:
//!
//! - [`MorphError`]: falhas reais de parsing ou construção (string malformada,
//!   mapeamento de tags vazio). O parsing é "tudo ou nada" por análise.
//! - [`TagLookupError`]: o **motivo** pelo qual uma consulta de tag não tem
//!   resposta (ambiguidade ou chave inexistente). Não é fatal: o chamador decide
//!   se a ausência importa no seu contexto.

use thiserror::Error;

/// Falhas de parsing e de construção de análises morfológicas.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MorphError {
    /// A string não tem exatamente cinco campos separados por `@`.
    #[error("esperados 5 campos separados por '@', encontrados {found}: {input:?}")]
    FieldCount { input: String, found: usize },

    /// Um elemento `{ chave → tag }` não se divide em exatamente duas partes.
    /// Carrega o texto completo entre chaves, não só o elemento defeituoso.
    #[error("opções de tag malformadas: {input:?}")]
    MalformedTagOptions { input: String },

    /// Chave repetida nas opções de tag (somente em [`ParseMode::Strict`]).
    ///
    /// [`ParseMode::Strict`]: crate::parser::ParseMode::Strict
    #[error("chave de opção duplicada {key:?} em {input:?}")]
    DuplicateKey { key: String, input: String },

    /// Tentativa de construir um mapeamento de tags sem nenhuma entrada.
    #[error("uma análise multi-tag precisa de ao menos uma opção de tag")]
    EmptyTagOptions,

    /// Falha em uma linha específica de um lote (linhas contadas a partir de 1).
    #[error("linha {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<MorphError>,
    },
}

/// Resultado padrão das operações que podem falhar com [`MorphError`].
pub type Result<T> = std::result::Result<T, MorphError>;

/// Motivo da ausência de uma tag em [`single_tag`] / [`tag_at`].
///
/// [`single_tag`]: crate::analysis::MorphAnalysis::single_tag
/// [`tag_at`]: crate::analysis::MorphAnalysis::tag_at
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TagLookupError {
    /// Há mais de uma opção e nenhuma chave foi informada.
    #[error("tag ambígua: {options} opções disponíveis, informe a chave")]
    Ambiguous { options: usize },

    /// A chave pedida não existe entre as opções.
    #[error("chave de opção inexistente: {key:?}")]
    MissingKey { key: String },
}
