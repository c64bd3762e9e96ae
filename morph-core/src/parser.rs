//! # Parser / Serializador do Formato Canônico
//!
//! Uma análise é serializada em uma linha com cinco campos separados por `@`:
//!
//! ```text
//! ev-ler @ house-PL @ N.PL @ NOUN @ DEF
//! ev-ler @ house-PL @ { a  → N.PL}{ b  → V.3PL} @ NOUN @ DEF
//! ```
//!
//! ## Gramática
//!
//! 1. Divide em `@` e apara cada pedaço; exatamente **5** campos.
//! 2. O terceiro campo (`morph_info`):
//!    - entre `{` e `}`: opções nomeadas. Remove o par externo, divide em `{`,
//!      remove um `}` final de cada elemento e divide em `→` em exatamente
//!      duas partes (`chave`, `tag`);
//!    - caso contrário: tag única, literal.
//!
//! O parser tolera espaços ao redor de `→`; o serializador ([`Display`]) sempre
//! escreve `{ chave  → tag}`. Os delimitadores `@`, `→`, `{` e `}` são
//! reservados e não têm escape.
//!
//! [`Display`]: std::fmt::Display

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::{MorphAnalysis, MultiTagAnalysis, SingleTagAnalysis};
use crate::error::{MorphError, Result};
use crate::tag::TagOptions;

const FIELD_DELIMITER: char = '@';
const ARROW: char = '→';

/// Política para chaves de opção repetidas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseMode {
    /// **Tolerante**: a última ocorrência de uma chave vence (comportamento histórico).
    Lenient,
    /// **Estrito**: chave repetida é erro ([`MorphError::DuplicateKey`]).
    Strict,
}

impl Default for ParseMode {
    fn default() -> Self {
        ParseMode::Lenient
    }
}

/// Parseia uma análise no modo padrão ([`ParseMode::Lenient`]).
///
/// # Exemplo
/// ```rust
/// use morph_core::parser::parse;
///
/// let analysis = parse("ev-ler @ house-PL @ {a → N}{b → V} @ NOUN @ DEF").unwrap();
/// assert_eq!(analysis.tag_count(), 2);
/// assert_eq!(
///     analysis.to_string(),
///     "ev-ler @ house-PL @ { a  → N}{ b  → V} @ NOUN @ DEF"
/// );
/// ```
pub fn parse(input: &str) -> Result<MorphAnalysis> {
    parse_with_mode(input, ParseMode::default())
}

pub fn parse_with_mode(input: &str, mode: ParseMode) -> Result<MorphAnalysis> {
    let fields: Vec<&str> = input.split(FIELD_DELIMITER).map(str::trim).collect();
    // Os dois primeiros campos ocupam os slots na mesma ordem em que Display os escreve.
    let &[segmentation, translation, morph_info, pos, det] = fields.as_slice() else {
        return Err(MorphError::FieldCount {
            input: input.to_string(),
            found: fields.len(),
        });
    };

    let analysis = if is_braced(morph_info) {
        let tags = parse_tag_options_with_mode(morph_info, mode)?;
        MultiTagAnalysis::new(segmentation, translation, tags, pos, det).into()
    } else {
        SingleTagAnalysis::new(segmentation, translation, morph_info, pos, det).into()
    };
    Ok(analysis)
}

/// `true` se o texto começa com `{` e termina com `}` (sem checar balanceamento).
pub fn is_braced(text: &str) -> bool {
    text.starts_with('{') && text.ends_with('}')
}

/// Parseia `{ chave → tag}{ chave → tag}...` no modo padrão.
pub fn parse_tag_options(input: &str) -> Result<TagOptions> {
    parse_tag_options_with_mode(input, ParseMode::default())
}

pub fn parse_tag_options_with_mode(input: &str, mode: ParseMode) -> Result<TagOptions> {
    let malformed = || MorphError::MalformedTagOptions {
        input: input.to_string(),
    };
    let inner = input
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(malformed)?;

    let mut options: Option<TagOptions> = None;
    for element in inner.split('{') {
        let element = element.trim();
        let element = element.strip_suffix('}').unwrap_or(element);
        let parts: Vec<&str> = element.split(ARROW).map(str::trim).collect();
        let &[key, tag] = parts.as_slice() else {
            return Err(malformed());
        };

        if let Some(options) = options.as_mut() {
            if mode == ParseMode::Strict && options.contains_key(key) {
                return Err(MorphError::DuplicateKey {
                    key: key.to_string(),
                    input: input.to_string(),
                });
            }
            options.insert(key, tag);
        } else {
            options = Some(TagOptions::new(key, tag));
        }
    }
    // `split` sempre produz ao menos um elemento.
    options.ok_or_else(malformed)
}

impl FromStr for MorphAnalysis {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Parseia um bloco de texto com uma análise por linha.
///
/// Linhas em branco são ignoradas. As linhas são processadas em paralelo
/// (Rayon), mas o resultado preserva a ordem de entrada; em caso de falha,
/// devolve o erro da primeira linha inválida (numeração a partir de 1).
pub fn parse_lines(text: &str, mode: ParseMode) -> Result<Vec<MorphAnalysis>> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| (i + 1, line))
        .collect();

    let parsed: Vec<Result<MorphAnalysis>> = lines
        .par_iter()
        .map(|&(line, input)| {
            parse_with_mode(input, mode).map_err(|source| MorphError::Line {
                line,
                source: Box::new(source),
            })
        })
        .collect();

    parsed.into_iter().collect()
}

/// Serializa uma análise por linha, separadas por `\n`.
pub fn format_lines<T: fmt::Display>(analyses: &[T]) -> String {
    analyses
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
