//! Pattern Extractor: pulls symbol names out of a text blob with one or more
//! (pattern, capture slot) rules.

use crate::error::DriftError;

/// A compiled lexical pattern.
///
/// Patterns the `regex` crate accepts are kept on that engine. Patterns that
/// need look-around (e.g. "not preceded by an `// internal` line") fall back
/// to `fancy-regex`.
#[derive(Debug, Clone)]
pub enum Pattern {
    Plain(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Pattern {
    pub fn compile(rule: &str, source: &str) -> Result<Self, DriftError> {
        if let Ok(re) = regex::Regex::new(source) {
            return Ok(Pattern::Plain(re));
        }
        fancy_regex::Regex::new(source)
            .map(Pattern::Fancy)
            .map_err(|e| DriftError::Pattern {
                rule: rule.to_string(),
                message: e.to_string(),
            })
    }

    pub fn as_str(&self) -> &str {
        match self {
            Pattern::Plain(re) => re.as_str(),
            Pattern::Fancy(re) => re.as_str(),
        }
    }
}

/// How to pull one symbol name out of each match of a pattern.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pub name: String,
    pub pattern: Pattern,
    /// Capture group index holding the symbol name.
    pub slot: usize,
}

impl ExtractionRule {
    pub fn new(name: &str, pattern: &str, slot: usize) -> Result<Self, DriftError> {
        Ok(Self {
            name: name.to_string(),
            pattern: Pattern::compile(name, pattern)?,
            slot,
        })
    }
}

/// Scan `text` with every rule in turn and concatenate the captured names.
///
/// Results keep rule order first, then left-to-right match order within a rule.
/// Duplicates are preserved. Finding nothing is not an error here; callers
/// decide whether an empty result is fatal.
pub fn extract(
    source_label: &str,
    text: &str,
    rules: &[ExtractionRule],
) -> Result<Vec<String>, DriftError> {
    let mut names = Vec::new();
    for rule in rules {
        let missing = || DriftError::MissingCapture {
            rule: rule.name.clone(),
            source_label: source_label.to_string(),
            slot: rule.slot,
        };
        match &rule.pattern {
            Pattern::Plain(re) => {
                for caps in re.captures_iter(text) {
                    let m = caps.get(rule.slot).ok_or_else(missing)?;
                    names.push(m.as_str().to_string());
                }
            }
            Pattern::Fancy(re) => {
                for caps in re.captures_iter(text) {
                    let caps = caps.map_err(|e| DriftError::Match {
                        rule: rule.name.clone(),
                        source_label: source_label.to_string(),
                        message: e.to_string(),
                    })?;
                    let m = caps.get(rule.slot).ok_or_else(missing)?;
                    names.push(m.as_str().to_string());
                }
            }
        }
    }
    Ok(names)
}
