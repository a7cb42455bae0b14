use thiserror::Error;

/// Faults the pipeline must surface distinctly from ordinary discrepancies.
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("invalid pattern for rule {rule}: {message}")]
    Pattern { rule: String, message: String },

    #[error("rule {rule} failed while scanning {source_label}: {message}")]
    Match {
        rule: String,
        source_label: String,
        message: String,
    },

    #[error("rule {rule} matched in {source_label} but capture slot {slot} is empty")]
    MissingCapture {
        rule: String,
        source_label: String,
        slot: usize,
    },

    /// An extraction that must find at least one symbol found none. Usually the
    /// pattern is broken or the input schema changed.
    #[error("no {what} found in {source_label}; the extraction pattern or the source layout changed")]
    NoMatches { what: String, source_label: String },

    #[error(
        "accounting mismatch: {entities} extracted entities vs {processed} processed; \
         a symbol was likely counted in more than one inventory or dropped"
    )]
    Accounting { entities: usize, processed: usize },
}
