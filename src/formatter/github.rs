use std::io::Write;

use crate::formatter::Formatter;
use crate::reconcile::{Category, Reconciliation};

/// GitHub Actions workflow commands, one annotation per discrepancy.
pub struct GithubFormatter;

impl Formatter for GithubFormatter {
    fn format_to(&self, result: &Reconciliation, out: &mut dyn Write) {
        for d in result.discrepancies() {
            let title = match d.category {
                Category::UndocumentedFunction => "Undocumented function",
                Category::UndocumentedConstant => "Undocumented constant",
                Category::Undefined => "Undefined documentation entry",
            };
            let location = d
                .origin
                .as_deref()
                .map(|origin| format!(" file={origin},"))
                .unwrap_or_else(|| " ".to_string());
            let _ = writeln!(
                out,
                "::warning{location}title={title}::{}{}",
                d.name,
                d.category.suffix(),
            );
        }
        if !result.accounting.holds() {
            let _ = writeln!(
                out,
                "::error title=Accounting mismatch::{} entities extracted but {} processed",
                result.accounting.entities, result.accounting.processed,
            );
        }
    }
}
