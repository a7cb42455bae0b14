use std::io::Write;

use crate::formatter::Formatter;
use crate::formatter::text::TextFormatter;
use crate::reconcile::Reconciliation;

/// Silent on a clean run, otherwise the full text report.
pub struct QuietFormatter;

impl Formatter for QuietFormatter {
    fn format_to(&self, result: &Reconciliation, out: &mut dyn Write) {
        if result.is_clean() && result.accounting.holds() {
            return;
        }
        TextFormatter.format_to(result, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::fixtures;

    fn render(result: &Reconciliation) -> String {
        let mut buf = Vec::new();
        QuietFormatter.format_to(result, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn clean_run_produces_no_output() {
        assert_eq!(render(&fixtures::clean()), "");
    }

    #[test]
    fn discrepancies_show_full_report() {
        let out = render(&fixtures::dirty());
        assert!(out.contains("Defined in C4Script.cpp: Bare()"));
        assert!(out.contains("\tGhost()"));
        assert!(out.contains("Exiting with"));
    }

    #[test]
    fn accounting_mismatch_is_not_silent() {
        let out = render(&fixtures::miscounted());
        assert!(out.contains("Accounting mismatch"));
    }
}
