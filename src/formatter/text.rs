use std::io::Write;

use crate::formatter::Formatter;
use crate::reconcile::{Discrepancy, Reconciliation};

pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn format_to(&self, result: &Reconciliation, out: &mut dyn Write) {
        let s = &result.summary;
        section(
            out,
            "The following C4Script functions are defined in the engine but not documented in lcdocs:",
            &result.undocumented_functions,
        );
        section(
            out,
            "The following C4Script constants are defined in the engine but not documented in lcdocs:",
            &result.undocumented_constants,
        );
        section(
            out,
            "The following C4Script functions and constants are documented in lcdocs but not defined in the engine:",
            &result.undefined,
        );

        let _ = writeln!(
            out,
            "\nThere are\n * {} defined functions in {},\n * {} defined constants in {},\n * {} defined functions in helper files and\n * {} documented functions and constants in lcdocs.\n",
            s.engine_functions, s.engine_label, s.engine_constants, s.engine_label,
            s.helper_functions, s.documented,
        );
        let _ = writeln!(
            out,
            "Exiting with {} undocumented functions, {} undocumented constants and {} undefined functions or constants.",
            result.undocumented_functions.len(),
            result.undocumented_constants.len(),
            result.undefined.len(),
        );
        if !result.accounting.holds() {
            let _ = writeln!(
                out,
                "\nAccounting mismatch: {} entities extracted but {} processed. \
                 A symbol was probably matched by more than one pattern or dropped.",
                result.accounting.entities, result.accounting.processed,
            );
        }
    }
}

fn section(out: &mut dyn Write, heading: &str, entries: &[Discrepancy]) {
    let _ = writeln!(out, "\n{heading}\n");
    for d in entries {
        let _ = writeln!(out, "\t{d}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::fixtures;

    fn render(result: &Reconciliation) -> String {
        let mut buf = Vec::new();
        TextFormatter.format_to(result, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_each_category_with_origin() {
        let out = render(&fixtures::dirty());
        assert!(out.contains("\tDefined in C4Script.cpp: Bare()\n"));
        assert!(out.contains("\tDefined in C4Script.cpp: BAZ\n"));
        assert!(out.contains("\tGhost()\n"));
        let f = out.find("Bare()").unwrap();
        let c = out.find("BAZ\n").unwrap();
        let u = out.find("Ghost()").unwrap();
        assert!(f < c && c < u);
    }

    #[test]
    fn summary_counts() {
        let out = render(&fixtures::dirty());
        assert!(out.contains(" * 2 defined functions in C4Script.cpp,"));
        assert!(out.contains(" * 2 defined constants in C4Script.cpp,"));
        assert!(out.contains(" * 1 defined functions in helper files and"));
        assert!(out.contains(" * 4 documented functions and constants in lcdocs."));
        assert!(out.contains(
            "Exiting with 1 undocumented functions, 1 undocumented constants and 1 undefined functions or constants."
        ));
        assert!(!out.contains("Accounting mismatch"));
    }

    #[test]
    fn mismatch_is_reported_after_lists() {
        let out = render(&fixtures::miscounted());
        let exiting = out.find("Exiting with").unwrap();
        let mismatch = out.find("Accounting mismatch: 3 entities extracted but 2 processed").unwrap();
        assert!(exiting < mismatch);
    }
}
