use std::io::Write;

use serde::Serialize;

use crate::formatter::Formatter;
use crate::reconcile::{Accounting, Discrepancy, Reconciliation, Summary};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    metadata: Metadata<'a>,
    undocumented_functions: &'a [Discrepancy],
    undocumented_constants: &'a [Discrepancy],
    undefined: &'a [Discrepancy],
}

#[derive(Serialize)]
struct Metadata<'a> {
    #[serde(flatten)]
    summary: &'a Summary,
    discrepancy_count: usize,
    accounting: &'a Accounting,
    accounting_holds: bool,
}

impl Formatter for JsonFormatter {
    fn format_to(&self, result: &Reconciliation, out: &mut dyn Write) {
        let output = JsonOutput {
            metadata: Metadata {
                summary: &result.summary,
                discrepancy_count: result.discrepancy_count(),
                accounting: &result.accounting,
                accounting_holds: result.accounting.holds(),
            },
            undocumented_functions: &result.undocumented_functions,
            undocumented_constants: &result.undocumented_constants,
            undefined: &result.undefined,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                let _ = writeln!(out, "{json}");
            }
            Err(e) => tracing::error!("failed to serialize report: {e}"),
        }
    }
}
