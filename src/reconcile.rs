//! Reconciler: two-way difference between the engine/helper inventories and
//! the documentation inventory, plus the global accounting identity.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::DriftError;
use crate::inventory::Inventory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    UndocumentedFunction,
    UndocumentedConstant,
    Undefined,
}

impl Category {
    /// Functions are displayed with a call suffix.
    pub fn suffix(&self) -> &'static str {
        match self {
            Category::UndocumentedConstant => "",
            Category::UndocumentedFunction | Category::Undefined => "()",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub name: String,
    /// Label of the file the symbol was extracted from; `None` for undefined entries.
    pub origin: Option<String>,
    pub category: Category,
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.origin {
            Some(origin) => write!(f, "Defined in {origin}: {}{}", self.name, self.category.suffix()),
            None => write!(f, "{}{}", self.name, self.category.suffix()),
        }
    }
}

/// Raw inventory sizes, all taken after helper dedup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub engine_label: String,
    pub engine_functions: usize,
    pub engine_constants: usize,
    pub helper_functions: usize,
    pub documented: usize,
}

/// Both sides of the accounting identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Accounting {
    /// `|engine functions| + |engine constants| + sum of |helper inventory|`
    pub entities: usize,
    /// `|docs| - |undefined| + |undocumented functions| + |undocumented constants|`
    pub processed: usize,
}

impl Accounting {
    pub fn holds(&self) -> bool {
        self.entities == self.processed
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Reconciliation {
    pub undocumented_functions: Vec<Discrepancy>,
    pub undocumented_constants: Vec<Discrepancy>,
    pub undefined: Vec<Discrepancy>,
    pub summary: Summary,
    pub accounting: Accounting,
}

/// Terminal state of a run, decided after all discrepancies are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Clean,
    Discrepancies,
    IntegrityFailure,
}

impl RunStatus {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunStatus::Clean => 0,
            RunStatus::Discrepancies => 1,
            RunStatus::IntegrityFailure => 2,
        }
    }
}

impl Reconciliation {
    pub fn discrepancy_count(&self) -> usize {
        self.undocumented_functions.len() + self.undocumented_constants.len() + self.undefined.len()
    }

    pub fn is_clean(&self) -> bool {
        self.discrepancy_count() == 0
    }

    /// All discrepancies in report order.
    pub fn discrepancies(&self) -> impl Iterator<Item = &Discrepancy> {
        self.undocumented_functions
            .iter()
            .chain(&self.undocumented_constants)
            .chain(&self.undefined)
    }

    pub fn check_accounting(&self) -> Result<(), DriftError> {
        if self.accounting.holds() {
            Ok(())
        } else {
            Err(DriftError::Accounting {
                entities: self.accounting.entities,
                processed: self.accounting.processed,
            })
        }
    }

    /// An accounting mismatch outranks plain discrepancies.
    pub fn status(&self) -> RunStatus {
        if !self.accounting.holds() {
            RunStatus::IntegrityFailure
        } else if self.is_clean() {
            RunStatus::Clean
        } else {
            RunStatus::Discrepancies
        }
    }
}

/// Compare the engine and helper inventories against the documentation.
///
/// `helpers` must already be deduplicated against `engine_functions`.
/// Multiplicity is preserved: a name extracted twice and undocumented is
/// reported twice.
pub fn reconcile(
    engine_functions: &Inventory,
    engine_constants: &Inventory,
    helpers: &[Inventory],
    docs: &Inventory,
) -> Reconciliation {
    let documented: HashSet<&str> = docs.names.iter().map(String::as_str).collect();

    let undocumented_functions: Vec<Discrepancy> = std::iter::once(engine_functions)
        .chain(helpers)
        .flat_map(|inv| undocumented_in(inv, &documented, Category::UndocumentedFunction))
        .collect();
    let undocumented_constants: Vec<Discrepancy> =
        undocumented_in(engine_constants, &documented, Category::UndocumentedConstant).collect();

    let defined: HashSet<&str> = std::iter::once(engine_functions)
        .chain(helpers)
        .chain(std::iter::once(engine_constants))
        .flat_map(|inv| inv.names.iter().map(String::as_str))
        .collect();
    let undefined: Vec<Discrepancy> = docs
        .names
        .iter()
        .filter(|name| !defined.contains(name.as_str()))
        .map(|name| Discrepancy {
            name: name.clone(),
            origin: None,
            category: Category::Undefined,
        })
        .collect();

    let helper_functions: usize = helpers.iter().map(Inventory::len).sum();
    let entities = engine_functions.len() + engine_constants.len() + helper_functions;
    // undefined is drawn from docs, so this never underflows.
    let processed = docs.len() - undefined.len()
        + undocumented_functions.len()
        + undocumented_constants.len();
    let accounting = Accounting {
        entities,
        processed,
    };
    if !accounting.holds() {
        tracing::warn!(entities, processed, "accounting identity violated");
    }

    Reconciliation {
        undocumented_functions,
        undocumented_constants,
        undefined,
        summary: Summary {
            engine_label: engine_functions.label.clone(),
            engine_functions: engine_functions.len(),
            engine_constants: engine_constants.len(),
            helper_functions,
            documented: docs.len(),
        },
        accounting,
    }
}

fn undocumented_in<'a>(
    inventory: &'a Inventory,
    documented: &'a HashSet<&'a str>,
    category: Category,
) -> impl Iterator<Item = Discrepancy> + 'a {
    inventory
        .names
        .iter()
        .filter(move |name| !documented.contains(name.as_str()))
        .map(move |name| Discrepancy {
            name: name.clone(),
            origin: Some(inventory.label.clone()),
            category,
        })
}
