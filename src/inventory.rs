//! Inventory builders for the engine source, helper scripts and lcdocs corpus.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::DriftError;
use crate::extract::extract;
use crate::rules;
use crate::source::SourceFile;

/// Ordered symbol names extracted from one logical source.
///
/// Insertion order is extraction order and duplicates are kept: the accounting
/// identity sums raw inventory lengths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    /// Display name of the originating file.
    pub label: String,
    pub names: Vec<String>,
}

impl Inventory {
    pub fn new(label: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            label: label.into(),
            names,
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// Engine functions and constants, both extracted from the core source.
#[derive(Debug, Clone)]
pub struct EngineInventories {
    pub functions: Inventory,
    pub constants: Inventory,
}

pub fn build_engine_inventories(source: &SourceFile) -> Result<EngineInventories, DriftError> {
    let functions = extract(&source.label, &source.text, &rules::engine_function_rules()?)?;
    if functions.is_empty() {
        return Err(DriftError::NoMatches {
            what: "engine function registrations".to_string(),
            source_label: source.label.clone(),
        });
    }
    let constants = extract(&source.label, &source.text, &rules::engine_constant_rules()?)?;
    if constants.is_empty() {
        return Err(DriftError::NoMatches {
            what: "engine constant table rows".to_string(),
            source_label: source.label.clone(),
        });
    }
    tracing::debug!(
        source = %source.label,
        functions = functions.len(),
        constants = constants.len(),
        "engine inventories built"
    );
    Ok(EngineInventories {
        functions: Inventory::new(&source.label, functions),
        constants: Inventory::new(&source.label, constants),
    })
}

/// One inventory per helper script, in input order, with engine overrides removed.
///
/// A helper file may legitimately contribute nothing (all of its functions
/// may be marked internal), so an empty result here is not a fault.
pub fn build_helper_inventories(
    helpers: &[SourceFile],
    engine_functions: &Inventory,
) -> Result<Vec<Inventory>, DriftError> {
    let rules = rules::helper_function_rules()?;
    helpers
        .iter()
        .map(|helper| -> Result<Inventory, DriftError> {
            let raw = Inventory::new(&helper.label, extract(&helper.label, &helper.text, &rules)?);
            let kept = dedup(&raw, engine_functions);
            let removed = raw.len() - kept.len();
            if removed > 0 {
                tracing::debug!(helper = %helper.label, removed, "helper functions shadow engine functions");
            }
            Ok(kept)
        })
        .collect()
}

/// Drop every helper entry whose name the engine already registers.
///
/// Only engine *functions* shadow helpers; engine constants never do.
pub fn dedup(helper: &Inventory, engine_functions: &Inventory) -> Inventory {
    let engine: HashSet<&str> = engine_functions.names.iter().map(String::as_str).collect();
    Inventory {
        label: helper.label.clone(),
        names: helper
            .names
            .iter()
            .filter(|n| !engine.contains(n.as_str()))
            .cloned()
            .collect(),
    }
}

pub fn build_doc_inventory(source: &SourceFile) -> Result<Inventory, DriftError> {
    let names = extract(&source.label, &source.text, &rules::doc_name_rules()?)?;
    if names.is_empty() {
        return Err(DriftError::NoMatches {
            what: "documentation entries".to_string(),
            source_label: source.label.clone(),
        });
    }
    tracing::debug!(source = %source.label, entries = names.len(), "documentation inventory built");
    Ok(Inventory::new(&source.label, names))
}
