pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod formatter;
pub mod fs;
pub mod inventory;
pub mod reconcile;
pub mod rules;
pub mod source;

use anyhow::Result;

use cli::Args;
use config::{ResolvedConfig, load_config};
use formatter::create_formatter;
use fs::discover_helper_files;
use inventory::{
    EngineInventories, Inventory, build_doc_inventory, build_engine_inventories,
    build_helper_inventories,
};
use reconcile::{Reconciliation, reconcile};
use source::SourceFile;

/// Every inventory extracted for one run, helpers already deduplicated.
#[derive(Debug, Clone)]
pub struct Inventories {
    pub engine: EngineInventories,
    pub helpers: Vec<Inventory>,
    pub docs: Inventory,
}

/// Load every input and build the inventories. Any I/O or extraction fault
/// aborts before reconciliation.
pub fn collect(config: &ResolvedConfig) -> Result<Inventories> {
    let engine_source = SourceFile::from_path(&config.engine_source)?;
    let helper_sources = discover_helper_files(&config.helper_dir, &config.helper_extension)?
        .iter()
        .map(|p| SourceFile::from_path(p))
        .collect::<Result<Vec<_>>>()?;
    let doc_source = SourceFile::from_path(&config.docs)?;

    let engine = build_engine_inventories(&engine_source)?;
    let helpers = build_helper_inventories(&helper_sources, &engine.functions)?;
    let docs = build_doc_inventory(&doc_source)?;
    Ok(Inventories {
        engine,
        helpers,
        docs,
    })
}

/// Run the whole pipeline and return the structured result without printing.
pub fn check(config: &ResolvedConfig) -> Result<Reconciliation> {
    let inv = collect(config)?;
    Ok(reconcile(
        &inv.engine.functions,
        &inv.engine.constants,
        &inv.helpers,
        &inv.docs,
    ))
}

/// Run the checker. Returns the exit code: 0 = clean, 1 = discrepancies
/// found, 2 = accounting identity violated. Fatal faults are returned as errors.
pub fn run(args: Args) -> Result<i32> {
    let config = load_config(args.config.as_deref(), &args.root, args.overrides())?;
    tracing::debug!(?config, "resolved inputs");

    // --list-symbols: dump every inventory and exit
    if args.list_symbols {
        let inv = collect(&config)?;
        let function_inventories = std::iter::once(&inv.engine.functions).chain(&inv.helpers);
        for i in function_inventories {
            for name in &i.names {
                println!("{}\tfunction\t{name}", i.label);
            }
        }
        for name in &inv.engine.constants.names {
            println!("{}\tconstant\t{name}", inv.engine.constants.label);
        }
        for name in &inv.docs.names {
            println!("{}\tdocumented\t{name}", inv.docs.label);
        }
        return Ok(0);
    }

    let result = check(&config)?;
    let formatter = create_formatter(&args.format);
    formatter.print(&result);

    if let Err(e) = result.check_accounting() {
        eprintln!("error: {e}");
    }
    Ok(result.status().exit_code())
}
