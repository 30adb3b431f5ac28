//! Console side of the store operations: turns recoverable failures and load
//! outcomes into `Info:` / `Error:` lines and lets everything else propagate.

use std::io::Write;
use std::path::Path;

use service::{InventoryStore, LoadOutcome, Quantity, ServiceError};
use tracing::debug;

/// Load `path` into `store`, printing a line when the file was missing or unreadable.
pub fn load<W: Write>(store: &mut InventoryStore, path: &Path, out: &mut W) -> anyhow::Result<LoadOutcome> {
    let outcome = store.load(path)?;
    match &outcome {
        LoadOutcome::Loaded { .. } => {}
        LoadOutcome::Missing => {
            writeln!(out, "Info: '{}' not found. Starting with empty inventory.", path.display())?;
        }
        LoadOutcome::Malformed(_) => {
            writeln!(out, "Error: Could not decode '{}'. Starting with empty inventory.", path.display())?;
        }
    }
    Ok(outcome)
}

/// Print a recoverable error and continue; `None` means the operation was rejected.
pub fn report_rejection<T, W: Write>(out: &mut W, result: Result<T, ServiceError>) -> anyhow::Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_recoverable() => {
            debug!(error = %e, "operation rejected");
            writeln!(out, "Error: {e}")?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Create the data directory if needed, then write the store.
pub fn save(store: &InventoryStore, path: &Path) -> anyhow::Result<()> {
    common::env::ensure_parent_dir(path)?;
    store.save(path)?;
    Ok(())
}

pub fn add<W: Write>(path: &Path, item: &str, raw_qty: &str, out: &mut W) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    load(&mut store, path, out)?;
    let mut logs = Vec::new();
    if report_rejection(out, store.add_raw(item, raw_qty, Some(&mut logs)))?.is_none() {
        return Ok(());
    }
    for line in &logs {
        writeln!(out, "{line}")?;
    }
    save(&store, path)
}

pub fn remove<W: Write>(path: &Path, item: &str, raw_qty: &str, out: &mut W) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    load(&mut store, path, out)?;
    let Some(left) = report_rejection(out, store.remove_raw(item, raw_qty))? else {
        return Ok(());
    };
    writeln!(out, "{item}: {left}")?;
    save(&store, path)
}

pub fn get<W: Write>(path: &Path, item: &str, out: &mut W) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    load(&mut store, path, out)?;
    writeln!(out, "{item}: {}", store.get_quantity(item))?;
    Ok(())
}

pub fn report<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    load(&mut store, path, out)?;
    store.write_report(out)?;
    Ok(())
}

pub fn low<W: Write>(path: &Path, threshold: Quantity, out: &mut W) -> anyhow::Result<()> {
    let mut store = InventoryStore::new();
    load(&mut store, path, out)?;
    writeln!(out, "Low items: {:?}", store.check_low_items(threshold))?;
    Ok(())
}
