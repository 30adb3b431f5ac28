use std::io::Write;
use std::path::Path;

use service::{InventoryStore, Quantity};
use tracing::debug;

use crate::commands::{self, report_rejection};

/// Run the fixed demo scenario against `path` and return the final store.
///
/// Rejected operations print an `Error:` line and the run continues; a failed
/// save is returned to the caller.
pub fn run<W: Write>(path: &Path, threshold: Quantity, out: &mut W) -> anyhow::Result<InventoryStore> {
    let mut store = InventoryStore::new();
    commands::load(&mut store, path, out)?;

    let mut logs = Vec::new();
    for (item, qty) in [("apple", 10), ("banana", 20), ("orange", 15)] {
        report_rejection(out, store.add(item, qty, Some(&mut logs)))?;
    }
    report_rejection(out, store.add_raw("milk", "ten", Some(&mut logs)))?;

    report_rejection(out, store.remove("apple", 3))?;
    report_rejection(out, store.remove("grape", 1))?;

    writeln!(out, "Apple stock: {}", store.get_quantity("apple"))?;
    writeln!(out, "Low items: {:?}", store.check_low_items(threshold))?;

    store.write_report(out)?;
    commands::save(&store, path)?;

    for line in &logs {
        debug!(%line, "demo log entry");
    }
    Ok(store)
}
