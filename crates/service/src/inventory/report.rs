use std::io::{self, Write};

use super::InventoryStore;
use crate::quantity::Quantity;

const REPORT_HEADER: &str = "--- Items Report ---";
const REPORT_FOOTER: &str = "--------------------";

impl InventoryStore {
    /// Write every `item -> qty` line between the report banners.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{REPORT_HEADER}")?;
        for (item, qty) in self.iter() {
            writeln!(out, "{item} -> {qty}")?;
        }
        writeln!(out, "{REPORT_FOOTER}")
    }

    pub fn print_report(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_report(&mut out)
    }

    /// Items whose quantity is strictly below `threshold`, in iteration order.
    pub fn check_low_items(&self, threshold: Quantity) -> Vec<String> {
        self.iter()
            .filter(|(_, qty)| *qty < threshold)
            .map(|(item, _)| item.to_string())
            .collect()
    }
}
