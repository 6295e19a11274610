// Fri Oct 16 2026 - Alex
// Embedded pci.ids corpus and the process-wide table built from it

use super::parser::IdsParser;
use super::types::PciIdTable;
use crate::utils::logging::ScopedTimer;
use std::sync::OnceLock;

/// Full pci.ids text; subsystem and class lines are dropped when parsing.
static PCI_IDS: &str = include_str!("../../data/pci.ids");

/// The raw compiled-in corpus.
pub fn embedded_corpus() -> &'static str {
    PCI_IDS
}

fn build_table() -> PciIdTable {
    let _timer = ScopedTimer::new("pci.ids build");

    // Lenient parsing cannot fail; an Err here means the parser regressed.
    let table = match IdsParser::new().parse(PCI_IDS) {
        Ok(table) => table,
        Err(e) => panic!("embedded pci.ids failed to parse: {}", e),
    };

    log::debug!("Built PCI id table: {}", table.stats());
    table
}

/// Get the global id table, parsing the embedded corpus on first use.
pub fn get_table() -> &'static PciIdTable {
    static TABLE: OnceLock<PciIdTable> = OnceLock::new();
    TABLE.get_or_init(build_table)
}
