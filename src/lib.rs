// Fri Oct 16 2026 - Alex

//! PCI vendor and device name lookup backed by a compiled-in `pci.ids`.
//!
//! The embedded table is parsed on first use and shared for the life of the
//! process:
//!
//! ```
//! let table = pci_ids::get_table();
//! assert_eq!(table.device_name(0x0e11, 0x0046), Some("Smart Array 64xx"));
//! assert_eq!(table.device_name(0x1000, 0x0003), Some("53c825"));
//! ```
//!
//! Other corpora go through [`IdsParser`], which can run in strict mode for
//! files that are not trusted.

pub mod config;
pub mod ids;
pub mod ui;
pub mod utils;

pub use config::Config;
pub use ids::{
    get_table, parse_hex_id, parse_ids, IdResolver, IdsError, IdsParser, ParseMode, PciIdTable,
    Resolved, Vendor,
};
