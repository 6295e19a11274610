// Fri Oct 16 2026 - Alex

pub mod database;
pub mod error;
pub mod hex;
pub mod parser;
pub mod resolver;
pub mod types;

pub use database::{embedded_corpus, get_table};
pub use error::IdsError;
pub use parser::{parse_hex_id, parse_ids, IdsParser, ParseMode};
pub use resolver::{IdResolver, Resolved, SearchHit};
pub use types::{PciIdTable, TableStats, Vendor};
