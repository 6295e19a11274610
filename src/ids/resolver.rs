// Fri Oct 16 2026 - Alex

use super::database::get_table;
use super::hex::format_id;
use super::types::PciIdTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name queries against a borrowed table. Use `global()` for the embedded one,
/// or hand it any table built with `IdsParser`.
#[derive(Debug, Clone, Copy)]
pub struct IdResolver<'a> {
    table: &'a PciIdTable,
}

/// Result of resolving a vendor/device pair. Names are `None` when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolved {
    #[serde(with = "crate::ids::hex")]
    pub vendor_id: u16,
    #[serde(with = "crate::ids::hex")]
    pub device_id: u16,
    pub vendor_name: Option<String>,
    pub device_name: Option<String>,
}

impl Resolved {
    pub fn vendor_display(&self) -> String {
        self.vendor_name
            .clone()
            .unwrap_or_else(|| format_id(self.vendor_id))
    }

    pub fn device_display(&self) -> String {
        self.device_name
            .clone()
            .unwrap_or_else(|| format_id(self.device_id))
    }

    pub fn is_known(&self) -> bool {
        self.vendor_name.is_some() && self.device_name.is_some()
    }
}

impl fmt::Display for Resolved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.vendor_display(), self.device_display())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(with = "crate::ids::hex")]
    pub vendor_id: u16,
    #[serde(with = "crate::ids::hex::option")]
    pub device_id: Option<u16>,
    pub name: String,
}

impl fmt::Display for SearchHit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.device_id {
            Some(device) => write!(f, "{:04x}:{:04x}  {}", self.vendor_id, device, self.name),
            None => write!(f, "{:04x}       {}", self.vendor_id, self.name),
        }
    }
}

impl<'a> IdResolver<'a> {
    pub fn new(table: &'a PciIdTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a PciIdTable {
        self.table
    }

    pub fn vendor_name(&self, vendor: u16) -> Option<&'a str> {
        self.table.vendor_name(vendor)
    }

    pub fn device_name(&self, vendor: u16, device: u16) -> Option<&'a str> {
        self.table.device_name(vendor, device)
    }

    /// Vendor and device names, falling back to 4-digit hex for unknown ids.
    pub fn lookup_names(&self, vendor: u16, device: u16) -> (String, String) {
        let resolved = self.resolve(vendor, device);
        (resolved.vendor_display(), resolved.device_display())
    }

    pub fn resolve(&self, vendor: u16, device: u16) -> Resolved {
        Resolved {
            vendor_id: vendor,
            device_id: device,
            vendor_name: self.vendor_name(vendor).map(str::to_string),
            device_name: self.device_name(vendor, device).map(str::to_string),
        }
    }

    /// Case-insensitive substring match over vendor and device names.
    pub fn search(&self, pattern: &str) -> Vec<SearchHit> {
        let needle = pattern.to_lowercase();
        let mut hits = Vec::new();

        for (vendor_id, vendor) in self.table.vendors() {
            if vendor.name().to_lowercase().contains(&needle) {
                hits.push(SearchHit {
                    vendor_id,
                    device_id: None,
                    name: vendor.name().to_string(),
                });
            }

            for (device_id, name) in vendor.devices() {
                if name.to_lowercase().contains(&needle) {
                    hits.push(SearchHit {
                        vendor_id,
                        device_id: Some(device_id),
                        name: name.to_string(),
                    });
                }
            }
        }

        hits.sort_by_key(|hit| (hit.vendor_id, hit.device_id));
        hits
    }
}

impl IdResolver<'static> {
    pub fn global() -> Self {
        Self::new(get_table())
    }
}
