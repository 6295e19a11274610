// Fri Oct 16 2026 - Alex

use super::error::IdsError;
use super::parser::{IdsParser, ParseMode};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// A vendor entry: display name plus its device-id-to-name map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vendor {
    name: String,
    devices: HashMap<u16, String>,
}

impl Vendor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            devices: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn device(&self, id: u16) -> Option<&str> {
        self.devices.get(&id).map(|s| s.as_str())
    }

    pub fn contains_device(&self, id: u16) -> bool {
        self.devices.contains_key(&id)
    }

    pub fn devices(&self) -> impl Iterator<Item = (u16, &str)> {
        self.devices.iter().map(|(id, name)| (*id, name.as_str()))
    }

    /// Devices ordered by id, for stable output.
    pub fn sorted_devices(&self) -> Vec<(u16, &str)> {
        let mut devices: Vec<(u16, &str)> = self.devices().collect();
        devices.sort_by_key(|(id, _)| *id);
        devices
    }

    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    pub(crate) fn rename(&mut self, name: String) {
        self.name = name;
    }

    pub(crate) fn insert_device(&mut self, id: u16, name: String) -> Option<String> {
        self.devices.insert(id, name)
    }
}

/// Vendor id to vendor map. Read-only once handed out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PciIdTable {
    vendors: HashMap<u16, Vendor>,
}

impl PciIdTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads and parses a corpus from disk.
    pub fn from_path(path: &Path, mode: ParseMode) -> Result<Self, IdsError> {
        let text = std::fs::read_to_string(path)?;
        log::debug!("Read {} bytes of pci.ids from {}", text.len(), path.display());
        IdsParser::new().with_mode(mode).parse(&text)
    }

    pub fn vendor(&self, id: u16) -> Option<&Vendor> {
        self.vendors.get(&id)
    }

    pub fn vendor_name(&self, id: u16) -> Option<&str> {
        self.vendor(id).map(Vendor::name)
    }

    pub fn device_name(&self, vendor: u16, device: u16) -> Option<&str> {
        self.vendor(vendor).and_then(|v| v.device(device))
    }

    pub fn contains_vendor(&self, id: u16) -> bool {
        self.vendors.contains_key(&id)
    }

    pub fn vendors(&self) -> impl Iterator<Item = (u16, &Vendor)> {
        self.vendors.iter().map(|(id, vendor)| (*id, vendor))
    }

    pub fn len(&self) -> usize {
        self.vendors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }

    pub fn stats(&self) -> TableStats {
        let mut stats = TableStats {
            vendors: self.vendors.len(),
            ..TableStats::default()
        };

        for vendor in self.vendors.values() {
            stats.devices += vendor.device_count();
            if vendor.device_count() == 0 {
                stats.empty_vendors += 1;
            }
        }

        stats
    }

    pub(crate) fn vendor_mut(&mut self, id: u16) -> Option<&mut Vendor> {
        self.vendors.get_mut(&id)
    }

    pub(crate) fn insert_vendor(&mut self, id: u16, vendor: Vendor) {
        self.vendors.insert(id, vendor);
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableStats {
    pub vendors: usize,
    pub devices: usize,
    pub empty_vendors: usize,
}

impl fmt::Display for TableStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vendors, {} devices ({} vendors without devices)",
            self.vendors, self.devices, self.empty_vendors
        )
    }
}
