// Fri Oct 16 2026 - Alex

use super::error::IdsError;
use super::types::{PciIdTable, Vendor};
use serde::{Deserialize, Serialize};

/// How the parser treats lines it cannot use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Skip anything that is not a vendor or device line. For trusted corpora.
    #[default]
    Lenient,
    /// Reject malformed, orphaned and duplicate entries with their line number.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    Comment,
    Vendor(u16, &'a str),
    Device(u16, &'a str),
    /// Two or more tabs: subsystem or prog-if detail.
    Detail,
    /// `C xx  name` header that starts the device class section.
    ClassHeader,
    Malformed { indented: bool },
}

pub struct IdsParser {
    mode: ParseMode,
}

impl IdsParser {
    pub fn new() -> Self {
        Self {
            mode: ParseMode::Lenient,
        }
    }

    pub fn strict() -> Self {
        Self::new().with_mode(ParseMode::Strict)
    }

    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    fn is_strict(&self) -> bool {
        self.mode == ParseMode::Strict
    }

    /// Single pass over `text`. Lenient mode never returns `Err`.
    pub fn parse(&self, text: &str) -> Result<PciIdTable, IdsError> {
        let mut table = PciIdTable::new();
        let mut current: Option<u16> = None;
        let mut in_classes = false;
        let mut skipped = 0usize;

        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;

            match classify(raw) {
                Line::Blank | Line::Comment | Line::Detail => {}
                Line::ClassHeader => {
                    in_classes = true;
                }
                Line::Vendor(id, name) => {
                    in_classes = false;
                    match table.vendor_mut(id) {
                        Some(_) if self.is_strict() => {
                            return Err(IdsError::DuplicateVendor { line: line_no, id });
                        }
                        Some(existing) => existing.rename(name.to_string()),
                        None => table.insert_vendor(id, Vendor::new(name)),
                    }
                    current = Some(id);
                }
                Line::Device(id, name) => {
                    if in_classes && self.is_strict() {
                        continue;
                    }

                    let open = match current {
                        Some(vendor_id) => table.vendor_mut(vendor_id),
                        None => None,
                    };
                    let vendor = match open {
                        Some(vendor) => vendor,
                        None if self.is_strict() => {
                            return Err(IdsError::OrphanDevice { line: line_no });
                        }
                        None => {
                            log::trace!("Skipping device {:04x} without vendor on line {}", id, line_no);
                            skipped += 1;
                            continue;
                        }
                    };

                    if self.is_strict() && vendor.contains_device(id) {
                        return Err(IdsError::DuplicateDevice {
                            line: line_no,
                            vendor: current.unwrap_or_default(),
                            device: id,
                        });
                    }
                    vendor.insert_device(id, name.to_string());
                }
                Line::Malformed { indented } => {
                    if self.is_strict() && !(in_classes && indented) {
                        return Err(IdsError::MalformedLine {
                            line: line_no,
                            content: raw.to_string(),
                        });
                    }
                    log::trace!("Skipping unrecognised line {}: {:?}", line_no, raw);
                    skipped += 1;
                }
            }
        }

        log::debug!(
            "Parsed {} vendors ({:?} mode, {} lines skipped)",
            table.len(),
            self.mode,
            skipped
        );

        Ok(table)
    }
}

impl Default for IdsParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses a trusted corpus, skipping anything unrecognised.
pub fn parse_ids(text: &str) -> Result<PciIdTable, IdsError> {
    IdsParser::new().parse(text)
}

/// Parses a user-supplied id such as `8086`, `0x8086` or `e11`.
pub fn parse_hex_id(input: &str) -> Result<u16, IdsError> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    if digits.is_empty() || digits.len() > 4 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(IdsError::InvalidId(input.to_string()));
    }

    u16::from_str_radix(digits, 16).map_err(|_| IdsError::InvalidId(input.to_string()))
}

fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim_end_matches('\r');

    if line.trim().is_empty() {
        return Line::Blank;
    }
    if line.trim_start().starts_with('#') {
        return Line::Comment;
    }
    if line.starts_with("\t\t") {
        return Line::Detail;
    }
    if let Some(rest) = line.strip_prefix('\t') {
        return match split_entry(rest) {
            Some((id, name)) => Line::Device(id, name),
            None => Line::Malformed { indented: true },
        };
    }
    if line.starts_with("C ") {
        return Line::ClassHeader;
    }

    match split_entry(line) {
        Some((id, name)) => Line::Vendor(id, name),
        None => Line::Malformed { indented: false },
    }
}

/// Splits `<4 hex digits><whitespace><name>`.
fn split_entry(s: &str) -> Option<(u16, &str)> {
    let id = s.get(..4)?;
    if !id.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let rest = &s[4..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }

    let name = rest.trim();
    if name.is_empty() {
        return None;
    }

    u16::from_str_radix(id, 16).ok().map(|id| (id, name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compaq_smart_array() {
        let table = parse_ids("0e11  Compaq Computer Corporation\n\t0046  Smart Array 64xx\n").unwrap();

        assert_eq!(table.vendor_name(0x0e11), Some("Compaq Computer Corporation"));
        assert_eq!(table.device_name(0x0e11, 0x0046), Some("Smart Array 64xx"));
    }

    #[test]
    fn test_lsi_present_and_absent_devices() {
        let text = "1000  LSI Logic / Symbios Logic\n\t0001  53c810\n\t0002  53c820\n";
        let table = parse_ids(text).unwrap();
        let vendor = table.vendor(0x1000).unwrap();

        assert_eq!(vendor.device(0x0002), Some("53c820"));
        assert_eq!(vendor.device(0x0003), None);
    }

    #[test]
    fn test_vendor_without_devices() {
        let table = parse_ids("1006  Reply Group\n").unwrap();
        let vendor = table.vendor(0x1006).unwrap();

        assert_eq!(vendor.name(), "Reply Group");
        assert_eq!(vendor.device_count(), 0);
    }

    #[test]
    fn test_no_vendors_gives_empty_table() {
        let table = parse_ids("# just a comment\n\n").unwrap();
        assert!(table.is_empty());

        let table = parse_ids("").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_detail_lines_are_dropped() {
        let text = "0e11  Compaq Computer Corporation\n\
                    \t0046  Smart Array 64xx\n\
                    \t\t0e11 4091  Smart Array 6i\n\
                    \t\t\t4091  Deeper still\n";
        let table = parse_ids(text).unwrap();
        let vendor = table.vendor(0x0e11).unwrap();

        assert_eq!(vendor.device_count(), 1);
        assert_eq!(vendor.device(0x4091), None);
        assert!(!table.contains_vendor(0x4091));
    }

    #[test]
    fn test_devices_attach_to_latest_vendor() {
        let text = "1000  LSI Logic / Symbios Logic\n\t0001  53c810\n10de  NVIDIA Corporation\n\t0001  Not LSI\n";
        let table = parse_ids(text).unwrap();

        assert_eq!(table.device_name(0x1000, 0x0001), Some("53c810"));
        assert_eq!(table.device_name(0x10de, 0x0001), Some("Not LSI"));
        assert_eq!(table.vendor(0x1000).unwrap().device_count(), 1);
    }

    #[test]
    fn test_lenient_skips_orphans_and_garbage() {
        let text = "\t0001  Orphan\nnot a vendor line\n12  short id\n0e11\n0e11Compaq\n1000  LSI Logic / Symbios Logic\n\t 0002  bad indent\n\t0001  53c810\n";
        let table = parse_ids(text).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.vendor(0x1000).unwrap().device_count(), 1);
    }

    #[test]
    fn test_comment_between_vendor_and_devices() {
        let text = "0010  Allied Telesis, Inc (Wrong ID)\n# This is a relabelled RTL-8139\n\t8139  AT-2500TX V3 Ethernet\n";
        let table = parse_ids(text).unwrap();

        assert_eq!(table.device_name(0x0010, 0x8139), Some("AT-2500TX V3 Ethernet"));
    }

    #[test]
    fn test_crlf_and_uppercase_hex() {
        let table = parse_ids("10DE  NVIDIA Corporation\r\n\t1B80  GP104 [GeForce GTX 1080]\r\n").unwrap();

        assert_eq!(table.vendor_name(0x10de), Some("NVIDIA Corporation"));
        assert_eq!(table.device_name(0x10de, 0x1b80), Some("GP104 [GeForce GTX 1080]"));
    }

    #[test]
    fn test_class_section_adds_nothing() {
        let text = "8086  Intel Corporation\n\t100e  82540EM Gigabit Ethernet Controller\nC 02  Network controller\n\t00  Ethernet controller\n\t\t00  VGA controller\n";
        let table = parse_ids(text).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.vendor(0x8086).unwrap().device_count(), 1);
    }

    #[test]
    fn test_lenient_duplicates_merge() {
        let text = "1af4  Old Name\n\t1000  Virtio network device\n1af4  Red Hat, Inc.\n\t1001  Virtio block device\n\t1001  Virtio block device (renamed)\n";
        let table = parse_ids(text).unwrap();
        let vendor = table.vendor(0x1af4).unwrap();

        assert_eq!(vendor.name(), "Red Hat, Inc.");
        assert_eq!(vendor.device(0x1000), Some("Virtio network device"));
        assert_eq!(vendor.device(0x1001), Some("Virtio block device (renamed)"));
    }

    #[test]
    fn test_strict_accepts_well_formed_corpus() {
        let text = "# header\n\n1000  LSI Logic / Symbios Logic\n\t0001  53c810\n\t\t1000 1000  LSI53C810AE\nC 01  Mass storage controller\n\t06  SATA controller\n\t\t01  AHCI 1.0\n";
        let table = IdsParser::strict().parse(text).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.device_name(0x1000, 0x0001), Some("53c810"));
    }

    #[test]
    fn test_strict_reports_malformed_line() {
        let err = IdsParser::strict()
            .parse("1000  LSI Logic / Symbios Logic\nnonsense here\n")
            .unwrap_err();

        match err {
            IdsError::MalformedLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "nonsense here");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_reports_orphan_device() {
        let err = IdsParser::strict().parse("\n\t0001  53c810\n").unwrap_err();
        assert!(matches!(err, IdsError::OrphanDevice { line: 2 }));
    }

    #[test]
    fn test_strict_reports_duplicates() {
        let err = IdsParser::strict()
            .parse("1000  LSI\n1000  LSI again\n")
            .unwrap_err();
        assert!(matches!(err, IdsError::DuplicateVendor { line: 2, id: 0x1000 }));

        let err = IdsParser::strict()
            .parse("1000  LSI\n\t0001  53c810\n\t0001  53c810\n")
            .unwrap_err();
        assert!(matches!(
            err,
            IdsError::DuplicateDevice { line: 3, vendor: 0x1000, device: 0x0001 }
        ));
    }

    #[test]
    fn test_parse_hex_id() {
        assert_eq!(parse_hex_id("8086").unwrap(), 0x8086);
        assert_eq!(parse_hex_id("0x10DE").unwrap(), 0x10de);
        assert_eq!(parse_hex_id(" e11 ").unwrap(), 0x0e11);
        assert!(parse_hex_id("").is_err());
        assert!(parse_hex_id("0x").is_err());
        assert!(parse_hex_id("12345").is_err());
        assert!(parse_hex_id("+fff").is_err());
        assert!(parse_hex_id("zzzz").is_err());
    }
}
