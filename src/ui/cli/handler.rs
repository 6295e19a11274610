// Fri Oct 16 2026 - Alex

use super::args::{Args, Command, LookupArgs, SearchArgs, VendorArgs};
use crate::config::{Config, ConfigError};
use crate::ids::hex::format_id;
use crate::ids::{parse_hex_id, IdResolver, ParseMode};
use crate::utils::logging;
use anyhow::Context;
use colored::Colorize;
use serde_json::json;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        let config = self.build_config(&args)?;
        logging::init_logger(logging::level_from_str(&config.log_level));

        if !config.color {
            colored::control::set_override(false);
        }

        let table = config.open_table().with_context(|| match &config.ids_file {
            Some(path) => format!("Failed to load {}", path.display()),
            None => "Failed to load built-in database".to_string(),
        })?;
        let resolver = IdResolver::new(&table);

        let output = match args.command {
            Command::Lookup(lookup_args) => self.handle_lookup(&resolver, &config, lookup_args)?,
            Command::Vendor(vendor_args) => self.handle_vendor(&resolver, &config, vendor_args)?,
            Command::Search(search_args) => self.handle_search(&resolver, &config, search_args)?,
            Command::Stats => self.handle_stats(&resolver, &config)?,
        };

        println!("{}", output);
        Ok(())
    }

    /// Config file (if any) first, then command-line overrides.
    pub fn build_config(&self, args: &Args) -> anyhow::Result<Config> {
        let mut config = match &args.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if let Some(level) = &args.log_level {
            config.log_level = level.clone();
        }
        if let Some(path) = &args.ids_file {
            config.ids_file = Some(path.clone());
        }
        if args.strict {
            config.parse_mode = ParseMode::Strict;
        }
        if args.json {
            config.json_output = true;
        }
        if args.no_color {
            config.color = false;
        }

        config.validate().map_err(ConfigError::Validation)?;
        Ok(config)
    }

    fn handle_lookup(&self, resolver: &IdResolver, config: &Config, args: LookupArgs) -> anyhow::Result<String> {
        let vendor = parse_hex_id(&args.vendor)?;

        let Some(device) = args.device.as_deref() else {
            let name = resolver.vendor_name(vendor);
            if config.json_output {
                let value = json!({ "vendor_id": format_id(vendor), "vendor_name": name });
                return Ok(serde_json::to_string_pretty(&value)?);
            }
            return Ok(match name {
                Some(name) => format!("{:04x}  {}", vendor, name.green()),
                None => format!("{:04x}  {}", vendor, "unknown vendor".yellow()),
            });
        };

        let device = parse_hex_id(device)?;
        let resolved = resolver.resolve(vendor, device);
        log::debug!("Resolved {:04x}:{:04x} -> {:?}", vendor, device, resolved);

        if config.json_output {
            return Ok(serde_json::to_string_pretty(&resolved)?);
        }

        let mut line = format!(
            "{:04x}:{:04x}  {} {}",
            vendor,
            device,
            resolved.vendor_display().green(),
            resolved.device_display().cyan()
        );
        if !resolved.is_known() {
            line.push_str(&format!(" {}", "(unknown)".yellow()));
        }
        Ok(line)
    }

    fn handle_vendor(&self, resolver: &IdResolver, config: &Config, args: VendorArgs) -> anyhow::Result<String> {
        let vendor_id = parse_hex_id(&args.vendor)?;
        let vendor = resolver.table().vendor(vendor_id);

        if config.json_output {
            let value = match vendor {
                Some(vendor) => json!({
                    "vendor_id": format_id(vendor_id),
                    "vendor_name": vendor.name(),
                    "devices": vendor
                        .sorted_devices()
                        .into_iter()
                        .map(|(id, name)| json!({ "device_id": format_id(id), "name": name }))
                        .collect::<Vec<_>>(),
                }),
                None => json!({ "vendor_id": format_id(vendor_id), "vendor_name": null, "devices": [] }),
            };
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let Some(vendor) = vendor else {
            return Ok(format!("{:04x}  {}", vendor_id, "unknown vendor".yellow()));
        };

        let mut lines = vec![format!("{:04x}  {}", vendor_id, vendor.name().green().bold())];
        for (id, name) in vendor.sorted_devices() {
            lines.push(format!("\t{:04x}  {}", id, name));
        }
        if vendor.device_count() == 0 {
            lines.push(format!("\t{}", "no devices listed".dimmed()));
        }
        Ok(lines.join("\n"))
    }

    fn handle_search(&self, resolver: &IdResolver, config: &Config, args: SearchArgs) -> anyhow::Result<String> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let limit = args.limit.unwrap_or(config.search_limit);
        let hits = resolver.search(&args.pattern);
        let total = hits.len();
        let shown = &hits[..total.min(limit)];

        if config.json_output {
            let value = json!({ "total": total, "hits": shown });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        if hits.is_empty() {
            return Ok(format!("{} {:?}", "No matches for".yellow(), args.pattern));
        }

        let mut lines: Vec<String> = shown.iter().map(|hit| hit.to_string()).collect();
        if total > shown.len() {
            lines.push(format!("{}", format!("... {} more matches", total - shown.len()).dimmed()));
        }
        Ok(lines.join("\n"))
    }

    fn handle_stats(&self, resolver: &IdResolver, config: &Config) -> anyhow::Result<String> {
        let stats = resolver.table().stats();
        let source = match &config.ids_file {
            Some(path) => path.display().to_string(),
            None => "built-in".to_string(),
        };

        if config.json_output {
            let value = json!({ "source": source, "stats": stats });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        Ok(format!("{} {}\n{}", "Source:".cyan(), source, stats))
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
