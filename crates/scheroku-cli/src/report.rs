//! Text and JSON rendering for the CLI commands.

use clap::ValueEnum;
use scheroku_types::DynoSize;
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Pretty,
    Json,
}

#[derive(Serialize)]
struct Entry {
    name: &'static str,
    size: DynoSize,
}

/// Every size in declaration order.
pub fn render_list(format: Format) -> serde_json::Result<String> {
    match format {
        Format::Pretty => Ok(DynoSize::iter()
            .map(|d| format!("{}  {}\n", d.name(), d.size()))
            .collect()),
        Format::Json => {
            let entries: Vec<Entry> = DynoSize::iter()
                .map(|d| Entry {
                    name: d.name(),
                    size: d,
                })
                .collect();
            serde_json::to_string_pretty(&entries)
        }
    }
}

pub fn render_show(size: DynoSize) -> String {
    format!("name={} size={}", size.name(), size.size())
}
