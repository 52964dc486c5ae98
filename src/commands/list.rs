use std::io::Write;

use anyhow::Result;
use crossterm::style::ContentStyle;
use serde::Serialize;

use crate::assets::{ASSETS, Asset, FALLBACK};
use crate::render;
use crate::theme;

#[derive(Debug, Default)]
pub struct ListConfig {
    pub json: bool,
    /// Apply terminal styles to the table.
    pub styled: bool,
}

/// Measurements of one decoded asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub threshold: u16,
    pub columns: usize,
    pub rows: usize,
    pub bytes: usize,
}

impl Variant {
    pub fn measure(asset: &Asset) -> Result<Self> {
        let text = render::decompress(asset)?;
        Ok(Self {
            threshold: asset.width_threshold,
            columns: text.lines().map(render::visible_width).max().unwrap_or(0),
            rows: text.lines().count(),
            bytes: text.len(),
        })
    }
}

pub fn variants() -> Result<Vec<Variant>> {
    ASSETS.iter().map(Variant::measure).collect()
}

/// Print the embedded variants, widest first.
pub fn list<W: Write>(config: &ListConfig, mut writer: W) -> Result<()> {
    let variants = variants()?;

    if config.json {
        serde_json::to_writer_pretty(&mut writer, &variants)?;
        writeln!(writer)?;
        return Ok(());
    }

    let paint = |text: String, style: ContentStyle| {
        if config.styled {
            style.apply(text).to_string()
        } else {
            text
        }
    };

    let header = format!("{:>9}  {:>7}  {:>4}  {:>6}", "threshold", "columns", "rows", "bytes");
    writeln!(writer, "{}", paint(header, theme::header()))?;
    for v in &variants {
        let threshold = paint(format!("{:>9}", v.threshold), theme::threshold());
        writeln!(
            writer,
            "{threshold}  {:>7}  {:>4}  {:>6}",
            v.columns, v.rows, v.bytes
        )?;
    }
    if let Some(smallest) = variants.last() {
        let below = format!("<{}", smallest.threshold);
        writeln!(writer, "{below:>9}  {FALLBACK}")?;
    }
    writer.flush()?;
    Ok(())
}
