use std::io::Write;

use anyhow::{Context, Result};

use crate::render;
use crate::terminal::TerminalSizeProvider;

#[derive(Debug, Default)]
pub struct RunConfig {
    /// Use this width instead of asking the terminal.
    pub width: Option<u16>,
}

/// Detect the width, render the matching art and write it to `writer`.
///
/// Nothing is written unless rendering succeeds. Returns the width used.
pub fn run<W: Write>(
    config: &RunConfig,
    provider: impl TerminalSizeProvider,
    mut writer: W,
) -> Result<u16> {
    let width = match config.width {
        Some(width) => {
            log::debug!("using width {width} from --width");
            width
        }
        None => {
            let width = provider
                .columns()
                .context("failed to detect terminal width (pass --width to set it)")?;
            log::debug!("terminal reports {width} columns");
            width
        }
    };

    let mut art = render::select_and_render(width)?;
    art.push('\n');
    writer.write_all(art.as_bytes())?;
    writer.flush()?;
    Ok(width)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::assets::FALLBACK;
    use crate::terminal::{FixedSize, Unsupported};

    fn run_to_string(config: &RunConfig, provider: impl TerminalSizeProvider) -> (u16, String) {
        let mut out = Vec::new();
        let width = run(config, provider, &mut out).unwrap();
        (width, String::from_utf8(out).unwrap())
    }

    #[test]
    fn narrow_terminal_prints_fallback() {
        let (width, out) = run_to_string(&RunConfig::default(), FixedSize(12));
        assert_eq!(width, 12);
        assert_eq!(out, format!("{FALLBACK}\n"));
    }

    #[test]
    fn override_skips_provider() {
        let config = RunConfig { width: Some(29) };
        let (width, out) = run_to_string(&config, Unsupported);
        assert_eq!(width, 29);
        assert_eq!(out, "PAM CAN!\n");
    }

    #[test]
    fn failed_query_writes_nothing() {
        let mut out = Vec::new();
        let err = run(&RunConfig::default(), Unsupported, &mut out).unwrap_err();
        assert!(out.is_empty());
        assert!(format!("{err:#}").contains("not supported on this platform"));
    }
}
