use std::io::{self, Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use flate2::Compression;
use flate2::read::MultiGzDecoder;
use flate2::write::GzEncoder;
use unicode_width::UnicodeWidthChar;

use crate::assets::{ASSETS, Asset, FALLBACK};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("asset {threshold} is not valid base64: {source}")]
    Decode {
        threshold: u16,
        #[source]
        source: base64::DecodeError,
    },
    #[error("asset {threshold} could not be decompressed: {source}")]
    Decompress {
        threshold: u16,
        #[source]
        source: io::Error,
    },
    #[error("asset {threshold} did not decompress to UTF-8 text")]
    NotText { threshold: u16 },
}

/// Pick the widest embedded asset that fits in `width` columns.
pub fn select(width: u16) -> Option<&'static Asset> {
    select_from(&ASSETS, width)
}

/// First asset in `assets` whose threshold is at most `width`.
///
/// `assets` must be ordered widest first.
pub fn select_from(assets: &[Asset], width: u16) -> Option<&Asset> {
    assets.iter().find(|a| a.width_threshold <= width)
}

/// Reverse the base64 layer of an asset.
pub fn decode(asset: &Asset) -> Result<Vec<u8>, RenderError> {
    STANDARD
        .decode(asset.payload.trim())
        .map_err(|source| RenderError::Decode {
            threshold: asset.width_threshold,
            source,
        })
}

/// Decode and decompress an asset into its text.
pub fn decompress(asset: &Asset) -> Result<String, RenderError> {
    let compressed = decode(asset)?;
    let mut raw = Vec::new();
    MultiGzDecoder::new(compressed.as_slice())
        .read_to_end(&mut raw)
        .map_err(|source| RenderError::Decompress {
            threshold: asset.width_threshold,
            source,
        })?;
    log::debug!(
        "asset {}: {} encoded, {} compressed, {} raw bytes",
        asset.width_threshold,
        asset.payload.len(),
        compressed.len(),
        raw.len()
    );
    String::from_utf8(raw).map_err(|_| RenderError::NotText {
        threshold: asset.width_threshold,
    })
}

/// Render the art for a terminal `width` columns wide.
///
/// Returns the fallback literal when no variant fits.
pub fn select_and_render(width: u16) -> Result<String, RenderError> {
    match select(width) {
        Some(asset) => {
            log::debug!("width {width}: selected asset {}", asset.width_threshold);
            decompress(asset)
        }
        None => {
            log::debug!("width {width}: narrower than every asset, using fallback");
            Ok(FALLBACK.to_string())
        }
    }
}

/// Gzip then base64 encode `text`, producing a payload `decompress` accepts.
pub fn pack(text: &str) -> io::Result<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(text.as_bytes())?;
    let compressed = encoder.finish()?;
    Ok(STANDARD.encode(compressed))
}

/// Display columns of `line`, ignoring CSI escape sequences.
pub fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in @..~.
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
            continue;
        }
        width += ch.width().unwrap_or(0);
    }
    width
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;

    fn leak(payload: String) -> &'static str {
        Box::leak(payload.into_boxed_str())
    }

    fn asset(width_threshold: u16, payload: &'static str) -> Asset {
        Asset {
            width_threshold,
            payload,
        }
    }

    #[test]
    fn select_bands() {
        let cases = [
            (u16::MAX, Some(140)),
            (500, Some(140)),
            (140, Some(140)),
            (139, Some(80)),
            (80, Some(80)),
            (79, Some(50)),
            (50, Some(50)),
            (49, Some(40)),
            (45, Some(40)),
            (40, Some(40)),
            (39, Some(30)),
            (30, Some(30)),
            (29, None),
            (0, None),
        ];
        for (width, expected) in cases {
            assert_eq!(
                select(width).map(|a| a.width_threshold),
                expected,
                "width {width}"
            );
        }
    }

    #[test]
    fn fallback_below_smallest() {
        assert_eq!(select_and_render(29).unwrap(), FALLBACK);
        assert_eq!(select_and_render(0).unwrap(), "PAM CAN!");
    }

    #[test]
    fn select_from_empty_table() {
        assert!(select_from(&[], 200).is_none());
    }

    #[test]
    fn every_asset_decompresses() {
        for a in &ASSETS {
            let text = decompress(a).unwrap();
            assert!(!text.is_empty(), "asset {} is empty", a.width_threshold);
            assert_eq!(text, decompress(a).unwrap());
        }
    }

    #[test]
    fn lines_match_threshold_width() {
        for a in &ASSETS {
            let text = decompress(a).unwrap();
            assert!(text.is_ascii());
            assert!(text.ends_with('\n'));
            for line in text.lines() {
                assert_eq!(
                    visible_width(line),
                    usize::from(a.width_threshold),
                    "asset {} line {line:?}",
                    a.width_threshold
                );
            }
        }
    }

    #[test]
    fn render_matches_decompress() {
        assert_eq!(select_and_render(45).unwrap(), decompress(&ASSETS[3]).unwrap());
        assert_eq!(select_and_render(140).unwrap(), decompress(&ASSETS[0]).unwrap());
    }

    #[test]
    fn bad_base64_is_decode_error() {
        let broken = asset(30, "H4sI!!not base64!!");
        match decompress(&broken) {
            Err(RenderError::Decode { threshold, .. }) => assert_eq!(threshold, 30),
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn truncated_gzip_is_decompress_error() {
        let payload = pack("a pam can\n").unwrap();
        let mut bytes = STANDARD.decode(&payload).unwrap();
        bytes.truncate(bytes.len() - 6);
        let broken = asset(40, leak(STANDARD.encode(bytes)));
        match decompress(&broken) {
            Err(RenderError::Decompress { threshold, .. }) => assert_eq!(threshold, 40),
            other => panic!("expected decompress error, got {other:?}"),
        }
    }

    #[test]
    fn plain_bytes_are_not_gzip() {
        let broken = asset(50, leak(STANDARD.encode(b"definitely not gzip")));
        assert!(matches!(
            decompress(&broken),
            Err(RenderError::Decompress { .. })
        ));
    }

    #[test]
    fn non_utf8_payload_is_rejected() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(&[0xff, 0xfe, 0xfd]).unwrap();
        let payload = STANDARD.encode(encoder.finish().unwrap());
        let broken = asset(80, leak(payload));
        assert!(matches!(
            decompress(&broken),
            Err(RenderError::NotText { threshold: 80 })
        ));
    }

    #[test]
    fn pack_inverts_decompress() {
        let art = "\x1b[48;5;16m  \x1b[49m\n";
        let packed = asset(2, leak(pack(art).unwrap()));
        assert_eq!(decompress(&packed).unwrap(), art);
    }

    #[test]
    fn payload_whitespace_is_ignored() {
        let payload = format!("{}\n", pack("x").unwrap());
        assert_eq!(decompress(&asset(1, leak(payload))).unwrap(), "x");
    }

    #[test]
    fn visible_width_skips_sgr() {
        assert_eq!(visible_width("plain"), 5);
        assert_eq!(visible_width("\x1b[48;5;174m  \x1b[49m"), 2);
        assert_eq!(visible_width("\x1b[1mbold\x1b[0m!"), 5);
        assert_eq!(visible_width(""), 0);
    }
}
