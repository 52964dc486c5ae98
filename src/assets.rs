//! Compiled-in Pam Can renderings.
//!
//! Each payload is gzip-compressed ANSI art, base64 encoded, stored under
//! `assets/` so it ships in the crate tarball. Every line of a variant is
//! exactly `width_threshold` columns wide (two columns per pixel).

/// One size variant of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// Narrowest terminal this variant fits in.
    pub width_threshold: u16,
    /// Base64 text of a gzip stream.
    pub payload: &'static str,
}

/// Printed when the terminal is narrower than the smallest variant.
pub const FALLBACK: &str = "PAM CAN!";

/// Widest first. Selection relies on this order.
pub const ASSETS: [Asset; 5] = [
    Asset {
        width_threshold: 140,
        payload: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/pamcan140.b64")),
    },
    Asset {
        width_threshold: 80,
        payload: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/pamcan80.b64")),
    },
    Asset {
        width_threshold: 50,
        payload: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/pamcan50.b64")),
    },
    Asset {
        width_threshold: 40,
        payload: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/pamcan40.b64")),
    },
    Asset {
        width_threshold: 30,
        payload: include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/pamcan30.b64")),
    },
];
