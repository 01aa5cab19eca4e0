//! Derived color palette generation from a single seed color.

use serde::Serialize;

use crate::error::DemodeckError;

/// Channel offset for the light and dark variants.
const SHIFT: u8 = 50;

/// Four related colors derived from one seed, each `"#rrggbb"`.
///
/// Recomputed wholesale on each generation. All derived channel values are
/// clamped to `[0, 255]` before hex encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub primary: String,
    pub light: String,
    pub dark: String,
    pub accent: String,
}

/// Derive a palette from a `"#RRGGBB"` seed.
///
/// The seed is kept verbatim as `primary`. The variants shift each channel
/// by [`SHIFT`] (saturating at the 8-bit bounds) or take its complement.
///
/// # Arguments
/// * `seed` - A 6-hex-digit color string with a leading `#`
///
/// # Returns
/// * `Ok(ColorPalette)` - The derived palette
/// * `Err` - If the seed is not a valid `#RRGGBB` string
pub fn generate(seed: &str) -> Result<ColorPalette, DemodeckError> {
    let (r, g, b) = decode_seed(seed)?;

    Ok(ColorPalette {
        primary: seed.to_string(),
        light: encode(
            r.saturating_add(SHIFT),
            g.saturating_add(SHIFT),
            b.saturating_add(SHIFT),
        ),
        dark: encode(
            r.saturating_sub(SHIFT),
            g.saturating_sub(SHIFT),
            b.saturating_sub(SHIFT),
        ),
        accent: encode(255 - r, 255 - g, 255 - b),
    })
}

/// Decode a `"#RRGGBB"` string into its three 8-bit channels.
fn decode_seed(seed: &str) -> Result<(u8, u8, u8), DemodeckError> {
    let hex = seed
        .strip_prefix('#')
        .ok_or_else(|| DemodeckError::Palette(format!("Seed must start with '#': {}", seed)))?;

    if hex.len() != 6 || !hex.is_ascii() {
        return Err(DemodeckError::Palette(format!(
            "Seed must be 6 hex digits, got '{}'",
            seed
        )));
    }

    let channel = |range: &str| {
        u8::from_str_radix(range, 16)
            .map_err(|_| DemodeckError::Palette(format!("Invalid hex in seed '{}'", seed)))
    };

    Ok((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?))
}

fn encode(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
