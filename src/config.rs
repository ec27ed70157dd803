//! Mapping configuration handling
//!
//! The YAML mapping document drives the whole import: it names the target
//! UFO, the base affine transform, and one entry per SVG source telling us
//! the glyph name, side bearings, and optional code points.
//!
//! ```yaml
//! font:
//!   ufo: sources/MyFont.ufo
//!   transform: "1 0 0 -1 0 0"
//!   version: 2
//! svgs:
//!   ka:
//!     glyph_name: ka
//!     left: 30
//!     right: 30
//!     unicode: 0D15
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ImportError;

/// The parsed mapping document. Loaded once, read-only afterward.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub font: FontSettings,
    /// Per-source settings, keyed by the SVG file stem.
    pub svgs: BTreeMap<String, GlyphMapping>,
}

/// Font-level settings shared by every imported glyph.
#[derive(Debug, Clone, Deserialize)]
pub struct FontSettings {
    /// Path to the UFO font source the glyphs land in.
    pub ufo: PathBuf,
    /// Base affine transform, six space- or comma-separated coefficients.
    pub transform: String,
    /// GLIF format version to emit.
    pub version: u32,
}

/// Placement and naming for one SVG source.
#[derive(Debug, Clone, Deserialize)]
pub struct GlyphMapping {
    pub glyph_name: String,
    /// Left side bearing in font units.
    pub left: i32,
    /// Right side bearing in font units.
    pub right: i32,
    /// Vertical baseline offset in font units.
    #[serde(default)]
    pub base: i32,
    /// Space- or comma-separated hexadecimal code points.
    pub unicode: Option<String>,
}

impl Config {
    /// Load and parse the mapping document at `path`.
    pub fn load(path: &Path) -> Result<Self, ImportError> {
        let text = fs::read_to_string(path).map_err(|e| {
            ImportError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        serde_yaml::from_str(&text).map_err(|e| {
            ImportError::Config(format!("cannot parse {}: {e}", path.display()))
        })
    }
}

impl FontSettings {
    /// Parse the `transform` string into (a,b,c,d,e,f) coefficients.
    pub fn transform_coefficients(&self) -> Result<[f64; 6], ImportError> {
        transform_list(&self.transform)
    }
}

impl GlyphMapping {
    /// Parse the optional `unicode` hex list into code points.
    pub fn codepoints(&self) -> Result<Vec<char>, ImportError> {
        match &self.unicode {
            Some(list) => unicode_hex_list(list),
            None => Ok(Vec::new()),
        }
    }
}

/// Split a space- or comma-separated list into its items.
fn split(arg: &str) -> impl Iterator<Item = &str> {
    arg.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
}

/// Parse six affine coefficients from a space- or comma-separated string.
pub fn transform_list(arg: &str) -> Result<[f64; 6], ImportError> {
    let coefficients: Vec<f64> = split(arg)
        .map(|n| {
            n.parse::<f64>().map_err(|_| {
                ImportError::Config(format!("invalid transformation matrix: {arg:?}"))
            })
        })
        .collect::<Result<_, _>>()?;
    coefficients.try_into().map_err(|_| {
        ImportError::Config(format!(
            "transformation matrix must have 6 coefficients: {arg:?}"
        ))
    })
}

/// Parse a space- or comma-separated list of hexadecimal code points.
pub fn unicode_hex_list(arg: &str) -> Result<Vec<char>, ImportError> {
    split(arg)
        .map(|unihex| {
            u32::from_str_radix(unihex, 16)
                .ok()
                .and_then(char::from_u32)
                .ok_or_else(|| {
                    ImportError::Config(format!(
                        "invalid unicode hexadecimal value: {unihex:?}"
                    ))
                })
        })
        .collect()
}
