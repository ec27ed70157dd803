//! UFO font source access
//!
//! Reads font metadata and the glyph registry out of a UFO directory and
//! registers newly created glyphs. A UFO keeps its glyph inventory in two
//! places that must stay consistent: `glyphs/contents.plist` maps glyph
//! names to glif file names, and `public.glyphOrder` in `lib.plist` holds
//! the canonical glyph sequence. Registration updates both in one
//! transactional step: each file is staged to a temporary in its target
//! directory, then both are renamed into place.
//!
//! Concurrent invocations against the same UFO are not synchronized; this
//! is a single-user offline tool.

use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::ImportError;

/// Conventional extension for glyph-description files.
const GLIF_EXTENSION: &str = ".glif";
/// lib.plist key holding the canonical glyph sequence.
const GLYPH_ORDER_KEY: &str = "public.glyphOrder";

/// Font-level metadata read from `fontinfo.plist`.
#[derive(Debug, Clone)]
pub struct FontMetadata {
    pub family_name: String,
    pub units_per_em: f64,
}

impl FontMetadata {
    /// Read the family name and units-per-em from a UFO directory.
    pub fn read(ufo: &Path) -> Result<Self, ImportError> {
        let path = ufo.join("fontinfo.plist");
        let info = read_dictionary(&path)?;

        let family_name = info
            .get("familyName")
            .and_then(Value::as_string)
            .ok_or_else(|| ImportError::registry(&path, "missing familyName"))?
            .to_string();
        let units_per_em = info
            .get("unitsPerEm")
            .and_then(as_number)
            .ok_or_else(|| ImportError::registry(&path, "missing unitsPerEm"))?;

        Ok(Self {
            family_name,
            units_per_em,
        })
    }
}

/// Path of the glyph registry inside a UFO.
pub fn contents_path(ufo: &Path) -> PathBuf {
    ufo.join("glyphs").join("contents.plist")
}

/// Read the glyph registry (glyph name → glif file name).
pub fn read_registry(ufo: &Path) -> Result<Dictionary, ImportError> {
    read_dictionary(&contents_path(ufo))
}

/// Register a new glyph in the registry and the glyph order.
///
/// Both plists are staged to temporary files before either is renamed
/// into place, so a crash mid-registration leaves the UFO untouched.
/// Appending to the glyph order is idempotent.
pub fn register_glyph(
    ufo: &Path,
    glyph_name: &str,
    registry: &mut Dictionary,
) -> Result<(), ImportError> {
    registry.insert(
        glyph_name.to_string(),
        Value::String(format!("{glyph_name}{GLIF_EXTENSION}")),
    );

    let lib_path = ufo.join("lib.plist");
    let mut lib = if lib_path.exists() {
        read_dictionary(&lib_path)?
    } else {
        Dictionary::new()
    };
    if lib.get(GLYPH_ORDER_KEY).is_none() {
        lib.insert(GLYPH_ORDER_KEY.to_string(), Value::Array(Vec::new()));
    }
    let order = lib
        .get_mut(GLYPH_ORDER_KEY)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| {
            ImportError::registry(&lib_path, format!("{GLYPH_ORDER_KEY} is not an array"))
        })?;
    if !order.iter().any(|v| v.as_string() == Some(glyph_name)) {
        order.push(Value::String(glyph_name.to_string()));
    }

    let contents_path = contents_path(ufo);
    let contents_tmp = stage_plist(Value::Dictionary(registry.clone()), &ufo.join("glyphs"))
        .map_err(|e| ImportError::persist(&contents_path, e))?;
    let lib_tmp = stage_plist(Value::Dictionary(lib), ufo)
        .map_err(|e| ImportError::persist(&lib_path, e))?;

    // Both files are staged; the rename pair has no intervening I/O.
    contents_tmp
        .persist(&contents_path)
        .map_err(|e| ImportError::persist(&contents_path, e.error))?;
    lib_tmp
        .persist(&lib_path)
        .map_err(|e| ImportError::persist(&lib_path, e.error))?;

    debug!("registered {} in {}", glyph_name, ufo.display());
    Ok(())
}

/// Write a plist value to an unnamed temporary file in `dir`.
fn stage_plist(
    value: Value,
    dir: &Path,
) -> Result<NamedTempFile, Box<dyn std::error::Error + Send + Sync>> {
    let file = NamedTempFile::new_in(dir)?;
    value.to_writer_xml(file.as_file())?;
    Ok(file)
}

fn read_dictionary(path: &Path) -> Result<Dictionary, ImportError> {
    let value = Value::from_file(path).map_err(|e| ImportError::registry(path, e))?;
    value
        .into_dictionary()
        .ok_or_else(|| ImportError::registry(path, "not a property-list dictionary"))
}

fn as_number(value: &Value) -> Option<f64> {
    value
        .as_real()
        .or_else(|| value.as_signed_integer().map(|n| n as f64))
        .or_else(|| value.as_unsigned_integer().map(|n| n as f64))
}
