//! svg2glif
//!
//! Imports a single SVG outline into a UFO font source as one `.glif`
//! glyph, driven by a YAML mapping configuration. One invocation handles
//! one outline: parse the SVG, look up its placement settings, compute
//! the affine transform, write the glyph-description file, and register
//! the glyph in the font's inventory if it is new.

pub mod cli;
pub mod config;
pub mod error;
pub mod glif;
pub mod placement;
pub mod svg;
pub mod ufo;

use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use crate::cli::CliArgs;
use crate::config::Config;
use crate::error::ImportError;
use crate::svg::Outline;
use crate::ufo::FontMetadata;

/// What a successful run did.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// The glyph was written (and registered when new).
    Converted {
        glyph_name: String,
        output: PathBuf,
    },
    /// The SVG has no entry in the mapping configuration; nothing was
    /// written.
    Skipped { stem: String },
}

/// Run the import pipeline for one SVG outline.
pub fn run(args: &CliArgs) -> Result<Outcome, ImportError> {
    let config = Config::load(&args.config)?;
    if config.font.version != 2 {
        return Err(ImportError::Config(format!(
            "unsupported glif format version: {}",
            config.font.version
        )));
    }

    let text = fs::read_to_string(&args.input).map_err(|e| {
        ImportError::Svg(format!("cannot read {}: {e}", args.input.display()))
    })?;
    let outline = Outline::parse(&text)?;

    let stem = args
        .input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let Some(mapping) = config.svgs.get(&stem) else {
        warn!("Skip: configuration not found for svg: {:?}", stem);
        return Ok(Outcome::Skipped { stem });
    };

    let ufo = &config.font.ufo;
    let metadata = FontMetadata::read(ufo)?;
    let mut registry = ufo::read_registry(ufo)?;
    let already_registered = registry.get(&mapping.glyph_name).is_some();

    let placement = placement::compute(
        mapping,
        config.font.transform_coefficients()?,
        outline.width,
        outline.height,
    );
    let glyph = glif::build_glyph(
        &outline,
        &mapping.glyph_name,
        placement.advance,
        metadata.units_per_em,
        &mapping.codepoints()?,
        placement.affine,
    )?;

    let output = args.output.clone().unwrap_or_else(|| {
        ufo.join("glyphs").join(format!("{}.glif", mapping.glyph_name))
    });
    glyph
        .save(&output)
        .map_err(|e| ImportError::persist(&output, e))?;
    info!(
        "[{}] Convert {} -> {}",
        metadata.family_name,
        stem,
        output.display()
    );

    if !already_registered {
        ufo::register_glyph(ufo, &mapping.glyph_name, &mut registry)?;
        info!(
            "[{}] Add {} -> {}.glif",
            metadata.family_name, mapping.glyph_name, mapping.glyph_name
        );
    }

    Ok(Outcome::Converted {
        glyph_name: mapping.glyph_name.clone(),
        output,
    })
}
