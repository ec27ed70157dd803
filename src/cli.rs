//! Command line interface for the SVG importer
//!
//! Handles parsing command line arguments and provides validation for
//! user inputs before the pipeline runs.

use clap::Parser;
use std::path::PathBuf;

/// svg2glif CLI arguments
///
/// Examples:
///   svg2glif sources/svgs/ka.svg                  # Write into the UFO from the mapping
///   svg2glif sources/svgs/ka.svg out/ka.glif      # Write to an explicit path
///   svg2glif -c mapping.yaml sources/svgs/ka.svg  # Use a specific mapping document
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "svg2glif",
    version,
    about = "Convert SVG outlines to UFO glyphs (.glif)"
)]
pub struct CliArgs {
    /// Input SVG file containing <path> elements with "d" attributes
    #[clap(value_name = "INPUT.svg")]
    pub input: PathBuf,

    /// Output GLIF file
    ///
    /// Defaults to <ufo>/glyphs/<glyph-name>.glif, derived from the
    /// mapping configuration.
    #[clap(value_name = "OUTPUT.glif")]
    pub output: Option<PathBuf>,

    /// The yaml configuration file containing the svg to glif mapping
    #[clap(
        long = "config",
        short = 'c',
        value_name = "PATH",
        default_value = "sources/svg-glif-mapping.yaml"
    )]
    pub config: PathBuf,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures the input and configuration files exist before the
    /// pipeline starts, providing clear error messages for common
    /// mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if !self.input.exists() {
            return Err(format!(
                "Input SVG does not exist: {}\nMake sure the path is correct and the file exists.",
                self.input.display()
            ));
        }
        if !self.config.exists() {
            return Err(format!(
                "Configuration file does not exist: {}\nPass the mapping document with -c/--config.",
                self.config.display()
            ));
        }
        Ok(())
    }
}
