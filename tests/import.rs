//! End-to-end import pipeline tests
//!
//! Each test builds a scratch UFO and mapping document in a temp
//! directory and drives `svg2glif::run` against it.

use std::fs;
use std::path::{Path, PathBuf};

use plist::{Dictionary, Value};
use svg2glif::cli::CliArgs;
use svg2glif::Outcome;
use tempfile::TempDir;

const KA_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg"
    width="100px" height="200px">
    <path d="M 0 200 L 100 200 L 100 0 L 0 0 Z"/>
</svg>"#;

struct Workspace {
    _dir: TempDir,
    ufo: PathBuf,
    config: PathBuf,
    svg: PathBuf,
}

/// Scratch UFO with one registered glyph ("a") plus a mapping document
/// covering `ka.svg`.
fn workspace() -> Workspace {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    let ufo = root.join("Test.ufo");
    fs::create_dir_all(ufo.join("glyphs")).unwrap();

    let mut info = Dictionary::new();
    info.insert("familyName".into(), Value::String("Test Sans".into()));
    info.insert("unitsPerEm".into(), Value::Integer(1000u64.into()));
    Value::Dictionary(info)
        .to_file_xml(ufo.join("fontinfo.plist"))
        .unwrap();

    let mut contents = Dictionary::new();
    contents.insert("a".into(), Value::String("a.glif".into()));
    Value::Dictionary(contents)
        .to_file_xml(ufo.join("glyphs").join("contents.plist"))
        .unwrap();

    let mut lib = Dictionary::new();
    lib.insert(
        "public.glyphOrder".into(),
        Value::Array(vec![Value::String("a".into())]),
    );
    Value::Dictionary(lib)
        .to_file_xml(ufo.join("lib.plist"))
        .unwrap();

    let config = root.join("mapping.yaml");
    fs::write(
        &config,
        format!(
            "font:\n  ufo: \"{}\"\n  transform: \"1 0 0 1 0 0\"\n  version: 2\n\
             svgs:\n  ka:\n    glyph_name: uni0D15\n    left: 10\n    right: 10\n    unicode: 0D15\n",
            ufo.display()
        ),
    )
    .unwrap();

    let svg = root.join("ka.svg");
    fs::write(&svg, KA_SVG).unwrap();

    Workspace {
        _dir: dir,
        ufo,
        config,
        svg,
    }
}

fn args(ws: &Workspace, input: &Path, output: Option<PathBuf>) -> CliArgs {
    CliArgs {
        input: input.to_path_buf(),
        output,
        config: ws.config.clone(),
    }
}

fn glyph_order(ufo: &Path) -> Vec<String> {
    let lib = Value::from_file(ufo.join("lib.plist")).unwrap();
    lib.as_dictionary()
        .and_then(|d| d.get("public.glyphOrder"))
        .and_then(Value::as_array)
        .unwrap()
        .iter()
        .map(|v| v.as_string().unwrap().to_string())
        .collect()
}

fn registry(ufo: &Path) -> Dictionary {
    Value::from_file(ufo.join("glyphs").join("contents.plist"))
        .unwrap()
        .into_dictionary()
        .unwrap()
}

#[test]
fn imports_and_registers_a_new_glyph() {
    let ws = workspace();

    let outcome = svg2glif::run(&args(&ws, &ws.svg, None)).unwrap();
    let output = match outcome {
        Outcome::Converted { output, .. } => output,
        other => panic!("expected conversion, got {other:?}"),
    };
    assert_eq!(output, ws.ufo.join("glyphs").join("uni0D15.glif"));

    // width = 100 + 10 + 10; height = units-per-em, not the SVG height.
    let glyph = norad::Glyph::load(&output).unwrap();
    assert_eq!(glyph.width, 120.0);
    assert_eq!(glyph.height, 1000.0);
    assert_eq!(
        glyph.codepoints.iter().collect::<Vec<_>>(),
        vec!['\u{0D15}']
    );
    assert_eq!(glyph.contours.len(), 1);

    assert_eq!(
        registry(&ws.ufo).get("uni0D15").and_then(Value::as_string),
        Some("uni0D15.glif")
    );
    assert_eq!(glyph_order(&ws.ufo), vec!["a", "uni0D15"]);
}

#[test]
fn reimporting_does_not_duplicate_registration() {
    let ws = workspace();

    svg2glif::run(&args(&ws, &ws.svg, None)).unwrap();
    svg2glif::run(&args(&ws, &ws.svg, None)).unwrap();

    assert_eq!(glyph_order(&ws.ufo), vec!["a", "uni0D15"]);
    assert_eq!(registry(&ws.ufo).len(), 2);
}

#[test]
fn unmapped_svg_is_skipped_without_writes() {
    let ws = workspace();
    let unmapped = ws.svg.with_file_name("unmapped.svg");
    fs::copy(&ws.svg, &unmapped).unwrap();

    let outcome = svg2glif::run(&args(&ws, &unmapped, None)).unwrap();
    assert!(matches!(outcome, Outcome::Skipped { ref stem } if stem == "unmapped"));

    assert_eq!(registry(&ws.ufo).len(), 1);
    assert_eq!(glyph_order(&ws.ufo), vec!["a"]);
    assert!(!ws.ufo.join("glyphs").join("unmapped.glif").exists());
}

#[test]
fn explicit_output_path_is_honored() {
    let ws = workspace();
    let out = ws.svg.with_file_name("custom.glif");

    svg2glif::run(&args(&ws, &ws.svg, Some(out.clone()))).unwrap();

    assert!(out.exists());
    assert!(norad::Glyph::load(&out).is_ok());
    // Registration still targets the UFO.
    assert_eq!(glyph_order(&ws.ufo), vec!["a", "uni0D15"]);
}

#[test]
fn unsupported_format_version_is_fatal() {
    let ws = workspace();
    let text = fs::read_to_string(&ws.config).unwrap();
    fs::write(&ws.config, text.replace("version: 2", "version: 1")).unwrap();

    assert!(svg2glif::run(&args(&ws, &ws.svg, None)).is_err());
}
