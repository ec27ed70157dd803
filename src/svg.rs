//! SVG outline reading
//!
//! Parses the source document just far enough for glyph conversion: the
//! declared `width`/`height` of the root element and the `d` attribute of
//! every `<path>` in the tree. Path data is turned into [`kurbo::BezPath`]s
//! with all shorthand and relative commands already resolved, so downstream
//! code only ever sees absolute move/line/quad/cubic segments.

use kurbo::{BezPath, Point};
use svgtypes::{SimplePathSegment, SimplifyingPathParser};

use crate::error::ImportError;

/// A parsed SVG outline document.
#[derive(Debug, Clone)]
pub struct Outline {
    /// Declared width in pixels.
    pub width: f64,
    /// Declared height in pixels.
    pub height: f64,
    path_data: Vec<String>,
}

impl Outline {
    /// Parse an SVG document from its text content.
    pub fn parse(text: &str) -> Result<Self, ImportError> {
        let doc = roxmltree::Document::parse(text)
            .map_err(|e| ImportError::Svg(format!("malformed document: {e}")))?;
        let root = doc.root_element();

        let width = parse_dimension(root.attribute("width"), "width")?;
        let height = parse_dimension(root.attribute("height"), "height")?;

        // <path> elements can sit anywhere in the tree, e.g. inside <g>.
        let path_data = doc
            .descendants()
            .filter(|node| node.has_tag_name("path"))
            .filter_map(|node| node.attribute("d"))
            .map(str::to_string)
            .collect();

        Ok(Self {
            width,
            height,
            path_data,
        })
    }

    /// Convert every path in the document to a bezier path.
    pub fn paths(&self) -> Result<Vec<BezPath>, ImportError> {
        self.path_data.iter().map(|d| path_to_bezier(d)).collect()
    }
}

/// Parse a dimension attribute, stripping a trailing unit such as `px`.
fn parse_dimension(attribute: Option<&str>, name: &str) -> Result<f64, ImportError> {
    let raw = attribute
        .ok_or_else(|| ImportError::Svg(format!("missing {name} attribute")))?;
    let value = raw.trim().trim_end_matches("px").trim();
    value
        .parse()
        .map_err(|_| ImportError::Svg(format!("non-numeric {name}: {raw:?}")))
}

/// Convert one `d` attribute into a [`BezPath`].
pub fn path_to_bezier(data: &str) -> Result<BezPath, ImportError> {
    let mut path = BezPath::new();
    for segment in SimplifyingPathParser::from(data) {
        let segment = segment
            .map_err(|e| ImportError::Svg(format!("invalid path data: {e}")))?;
        match segment {
            SimplePathSegment::MoveTo { x, y } => path.move_to(Point::new(x, y)),
            SimplePathSegment::LineTo { x, y } => path.line_to(Point::new(x, y)),
            SimplePathSegment::Quadratic { x1, y1, x, y } => {
                path.quad_to(Point::new(x1, y1), Point::new(x, y))
            }
            SimplePathSegment::CurveTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => path.curve_to(Point::new(x1, y1), Point::new(x2, y2), Point::new(x, y)),
            SimplePathSegment::ClosePath => path.close_path(),
        }
    }
    Ok(path)
}
