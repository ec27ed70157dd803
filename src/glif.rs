//! SVG outline to UFO glyph conversion
//!
//! Turns the bezier paths of an [`Outline`] into `norad` contours and
//! assembles the final glyph record. Bezier segments carry their control
//! points inline; UFO contours are flat point sequences where off-curve
//! points precede the on-curve point that ends a segment, so this module
//! is effectively a segment-to-point pen.

use kurbo::{Affine, BezPath, PathEl, Point};
use norad::{Contour, ContourPoint, Glyph, PointType};

use crate::error::ImportError;
use crate::svg::Outline;

/// Tolerance for detecting an explicit closing point that lands back on
/// the contour start.
const CLOSE_EPS: f64 = 1e-6;

/// Build a glyph named `name` from `outline`, with the given advance
/// `width`, `height` (the font's units-per-em, not the outline's own
/// height), `codepoints`, and placement `transform`.
pub fn build_glyph(
    outline: &Outline,
    name: &str,
    width: f64,
    height: f64,
    codepoints: &[char],
    transform: Affine,
) -> Result<Glyph, ImportError> {
    let mut glyph = Glyph::new(name);
    glyph.width = width;
    glyph.height = height;
    for &codepoint in codepoints {
        glyph.codepoints.insert(codepoint);
    }

    for path in outline.paths()? {
        let placed = transform * path;
        for subpath in subpaths(&placed) {
            if let Some(contour) = contour_from_subpath(&subpath)? {
                glyph.contours.push(contour);
            }
        }
    }

    Ok(glyph)
}

/// Split a path into its subpaths, one per `MoveTo`.
fn subpaths(path: &BezPath) -> Vec<BezPath> {
    let mut result = Vec::new();
    let mut current = BezPath::new();
    for element in path.elements() {
        if matches!(element, PathEl::MoveTo(_)) && !current.is_empty() {
            result.push(std::mem::take(&mut current));
        }
        current.push(*element);
    }
    if !current.is_empty() {
        result.push(current);
    }
    result
}

/// Convert one subpath into a UFO contour.
///
/// Returns `None` for a bare `MoveTo` with no drawing commands.
fn contour_from_subpath(path: &BezPath) -> Result<Option<Contour>, ImportError> {
    let elements = path.elements();
    let first = match elements.first() {
        Some(PathEl::MoveTo(p)) => *p,
        _ => {
            return Err(ImportError::Svg(
                "path segment does not start with a move".into(),
            ))
        }
    };
    let closed = matches!(elements.last(), Some(PathEl::ClosePath));

    let mut points: Vec<ContourPoint> = Vec::new();
    for element in &elements[1..] {
        match *element {
            PathEl::LineTo(p) => points.push(contour_point(p, PointType::Line)),
            PathEl::QuadTo(a, p) => {
                points.push(contour_point(a, PointType::OffCurve));
                points.push(contour_point(p, PointType::QCurve));
            }
            PathEl::CurveTo(a, b, p) => {
                points.push(contour_point(a, PointType::OffCurve));
                points.push(contour_point(b, PointType::OffCurve));
                points.push(contour_point(p, PointType::Curve));
            }
            PathEl::ClosePath => break,
            PathEl::MoveTo(_) => {
                return Err(ImportError::Svg("unexpected move mid-contour".into()))
            }
        }
    }

    if points.is_empty() {
        return Ok(None);
    }

    if closed {
        // UFO contours are cyclic: the first point's type names the segment
        // that arrives at it. When the path draws explicitly back to the
        // start, that final on-curve point is redundant and its type moves
        // to the front; otherwise the close is an implied line.
        let mut closing_type = PointType::Line;
        if let Some(idx) = points.iter().rposition(is_on_curve) {
            let last = &points[idx];
            if (last.x - first.x).abs() < CLOSE_EPS && (last.y - first.y).abs() < CLOSE_EPS {
                closing_type = points.remove(idx).typ;
            }
        }
        points.insert(0, contour_point(first, closing_type));
        guess_smooth(&mut points);
    } else {
        // An open contour starts with a move point and never wraps.
        points.insert(0, contour_point(first, PointType::Move));
    }

    Ok(Some(Contour::new(points, None)))
}

fn is_on_curve(point: &ContourPoint) -> bool {
    matches!(
        point.typ,
        PointType::Line | PointType::Curve | PointType::QCurve
    )
}

fn contour_point(p: Point, typ: PointType) -> ContourPoint {
    ContourPoint::new(p.x, p.y, typ, false, None, None)
}

/// Mark curve points smooth where the incoming and outgoing tangents are
/// collinear and at least one neighbor is an off-curve point.
fn guess_smooth(points: &mut [ContourPoint]) {
    let n = points.len();
    if n < 3 {
        return;
    }

    for i in 0..n {
        if !matches!(points[i].typ, PointType::Curve | PointType::QCurve) {
            continue;
        }
        let prev = (i + n - 1) % n;
        let next = (i + 1) % n;
        if !matches!(points[prev].typ, PointType::OffCurve)
            && !matches!(points[next].typ, PointType::OffCurve)
        {
            continue;
        }

        let in_dx = points[i].x - points[prev].x;
        let in_dy = points[i].y - points[prev].y;
        let out_dx = points[next].x - points[i].x;
        let out_dy = points[next].y - points[i].y;

        let in_len = (in_dx * in_dx + in_dy * in_dy).sqrt();
        let out_len = (out_dx * out_dx + out_dy * out_dy).sqrt();
        if in_len < CLOSE_EPS || out_len < CLOSE_EPS {
            continue;
        }

        let cross = (in_dx * out_dy - in_dy * out_dx) / (in_len * out_len);
        let dot = (in_dx * out_dx + in_dy * out_dy) / (in_len * out_len);
        if cross.abs() < 0.01 && dot > 0.0 {
            points[i].smooth = true;
        }
    }
}
