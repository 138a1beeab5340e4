//! SVG output support for tinct
//!
//! Gradients become `<linearGradient>` and `<radialGradient>` definitions in
//! an SVG document; shapes filled with the resulting brushes reference them.

#![deny(clippy::trivially_copy_pass_by_ref)]

use std::{fmt, io};

use log::debug;
use svg::node::element::{self, ClipPath, LinearGradient, RadialGradient};
use svg::node::Node;
use tinct::kurbo::{BezPath, Point, Rect, Shape, Size};
use tinct::util::clamp_offset;
use tinct::{BrushBackend, Capabilities, Color, Error, GradientStop, InterpolationTable};

type Result<T> = std::result::Result<T, Error>;

/// `tinct::BrushBackend` that writes gradients into an SVG document.
pub struct SvgBrushes {
    doc: svg::Document,
    next_id: u64,
}

impl SvgBrushes {
    /// Construct an empty document.
    pub fn new(size: Option<Size>) -> Self {
        let mut doc = svg::Document::new();
        if let Some(size) = size {
            doc = doc.set("viewBox", (0, 0, size.width, size.height));
        }
        Self { doc, next_id: 0 }
    }

    /// Write everything so far to an `std::io::Write` impl, such as `std::fs::File`
    ///
    /// More brushes and shapes can be added afterwards.
    pub fn write(&self, writer: impl io::Write) -> io::Result<()> {
        svg::write(writer, &self.doc)
    }

    /// Returns an object that can write the svg somewhere.
    pub fn display(&self) -> &impl fmt::Display {
        &self.doc
    }

    /// Fill `shape` with `brush`.
    pub fn fill(&mut self, shape: impl Shape, brush: &Brush) {
        add_shape(&mut self.doc, shape, brush);
    }

    fn new_id(&mut self) -> Id {
        let x = Id(self.next_id);
        self.next_id += 1;
        x
    }

    fn linear(&mut self, start: Point, end: Point, stops: &[GradientStop]) -> Brush {
        let id = self.new_id();
        let mut gradient = LinearGradient::new()
            .set("gradientUnits", "userSpaceOnUse")
            .set("id", id)
            .set("x1", start.x)
            .set("y1", start.y)
            .set("x2", end.x)
            .set("y2", end.y);
        append_stops(&mut gradient, stops);
        self.doc.append(gradient);
        Brush { id, clip: None }
    }
}

impl BrushBackend for SvgBrushes {
    type Brush = Brush;

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            multi_stop_linear: true,
        }
    }

    fn two_color_linear(&mut self, start: Point, end: Point, c0: Color, c1: Color) -> Result<Brush> {
        let stops = [GradientStop::new(0.0, c0), GradientStop::new(1.0, c1)];
        Ok(self.linear(start, end, &stops))
    }

    fn multi_stop_linear(
        &mut self,
        start: Point,
        end: Point,
        stops: &[GradientStop],
    ) -> Result<Brush> {
        Ok(self.linear(start, end, stops))
    }

    // SVG has no path gradients. A radial gradient centered in the boundary
    // and reaching its edge gives the same result for circular boundaries,
    // and the clip keeps the brush inside the path.
    fn path_gradient(&mut self, boundary: &BezPath, table: &InterpolationTable) -> Result<Brush> {
        let bounds = boundary.bounding_box();
        let center = bounds.center();
        let radius = 0.5 * bounds.width().max(bounds.height());

        let clip = self.new_id();
        let clip_path = ClipPath::new()
            .set("id", clip)
            .add(element::Path::new().set("d", boundary.to_svg()));
        self.doc.append(clip_path);

        let id = self.new_id();
        let mut gradient = RadialGradient::new()
            .set("gradientUnits", "userSpaceOnUse")
            .set("id", id)
            .set("cx", center.x)
            .set("cy", center.y)
            .set("r", radius);
        append_stops(&mut gradient, &table.center_outward());
        self.doc.append(gradient);
        debug!("svg path brush {} clipped by {}", id, clip);

        Ok(Brush {
            id,
            clip: Some(clip),
        })
    }
}

fn append_stops(gradient: &mut impl Node, stops: &[GradientStop]) {
    for stop in stops {
        gradient.append(
            element::Stop::new()
                .set("offset", clamp_offset(stop.pos))
                .set("stop-color", fmt_color(stop.color))
                .set("stop-opacity", fmt_opacity(stop.color)),
        );
    }
}

fn add_shape(node: &mut impl Node, shape: impl Shape, brush: &Brush) {
    if let Some(circle) = shape.as_circle() {
        let mut x = element::Circle::new()
            .set("cx", circle.center.x)
            .set("cy", circle.center.y)
            .set("r", circle.radius);
        brush.apply_to(&mut x);
        node.append(x);
    } else if let Some(rect) = shape.as_rect() {
        let mut x = rect_element(rect);
        brush.apply_to(&mut x);
        node.append(x);
    } else {
        let mut path = element::Path::new().set("d", shape.into_path(1e-3).to_svg());
        brush.apply_to(&mut path);
        node.append(path);
    }
}

fn rect_element(rect: Rect) -> element::Rectangle {
    element::Rectangle::new()
        .set("x", rect.origin().x)
        .set("y", rect.origin().y)
        .set("width", rect.width())
        .set("height", rect.height())
}

/// An SVG brush: a reference to a gradient definition in the document.
#[derive(Debug, Clone, Copy)]
pub struct Brush {
    id: Id,
    clip: Option<Id>,
}

impl Brush {
    fn apply_to(&self, node: &mut impl Node) {
        node.assign("fill", format!("url(#{})", self.id));
        if let Some(clip) = self.clip {
            node.assign("clip-path", format!("url(#{})", clip));
        }
    }
}

// RGB in hex representation
fn fmt_color(color: Color) -> String {
    format!("#{:06x}", color.as_rgba_u32() >> 8)
}

// Opacity as value from [0, 1]
fn fmt_opacity(color: Color) -> String {
    format!("{}", color.as_rgba().3)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Id(u64);

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
        let mut x = self.0;
        loop {
            let digit = (x % ALPHABET.len() as u64) as usize;
            write!(f, "{}", ALPHABET[digit] as char)?;
            x /= ALPHABET.len() as u64;
            if x == 0 {
                break;
            }
        }
        Ok(())
    }
}

impl From<Id> for svg::node::Value {
    fn from(x: Id) -> Self {
        x.to_string().into()
    }
}
