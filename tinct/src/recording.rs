//! A backend that records brushes as plain data.

use kurbo::{BezPath, Point, Rect, Shape};

use crate::{BrushBackend, Capabilities, Color, Error, GradientStop, InterpolationTable};

/// A backend whose brushes are descriptions of what a native API was asked
/// to build.
///
/// This is useful for tests and for callers that want to hand gradients to
/// a renderer tinct has no backend for. By default it behaves like a native
/// API with only the required primitives; use [`with_capabilities`] to
/// advertise more.
///
/// [`with_capabilities`]: RecordingBackend::with_capabilities
#[derive(Debug, Default)]
pub struct RecordingBackend {
    capabilities: Capabilities,
    built: usize,
}

/// A brush built by [`RecordingBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedBrush {
    /// A linear brush interpolating between exactly two colors.
    TwoColorLinear {
        start: Point,
        end: Point,
        colors: (Color, Color),
    },
    /// A linear brush with any number of stops.
    MultiStopLinear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    /// A brush filling a closed path.
    Path {
        bounds: Rect,
        table: InterpolationTable,
    },
}

impl RecordingBackend {
    pub fn new() -> RecordingBackend {
        RecordingBackend::default()
    }

    pub fn with_capabilities(capabilities: Capabilities) -> RecordingBackend {
        RecordingBackend {
            capabilities,
            built: 0,
        }
    }

    /// How many brushes have been built.
    pub fn brushes_built(&self) -> usize {
        self.built
    }
}

impl BrushBackend for RecordingBackend {
    type Brush = RecordedBrush;

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn two_color_linear(
        &mut self,
        start: Point,
        end: Point,
        c0: Color,
        c1: Color,
    ) -> Result<RecordedBrush, Error> {
        self.built += 1;
        Ok(RecordedBrush::TwoColorLinear {
            start,
            end,
            colors: (c0, c1),
        })
    }

    fn multi_stop_linear(
        &mut self,
        start: Point,
        end: Point,
        stops: &[GradientStop],
    ) -> Result<RecordedBrush, Error> {
        self.built += 1;
        Ok(RecordedBrush::MultiStopLinear {
            start,
            end,
            stops: stops.to_vec(),
        })
    }

    fn path_gradient(
        &mut self,
        boundary: &BezPath,
        table: &InterpolationTable,
    ) -> Result<RecordedBrush, Error> {
        self.built += 1;
        Ok(RecordedBrush::Path {
            bounds: boundary.bounding_box(),
            table: table.clone(),
        })
    }
}

impl RecordedBrush {
    /// The position/color table of a path brush.
    pub fn table(&self) -> Option<&InterpolationTable> {
        match self {
            RecordedBrush::Path { table, .. } => Some(table),
            _ => None,
        }
    }
}
