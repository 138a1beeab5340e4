//! The interface to a native brush API.

use kurbo::{BezPath, Point};

use crate::{new_error, Color, Error, ErrorKind, GradientStop, InterpolationTable};

/// What a backend's native brush API can do, beyond the required primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    /// The backend can build a linear brush from an arbitrary number of stops.
    ///
    /// When this is false, linear gradients collapse to their first and
    /// last stop.
    pub multi_stop_linear: bool,
}

/// A native brush API that gradients can be converted into.
///
/// Every backend must provide a two-color linear brush and a path brush
/// driven by a position/color table. A multi-stop linear brush is optional
/// and is only requested when [`capabilities`] says it is available.
///
/// Brushes are created anew on every call; backends are not expected to
/// cache them.
///
/// [`capabilities`]: BrushBackend::capabilities
pub trait BrushBackend {
    /// The type of a native brush.
    type Brush;

    /// The optional primitives this backend supports.
    fn capabilities(&self) -> Capabilities {
        Capabilities::default()
    }

    /// Create a linear brush running from `c0` at `start` to `c1` at `end`.
    fn two_color_linear(
        &mut self,
        start: Point,
        end: Point,
        c0: Color,
        c1: Color,
    ) -> Result<Self::Brush, Error>;

    /// Create a linear brush from `start` to `end` with the given stops.
    ///
    /// The stops are sorted by position.
    fn multi_stop_linear(
        &mut self,
        _start: Point,
        _end: Point,
        _stops: &[GradientStop],
    ) -> Result<Self::Brush, Error> {
        Err(new_error(ErrorKind::NotSupported))
    }

    /// Create a brush filling the closed `boundary` path, with colors
    /// interpolated from the boundary (position 0.0) toward its center
    /// (position 1.0) according to `table`.
    fn path_gradient(
        &mut self,
        boundary: &BezPath,
        table: &InterpolationTable,
    ) -> Result<Self::Brush, Error>;
}
