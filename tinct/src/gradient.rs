//! Gradient specifications.

use kurbo::{BezPath, Circle, Point, Shape};
use log::{debug, warn};

use crate::util::{distinct_positions, PATH_TOLERANCE};
use crate::{BrushBackend, Color, Error, InvalidGradient};

/// Specification of a gradient stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// The coordinate of the stop, nominally in 0.0..=1.0.
    pub pos: f64,
    /// The color at that stop.
    pub color: Color,
}

impl GradientStop {
    pub fn new(pos: f64, color: Color) -> GradientStop {
        GradientStop { pos, color }
    }
}

/// The color stops of a gradient, in the order they were added.
///
/// Stops are never reordered or deduplicated in place. Brush construction
/// reads them through [`sorted`], which orders by position and keeps stops
/// with equal positions in insertion order, so that two stops sharing a
/// position produce a hard edge in a predictable direction.
///
/// [`sorted`]: GradientStopSet::sorted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradientStopSet {
    stops: Vec<GradientStop>,
}

impl GradientStopSet {
    pub fn new() -> GradientStopSet {
        GradientStopSet::default()
    }

    /// Add a stop. This never fails.
    pub fn append(&mut self, pos: f64, color: Color) {
        self.stops.push(GradientStop { pos, color });
    }

    /// Add every stop from `stops`.
    pub fn extend(&mut self, stops: impl GradientStops) {
        self.stops.extend(stops.to_vec());
    }

    /// The number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// The stops in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GradientStop> {
        self.stops.iter()
    }

    /// The stops ordered by position.
    ///
    /// The sort is stable. Positions are compared by their IEEE total order,
    /// so NaN positions end up at one end instead of scrambling the result.
    pub fn sorted(&self) -> Vec<GradientStop> {
        let mut sorted = self.stops.clone();
        sorted.sort_by(|a, b| a.pos.total_cmp(&b.pos));
        sorted
    }
}

/// A flexible, ergonomic way to describe gradient stops.
pub trait GradientStops {
    fn to_vec(self) -> Vec<GradientStop>;
}

impl GradientStops for Vec<GradientStop> {
    fn to_vec(self) -> Vec<GradientStop> {
        self
    }
}

impl<'a> GradientStops for &'a [GradientStop] {
    fn to_vec(self) -> Vec<GradientStop> {
        self.to_owned()
    }
}

// Generate equally-spaced stops.
impl<'a> GradientStops for &'a [Color] {
    fn to_vec(self) -> Vec<GradientStop> {
        if self.is_empty() {
            Vec::new()
        } else {
            let denom = (self.len() - 1).max(1) as f64;
            self.iter()
                .enumerate()
                .map(|(i, c)| GradientStop {
                    pos: (i as f64) / denom,
                    color: *c,
                })
                .collect()
        }
    }
}

impl GradientStops for (Color, Color) {
    fn to_vec(self) -> Vec<GradientStop> {
        let stops: &[Color] = &[self.0, self.1];
        GradientStops::to_vec(stops)
    }
}

impl GradientStops for (Color, Color, Color) {
    fn to_vec(self) -> Vec<GradientStop> {
        let stops: &[Color] = &[self.0, self.1, self.2];
        GradientStops::to_vec(stops)
    }
}

impl GradientStops for (Color, Color, Color, Color) {
    fn to_vec(self) -> Vec<GradientStop> {
        let stops: &[Color] = &[self.0, self.1, self.2, self.3];
        GradientStops::to_vec(stops)
    }
}

/// Specification of a linear gradient.
///
/// Position 0.0 corresponds to `start` and 1.0 to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradientSpec {
    start: Point,
    end: Point,
    stops: GradientStopSet,
}

impl LinearGradientSpec {
    /// Create a linear gradient with no stops.
    ///
    /// `start` may equal `end`; what such a gradient looks like is up to the
    /// backend.
    pub fn new(start: impl Into<Point>, end: impl Into<Point>) -> LinearGradientSpec {
        LinearGradientSpec {
            start: start.into(),
            end: end.into(),
            stops: GradientStopSet::new(),
        }
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn stops(&self) -> &GradientStopSet {
        &self.stops
    }

    pub fn add_stop(&mut self, pos: f64, color: Color) {
        self.stops.append(pos, color);
    }

    /// Build a native brush for this gradient.
    ///
    /// Fails if there are no stops. When the backend has a multi-stop linear
    /// primitive and the stops span more than two positions, every stop is
    /// passed through. Otherwise the brush runs from the color of the
    /// lowest-positioned stop at `start` to the color of the
    /// highest-positioned stop at `end`, and intermediate stops have no
    /// effect.
    pub fn build_brush<B: BrushBackend>(&self, backend: &mut B) -> Result<B::Brush, Error> {
        let sorted = self.stops.sorted();
        let (first, last) = match (sorted.first(), sorted.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return Err(InvalidGradient::NoStops.into()),
        };
        if backend.capabilities().multi_stop_linear && distinct_positions(&sorted) > 2 {
            debug!(
                "linear brush {:?} -> {:?} with {} stops",
                self.start,
                self.end,
                sorted.len()
            );
            return backend.multi_stop_linear(self.start, self.end, &sorted);
        }
        // Two-color primitives only see the outermost stops.
        debug!(
            "linear brush {:?} -> {:?}, {:?} to {:?}",
            self.start, self.end, first.color, last.color
        );
        backend.two_color_linear(self.start, self.end, first.color, last.color)
    }
}

/// Specification of a radial gradient between two circles.
///
/// Stop positions are measured inward, the way path gradients measure them:
/// 0.0 is the edge of the outer circle and 1.0 the edge of the inner circle.
/// The brush covers the outer circle; the inner circle is left transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradientSpec {
    inner: Circle,
    outer: Circle,
    coverage: f64,
    stops: GradientStopSet,
}

impl RadialGradientSpec {
    /// Create a radial gradient with no stops.
    ///
    /// Fails if the outer radius is zero, negative or not finite. An inner
    /// radius larger than the outer one is accepted; the stops then collapse
    /// onto the boundary.
    pub fn new(inner: Circle, outer: Circle) -> Result<RadialGradientSpec, Error> {
        let radius = outer.radius;
        if radius == 0.0 {
            return Err(InvalidGradient::ZeroOuterRadius.into());
        }
        if radius < 0.0 || !radius.is_finite() {
            return Err(InvalidGradient::BadOuterRadius(radius).into());
        }
        let coverage = 1.0 - inner.radius / radius;
        if coverage < 0.0 || coverage.is_nan() {
            warn!(
                "radial gradient inner radius {} exceeds outer radius {}, coverage is {}",
                inner.radius, radius, coverage
            );
        }
        Ok(RadialGradientSpec {
            inner,
            outer,
            coverage,
            stops: GradientStopSet::new(),
        })
    }

    pub fn inner(&self) -> Circle {
        self.inner
    }

    pub fn outer(&self) -> Circle {
        self.outer
    }

    /// The fraction of the outer radius spanned by the stops,
    /// `1 - inner.radius / outer.radius`.
    pub fn coverage(&self) -> f64 {
        self.coverage
    }

    pub fn stops(&self) -> &GradientStopSet {
        &self.stops
    }

    pub fn add_stop(&mut self, pos: f64, color: Color) {
        self.stops.append(pos, color);
    }

    /// The position/color table handed to the backend's path brush.
    ///
    /// Each stop at `p` moves to `p * coverage`. Two transparent entries
    /// follow, at `coverage` and at 1.0. With fewer than two stops, the
    /// stops are padded (a single stop is repeated; an empty set becomes two
    /// transparent entries at 0.0) so the table always has at least four
    /// entries.
    pub fn interpolation_table(&self) -> InterpolationTable {
        let coverage = self.coverage;
        let mut entries: Vec<GradientStop> = self
            .stops
            .sorted()
            .into_iter()
            .map(|stop| GradientStop::new(stop.pos * coverage, stop.color))
            .collect();
        match entries.len() {
            0 => entries.extend([GradientStop::new(0.0, Color::TRANSPARENT); 2]),
            1 => entries.push(entries[0]),
            _ => (),
        }
        entries.push(GradientStop::new(coverage, Color::TRANSPARENT));
        entries.push(GradientStop::new(1.0, Color::TRANSPARENT));
        InterpolationTable { entries }
    }

    /// The closed path bounding the brush: the outer circle.
    pub fn boundary(&self) -> BezPath {
        self.outer.to_path(PATH_TOLERANCE)
    }

    /// Build a native brush for this gradient. An empty stop set is allowed.
    pub fn build_brush<B: BrushBackend>(&self, backend: &mut B) -> Result<B::Brush, Error> {
        let table = self.interpolation_table();
        debug!(
            "radial brush in {:?} r={}, coverage {}, {} table entries",
            self.outer.center,
            self.outer.radius,
            self.coverage,
            table.len()
        );
        backend.path_gradient(&self.boundary(), &table)
    }
}

/// Positions and colors for a path gradient brush.
///
/// Positions are measured from the boundary path (0.0) toward its center
/// (1.0). Entries are in the order they should be handed to the native API.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTable {
    entries: Vec<GradientStop>,
}

impl InterpolationTable {
    pub fn entries(&self) -> &[GradientStop] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|e| e.pos)
    }

    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.entries.iter().map(|e| e.color)
    }

    /// The same table measured from the center outward (`1 - pos`), in
    /// ascending order of the new position.
    ///
    /// This is the form radial primitives that grow from a center point
    /// expect.
    pub fn center_outward(&self) -> Vec<GradientStop> {
        self.entries
            .iter()
            .rev()
            .map(|e| GradientStop::new(1.0 - e.pos, e.color))
            .collect()
    }
}

/// A gradient of either kind, as handed out by [`GradientFactory`].
///
/// [`GradientFactory`]: crate::GradientFactory
#[derive(Debug, Clone, PartialEq)]
pub enum Gradient {
    Linear(LinearGradientSpec),
    Radial(RadialGradientSpec),
}

impl Gradient {
    pub fn add_stop(&mut self, pos: f64, color: Color) {
        match self {
            Gradient::Linear(linear) => linear.add_stop(pos, color),
            Gradient::Radial(radial) => radial.add_stop(pos, color),
        }
    }

    /// Add several stops at once.
    ///
    /// ```
    /// use tinct::{Color, GradientFactory};
    ///
    /// let mut gradient = GradientFactory.create_linear(0.0, 0.0, 100.0, 0.0);
    /// gradient.add_stops((Color::RED, Color::GREEN, Color::BLUE));
    /// assert_eq!(gradient.stops().sorted()[1].pos, 0.5);
    /// ```
    pub fn add_stops(&mut self, stops: impl GradientStops) {
        match self {
            Gradient::Linear(linear) => linear.stops.extend(stops),
            Gradient::Radial(radial) => radial.stops.extend(stops),
        }
    }

    pub fn stops(&self) -> &GradientStopSet {
        match self {
            Gradient::Linear(linear) => linear.stops(),
            Gradient::Radial(radial) => radial.stops(),
        }
    }

    pub fn build_brush<B: BrushBackend>(&self, backend: &mut B) -> Result<B::Brush, Error> {
        match self {
            Gradient::Linear(linear) => linear.build_brush(backend),
            Gradient::Radial(radial) => radial.build_brush(backend),
        }
    }
}

impl From<LinearGradientSpec> for Gradient {
    fn from(linear: LinearGradientSpec) -> Gradient {
        Gradient::Linear(linear)
    }
}

impl From<RadialGradientSpec> for Gradient {
    fn from(radial: RadialGradientSpec) -> Gradient {
        Gradient::Radial(radial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_is_stable_for_equal_positions() {
        let mut set = GradientStopSet::new();
        set.append(1.0, Color::BLUE);
        set.append(0.5, Color::RED);
        set.append(0.0, Color::BLACK);
        set.append(0.5, Color::GREEN);
        set.append(0.5, Color::WHITE);

        let sorted = set.sorted();
        let positions: Vec<f64> = sorted.iter().map(|s| s.pos).collect();
        assert_eq!(positions, vec![0.0, 0.5, 0.5, 0.5, 1.0]);
        let ties: Vec<Color> = sorted[1..4].iter().map(|s| s.color).collect();
        assert_eq!(ties, vec![Color::RED, Color::GREEN, Color::WHITE]);

        // the stored order is untouched
        let stored: Vec<f64> = set.iter().map(|s| s.pos).collect();
        assert_eq!(stored, vec![1.0, 0.5, 0.0, 0.5, 0.5]);
    }

    #[test]
    fn append_keeps_duplicates() {
        let mut set = GradientStopSet::new();
        assert!(set.is_empty());
        set.append(0.25, Color::RED);
        set.append(0.25, Color::RED);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn color_slices_are_equally_spaced() {
        let stops = GradientStops::to_vec((Color::RED, Color::GREEN, Color::BLUE, Color::WHITE));
        let positions: Vec<f64> = stops.iter().map(|s| s.pos).collect();
        assert_eq!(positions, vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0]);

        let one: &[Color] = &[Color::RED];
        assert_eq!(GradientStops::to_vec(one), vec![GradientStop::new(0.0, Color::RED)]);
        let none: &[Color] = &[];
        assert!(GradientStops::to_vec(none).is_empty());
    }

    #[test]
    fn nan_positions_sort_last() {
        let mut set = GradientStopSet::new();
        set.append(1.0, Color::BLUE);
        set.append(f64::NAN, Color::WHITE);
        set.append(0.0, Color::RED);
        set.append(0.5, Color::GREEN);

        let sorted = set.sorted();
        let finite: Vec<f64> = sorted[..3].iter().map(|s| s.pos).collect();
        assert_eq!(finite, vec![0.0, 0.5, 1.0]);
        assert!(sorted[3].pos.is_nan());
        assert_eq!(sorted[3].color, Color::WHITE);

        let mut radial = RadialGradientSpec::new(
            Circle::new((0.0, 0.0), 1.0),
            Circle::new((0.0, 0.0), 2.0),
        )
        .unwrap();
        for stop in set.iter() {
            radial.add_stop(stop.pos, stop.color);
        }
        // NaN != NaN, so compare bit patterns
        let bits = |table: InterpolationTable| -> Vec<(u64, Color)> {
            table
                .entries()
                .iter()
                .map(|e| (e.pos.to_bits(), e.color))
                .collect()
        };
        assert_eq!(
            bits(radial.interpolation_table()),
            bits(radial.interpolation_table())
        );
    }

    #[test]
    fn coverage_is_computed_once() {
        let radial = RadialGradientSpec::new(
            Circle::new((5.0, 5.0), 2.0),
            Circle::new((5.0, 5.0), 10.0),
        )
        .unwrap();
        assert!((radial.coverage() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn outer_radius_is_validated() {
        let inner = Circle::new((0.0, 0.0), 0.0);
        let err = RadialGradientSpec::new(inner, Circle::new((0.0, 0.0), 0.0)).unwrap_err();
        assert_eq!(err.invalid_gradient(), Some(InvalidGradient::ZeroOuterRadius));

        let err = RadialGradientSpec::new(inner, Circle::new((0.0, 0.0), -3.0)).unwrap_err();
        assert_eq!(err.invalid_gradient(), Some(InvalidGradient::BadOuterRadius(-3.0)));

        let err =
            RadialGradientSpec::new(inner, Circle::new((0.0, 0.0), f64::INFINITY)).unwrap_err();
        assert!(matches!(
            err.invalid_gradient(),
            Some(InvalidGradient::BadOuterRadius(_))
        ));
    }

    #[test]
    fn inverted_circles_are_accepted() {
        let radial = RadialGradientSpec::new(
            Circle::new((0.0, 0.0), 20.0),
            Circle::new((0.0, 0.0), 10.0),
        )
        .unwrap();
        assert_eq!(radial.coverage(), -1.0);
        let table = radial.interpolation_table();
        let positions: Vec<f64> = table.positions().collect();
        assert_eq!(positions, vec![0.0, 0.0, -1.0, 1.0]);
    }

    #[test]
    fn single_stop_is_repeated() {
        let mut radial = RadialGradientSpec::new(
            Circle::new((0.0, 0.0), 0.0),
            Circle::new((0.0, 0.0), 4.0),
        )
        .unwrap();
        radial.add_stop(0.5, Color::RED);
        let table = radial.interpolation_table();
        assert_eq!(
            table.entries(),
            &[
                GradientStop::new(0.5, Color::RED),
                GradientStop::new(0.5, Color::RED),
                GradientStop::new(1.0, Color::TRANSPARENT),
                GradientStop::new(1.0, Color::TRANSPARENT),
            ]
        );
    }

    #[test]
    fn center_outward_reverses() {
        let mut radial = RadialGradientSpec::new(
            Circle::new((0.0, 0.0), 5.0),
            Circle::new((0.0, 0.0), 10.0),
        )
        .unwrap();
        radial.add_stop(0.0, Color::RED);
        radial.add_stop(1.0, Color::BLUE);
        let flipped = radial.interpolation_table().center_outward();
        assert_eq!(
            flipped,
            vec![
                GradientStop::new(0.0, Color::TRANSPARENT),
                GradientStop::new(0.5, Color::TRANSPARENT),
                GradientStop::new(0.5, Color::BLUE),
                GradientStop::new(1.0, Color::RED),
            ]
        );
    }
}
