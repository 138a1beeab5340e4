//! The toolkit-facing entry point.

use std::any::Any;

use kurbo::Circle;

use crate::{
    new_error, BrushBackend, Color, Error, ErrorKind, Gradient, LinearGradientSpec,
    RadialGradientSpec,
};

/// Creates gradients and adds stops to them.
///
/// This is what a cross-platform drawing layer calls; it holds no state.
///
/// ```
/// use tinct::{Color, GradientFactory, RecordingBackend, RecordedBrush};
///
/// let factory = GradientFactory;
/// let mut gradient = factory.create_linear(0.0, 0.0, 100.0, 0.0);
/// factory.add_color_stop(&mut gradient, 1.0, Color::BLUE);
/// factory.add_color_stop(&mut gradient, 0.0, Color::RED);
///
/// let brush = factory.build_brush(&gradient, &mut RecordingBackend::new()).unwrap();
/// assert!(matches!(
///     brush,
///     RecordedBrush::TwoColorLinear { colors: (Color::RED, Color::BLUE), .. }
/// ));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientFactory;

impl GradientFactory {
    /// Create a linear gradient from `(x0, y0)` to `(x1, y1)`.
    pub fn create_linear(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> Gradient {
        LinearGradientSpec::new((x0, y0), (x1, y1)).into()
    }

    /// Create a radial gradient between the circle at `(cx0, cy0)` with
    /// radius `r0` and the circle at `(cx1, cy1)` with radius `r1`.
    ///
    /// Fails right away if `r1` is zero, negative or not finite.
    pub fn create_radial(
        &self,
        cx0: f64,
        cy0: f64,
        r0: f64,
        cx1: f64,
        cy1: f64,
        r1: f64,
    ) -> Result<Gradient, Error> {
        let inner = Circle::new((cx0, cy0), r0);
        let outer = Circle::new((cx1, cy1), r1);
        RadialGradientSpec::new(inner, outer).map(Gradient::from)
    }

    pub fn add_color_stop(&self, gradient: &mut Gradient, pos: f64, color: Color) {
        gradient.add_stop(pos, color);
    }

    /// Add a stop to a gradient held as an untyped handle.
    ///
    /// Accepts a [`Gradient`], [`LinearGradientSpec`] or
    /// [`RadialGradientSpec`]; anything else is a type mismatch.
    pub fn add_color_stop_dyn(
        &self,
        handle: &mut dyn Any,
        pos: f64,
        color: Color,
    ) -> Result<(), Error> {
        if let Some(gradient) = handle.downcast_mut::<Gradient>() {
            gradient.add_stop(pos, color);
        } else if let Some(linear) = handle.downcast_mut::<LinearGradientSpec>() {
            linear.add_stop(pos, color);
        } else if let Some(radial) = handle.downcast_mut::<RadialGradientSpec>() {
            radial.add_stop(pos, color);
        } else {
            return Err(new_error(ErrorKind::TypeMismatch));
        }
        Ok(())
    }

    /// Build a native brush for `gradient` with `backend`.
    pub fn build_brush<B: BrushBackend>(
        &self,
        gradient: &Gradient,
        backend: &mut B,
    ) -> Result<B::Brush, Error> {
        gradient.build_brush(backend)
    }
}
