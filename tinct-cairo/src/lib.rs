//! The cairo backend for tinct.
//!
//! Linear gradients map directly onto cairo linear patterns. Cairo has no
//! path gradients, so path brushes become radial patterns centered in the
//! boundary, clipped to it when filling.

use std::fmt;

use cairo::{BorrowError, Context, Extend, LinearGradient, RadialGradient};
use log::debug;

use tinct::kurbo::{BezPath, PathEl, Point, QuadBez, Shape};
use tinct::util::{clamp_offset, PATH_TOLERANCE};
use tinct::{BrushBackend, Capabilities, Color, Error, GradientStop, InterpolationTable};

/// `tinct::BrushBackend` producing cairo patterns.
#[derive(Debug, Default)]
pub struct CairoBrushes;

/// A brush made of a cairo pattern.
#[derive(Debug, Clone)]
pub enum Brush {
    Linear(LinearGradient),
    Path {
        pattern: RadialGradient,
        boundary: BezPath,
    },
}

#[derive(Debug)]
struct WrappedStatus(cairo::Error);

impl fmt::Display for WrappedStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Cairo error: {:?}", self.0)
    }
}

impl std::error::Error for WrappedStatus {}

trait WrapError<T> {
    fn wrap(self) -> Result<T, Error>;
}

impl<T> WrapError<T> for Result<T, BorrowError> {
    fn wrap(self) -> Result<T, Error> {
        self.map_err(|e| {
            let e: Box<dyn std::error::Error> = Box::new(e);
            e.into()
        })
    }
}

impl<T> WrapError<T> for Result<T, cairo::Error> {
    fn wrap(self) -> Result<T, Error> {
        self.map_err(|e| {
            let e: Box<dyn std::error::Error> = Box::new(WrappedStatus(e));
            e.into()
        })
    }
}

// we call this with different types of gradient that have `add_color_stop_rgba` fns,
// and there's no trait for this behaviour so we use a macro. ¯\_(ツ)_/¯
macro_rules! set_gradient_stops {
    ($dst: expr, $stops: expr) => {
        for stop in $stops {
            let (r, g, b, a) = stop.color.as_rgba();
            $dst.add_color_stop_rgba(clamp_offset(stop.pos), r, g, b, a);
        }
    };
}

impl CairoBrushes {
    pub fn new() -> CairoBrushes {
        CairoBrushes
    }

    fn linear(&self, start: Point, end: Point, stops: &[GradientStop]) -> Result<Brush, Error> {
        let lg = LinearGradient::new(start.x, start.y, end.x, end.y);
        set_gradient_stops!(&lg, stops);
        lg.set_extend(Extend::Pad);
        lg.status().wrap()?;
        Ok(Brush::Linear(lg))
    }
}

impl BrushBackend for CairoBrushes {
    type Brush = Brush;

    fn capabilities(&self) -> Capabilities {
        Capabilities {
            multi_stop_linear: true,
        }
    }

    fn two_color_linear(
        &mut self,
        start: Point,
        end: Point,
        c0: Color,
        c1: Color,
    ) -> Result<Brush, Error> {
        self.linear(
            start,
            end,
            &[GradientStop::new(0.0, c0), GradientStop::new(1.0, c1)],
        )
    }

    fn multi_stop_linear(
        &mut self,
        start: Point,
        end: Point,
        stops: &[GradientStop],
    ) -> Result<Brush, Error> {
        self.linear(start, end, stops)
    }

    fn path_gradient(
        &mut self,
        boundary: &BezPath,
        table: &InterpolationTable,
    ) -> Result<Brush, Error> {
        let bounds = boundary.bounding_box();
        let c = bounds.center();
        let r = 0.5 * bounds.width().max(bounds.height());
        let rg = RadialGradient::new(c.x, c.y, 0.0, c.x, c.y, r);
        set_gradient_stops!(&rg, &table.center_outward());
        rg.status().wrap()?;
        debug!("cairo path brush at {:?} r={}", c, r);
        Ok(Brush::Path {
            pattern: rg,
            boundary: boundary.clone(),
        })
    }
}

impl Brush {
    /// Fill `shape` on `ctx` with this brush.
    ///
    /// Path brushes only paint inside their boundary. The context's state is
    /// restored afterwards.
    pub fn fill(&self, ctx: &Context, shape: impl Shape) -> Result<(), Error> {
        ctx.save().wrap()?;
        let filled = self.fill_clipped(ctx, shape);
        // the clip must not outlive the call, even when filling failed
        let restored = ctx.restore().wrap();
        filled.and(restored)
    }

    fn fill_clipped(&self, ctx: &Context, shape: impl Shape) -> Result<(), Error> {
        if let Brush::Path { boundary, .. } = self {
            set_path(ctx, boundary);
            ctx.clip();
        }
        set_path(ctx, &shape);
        match self {
            Brush::Linear(linear) => ctx.set_source(linear),
            Brush::Path { pattern, .. } => ctx.set_source(pattern),
        }
        .wrap()?;
        ctx.set_fill_rule(cairo::FillRule::Winding);
        ctx.fill().wrap()
    }
}

fn set_path(ctx: &Context, shape: &impl Shape) {
    // This shouldn't be necessary, we always leave the context in no-path
    // state. But just in case, and it should be harmless.
    ctx.new_path();
    let mut last = Point::ZERO;
    for el in shape.path_elements(PATH_TOLERANCE) {
        match el {
            PathEl::MoveTo(p) => {
                ctx.move_to(p.x, p.y);
                last = p;
            }
            PathEl::LineTo(p) => {
                ctx.line_to(p.x, p.y);
                last = p;
            }
            PathEl::QuadTo(p1, p2) => {
                let q = QuadBez::new(last, p1, p2);
                let c = q.raise();
                ctx.curve_to(c.p1.x, c.p1.y, c.p2.x, c.p2.y, p2.x, p2.y);
                last = p2;
            }
            PathEl::CurveTo(p1, p2, p3) => {
                ctx.curve_to(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y);
                last = p3;
            }
            PathEl::ClosePath => ctx.close_path(),
        }
    }
}
