//! Basic example of rendering gradient brushes with Cairo.

use std::fs::File;

use cairo::{Context, Format, ImageSurface};

use tinct::kurbo::{Circle, Rect};
use tinct::{Color, GradientFactory};
use tinct_cairo::CairoBrushes;

const TEXTURE_WIDTH: i32 = 400;
const TEXTURE_HEIGHT: i32 = 200;

const HIDPI: f64 = 2.0;

fn draw_pretty_picture(ctx: &Context) -> Result<(), tinct::Error> {
    let factory = GradientFactory;
    let mut backend = CairoBrushes::new();

    let mut linear = factory.create_linear(10.0, 10.0, 100.0, 90.0);
    factory.add_color_stop(&mut linear, 0.0, Color::rgb24(0x00_00_80));
    factory.add_color_stop(&mut linear, 1.0, Color::rgb24(0x00_80_00));
    let brush = factory.build_brush(&linear, &mut backend)?;
    brush.fill(ctx, Rect::new(10.0, 10.0, 100.0, 90.0))?;

    let mut radial = factory.create_radial(150.0, 50.0, 10.0, 150.0, 50.0, 40.0)?;
    factory.add_color_stop(&mut radial, 0.0, Color::rgb24(0x80_00_00));
    factory.add_color_stop(&mut radial, 1.0, Color::rgb24(0xff_c0_00));
    let brush = factory.build_brush(&radial, &mut backend)?;
    brush.fill(ctx, Circle::new((150.0, 50.0), 40.0))
}

fn main() {
    let surface = ImageSurface::create(Format::ARgb32, TEXTURE_WIDTH, TEXTURE_HEIGHT)
        .expect("Can't create surface");
    let cr = Context::new(&surface).expect("Can't create context");
    cr.scale(HIDPI, HIDPI);
    draw_pretty_picture(&cr).expect("Error drawing");
    drop(cr);
    let mut file = File::create("temp-cairo.png").expect("Couldn't create 'file.png'");
    surface
        .write_to_png(&mut file)
        .expect("Error writing image file");
}
