// Copyright 2026 the Tinct Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic example of writing gradient brushes to an SVG

use std::io;

use tinct::kurbo::{Circle, Rect, Size};
use tinct::{Color, GradientFactory};

fn main() {
    let factory = GradientFactory;
    let mut svg = tinct_svg::SvgBrushes::new(Some(Size::new(400.0, 200.0)));

    let mut linear = factory.create_linear(0.0, 0.0, 200.0, 0.0);
    factory.add_color_stop(&mut linear, 0.0, Color::rgb8(0x00, 0x00, 0x80));
    factory.add_color_stop(&mut linear, 0.5, Color::WHITE);
    factory.add_color_stop(&mut linear, 1.0, Color::rgb8(0x80, 0x00, 0x00));
    let brush = factory.build_brush(&linear, &mut svg).unwrap();
    svg.fill(Rect::new(0.0, 0.0, 200.0, 200.0), &brush);

    let mut radial = factory
        .create_radial(300.0, 100.0, 30.0, 300.0, 100.0, 90.0)
        .unwrap();
    factory.add_color_stop(&mut radial, 0.0, Color::rgb8(0xff, 0xc0, 0x00));
    factory.add_color_stop(&mut radial, 1.0, Color::rgb8(0x00, 0x80, 0x00));
    let brush = factory.build_brush(&radial, &mut svg).unwrap();
    svg.fill(Circle::new((300.0, 100.0), 90.0), &brush);

    svg.write(io::stdout()).unwrap();
}
