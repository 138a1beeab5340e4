use tinct::kurbo::{Circle, Rect, Size};
use tinct::{Color, GradientFactory};
use tinct_svg::SvgBrushes;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn linear_keeps_every_stop() {
    init_logger();
    let factory = GradientFactory;
    let mut gradient = factory.create_linear(0.0, 0.0, 200.0, 0.0);
    factory.add_color_stop(&mut gradient, 1.0, Color::BLUE);
    factory.add_color_stop(&mut gradient, 0.0, Color::RED);
    factory.add_color_stop(&mut gradient, 0.5, Color::GREEN);

    let mut svg = SvgBrushes::new(Some(Size::new(200.0, 100.0)));
    let brush = factory.build_brush(&gradient, &mut svg).unwrap();
    svg.fill(Rect::new(0.0, 0.0, 200.0, 100.0), &brush);

    let out = svg.display().to_string();
    assert!(out.contains("<linearGradient"), "{}", out);
    assert_eq!(out.matches("<stop").count(), 3, "{}", out);
    let red = out.find("#ff0000").unwrap();
    let green = out.find("#00ff00").unwrap();
    let blue = out.find("#0000ff").unwrap();
    assert!(red < green && green < blue, "{}", out);
    assert!(out.contains("fill=\"url(#a)\""), "{}", out);
    assert!(!out.contains("clip-path"), "{}", out);
}

#[test]
fn two_positions_still_render() {
    let mut gradient = GradientFactory.create_linear(0.0, 0.0, 0.0, 50.0);
    gradient.add_stops((Color::BLACK, Color::WHITE));

    let mut svg = SvgBrushes::new(None);
    gradient.build_brush(&mut svg).unwrap();
    let out = svg.display().to_string();
    assert_eq!(out.matches("<stop").count(), 2, "{}", out);
    assert!(out.contains("#ffffff"), "{}", out);
}

#[test]
fn radial_is_clipped_and_reversed() {
    init_logger();
    let factory = GradientFactory;
    let mut gradient = factory
        .create_radial(50.0, 50.0, 5.0, 50.0, 50.0, 10.0)
        .unwrap();
    factory.add_color_stop(&mut gradient, 0.0, Color::RED);
    factory.add_color_stop(&mut gradient, 1.0, Color::BLUE);

    let mut svg = SvgBrushes::new(Some(Size::new(100.0, 100.0)));
    let brush = factory.build_brush(&gradient, &mut svg).unwrap();
    svg.fill(Circle::new((50.0, 50.0), 10.0), &brush);

    let out = svg.display().to_string();
    assert!(out.contains("<clipPath"), "{}", out);
    assert!(out.contains("<radialGradient"), "{}", out);
    assert_eq!(out.matches("<stop").count(), 4, "{}", out);
    // center first: the transparent core, then blue at the inner circle,
    // then red at the boundary
    let blue = out.find("#0000ff").unwrap();
    let red = out.find("#ff0000").unwrap();
    assert!(blue < red, "{}", out);
    assert_eq!(out.matches("offset=\"0.5\"").count(), 2, "{}", out);
    assert!(out.contains("clip-path=\"url(#a)\""), "{}", out);
    assert!(out.contains("fill=\"url(#b)\""), "{}", out);
}

#[test]
fn radial_without_stops_is_transparent() {
    let gradient = GradientFactory
        .create_radial(0.0, 0.0, 0.0, 0.0, 0.0, 4.0)
        .unwrap();
    let mut svg = SvgBrushes::new(None);
    gradient.build_brush(&mut svg).unwrap();
    let out = svg.display().to_string();
    assert_eq!(out.matches("<stop").count(), 4, "{}", out);
    assert_eq!(out.matches("stop-opacity=\"0\"").count(), 4, "{}", out);
}

#[test]
fn writes_to_io() {
    let mut gradient = GradientFactory.create_linear(0.0, 0.0, 1.0, 1.0);
    gradient.add_stop(0.0, Color::RED);
    let mut svg = SvgBrushes::new(None);
    gradient.build_brush(&mut svg).unwrap();
    let mut buf = Vec::new();
    svg.write(&mut buf).unwrap();
    let written = String::from_utf8(buf).unwrap();
    assert!(written.contains("<svg"));
    assert!(written.contains("<linearGradient"));
}

#[test]
fn radial_stop_zero_is_at_the_outer_edge() {
    init_logger();
    let mut gradient = GradientFactory
        .create_radial(0.0, 0.0, 5.0, 0.0, 0.0, 10.0)
        .unwrap();
    gradient.add_stop(0.0, Color::RED);
    gradient.add_stop(1.0, Color::BLUE);

    let mut svg = SvgBrushes::new(None);
    gradient.build_brush(&mut svg).unwrap();
    let out = svg.display().to_string();
    // offsets grow from the center, so the boundary is offset 1 and the
    // inner circle's edge is offset 0.5
    let stops: Vec<&str> = out.split("<stop").skip(1).collect();
    let at = |offset: &str, color: &str| {
        stops
            .iter()
            .any(|s| s.contains(offset) && s.contains(color))
    };
    assert!(at("offset=\"1\"", "#ff0000"), "{}", out);
    assert!(at("offset=\"0.5\"", "#0000ff"), "{}", out);
    assert!(!at("offset=\"1\"", "#0000ff"), "{}", out);
}
