use geopaint::canvas::Canvas;
use geopaint::feature::parse_features;
use geopaint::options::PolygonPaint;
use geopaint::{Color, RenderOptions, Renderer, StyleTable};
use image::RgbaImage;

const STYLE: &str = r##"
admin_level:
  - rank: 2
    fillColor: "#FF0000FF"
    lineWidth: 2
  - rank: 4
    fillColor: "#0000FFFF"
  - rank: 6
    fillColor: "#00FF00FF"
lines:
  road: "#000000FF"
  roadWidth: 3
"##;

const BLUE: Color = Color::rgba(0, 0, 255, 255);
const GREEN: Color = Color::rgba(0, 255, 0, 255);

// Pixel positions below are derived from the projection at the default zoom factors with a 600x600 canvas.
const POLYGON_INSIDE: (u32, u32) = (280, 240);
const POLYGON_HOLE: (u32, u32) = (330, 288);
const OVERLAP: (u32, u32) = (370, 270);
const ROAD: (u32, u32) = (330, 378);
const FIRST_PART: (u32, u32) = (95, 246);
const SECOND_PART: (u32, u32) = (209, 246);
const OUTSIDE: (u32, u32) = (50, 50);

fn feature(geometry: &str, properties: &str) -> String {
    format!(r#"{{"type": "Feature", "geometry": {geometry}, "properties": {properties}}}"#)
}

fn collection(features: &[String]) -> String {
    format!(
        r#"{{"type": "FeatureCollection", "features": [{}]}}"#,
        features.join(",")
    )
}

fn polygon_with_hole() -> String {
    r#"{"type": "Polygon", "coordinates": [
        [[0, 0], [90, 0], [90, 60], [0, 60], [0, 0]],
        [[30, 20], [60, 20], [60, 40], [30, 40], [30, 20]]
    ]}"#
    .to_string()
}

fn road() -> String {
    r#"{"type": "LineString", "coordinates": [[0, -30], [90, -30]]}"#.to_string()
}

fn render(json: &str, options: &RenderOptions) -> RgbaImage {
    let features = parse_features(json).unwrap();
    let style = StyleTable::from_yaml(STYLE).unwrap();
    Renderer::new(&style, options)
        .render_image(&features)
        .unwrap()
        .render()
}

fn options() -> RenderOptions {
    RenderOptions {
        background: Color::WHITE,
        ..RenderOptions::default().with_size(600, 600)
    }
}

fn pixel(image: &RgbaImage, (x, y): (u32, u32)) -> Color {
    let [r, g, b, a] = image.get_pixel(x, y).0;
    Color::rgba(r, g, b, a)
}

#[test]
fn polygon_hole_is_cut_out() {
    let json = collection(&[feature(&polygon_with_hole(), r#"{"admin_level": "2"}"#)]);
    let canvas = render(&json, &options());

    assert_eq!(pixel(&canvas, POLYGON_INSIDE), Color::RED);
    assert_eq!(pixel(&canvas, POLYGON_HOLE), Color::WHITE);
    assert_eq!(pixel(&canvas, OUTSIDE), Color::WHITE);
}

#[test]
fn legacy_polygon_paint_covers_holes() {
    let json = collection(&[feature(&polygon_with_hole(), r#"{"admin_level": 2}"#)]);
    let options = RenderOptions {
        polygon_paint: PolygonPaint::Legacy,
        ..options()
    };
    let canvas = render(&json, &options);

    assert_eq!(pixel(&canvas, POLYGON_INSIDE), Color::RED);
    assert_eq!(pixel(&canvas, POLYGON_HOLE), Color::RED);
}

#[test]
fn later_features_are_painted_over() {
    let overlapping = r#"{"type": "Polygon", "coordinates": [[[60, 30], [120, 30], [120, 50], [60, 50], [60, 30]]]}"#;
    let json = collection(&[
        feature(&polygon_with_hole(), r#"{"admin_level": "2"}"#),
        feature(overlapping, r#"{"admin_level": "4"}"#),
    ]);
    let canvas = render(&json, &options());

    assert_eq!(pixel(&canvas, OVERLAP), BLUE);
    assert_eq!(pixel(&canvas, POLYGON_INSIDE), Color::RED);
}

#[test]
fn unknown_level_uses_default_fill() {
    let json = collection(&[feature(&polygon_with_hole(), r#"{"admin_level": "11"}"#)]);
    let canvas = render(&json, &options());

    // #757575AA over white.
    let painted = pixel(&canvas, POLYGON_INSIDE);
    assert_eq!(painted.a(), 255);
    assert_eq!(painted.r(), painted.g());
    assert_eq!(painted.r(), painted.b());
    assert!((150..=170).contains(&painted.r()), "{painted:?}");
}

#[test]
fn default_width_line_is_visible() {
    // The equator falls exactly on the border between two pixel rows.
    let line = r#"{"type": "LineString", "coordinates": [[-90, 0], [90, 0]]}"#;
    let json = collection(&[feature(line, r#"{"road": "false"}"#)]);
    let options = options();
    let features = parse_features(&json).unwrap();
    let canvas = Renderer::new(&StyleTable::default(), &options)
        .render_image(&features)
        .unwrap()
        .render();

    let touched = canvas
        .pixels()
        .filter(|p| p.0 != [255, 255, 255, 255])
        .count();
    assert!(touched > 0);
    assert_ne!(pixel(&canvas, (300, 333)), Color::WHITE);
    assert_ne!(pixel(&canvas, (300, 334)), Color::WHITE);
}

#[test]
fn roads_are_stroked() {
    let json = collection(&[feature(&road(), r#"{"road": "true"}"#)]);
    let canvas = render(&json, &options());
    assert_eq!(pixel(&canvas, ROAD), Color::BLACK);

    let json = collection(&[feature(&road(), r#"{"name": "not a road"}"#)]);
    let canvas = render(&json, &options());
    assert_eq!(pixel(&canvas, ROAD), Color::WHITE);
}

#[test]
fn multi_polygon_parts() {
    let multi_polygon = r#"{"type": "MultiPolygon", "coordinates": [
        [[[-170, -80], [-160, -80], [-160, -70], [-170, -70], [-170, -80]]],
        [[[-150, -80], [-140, -80], [-140, -70], [-150, -70], [-150, -80]]]
    ]}"#;
    let json = collection(&[feature(multi_polygon, r#"{"admin_level": "6"}"#)]);
    let canvas = render(&json, &options());

    assert_eq!(pixel(&canvas, FIRST_PART), GREEN);
    assert_eq!(pixel(&canvas, SECOND_PART), GREEN);
    assert_eq!(pixel(&canvas, OUTSIDE), Color::WHITE);
}

#[test]
fn empty_collection_exports_background() {
    let features = parse_features(&collection(&[])).unwrap();
    let style = StyleTable::from_yaml(STYLE).unwrap();
    let options = options();
    let mut canvas = Renderer::new(&style, &options)
        .render_image(&features)
        .unwrap();
    let png = canvas.export().unwrap();

    let image = image::load_from_memory_with_format(&png, image::ImageFormat::Png)
        .unwrap()
        .into_rgba8();
    assert_eq!(image.dimensions(), (600, 600));
    assert!(image.pixels().all(|p| p.0 == [255, 255, 255, 255]));
}
