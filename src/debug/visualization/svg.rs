// src/debug/visualization/svg.rs
use crate::math::{Point2D, WarpGrid};
use bevy::log::info;
use svg::Document;
use svg::node::element::{Circle, Group, Line, Rectangle};

/// Rand um das Einheitsquadrat, damit verschobene Punkte sichtbar bleiben
const MARGIN: f64 = 0.15;

/// SVG-Koordinaten: y zeigt nach unten, das Gitter nach oben
fn to_svg(point: Point2D) -> (f64, f64) {
    (point.x as f64, 1.0 - point.y as f64)
}

fn edge_line(a: Point2D, b: Point2D) -> Line {
    let (x1, y1) = to_svg(a);
    let (x2, y2) = to_svg(b);
    Line::new()
        .set("x1", x1)
        .set("y1", y1)
        .set("x2", x2)
        .set("y2", y2)
}

/// Baut ein SVG-Dokument mit Ausgangsgitter (gestrichelt), deformiertem Gitter und Kontrollpunkten.
pub fn build_grid_svg(grid: &WarpGrid, svg_pixel_size: f64) -> Document {
    let view_size = 1.0 + 2.0 * MARGIN;
    let stroke_w_normal = view_size * 0.004;
    let stroke_w_thin = view_size * 0.002;
    let point_radius = view_size * 0.006;

    let mut rest = Group::new()
        .set("class", "rest-grid")
        .set("stroke", "#aaaaaa")
        .set("stroke-width", stroke_w_thin)
        .set("stroke-dasharray", "0.01,0.01");
    let mut deformed = Group::new()
        .set("class", "deformed-grid")
        .set("stroke", "#5500aa")
        .set("stroke-width", stroke_w_normal);

    let source = grid.source_positions();
    let dest = grid.dest_positions();
    for (a, b) in grid.edges() {
        rest = rest.add(edge_line(source[a], source[b]));
        deformed = deformed.add(edge_line(dest[a], dest[b]));
    }

    let mut points = Group::new()
        .set("class", "control-points")
        .set("fill", "#aaccff")
        .set("stroke", "#0000cc")
        .set("stroke-width", stroke_w_thin);
    for (source, dest) in source.iter().zip(dest.iter()) {
        let (cx, cy) = to_svg(*dest);
        let circle = Circle::new()
            .set("cx", cx)
            .set("cy", cy)
            .set("r", point_radius);
        // Verschobene Punkte hervorheben
        let circle = if source != dest {
            circle.set("fill", "#ffaaaa").set("stroke", "#cc0000")
        } else {
            circle
        };
        points = points.add(circle);
    }

    let background = Rectangle::new()
        .set("x", -MARGIN)
        .set("y", -MARGIN)
        .set("width", view_size)
        .set("height", view_size)
        .set("fill", "#f0f0f0");

    Document::new()
        .set("width", svg_pixel_size)
        .set("height", svg_pixel_size)
        .set("viewBox", (-MARGIN, -MARGIN, view_size, view_size))
        .add(background)
        .add(rest)
        .add(deformed)
        .add(points)
}

/// Speichert das Gitter als SVG-Datei.
pub fn export_grid_svg(
    filename: &str,
    grid: &WarpGrid,
    svg_pixel_size: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let document = build_grid_svg(grid, svg_pixel_size);
    svg::save(filename, &document)?;
    info!("Debug SVG '{}' wurde erstellt ({}).", filename, grid);
    Ok(())
}
