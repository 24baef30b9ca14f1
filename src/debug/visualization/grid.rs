// src/debug/visualization/grid.rs

use crate::math::WarpGrid;
use crate::render::{WarpAnimation, unit_to_local};
use crate::state::WarpSprite;
use bevy::prelude::*;

/// Kanten des Gitters als Liniensegmente in lokalen Sprite-Koordinaten
pub fn grid_edge_segments(grid: &WarpGrid, size: Vec2) -> Vec<(Vec2, Vec2)> {
    let dest = grid.dest_positions();
    grid.edges()
        .map(|(a, b)| (unit_to_local(dest[a], size), unit_to_local(dest[b], size)))
        .collect()
}

/// System, das das sichtbare Warp-Gitter jedes Sprites als Gizmos zeichnet.
pub fn draw_warp_grid_system(
    query: Query<(&GlobalTransform, &WarpSprite, &WarpAnimation)>,
    mut gizmos: Gizmos,
) {
    for (transform, sprite, animation) in query.iter() {
        let grid = animation.displayed();
        for (start, end) in grid_edge_segments(grid, sprite.size) {
            let start = transform.transform_point(start.extend(0.0)).truncate();
            let end = transform.transform_point(end.extend(0.0)).truncate();
            gizmos.line_2d(start, end, Color::YELLOW);
        }

        // Verschobene Kontrollpunkte markieren
        for (source, dest) in grid.source_positions().iter().zip(grid.dest_positions()) {
            if source != dest {
                let center = transform
                    .transform_point(unit_to_local(*dest, sprite.size).extend(0.0))
                    .truncate();
                gizmos.circle_2d(center, 3.0, Color::RED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments_span_sprite() {
        let grid = WarpGrid::new(2, 2).unwrap();
        let segments = grid_edge_segments(&grid, Vec2::splat(100.0));
        assert_eq!(segments.len(), 12);
        assert_eq!(segments[0], (Vec2::new(-50.0, -50.0), Vec2::new(0.0, -50.0)));
        assert!(
            segments
                .iter()
                .all(|(a, b)| a.abs().max_element() <= 50.0 && b.abs().max_element() <= 50.0)
        );
    }
}
