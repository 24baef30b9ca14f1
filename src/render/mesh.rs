// src/render/mesh.rs

use crate::math::{Point2D, WarpGrid};
use bevy::math::Vec2;
use bevy_render::mesh::{Indices, Mesh, VertexAttributeValues};
use bevy_render::render_asset::RenderAssetUsages;
use bevy_render::render_resource::PrimitiveTopology;

/// Rechnet einen Punkt aus dem Einheitsquadrat in lokale Mesh-Koordinaten um.
/// Das Mesh ist um den Ursprung zentriert, (0.5, 0.5) liegt auf dem Pivot.
pub fn unit_to_local(point: Point2D, size: Vec2) -> Vec2 {
    (point - Vec2::splat(0.5)) * size
}

/// Vertex-Positionen aus den Zielpositionen des Gitters
pub fn grid_vertex_positions(grid: &WarpGrid, size: Vec2) -> Vec<[f32; 3]> {
    grid.dest_positions()
        .iter()
        .map(|&p| unit_to_local(p, size).extend(0.0).to_array())
        .collect()
}

/// Erzeugt das Warp-Mesh eines Gitters.
///
/// Positionen folgen den Zielpositionen, UVs den Quellpositionen (v gespiegelt, da
/// Bildzeile 0 oben liegt). Pro Zelle zwei Dreiecke, gegen den Uhrzeigersinn.
pub fn create_warp_mesh(grid: &WarpGrid, size: Vec2) -> Mesh {
    let stride = grid.columns() + 1;

    let uvs: Vec<[f32; 2]> = grid
        .source_positions()
        .iter()
        .map(|p| [p.x, 1.0 - p.y])
        .collect();
    let normals = vec![[0.0, 0.0, 1.0]; grid.vertex_count()];

    let mut indices = Vec::with_capacity(grid.columns() * grid.rows() * 6);
    for row in 0..grid.rows() {
        for column in 0..grid.columns() {
            let base = (row * stride + column) as u32;
            let above = base + stride as u32;

            indices.extend_from_slice(&[base, base + 1, above]);
            indices.extend_from_slice(&[base + 1, above + 1, above]);
        }
    }

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::MAIN_WORLD | RenderAssetUsages::RENDER_WORLD,
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, grid_vertex_positions(grid, size));
    mesh.insert_attribute(Mesh::ATTRIBUTE_UV_0, uvs);
    mesh.insert_attribute(Mesh::ATTRIBUTE_NORMAL, normals);
    mesh.insert_indices(Indices::U32(indices));
    mesh
}

/// Schreibt die aktuellen Zielpositionen in ein bestehendes Warp-Mesh.
/// Gibt `false` zurück, wenn die Vertexanzahl nicht passt (Mesh muss neu gebaut werden).
pub fn update_warp_mesh(mesh: &mut Mesh, grid: &WarpGrid, size: Vec2) -> bool {
    match mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION) {
        Some(VertexAttributeValues::Float32x3(positions)) if positions.len() == grid.vertex_count() => {
            *positions = grid_vertex_positions(grid, size);
            true
        }
        _ => false,
    }
}
