// ./src/setup.rs
use crate::math::WarpGrid;
use crate::render::{WarpAnimation, create_warp_mesh};
use crate::state::{WarpSettings, WarpSprite};
use bevy::prelude::*;
use bevy::sprite::{MaterialMesh2dBundle, Mesh2dHandle};
use bevy_render::render_asset::RenderAssetUsages;
use bevy_render::render_resource::{Extent3d, TextureDimension, TextureFormat};

const TEXTURE_SIZE: u32 = 256;

/// Erzeugt eine Kreistextur mit Ringen, damit die Verzerrung sichtbar ist.
/// Außerhalb des Kreises ist die Textur transparent.
pub fn circle_image(size: u32) -> Image {
    let mut data = Vec::with_capacity((size * size * 4) as usize);
    let half = size as f32 / 2.0;

    for y in 0..size {
        for x in 0..size {
            let dx = (x as f32 + 0.5 - half) / half;
            let dy = (y as f32 + 0.5 - half) / half;
            let r = (dx * dx + dy * dy).sqrt();

            let pixel = if r > 1.0 {
                [0, 0, 0, 0]
            } else if ((r * 8.0) as u32) % 2 == 0 {
                [70, 140, 220, 255]
            } else {
                [240, 240, 250, 255]
            };
            data.extend_from_slice(&pixel);
        }
    }

    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        data,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

pub fn setup_scene(
    mut commands: Commands,
    settings: Res<WarpSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    // Kamera
    commands.spawn(Camera2dBundle::default());

    let grid = match WarpGrid::new(settings.columns, settings.rows) {
        Ok(grid) => grid,
        Err(err) => {
            error!("Cannot create warp grid: {err}");
            return;
        }
    };
    let size = Vec2::splat(settings.sprite_size);
    let texture = images.add(circle_image(TEXTURE_SIZE));

    commands.spawn((
        MaterialMesh2dBundle {
            mesh: Mesh2dHandle(meshes.add(create_warp_mesh(&grid, size))),
            material: materials.add(ColorMaterial::from(texture)),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..default()
        },
        WarpSprite { size },
        WarpAnimation::new(grid),
    ));
    info!(
        "Warp sprite spawned ({}x{} grid, {} px).",
        settings.columns, settings.rows, settings.sprite_size
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_image_is_transparent_outside() {
        let image = circle_image(16);
        assert_eq!(image.data.len(), 16 * 16 * 4);
        // Ecke transparent, Mitte deckend
        assert_eq!(image.data[3], 0);
        let center = ((8 * 16 + 8) * 4) as usize;
        assert_eq!(image.data[center + 3], 255);
    }
}
