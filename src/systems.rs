// ./src/systems.rs
use crate::debug::visualization::svg::export_grid_svg;
use crate::math::{MathResult, WarpGrid};
use crate::render::{WarpAnimation, WarpSink, create_warp_mesh};
use crate::state::{WarpSettings, WarpSprite};
use bevy::prelude::*;
use bevy::sprite::Mesh2dHandle;
use bevy_asset::Assets;

/// Neues Gitter mit geänderten Dimensionen. Die laufende Deformation wird verworfen.
pub fn rebuild_animation(settings: &WarpSettings) -> MathResult<WarpAnimation> {
    WarpGrid::new(settings.columns, settings.rows).map(WarpAnimation::new)
}

/// Reagiert auf Anfragen aus der UI (Reset, Gitter neu bauen, SVG-Export)
pub fn handle_warp_requests_system(
    mut settings: ResMut<WarpSettings>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut sprites: Query<(&mut WarpAnimation, &WarpSprite, &Mesh2dHandle)>,
) {
    if settings.rebuild_request {
        settings.rebuild_request = false;
        for (mut animation, sprite, mesh_handle) in sprites.iter_mut() {
            match rebuild_animation(&settings) {
                Ok(rebuilt) => {
                    *animation = rebuilt;
                    if let Some(mesh) = meshes.get_mut(&mesh_handle.0) {
                        *mesh = create_warp_mesh(animation.displayed(), sprite.size);
                    }
                    info!("Warp grid rebuilt: {}", animation.displayed());
                }
                Err(err) => warn!("Warp grid rebuild failed: {err}"),
            }
        }
    }

    if settings.reset_request {
        settings.reset_request = false;
        for (mut animation, _, _) in sprites.iter_mut() {
            let undeformed = animation.target().reset();
            if let Err(err) = animation.warp_to(undeformed, settings.transition) {
                warn!("Warp reset failed: {err}");
            }
        }
        info!("Warp grid reset requested.");
    }

    if settings.export_request {
        settings.export_request = false;
        for (animation, _, _) in sprites.iter() {
            if let Err(err) =
                export_grid_svg(&settings.svg_export_path, animation.displayed(), settings.svg_pixel_size)
            {
                warn!("SVG export to '{}' failed: {err}", settings.svg_export_path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_uses_settings_dimensions() {
        let settings = WarpSettings {
            columns: 6,
            rows: 3,
            ..default()
        };
        let animation = rebuild_animation(&settings).unwrap();
        assert_eq!(animation.displayed().vertex_count(), 7 * 4);
        assert!(!animation.is_running());

        let broken = WarpSettings {
            columns: 0,
            ..default()
        };
        assert!(rebuild_animation(&broken).is_err());
    }
}
