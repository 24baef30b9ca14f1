// src/input/handler.rs

use crate::math::{ContactMapper, GridDeformation, MathResult, PivotFrame, Point2D};
use crate::render::animation::{WarpAnimation, WarpSink};
use crate::state::{WarpSettings, WarpSprite};
use bevy::input::touch::Touches;
use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_window::PrimaryWindow;

/// Deformiert das Zielgitter am Kontakt und startet den Übergang dorthin.
/// Liefert den normierten Kontaktpunkt zurück.
pub fn apply_contact(
    animation: &mut WarpAnimation,
    frame: &impl ContactMapper,
    raw_position: Vec2,
    settings: &WarpSettings,
) -> MathResult<Point2D> {
    let contact = frame.to_unit_contact(raw_position);
    let deformed = animation.target().deform(contact, &settings.parameters)?;
    animation.warp_to(deformed, settings.transition)?;
    Ok(contact)
}

/// Lokaler Bezugsrahmen eines Sprites: Position und Drehung um die z-Achse
pub fn sprite_frame(transform: &Transform) -> PivotFrame {
    let (_, _, rotation_z) = transform.rotation.to_euler(EulerRot::XYZ);
    PivotFrame::new(transform.translation.truncate(), rotation_z)
}

/// System: Klick (Maustaste losgelassen) oder beendeter Touch deformiert das Sprite
pub fn handle_contact_system(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut egui_contexts: EguiContexts,
    settings: Res<WarpSettings>,
    mut sprites: Query<(&Transform, &mut WarpAnimation), With<WarpSprite>>,
) {
    let ctx = egui_contexts.ctx_mut();
    if ctx.wants_pointer_input() || ctx.is_pointer_over_area() {
        return;
    }

    let Ok(window) = windows.get_single() else { return };
    let Ok((camera, cam_transform)) = camera_q.get_single() else { return };

    let mut screen_points: Vec<Vec2> = touches
        .iter_just_released()
        .map(|touch| touch.position())
        .collect();
    if buttons.just_released(MouseButton::Left) {
        if let Some(cursor) = window.cursor_position() {
            screen_points.push(cursor);
        }
    }

    for screen_point in screen_points {
        let Some(world_pos) = camera.viewport_to_world_2d(cam_transform, screen_point) else {
            continue;
        };

        for (transform, mut animation) in sprites.iter_mut() {
            let frame = sprite_frame(transform);
            match apply_contact(&mut animation, &frame, world_pos, &settings) {
                Ok(contact) => debug!(
                    "Contact at world {world_pos} -> unit {contact}, target {}",
                    animation.target()
                ),
                Err(err) => warn!("Deformation rejected: {err}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::WarpGrid;
    use crate::math::utils::constants::PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_sprite_frame_reads_rotation() {
        let transform =
            Transform::from_xyz(10.0, -5.0, 0.0).with_rotation(Quat::from_rotation_z(PI / 3.0));
        let frame = sprite_frame(&transform);
        assert_eq!(frame.pivot, Vec2::new(10.0, -5.0));
        assert_relative_eq!(frame.rotation, PI / 3.0, epsilon = 1e-5);
    }

    #[test]
    fn test_apply_contact_starts_transition() {
        let settings = WarpSettings::default();
        let mut animation = WarpAnimation::new(WarpGrid::new(4, 4).unwrap());
        let frame = PivotFrame::new(Vec2::ZERO, 0.0);

        // Klick rechts vom Sprite: Kontakt am rechten Rand (1.0, 0.5)
        let contact = apply_contact(&mut animation, &frame, Vec2::new(50.0, 0.0), &settings).unwrap();
        assert_relative_eq!(contact.x, 1.0);
        assert_relative_eq!(contact.y, 0.5);
        assert!(animation.is_running());
        assert!(!animation.target().is_identity());
        assert!(animation.displayed().is_identity());
    }

    #[test]
    fn test_apply_contact_reports_invalid_parameters() {
        let mut settings = WarpSettings::default();
        settings.parameters.radius = 0.0;
        let mut animation = WarpAnimation::new(WarpGrid::new(2, 2).unwrap());
        let frame = PivotFrame::new(Vec2::ZERO, 0.0);

        assert!(apply_contact(&mut animation, &frame, Vec2::new(1.0, 1.0), &settings).is_err());
        assert!(!animation.is_running());
        assert!(animation.target().is_identity());
    }
}
