// ./src/state.rs
use crate::math::DeformationParameters;
use crate::render::animation::WarpTransition;
use bevy::prelude::*;

/// Markiert das deformierbare Sprite und hält seine Größe in Weltkoordinaten
#[derive(Component, Debug, Clone, Copy)]
pub struct WarpSprite {
    pub size: Vec2,
}

#[derive(Resource, Debug, Clone)]
pub struct WarpSettings {
    // --- Deformation ---
    pub parameters: DeformationParameters,
    pub transition: WarpTransition,

    // --- Gitter & Sprite ---
    pub columns: usize,
    pub rows: usize,
    pub sprite_size: f32,
    /// Drehgeschwindigkeit des Sprites in Rad pro Sekunde
    pub rotation_speed: f32,

    // --- Visualisierung & Debug ---
    pub show_grid: bool,
    pub svg_export_path: String,
    pub svg_pixel_size: f64,

    // --- Anfragen aus der UI ---
    pub reset_request: bool,
    pub rebuild_request: bool,
    pub export_request: bool,
}

impl Default for WarpSettings {
    fn default() -> Self {
        Self {
            parameters: DeformationParameters::default(),
            transition: WarpTransition::default(),

            columns: 4,
            rows: 4,
            sprite_size: 256.0,
            // Halbe Umdrehung alle 5 Sekunden
            rotation_speed: std::f32::consts::PI / 5.0,

            show_grid: true,
            svg_export_path: "warp_grid.svg".to_string(),
            svg_pixel_size: 512.0,

            reset_request: false,
            rebuild_request: false,
            export_request: false,
        }
    }
}

/// Fragt an, ob die Gitter-Gizmos gezeichnet werden sollen
pub fn show_grid_condition(settings: Res<WarpSettings>) -> bool {
    settings.show_grid
}
