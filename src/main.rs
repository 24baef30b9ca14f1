// ./src/main.rs
use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use warp_grid::{
    debug::{ui::warp_control_ui_system, visualization::grid::draw_warp_grid_system},
    input::handle_contact_system,
    render::{animate_warp_system, rotate_sprite_system},
    setup::setup_scene,
    state::{WarpSettings, show_grid_condition},
    systems::handle_warp_requests_system,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Warp Grid - Klick zum Deformieren".into(),
                resolution: (640.0, 480.0).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin)
        .init_resource::<WarpSettings>()
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            (
                // Block 1: UI und Anfrageverarbeitung
                warp_control_ui_system,
                handle_warp_requests_system,
                // Block 2: Eingabe -> neue Zielgitter
                handle_contact_system,
                // Block 3: Sprite bewegen und Übergänge abspielen
                rotate_sprite_system,
                animate_warp_system,
            )
                .chain(),
        )
        .add_systems(
            Update,
            draw_warp_grid_system
                .after(animate_warp_system)
                .run_if(show_grid_condition),
        )
        .run();
}
