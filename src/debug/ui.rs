// ./src/debug/ui.rs
use crate::render::animation::{TimingMode, WarpAnimation};
use crate::state::{WarpSettings, WarpSprite};
use bevy::prelude::*;
use bevy_egui::{
    EguiContexts,
    egui::{self, ComboBox, Slider, Window},
};
use std::f32::consts::PI;

pub fn warp_control_ui_system(
    mut contexts: EguiContexts,
    mut settings: ResMut<WarpSettings>,
    sprites: Query<&WarpAnimation, With<WarpSprite>>,
) {
    Window::new("Warp-Gitter")
        .default_width(320.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.label("Klick oder Touch auf das Sprite: Deformation am Kontaktpunkt");
            if let Ok(animation) = sprites.get_single() {
                ui.label(format!(
                    "{} | max. Versatz {:.3}{}",
                    animation.target(),
                    animation.target().max_offset(),
                    if animation.is_running() { " | animiert" } else { "" }
                ));
            }

            ui.collapsing("Deformation", |ui| {
                let params = &mut settings.parameters;
                ui.add(Slider::new(&mut params.radius, 0.05..=1.0).text("Radius"));
                ui.add(
                    Slider::new(&mut params.max_displacement, 0.0..=0.5).text("Max. Verschiebung"),
                );
                ui.add(
                    Slider::new(&mut params.max_angle_offset, 0.0..=PI).text("Max. Winkelabweichung (rad)"),
                );
                ui.label("Referenzzentrum");
                ui.horizontal(|ui| {
                    ui.add(Slider::new(&mut params.reference_center.x, 0.0..=1.0).text("x"));
                    ui.add(Slider::new(&mut params.reference_center.y, 0.0..=1.0).text("y"));
                });
            });

            ui.collapsing("Übergang", |ui| {
                ui.add(
                    Slider::new(&mut settings.transition.duration, 0.0..=2.0).text("Dauer (s)"),
                );
                let current = settings.transition.timing;
                ComboBox::from_label("Verlauf")
                    .selected_text(format!("{current:?}"))
                    .show_ui(ui, |ui| {
                        for mode in TimingMode::ALL {
                            ui.selectable_value(
                                &mut settings.transition.timing,
                                mode,
                                format!("{mode:?}"),
                            );
                        }
                    });
            });

            ui.collapsing("Gitter & Sprite", |ui| {
                let (columns, rows) = (settings.columns, settings.rows);
                ui.add(Slider::new(&mut settings.columns, 1..=16).text("Spalten"));
                ui.add(Slider::new(&mut settings.rows, 1..=16).text("Zeilen"));
                if settings.columns != columns || settings.rows != rows {
                    settings.rebuild_request = true;
                }
                ui.add(
                    Slider::new(&mut settings.rotation_speed, -PI..=PI).text("Drehung (rad/s)"),
                );
                ui.checkbox(&mut settings.show_grid, "Gitter anzeigen");
            });

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("↺ Reset").clicked() {
                    settings.reset_request = true;
                }
                if ui.button("SVG exportieren").clicked() {
                    settings.export_request = true;
                }
            });
            ui.add(egui::TextEdit::singleline(&mut settings.svg_export_path).hint_text("Dateiname"));
        });
}
