// src/render/animation.rs

use super::mesh::update_warp_mesh;
use crate::math::{MathError, MathResult, WarpGrid, utils::easing};
use crate::state::{WarpSettings, WarpSprite};
use bevy::prelude::*;
use bevy::sprite::Mesh2dHandle;
use bevy_asset::Assets;
use serde::{Deserialize, Serialize};

/// Zeitverlauf eines Übergangs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimingMode {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInEaseOut,
}

impl TimingMode {
    pub const ALL: [TimingMode; 4] = [
        TimingMode::Linear,
        TimingMode::EaseIn,
        TimingMode::EaseOut,
        TimingMode::EaseInEaseOut,
    ];

    /// Bildet den linearen Fortschritt t ∈ [0, 1] auf den Animationsfortschritt ab
    pub fn apply(self, t: f32) -> f32 {
        match self {
            TimingMode::Linear => easing::linear(t),
            TimingMode::EaseIn => easing::ease_in_quad(t),
            TimingMode::EaseOut => easing::ease_out_quad(t),
            TimingMode::EaseInEaseOut => easing::ease_in_out_quad(t),
        }
    }
}

/// Dauer (Sekunden) und Verlauf eines Übergangs zwischen zwei Gittern
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WarpTransition {
    pub duration: f32,
    pub timing: TimingMode,
}

impl Default for WarpTransition {
    fn default() -> Self {
        Self {
            duration: 0.5,
            timing: TimingMode::EaseOut,
        }
    }
}

/// Abnehmer für deformierte Gitter (z.B. ein animiertes Sprite)
pub trait WarpSink {
    fn warp_to(&mut self, target: WarpGrid, transition: WarpTransition) -> MathResult<()>;
}

/// Animierter Übergang vom angezeigten zum Zielgitter
#[derive(Component, Debug, Clone)]
pub struct WarpAnimation {
    from: WarpGrid,
    target: WarpGrid,
    displayed: WarpGrid,
    transition: WarpTransition,
    elapsed: f32,
    running: bool,
}

impl WarpAnimation {
    pub fn new(grid: WarpGrid) -> Self {
        Self {
            from: grid.clone(),
            target: grid.clone(),
            displayed: grid,
            transition: WarpTransition::default(),
            elapsed: 0.0,
            running: false,
        }
    }

    /// Aktuell sichtbares Gitter
    pub fn displayed(&self) -> &WarpGrid {
        &self.displayed
    }

    /// Zuletzt gesetztes Ziel, Basis für die nächste Deformation
    pub fn target(&self) -> &WarpGrid {
        &self.target
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Schreitet um `dt` Sekunden voran und liefert das sichtbare Gitter
    pub fn advance(&mut self, dt: f32) -> MathResult<&WarpGrid> {
        if !self.running {
            return Ok(&self.displayed);
        }

        self.elapsed += dt.max(0.0);
        let t = (self.elapsed / self.transition.duration).min(1.0);
        if t >= 1.0 {
            self.displayed = self.target.clone();
            self.running = false;
        } else {
            self.displayed = self
                .from
                .interpolate(&self.target, self.transition.timing.apply(t))?;
        }
        Ok(&self.displayed)
    }
}

impl WarpSink for WarpAnimation {
    /// Startet einen neuen Übergang ab dem aktuell sichtbaren Gitter.
    /// Ein laufender Übergang wird ersetzt.
    fn warp_to(&mut self, target: WarpGrid, transition: WarpTransition) -> MathResult<()> {
        if target.columns() != self.target.columns() || target.rows() != self.target.rows() {
            return Err(MathError::GridDimensionMismatch {
                left_columns: self.target.columns(),
                left_rows: self.target.rows(),
                right_columns: target.columns(),
                right_rows: target.rows(),
            });
        }

        self.transition = transition;
        self.elapsed = 0.0;
        if transition.duration <= 0.0 {
            self.from = target.clone();
            self.displayed = target.clone();
            self.target = target;
            self.running = false;
        } else {
            self.from = self.displayed.clone();
            self.target = target;
            self.running = true;
        }
        Ok(())
    }
}

/// System: treibt laufende Warp-Animationen voran und aktualisiert das Mesh
pub fn animate_warp_system(
    time: Res<Time>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut query: Query<(&mut WarpAnimation, &WarpSprite, &Mesh2dHandle)>,
) {
    for (mut animation, sprite, mesh_handle) in query.iter_mut() {
        if !animation.is_running() {
            continue;
        }

        let grid = match animation.advance(time.delta_seconds()) {
            Ok(grid) => grid,
            Err(err) => {
                warn!("Warp animation stopped: {err}");
                continue;
            }
        };

        let Some(mesh) = meshes.get_mut(&mesh_handle.0) else {
            continue;
        };
        if !update_warp_mesh(mesh, grid, sprite.size) {
            warn!("Warp mesh does not match grid {grid}, skipping update");
        }
    }
}

/// System: dreht das Sprite kontinuierlich (Rad pro Sekunde aus den Einstellungen)
pub fn rotate_sprite_system(
    time: Res<Time>,
    settings: Res<WarpSettings>,
    mut query: Query<&mut Transform, With<WarpSprite>>,
) {
    for mut transform in query.iter_mut() {
        transform.rotate_z(settings.rotation_speed * time.delta_seconds());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{DeformationParameters, GridDeformation, Point2D};
    use approx::assert_relative_eq;

    fn deformed(grid: &WarpGrid) -> WarpGrid {
        grid.deform(Point2D::new(0.5, 0.3), &DeformationParameters::default())
            .unwrap()
    }

    #[test]
    fn test_reaches_target_after_duration() {
        let grid = WarpGrid::new(4, 4).unwrap();
        let target = deformed(&grid);
        let mut animation = WarpAnimation::new(grid.clone());
        assert!(!animation.is_running());

        animation
            .warp_to(target.clone(), WarpTransition::default())
            .unwrap();
        assert!(animation.is_running());
        assert_eq!(animation.displayed(), &grid);

        animation.advance(0.25).unwrap();
        assert!(animation.is_running());
        assert_ne!(animation.displayed(), &grid);
        assert_ne!(animation.displayed(), &target);

        animation.advance(0.25).unwrap();
        assert!(!animation.is_running());
        assert_eq!(animation.displayed(), &target);
    }

    #[test]
    fn test_timing_curve_is_applied() {
        let grid = WarpGrid::new(1, 1).unwrap();
        let target = grid
            .replacing_by_destination_positions(vec![Point2D::new(1.0, 0.0); 4])
            .unwrap();
        let mut animation = WarpAnimation::new(grid);
        animation
            .warp_to(
                target,
                WarpTransition {
                    duration: 1.0,
                    timing: TimingMode::EaseOut,
                },
            )
            .unwrap();

        let grid = animation.advance(0.5).unwrap();
        // Vertex 0 läuft von (0, 0) nach (1, 0): ease-out(0.5) = 0.75
        assert_relative_eq!(grid.dest_position(0).unwrap().x, 0.75, epsilon = 1e-6);
    }

    #[test]
    fn test_retarget_starts_from_displayed_grid() {
        let grid = WarpGrid::new(2, 2).unwrap();
        let first = deformed(&grid);
        let mut animation = WarpAnimation::new(grid);
        animation.warp_to(first.clone(), WarpTransition::default()).unwrap();
        animation.advance(0.1).unwrap();
        let midway = animation.displayed().clone();

        let second = deformed(&first);
        animation.warp_to(second.clone(), WarpTransition::default()).unwrap();
        assert_eq!(animation.displayed(), &midway);
        assert_eq!(animation.target(), &second);

        animation.advance(1.0).unwrap();
        assert_eq!(animation.displayed(), &second);
    }

    #[test]
    fn test_zero_duration_applies_immediately() {
        let grid = WarpGrid::new(2, 2).unwrap();
        let target = deformed(&grid);
        let mut animation = WarpAnimation::new(grid);
        animation
            .warp_to(
                target.clone(),
                WarpTransition {
                    duration: 0.0,
                    timing: TimingMode::Linear,
                },
            )
            .unwrap();
        assert!(!animation.is_running());
        assert_eq!(animation.displayed(), &target);
    }

    #[test]
    fn test_rejects_other_topology() {
        let mut animation = WarpAnimation::new(WarpGrid::new(2, 2).unwrap());
        let result = animation.warp_to(WarpGrid::new(3, 2).unwrap(), WarpTransition::default());
        assert!(matches!(result, Err(MathError::GridDimensionMismatch { .. })));
    }
}
