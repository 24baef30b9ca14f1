// src/math/types/mod.rs

// Re-export häufig verwendete externe Typen
pub use bevy::math::Vec2;

// Einheitliche Typen für das gesamte Modul.
// Gitterpunkte und Kontaktpunkte leben im Einheitsquadrat [0,1]x[0,1].
pub type Point2D = Vec2;

/// Referenzzentrum des Einheitsquadrats
pub const UNIT_CENTER: Point2D = Vec2::new(0.5, 0.5);

/// Prüft, ob beide Komponenten endlich sind (kein NaN, kein ±∞)
pub fn is_finite_point(point: Point2D) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
