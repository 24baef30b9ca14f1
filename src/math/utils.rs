// src/math/utils.rs

/// Mathematische Konstanten
pub mod constants {
    pub const EPSILON: f32 = 1e-6;
    pub const TAU: f32 = std::f32::consts::TAU; // Explizit TAU von std verwenden
    pub const PI: f32 = std::f32::consts::PI;
    pub const FRAC_PI_4: f32 = std::f32::consts::FRAC_PI_4;
}

/// Vergleichsfunktionen mit Toleranz
pub mod comparison {
    use super::constants::EPSILON;

    /// Prüft ob zwei Floats (nahezu) gleich sind
    pub fn nearly_equal(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Lineare Interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }
}

/// Winkel-Hilfsfunktionen
pub mod angles {
    use super::constants::TAU;
    use bevy::math::Vec2;

    /// Bringt einen Winkel mit genau einer Korrektur in Richtung [0, 2π].
    ///
    /// Negative Winkel bekommen einmal 2π addiert, Winkel über 2π einmal 2π abgezogen.
    /// Es wird bewusst kein Modulo verwendet: ein Winkel unter -2π bleibt negativ.
    /// Für Ergebnisse von `atan2` (Bereich [-π, π]) liegt das Ergebnis immer in [0, 2π].
    pub fn normalize_angle_once(angle: f32) -> f32 {
        let angle = if angle < 0.0 { angle + TAU } else { angle };
        if angle > TAU { angle - TAU } else { angle }
    }

    /// Winkel des Vektors von `from` nach `to`, normalisiert mit [`normalize_angle_once`]
    pub fn angle_to(from: Vec2, to: Vec2) -> f32 {
        normalize_angle_once((to.y - from.y).atan2(to.x - from.x))
    }
}

/// Geometrische Hilfsfunktionen (einfach, ohne komplexe Strukturen)
pub mod simple_geometry {
    use bevy::math::Vec2;

    /// Berechnet den Abstand zwischen zwei Punkten
    pub fn distance_sq(p1: Vec2, p2: Vec2) -> f32 {
        (p2.x - p1.x).powi(2) + (p2.y - p1.y).powi(2)
    }

    pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
        distance_sq(p1, p2).sqrt()
    }

    /// Rotiert einen 2D-Vektor um einen Winkel
    pub fn rotate_vector_2d(v: Vec2, angle_rad: f32) -> Vec2 {
        let cos_a = angle_rad.cos();
        let sin_a = angle_rad.sin();
        Vec2::new(v.x * cos_a - v.y * sin_a, v.x * sin_a + v.y * cos_a)
    }
}

/// Easing-Funktionen für Animationen
pub mod easing {
    /// Linear easing (keine Beschleunigung)
    pub fn linear(t: f32) -> f32 {
        t.clamp(0.0, 1.0)
    }

    /// Quadratic ease-in
    pub fn ease_in_quad(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        t * t
    }

    /// Quadratic ease-out
    pub fn ease_out_quad(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        1.0 - (1.0 - t) * (1.0 - t)
    }

    /// Quadratic ease-in-out
    pub fn ease_in_out_quad(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            2.0 * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::constants::{PI, TAU};
    use super::*;
    use approx::assert_relative_eq;
    use bevy::math::Vec2;

    #[test]
    fn test_normalize_angle_once_single_pass() {
        assert_relative_eq!(angles::normalize_angle_once(-PI / 2.0), 1.5 * PI, epsilon = 1e-6);
        assert_relative_eq!(angles::normalize_angle_once(PI), PI);
        assert_relative_eq!(angles::normalize_angle_once(TAU + 1.0), 1.0, epsilon = 1e-5);
        // Nur eine Korrektur: stark negative Winkel bleiben negativ
        let stays_negative = angles::normalize_angle_once(-3.0 * TAU);
        assert_relative_eq!(stays_negative, -2.0 * TAU, epsilon = 1e-5);
        assert!(stays_negative < 0.0);
    }

    #[test]
    fn test_angle_to_directions() {
        let origin = Vec2::ZERO;
        assert_relative_eq!(angles::angle_to(origin, Vec2::X), 0.0);
        assert_relative_eq!(angles::angle_to(origin, Vec2::Y), PI / 2.0, epsilon = 1e-6);
        assert_relative_eq!(angles::angle_to(origin, -Vec2::X), PI, epsilon = 1e-6);
        assert_relative_eq!(angles::angle_to(origin, -Vec2::Y), 1.5 * PI, epsilon = 1e-6);
    }

    #[test]
    fn test_easing_endpoints() {
        let curves: [fn(f32) -> f32; 4] = [
            easing::linear,
            easing::ease_in_quad,
            easing::ease_out_quad,
            easing::ease_in_out_quad,
        ];
        for f in curves {
            assert_relative_eq!(f(0.0), 0.0);
            assert_relative_eq!(f(1.0), 1.0);
            assert_relative_eq!(f(2.0), 1.0);
        }
        // Ease-out ist in der ersten Hälfte schneller als linear
        assert!(easing::ease_out_quad(0.25) > easing::linear(0.25));
        assert!(easing::ease_in_quad(0.25) < easing::linear(0.25));
    }

    #[test]
    fn test_rotate_vector_quarter_turn() {
        let rotated = simple_geometry::rotate_vector_2d(Vec2::X, PI / 2.0);
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-6);
        assert_relative_eq!(simple_geometry::distance(Vec2::ZERO, Vec2::new(3.0, 4.0)), 5.0);
    }
}
