// src/math/geometry/warp/contact.rs

use crate::math::{
    types::*,
    utils::{comparison, simple_geometry},
};

/// Abbildung eines rohen Interaktionspunkts (z.B. Cursor in Weltkoordinaten)
/// in das Einheitsquadrat des deformierbaren Objekts
pub trait ContactMapper {
    fn to_unit_contact(&self, raw: Point2D) -> Point2D;
}

/// Rotiert einen Punkt um einen Pivot (verschieben, am Ursprung rotieren, zurückschieben)
pub fn rotated_around(point: Point2D, angle_rad: f32, pivot: Point2D) -> Point2D {
    simple_geometry::rotate_vector_2d(point - pivot, angle_rad) + pivot
}

/// Lage und Drehung eines Objekts, dessen Warp-Gitter in lokalen Koordinaten liegt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotFrame {
    pub pivot: Point2D,
    pub rotation: f32,
}

impl PivotFrame {
    pub fn new(pivot: Point2D, rotation: f32) -> Self {
        Self { pivot, rotation }
    }
}

impl ContactMapper for PivotFrame {
    /// Dreht den Punkt zurück in das unrotierte Objekt und normiert den Versatz zum Pivot
    /// mit der betragsmäßig größeren Komponente. Das ergibt einen Punkt im Rechteck
    /// [-1, 1] x [-1, 1], der dann nach [0, 1] x [0, 1] verschoben wird.
    /// Ein Punkt genau auf dem Pivot landet im Zentrum (0.5, 0.5).
    fn to_unit_contact(&self, raw: Point2D) -> Point2D {
        let unrotated = rotated_around(raw, -self.rotation, self.pivot);
        let delta = unrotated - self.pivot;
        let delta_max = delta.x.abs().max(delta.y.abs());
        if comparison::nearly_equal(delta_max, 0.0) {
            return UNIT_CENTER;
        }

        Point2D::new(
            (delta.x / delta_max + 1.0) / 2.0,
            (delta.y / delta_max + 1.0) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::utils::constants::PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotated_around_pivot() {
        let rotated = rotated_around(Point2D::new(2.0, 1.0), PI / 2.0, Point2D::new(1.0, 1.0));
        assert_relative_eq!(rotated.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_unrotated_contacts_land_on_unit_square_edge() {
        let frame = PivotFrame::new(Point2D::new(100.0, 50.0), 0.0);

        let right = frame.to_unit_contact(Point2D::new(130.0, 60.0));
        assert_relative_eq!(right.x, 1.0);
        assert_relative_eq!(right.y, (10.0 / 30.0 + 1.0) / 2.0, epsilon = 1e-6);

        let below = frame.to_unit_contact(Point2D::new(95.0, 10.0));
        assert_relative_eq!(below.x, (-5.0 / 40.0 + 1.0) / 2.0, epsilon = 1e-6);
        assert_relative_eq!(below.y, 0.0);
    }

    #[test]
    fn test_rotation_is_undone() {
        // Objekt um 90° gedreht: ein Klick oberhalb entspricht lokal "rechts"
        let frame = PivotFrame::new(Point2D::ZERO, PI / 2.0);
        let contact = frame.to_unit_contact(Point2D::new(0.0, 10.0));
        assert_relative_eq!(contact.x, 1.0, epsilon = 1e-6);
        assert_relative_eq!(contact.y, 0.5, epsilon = 1e-6);
    }

    #[test]
    fn test_contact_on_pivot_maps_to_center() {
        let frame = PivotFrame::new(Point2D::new(3.0, 4.0), 1.0);
        assert_eq!(frame.to_unit_contact(Point2D::new(3.0, 4.0)), UNIT_CENTER);
    }
}
