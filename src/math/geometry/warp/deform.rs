// src/math/geometry/warp/deform.rs

use super::grid::WarpGrid;
use crate::math::{
    error::{MathError, MathResult},
    types::*,
    utils::{angles, constants, simple_geometry},
};
use bevy::log::debug;
use serde::{Deserialize, Serialize};

/// Parameter der lokalen Gitter-Deformation (alle Werte im Einheitsquadrat)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformationParameters {
    /// Einflussradius um den Kontaktpunkt
    pub radius: f32,
    /// Maximale Verschiebung eines Punkts (direkt am Kontakt)
    pub max_displacement: f32,
    /// Halbe Öffnung des erlaubten Richtungskegels (Radiant)
    pub max_angle_offset: f32,
    /// Punkt, zu dem der Richtungskegel ausgerichtet wird
    pub reference_center: Point2D,
}

impl DeformationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_max_displacement(mut self, max_displacement: f32) -> Self {
        self.max_displacement = max_displacement;
        self
    }

    pub fn with_max_angle_offset(mut self, max_angle_offset: f32) -> Self {
        self.max_angle_offset = max_angle_offset;
        self
    }

    pub fn with_reference_center(mut self, center: Point2D) -> Self {
        self.reference_center = center;
        self
    }

    pub fn validate(&self) -> MathResult<()> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(MathError::invalid_parameters(format!(
                "radius must be finite and greater than 0, got {}",
                self.radius
            )));
        }

        if !self.max_displacement.is_finite() {
            return Err(MathError::invalid_parameters(
                "max_displacement must be finite",
            ));
        }

        // Negative Öffnung ist erlaubt: das Clamping landet dann immer auf der oberen Kegelgrenze
        if !self.max_angle_offset.is_finite() {
            return Err(MathError::invalid_parameters(
                "max_angle_offset must be finite",
            ));
        }

        if !is_finite_point(self.reference_center) {
            return Err(MathError::invalid_parameters(
                "reference_center must be finite",
            ));
        }

        Ok(())
    }
}

impl Default for DeformationParameters {
    fn default() -> Self {
        Self {
            radius: 0.35,
            max_displacement: 0.1,
            max_angle_offset: constants::FRAC_PI_4,
            reference_center: UNIT_CENTER,
        }
    }
}

/// Verschiebt einen einzelnen Punkt. Setzt validierte Parameter voraus.
///
/// Punkte außerhalb des Radius und Punkte exakt auf dem Kontakt bleiben unverändert.
/// Die Richtung wird auf den Kegel um die Richtung Kontakt -> Referenzzentrum begrenzt,
/// die Länge fällt linear vom Kontakt (max_displacement) bis zum Radius (0) ab.
/// Die neue Position ist der *ursprüngliche* Punkt plus dieser Verschiebung.
pub fn deform_point(point: Point2D, contact: Point2D, params: &DeformationParameters) -> Point2D {
    let contact_distance = simple_geometry::distance(point, contact);
    if contact_distance > params.radius || contact_distance == 0.0 {
        return point;
    }

    let change_factor = (params.radius - contact_distance) / params.radius;
    let displacement_length = params.max_displacement * change_factor;

    let angle_to_center = angles::angle_to(contact, params.reference_center);
    let min_angle = angle_to_center - params.max_angle_offset;
    let max_angle = angle_to_center + params.max_angle_offset;
    // Einfaches numerisches Clamping, kein Umlauf über 0/2π
    let offset_angle = angles::angle_to(contact, point).max(min_angle).min(max_angle);

    Point2D::new(
        point.x + displacement_length * offset_angle.cos(),
        point.y + displacement_length * offset_angle.sin(),
    )
}

/// Deformiert eine Punktmenge am Kontaktpunkt und liefert eine neue Punktmenge gleicher Länge und Reihenfolge
pub fn deform_positions(
    positions: &[Point2D],
    contact: Point2D,
    params: &DeformationParameters,
) -> MathResult<Vec<Point2D>> {
    params.validate()?;

    if positions.is_empty() {
        return Err(MathError::invalid_parameters("grid must not be empty"));
    }

    if !is_finite_point(contact) {
        return Err(MathError::invalid_parameters(format!(
            "contact point must be finite, got {contact}"
        )));
    }

    if let Some(index) = positions.iter().position(|p| !is_finite_point(*p)) {
        return Err(MathError::invalid_parameters(format!(
            "grid point {index} is not finite"
        )));
    }

    let deformed: Vec<Point2D> = positions
        .iter()
        .map(|&point| deform_point(point, contact, params))
        .collect();

    debug!(
        "Deformation at {contact}: {} of {} points displaced",
        positions
            .iter()
            .zip(deformed.iter())
            .filter(|(before, after)| before != after)
            .count(),
        positions.len()
    );

    Ok(deformed)
}

/// Trait für Deformationen an einem Kontaktpunkt
pub trait GridDeformation {
    /// Liefert eine deformierte Kopie, die Eingabe bleibt unverändert
    fn deform(&self, contact: Point2D, params: &DeformationParameters) -> MathResult<Self>
    where
        Self: Sized;
}

impl GridDeformation for WarpGrid {
    fn deform(&self, contact: Point2D, params: &DeformationParameters) -> MathResult<Self> {
        let destination = deform_positions(self.dest_positions(), contact, params)?;
        self.replacing_by_destination_positions(destination)
    }
}

impl GridDeformation for Vec<Point2D> {
    fn deform(&self, contact: Point2D, params: &DeformationParameters) -> MathResult<Self> {
        deform_positions(self, contact, params)
    }
}
