// src/math/geometry/mod.rs

// Deklaration der Haupt-Geometriemodule
pub mod warp;

// Re-Exporte für einen schnellen Zugriff auf die Kern-Geometrietypen,
// falls man nicht das gesamte `math::prelude` importieren möchte.
pub use self::warp::{
    ContactMapper, DeformationParameters, GridDeformation, PivotFrame, WarpGrid, deform_point,
    deform_positions, rotated_around,
};
