// src/math/geometry/warp/mod.rs

// Warp-Gitter mit fester Topologie und die lokale Deformation an einem Kontaktpunkt
pub mod contact;
pub mod deform;
pub mod grid;

pub use self::contact::{ContactMapper, PivotFrame, rotated_around};
pub use self::deform::{DeformationParameters, GridDeformation, deform_point, deform_positions};
pub use self::grid::WarpGrid;
