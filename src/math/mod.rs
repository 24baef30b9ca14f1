// src/math/mod.rs

pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{MathError, MathResult};
pub use geometry::warp::{
    ContactMapper, DeformationParameters, GridDeformation, PivotFrame, WarpGrid,
};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        error::{MathError, MathResult},
        geometry::warp::{
            ContactMapper, DeformationParameters, GridDeformation, PivotFrame, WarpGrid,
            deform_point, deform_positions, rotated_around,
        },
        types::*,
    };
}
