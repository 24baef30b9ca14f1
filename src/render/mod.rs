// src/render/mod.rs

// Warp-Mesh und Übergangsanimation zwischen zwei Gittern
pub mod animation;
pub mod mesh;

pub use self::animation::{
    TimingMode, WarpAnimation, WarpSink, WarpTransition, animate_warp_system, rotate_sprite_system,
};
pub use self::mesh::{create_warp_mesh, unit_to_local, update_warp_mesh};
