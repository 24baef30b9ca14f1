// ./src/lib.rs

// Kern: Gitter-Deformation (engine-unabhängig bis auf die Vektor-Typen)
pub mod math;

// Host-Seite: Bevy-Systeme für Demo, Rendering und Debugging
pub mod debug;
pub mod input;
pub mod render;
pub mod setup;
pub mod state;
pub mod systems;
