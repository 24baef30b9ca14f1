// src/input/mod.rs

pub mod handler;

pub use handler::{apply_contact, handle_contact_system, sprite_frame};
