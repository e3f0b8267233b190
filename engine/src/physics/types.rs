//! Physics type re-exports from glam
//!
//! The collision system is pure vector math; the only type it needs is
//! `Vec3`, re-exported here so hosts can name it without depending on glam
//! directly.

pub use glam::Vec3;
