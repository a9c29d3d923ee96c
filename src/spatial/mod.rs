//! Spatial data: world geometry and the ray queries run against it

pub mod world;
