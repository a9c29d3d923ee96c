pub mod physics;
pub mod motion;
