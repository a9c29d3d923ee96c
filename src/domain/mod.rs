//! Domain data loaded from the host game (JSON bundles)

pub mod config;
