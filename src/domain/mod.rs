// Domain layer: receipt models and the store port. No HTTP or runtime dependencies here.

pub mod model;
pub mod ports;
