// Domain layer: probe models and ports (interfaces).

pub mod model;
pub mod ports;
