// Domain layer: core models and ports (interfaces). No HTTP or config details here.

pub mod model;
pub mod ports;
