// Domain layer: core models and ports (interfaces). No HTTP or filesystem
// details belong here.

pub mod model;
pub mod ports;
