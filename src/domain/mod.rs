// Domain layer: unit descriptions and the output port. No runtime concerns here.

pub mod model;
pub mod ports;
