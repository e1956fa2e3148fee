// Domain layer: report model and the probe port. No HTTP here.

pub mod model;
pub mod ports;
