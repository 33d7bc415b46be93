// Domain layer: request/response models and ports. No HTTP or runtime code here.

pub mod model;
pub mod ports;
