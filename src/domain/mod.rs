// Domain layer: the transport port every service talks through, plus models shared across services.

pub mod model;
pub mod ports;
