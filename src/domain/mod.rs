// Domain layer: request/outcome types and the ports the fetcher talks through.

pub mod model;
pub mod ports;
