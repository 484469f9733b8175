// Domain layer: shoe records and the source port. No I/O lives here.

pub mod model;
pub mod ports;
