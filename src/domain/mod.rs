// Domain layer: projection models, record mappers and ports (interfaces).
// Nothing here performs I/O.

pub mod mapper;
pub mod model;
pub mod ports;
