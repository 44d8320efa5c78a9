// Domain layer: catalog models, reply types and the rule port. No rendering or I/O here.

pub mod catalog;
pub mod model;
pub mod ports;
pub mod reply;
