pub mod engine;
pub mod net;

pub use engine::*;
