pub mod engine;
pub use engine::*;

pub mod intent;
pub use intent::*;

pub mod phase;
pub use phase::*;

pub mod reply;
pub use reply::*;
