//! Media detection for listing posts.

pub mod classifier;
pub mod item;

pub use classifier::classify;
pub use item::Classified;
