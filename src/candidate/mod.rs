pub mod loader;
pub mod types;

pub use loader::load_candidates;
pub use types::{AttributeValue, Candidate};
