pub mod store;
pub mod validator;

pub use store::{MemoryFilter, MemoryStore};
pub use validator::{AcceptAll, ContentValidator, ThresholdValidator};
