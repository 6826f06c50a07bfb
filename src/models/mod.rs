pub mod classifier;
pub mod session;

pub use classifier::{ClassifierResult, EntityCandidate, EntityValue, IntentScore};
pub use session::Session;
