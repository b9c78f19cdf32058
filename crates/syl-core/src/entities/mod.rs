//! Value types that flow through a single lookup request.

mod citation;
mod classification;
mod slots;

pub use citation::{Answer, Citation};
pub use classification::IntentClassification;
pub use slots::Slots;
