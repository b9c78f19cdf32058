//! # syl-lookup
//!
//! The lookup orchestrator. Given `(intent, slots, course)`:
//!
//! 1. `out_of_scope` (and chitchat) answer `("", [])` immediately.
//! 2. The course's facts store is loaded and the structured resolver runs.
//! 3. A structured hit is returned as is.
//! 4. A miss escalates to the markdown fallback for intents that have one;
//!    the candidate is accepted only at or above the confidence threshold.
//! 5. Otherwise the structured (possibly empty) answer stands.
//!
//! [`Lookup::promote`] is the separate, flag-gated write-back path.

pub mod error;
pub mod fallback;
pub mod orchestrator;
pub mod promote;

pub use error::LookupError;
pub use fallback::{FallbackSource, MarkdownFallback};
pub use orchestrator::{DEFAULT_MIN_FALLBACK_CONFIDENCE, Lookup};
pub use promote::PromotionOutcome;
