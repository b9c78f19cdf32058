//! # syl-markdown
//!
//! The prose side of the lookup pipeline. A course's policy document is
//! parsed into sections, pipe tables, and links ([`MarkdownDoc`]); the
//! [`FallbackSearch`] then extracts intent-specific answers from that parsed
//! form, each with a confidence score.
//!
//! Also hosts the contact-address extraction behind the generic
//! "couldn't find it" message.

pub mod contact;
pub mod error;
pub mod fallback;
mod helpers;
pub mod parser;

pub use contact::{extract_contact_email, fallback_message};
pub use error::MarkdownError;
pub use fallback::{FallbackHit, FallbackSearch};
pub use parser::{Link, MarkdownDoc, Section, Table};
