//! API boundary module.
//!
//! Translates domain operations into remote collection store calls. Owns no
//! state: validation happens upstream in the forms, and failures propagate
//! to the caller unmodified for toast-style feedback.

mod schools;
mod syllabus;
mod users;

pub use schools::*;
pub use syllabus::*;
pub use users::*;
