//! Data models for the EduDash client.
//!
//! These models match the remote document shapes exactly so the dashboard
//! frontend and this crate agree on the wire format.

mod school;
mod syllabus;
mod user;

pub use school::*;
pub use syllabus::*;
pub use user::*;
