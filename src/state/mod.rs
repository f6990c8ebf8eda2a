//! State Management
//!
//! Session identity and transient notice state shared through context.

pub mod notices;
pub mod session;

pub use notices::{provide_notices, Notices};
pub use session::{provide_session, Identity, Session};
