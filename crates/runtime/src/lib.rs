//! Frame-driven session glue for Gloam.
//!
//! `gloam-runtime` owns the live gameplay components for one player session,
//! wires the equipment manager to the vitals equip notification, and exposes
//! the command surface input/UI callbacks invoke. Everything runs on the
//! caller's thread: commands mutate synchronously, `tick` advances per-frame
//! time, and observers registered on the core signals have already run by
//! the time either returns.

pub mod bootstrap;
pub mod session;
pub mod telemetry;

pub use bootstrap::session_from_content;
pub use session::{GameSession, SessionError};
