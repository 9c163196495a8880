// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`session`]: The playback session driven by engine callbacks and commands
//! - [`environment`]: Error-absorbing wrapper for display side effects
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The control surface uses application layer services

pub mod environment;
pub mod port;
pub mod session;

pub use environment::EnvironmentAdapter;
pub use session::{PendingSeek, PlaybackSession, SessionEffect};
