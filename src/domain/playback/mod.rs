// SPDX-License-Identifier: MPL-2.0
//! Playback domain types.
//!
//! Value objects shared by the session, the gesture interpreter and the
//! engine port. Nothing here talks to a collaborator.

pub mod newtypes;
pub mod phase;

pub use newtypes::{snap_to_extreme, Brightness, PlaybackRate, Volume};
pub use phase::{PlaybackPhase, SeekId};
