// SPDX-License-Identifier: MPL-2.0
//! Domain layer: value objects independent of collaborators and UI.

pub mod display;
pub mod playback;

pub use display::{AspectMode, Orientation};
pub use playback::{snap_to_extreme, Brightness, PlaybackPhase, PlaybackRate, SeekId, Volume};
