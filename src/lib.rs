// SPDX-License-Identifier: MPL-2.0
//! `glide_player` is a gesture-driven control surface for a video player.
//!
//! It sits between a media engine and the user: swipes adjust brightness and
//! volume, taps toggle the chrome, and transport commands flow through a
//! single playback session. Platform side effects go through ports so the
//! surface runs headless.

#![doc(html_root_url = "https://docs.rs/glide_player/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
