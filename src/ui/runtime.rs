// SPDX-License-Identifier: MPL-2.0
//! Async driver for a [`ControlSurface`].
//!
//! The driver owns the surface and waits on two things at once: the next
//! message from any [`SurfaceHandle`], and the earliest timer deadline the
//! surface reports. Whichever comes first is handled with the current time.
//!
//! ```ignore
//! let (handle, receiver) = SurfaceHandle::channel();
//! let driver = tokio::spawn(runtime::run(surface, receiver));
//! handle.tap_at(Point::new(200.0, 300.0));
//! ```

use std::time::Instant;

use iced_core::{Point, Size};
use tokio::sync::mpsc;

use super::surface::{ControlSurface, Message};
use crate::application::port::EngineEvent;

/// Current time on tokio's clock, so paused test clocks drive the timers.
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Drives `surface` until it leaves the screen or every handle is dropped.
///
/// The surface is torn down before it is handed back, so the returned value
/// only serves to inspect final state.
pub async fn run(
    mut surface: ControlSurface,
    mut receiver: mpsc::UnboundedReceiver<Message>,
) -> ControlSurface {
    log::debug!("driver started for {}", surface.content_id());

    while !surface.has_exited() {
        let deadline = surface.next_deadline();
        tokio::select! {
            biased;

            msg = receiver.recv() => match msg {
                Some(msg) => surface.handle(msg, now()),
                None => {
                    log::debug!("all surface handles dropped");
                    break;
                }
            },

            () = sleep_until(deadline) => surface.handle(Message::Tick, now()),
        }
    }

    surface.teardown();
    surface
}

/// Cloneable sender for surface messages.
///
/// Sending to a driver that already stopped is silently ignored.
#[derive(Debug, Clone)]
pub struct SurfaceHandle {
    sender: mpsc::UnboundedSender<Message>,
}

impl SurfaceHandle {
    /// Creates a handle and the receiver to pass to [`run`].
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Message>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Sends a message. Returns false if the driver is gone.
    pub fn send(&self, msg: Message) -> bool {
        match self.sender.send(msg) {
            Ok(()) => true,
            Err(mpsc::error::SendError(msg)) => {
                log::debug!("driver stopped, dropping {msg:?}");
                false
            }
        }
    }

    /// Posts an engine callback.
    pub fn engine_event(&self, event: EngineEvent) {
        self.send(Message::Engine(event));
    }

    /// Down and up at the same point.
    pub fn tap_at(&self, position: Point) {
        self.send(Message::PointerDown(position));
        self.send(Message::PointerUp(position));
    }

    pub fn pointer_down(&self, position: Point) {
        self.send(Message::PointerDown(position));
    }

    pub fn pointer_moved(&self, position: Point) {
        self.send(Message::PointerMoved(position));
    }

    pub fn pointer_up(&self, position: Point) {
        self.send(Message::PointerUp(position));
    }

    pub fn pointer_cancelled(&self) {
        self.send(Message::PointerCancelled);
    }

    pub fn resize(&self, size: Size) {
        self.send(Message::ViewportResized(size));
    }

    pub fn toggle_playback(&self) {
        self.send(Message::TogglePlayback);
    }

    pub fn play(&self) {
        self.send(Message::Play);
    }

    pub fn pause(&self) {
        self.send(Message::Pause);
    }

    pub fn seek_to(&self, target_secs: f64) {
        self.send(Message::SeekTo(target_secs));
    }

    pub fn rewind(&self) {
        self.send(Message::Rewind);
    }

    pub fn fast_forward(&self) {
        self.send(Message::FastForward);
    }

    pub fn toggle_mute(&self) {
        self.send(Message::ToggleMute);
    }

    pub fn cycle_rate(&self) {
        self.send(Message::CycleRate);
    }

    pub fn toggle_loop(&self) {
        self.send(Message::ToggleLoop);
    }

    pub fn toggle_lock(&self) {
        self.send(Message::ToggleLock);
    }

    pub fn toggle_fullscreen(&self) {
        self.send(Message::ToggleFullscreen);
    }

    pub fn cycle_aspect(&self) {
        self.send(Message::CycleAspect);
    }

    pub fn picture_in_picture(&self) {
        self.send(Message::PictureInPicture);
    }

    pub fn set_brightness(&self, value: f32) {
        self.send(Message::BrightnessSliderChanged(value));
    }

    pub fn release_brightness_slider(&self, value: f32) {
        self.send(Message::BrightnessSliderReleased(value));
    }

    pub fn set_volume(&self, value: f32) {
        self.send(Message::VolumeSliderChanged(value));
    }

    pub fn release_volume_slider(&self, value: f32) {
        self.send(Message::VolumeSliderReleased(value));
    }

    pub fn go_back(&self) {
        self.send(Message::GoBack);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_after_receiver_dropped_is_ignored() {
        let (handle, receiver) = SurfaceHandle::channel();
        drop(receiver);
        assert!(!handle.send(Message::Play));
        handle.go_back();
    }

    #[test]
    fn tap_sends_down_then_up() {
        let (handle, mut receiver) = SurfaceHandle::channel();
        handle.tap_at(Point::new(3.0, 4.0));
        assert_eq!(
            receiver.try_recv().ok(),
            Some(Message::PointerDown(Point::new(3.0, 4.0)))
        );
        assert_eq!(
            receiver.try_recv().ok(),
            Some(Message::PointerUp(Point::new(3.0, 4.0)))
        );
    }
}
