// SPDX-License-Identifier: MPL-2.0
//! Demo: drives a control surface through a scripted session.
//!
//! Every collaborator is a recording adapter, so the log shows each engine,
//! display and navigation call the surface makes.

use std::path::PathBuf;
use std::sync::Arc;

use glide_player::application::port::EngineEvent;
use glide_player::config;
use glide_player::error::{Error, Result};
use glide_player::infrastructure::analytics::DEFAULT_ANALYTICS_CAPACITY;
use glide_player::infrastructure::{
    AnalyticsCollector, RecordingEngine, RecordingEnvironment, RecordingNavigator,
};
use glide_player::ui::{runtime, ControlSurface, MediaSource, Ports, SurfaceHandle};
use iced_core::{Point, Size};

const VIEWPORT: Size = Size::new(1280.0, 720.0);
const DEFAULT_DURATION_SECS: u64 = 30;

struct Args {
    config: Option<PathBuf>,
    duration_secs: u64,
    resume_secs: Option<f64>,
}

fn parse_args() -> std::result::Result<Args, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    Ok(Args {
        config: args.opt_value_from_str("--config")?,
        duration_secs: args
            .opt_value_from_str("--duration")?
            .unwrap_or(DEFAULT_DURATION_SECS),
        resume_secs: args.opt_value_from_str("--resume")?,
    })
}

/// Vertical swipe from `from` moving `dy` pixels (negative is up).
fn swipe(handle: &SurfaceHandle, from: Point, dy: f32) {
    handle.pointer_down(from);
    for step in 1..=4 {
        #[allow(clippy::cast_precision_loss)]
        let y = from.y + dy * step as f32 / 4.0;
        handle.pointer_moved(Point::new(from.x, y));
    }
    handle.pointer_up(Point::new(from.x, from.y + dy));
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args().map_err(|e| Error::Config(e.to_string()))?;
    let config = match &args.config {
        Some(path) => config::load_from_path(path)?,
        None => config::load()?,
    };
    let settings = config.settings();
    let duration_ms = args.duration_secs.saturating_mul(1000);

    let (handle, receiver) = SurfaceHandle::channel();
    let events = handle.clone();
    let engine = RecordingEngine::responding(
        Arc::new(move |event| events.engine_event(event)),
        duration_ms,
    );
    let environment = RecordingEnvironment::default();
    let navigator = RecordingNavigator::default();
    let (collector, analytics) = AnalyticsCollector::new(DEFAULT_ANALYTICS_CAPACITY);

    let surface = ControlSurface::mount(
        MediaSource {
            uri: "demo://big-buck-bunny.mp4".to_string(),
            content_id: "big-buck-bunny".to_string(),
            resume_position_secs: args.resume_secs,
        },
        Ports {
            engine: Box::new(engine.clone()),
            environment: Box::new(environment.clone()),
            analytics: Box::new(analytics),
            navigator: Box::new(navigator.clone()),
        },
        settings,
    );
    let driver = tokio::spawn(runtime::run(surface, receiver));

    handle.resize(VIEWPORT);
    // Hide the chrome so swipes are claimed
    handle.tap_at(Point::new(VIEWPORT.width / 2.0, VIEWPORT.height / 2.0));
    swipe(&handle, Point::new(VIEWPORT.width * 0.8, 500.0), -180.0);
    swipe(&handle, Point::new(VIEWPORT.width * 0.2, 300.0), 240.0);
    handle.cycle_aspect();
    handle.cycle_rate();
    handle.fast_forward();
    handle.pause();
    handle.play();
    handle.engine_event(EngineEvent::Status {
        position_ms: duration_ms,
        is_buffering: false,
        did_just_finish: true,
    });

    let surface = driver
        .await
        .map_err(|e| Error::Io(format!("driver task failed: {e}")))?;

    let session = surface.session();
    println!("content:      {}", surface.content_id());
    println!(
        "position:     {:.1}s / {:.1}s",
        session.position_secs(),
        session.duration_secs()
    );
    println!("volume:       {:.2}", session.volume().value());
    println!("brightness:   {:.2}", surface.brightness().value());
    println!("rate:         {}", session.rate().label());
    println!("aspect:       {}", surface.aspect().label());
    println!("left screen:  {}", navigator.back_count() > 0);
    println!("engine calls: {}", engine.calls().len());
    println!("display calls: {}", environment.calls().len());
    for event in collector.drain() {
        println!(
            "analytics:    {:?} {:.1}s at {}",
            event.kind,
            event.seconds_watched,
            event.at.to_rfc3339()
        );
    }
    Ok(())
}
