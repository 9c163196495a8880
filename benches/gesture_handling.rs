// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the pointer hot path.
//!
//! Measures the performance of:
//! - Gesture interpretation alone (one vertical swipe)
//! - A full swipe through the control surface, overlays and adapters included

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use glide_player::config::SurfaceSettings;
use glide_player::infrastructure::{
    AnalyticsCollector, RecordingEngine, RecordingEnvironment, RecordingNavigator,
};
use glide_player::ui::gesture::{GestureContext, GestureInterpreter};
use glide_player::ui::{ControlSurface, MediaSource, Message, Ports};
use iced_core::{Point, Size};
use std::hint::black_box;
use std::time::Instant;

const VIEWPORT: Size = Size::new(1080.0, 1920.0);
const STEPS: usize = 60;

/// Pointer positions of one upward swipe on the right half.
fn swipe_path() -> Vec<Point> {
    (0..=STEPS)
        .map(|i| Point::new(800.0, 1500.0 - 15.0 * i as f32))
        .collect()
}

/// Benchmark the gesture interpreter on its own.
fn bench_interpreter(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_handling");
    let path = swipe_path();
    let ctx = GestureContext {
        controls_hidden: true,
        locked: false,
        viewport: VIEWPORT,
        brightness: 0.5,
        volume: 0.5,
    };

    group.bench_function("interpret_swipe", |b| {
        b.iter(|| {
            let mut gestures = GestureInterpreter::new(10.0);
            gestures.touch_start(path[0]);
            for point in &path[1..] {
                black_box(gestures.touch_move(*point, ctx));
            }
            black_box(gestures.touch_end(VIEWPORT));
        });
    });

    group.finish();
}

fn mounted_surface() -> ControlSurface {
    let mut surface = ControlSurface::mount(
        MediaSource {
            uri: "bench://clip".to_string(),
            content_id: "clip".to_string(),
            resume_position_secs: None,
        },
        Ports {
            engine: Box::new(RecordingEngine::default()),
            environment: Box::new(RecordingEnvironment::default()),
            analytics: Box::new(AnalyticsCollector::new(16).1),
            navigator: Box::new(RecordingNavigator::default()),
        },
        SurfaceSettings::default(),
    );
    let now = Instant::now();
    surface.handle(Message::ViewportResized(VIEWPORT), now);
    // Hide the chrome so the swipe is claimed
    surface.handle(Message::PointerDown(Point::new(10.0, 10.0)), now);
    surface.handle(Message::PointerUp(Point::new(10.0, 10.0)), now);
    surface
}

/// Benchmark a swipe routed through the whole control surface.
///
/// The surface is rebuilt per iteration so recorded calls do not pile up.
fn bench_surface_swipe(c: &mut Criterion) {
    let mut group = c.benchmark_group("gesture_handling");
    let path = swipe_path();

    group.bench_function("surface_swipe", |b| {
        b.iter_batched(
            mounted_surface,
            |mut surface| {
                let now = Instant::now();
                surface.handle(Message::PointerDown(path[0]), now);
                for point in &path[1..] {
                    surface.handle(Message::PointerMoved(*point), now);
                }
                surface.handle(Message::PointerUp(path[STEPS]), now);
                black_box(surface.session().volume());
                surface
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_interpreter, bench_surface_swipe);
criterion_main!(benches);
