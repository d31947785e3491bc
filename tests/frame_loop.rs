//! End-to-end frame loop tests through the public API

use ball_drop::platform::{FrameRequests, FrameScheduler, SpawnQueue};
use ball_drop::renderer::RenderSurface;
use ball_drop::sim::{Ball, Boundary, CanvasBounds};
use ball_drop::{BallController, Settings, SimError};
use glam::DVec2;

/// Records every draw call
#[derive(Default)]
struct RecordingSurface {
    clears: usize,
    drawn: Vec<Ball>,
}

impl RenderSurface for RecordingSurface {
    fn clear(&mut self, _bounds: &CanvasBounds) {
        self.clears += 1;
        self.drawn.clear();
    }

    fn draw_ball(&mut self, ball: &Ball) {
        self.drawn.push(*ball);
    }
}

/// Counts requests without a host loop
#[derive(Default)]
struct CountingScheduler {
    requests: u32,
}

impl FrameScheduler for CountingScheduler {
    fn request_next_tick(&mut self) {
        self.requests += 1;
    }
}

/// Closed box without gravity, so trajectories are straight lines
fn walled_settings() -> Settings {
    Settings {
        gravity: DVec2::ZERO,
        bounds: CanvasBounds {
            top: Boundary::hard(0.0),
            right: Boundary::hard(300.0),
            bottom: Boundary::hard(300.0),
            left: Boundary::hard(0.0),
        },
        seed: Some(99),
        ..Settings::default()
    }
}

#[test]
fn test_survivors_are_drawn_each_frame() {
    let mut controller = BallController::new(Settings::default(), 3, 0.0).unwrap();
    let mut spawns = SpawnQueue::new();
    spawns.push(DVec2::new(100.0, 100.0));
    spawns.push(DVec2::new(200.0, 100.0));
    controller.drain_spawns(&mut spawns);

    let mut surface = RecordingSurface::default();
    let mut scheduler = CountingScheduler::default();
    controller.frame(16.0, &mut surface, &mut scheduler, false).unwrap();

    assert_eq!(surface.clears, 1);
    assert_eq!(surface.drawn, controller.balls());
    assert_eq!(scheduler.requests, 1);
}

#[test]
fn test_hard_walls_keep_every_ball() {
    let mut controller = BallController::new(walled_settings(), 99, 0.0).unwrap();
    let mut spawns = SpawnQueue::new();
    for i in 0..20 {
        spawns.push(DVec2::new(15.0 * i as f64 + 5.0, 150.0));
    }
    controller.drain_spawns(&mut spawns);

    let mut surface = RecordingSurface::default();
    let mut frames = FrameRequests::new();
    controller.animate(&mut frames);

    let mut now = 0.0;
    let mut ticks = 0;
    // Ten simulated seconds, including one long stall
    while frames.take() && ticks < 600 {
        now += if ticks == 300 { 2500.0 } else { 1000.0 / 60.0 };
        ticks += 1;
        controller.frame(now, &mut surface, &mut frames, false).unwrap();
    }

    assert_eq!(controller.balls().len(), 20);
    for ball in controller.balls() {
        assert!(walled_settings().bounds.contains(ball.pos));
    }
}

#[test]
fn test_open_floor_drains_population() {
    let settings = Settings {
        gravity: DVec2::new(0.0, 200.0),
        bounds: CanvasBounds {
            top: Boundary::hard(0.0),
            right: Boundary::hard(300.0),
            bottom: Boundary::soft(300.0),
            left: Boundary::hard(0.0),
        },
        ..Settings::default()
    };
    let mut controller = BallController::new(settings, 5, 0.0).unwrap();
    for x in [50.0, 150.0, 250.0] {
        controller.add_ball_on_click(DVec2::new(x, 10.0));
    }

    let mut surface = RecordingSurface::default();
    let mut scheduler = CountingScheduler::default();
    let mut now = 0.0;
    for _ in 0..600 {
        now += 1000.0 / 60.0;
        controller.frame(now, &mut surface, &mut scheduler, true).unwrap();
    }

    assert!(controller.balls().is_empty());
    assert!(surface.drawn.is_empty());
    assert_eq!(scheduler.requests, 0);
}

#[test]
fn test_tampered_ball_is_reported() {
    let mut controller = BallController::new(walled_settings(), 1, 0.0).unwrap();
    controller.add_ball(Ball::new(DVec2::new(150.0, 320.0), DVec2::new(0.0, -5.0), 3.0));

    let mut surface = RecordingSurface::default();
    let mut scheduler = CountingScheduler::default();
    let err = controller
        .frame(0.0, &mut surface, &mut scheduler, false)
        .unwrap_err();

    assert!(matches!(err, SimError::InconsistentState { .. }));
    assert_eq!(surface.clears, 0);
    assert_eq!(scheduler.requests, 0);
}

#[test]
fn test_long_stall_between_hard_walls() {
    // All edges hard with the default gravity: the ball keeps falling through the stall
    let settings = Settings {
        bounds: walled_settings().bounds,
        ..Settings::default()
    };
    let bounds = settings.bounds;

    for stall_hours in [12.0, 24.0] {
        let mut controller = BallController::new(settings.clone(), 3, 0.0).unwrap();
        controller.add_ball(Ball::new(DVec2::new(150.0, 150.0), DVec2::new(0.0, 5.0), 3.0));

        let mut surface = RecordingSurface::default();
        let mut scheduler = CountingScheduler::default();
        let mut now = stall_hours * 3600.0 * 1000.0;
        controller.frame(now, &mut surface, &mut scheduler, true).unwrap();
        assert!(bounds.contains(controller.balls()[0].pos));

        // Regular frames afterwards still resolve
        for _ in 0..10 {
            now += 1000.0 / 60.0;
            controller.frame(now, &mut surface, &mut scheduler, true).unwrap();
        }
        assert_eq!(surface.drawn.len(), 1);
        assert!(bounds.contains(controller.balls()[0].pos));
    }
}
