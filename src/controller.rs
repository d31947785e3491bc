//! Frame loop glue
//!
//! Owns the live ball population and connects it to the host: the host feeds
//! timestamps and spawn points in, and gets draw calls and frame requests out.

use glam::DVec2;

use crate::error::SimError;
use crate::platform::{FrameScheduler, SpawnSource};
use crate::renderer::RenderSurface;
use crate::settings::Settings;
use crate::sim::{Ball, BallSpawner, TickReport, update_positions};

/// Owns the balls and advances them once per host frame
#[derive(Debug)]
pub struct BallController {
    settings: Settings,
    balls: Vec<Ball>,
    spawner: BallSpawner,
    /// Host timestamp of the previous frame (ms)
    last_tick_ms: f64,
    last_report: TickReport,
}

impl BallController {
    /// Create a controller whose first frame measures time from `start_ms`
    ///
    /// Fails if the settings are unusable; the simulation must not start then.
    pub fn new(settings: Settings, seed: u64, start_ms: f64) -> Result<Self, SimError> {
        settings.validate()?;
        log::info!(
            "Controller ready: canvas {}x{}, gravity {}, seed {}",
            settings.bounds.width(),
            settings.bounds.height(),
            settings.gravity,
            seed
        );

        let spawner = BallSpawner::new(
            seed,
            settings.ball_radius,
            settings.max_velocity_per_dimension,
        );
        Ok(Self {
            settings,
            balls: Vec::new(),
            spawner,
            last_tick_ms: start_ms,
            last_report: TickReport::default(),
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Live balls in spawn order
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn last_report(&self) -> TickReport {
        self.last_report
    }

    /// Spawn a ball with a random velocity at a clicked point
    pub fn add_ball_on_click(&mut self, pos: DVec2) {
        let ball = self.spawner.create_at(pos.x, pos.y);
        log::debug!("Spawned ball at {} with velocity {}", ball.pos, ball.vel);
        self.balls.push(ball);
    }

    /// Append a ball with a chosen velocity
    pub fn add_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Spawn a ball for every point the source has queued; returns how many
    pub fn drain_spawns(&mut self, source: &mut impl SpawnSource) -> usize {
        let mut spawned = 0;
        while let Some(pos) = source.next_spawn() {
            self.add_ball_on_click(pos);
            spawned += 1;
        }
        spawned
    }

    /// Move every ball under the configured gravity and drop the ones that fell off
    pub fn update_positions(
        &self,
        elapsed: f64,
        balls: Vec<Ball>,
    ) -> Result<(Vec<Ball>, TickReport), SimError> {
        update_positions(elapsed, balls, self.settings.gravity, &self.settings.bounds)
    }

    /// Ask the host for the first frame
    pub fn animate(&self, scheduler: &mut impl FrameScheduler) {
        scheduler.request_next_tick();
    }

    /// Run one frame at host time `now_ms`
    ///
    /// Simulates the wall-clock time since the previous frame, draws the
    /// survivors, and requests the next frame unless `single` is set. On error
    /// the population is left as it was and no further frame is requested.
    pub fn frame(
        &mut self,
        now_ms: f64,
        surface: &mut impl RenderSurface,
        scheduler: &mut impl FrameScheduler,
        single: bool,
    ) -> Result<TickReport, SimError> {
        let elapsed = (now_ms - self.last_tick_ms) / 1000.0;
        self.last_tick_ms = now_ms;

        let (balls, report) = match self.update_positions(elapsed, self.balls.clone()) {
            Ok(result) => result,
            Err(e) => {
                log::error!("Tick aborted: {}", e);
                return Err(e);
            }
        };
        if report.removed > 0 {
            log::debug!("{} ball(s) fell off the canvas", report.removed);
        }
        log::trace!(
            "Tick {:.4}s: {} alive, {} removed",
            report.elapsed,
            report.survivors,
            report.removed
        );
        self.balls = balls;
        self.last_report = report;

        surface.clear(&self.settings.bounds);
        for ball in &self.balls {
            surface.draw_ball(ball);
        }

        if !single {
            scheduler.request_next_tick();
        }
        Ok(report)
    }
}
