//! Ball Drop - click to spawn balls that bounce off hard edges and fall through soft ones
//!
//! Core modules:
//! - `sim`: Simulation core (kinematics, boundary resolution, population update)
//! - `controller`: Frame loop glue between the simulation and the host
//! - `renderer`: Circle tessellation and the WebGPU pipeline
//! - `platform`: Host collaborator traits (scheduling, spawn input)
//! - `settings`: Startup configuration

pub mod controller;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use controller::BallController;
pub use error::SimError;
pub use settings::{Settings, SettingsError};

/// Default configuration constants
pub mod consts {
    use glam::DVec2;

    /// Downward acceleration (canvas y grows downward)
    pub const GRAVITY: DVec2 = DVec2::new(0.0, 9.8);

    /// Ball defaults
    pub const BALL_RADIUS: f64 = 3.0;
    pub const MAX_VELOCITY_PER_DIMENSION: f64 = 50.0;

    /// Circle tessellation for ball outlines
    pub const BALL_SEGMENTS: u32 = 24;
    /// Width of ball outlines and hard edge lines (pixels)
    pub const STROKE_WIDTH: f32 = 1.0;
}
