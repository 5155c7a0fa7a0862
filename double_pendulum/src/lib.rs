//! Chaotic double pendulum ensemble: RK4 integration of several near-identical
//! pendulums, their fading tip trails, and the layout math the app draws with.

pub mod ensemble;
pub mod error;
pub mod layout;
pub mod physics;
pub mod resources;
pub mod trail;

pub use ensemble::{Arms, PendulumEnsemble, PENDULUM_COUNT};
pub use error::ConfigError;
pub use physics::{PendulumState, PhysicalParameters};
pub use trail::{TrailBuffer, TRAIL_MAX};
