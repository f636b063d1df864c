//! Cadence Action Scheduler
//!
//! Time-based actions advanced once per tick on a single logical clock.
//!
//! # Features
//!
//! - **Actions**: move, rotate, scale, fade, face toggles, and one-shot
//!   callbacks, each with a delay, a duration, and an easing curve
//! - **Groups**: up to 30 groups per scheduler; a running *blocking* action
//!   holds back later actions that share one of its groups
//! - **Reversal**: any started action can be played back from where it is
//! - **Weak targets**: actions never keep their entity alive; dropping the
//!   entity ends the action quietly

pub mod action;
pub mod callback;
pub mod config;
pub mod easing;
pub mod error;
pub mod face;
pub mod fade;
pub mod scheduler;
pub mod transform;

pub use action::{group_bit, Action, ActionKind, ActionParams, ActionState, MAX_GROUP};
pub use callback::{Deferred, KeyStroke};
pub use config::SchedulerConfig;
pub use easing::{ease, Easing};
pub use error::{Result, SchedulerError};
pub use face::{DisplayFace, SetFaceColor};
pub use fade::Fade;
pub use scheduler::{ActionId, ActionScheduler, TickReport};
pub use transform::{Move, Rotate, Scale};
