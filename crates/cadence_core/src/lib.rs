//! Cadence Core
//!
//! Host-side vocabulary shared by the action scheduler and the application
//! that owns the animated entities:
//!
//! - **Geometry**: `Vec3` and `Color`
//! - **Input**: platform-agnostic `KeyCode`
//! - **Targets**: the capability traits an entity implements to be driven by
//!   actions, plus the `Shared` handle alias
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Entity, Positionable, Vec3};
//!
//! let card = Entity::shared();
//! card.borrow_mut().set_local_position(Vec3::new(1.0, 2.0, 0.0));
//! assert_eq!(card.borrow().local_position(), Vec3::new(1.0, 2.0, 0.0));
//! ```

pub mod entity;
pub mod events;
pub mod geometry;
pub mod target;

pub use entity::Entity;
pub use events::KeyCode;
pub use geometry::{Color, Vec3};
pub use target::{FaceTogglable, Fadeable, Positionable, Rotatable, Scalable, Shared};
