//! Target capability traits
//!
//! Actions never own the entities they animate. The host keeps each entity
//! in a [`Shared`] cell and hands the scheduler a reference; the scheduler
//! downgrades it to a `Weak` handle typed by the one capability the action
//! needs. Dropping the last strong reference cancels every action bound to
//! the entity on its next update.

use crate::geometry::{Color, Vec3};
use std::cell::RefCell;
use std::rc::Rc;

/// Strong, single-threaded handle the host keeps for an animated entity
pub type Shared<T> = Rc<RefCell<T>>;

/// Get/set a local offset
pub trait Positionable {
    fn local_position(&self) -> Vec3;
    fn set_local_position(&mut self, position: Vec3);
}

/// Get/set a local orientation as Euler angles in degrees
pub trait Rotatable {
    fn local_rotation(&self) -> Vec3;
    fn set_local_rotation(&mut self, rotation: Vec3);
}

/// Get/set a local scale
pub trait Scalable {
    fn local_scale(&self) -> Vec3;
    fn set_local_scale(&mut self, scale: Vec3);
}

/// Get/set opacity
///
/// Entities with a secondary visual (a text label, an icon) that must fade
/// together with the main body override [`Fadeable::set_linked_opacity`].
pub trait Fadeable {
    fn opacity(&self) -> f32;
    fn set_opacity(&mut self, alpha: f32);

    /// Opacity of the linked secondary visual, if any
    fn set_linked_opacity(&mut self, _alpha: f32) {}
}

/// A two-sided entity (a card) whose face can be shown or hidden
///
/// Hiding sweeps the face alpha down and tints the face; showing sweeps it
/// up and restores the plain face color.
pub trait FaceTogglable {
    fn face_color(&self) -> Color;
    fn set_face_color(&mut self, color: Color);
    fn face_alpha(&self) -> f32;
    fn set_face_alpha(&mut self, alpha: f32);
}
