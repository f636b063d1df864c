//! Reference entity
//!
//! A plain transform + appearance record implementing every capability
//! trait. Hosts with their own scene graph implement the traits on their
//! node type instead; this one backs tests and headless tools.

use crate::geometry::{Color, Vec3};
use crate::target::{FaceTogglable, Fadeable, Positionable, Rotatable, Scalable, Shared};
use std::cell::RefCell;
use std::rc::Rc;

/// An animatable entity with a body and an optional text label
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub position: Vec3,
    /// Euler angles in degrees
    pub rotation: Vec3,
    pub scale: Vec3,
    pub opacity: f32,
    /// Opacity of the attached label; `None` when the entity has no label
    pub label_opacity: Option<f32>,
    pub face_color: Color,
    pub face_alpha: f32,
}

impl Entity {
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
            opacity: 1.0,
            label_opacity: None,
            face_color: Color::WHITE,
            face_alpha: 1.0,
        }
    }

    /// Create a default entity already wrapped in a shared cell
    pub fn shared() -> Shared<Entity> {
        Rc::new(RefCell::new(Self::new()))
    }

    /// Wrap this entity in a shared cell
    pub fn into_shared(self) -> Shared<Entity> {
        Rc::new(RefCell::new(self))
    }

    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Attach a label whose opacity follows the body's fades
    pub fn with_label(mut self) -> Self {
        self.label_opacity = Some(self.opacity);
        self
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl Positionable for Entity {
    fn local_position(&self) -> Vec3 {
        self.position
    }

    fn set_local_position(&mut self, position: Vec3) {
        self.position = position;
    }
}

impl Rotatable for Entity {
    fn local_rotation(&self) -> Vec3 {
        self.rotation
    }

    fn set_local_rotation(&mut self, rotation: Vec3) {
        self.rotation = rotation;
    }
}

impl Scalable for Entity {
    fn local_scale(&self) -> Vec3 {
        self.scale
    }

    fn set_local_scale(&mut self, scale: Vec3) {
        self.scale = scale;
    }
}

impl Fadeable for Entity {
    fn opacity(&self) -> f32 {
        self.opacity
    }

    fn set_opacity(&mut self, alpha: f32) {
        self.opacity = alpha;
    }

    fn set_linked_opacity(&mut self, alpha: f32) {
        if let Some(label) = self.label_opacity.as_mut() {
            *label = alpha;
        }
    }
}

impl FaceTogglable for Entity {
    fn face_color(&self) -> Color {
        self.face_color
    }

    fn set_face_color(&mut self, color: Color) {
        self.face_color = color;
    }

    fn face_alpha(&self) -> f32 {
        self.face_alpha
    }

    fn set_face_alpha(&mut self, alpha: f32) {
        self.face_alpha = alpha;
    }
}
