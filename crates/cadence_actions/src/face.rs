//! Face toggles for two-sided entities
//!
//! [`DisplayFace`] sweeps the face alpha and swaps the face color once the
//! sweep is done; [`SetFaceColor`] assigns a color once and finishes.

use crate::action::{Action, ActionKind, ActionParams, ActionState};
use cadence_core::{Color, FaceTogglable};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Show or hide an entity's face
///
/// Hiding fades the face alpha from 1 to 0 and then tints the face with
/// `color`; showing fades it from 0 to 1 and then restores a white face.
#[derive(Debug)]
pub struct DisplayFace {
    state: ActionState,
    target: Weak<RefCell<dyn FaceTogglable>>,
    show_face: bool,
    color: Color,
}

impl DisplayFace {
    pub fn new<T: FaceTogglable + 'static>(
        target: &Rc<RefCell<T>>,
        show_face: bool,
        color: Color,
        params: ActionParams,
    ) -> Self {
        let weak: Weak<RefCell<T>> = Rc::downgrade(target);
        let target: Weak<RefCell<dyn FaceTogglable>> = weak;
        Self {
            state: ActionState::new(params),
            target,
            show_face,
            color,
        }
    }

    pub fn shows_face(&self) -> bool {
        self.show_face
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Action for DisplayFace {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn update(&mut self, _dt: f32) -> bool {
        let Some(target) = self.target.upgrade() else {
            return false;
        };
        let mut target = target.borrow_mut();
        let progress = self.state.progress;
        let done = self.state.is_complete();

        if self.show_face {
            target.set_face_alpha(progress);
            if done {
                target.set_face_color(Color::WHITE);
            }
        } else {
            target.set_face_alpha(1.0 - progress);
            if done {
                target.set_face_color(self.color);
            }
        }

        !done
    }

    fn reverse(&mut self) {
        if self.state.is_delayed() {
            return;
        }

        self.show_face = !self.show_face;
        self.state.reverse_time();
    }

    fn kind(&self) -> ActionKind {
        ActionKind::DisplayFace
    }
}

/// Assign a face color once
///
/// Always finishes on its first update, whatever its duration.
#[derive(Debug)]
pub struct SetFaceColor {
    state: ActionState,
    target: Weak<RefCell<dyn FaceTogglable>>,
    color: Color,
}

impl SetFaceColor {
    pub fn new<T: FaceTogglable + 'static>(
        target: &Rc<RefCell<T>>,
        color: Color,
        params: ActionParams,
    ) -> Self {
        let weak: Weak<RefCell<T>> = Rc::downgrade(target);
        let target: Weak<RefCell<dyn FaceTogglable>> = weak;
        Self {
            state: ActionState::new(params),
            target,
            color,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

impl Action for SetFaceColor {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn update(&mut self, _dt: f32) -> bool {
        if let Some(target) = self.target.upgrade() {
            target.borrow_mut().set_face_color(self.color);
        }
        false
    }

    fn kind(&self) -> ActionKind {
        ActionKind::SetFaceColor
    }
}
