//! Opacity fades

use crate::action::{Action, ActionKind, ActionParams, ActionState};
use cadence_core::Fadeable;
use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

/// Interpolate a target's opacity and its linked secondary visual
#[derive(Debug)]
pub struct Fade {
    state: ActionState,
    target: Weak<RefCell<dyn Fadeable>>,
    start: f32,
    end: f32,
}

impl Fade {
    /// Fade from the target's current opacity to `alpha`
    pub fn to<T: Fadeable + 'static>(
        target: &Rc<RefCell<T>>,
        alpha: f32,
        params: ActionParams,
    ) -> Self {
        let start = target.borrow().opacity();
        Self::between(target, start, alpha, params)
    }

    pub fn between<T: Fadeable + 'static>(
        target: &Rc<RefCell<T>>,
        start: f32,
        end: f32,
        params: ActionParams,
    ) -> Self {
        let weak: Weak<RefCell<T>> = Rc::downgrade(target);
        let target: Weak<RefCell<dyn Fadeable>> = weak;
        Self {
            state: ActionState::new(params),
            target,
            start,
            end,
        }
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }
}

impl Action for Fade {
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

        let alpha = self.start + (self.end - self.start) * self.state.progress;
        let mut target = target.borrow_mut();
        target.set_opacity(alpha);
        target.set_linked_opacity(alpha);

        !self.state.is_complete()
    }

    fn reverse(&mut self) {
        if self.state.is_delayed() {
            return;
        }

        mem::swap(&mut self.start, &mut self.end);
        self.state.progress = 1.0 - self.state.progress;
        self.state.reverse_time();
    }

    fn kind(&self) -> ActionKind {
        ActionKind::Fade
    }
}
