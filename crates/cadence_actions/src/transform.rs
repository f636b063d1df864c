//! Transform actions: move, rotate, and scale
//!
//! Each interpolates a `Vec3` from `start` to `end` with the action's eased
//! progress and writes it to the target every update.

use crate::action::{Action, ActionKind, ActionParams, ActionState};
use cadence_core::{Positionable, Rotatable, Scalable, Vec3};
use std::cell::RefCell;
use std::mem;
use std::rc::{Rc, Weak};

// ============================================================================
// Move
// ============================================================================

/// Interpolate a target's local position
#[derive(Debug)]
pub struct Move {
    state: ActionState,
    target: Weak<RefCell<dyn Positionable>>,
    start: Vec3,
    end: Vec3,
    /// Capture `start` from the target on the first update
    dynamic: bool,
}

impl Move {
    pub fn new<T: Positionable + 'static>(
        target: &Rc<RefCell<T>>,
        start: Vec3,
        end: Vec3,
        params: ActionParams,
    ) -> Self {
        let weak: Weak<RefCell<T>> = Rc::downgrade(target);
        let target: Weak<RefCell<dyn Positionable>> = weak;
        Self {
            state: ActionState::new(params),
            target,
            start,
            end,
            dynamic: false,
        }
    }

    /// Move from wherever the target is when the action starts
    ///
    /// The start position is read on the first update, after any delay and
    /// after earlier blocking actions have finished.
    pub fn dynamic<T: Positionable + 'static>(
        target: &Rc<RefCell<T>>,
        end: Vec3,
        params: ActionParams,
    ) -> Self {
        let start = target.borrow().local_position();
        let mut action = Self::new(target, start, end, params);
        action.dynamic = true;
        action
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }
}

impl Action for Move {
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

        if self.dynamic {
            self.start = target.local_position();
            self.dynamic = false;
        }

        target.set_local_position(self.start.lerp(self.end, self.state.progress));
        !self.state.is_complete()
    }

    fn reverse(&mut self) {
        if self.state.is_delayed() {
            return;
        }

        mem::swap(&mut self.start, &mut self.end);
        self.state.reverse_time();
    }

    fn kind(&self) -> ActionKind {
        ActionKind::Move
    }
}

// ============================================================================
// Rotate
// ============================================================================

/// Interpolate a target's Euler rotation (degrees) along the shortest arc
/// around z
#[derive(Debug)]
pub struct Rotate {
    state: ActionState,
    target: Weak<RefCell<dyn Rotatable>>,
    start: Vec3,
    end: Vec3,
}

impl Rotate {
    pub fn new<T: Rotatable + 'static>(
        target: &Rc<RefCell<T>>,
        start: Vec3,
        end: Vec3,
        params: ActionParams,
    ) -> Self {
        let weak: Weak<RefCell<T>> = Rc::downgrade(target);
        let target: Weak<RefCell<dyn Rotatable>> = weak;
        let mut action = Self {
            state: ActionState::new(params),
            target,
            start,
            end,
        };
        action.wrap_shortest();
        action
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// Shift one endpoint by a full turn so z travels at most 180 degrees
    fn wrap_shortest(&mut self) {
        let delta = self.start.z - self.end.z;
        if delta > 180.0 {
            self.start.z -= 360.0;
        }
        if delta < -180.0 {
            self.end.z -= 360.0;
        }
    }
}

impl Action for Rotate {
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

        // reversal swaps endpoints and can reintroduce a long arc
        self.wrap_shortest();

        target
            .borrow_mut()
            .set_local_rotation(self.start.lerp(self.end, self.state.progress));
        !self.state.is_complete()
    }

    fn reverse(&mut self) {
        if self.state.is_delayed() {
            return;
        }

        mem::swap(&mut self.start, &mut self.end);
        self.state.reverse_time();
    }

    fn kind(&self) -> ActionKind {
        ActionKind::Rotate
    }
}

// ============================================================================
// Scale
// ============================================================================

/// Interpolate a target's local scale
#[derive(Debug)]
pub struct Scale {
    state: ActionState,
    target: Weak<RefCell<dyn Scalable>>,
    start: Vec3,
    end: Vec3,
}

impl Scale {
    pub fn new<T: Scalable + 'static>(
        target: &Rc<RefCell<T>>,
        start: Vec3,
        end: Vec3,
        params: ActionParams,
    ) -> Self {
        let weak: Weak<RefCell<T>> = Rc::downgrade(target);
        let target: Weak<RefCell<dyn Scalable>> = weak;
        Self {
            state: ActionState::new(params),
            target,
            start,
            end,
        }
    }

    pub fn start(&self) -> Vec3 {
        self.start
    }

    pub fn end(&self) -> Vec3 {
        self.end
    }
}

impl Action for Scale {
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

        target
            .borrow_mut()
            .set_local_scale(self.start.lerp(self.end, self.state.progress));
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
        ActionKind::Scale
    }
}
