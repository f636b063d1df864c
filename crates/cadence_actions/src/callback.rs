//! Callback actions
//!
//! Both kinds fire exactly once on their first eligible update and then
//! finish. Their delay still applies, and they take part in group blocking
//! like any other action, which makes them the way to run code "after the
//! previous animation in this group is done".
//!
//! Callbacks run inside [`ActionScheduler::tick`](crate::ActionScheduler::tick)
//! while the scheduler is mutably borrowed, so they must not reach back into
//! it (through an `Rc<RefCell<ActionScheduler>>` that would panic). Schedule
//! follow-up actions after `tick` returns, keyed off
//! [`TickReport::finished`](crate::TickReport::finished).

use crate::action::{Action, ActionKind, ActionParams, ActionState};
use cadence_core::KeyCode;
use std::fmt;

/// Callback receiving a scripted keystroke
pub type KeyCallback = Box<dyn FnMut(KeyCode)>;

/// Callback taking no arguments
pub type VoidCallback = Box<dyn FnMut()>;

/// Deliver a keystroke to a callback
pub struct KeyStroke {
    state: ActionState,
    key: KeyCode,
    callback: KeyCallback,
}

impl KeyStroke {
    pub fn new<F>(key: KeyCode, callback: F, params: ActionParams) -> Self
    where
        F: FnMut(KeyCode) + 'static,
    {
        Self {
            state: ActionState::new(params),
            key,
            callback: Box::new(callback),
        }
    }

    pub fn key(&self) -> KeyCode {
        self.key
    }
}

impl fmt::Debug for KeyStroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyStroke")
            .field("state", &self.state)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl Action for KeyStroke {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn update(&mut self, _dt: f32) -> bool {
        (self.callback)(self.key);
        false
    }

    fn kind(&self) -> ActionKind {
        ActionKind::KeyStroke
    }
}

/// Run a closure later
pub struct Deferred {
    state: ActionState,
    callback: VoidCallback,
}

impl Deferred {
    pub fn new<F>(callback: F, params: ActionParams) -> Self
    where
        F: FnMut() + 'static,
    {
        Self {
            state: ActionState::new(params),
            callback: Box::new(callback),
        }
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Action for Deferred {
    fn state(&self) -> &ActionState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ActionState {
        &mut self.state
    }

    fn update(&mut self, _dt: f32) -> bool {
        (self.callback)();
        false
    }

    fn kind(&self) -> ActionKind {
        ActionKind::Deferred
    }
}
