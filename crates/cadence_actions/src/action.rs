//! Action timing, grouping, and the common action interface
//!
//! Every action carries an [`ActionState`]: a delay that must drain before
//! the action starts, a duration over which its eased progress runs from 0
//! to 1, and the group/blocking data the scheduler uses to gate later
//! actions. Concrete actions implement [`Action`] to turn that progress into
//! a mutation of their target.

use crate::easing::{ease, Easing};
use std::fmt;

/// Highest usable group number
pub const MAX_GROUP: u32 = 30;

/// Options shared by every action constructor
///
/// ```rust
/// use cadence_actions::{ActionParams, Easing};
///
/// let params = ActionParams::new(0.5)
///     .delay(0.25)
///     .group(2)
///     .easing(Easing::Bounce)
///     .blocking(true);
/// assert_eq!(params.duration, 0.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ActionParams {
    /// Seconds the action runs for once started
    pub duration: f32,
    /// Seconds to wait before starting
    pub delay: f32,
    /// Group number in `1..=30`; `0` means no group
    pub group: u32,
    pub easing: Easing,
    /// Block later actions sharing a group while running
    pub blocking: bool,
}

impl ActionParams {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            ..Default::default()
        }
    }

    /// Parameters for an action that completes on its first update
    pub fn instant() -> Self {
        Self::default()
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn group(mut self, group: u32) -> Self {
        self.group = group;
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }
}

/// Timing and grouping state shared by every action
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActionState {
    /// Time left before the action starts
    pub delay: f32,
    /// Time since the action started
    pub elapsed: f32,
    pub duration: f32,
    /// Eased completion in `[0, 1]`
    pub progress: f32,
    pub blocking: bool,
    /// Group bitmask; bit `g - 1` is set for group `g`
    pub groups: u32,
    pub easing: Easing,
}

impl ActionState {
    pub fn new(params: ActionParams) -> Self {
        let mut state = Self {
            delay: params.delay,
            duration: params.duration,
            blocking: params.blocking,
            easing: params.easing,
            ..Default::default()
        };
        state.add_to_group(params.group);
        state
    }

    /// Advance the clock by `dt`
    ///
    /// Returns `false` while the delay has not drained yet. Once it has, the
    /// overshoot is carried into `elapsed` and `progress` is recomputed.
    pub fn advance_time(&mut self, dt: f32) -> bool {
        if self.delay > 0.0 {
            self.delay -= dt;
            if self.delay > 0.0 {
                return false;
            }

            // delay is <= 0 here: subtracting it adds the overshoot
            self.elapsed -= self.delay;
            self.delay = 0.0;
        } else {
            self.elapsed += dt;
        }

        let raw = if self.duration <= 0.0 || self.elapsed >= self.duration {
            self.elapsed = self.duration.max(0.0);
            1.0
        } else {
            self.elapsed / self.duration
        };

        self.progress = ease(raw, self.easing);
        true
    }

    /// Flip the elapsed time so the action plays back from where it is
    ///
    /// No-op while the action is still delayed.
    pub fn reverse_time(&mut self) {
        if self.is_delayed() {
            return;
        }

        self.elapsed = self.duration - self.elapsed;
        let raw = if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        };
        self.progress = ease(raw, self.easing);
    }

    /// Whether the start delay has not drained yet
    pub fn is_delayed(&self) -> bool {
        self.delay > 0.0
    }

    /// Whether the eased progress has reached the end
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Add this action to group `group` (1..=30); other values are ignored
    pub fn add_to_group(&mut self, group: u32) {
        if let Some(bit) = group_bit(group) {
            self.groups |= bit;
        }
    }

    /// Whether this action belongs to group `group`
    pub fn is_in_group(&self, group: u32) -> bool {
        group_bit(group).is_some_and(|bit| self.groups & bit != 0)
    }

    /// Whether this action shares any group with `mask`
    pub fn is_in_group_set(&self, mask: u32) -> bool {
        self.groups & mask != 0
    }
}

/// Bitmask for a group number, `None` outside `1..=30`
pub fn group_bit(group: u32) -> Option<u32> {
    (1..=MAX_GROUP)
        .contains(&group)
        .then(|| 1 << (group - 1))
}

/// What an action does, for logging and inspection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Rotate,
    Scale,
    Fade,
    DisplayFace,
    SetFaceColor,
    KeyStroke,
    Deferred,
    /// A host-defined action
    Custom,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Move => "move",
            ActionKind::Rotate => "rotate",
            ActionKind::Scale => "scale",
            ActionKind::Fade => "fade",
            ActionKind::DisplayFace => "display_face",
            ActionKind::SetFaceColor => "set_face_color",
            ActionKind::KeyStroke => "key_stroke",
            ActionKind::Deferred => "deferred",
            ActionKind::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// A scheduled unit of work
///
/// The scheduler calls [`ActionState::advance_time`] on [`Action::state_mut`]
/// and then [`Action::update`] once the action is eligible. Returning
/// `false` from `update` ends the action; the scheduler removes it.
pub trait Action: fmt::Debug {
    fn state(&self) -> &ActionState;

    fn state_mut(&mut self) -> &mut ActionState;

    /// Apply the current progress to the target
    ///
    /// Returns `true` while there is more to do.
    fn update(&mut self, _dt: f32) -> bool {
        !self.state().is_complete()
    }

    /// Play the action backwards from its current point
    fn reverse(&mut self) {
        self.state_mut().reverse_time();
    }

    fn kind(&self) -> ActionKind {
        ActionKind::Custom
    }

    /// Builder: wait `delay` seconds before starting
    fn with_delay(mut self, delay: f32) -> Self
    where
        Self: Sized,
    {
        self.state_mut().delay = delay;
        self
    }

    /// Builder: add to group `group`
    fn with_group(mut self, group: u32) -> Self
    where
        Self: Sized,
    {
        self.state_mut().add_to_group(group);
        self
    }

    /// Builder: set the easing curve
    fn with_easing(mut self, easing: Easing) -> Self
    where
        Self: Sized,
    {
        self.state_mut().easing = easing;
        self
    }

    /// Builder: block later actions in the same groups while running
    fn with_blocking(mut self, blocking: bool) -> Self
    where
        Self: Sized,
    {
        self.state_mut().blocking = blocking;
        self
    }
}
