//! Action scheduler
//!
//! Owns every live action and advances them once per tick. The live
//! sequence is ordered: each tick walks it front to back, and a running
//! blocking action holds back every *later* action that shares one of its
//! groups. Creation order therefore encodes priority.
//!
//! ```rust
//! use cadence_actions::{ActionParams, ActionScheduler};
//! use cadence_core::{Entity, Vec3};
//!
//! let card = Entity::shared();
//! let mut scheduler = ActionScheduler::new();
//!
//! // slide right, then (same group, blocking) slide up
//! let params = ActionParams::new(1.0).group(1).blocking(true);
//! scheduler.move_to(&card, Vec3::new(4.0, 0.0, 0.0), params);
//! scheduler.move_dynamic(&card, Vec3::new(4.0, 4.0, 0.0), params);
//!
//! scheduler.tick(0.5);
//! assert_eq!(card.borrow().position, Vec3::new(2.0, 0.0, 0.0));
//!
//! // the first finishes; the second starts from where it left off
//! scheduler.tick(0.5);
//! assert_eq!(card.borrow().position, Vec3::new(4.0, 2.0, 0.0));
//!
//! scheduler.tick(0.5);
//! assert_eq!(card.borrow().position, Vec3::new(4.0, 4.0, 0.0));
//! assert!(scheduler.is_empty());
//! ```

use crate::action::{Action, ActionParams, ActionState};
use crate::callback::{Deferred, KeyStroke};
use crate::config::SchedulerConfig;
use crate::error::{validate_time_scale, Result};
use crate::face::{DisplayFace, SetFaceColor};
use crate::fade::Fade;
use crate::transform::{Move, Rotate, Scale};
use cadence_core::{
    Color, FaceTogglable, Fadeable, KeyCode, Positionable, Rotatable, Scalable, Shared, Vec3,
};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Handle to a scheduled action
    ///
    /// Stays valid until the action finishes or is cancelled; lookups with a
    /// stale handle return `None`.
    pub struct ActionId;
}

/// What a single tick did
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    /// Actions whose update ran this tick (including ones that finished)
    pub advanced: usize,
    /// Actions skipped because an earlier blocking action shares a group
    pub blocked: usize,
    /// Actions still waiting out their delay
    pub delayed: usize,
    /// Actions that completed and were removed, in sequence order
    pub finished: SmallVec<[ActionId; 4]>,
}

impl TickReport {
    /// Whether `id` completed during this tick
    pub fn did_finish(&self, id: ActionId) -> bool {
        self.finished.contains(&id)
    }
}

/// Outcome of visiting one action during a tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Step {
    Blocked,
    Delayed,
    Running,
    Finished,
}

/// Advance one action against the blocking set built so far this tick
fn step(action: &mut dyn Action, dt: f32, blocking_set: &mut u32) -> Step {
    if action.state().is_in_group_set(*blocking_set) {
        return Step::Blocked;
    }

    if !action.state_mut().advance_time(dt) {
        return Step::Delayed;
    }

    if !action.update(dt) {
        return Step::Finished;
    }

    let state = action.state();
    if state.blocking {
        *blocking_set |= state.groups;
    }
    Step::Running
}

/// The scheduler that ticks all live actions
#[derive(Debug)]
pub struct ActionScheduler {
    actions: SlotMap<ActionId, Box<dyn Action>>,
    /// Live sequence; order is significant for blocking
    order: Vec<ActionId>,
    time_scale: f32,
    block_all: bool,
}

impl ActionScheduler {
    pub fn new() -> Self {
        Self {
            actions: SlotMap::with_key(),
            order: Vec::new(),
            time_scale: 1.0,
            block_all: false,
        }
    }

    /// Create a scheduler from validated settings
    pub fn with_config(config: &SchedulerConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            time_scale = config.time_scale,
            block_all = config.block_all,
            capacity = config.capacity,
            "scheduler configured"
        );
        Ok(Self {
            actions: SlotMap::with_capacity_and_key(config.capacity),
            order: Vec::with_capacity(config.capacity),
            time_scale: config.time_scale,
            block_all: config.block_all,
        })
    }

    // =========================================================================
    // Ticking
    // =========================================================================

    /// Advance every eligible action by `frame_dt` (scaled by the time scale)
    ///
    /// Finished actions are removed before this returns. Nothing advances
    /// while [`ActionScheduler::is_block_all`] is set. A NaN or infinite
    /// `frame_dt` counts as a zero-length frame.
    pub fn tick(&mut self, frame_dt: f32) -> TickReport {
        let mut report = TickReport::default();
        if self.block_all {
            return report;
        }

        let dt = if frame_dt.is_finite() {
            frame_dt * self.time_scale
        } else {
            tracing::warn!(frame_dt, "non-finite frame delta treated as zero");
            0.0
        };
        let mut blocking_set = 0u32;
        let mut write = 0;

        for read in 0..self.order.len() {
            let id = self.order[read];
            let outcome = match self.actions.get_mut(id) {
                Some(action) => step(action.as_mut(), dt, &mut blocking_set),
                None => Step::Finished,
            };

            match outcome {
                Step::Blocked => report.blocked += 1,
                Step::Delayed => report.delayed += 1,
                Step::Running => report.advanced += 1,
                Step::Finished => {
                    if let Some(action) = self.actions.remove(id) {
                        report.advanced += 1;
                        report.finished.push(id);
                        tracing::trace!(?id, kind = %action.kind(), "action finished");
                    }
                    continue;
                }
            }

            self.order[write] = id;
            write += 1;
        }

        self.order.truncate(write);
        report
    }

    /// Check if any actions are still live
    pub fn has_active_actions(&self) -> bool {
        !self.order.is_empty()
    }

    /// Get the number of live actions
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no actions are live
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // =========================================================================
    // Global controls
    // =========================================================================

    /// Hold (or release) every action; held ticks advance nothing
    pub fn set_block_all(&mut self, block: bool) {
        if self.block_all != block {
            tracing::debug!(block, "block all actions");
        }
        self.block_all = block;
    }

    pub fn is_block_all(&self) -> bool {
        self.block_all
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    /// Set the multiplier applied to frame deltas
    ///
    /// Rejects negative and non-finite values; `0.0` freezes time while still
    /// letting zero-duration and callback actions run.
    pub fn set_time_scale(&mut self, scale: f32) -> Result<()> {
        validate_time_scale(scale)?;
        self.time_scale = scale;
        Ok(())
    }

    /// Reverse every live action, in sequence order
    pub fn reverse_all(&mut self) {
        tracing::debug!(live = self.order.len(), "reversing all actions");
        for id in &self.order {
            if let Some(action) = self.actions.get_mut(*id) {
                action.reverse();
            }
        }
    }

    // =========================================================================
    // Handles
    // =========================================================================

    /// Append an action to the live sequence
    pub fn push<A: Action + 'static>(&mut self, action: A) -> ActionId {
        self.push_boxed(Box::new(action))
    }

    /// Append an already boxed action to the live sequence
    pub fn push_boxed(&mut self, action: Box<dyn Action>) -> ActionId {
        let kind = action.kind();
        let id = self.actions.insert(action);
        self.order.push(id);
        tracing::debug!(?id, %kind, live = self.order.len(), "action scheduled");
        id
    }

    pub fn contains(&self, id: ActionId) -> bool {
        self.actions.contains_key(id)
    }

    pub fn action(&self, id: ActionId) -> Option<&dyn Action> {
        self.actions.get(id).map(|action| action.as_ref())
    }

    pub fn action_mut(&mut self, id: ActionId) -> Option<&mut (dyn Action + 'static)> {
        self.actions.get_mut(id).map(|action| action.as_mut())
    }

    /// Timing and group state of a live action
    pub fn state(&self, id: ActionId) -> Option<&ActionState> {
        self.actions.get(id).map(|action| action.state())
    }

    /// Change whether a live action blocks later actions in its groups
    ///
    /// Returns `false` if the action is no longer live.
    pub fn set_blocking(&mut self, id: ActionId, blocking: bool) -> bool {
        match self.actions.get_mut(id) {
            Some(action) => {
                action.state_mut().blocking = blocking;
                true
            }
            None => false,
        }
    }

    pub fn is_blocking(&self, id: ActionId) -> Option<bool> {
        self.state(id).map(|state| state.blocking)
    }

    /// Add a live action to another group
    ///
    /// Returns `false` if the action is no longer live.
    pub fn add_to_group(&mut self, id: ActionId, group: u32) -> bool {
        match self.actions.get_mut(id) {
            Some(action) => {
                action.state_mut().add_to_group(group);
                true
            }
            None => false,
        }
    }

    /// Remove a live action without running it to completion
    pub fn cancel(&mut self, id: ActionId) -> Option<Box<dyn Action>> {
        let action = self.actions.remove(id)?;
        self.order.retain(|live| *live != id);
        tracing::debug!(?id, kind = %action.kind(), "action cancelled");
        Some(action)
    }

    /// Remove every live action
    pub fn clear(&mut self) {
        self.actions.clear();
        self.order.clear();
    }

    /// Live action handles in sequence order
    pub fn ids(&self) -> impl Iterator<Item = ActionId> + '_ {
        self.order.iter().copied()
    }

    // =========================================================================
    // Factories
    // =========================================================================

    /// Move `target` from its current position to `end`
    pub fn move_to<T: Positionable + 'static>(
        &mut self,
        target: &Shared<T>,
        end: Vec3,
        params: ActionParams,
    ) -> ActionId {
        let start = target.borrow().local_position();
        self.push(Move::new(target, start, end, params))
    }

    /// Move `target` from `start` to `end`
    pub fn move_between<T: Positionable + 'static>(
        &mut self,
        target: &Shared<T>,
        start: Vec3,
        end: Vec3,
        params: ActionParams,
    ) -> ActionId {
        self.push(Move::new(target, start, end, params))
    }

    /// Move `target` to `end`, starting from wherever it is when the action
    /// first runs
    pub fn move_dynamic<T: Positionable + 'static>(
        &mut self,
        target: &Shared<T>,
        end: Vec3,
        params: ActionParams,
    ) -> ActionId {
        self.push(Move::dynamic(target, end, params))
    }

    /// Rotate `target` around z from its current angle to `end_z` degrees
    pub fn rotate_to<T: Rotatable + 'static>(
        &mut self,
        target: &Shared<T>,
        end_z: f32,
        params: ActionParams,
    ) -> ActionId {
        let start = target.borrow().local_rotation();
        self.push(Rotate::new(target, start, start.with_z(end_z), params))
    }

    /// Rotate `target` from `start` to `end` (degrees)
    pub fn rotate_between<T: Rotatable + 'static>(
        &mut self,
        target: &Shared<T>,
        start: Vec3,
        end: Vec3,
        params: ActionParams,
    ) -> ActionId {
        self.push(Rotate::new(target, start, end, params))
    }

    /// Scale `target` from its current scale to `end`
    pub fn scale_to<T: Scalable + 'static>(
        &mut self,
        target: &Shared<T>,
        end: Vec3,
        params: ActionParams,
    ) -> ActionId {
        let start = target.borrow().local_scale();
        self.push(Scale::new(target, start, end, params))
    }

    /// Scale `target` from `start` to `end`
    pub fn scale_between<T: Scalable + 'static>(
        &mut self,
        target: &Shared<T>,
        start: Vec3,
        end: Vec3,
        params: ActionParams,
    ) -> ActionId {
        self.push(Scale::new(target, start, end, params))
    }

    /// Fade `target` (and its linked visual) from its current opacity to
    /// `alpha`
    pub fn fade_to<T: Fadeable + 'static>(
        &mut self,
        target: &Shared<T>,
        alpha: f32,
        params: ActionParams,
    ) -> ActionId {
        self.push(Fade::to(target, alpha, params))
    }

    /// Fade `target` from `start` to `end` opacity
    pub fn fade_between<T: Fadeable + 'static>(
        &mut self,
        target: &Shared<T>,
        start: f32,
        end: f32,
        params: ActionParams,
    ) -> ActionId {
        self.push(Fade::between(target, start, end, params))
    }

    /// Show or hide the face of `target`; hiding tints it with `color`
    pub fn display_face<T: FaceTogglable + 'static>(
        &mut self,
        target: &Shared<T>,
        show_face: bool,
        color: Color,
        params: ActionParams,
    ) -> ActionId {
        self.push(DisplayFace::new(target, show_face, color, params))
    }

    /// Set the face color of `target` once
    pub fn set_face_color<T: FaceTogglable + 'static>(
        &mut self,
        target: &Shared<T>,
        color: Color,
        params: ActionParams,
    ) -> ActionId {
        self.push(SetFaceColor::new(target, color, params))
    }

    /// Deliver `key` to `callback` once the action becomes eligible
    pub fn key_stroke<F>(&mut self, key: KeyCode, callback: F, params: ActionParams) -> ActionId
    where
        F: FnMut(KeyCode) + 'static,
    {
        self.push(KeyStroke::new(key, callback, params))
    }

    /// Run `callback` once the action becomes eligible
    pub fn defer<F>(&mut self, callback: F, params: ActionParams) -> ActionId
    where
        F: FnMut() + 'static,
    {
        self.push(Deferred::new(callback, params))
    }
}

impl Default for ActionScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use crate::error::SchedulerError;
    use cadence_core::Entity;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn x(v: f32) -> Vec3 {
        Vec3::new(v, 0.0, 0.0)
    }

    #[test]
    fn test_tick_removes_finished_actions() {
        let e = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        let id = scheduler.move_to(&e, x(10.0), ActionParams::new(1.0));

        let report = scheduler.tick(0.5);
        assert_eq!(report.advanced, 1);
        assert!(report.finished.is_empty());
        assert!(scheduler.contains(id));

        let report = scheduler.tick(0.5);
        assert!(report.did_finish(id));
        assert!(!scheduler.contains(id));
        assert!(scheduler.is_empty());
        assert_eq!(e.borrow().position, x(10.0));
    }

    #[test]
    fn test_time_scale_multiplies_dt() {
        let e = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        scheduler.set_time_scale(0.5).unwrap();
        scheduler.move_to(&e, x(10.0), ActionParams::new(1.0));

        scheduler.tick(1.0);
        assert_eq!(e.borrow().position, x(5.0));
    }

    #[test]
    fn test_invalid_time_scale_rejected() {
        let mut scheduler = ActionScheduler::new();

        for bad in [-0.5, f32::NAN, f32::INFINITY] {
            let err = scheduler.set_time_scale(bad).unwrap_err();
            assert!(matches!(err, SchedulerError::InvalidTimeScale(_)));
        }
        assert_eq!(scheduler.time_scale(), 1.0);
    }

    #[test]
    fn test_block_all_freezes_everything() {
        let e = Entity::shared();
        let fired = Rc::new(Cell::new(false));
        let flag = fired.clone();

        let mut scheduler = ActionScheduler::new();
        scheduler.move_to(&e, x(10.0), ActionParams::new(1.0));
        scheduler.defer(move || flag.set(true), ActionParams::instant());

        scheduler.set_block_all(true);
        assert!(scheduler.is_block_all());

        let report = scheduler.tick(5.0);
        assert_eq!(report, TickReport::default());
        assert_eq!(scheduler.len(), 2);
        assert_eq!(e.borrow().position, Vec3::ZERO);
        assert!(!fired.get());

        scheduler.set_block_all(false);
        scheduler.tick(0.5);
        assert!(fired.get());
        assert_eq!(e.borrow().position, x(5.0));
    }

    #[test]
    fn test_blocked_action_does_not_drain_delay() {
        let e = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        scheduler.move_to(&e, x(1.0), ActionParams::new(2.0).group(1).blocking(true));
        let waiting = scheduler.move_to(&e, x(1.0), ActionParams::new(1.0).group(1).delay(1.0));

        let report = scheduler.tick(1.0);
        assert_eq!(report.blocked, 1);
        assert_eq!(scheduler.state(waiting).unwrap().delay, 1.0);
    }

    #[test]
    fn test_ungrouped_actions_never_block() {
        let a = Entity::shared();
        let b = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        scheduler.move_to(&a, x(1.0), ActionParams::new(1.0).blocking(true));
        scheduler.move_to(&b, x(1.0), ActionParams::new(1.0));

        let report = scheduler.tick(0.5);
        assert_eq!(report.advanced, 2);
        assert_eq!(report.blocked, 0);
    }

    #[test]
    fn test_ungrouped_action_ignores_grouped_blocker() {
        let a = Entity::shared();
        let b = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        scheduler.move_to(&a, x(1.0), ActionParams::new(1.0).group(1).blocking(true));
        scheduler.move_to(&b, x(1.0), ActionParams::new(1.0));

        let report = scheduler.tick(0.5);
        assert_eq!(report.advanced, 2);
        assert_eq!(report.blocked, 0);
        assert_eq!(b.borrow().position, x(0.5));
    }

    #[test]
    fn test_non_finite_frame_delta_is_ignored() {
        let e = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        let id = scheduler.move_to(&e, x(10.0), ActionParams::new(1.0));

        for bad in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            scheduler.tick(bad);
            let state = scheduler.state(id).unwrap();
            assert_eq!(state.elapsed, 0.0);
            assert_eq!(state.progress, 0.0);
        }
        assert_eq!(e.borrow().position, Vec3::ZERO);

        scheduler.tick(0.5);
        assert_eq!(e.borrow().position, x(5.0));
        let report = scheduler.tick(0.5);
        assert!(report.did_finish(id));
        assert_eq!(e.borrow().position, x(10.0));
    }

    #[test]
    fn test_non_blocking_action_does_not_gate() {
        let a = Entity::shared();
        let b = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        scheduler.move_to(&a, x(1.0), ActionParams::new(1.0).group(2));
        scheduler.move_to(&b, x(1.0), ActionParams::new(1.0).group(2));

        let report = scheduler.tick(0.5);
        assert_eq!(report.advanced, 2);
    }

    #[test]
    fn test_blocking_only_shared_groups() {
        let a = Entity::shared();
        let b = Entity::shared();
        let c = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        scheduler.move_to(&a, x(1.0), ActionParams::new(1.0).group(1).blocking(true));
        let other_group = scheduler.move_to(&b, x(1.0), ActionParams::new(1.0).group(2));
        let same_group = scheduler.move_to(&c, x(1.0), ActionParams::new(1.0).group(1));
        // joining group 2 as well still leaves it blocked through group 1
        scheduler.add_to_group(same_group, 2);

        let report = scheduler.tick(0.5);
        assert_eq!(report.advanced, 2);
        assert_eq!(report.blocked, 1);
        assert_eq!(b.borrow().position, x(0.5));
        assert_eq!(c.borrow().position, Vec3::ZERO);
        assert!(scheduler.contains(other_group));
    }

    #[test]
    fn test_set_blocking_after_creation() {
        let a = Entity::shared();
        let b = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        let first = scheduler.move_to(&a, x(1.0), ActionParams::new(1.0).group(1));
        scheduler.move_to(&b, x(1.0), ActionParams::new(1.0).group(1));

        assert_eq!(scheduler.is_blocking(first), Some(false));
        assert!(scheduler.set_blocking(first, true));
        assert_eq!(scheduler.is_blocking(first), Some(true));

        let report = scheduler.tick(0.5);
        assert_eq!(report.blocked, 1);
        assert_eq!(b.borrow().position, Vec3::ZERO);
    }

    #[test]
    fn test_stale_handles() {
        let mut scheduler = ActionScheduler::new();
        let id = scheduler.defer(|| {}, ActionParams::instant());
        scheduler.tick(0.0);

        assert!(!scheduler.contains(id));
        assert!(scheduler.action(id).is_none());
        assert!(scheduler.action_mut(id).is_none());
        assert!(!scheduler.set_blocking(id, true));
        assert!(!scheduler.add_to_group(id, 1));
        assert_eq!(scheduler.is_blocking(id), None);
        assert!(scheduler.cancel(id).is_none());
    }

    #[test]
    fn test_removal_keeps_order_without_skipping() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let e = Entity::shared();
        let mut scheduler = ActionScheduler::new();

        let l = log.clone();
        scheduler.defer(move || l.borrow_mut().push(1), ActionParams::instant());
        let l = log.clone();
        scheduler.defer(move || l.borrow_mut().push(2), ActionParams::instant());
        let running = scheduler.move_to(&e, x(1.0), ActionParams::new(1.0));
        let l = log.clone();
        scheduler.defer(move || l.borrow_mut().push(3), ActionParams::instant());

        let report = scheduler.tick(0.25);
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
        assert_eq!(report.finished.len(), 3);
        assert_eq!(report.advanced, 4);
        assert_eq!(scheduler.ids().collect::<Vec<_>>(), vec![running]);
    }

    #[test]
    fn test_callbacks_finish_even_with_zero_dt() {
        let keys = Rc::new(RefCell::new(Vec::new()));
        let sink = keys.clone();
        let mut scheduler = ActionScheduler::new();
        let id = scheduler.key_stroke(
            KeyCode::ENTER,
            move |key| sink.borrow_mut().push(key),
            ActionParams::instant(),
        );

        let report = scheduler.tick(0.0);
        assert!(report.did_finish(id));
        assert_eq!(*keys.borrow(), vec![KeyCode::ENTER]);

        scheduler.tick(0.0);
        assert_eq!(keys.borrow().len(), 1);
    }

    #[test]
    fn test_key_stroke_honours_group_and_blocking() {
        let e = Entity::shared();
        let fired = Rc::new(Cell::new(0));
        let count = fired.clone();
        let mut scheduler = ActionScheduler::new();

        scheduler.move_to(&e, x(1.0), ActionParams::new(1.0).group(3).blocking(true));
        let stroke = scheduler.key_stroke(
            KeyCode::A,
            move |_| count.set(count.get() + 1),
            ActionParams::instant().group(3).blocking(true),
        );
        assert_eq!(scheduler.is_blocking(stroke), Some(true));

        scheduler.tick(0.4);
        assert_eq!(fired.get(), 0);
        scheduler.tick(0.4);
        assert_eq!(fired.get(), 0);

        // the move finishes and is removed first, so the stroke runs in the
        // same tick
        let report = scheduler.tick(0.4);
        assert!(report.did_finish(stroke));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_dropped_target_finishes_quietly() {
        let e = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        let id = scheduler.move_to(&e, x(3.0), ActionParams::new(10.0));
        scheduler.tick(1.0);

        drop(e);
        let report = scheduler.tick(1.0);
        assert!(report.did_finish(id));
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_reverse_all_in_order() {
        let e = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        let id = scheduler.move_to(&e, x(10.0), ActionParams::new(1.0));
        let delayed = scheduler.scale_to(&e, Vec3::splat(2.0), ActionParams::new(1.0).delay(5.0));

        scheduler.tick(0.25);
        scheduler.reverse_all();

        let state = scheduler.state(id).unwrap();
        assert!((state.elapsed - 0.75).abs() < 1e-6);
        // still delayed, so left alone
        assert_eq!(scheduler.state(delayed).unwrap().elapsed, 0.0);

        scheduler.tick(0.0);
        assert!(e.borrow().position.abs_diff_eq(x(2.5), 1e-5));
        scheduler.tick(0.75);
        assert_eq!(e.borrow().position, Vec3::ZERO);
    }

    #[test]
    fn test_rotate_to_keeps_other_axes() {
        let e = Entity::new()
            .with_rotation(Vec3::new(15.0, 30.0, 0.0))
            .into_shared();
        let mut scheduler = ActionScheduler::new();
        scheduler.rotate_to(&e, 90.0, ActionParams::new(1.0));

        scheduler.tick(1.0);
        assert_eq!(e.borrow().rotation, Vec3::new(15.0, 30.0, 90.0));
    }

    #[test]
    fn test_fade_and_face_factories() {
        let e = Entity::new().with_label().into_shared();
        let mut scheduler = ActionScheduler::new();
        scheduler.fade_to(&e, 0.0, ActionParams::new(1.0));
        scheduler.display_face(&e, false, Color::BLUE, ActionParams::instant());
        scheduler.set_face_color(&e, Color::RED, ActionParams::instant().delay(1.0));

        scheduler.tick(1.0);
        let entity = e.borrow();
        assert_eq!(entity.opacity, 0.0);
        assert_eq!(entity.label_opacity, Some(0.0));
        assert_eq!(entity.face_alpha, 0.0);
        assert_eq!(entity.face_color, Color::RED);
    }

    #[test]
    fn test_cancel_and_clear() {
        let e = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        let a = scheduler.move_to(&e, x(1.0), ActionParams::new(1.0));
        let b = scheduler.scale_to(&e, Vec3::splat(2.0), ActionParams::new(1.0));

        let cancelled = scheduler.cancel(a).unwrap();
        assert_eq!(cancelled.kind(), ActionKind::Move);
        assert_eq!(scheduler.ids().collect::<Vec<_>>(), vec![b]);

        scheduler.clear();
        assert!(scheduler.is_empty());
        assert!(!scheduler.has_active_actions());
    }

    #[test]
    fn test_with_config() {
        let config = SchedulerConfig {
            time_scale: 2.0,
            block_all: true,
            capacity: 16,
        };
        let scheduler = ActionScheduler::with_config(&config).unwrap();
        assert_eq!(scheduler.time_scale(), 2.0);
        assert!(scheduler.is_block_all());

        let bad = SchedulerConfig {
            time_scale: -2.0,
            ..Default::default()
        };
        assert!(ActionScheduler::with_config(&bad).is_err());
    }

    #[test]
    fn test_action_mut_edits_live_action() {
        let e = Entity::shared();
        let mut scheduler = ActionScheduler::new();
        let id = scheduler.move_to(&e, x(1.0), ActionParams::new(1.0));

        scheduler.action_mut(id).unwrap().state_mut().delay = 1.0;
        let report = scheduler.tick(0.5);
        assert_eq!(report.delayed, 1);
        assert_eq!(scheduler.action(id).unwrap().kind(), ActionKind::Move);
    }
}
