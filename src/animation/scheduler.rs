//! Timeline scheduler
//!
//! Owns every active task and advances them from one frame clock.

use crate::animation::{
    interpolation::Easing,
    tweening::{PropertyChannel, TaskState, Tween},
};
use crate::core::constants::{MAX_SPEED_MULTIPLIER, MIN_SPEED_MULTIPLIER};
use fxhash::FxHashMap;

/// Something the scheduler can advance once per frame
pub trait Task {
    /// Multiply every time span of the task; applied once at schedule time
    fn rescale(&mut self, factor: f32);

    /// Advance the task by `dt` seconds and report its state afterwards
    fn tick(&mut self, dt: f32) -> TaskState;

    /// Stop the task; it must not touch its target again
    fn cancel(&mut self);

    fn state(&self) -> TaskState;
}

/// Handle to a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

/// Runs any number of tasks concurrently against a single accumulated clock
pub struct Scheduler {
    tasks: FxHashMap<TaskId, Box<dyn Task>>,
    next_id: u64,
    clock: f64,
    speed_multiplier: f32,
    easing: Easing,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            tasks: FxHashMap::default(),
            next_id: 0,
            clock: 0.0,
            speed_multiplier: 1.0,
            easing: Easing::default(),
        }
    }

    /// Create a scheduler with a speed multiplier and default easing
    pub fn with_settings(speed_multiplier: f32, easing: Easing) -> Self {
        let mut scheduler = Self::new();
        scheduler.set_speed_multiplier(speed_multiplier);
        scheduler.easing = easing;
        scheduler
    }

    /// Add a task to the active set.
    ///
    /// The task's delay and duration are scaled by the current speed multiplier
    /// here, so later multiplier changes leave it untouched.
    pub fn schedule<T: Task + 'static>(&mut self, mut task: T) -> TaskId {
        task.rescale(self.speed_multiplier);

        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.tasks.insert(id, Box::new(task));
        log::trace!("scheduled task {:?} ({} active)", id, self.tasks.len());
        id
    }

    /// Schedule a tween over `channel` using the scheduler's easing.
    ///
    /// With `from == None` the start value is read when the delay ends.
    pub fn tween(
        &mut self,
        from: Option<f32>,
        to: f32,
        duration: f32,
        delay: f32,
        channel: Box<dyn PropertyChannel>,
    ) -> TaskId {
        let tween = Tween::with_channel(from, to, duration, delay, channel).with_easing(self.easing);
        self.schedule(tween)
    }

    /// Advance every active task by `dt` seconds and drop finished ones
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.clock += dt as f64;

        for task in self.tasks.values_mut() {
            task.tick(dt);
        }

        self.tasks.retain(|_, task| !task.state().is_terminal());
    }

    /// Cancel a single task
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.tasks.remove(&id) {
            Some(mut task) => {
                task.cancel();
                true
            }
            None => false,
        }
    }

    /// Cancel every active task and return how many were stopped
    pub fn cancel_all(&mut self) -> usize {
        let count = self.tasks.len();
        for (_, mut task) in self.tasks.drain() {
            task.cancel();
        }
        if count > 0 {
            log::debug!("cancelled {} scheduled tasks", count);
        }
        count
    }

    /// Change the multiplier for tasks scheduled from now on
    pub fn set_speed_multiplier(&mut self, multiplier: f32) {
        let clamped = multiplier.clamp(MIN_SPEED_MULTIPLIER, MAX_SPEED_MULTIPLIER);
        if clamped != multiplier {
            log::warn!(
                "speed multiplier {} outside [{}, {}], using {}",
                multiplier,
                MIN_SPEED_MULTIPLIER,
                MAX_SPEED_MULTIPLIER,
                clamped
            );
        }
        self.speed_multiplier = clamped;
    }

    pub fn speed_multiplier(&self) -> f32 {
        self.speed_multiplier
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Total time accumulated through `tick`
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Get the number of active tasks
    pub fn active_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }

    /// State of a task that is still active
    pub fn state(&self, id: TaskId) -> Option<TaskState> {
        self.tasks.get(&id).map(|task| task.state())
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
