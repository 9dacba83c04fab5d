use crate::animation::{
    interpolation::{Easing, Interpolation},
    scheduler::Task,
};

/// Lifecycle of a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    /// Scheduled but not yet ticked
    Pending,
    /// Waiting out its start delay
    Delaying,
    /// Interpolating
    Running,
    Completed,
    Cancelled,
}

impl TaskState {
    /// Whether the task will never write again
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Completed | TaskState::Cancelled)
    }
}

/// A scalar property a tween reads from and writes to
pub trait PropertyChannel {
    /// Current value of the property
    fn read(&self) -> f32;

    /// Push a new value into the property
    fn write(&mut self, value: f32);
}

/// Channel backed by a plain setter callback.
///
/// There is no getter, so `read` reports the last value written through it.
pub struct Setter<F: FnMut(f32)> {
    last: f32,
    set: F,
}

impl<F: FnMut(f32)> Setter<F> {
    pub fn new(initial: f32, set: F) -> Self {
        Self { last: initial, set }
    }
}

impl<F: FnMut(f32)> PropertyChannel for Setter<F> {
    fn read(&self) -> f32 {
        self.last
    }

    fn write(&mut self, value: f32) {
        self.last = value;
        (self.set)(value);
    }
}

/// A delayed, eased interpolation of one scalar property
pub struct Tween {
    /// Start value; `None` samples the channel when the delay ends
    from: Option<f32>,
    /// End value, written exactly on the final tick
    to: f32,
    /// Interpolation length in seconds
    duration: f32,
    /// Remaining start delay in seconds
    delay: f32,
    /// Time spent interpolating
    elapsed: f32,
    easing: Easing,
    channel: Box<dyn PropertyChannel>,
    state: TaskState,
}

impl Tween {
    /// Create a tween from a fixed start value and a setter callback
    pub fn start<F>(initial: f32, target: f32, duration: f32, delay: f32, setter: F) -> Self
    where
        F: FnMut(f32) + 'static,
    {
        Self::with_channel(
            Some(initial),
            target,
            duration,
            delay,
            Box::new(Setter::new(initial, setter)),
        )
    }

    /// Create a tween whose start value is read from the channel once its delay has elapsed
    pub fn sampled(
        channel: Box<dyn PropertyChannel>,
        target: f32,
        duration: f32,
        delay: f32,
    ) -> Self {
        Self::with_channel(None, target, duration, delay, channel)
    }

    /// Create a tween over an arbitrary channel
    pub fn with_channel(
        from: Option<f32>,
        target: f32,
        duration: f32,
        delay: f32,
        channel: Box<dyn PropertyChannel>,
    ) -> Self {
        Self {
            from,
            to: target,
            duration,
            delay,
            elapsed: 0.0,
            easing: Easing::default(),
            channel,
            state: TaskState::Pending,
        }
    }

    /// Set the easing curve
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn delay(&self) -> f32 {
        self.delay
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Get the current progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        match self.state {
            TaskState::Completed => 1.0,
            _ if self.duration <= 0.0 => 0.0,
            _ => (self.elapsed / self.duration).clamp(0.0, 1.0),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    fn begin_running(&mut self) {
        if self.from.is_none() {
            self.from = Some(self.channel.read());
        }
        self.state = TaskState::Running;
    }

    fn finish(&mut self) {
        self.channel.write(self.to);
        self.state = TaskState::Completed;
    }

    fn interpolate(&mut self, dt: f32) {
        if self.duration <= 0.0 {
            self.finish();
            return;
        }

        self.elapsed += dt;
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);

        if t >= 1.0 {
            self.finish();
        } else {
            let from = self.from.unwrap_or(self.to);
            let value = Interpolation::ease(from, self.to, t, self.easing);
            self.channel.write(value);
        }
    }
}

impl Task for Tween {
    fn rescale(&mut self, factor: f32) {
        self.duration *= factor;
        self.delay *= factor;
    }

    fn tick(&mut self, dt: f32) -> TaskState {
        let mut dt = dt.max(0.0);

        if self.state == TaskState::Pending {
            if self.delay > 0.0 {
                self.state = TaskState::Delaying;
            } else {
                self.begin_running();
            }
        }

        if self.state == TaskState::Delaying {
            self.delay -= dt;
            if self.delay > 0.0 {
                return self.state;
            }
            // Time past the end of the delay counts toward the interpolation.
            dt = -self.delay;
            self.delay = 0.0;
            self.begin_running();
        }

        if self.state == TaskState::Running {
            self.interpolate(dt);
        }

        self.state
    }

    fn cancel(&mut self) {
        if !self.state.is_terminal() {
            self.state = TaskState::Cancelled;
        }
    }

    fn state(&self) -> TaskState {
        self.state
    }
}

impl std::fmt::Debug for Tween {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("duration", &self.duration)
            .field("delay", &self.delay)
            .field("elapsed", &self.elapsed)
            .field("easing", &self.easing)
            .field("state", &self.state)
            .finish()
    }
}
