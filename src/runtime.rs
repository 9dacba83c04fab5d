//! Frame drivers for the splash sequence
//!
//! The sequence itself is runtime-agnostic: it only needs `update(dt, input)`
//! once per frame. This module provides a sleep-paced loop for plain threads
//! and, with the `tokio-runtime` feature, an interval-paced async loop.

use crate::sequence::interrupt::FrameInput;
use crate::sequence::timeline::SplashSequence;
use crate::ui::customizer::SplashHost;
use instant::Instant;
use std::time::Duration;

/// Measures the time between consecutive frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }

    /// Seconds since the previous call (or since creation)
    pub fn delta(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

fn frame_interval(fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / fps.max(1) as f64)
}

/// Run the sequence on the current thread until it finalizes.
///
/// `poll_input` is called once per frame. Returns the number of frames run.
pub fn run_blocking<H, F>(sequence: &mut SplashSequence<H>, fps: u32, mut poll_input: F) -> u64
where
    H: SplashHost,
    F: FnMut() -> FrameInput,
{
    let interval = frame_interval(fps);
    let mut clock = FrameClock::new();
    let mut frames = 0;

    sequence.start();
    while !sequence.is_finalized() {
        std::thread::sleep(interval);
        let dt = clock.delta();
        sequence.update(dt, poll_input());
        frames += 1;
    }

    log::debug!("blocking driver finished after {} frames", frames);
    frames
}

#[cfg(feature = "tokio-runtime")]
pub mod tokio_driver {
    use super::*;
    use ::tokio::sync::mpsc::UnboundedReceiver;
    use ::tokio::time::{self, MissedTickBehavior};

    /// Run the sequence on a tokio interval until it finalizes.
    ///
    /// Any message received on `skip` during a frame counts as a key press for
    /// that frame. The sequence is not `Send`; await this on the task that owns it.
    pub async fn run_realtime<H: SplashHost>(
        sequence: &mut SplashSequence<H>,
        fps: u32,
        skip: &mut UnboundedReceiver<()>,
    ) -> u64 {
        let mut ticker = time::interval(frame_interval(fps));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut last = time::Instant::now();
        let mut frames = 0;

        sequence.start();
        while !sequence.is_finalized() {
            ticker.tick().await;
            let now = time::Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;

            let mut any_key_down = false;
            while skip.try_recv().is_ok() {
                any_key_down = true;
            }

            sequence.update(dt, FrameInput { any_key_down });
            frames += 1;
        }

        log::debug!("realtime driver finished after {} frames", frames);
        frames
    }
}

#[cfg(feature = "tokio-runtime")]
pub use tokio_driver::run_realtime;
