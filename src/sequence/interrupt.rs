use std::cell::Cell;
use std::rc::Rc;

/// Externally owned "content is still loading" flag.
///
/// Clones share the same flag. The loader is the only writer; the sequence
/// only polls it.
#[derive(Debug, Clone, Default)]
pub struct LoadingFlag(Rc<Cell<bool>>);

impl LoadingFlag {
    pub fn new(loading: bool) -> Self {
        Self(Rc::new(Cell::new(loading)))
    }

    pub fn set(&self, loading: bool) {
        self.0.set(loading);
    }

    pub fn is_loading(&self) -> bool {
        self.0.get()
    }
}

/// Input observed during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// Any key or button went down this frame
    pub any_key_down: bool,
}

impl FrameInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn key_down() -> Self {
        Self { any_key_down: true }
    }
}

/// Decides whether a skip request may cut the splash short
#[derive(Debug, Clone)]
pub struct InterruptController {
    loading: LoadingFlag,
}

impl InterruptController {
    pub fn new(loading: LoadingFlag) -> Self {
        Self { loading }
    }

    pub fn loading(&self) -> &LoadingFlag {
        &self.loading
    }

    /// Skipping is only allowed once loading has finished
    pub fn can_skip(&self) -> bool {
        !self.loading.is_loading()
    }

    pub fn should_skip(&self, input: &FrameInput) -> bool {
        input.any_key_down && self.can_skip()
    }
}

/// Lets the finalize notification through exactly once
#[derive(Debug, Default)]
pub struct FinalizeGuard {
    fired: bool,
}

impl FinalizeGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only on the first call
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
