pub mod interpolation;
pub mod scheduler;
pub mod tweening;

// Re-export commonly used types and functions for convenience
pub use interpolation::{smooth_step_overdrive, Easing, Interpolation};
pub use scheduler::{Scheduler, Task, TaskId};
pub use tweening::{PropertyChannel, Setter, TaskState, Tween};
