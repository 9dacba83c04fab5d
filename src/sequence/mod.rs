pub mod choreography;
pub mod interrupt;
pub mod timeline;

pub use choreography::{launch_cues, Cue, CueChannel, CueLevel, REVEAL_CUES};
pub use interrupt::{FinalizeGuard, FrameInput, InterruptController, LoadingFlag};
pub use timeline::{SplashSequence, Stage};
