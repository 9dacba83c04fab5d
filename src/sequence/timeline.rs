//! Splash sequence state machine
//!
//! `Init → FadeIn → Act1 → Act2 → Act3 → AwaitExternalLoad → Finalized`,
//! driven one frame at a time by [`SplashSequence::update`]. A skip request
//! can jump to `Finalized` from any stage once loading is done.

use crate::animation::scheduler::Scheduler;
use crate::core::config::{Act, SplashConfig};
use crate::core::constants::{
    EXPOSURE_MAP_STRENGTH_PROPERTY, FRAMES_BEFORE_ACT1, FRAMES_BEFORE_REVEAL,
    LENS_FLARE_BASELINE_SCALE, LENS_FLARE_BASELINE_X, LOGO_FLARE_INTENSITY_FACTOR,
};
use crate::scene::channels::is_valid_material;
use crate::scene::handles::{ActPanels, LightSlot, MaterialSlot, SplashScene};
use crate::scene::validation::{validate_scene, SceneWarning};
use crate::sequence::choreography::{launch_cues, REVEAL_CUES};
use crate::sequence::interrupt::{FinalizeGuard, FrameInput, InterruptController, LoadingFlag};
use crate::ui::customizer::SplashHost;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Init,
    FadeIn,
    Act1,
    Act2,
    Act3,
    AwaitExternalLoad,
    Finalized,
}

/// What the current stage is waiting for
#[derive(Debug, Clone, Copy, PartialEq)]
enum Wait {
    Frames(u32),
    Seconds(f32),
    WhileLoading,
}

impl Wait {
    fn is_over(&self, loading: &LoadingFlag) -> bool {
        match *self {
            Wait::Frames(frames) => frames == 0,
            Wait::Seconds(seconds) => seconds <= 0.0,
            Wait::WhileLoading => !loading.is_loading(),
        }
    }

    /// Consume one frame of `dt` seconds
    fn elapse(&mut self, dt: f32) {
        match self {
            Wait::Frames(frames) => *frames = frames.saturating_sub(1),
            Wait::Seconds(seconds) => *seconds -= dt,
            Wait::WhileLoading => {}
        }
    }
}

pub struct SplashSequence<H: SplashHost> {
    config: SplashConfig,
    scene: SplashScene,
    panels: ActPanels,
    host: H,
    scheduler: Scheduler,
    interrupt: InterruptController,
    finalize: FinalizeGuard,
    warnings: Vec<SceneWarning>,
    stage: Stage,
    wait: Option<Wait>,
    started: bool,
}

impl<H: SplashHost> SplashSequence<H> {
    /// Build a sequence; the scene is validated here and problems are logged
    pub fn new(
        config: SplashConfig,
        scene: SplashScene,
        panels: ActPanels,
        host: H,
        loading: LoadingFlag,
    ) -> Self {
        let config = config.validated();
        let warnings = validate_scene(&scene);
        let scheduler = Scheduler::with_settings(config.speed_multiplier, config.easing());

        Self {
            config,
            scene,
            panels,
            host,
            scheduler,
            interrupt: InterruptController::new(loading),
            finalize: FinalizeGuard::new(),
            warnings,
            stage: Stage::Init,
            wait: None,
            started: false,
        }
    }

    /// Reset every driven property to its baseline, hide the acts and wait one
    /// frame before the reveal. If not called before, the first `update` calls
    /// it and that frame is the wait.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;

        self.panels.deactivate_all();

        for slot in MaterialSlot::ALL {
            if let Some(material) = self.scene.material(slot) {
                if is_valid_material(material) {
                    material
                        .borrow_mut()
                        .set_float(EXPOSURE_MAP_STRENGTH_PROPERTY, 0.0);
                }
            }
        }

        for slot in [LightSlot::White, LightSlot::Green] {
            if let Some(light) = self.scene.light(slot) {
                light.borrow_mut().set_intensity(0.0);
            }
        }

        if let Some(flare) = &self.scene.logo_lens_flare {
            let mut flare = flare.borrow_mut();
            flare.set_scale(LENS_FLARE_BASELINE_SCALE);
            flare.set_local_position_x(LENS_FLARE_BASELINE_X);
        }

        self.stage = Stage::Init;
        self.wait = Some(Wait::Frames(FRAMES_BEFORE_REVEAL));
        log::debug!("splash sequence started");
    }

    /// Advance the sequence by one frame
    pub fn update(&mut self, dt: f32, input: FrameInput) -> Stage {
        let dt = dt.max(0.0);

        if self.stage == Stage::Finalized {
            // Natural completion leaves unfinished reveal cues running; a skip
            // has already cancelled them.
            if !self.scheduler.is_idle() {
                self.scheduler.tick(dt);
                self.sync_lens_flares();
            }
            return self.stage;
        }
        let starting = !self.started;
        if starting {
            self.start();
        }

        if self.interrupt.should_skip(&input) {
            self.interrupt_now();
            return self.stage;
        }

        // The frame that resets the scene is the frame `Init` yields.
        if starting {
            return self.stage;
        }

        self.advance(dt);
        self.scheduler.tick(dt);
        self.sync_lens_flares();

        self.stage
    }

    /// Skip to the end if loading has finished. Returns whether the skip took effect.
    pub fn skip(&mut self) -> bool {
        if self.stage == Stage::Finalized || !self.interrupt.can_skip() {
            return false;
        }
        self.interrupt_now();
        true
    }

    fn interrupt_now(&mut self) {
        let cancelled = self.scheduler.cancel_all();
        if let Some(audio) = &self.scene.audio {
            audio.borrow_mut().stop();
        }
        log::info!(
            "splash skipped during {:?} ({} tasks cancelled)",
            self.stage,
            cancelled
        );
        self.finish();
    }

    fn finish(&mut self) {
        self.stage = Stage::Finalized;
        self.wait = None;
        if self.finalize.fire() {
            log::info!("splash finalized");
            self.host.on_finalization();
        }
    }

    fn advance(&mut self, dt: f32) {
        let loading = self.interrupt.loading().clone();

        if let Some(wait) = self.wait.as_mut() {
            wait.elapse(dt);
            if !wait.is_over(&loading) {
                return;
            }
            self.wait = None;
        }

        // A wait set while stepping starts counting from the next frame,
        // unless it is already over. Timed waits always hold at least one frame.
        while let Some(wait) = self.step() {
            if matches!(wait, Wait::Seconds(_)) || !wait.is_over(&loading) {
                self.wait = Some(wait);
                return;
            }
        }
    }

    /// Leave the current stage and enter the next one
    fn step(&mut self) -> Option<Wait> {
        let next = match self.stage {
            Stage::Init => {
                launch_cues(REVEAL_CUES, &mut self.scheduler, &self.scene, &self.config);
                Stage::FadeIn
            }
            Stage::FadeIn => {
                if let Some(audio) = &self.scene.audio {
                    let mut audio = audio.borrow_mut();
                    let pitch = audio.pitch() / self.config.speed_multiplier;
                    audio.set_pitch(pitch);
                    audio.play();
                }
                self.show_act(Act::Act1);
                Stage::Act1
            }
            Stage::Act1 => {
                self.panels.act1.set_active(false);
                self.show_act(Act::Act2);
                Stage::Act2
            }
            Stage::Act2 => {
                self.panels.act2.set_active(false);
                self.show_act(Act::Act3);
                Stage::Act3
            }
            Stage::Act3 => {
                self.panels.act3.set_active(false);
                Stage::AwaitExternalLoad
            }
            Stage::AwaitExternalLoad | Stage::Finalized => {
                self.finish();
                return None;
            }
        };

        log::debug!("splash stage {:?} -> {:?}", self.stage, next);
        self.stage = next;

        Some(match next {
            Stage::FadeIn => Wait::Frames(FRAMES_BEFORE_ACT1),
            Stage::Act1 => Wait::Seconds(self.config.scaled_act_duration(Act::Act1)),
            Stage::Act2 => Wait::Seconds(self.config.scaled_act_duration(Act::Act2)),
            Stage::Act3 => Wait::Seconds(self.config.scaled_act_duration(Act::Act3)),
            _ => Wait::WhileLoading,
        })
    }

    fn show_act(&mut self, act: Act) {
        let panel = self.panels.get_mut(act);
        panel.set_active(true);
        match act {
            Act::Act1 => self.host.on_act1_enabled(),
            Act::Act2 => self.host.on_act2_enabled(panel.document.as_mut()),
            Act::Act3 => self.host.on_act3_enabled(panel.document.as_mut()),
        }
    }

    /// Keep both lens flares following the green light
    fn sync_lens_flares(&self) {
        let (Some(light), Some(flare)) = (&self.scene.green_light, &self.scene.green_light_lens_flare)
        else {
            return;
        };
        let peak = self.config.green_light_intensity;
        if peak <= 0.0 {
            return;
        }

        let ratio = light.borrow().intensity() / peak;
        flare.borrow_mut().set_intensity(ratio);

        if let Some(logo_flare) = &self.scene.logo_lens_flare {
            let logo = if ratio > 0.0 {
                ratio * LOGO_FLARE_INTENSITY_FACTOR
            } else {
                ratio
            };
            logo_flare.borrow_mut().set_intensity(logo);
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn is_finalized(&self) -> bool {
        self.stage == Stage::Finalized
    }

    pub fn config(&self) -> &SplashConfig {
        &self.config
    }

    pub fn scene(&self) -> &SplashScene {
        &self.scene
    }

    pub fn panels(&self) -> &ActPanels {
        &self.panels
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn loading(&self) -> &LoadingFlag {
        self.interrupt.loading()
    }

    /// Problems found when the scene was validated
    pub fn warnings(&self) -> &[SceneWarning] {
        &self.warnings
    }
}
