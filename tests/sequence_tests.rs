use splash_timeline::prelude::*;
use splash_timeline::scene::headless::HeadlessRig;
use std::cell::Cell;
use std::rc::Rc;

const DT: f32 = 0.05;

#[derive(Default, Clone)]
struct EventLog {
    act1: Rc<Cell<u32>>,
    act2: Rc<Cell<u32>>,
    act3: Rc<Cell<u32>>,
    finalized: Rc<Cell<u32>>,
}

impl EventLog {
    fn events(&self) -> SplashEvents {
        let (act1, act2, act3, finalized) = (
            self.act1.clone(),
            self.act2.clone(),
            self.act3.clone(),
            self.finalized.clone(),
        );
        SplashEvents::new()
            .on_act1(move || act1.set(act1.get() + 1))
            .on_act2(move || act2.set(act2.get() + 1))
            .on_act3(move || act3.set(act3.get() + 1))
            .on_finalized(move || finalized.set(finalized.get() + 1))
    }
}

fn customizer_config() -> CustomizerConfig {
    CustomizerConfig {
        paragraph: "Made with love".to_string(),
        top_left_logo: Some(ImageAsset::new("studio.png")),
        left_logo: Some(ImageAsset::new("publisher.png")),
        right_logo: Some(ImageAsset::new("engine.png")),
        small_logos: [
            Some(ImageAsset::new("partner1.png")),
            Some(ImageAsset::new("partner2.png")),
            None,
            None,
        ],
    }
}

fn build(
    rig: &HeadlessRig,
    config: SplashConfig,
    loading: &LoadingFlag,
    log: &EventLog,
) -> SplashSequence<SplashCustomizer> {
    let host = SplashCustomizer::new(config.customizer.clone()).with_events(log.events());
    SplashSequence::new(config, rig.scene(), rig.panels(), host, loading.clone())
}

fn short_acts() -> SplashConfig {
    SplashConfig {
        act1_duration: 1,
        act2_duration: 1,
        act3_duration: 1,
        customizer: customizer_config(),
        ..Default::default()
    }
}

fn run_until<H: SplashHost>(seq: &mut SplashSequence<H>, stage: Stage, max_frames: u32) -> u32 {
    for frame in 1..=max_frames {
        if seq.update(DT, FrameInput::idle()) == stage {
            return frame;
        }
    }
    panic!("sequence never reached {:?}; stuck in {:?}", stage, seq.stage());
}

#[test]
fn test_acts_play_in_order_then_wait_for_loading() {
    let rig = HeadlessRig::new();
    let loading = LoadingFlag::new(true);
    let log = EventLog::default();
    let mut seq = build(&rig, short_acts(), &loading, &log);

    run_until(&mut seq, Stage::Act1, 10);
    assert_eq!(log.act1.get(), 1);
    assert!(rig.acts[0].borrow().is_active());
    assert!(!rig.acts[1].borrow().is_active());

    run_until(&mut seq, Stage::Act2, 40);
    assert_eq!(log.act2.get(), 1);
    assert!(!rig.acts[0].borrow().is_active());
    assert!(rig.acts[1].borrow().is_active());

    run_until(&mut seq, Stage::Act3, 40);
    assert_eq!(log.act3.get(), 1);
    assert!(!rig.acts[1].borrow().is_active());
    assert!(rig.acts[2].borrow().is_active());

    run_until(&mut seq, Stage::AwaitExternalLoad, 40);
    assert!(rig.acts.iter().all(|act| !act.borrow().is_active()));

    // Still loading: the sequence holds, and skipping is not allowed.
    for _ in 0..100 {
        seq.update(DT, FrameInput::key_down());
    }
    assert_eq!(seq.stage(), Stage::AwaitExternalLoad);
    assert_eq!(log.finalized.get(), 0);

    loading.set(false);
    assert_eq!(seq.update(DT, FrameInput::idle()), Stage::Finalized);
    assert_eq!(log.finalized.get(), 1);

    for _ in 0..10 {
        seq.update(DT, FrameInput::key_down());
    }
    assert_eq!(log.finalized.get(), 1);
    assert_eq!(log.act1.get(), 1);
    assert_eq!(rig.acts[0].borrow().activations, 1);
}

#[test]
fn test_act_panels_are_customized_when_shown() {
    let rig = HeadlessRig::new();
    let loading = LoadingFlag::new(true);
    let log = EventLog::default();
    let mut seq = build(&rig, short_acts(), &loading, &log);

    run_until(&mut seq, Stage::Act2, 60);
    let act2 = seq.panels().act2.document.as_ref().unwrap();
    assert_eq!(
        act2.get("LeftLogo").unwrap().background_image,
        Some(ImageAsset::new("publisher.png"))
    );
    assert_eq!(
        act2.get("RightLogo").unwrap().background_image,
        Some(ImageAsset::new("engine.png"))
    );
    let act3 = seq.panels().act3.document.as_ref().unwrap();
    assert_eq!(act3.get("Paragraph").unwrap().text, None);

    run_until(&mut seq, Stage::Act3, 60);
    let act3 = seq.panels().act3.document.as_ref().unwrap();
    assert_eq!(act3.get("Paragraph").unwrap().text.as_deref(), Some("Made with love"));
    assert_eq!(
        act3.get("Logo2").unwrap().background_image,
        Some(ImageAsset::new("partner2.png"))
    );
    assert_eq!(act3.get("Logo3").unwrap().background_image, None);
}

#[test]
fn test_missing_act_documents_skip_customization() {
    let rig = HeadlessRig::new();
    let loading = LoadingFlag::new(false);
    let log = EventLog::default();
    let host = SplashCustomizer::new(customizer_config()).with_events(log.events());
    let mut panels = rig.panels();
    panels.act2.document = None;
    panels.act3.document = None;
    let mut seq = SplashSequence::new(short_acts(), rig.scene(), panels, host, loading);

    run_until(&mut seq, Stage::Finalized, 200);

    assert_eq!(log.act1.get(), 1);
    assert_eq!(log.act2.get(), 0);
    assert_eq!(log.act3.get(), 0);
    assert_eq!(log.finalized.get(), 1);
}

#[test]
fn test_reveal_lands_on_final_values() {
    let rig = HeadlessRig::new();
    let loading = LoadingFlag::new(true);
    let log = EventLog::default();
    let mut seq = build(&rig, SplashConfig::default(), &loading, &log);

    // 8 seconds: past the end of the reveal, still inside act 3.
    for _ in 0..160 {
        seq.update(DT, FrameInput::idle());
    }
    assert_eq!(seq.stage(), Stage::Act3);
    assert!(seq.scheduler().is_idle());

    assert_eq!(rig.exposure(&rig.logo_material), 1.0);
    assert_eq!(rig.exposure(&rig.label_material), 1.0);
    assert_eq!(rig.exposure(&rig.outline_material), 0.0);
    assert_eq!(rig.falloff(&rig.outline_material), 5.0);
    assert_eq!(rig.exposure(&rig.glow_triangle_material), 0.0);
    assert_eq!(rig.white_light.borrow().intensity(), 0.0);
    assert_eq!(rig.green_light.borrow().intensity(), 0.0);
    assert_eq!(rig.logo_lens_flare.borrow().scale(), 1.0);
    assert_eq!(rig.logo_lens_flare.borrow().local_position_x(), -1.0);
    assert_eq!(rig.logo_lens_flare.borrow().intensity(), 0.0);
    assert_eq!(rig.green_light_lens_flare.borrow().intensity(), 0.0);
}

#[test]
fn test_lens_flares_follow_green_light() {
    let rig = HeadlessRig::new();
    let loading = LoadingFlag::new(true);
    let log = EventLog::default();
    let mut seq = build(&rig, SplashConfig::default(), &loading, &log);

    // 4 seconds in: the white light holds its peak, the green light is rising.
    for _ in 0..80 {
        seq.update(DT, FrameInput::idle());
    }

    assert_eq!(rig.white_light.borrow().intensity(), 3.0);
    let green = rig.green_light.borrow().intensity();
    assert!(green > 0.0 && green < 2.0);

    let ratio = rig.green_light_lens_flare.borrow().intensity();
    assert!((ratio - green / 2.0).abs() < 1e-6);
    assert!((rig.logo_lens_flare.borrow().intensity() - ratio * 0.1).abs() < 1e-6);
}

#[test]
fn test_skip_after_loading_cancels_reveal() {
    let rig = HeadlessRig::new();
    let loading = LoadingFlag::new(true);
    let log = EventLog::default();
    let mut seq = build(&rig, SplashConfig::default(), &loading, &log);

    for _ in 0..60 {
        seq.update(DT, FrameInput::key_down());
    }
    assert_eq!(seq.stage(), Stage::Act1);
    assert_eq!(log.finalized.get(), 0);

    loading.set(false);
    assert_eq!(seq.update(DT, FrameInput::key_down()), Stage::Finalized);
    assert!(seq.scheduler().is_idle());
    assert_eq!(rig.audio.borrow().stops, 1);
    assert_eq!(log.finalized.get(), 1);

    // Nothing moves once the reveal is cancelled.
    let logo = rig.exposure(&rig.logo_material);
    let flare_x = rig.logo_lens_flare.borrow().local_position_x();
    for _ in 0..100 {
        seq.update(DT, FrameInput::idle());
    }
    assert_eq!(rig.exposure(&rig.logo_material), logo);
    assert_eq!(rig.logo_lens_flare.borrow().local_position_x(), flare_x);
    assert_eq!(log.act2.get(), 0);
}

#[test]
fn test_natural_finish_lets_reveal_complete() {
    let rig = HeadlessRig::new();
    let loading = LoadingFlag::new(false);
    let log = EventLog::default();
    let config = SplashConfig {
        act1_duration: 0,
        act2_duration: 0,
        act3_duration: 0,
        ..Default::default()
    };
    let mut seq = build(&rig, config, &loading, &log);

    run_until(&mut seq, Stage::Finalized, 10);
    assert!(!seq.scheduler().is_idle());

    for _ in 0..160 {
        seq.update(DT, FrameInput::key_down());
    }
    assert!(seq.scheduler().is_idle());
    assert_eq!(rig.exposure(&rig.label_material), 1.0);
    assert_eq!(rig.logo_lens_flare.borrow().local_position_x(), -1.0);
    assert_eq!(log.finalized.get(), 1);
}

#[test]
fn test_speed_multiplier_stretches_acts() {
    let rig = HeadlessRig::new();
    let loading = LoadingFlag::new(true);
    let log = EventLog::default();
    let config = SplashConfig {
        act1_duration: 1,
        speed_multiplier: 2.0,
        ..Default::default()
    };
    let mut seq = build(&rig, config, &loading, &log);

    run_until(&mut seq, Stage::Act1, 10);

    // ceil(1 * 2.0) = 2 seconds = 8 quarter-second frames.
    for _ in 0..7 {
        assert_eq!(seq.update(0.25, FrameInput::idle()), Stage::Act1);
    }
    assert_eq!(seq.update(0.25, FrameInput::idle()), Stage::Act2);
}

#[test]
fn test_empty_scene_still_runs_to_completion() {
    let loading = LoadingFlag::new(false);
    let log = EventLog::default();
    let host = SplashCustomizer::new(CustomizerConfig::default()).with_events(log.events());
    let mut seq = SplashSequence::new(
        short_acts(),
        SplashScene::default(),
        ActPanels::default(),
        host,
        loading,
    );

    assert!(!seq.warnings().is_empty());
    run_until(&mut seq, Stage::Finalized, 200);
    assert!(seq.scheduler().is_idle());
    assert_eq!(log.finalized.get(), 1);
}
