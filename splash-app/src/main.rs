use anyhow::Context;
use splash_timeline::{
    runtime::run_realtime,
    scene::{headless::HeadlessRig, LensFlare},
    sequence::{LoadingFlag, SplashSequence},
    ui::{SplashCustomizer, SplashEvents},
    SplashConfig,
};
use std::time::Duration;
use tokio::{sync::mpsc, task::LocalSet};

const FRAME_RATE: u32 = 60;

/// Simulated content loading time
const LOADING_TIME: Duration = Duration::from_secs(8);

/// Headless splash runner: plays the whole sequence against in-memory scene
/// objects. Ctrl-C is the "any key" skip input.
///
/// Usage: `splash-app [config.json]`
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    splash_timeline::init_debug_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => SplashConfig::load(&path)
            .with_context(|| format!("failed to load splash config from {}", path))?,
        None => SplashConfig::default(),
    };

    let rig = HeadlessRig::new();
    let loading = LoadingFlag::new(true);

    let events = SplashEvents::new()
        .on_act1(|| log::info!("act 1 visible"))
        .on_act2(|| log::info!("act 2 visible"))
        .on_act3(|| log::info!("act 3 visible"))
        .on_finalized(|| log::info!("splash finished, handing over to the game"));
    let host = SplashCustomizer::new(config.customizer.clone()).with_events(events);

    let mut sequence = SplashSequence::new(config, rig.scene(), rig.panels(), host, loading.clone());

    let (skip_tx, mut skip_rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while tokio::signal::ctrl_c().await.is_ok() {
            if skip_tx.send(()).is_err() {
                break;
            }
        }
    });

    let local = LocalSet::new();
    let frames = local
        .run_until(async {
            tokio::task::spawn_local(async move {
                tokio::time::sleep(LOADING_TIME).await;
                log::info!("content loaded");
                loading.set(false);
            });
            run_realtime(&mut sequence, FRAME_RATE, &mut skip_rx).await
        })
        .await;

    log::info!(
        "ran {} frames; logo exposure {:.2}, label exposure {:.2}, flare x {:.2}",
        frames,
        rig.exposure(&rig.logo_material),
        rig.exposure(&rig.label_material),
        rig.logo_lens_flare.borrow().local_position_x(),
    );

    Ok(())
}
