use std::path::PathBuf;

use clap::Args;
use sketchdeck_core::images::{load_paths, seeded_rng};
use sketchdeck_core::{
    Config, Event, HistoryDb, HistoryRecorder, ImageRef, NoHistory, Player, PlayerCommand,
    PlayerOutcome, SlideshowEngine, SlideshowSettings,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Playback options shared by `play` and `replay`. Unset flags fall back to the config file.
#[derive(Args, Clone, Debug)]
pub struct PlaybackOpts {
    /// Seconds each image is shown
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    interval: Option<u64>,
    /// Seconds of rest between images (0 disables)
    #[arg(long)]
    rest: Option<u64>,
    /// Shuffle the images
    #[arg(long)]
    randomize: bool,
    /// Play at most this many images (0 = all)
    #[arg(long)]
    count: Option<usize>,
    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,
    /// Do not record this session
    #[arg(long)]
    no_history: bool,
}

#[derive(Args, Debug)]
pub struct PlayArgs {
    /// Image files or directories
    #[arg(required = true)]
    paths: Vec<PathBuf>,
    /// Scan directories recursively
    #[arg(long)]
    recursive: bool,
    #[command(flatten)]
    opts: PlaybackOpts,
}

#[derive(Args, Debug)]
pub struct ReplayArgs {
    /// Session ID from `history list`
    id: String,
    #[command(flatten)]
    opts: PlaybackOpts,
}

pub fn run(args: PlayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let mut options = config.load_options();
    options.recursive |= args.recursive;
    let images = load_paths(&args.paths, &options)?;
    play(images, &args.opts, &config)
}

pub fn run_replay(args: ReplayArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let entry = HistoryDb::open()?.get(&args.id)?;
    info!(id = %entry.id, name = %entry.name, "replaying session");
    play(entry.image_refs(), &args.opts, &config)
}

fn settings_for(opts: &PlaybackOpts, config: &Config) -> SlideshowSettings {
    let base = config.slideshow;
    SlideshowSettings {
        interval_sec: opts.interval.unwrap_or(base.interval_sec),
        rest_sec: opts.rest.unwrap_or(base.rest_sec),
        randomize: opts.randomize || base.randomize,
        image_count: opts.count.unwrap_or(base.image_count),
    }
}

fn play(
    images: Vec<ImageRef>,
    opts: &PlaybackOpts,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let recorder: Box<dyn HistoryRecorder> = if opts.no_history || !config.history.enabled {
        Box::new(NoHistory)
    } else {
        Box::new(HistoryDb::open()?)
    };

    let mut engine = SlideshowEngine::new(settings_for(opts, config), recorder)?;
    if let Some(seed) = opts.seed {
        engine = engine.with_random_source(seeded_rng(seed));
    }
    print_event(&engine.load_images(images));

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let mut player = Player::new(engine);

    let result = rt.block_on(async {
        let (tx, rx) = mpsc::channel(8);
        tokio::spawn(read_controls(tx));
        let shutdown = async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!(error = %e, "cannot listen for ctrl-c");
                std::future::pending::<()>().await;
            }
        };
        player.run(rx, shutdown, print_event).await
    });
    // The stdin reader may still be blocked on a read.
    rt.shutdown_background();

    match result? {
        PlayerOutcome::Finished => info!("session complete"),
        PlayerOutcome::Stopped => info!("session stopped"),
        PlayerOutcome::NotReady => return Err("no images to play".into()),
    }
    Ok(())
}

/// Map stdin lines to player commands: `p` or an empty line toggles pause,
/// `e` ends the session early, `q` quits.
async fn read_controls(tx: mpsc::Sender<PlayerCommand>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        let cmd = match line.trim() {
            "" | "p" | "pause" => PlayerCommand::Toggle,
            "e" | "end" => PlayerCommand::EndSession,
            "q" | "quit" => PlayerCommand::Stop,
            other => {
                warn!(input = other, "unknown control, expected p/e/q");
                continue;
            }
        };
        if tx.send(cmd).await.is_err() {
            break;
        }
    }
}

fn print_event(event: &Event) {
    match serde_json::to_string(event) {
        Ok(line) => println!("{line}"),
        Err(e) => warn!(error = %e, "failed to encode event"),
    }
}
