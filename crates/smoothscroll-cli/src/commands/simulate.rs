use std::path::PathBuf;
use std::time::Duration;

use anyhow::{anyhow, Result};

use smoothscroll_core::{
    scroll::ScrollConfigExt,
    sim::{Document, FrameLoop, NodeId},
    AppConfig, Dispatch, FrameScheduler, ScrollConfig, ScrollHost, Scroller,
};

/// Upper bound on frames before giving up on an animation
const MAX_FRAMES: usize = 10_000;

pub struct SimulateArgs {
    pub scene: PathBuf,
    pub target: Option<String>,
    pub into_view: bool,
    /// `None` uses the configured default
    pub center: Option<bool>,
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
    pub fallback_to_nearest: bool,
    pub fps: u32,
    pub realtime: bool,
}

/// Command-line flags layered over the configured scroll settings
fn scroll_config(base: &ScrollConfig, args: &SimulateArgs) -> ScrollConfig {
    let mut config = base.clone();
    if args.offset_x.is_some() {
        config.offset_x = args.offset_x;
    }
    if args.offset_y.is_some() {
        config.offset_y = args.offset_y;
    }
    if args.fallback_to_nearest {
        config.fallback_to_nearest = true;
    }
    config
}

/// Run the requested entry point against the document
fn dispatch(
    scroller: &Scroller,
    doc: &mut Document,
    frames: &mut FrameLoop<NodeId>,
    target: Option<NodeId>,
    args: &SimulateArgs,
) -> Dispatch<NodeId> {
    if args.into_view {
        let center = args.center.unwrap_or(scroller.config().center);
        scroller.scroll_into_view(doc, frames, target, center)
    } else {
        scroller.scroll_to(doc, frames, target)
    }
}

pub async fn run(config: &AppConfig, args: SimulateArgs) -> Result<()> {
    let mut doc = Document::load(&args.scene)?;
    let target = args
        .target
        .as_deref()
        .map(|id| doc.require(id))
        .transpose()?;

    let scroller = Scroller::new(scroll_config(&config.scroll, &args));
    let mut frames = FrameLoop::new(args.fps);

    tracing::info!(
        scene = %args.scene.display(),
        element = args.target.as_deref().unwrap_or("<none>"),
        into_view = args.into_view,
        "Running scroll simulation"
    );

    let (container, destination) = match dispatch(&scroller, &mut doc, &mut frames, target, &args) {
        Dispatch::Skipped => {
            println!("Nothing to scroll: target is already in place.");
            return Ok(());
        }
        Dispatch::Native {
            container,
            destination,
        } => {
            println!(
                "Native smooth scroll on {} to ({:.1}, {:.1})",
                doc.describe(container),
                destination.x,
                destination.y
            );
            return Ok(());
        }
        Dispatch::Animated {
            container,
            destination,
        } => (container, destination),
    };

    let start = doc.scroll_position(container);
    println!(
        "Animating {} from ({:.1}, {:.1}) to ({:.1}, {:.1}) over {}ms\n",
        doc.describe(container),
        start.x,
        start.y,
        destination.x,
        destination.y,
        scroller.config().animation_duration().as_millis()
    );

    let mut ticker = args
        .realtime
        .then(|| tokio::time::interval(Duration::from_secs_f64(frames.interval() / 1000.0)));

    let mut frame = 0;
    while !frames.is_idle() {
        if frame >= MAX_FRAMES {
            return Err(anyhow!(
                "Animation did not settle after {} frames",
                MAX_FRAMES
            ));
        }
        if let Some(ticker) = ticker.as_mut() {
            ticker.tick().await;
        }

        frames.run_frame(&mut doc);
        frame += 1;

        let position = doc.scroll_position(container);
        println!(
            "  frame {:>4}  t={:>8.1}ms  x={:>9.2}  y={:>9.2}",
            frame,
            frames.now(),
            position.x,
            position.y
        );
    }

    let settled = doc.scroll_position(container);
    println!(
        "\nSettled after {} frames at ({:.1}, {:.1})",
        frame, settled.x, settled.y
    );
    if settled != destination {
        println!("Destination was clamped by the scrollable range.");
    }

    Ok(())
}
