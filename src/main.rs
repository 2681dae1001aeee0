//! Demo host for the progress button.
//!
//! Builds a button from flags (and optionally a JSON style), feeds it through
//! the event bus like a real host would, and writes the SVG of the resulting
//! frame to stdout or a file.
//!
//! ## Environment Variables
//!
//! - `RUST_LOG=debug` — log level filter (default: warn), logs go to stderr

use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use progress_button::model::constants::DEFAULT_AREA_SIDE;
use progress_button::storage::load_style;
use progress_button::{
    dispatch_events, init_tracing, to_svg_document, ButtonError, ButtonEvent, ButtonState,
    ButtonStyle, Color, DrawArea, EventBus, EventPublisher, ProgressButton,
};

#[derive(Parser)]
#[command(name = "progress-button", version, about = "Render a download button frame as SVG")]
struct Cli {
    /// Button state: start, progress or done
    #[arg(long, default_value = "start")]
    state: ButtonState,

    /// Completion fraction for the progress state, clamped to [0, 1]
    #[arg(long, default_value_t = 0.0)]
    percent: f64,

    #[arg(long, default_value_t = DEFAULT_AREA_SIDE)]
    width: f64,

    #[arg(long, default_value_t = DEFAULT_AREA_SIDE)]
    height: f64,

    /// JSON style file; --color and --stroke-width override it
    #[arg(long)]
    style: Option<PathBuf>,

    /// Stroke color as #RRGGBB or #RRGGBBAA
    #[arg(long)]
    color: Option<String>,

    #[arg(long)]
    stroke_width: Option<f64>,

    /// Simulate a tap at the center of the button before rendering
    #[arg(long)]
    tap: bool,

    /// Write the SVG here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

/// Publish the events describing the requested frame.
///
/// The tap goes last so the gate sees the state that will be rendered.
fn publish_frame_events(
    cli: &Cli,
    area: &DrawArea,
    publisher: &EventPublisher,
) -> Result<(), ButtonError> {
    publisher.publish(ButtonEvent::SetState(cli.state));
    publisher.publish(ButtonEvent::SetPercent(cli.percent));
    if let Some(hex) = &cli.color {
        publisher.publish(ButtonEvent::SetStrokeColor(Color::from_hex(hex)?));
    }
    if let Some(width) = cli.stroke_width {
        publisher.publish(ButtonEvent::SetStrokeWidth(width));
    }
    if cli.tap {
        let center = area.center();
        publisher.publish(ButtonEvent::Tap {
            x: center.x,
            y: center.y,
        });
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    if let Err(e) = init_tracing() {
        eprintln!("progress-button: {e}");
    }

    let style = match &cli.style {
        Some(path) => load_style(path)?,
        None => ButtonStyle::default(),
    };

    let area = DrawArea::new(cli.width, cli.height);
    let mut button = ProgressButton::new(area)
        .with_style(style)
        .with_download_action(|| info!("download requested"));

    let bus = EventBus::new();
    publish_frame_events(&cli, &area, &bus.publisher())?;

    let summary = dispatch_events(&bus, &mut button);
    info!(
        applied = summary.applied,
        actions_fired = summary.actions_fired,
        "events dispatched"
    );

    let svg = to_svg_document(&button.draw(), button.area());
    match &cli.output {
        Some(path) => {
            fs::write(path, svg)?;
            info!(path = %path.display(), "svg written");
        }
        None => print!("{svg}"),
    }

    Ok(())
}
