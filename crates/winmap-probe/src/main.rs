//! Probe a window by title and map standard-resolution points into it.
//!
//! Prints validity, focus, scaling state, and the corrected window
//! rectangle; with `--point X,Y` also the scaled and screen points.

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use winmap::{Point, Rect};

#[derive(Parser, Debug)]
#[command(
    name = "winmap-probe",
    about = "Look up a window by title and map standard-resolution coordinates",
    version
)]
struct Cli {
    /// Exact window title to look up
    #[arg(long)]
    title: String,

    /// Standard resolution width that game positions are expressed in
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Standard resolution height that game positions are expressed in
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Title-bar correction in points applied to the reported top edge
    #[arg(long, default_value_t = winmap::DEFAULT_TITLE_BAR_OFFSET)]
    title_bar_offset: f64,

    /// Point "X,Y" in standard-resolution coordinates to map
    #[arg(long, value_parser = parse_point)]
    point: Option<Point>,

    /// Bring the window's application to the foreground first
    #[arg(long, default_value_t = false)]
    activate: bool,

    /// Emit a single JSON object instead of text lines
    #[arg(long, default_value_t = false)]
    json: bool,
}

/// Parse "X,Y" into a point.
fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad X: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad Y: {e}"))?;
    Ok(Point::new(x, y))
}

/// Everything the probe learned about the window, in one record.
#[derive(Serialize)]
struct Report {
    valid: bool,
    active: bool,
    scaled: bool,
    owner_pid: Option<i32>,
    window_rect: Option<Rect>,
    scaled_point: Option<Point>,
    screen_point: Option<Point>,
    activated: Option<bool>,
}

#[cfg(target_os = "macos")]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut mapper = winmap::WindowCoordinateMapper::new(mac_winq::MacWindowQuery, &cli.title)
        .with_standard_resolution(cli.width, cli.height)
        .with_title_bar_offset(cli.title_bar_offset);

    let activated = cli.activate.then(|| mapper.activate());
    let report = Report {
        valid: mapper.is_valid(),
        active: mapper.is_active(),
        scaled: mapper.is_scaled(),
        owner_pid: mapper.cached_window().map(|w| w.owner_pid),
        window_rect: mapper.window_rect(),
        scaled_point: cli.point.and_then(|p| mapper.scale_point(p)),
        screen_point: cli.point.and_then(|p| mapper.to_screen_point(p)),
        activated,
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{s}"),
            Err(e) => {
                eprintln!("winmap-probe: JSON encode failed: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("valid:        {}", report.valid);
        println!("active:       {}", report.active);
        println!("scaled:       {}", report.scaled);
        if let Some(pid) = report.owner_pid {
            println!("owner pid:    {pid}");
        }
        if let Some(rect) = report.window_rect {
            println!(
                "window rect:  ({}, {}) - ({}, {})",
                rect.left_top().x,
                rect.left_top().y,
                rect.right_bottom().x,
                rect.right_bottom().y
            );
        }
        if let Some(p) = report.scaled_point {
            println!("scaled point: ({}, {})", p.x, p.y);
        }
        if let Some(p) = report.screen_point {
            println!("screen point: ({}, {})", p.x, p.y);
        }
        if let Some(ok) = report.activated {
            println!("activated:    {ok}");
        }
    }

    if report.valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(not(target_os = "macos"))]
fn main() -> ExitCode {
    eprintln!("winmap-probe: no window backend for this platform (macOS only)");
    ExitCode::FAILURE
}
