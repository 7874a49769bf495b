//! Shore transect sampler: prints the water surface along a line running
//! out to sea, as CSV.
//!
//! Usage: cargo run --release --bin shore_transect -- [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Shore config JSON (default: built-in coefficients)
//!   --seed <SEED>     Along-shore seed (default: random)
//!   --time <SECONDS>  Session time (default: 0)
//!   --from <X>        First offshore distance (default: -20)
//!   --to <X>          Last offshore distance (default: 80)
//!   --step <METERS>   Sample spacing (default: 0.5)
//!   --z <Z>           Along-shore position of the transect (default: 0)
//!   --frames <N>      Number of frames to print (default: 1)
//!   --dt <SECONDS>    Time between frames (default: 0.1)
//!   --write-config <PATH>  Save the effective config and exit
//!
//! Output columns: `time,x,height`; dry samples leave `height` empty.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use glam::Vec3;

use seashore::session::clock::unix_ticks_now;
use seashore::session::ShoreSync;
use seashore::shore::{ShoreConfig, ShorelineField};

fn main() {
    seashore::core::logging::init();

    if let Err(e) = run() {
        log::error!("shore_transect: {}", e);
        std::process::exit(1);
    }
}

fn run() -> seashore::core::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config_path = parse_str_arg(&args, "--config").map(PathBuf::from);
    let seed = parse_f32_arg(&args, "--seed");
    let time = parse_f64_arg(&args, "--time").unwrap_or(0.0);
    let from = parse_f32_arg(&args, "--from").unwrap_or(-20.0);
    let to = parse_f32_arg(&args, "--to").unwrap_or(80.0);
    let step = parse_f32_arg(&args, "--step").unwrap_or(0.5).max(0.001);
    let z = parse_f32_arg(&args, "--z").unwrap_or(0.0);
    let frames = parse_usize_arg(&args, "--frames").unwrap_or(1).max(1);
    let dt = parse_f64_arg(&args, "--dt").unwrap_or(0.1);

    let config = match &config_path {
        Some(path) => ShoreConfig::load(path)?,
        None => ShoreConfig::default(),
    };

    if let Some(path) = parse_str_arg(&args, "--write-config") {
        config.save(&PathBuf::from(&path))?;
        log::info!("Wrote config to {}", path);
        return Ok(());
    }

    let seed = match seed {
        Some(seed) => seed,
        None => ShoreSync::generate(&mut rand::thread_rng(), unix_ticks_now()).seed,
    };
    let field = ShorelineField::new(config, seed)?;

    let count = ((to - from) / step).floor().max(0.0) as usize + 1;
    let points: Vec<Vec3> = (0..count)
        .map(|i| Vec3::new(from + i as f32 * step, 0.0, z))
        .collect();

    log::info!(
        "Sampling {} points x {} frames, seed={:.3}, max shoreline length={:.2}",
        count, frames, seed, field.max_shoreline_length()
    );

    let start = Instant::now();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "time,x,height")?;

    for frame in 0..frames {
        let t = time + frame as f64 * dt;
        let heights = field.sample_transect(&points, t);
        for (p, h) in points.iter().zip(&heights) {
            match h {
                Some(h) => writeln!(out, "{:.3},{:.3},{:.5}", t, p.x, h)?,
                None => writeln!(out, "{:.3},{:.3},", t, p.x)?,
            }
        }
    }
    out.flush()?;

    log::info!("Done in {:.1} ms", start.elapsed().as_secs_f64() * 1000.0);
    Ok(())
}

fn parse_f32_arg(args: &[String], flag: &str) -> Option<f32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_f64_arg(args: &[String], flag: &str) -> Option<f64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_usize_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
