//! Vivarium
//!
//! A population of people wanders a bounded arena seeking food, shelter,
//! and mates while every frame is recorded into a video stream.
//!
//! Run with: cargo run -p recorder --bin vivarium
//!
//! Examples:
//!   vivarium --seed 7 --output run.y4m
//!   vivarium --format png --output frames/ --duration 10
//!   vivarium --config vivarium.toml --stats-out output/summary.json

use clap::{Parser, ValueEnum};
use std::error::Error;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use recorder::{PngSink, VideoRecorder, Y4mSink};
use sim_core::{stats, FrameRecorder, NullRecorder, SimConfig, Simulation};

/// Agent life simulation rendered into a video stream
#[derive(Parser, Debug)]
#[command(name = "vivarium")]
#[command(about = "Agent life simulation rendered into a video stream")]
struct Args {
    /// TOML configuration file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Arena and frame width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Arena and frame height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Frames per second
    #[arg(long)]
    fps: Option<u32>,

    /// Recorded duration in seconds
    #[arg(long)]
    duration: Option<u32>,

    /// Initial number of people
    #[arg(long)]
    people: Option<usize>,

    /// Initial number of food points
    #[arg(long)]
    food: Option<usize>,

    /// Initial number of shelters
    #[arg(long)]
    shelter: Option<usize>,

    /// Output path: a .y4m file, or a directory for PNG frames
    #[arg(long, default_value = "simulation.y4m")]
    output: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Y4m)]
    format: Format,

    /// Write the run summary JSON to this path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// Uncompressed YUV4MPEG2 stream
    Y4m,
    /// Numbered PNG frame sequence
    Png,
    /// Discard frames (headless run)
    None,
}

fn build_config(args: &Args) -> Result<SimConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => SimConfig::from_file(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(fps) = args.fps {
        config.fps = fps;
    }
    if let Some(duration) = args.duration {
        config.duration_secs = duration;
    }
    if let Some(people) = args.people {
        config.initial_people = people;
    }
    if let Some(food) = args.food {
        config.initial_food = food;
    }
    if let Some(shelter) = args.shelter {
        config.initial_shelter = shelter;
    }
    Ok(config)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = build_config(&args)?;

    println!("Vivarium");
    println!("========");
    println!("Seed: {}", config.seed);
    println!("Arena: {}x{}", config.width, config.height);
    println!(
        "Frames: {} ({} fps x {} s)",
        config.total_frames(),
        config.fps,
        config.duration_secs
    );
    println!(
        "Seeding: {} people, {} food, {} shelter",
        config.initial_people, config.initial_food, config.initial_shelter
    );
    println!();

    let mut sim = Simulation::new(config.clone())?;
    let mut recorder: Box<dyn FrameRecorder> = match args.format {
        Format::Y4m => Box::new(VideoRecorder::new(
            config.width,
            config.height,
            Y4mSink::create(&args.output, config.fps)?,
        )),
        Format::Png => Box::new(VideoRecorder::new(
            config.width,
            config.height,
            PngSink::new(&args.output)?,
        )),
        Format::None => Box::new(NullRecorder::new()),
    };

    let summary = sim.run(recorder.as_mut())?;

    println!("Simulation complete. Wrote {} frames.", summary.frames);
    println!(
        "Births: {}  Deaths: {} starved, {} of old age",
        summary.births, summary.deaths_starved, summary.deaths_old_age
    );
    println!(
        "Final population: {} (peak {})",
        summary.final_population, summary.peak_population
    );
    if !matches!(args.format, Format::None) {
        println!("Output: {}", args.output.display());
    }

    if let Some(path) = &args.stats_out {
        stats::write_summary(&summary, path)?;
        println!("Stats: {}", path.display());
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("vivarium: {e}");
        std::process::exit(1);
    }
}
