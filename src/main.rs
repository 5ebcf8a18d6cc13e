use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use swipedraw::{
    CalibrationHints, Calibrator, ConfigStore, Dispatcher, Mapper, Timing,
    calibration::terminal::TerminalFeedback,
    gesture_dispatcher::{DryRunDevice, adb::AdbDevice},
    pipeline, template,
};

#[derive(Debug, Parser)]
#[command(name = "swipedraw")]
#[command(about = "Draw images on an Android screen with adb swipe gestures")]
struct Cli {
    /// -v for debug output, -vv for every dropped run
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    /// Directory holding config.default.toml and config.toml
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Draw an image inside the configured area
    Draw(DrawArgs),
    /// Write a blank image the size of the drawable area
    Template(TemplateArgs),
    /// Find the drawable area of the connected screen
    Calibrate(CalibrateArgs),
}

#[derive(Debug, Args)]
struct DrawArgs {
    image: PathBuf,
    /// Draw every Nth inked row
    #[arg(long, default_value_t = 1)]
    step: usize,
    /// Minimum swipe duration in milliseconds
    #[arg(long = "min-duration", default_value_t = 200)]
    min_duration: u32,
    /// Device pixels per millisecond added on top of the minimum
    #[arg(long, default_value_t = 0.5)]
    speed: f64,
    /// Delay between swipes in milliseconds
    #[arg(long, default_value_t = 25)]
    delay: u64,
    #[arg(long)]
    serial: Option<String>,
    /// Compute the swipes without connecting to a device
    #[arg(long = "dry-run")]
    dry_run: bool,
}

#[derive(Debug, Args)]
struct TemplateArgs {
    output: PathBuf,
}

#[derive(Debug, Args)]
struct CalibrateArgs {
    #[arg(long)]
    serial: Option<String>,
    /// Scale to store with the result, defaults to the current one
    #[arg(long)]
    scale: Option<f64>,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_draw(store: &ConfigStore, args: DrawArgs) -> Result<()> {
    ensure!(args.step >= 1, "--step must be at least 1");
    ensure!(
        args.speed.is_finite() && args.speed > 0.0,
        "--speed must be a positive number"
    );

    let profile = store.load().context("loading drawing area")?;
    let raster = pipeline::load_raster(&args.image)?;
    let mapper = Mapper::new(profile.region, profile.placement());
    let timing = Timing {
        min_duration_ms: args.min_duration,
        speed: args.speed,
        delay_ms: args.delay,
    };
    if args.step > 1 {
        println!("Drawing every {} row(s)", args.step);
    }

    if args.dry_run {
        let mut dispatcher = Dispatcher::new(
            DryRunDevice::new(),
            Timing {
                delay_ms: 0,
                ..timing
            },
        );
        let report = pipeline::extract_and_draw(&raster, &mapper, &mut dispatcher, args.step)?;
        let device = dispatcher.into_device();
        let estimate_ms = device
            .total_duration_ms()
            .saturating_add(args.delay.saturating_mul(report.drawn as u64));
        println!(
            "Dry run: {} swipes, {} dropped, about {:.1}s on a device",
            report.drawn,
            report.dropped,
            estimate_ms as f64 / 1000.0
        );
        return Ok(());
    }

    let device = AdbDevice::connect(args.serial.as_deref()).context("connecting to device")?;
    let mut dispatcher = Dispatcher::new(device, timing);
    let report = pipeline::extract_and_draw(&raster, &mapper, &mut dispatcher, args.step)?;
    println!(
        "Drawing completed: {} swipes, {} dropped",
        report.drawn, report.dropped
    );
    Ok(())
}

fn run_template(store: &ConfigStore, args: TemplateArgs) -> Result<()> {
    let profile = store.load().context("loading drawing area")?;
    let img = template::render(&profile);
    img.save(&args.output)
        .with_context(|| format!("saving template to {}", args.output.display()))?;

    println!("Template saved to {}", args.output.display());
    println!("Dimensions: {}x{} pixels", img.width(), img.height());
    println!(
        "Scale: {0} (1 template pixel = {0:.2} screen pixels)",
        profile.scale
    );
    println!("White areas: drawable, Gray areas: cutoff regions");
    Ok(())
}

fn run_calibrate(store: &ConfigStore, args: CalibrateArgs) -> Result<()> {
    let reference = store.load().context("loading reference drawing area")?;
    let device = AdbDevice::connect(args.serial.as_deref()).context("connecting to device")?;
    let (screen_width, screen_height) = device.screen_size()?;

    println!("=== Binary Search Boundary Calibration ===");
    println!("Options: y=inside, n=outside, r=repeat, s=start over");
    println!(
        "Reference area: [{}, {}] x [{}, {}], screen {}x{}",
        reference.region.left,
        reference.region.right,
        reference.region.top,
        reference.region.bottom,
        screen_width,
        screen_height
    );

    let hints = CalibrationHints {
        screen_width,
        screen_height,
        reference: reference.region,
    };
    let mut dispatcher = Dispatcher::new(device, Timing::default());
    let region = Calibrator::new(&mut dispatcher, TerminalFeedback::stdio())
        .calibrate(&hints)
        .context("calibration aborted")?;

    // printed first so the values survive a rejected save
    println!("{region}");
    let scale = args.scale.unwrap_or(reference.scale);
    let path = store.save(&region, scale)?;
    println!("Configuration saved to {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let store = ConfigStore::new(cli.config_dir);
    match cli.command {
        Commands::Draw(args) => run_draw(&store, args),
        Commands::Template(args) => run_template(&store, args),
        Commands::Calibrate(args) => run_calibrate(&store, args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(err) = run(cli) {
        eprintln!("error: {err:?}");
        std::process::exit(1);
    }
}
