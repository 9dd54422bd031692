//! Drift activity agent entry point.
//!
//! Loads the configuration, installs logging, wires the platform backends
//! into an [`ActivityService`], then runs the schedule on a single-threaded
//! Tokio runtime until Ctrl-C (or until `--actions` actions ran).
//!
//! # Usage
//!
//! ```text
//! drift-agent [OPTIONS]
//!
//! Options:
//!   --config <PATH>   Config file [default: platform config dir]
//!   --seed <SEED>     Seed the random generator for a reproducible run
//!   --dry-run         Simulate the desktop; inject nothing
//!   --actions <N>     Stop after N scheduled actions
//!   --init-config     Write the default config file and exit
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable       | Description                                   |
//! |----------------|-----------------------------------------------|
//! | `DRIFT_CONFIG` | Same as `--config`                            |
//! | `DRIFT_SEED`   | Same as `--seed`                              |
//! | `RUST_LOG`     | Log filter; overrides `[logging] log_level`   |

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use drift_agent::application::{
    activity::ActivityService, inject_input::InputInjector, query_desktop::DesktopProbe,
    shutdown::ShutdownSignal,
};
use drift_agent::infrastructure::{
    simulated::SimulatedDesktop,
    storage::config::{load_config, save_config, AgentConfig},
};
use drift_core::{MotionEngine, Point, ScreenBounds};

/// Screen used by `--dry-run`.
const DRY_RUN_BOUNDS: ScreenBounds = ScreenBounds::new(1920, 1080);

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Keeps a desktop session active with human-looking cursor motion and
/// harmless key taps at random intervals.
#[derive(Debug, Parser)]
#[command(name = "drift-agent", version)]
struct Cli {
    /// Configuration file.  Defaults to `config.toml` in the platform config
    /// directory; a missing default file means built-in defaults.
    #[arg(long, env = "DRIFT_CONFIG")]
    config: Option<PathBuf>,

    /// Seed for the random generator.  The same seed and configuration replay
    /// the same motions and intervals.
    #[arg(long, env = "DRIFT_SEED")]
    seed: Option<u64>,

    /// Log actions against a simulated 1920x1080 desktop instead of the real one.
    #[arg(long)]
    dry_run: bool,

    /// Stop after this many scheduled actions.
    #[arg(long)]
    actions: Option<u64>,

    /// Write the default configuration file (to `--config` or the platform
    /// location) and exit.
    #[arg(long)]
    init_config: bool,
}

type Backends = (Box<dyn InputInjector>, Box<dyn DesktopProbe>);

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = save_config(&AgentConfig::default(), cli.config.as_deref())
            .context("writing default configuration")?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    let config = load_config(cli.config.as_deref()).context("loading configuration")?;

    // RUST_LOG wins over the configured level.
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.logging.log_level)
            .with_context(|| format!("invalid log_level {:?}", config.logging.log_level))?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("drift agent starting");

    let (injector, desktop) = if cli.dry_run {
        info!("dry run: simulating a {}x{} desktop", DRY_RUN_BOUNDS.width, DRY_RUN_BOUNDS.height);
        let center = Point::new(
            (DRY_RUN_BOUNDS.width / 2) as i32,
            (DRY_RUN_BOUNDS.height / 2) as i32,
        );
        let sim = SimulatedDesktop::new(DRY_RUN_BOUNDS, center);
        (Box::new(sim.clone()) as Box<dyn InputInjector>, Box::new(sim) as Box<dyn DesktopProbe>)
    } else {
        native_backends()?
    };

    let bounds = desktop.screen_bounds().context("reading screen size")?;
    info!("screen is {}x{}", bounds.width, bounds.height);

    let rng = match cli.seed {
        Some(seed) => {
            info!("using seed {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    };

    // ── Ctrl-C handler ────────────────────────────────────────────────────────
    let shutdown = Arc::new(ShutdownSignal::new());
    let shutdown_clone = Arc::clone(&shutdown);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            shutdown_clone.trigger();
        }
    });

    let mut service = ActivityService::new(
        injector,
        desktop,
        bounds,
        MotionEngine::new(config.motion()),
        config.activity.clone(),
        config.schedule.clone(),
        rng,
    );
    let performed = service.run(&shutdown, cli.actions).await;

    info!("drift agent stopped after {performed} action(s)");
    Ok(())
}

// ── Platform backends ─────────────────────────────────────────────────────────

#[cfg(target_os = "windows")]
fn native_backends() -> anyhow::Result<Backends> {
    use drift_agent::infrastructure::{
        desktop::NativeDesktopProbe, input_injection::NativeInputInjector,
    };
    let injector = NativeInputInjector::new().context("initialising SendInput backend")?;
    Ok((Box::new(injector), Box::new(NativeDesktopProbe::new())))
}

#[cfg(all(target_os = "linux", feature = "xtest"))]
fn native_backends() -> anyhow::Result<Backends> {
    use drift_agent::infrastructure::{
        desktop::NativeDesktopProbe, input_injection::NativeInputInjector,
    };
    let injector = NativeInputInjector::new().context("initialising XTest backend")?;
    let desktop = NativeDesktopProbe::new().context("opening X display")?;
    Ok((Box::new(injector), Box::new(desktop)))
}

#[cfg(target_os = "macos")]
fn native_backends() -> anyhow::Result<Backends> {
    use drift_agent::infrastructure::{
        desktop::NativeDesktopProbe, input_injection::NativeInputInjector,
    };
    Ok((
        Box::new(NativeInputInjector::new()),
        Box::new(NativeDesktopProbe::new()),
    ))
}

#[cfg(not(any(
    target_os = "windows",
    all(target_os = "linux", feature = "xtest"),
    target_os = "macos"
)))]
fn native_backends() -> anyhow::Result<Backends> {
    anyhow::bail!("this build has no native input backend; run with --dry-run")
}
