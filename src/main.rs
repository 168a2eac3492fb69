// in-crate modules
mod calibration;
mod color;
mod color_curve;
mod compensator;
mod config;
mod error;
mod settings;
mod tier;

// in-crate imports
use calibration::*;
use color_curve::ColorCurve;
use compensator::*;
use config::*;
use settings::*;
use tier::select_tier;

// my libraries
use xdg_dirs::{dirs, xdg_location_of, xdg_user_dir};

// STD
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::{fs, process, thread, time};

// 3rd party libraries
use anyhow::Context;
use clap::{Parser, Subcommand};
use log::info;

const CONFIG_PATH: &str = "refresh-color/config.json";

/// Looked up in the working directory before the user's config directory.
const LOCAL_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Subcommand, PartialEq)]
enum Command {
    #[command(
        about = "(default) Poll screen brightness and apply the calibration color for the current refresh rate tier."
    )]
    Run,

    #[command(
        about = "Check configuration file syntax and print the colors that will be applied for the selected refresh rate tier."
    )]
    Check,

    #[command(about = "Generate a default config file")]
    GenConfig,
}

#[derive(Debug, Parser, PartialEq)]
#[command(
    about = "Adjusts display color calibration with screen brightness, per refresh rate tier",
    version
)]
struct Args {
    #[arg(
        global = true,
        short,
        long = "config",
        help = format!("Path to configuration file. Defaults to `{LOCAL_CONFIG_PATH}` in the working directory, then `{CONFIG_PATH}` under the user's config directory."),
    )]
    config_path: Option<PathBuf>,

    #[arg(
        global = true,
        short = 's',
        long = "interval",
        value_name = "SECONDS",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..),
        help = "Seconds between brightness checks",
    )]
    interval: u64,

    #[arg(
        global = true,
        short = 'r',
        long = "refresh-rate",
        value_name = "HZ",
        help = format!("Use this refresh rate instead of reading the `{PEAK_REFRESH_RATE}` setting"),
    )]
    refresh_rate: Option<i32>,

    #[arg(
        global = true,
        long = "apply-command",
        value_name = "COMMAND",
        default_value = DEFAULT_APPLY_COMMAND,
        help = "Command run with \"<red> <green> <blue>\" to apply a calibration color",
    )]
    apply_command: String,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    /// Get the config path, and verify the file exists. This is the path passed as an arg, or
    /// `config.json` in the working directory, or from the XDG directory.
    ///
    /// This returns error if the path does not exist.
    fn get_config_path(&self) -> anyhow::Result<PathBuf> {
        match &self.config_path {
            Some(path) => path
                .canonicalize()
                .with_context(|| format!("Could not open config file `{0}`", path.display())),
            None => {
                let local = PathBuf::from(LOCAL_CONFIG_PATH);
                if local.is_file() {
                    return Ok(local);
                }
                xdg_location_of(&dirs::CONFIG, CONFIG_PATH)
                    .with_context(|| "Could not find config file in any standard location")
            }
        }
    }

    fn interval(&self) -> time::Duration {
        time::Duration::from_secs(self.interval)
    }
}

/// Load the configuration from the file found by `Args::get_config_path`.
fn get_config(args: &Args) -> anyhow::Result<Config> {
    let path = args.get_config_path()?;
    info!("Reading config from {path}", path = path.display());
    Config::read_from_file(&path)
        .with_context(|| format!("Failed to load configuration `{0}`", path.display()))
}

/// Refresh rate from the CLI override, or from the system settings.
fn get_refresh_rate<R: SettingReader>(args: &Args, settings: &mut R) -> anyhow::Result<i32> {
    match args.refresh_rate {
        Some(rate) => Ok(rate),
        None => settings
            .read_int_setting(PEAK_REFRESH_RATE)
            .with_context(|| "Failed to read the display refresh rate"),
    }
}

/// Select the tier for `refresh_rate` and build its color curve.
fn curve_for_refresh_rate(refresh_rate: i32, config: &Config) -> anyhow::Result<(i32, ColorCurve)> {
    let tier = select_tier(refresh_rate, config)?;
    let curve = ColorCurve::from_breakpoints(tier.breakpoints.clone())
        .with_context(|| format!("Refresh rate tier {0}Hz", tier.refresh_rate))?;

    Ok((tier.refresh_rate, curve))
}

fn main() -> anyhow::Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // --help and --version are reported through the error path as well
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::debug!("args = {args:?}");

    // process commands
    match args.command {
        // Primary behaviour: repeatedly read brightness and apply colors
        None | Some(Command::Run) => main_loop(&args),

        // Test config file: make sure it exists, can be read, and can be parsed
        Some(Command::Check) => check_config(&args),

        // Generate config file: if the file does not already exist, write
        Some(Command::GenConfig) => gen_config_file(&args),
    }
}

/// Verify the config file, select the tier for the refresh rate, and print the colors it produces.
fn check_config(args: &Args) -> anyhow::Result<()> {
    // Try to _find_ the config file
    let path = args
        .get_config_path()
        .with_context(|| "Failed to find config file")?;

    // Try to _parse_ the config file
    println!("Attempting to load config from `{0}`", path.display());
    let config = Config::read_from_file(&path).with_context(|| "Failed to parse configuration")?;

    for tier in &config.tiers {
        println!(
            "Tier {0}Hz: {1} brightness levels",
            tier.refresh_rate,
            tier.breakpoints.len()
        );
    }

    let refresh_rate = get_refresh_rate(args, &mut SystemSettings)?;
    let (tier_rate, curve) = curve_for_refresh_rate(refresh_rate, &config)?;
    let levels: Vec<String> = curve
        .breakpoints()
        .iter()
        .map(|b| format!("{0}%", b.brightness))
        .collect();
    println!("\nRefresh rate {refresh_rate}Hz uses tier {tier_rate}Hz ({0}):", levels.join(", "));
    for percent in (0..=100).step_by(10) {
        println!("  {percent:>3}% -> {0}", curve.color_for_brightness(percent));
    }

    Ok(())
}

/// Generate a default configuration file, at the expected location based on args or environment variables.
fn gen_config_file(args: &Args) -> anyhow::Result<()> {
    // CLI arg path, or default from environment
    let path = args
        .config_path
        .clone()
        .map_or_else(|| xdg_user_dir(&dirs::CONFIG, CONFIG_PATH), Ok)
        .with_context(|| "Could not determine location for config file")?;

    // Create parent directory path if applicable
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| {
            format!(
                "Failed to create parent directory of the new config file {0}",
                path.display()
            )
        })?;
    }

    let mut file = File::create_new(&path)
        .with_context(|| format!("Failed to create new config file {0}", path.display()))?;

    write!(file, "{}", DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write the new config file {0}", path.display()))?;

    println!("Wrote default configuration to {0}", path.display());
    Ok(())
}

/// Default daemon behaviour: read config and refresh rate once, then poll brightness forever.
fn main_loop(args: &Args) -> anyhow::Result<()> {
    let config = get_config(args)?;

    let mut settings = SystemSettings;
    let refresh_rate = get_refresh_rate(args, &mut settings)?;
    let (tier_rate, curve) = curve_for_refresh_rate(refresh_rate, &config)?;
    info!("Refresh rate {refresh_rate}Hz, using tier {tier_rate}Hz");

    let mut applier = CommandApplier::new(args.apply_command.as_str());
    let mut compensator = Compensator::new(curve);
    let interval = args.interval();

    // Main loop: a failed brightness read ends the process
    loop {
        compensator
            .update(&mut settings, &mut applier)
            .with_context(|| "Failed to read screen brightness")?;

        thread::sleep(interval);
    }
}
