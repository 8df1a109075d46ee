//! CLI entry point for i3av
//!
//! Lists the keys that are still free for the selected modifier
//! combinations in an i3 config.

use clap::{ArgAction, Parser};
use colored::*;
use i3av::config::{ConfigError, ConfigLocator};
use i3av::core::{
    catalog, AvailabilityIndex, BindingParser, Combination, CombinationError, Preset,
};
use i3av::keysource::{load_or_empty, KeycodeSource, StaticSource, XmodmapSource};
use log::{info, warn, LevelFilter};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status for a bad combination argument (EINVAL)
const EXIT_INVALID_ARGUMENT: u8 = 22;

#[derive(Parser)]
#[command(name = "i3av")]
#[command(author, version, about = "Lists available bindings for i3", long_about = None)]
struct Cli {
    /// Available $mod bindings
    #[arg(short = 'm', long = "mod")]
    mod_only: bool,

    /// Available $mod+Shift bindings
    #[arg(short, long)]
    shift: bool,

    /// Available $mod+Ctrl bindings
    #[arg(short, long)]
    ctrl: bool,

    /// Available $mod+Ctrl+Shift bindings
    #[arg(short, long)]
    triplet: bool,

    /// Available bindings for a custom combination, e.g. "Mod1+Shift"
    #[arg(short = 'k', long = "combo", value_name = "COMBO")]
    combos: Vec<String>,

    /// Path to i3 config file (searched for if not given)
    #[arg(short = 'f', long)]
    config: Option<PathBuf>,

    /// Name of the modifier variable used in the config
    #[arg(long = "mod-var", value_name = "NAME", default_value = "$mod")]
    mod_var: String,

    /// Key groups to check, comma separated (see --list-groups)
    #[arg(short, long, value_name = "GROUP", value_delimiter = ',')]
    groups: Vec<String>,

    /// List key groups and exit
    #[arg(long)]
    list_groups: bool,

    /// Don't run xmodmap; bindcode lines won't be resolved
    #[arg(long)]
    no_keycodes: bool,

    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Logs to stderr at warn by default; RUST_LOG takes precedence.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn exit_code(error: &anyhow::Error) -> u8 {
    if let Some(config_error) = error.downcast_ref::<ConfigError>() {
        config_error.exit_code()
    } else if error.downcast_ref::<CombinationError>().is_some() {
        EXIT_INVALID_ARGUMENT
    } else {
        1
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if cli.list_groups {
        list_groups();
        return Ok(());
    }

    // Validate combinations before touching the file system
    let combinations = selected_combinations(cli)?;
    let candidates = candidate_keys(&cli.groups);

    let path = ConfigLocator::from_env().locate(cli.config.as_deref())?;
    println!("Reading from {}", path.display());

    let keycodes = load_or_empty(&*keycode_source(cli));

    let bindings = BindingParser::new(&keycodes)
        .with_primary(cli.mod_var.as_str())
        .parse_file(&path)?;
    info!("Found {} bindings", bindings.len());

    let index = AvailabilityIndex::from_bindings(&bindings);

    for combination in &combinations {
        let free = index.available(&candidates, combination.modifiers);

        println!("\n{}", format!("Available {}:", combination).bold());
        println!("{}", free.join(", "));
    }

    Ok(())
}

fn keycode_source(cli: &Cli) -> Box<dyn KeycodeSource> {
    if cli.no_keycodes {
        Box::new(StaticSource::default())
    } else {
        Box::new(XmodmapSource::new())
    }
}

/// Predefined flags first, in fixed order, then custom combinations.
///
/// With nothing selected, all four predefined combinations are reported.
fn selected_combinations(cli: &Cli) -> Result<Vec<Combination>, CombinationError> {
    let flags = [
        (cli.mod_only, Preset::Mod),
        (cli.shift, Preset::Shift),
        (cli.ctrl, Preset::Ctrl),
        (cli.triplet, Preset::Triplet),
    ];

    let mut combinations: Vec<Combination> = flags
        .iter()
        .filter(|(selected, _)| *selected)
        .map(|(_, preset)| Combination::preset(*preset, &cli.mod_var))
        .collect();

    for spec in &cli.combos {
        combinations.push(Combination::parse(spec, &cli.mod_var)?);
    }

    if combinations.is_empty() {
        combinations = Preset::ALL
            .iter()
            .map(|preset| Combination::preset(*preset, &cli.mod_var))
            .collect();
    }

    Ok(combinations)
}

fn candidate_keys(groups: &[String]) -> Vec<String> {
    if groups.is_empty() {
        return catalog::resolve(catalog::DEFAULT_GROUPS);
    }

    for name in groups {
        if catalog::group(name).is_none() {
            warn!("Unknown key group '{}' (see --list-groups)", name);
        }
    }

    catalog::resolve(groups)
}

fn list_groups() {
    for name in catalog::group_names() {
        let keys = catalog::group(name).unwrap_or_default();
        let marker = if catalog::DEFAULT_GROUPS.contains(&name) {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };

        println!("{}{}", name.cyan().bold(), marker);
        println!("  {}", keys.join(", "));
    }
}
