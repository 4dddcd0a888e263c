use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use matchcopy::{
    find_all_matches, resolve_specs, transfer_all, write_receipt, AppConfig, MatchCopyError,
    TransferMode,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command line arguments
    let matches = Command::new("matchcopy")
        .version("1.0")
        .about("Find files matching glob patterns and copy or move them, preserving structure")
        .arg(
            Arg::new("src")
                .required(true)
                .help("Path to the source root directory to search"),
        )
        .arg(
            Arg::new("dst")
                .required(true)
                .help("Path to the destination root directory for matching files"),
        )
        .arg(
            Arg::new("patterns")
                .short('p')
                .long("patterns")
                .value_name("PATTERN")
                .num_args(1..)
                .help("Filename patterns (glob syntax, matched against the stem)"),
        )
        .arg(
            Arg::new("input-file")
                .short('i')
                .long("input-file")
                .value_name("PATH")
                .help("CSV file with a `pattern` column and optional `extensions` column"),
        )
        .arg(
            Arg::new("exts")
                .short('e')
                .long("exts")
                .value_name("EXT")
                .num_args(1..)
                .help("Default extension allow-list for patterns without their own"),
        )
        .arg(
            Arg::new("mode")
                .short('m')
                .long("mode")
                .value_name("MODE")
                .value_parser(["copy", "c", "move", "m"])
                .default_value("copy")
                .help("What to do with matched files"),
        )
        .arg(
            Arg::new("yes")
                .short('y')
                .long("yes")
                .action(ArgAction::SetTrue)
                .help("Skip all interactive confirmations"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Set the log level (trace, debug, info, warn, error)")
                .default_value("info"),
        )
        .get_matches();

    // Initialize configuration from command line arguments
    let config = create_app_config(&matches)?;

    // Initialize logging
    initialize_logging(&config.log_level)?;

    // Run the application
    run_application(config)
}

/// Create application configuration from CLI arguments
fn create_app_config(matches: &clap::ArgMatches) -> Result<AppConfig> {
    let collect_values = |id: &str| -> Vec<String> {
        matches
            .get_many::<String>(id)
            .map(|values| values.cloned().collect())
            .unwrap_or_default()
    };

    let mode: TransferMode = matches
        .get_one::<String>("mode")
        .expect("mode has a default")
        .parse()?;

    Ok(AppConfig {
        src: PathBuf::from(matches.get_one::<String>("src").expect("src is required")),
        dst: PathBuf::from(matches.get_one::<String>("dst").expect("dst is required")),
        input_file: matches.get_one::<String>("input-file").map(PathBuf::from),
        patterns: collect_values("patterns"),
        exts: collect_values("exts"),
        mode,
        assume_yes: matches.get_flag("yes"),
        log_level: matches
            .get_one::<String>("log-level")
            .expect("log-level has a default")
            .clone(),
    })
}

/// Initialize structured logging with tracing
fn initialize_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

/// Validate and absolutize the run's paths, confirming each with the
/// operator. Any refusal aborts the run before filesystem changes.
fn validate_paths(config: &mut AppConfig) -> Result<bool> {
    match confirm_existing_path(&config.src, "source dir", config.assume_yes)? {
        Some(path) => config.src = path,
        None => return Ok(false),
    }

    match confirm_existing_path(&config.dst, "destination dir", config.assume_yes)? {
        Some(path) => config.dst = path,
        None => return Ok(false),
    }

    if let Some(input_file) = config.input_file.take() {
        match confirm_existing_path(&input_file, "input file", config.assume_yes)? {
            Some(path) => config.input_file = Some(path),
            None => return Ok(false),
        }
    }

    if config.mode == TransferMode::Move {
        println!("WARNING: mode value set to \"move\". Confirm this is correct.");
        if !confirm("+ y/n: ", config.assume_yes)? {
            warn!("Exiting: rerun with correct mode value");
            return Ok(false);
        }
    }

    Ok(true)
}

/// Check a path exists, absolutize it, and ask the operator to confirm it.
/// Returns `None` when the operator declines.
fn confirm_existing_path(path: &Path, label: &str, assume_yes: bool) -> Result<Option<PathBuf>> {
    if !path.exists() {
        return Err(MatchCopyError::InputNotFound(path.to_path_buf()).into());
    }
    let absolute = path.canonicalize()?;

    println!("Confirm {} path is correct: {}", label, absolute.display());
    if confirm("+ y/n: ", assume_yes)? {
        Ok(Some(absolute))
    } else {
        warn!("Exiting: rerun with correct {} path", label);
        Ok(None)
    }
}

/// Blocking y/n prompt; `assume_yes` short-circuits to true.
fn confirm(prompt: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }

    print!("{}", prompt);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim() == "y")
}

/// Main application logic: resolve specs, discover matches, confirm, then
/// transfer and write the receipt.
fn run_application(mut config: AppConfig) -> Result<()> {
    info!("Starting matchcopy run");

    if !validate_paths(&mut config)? {
        return Ok(());
    }

    // Build the pattern specs before touching the source tree
    let specs = resolve_specs(
        config.input_file.as_deref(),
        &config.patterns,
        &config.exts,
    )?;

    // Search src for every pattern
    let matches = find_all_matches(&config.src, &specs)?;
    info!("Found {} matching files", matches.len());

    if !config.assume_yes && confirm("+ Show all matches? y/n: ", false)? {
        for (i, path) in matches.iter().enumerate() {
            println!("{}. {}", i + 1, path.display());
        }
    }

    if !confirm("+ Continue? y/n: ", config.assume_yes)? {
        warn!("Exiting before any transfer");
        return Ok(());
    }

    // Copy/move matching files from src to dst
    let records = transfer_all(&matches, &config.src, &config.dst, config.mode)?;

    // Write receipts to the current working directory
    let receipt_path = write_receipt(&records, &env::current_dir()?)?;

    info!("Run complete");
    println!("Receipts located at: {}", receipt_path.display());
    Ok(())
}
