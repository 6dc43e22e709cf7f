//! # Sign Command
//!
//! This module implements the only command of the tool: load the author
//! configuration, sign every candidate file under a path and report results.

use std::path::PathBuf;
use std::process;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use crate::config::{ConfigPaths, load_config};
use crate::info_log;
use crate::logging::{ColorMode, init_tracing, set_quiet, set_verbose};
use crate::output::{
  print_blank_line, print_config_help, print_error, print_hint, print_modified_files, print_results,
  print_start_message,
};
use crate::processor::Processor;
use crate::report::write_json_report;

/// Arguments for the sign command
#[derive(Args, Debug, Default)]
pub struct SignArgs {
  /// Path to a file or directory to process (default: current directory)
  #[arg(long, value_name = "PATH")]
  pub path: Option<PathBuf>,

  /// Show what would be changed without modifying files
  #[arg(long)]
  pub dry_run: bool,

  /// Replace existing signatures instead of skipping signed files
  #[arg(long)]
  pub force: bool,

  /// Increase verbosity (-v lists modified files, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors and warnings
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Path to the global config file (default: ~/.signature.json)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Write a JSON report of the run to the specified path
  #[arg(long, value_name = "OUTPUT")]
  pub report_json: Option<PathBuf>,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Run the sign command with the given arguments
pub fn run_sign(args: SignArgs) -> Result<()> {
  init_tracing(args.quiet, args.verbose);

  if args.verbose > 0 {
    set_verbose();
  } else if args.quiet {
    set_quiet();
  }
  args.colors.apply();

  let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

  // Configuration problems are fatal before any file is touched
  let config_paths = match ConfigPaths::discover(args.config.as_deref(), &current_dir) {
    Ok(paths) => paths,
    Err(e) => {
      print_error(&format!("Configuration error: {e}"));
      process::exit(1);
    }
  };
  let config = match load_config(&config_paths) {
    Ok(config) => config,
    Err(e) => {
      print_error(&format!("Configuration error: {e}"));
      print_config_help(&config_paths.global);
      process::exit(1);
    }
  };
  debug!("Signing as {} <{}>", config.author, config.email);

  let root = args.path.unwrap_or(current_dir);
  if !root.exists() {
    print_error(&format!("Error: Path not found: {}", root.display()));
    process::exit(1);
  }

  print_start_message(&root, args.dry_run);

  let start_time = Instant::now();
  let processor = Processor::new(&config, args.dry_run, args.force);
  let stats = processor.process_path(&root);
  debug!("Finished in {:.2}s", start_time.elapsed().as_secs_f64());

  // The root can vanish between the existence check and the walk
  if stats.not_found {
    print_error(&format!("Error: Path not found: {}", root.display()));
    process::exit(1);
  }

  print_blank_line();
  print_results(&stats);

  if !stats.files.is_empty() && !args.quiet && args.verbose > 0 {
    print_blank_line();
    print_modified_files(&stats, &root);
  }

  if args.dry_run && stats.processed > 0 {
    print_blank_line();
    print_hint("Run without --dry-run to apply changes");
  }

  if let Some(ref output_path) = args.report_json {
    if let Err(e) = write_json_report(&stats, &root, args.dry_run, args.force, output_path) {
      print_error(&format!("Error generating JSON report: {e:#}"));
    } else {
      info_log!("Generated JSON report at {}", output_path.display());
    }
  }

  Ok(())
}
