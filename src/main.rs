use std::path::PathBuf;

use clap::Parser;

use slang_dist::commands;
use slang_dist::core::config::{
  DEFAULT_MAIN_PACKAGE, DEFAULT_OUTPUT_DIR, DEFAULT_PRODUCT, DistConfig,
};
use slang_dist::core::error::{DistError, print_error};
use slang_dist::release::TimestampFormat;

/// Cross-compile slangd for every release target and package the archives
#[derive(Parser)]
#[command(name = "slang-dist")]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
struct Cli {
  /// Version tag to release (e.g. v1.0.0)
  #[arg(id = "release-version", value_name = "VERSION")]
  version: String,

  /// Product name used as the filename prefix of every artifact
  #[arg(long, default_value = DEFAULT_PRODUCT)]
  product: String,

  /// Package path handed to the cross compiler
  #[arg(long, default_value = DEFAULT_MAIN_PACKAGE)]
  main_package: String,

  /// Directory the binaries and archives are written into
  #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
  output_dir: PathBuf,

  /// How the build time is rendered into the binary
  #[arg(long, value_enum, default_value_t = TimestampFormat::Epoch)]
  timestamp: TimestampFormat,

  /// Show the release plan without executing any command
  #[arg(long)]
  dry_run: bool,

  /// Output the release plan in JSON format (with --dry-run)
  #[arg(long, requires = "dry_run")]
  json: bool,
}

fn get_styles() -> clap::builder::Styles {
  clap::builder::Styles::styled()
    .usage(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .header(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Yellow))),
    )
    .literal(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))))
    .invalid(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .error(
      anstyle::Style::new()
        .bold()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Red))),
    )
    .valid(
      anstyle::Style::new()
        .bold()
        .underline()
        .fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::Green))),
    )
    .placeholder(anstyle::Style::new().fg_color(Some(anstyle::Color::Ansi(anstyle::AnsiColor::White))))
}

fn main() {
  let cli = Cli::parse();

  let config = DistConfig {
    product: cli.product,
    main_package: cli.main_package,
    output_dir: cli.output_dir,
    timestamp: cli.timestamp,
  };

  if let Err(err) = commands::run_release(&config, &cli.version, cli.dry_run, cli.json) {
    handle_error(err);
  }
}

fn handle_error(err: DistError) -> ! {
  print_error(&err);
  std::process::exit(err.exit_code());
}
