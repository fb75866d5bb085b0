mod cmd;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fermenter_lib::descriptor::Action;
use fermenter_lib::platform::Arch;

use crate::cmd::Settings;
use crate::output::{OutputFormat, print_error};

/// fermenter - build, install and test packages described by barrel files
#[derive(Parser)]
#[command(name = "fermenter")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Directory holding barrel files (default: $FERMENTER_BARRELS, then Barrels/ next to the executable)
  #[arg(long, global = true, value_name = "DIR")]
  barrels: Option<PathBuf>,

  /// Install root; packages run in <ROOT>/Installed/<name> (default: $FERMENTER_ROOT or /usr/local/ferment)
  #[arg(long, global = true, value_name = "DIR")]
  root: Option<PathBuf>,

  /// Architecture for amd64:/arm64: blocks instead of the detected one
  #[arg(long, global = true, value_name = "ARCH")]
  arch: Option<Arch>,

  /// Enable verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Run the build script of a package
  Build {
    /// Package name or path to a barrel file
    package: String,
  },

  /// Run the install script of a package
  Install {
    /// Package name or path to a barrel file
    package: String,
  },

  /// Run build, install and then the test script of a package
  Test {
    /// Package name or path to a barrel file
    package: String,
  },

  /// Show the parsed descriptor of a package
  Info {
    /// Package name or path to a barrel file
    package: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },

  /// Check which declared dependencies are on PATH
  Deps {
    /// Package name or path to a barrel file
    package: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
  },
}

fn init_tracing(verbose: bool) {
  let default = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let settings = Settings::resolve(cli.barrels, cli.root, cli.arch);

  let result = match cli.command {
    Commands::Build { package } => cmd::cmd_run(&settings, &package, &[Action::Build]),
    Commands::Install { package } => cmd::cmd_run(&settings, &package, &[Action::Install]),
    Commands::Test { package } => cmd::cmd_run(&settings, &package, &Action::ALL),
    Commands::Info { package, format } => cmd::cmd_info(&settings, &package, format),
    Commands::Deps { package, format } => cmd::cmd_deps(&settings, &package, format),
  };

  match result {
    Ok(()) => ExitCode::SUCCESS,
    // Library errors already embed their causes
    Err(err) => {
      print_error(&err.to_string());
      ExitCode::FAILURE
    }
  }
}
