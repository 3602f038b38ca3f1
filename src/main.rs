// SPDX-License-Identifier: MPL-2.0
use pillbox::app::{self, Flags};
use pillbox::config::paths;
use pillbox::platform::{Edge, PlatformKind};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
pillbox - pill notification demo

USAGE:
  pillbox [OPTIONS]

OPTIONS:
  --config-dir <DIR>    Read settings.toml from DIR
  --platform <NAME>     touch or desktop
  --edge <EDGE>         top or bottom
  -h, --help            Print this help
";

fn parse_args() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        platform: args.opt_value_from_str::<_, PlatformKind>("--platform")?,
        edge: args.opt_value_from_str::<_, Edge>("--edge")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Ignoring unexpected arguments: {remaining:?}");
    }
    Ok(Some(flags))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pillbox=info")),
        )
        .init();

    let flags = match parse_args() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_override(flags.config_dir.clone());

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
