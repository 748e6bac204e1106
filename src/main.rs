// SPDX-License-Identifier: MPL-2.0
use glacier_ui::config::{self, UiConfig};
use glacier_ui::showcase::{self, Flags};
use glacier_ui::theme::ThemeMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: glacier-showcase [OPTIONS]

Options:
  --config PATH                 Load UI settings from PATH instead of the user config
  --theme light|dark|system     Override the configured theme mode
  -h, --help                    Print this help
";

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    theme: Option<ThemeMode>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let parsed = Args {
        config: args.opt_value_from_os_str("--config", |s| {
            Ok::<_, std::convert::Infallible>(PathBuf::from(s))
        })?,
        theme: args.opt_value_from_fn("--theme", str::parse::<ThemeMode>)?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(parsed))
}

fn load_config(path: Option<&PathBuf>) -> UiConfig {
    match path {
        Some(path) => config::load_from_path(path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), error = %err, "using default UI config");
            UiConfig::default()
        }),
        None => config::load().0,
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("glacier_ui=info")),
        )
        .init();

    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{USAGE}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{USAGE}");
            std::process::exit(2);
        }
    };

    let flags = Flags {
        config: load_config(args.config.as_ref()),
        theme_mode: args.theme,
    };
    tracing::info!(mode = ?flags.theme_mode, "starting showcase");
    showcase::run(flags)
}
