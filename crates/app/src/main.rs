use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use phonics_core::TutorialSettings;
use services::{Clock, TutorialServices};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, WebSpeech, build_app_context};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    UnreadableSettings { path: PathBuf, source: std::io::Error },
    InvalidSettings { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::UnreadableSettings { path, source } => {
                write!(f, "cannot read settings file {}: {source}", path.display())
            }
            ArgsError::InvalidSettings { path, source } => {
                write!(f, "invalid settings file {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::UnreadableSettings { source, .. } => Some(source),
            ArgsError::InvalidSettings { source, .. } => Some(source),
            ArgsError::MissingValue { .. } | ArgsError::UnknownArg(_) => None,
        }
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    tutorial: TutorialServices,
}

impl UiApp for DesktopApp {
    fn tutorial(&self) -> TutorialServices {
        self.tutorial.clone()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    speech: bool,
    settings_path: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--no-speech] [--settings <path.json>]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --no-speech         keep audio feedback visual only");
    eprintln!("  --settings <path>   JSON file overriding timing settings");
    eprintln!("  --help              show this message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PHONICS_SPEECH=off  same as --no-speech");
    eprintln!("  PHONICS_LOG         tracing filter (falls back to RUST_LOG, then info)");
}

fn speech_switched_off(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "off" | "0" | "false" | "no"
    )
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut speech = !env("PHONICS_SPEECH").is_some_and(|value| speech_switched_off(&value));
        let mut settings_path = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--no-speech" => speech = false,
                "--settings" => {
                    settings_path = Some(PathBuf::from(require_value(args, "--settings")?));
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            speech,
            settings_path,
        }))
    }
}

fn log_directive(env: impl Fn(&str) -> Option<String>) -> String {
    env("PHONICS_LOG")
        .or_else(|| env("RUST_LOG"))
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<TutorialSettings, ArgsError> {
    let Some(path) = path else {
        return Ok(TutorialSettings::default());
    };
    let raw = std::fs::read_to_string(path).map_err(|source| ArgsError::UnreadableSettings {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ArgsError::InvalidSettings {
        path: path.to_path_buf(),
        source,
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let env = |key: &str| std::env::var(key).ok();
    let mut argv = std::env::args().skip(1);
    let args = match Args::parse(&mut argv, env) {
        Ok(Parsed::Run(args)) => args,
        Ok(Parsed::Help) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    init_tracing(&log_directive(env));

    let settings = load_settings(args.settings_path.as_deref())?;
    let settings = settings.with_speech(args.speech && settings.speech_enabled());
    tracing::info!(speech = settings.speech_enabled(), "starting tutorial");

    let tutorial = TutorialServices::new(settings, Clock::system(), Arc::new(WebSpeech::new()))?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { tutorial });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Reading Adventures")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str], env: &[(&str, &str)]) -> Result<Parsed, ArgsError> {
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        let lookup = move |key: &str| {
            env.iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };
        let mut iter = args.iter().map(|arg| (*arg).to_string());
        Args::parse(&mut iter, lookup)
    }

    #[test]
    fn defaults_keep_speech_on() {
        let parsed = parse(&[], &[]).unwrap();
        assert_eq!(
            parsed,
            Parsed::Run(Args {
                speech: true,
                settings_path: None,
            })
        );
    }

    #[test]
    fn flag_and_env_switch_speech_off() {
        let Parsed::Run(args) = parse(&["--no-speech"], &[]).unwrap() else {
            panic!("expected run");
        };
        assert!(!args.speech);

        let Parsed::Run(args) = parse(&[], &[("PHONICS_SPEECH", "OFF")]).unwrap() else {
            panic!("expected run");
        };
        assert!(!args.speech);
    }

    #[test]
    fn settings_flag_needs_a_path() {
        let err = parse(&["--settings"], &[]).unwrap_err();
        assert_eq!(err.to_string(), "--settings requires a value");

        let Parsed::Run(args) = parse(&["--settings", "slow.json"], &[]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(args.settings_path, Some(PathBuf::from("slow.json")));
    }

    #[test]
    fn unknown_argument_and_help() {
        let err = parse(&["--verbose"], &[]).unwrap_err();
        assert_eq!(err.to_string(), "unknown argument: --verbose");
        assert_eq!(parse(&["--help"], &[]).unwrap(), Parsed::Help);
    }

    #[test]
    fn log_filter_prefers_phonics_log() {
        let env = |key: &str| match key {
            "PHONICS_LOG" => Some("debug".to_string()),
            "RUST_LOG" => Some("warn".to_string()),
            _ => None,
        };
        assert_eq!(log_directive(env), "debug");
        assert_eq!(log_directive(|key: &str| (key == "RUST_LOG").then(|| "warn".into())), "warn");
        assert_eq!(log_directive(|_: &str| None), "info");
    }

    #[test]
    fn missing_settings_file_is_reported() {
        let err = load_settings(Some(Path::new("/definitely/not/here.json"))).unwrap_err();
        assert!(matches!(err, ArgsError::UnreadableSettings { .. }));
        assert_eq!(load_settings(None).unwrap(), TutorialSettings::default());
    }
}
