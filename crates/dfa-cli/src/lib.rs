// dfa-cli: shared utilities for CLI tools.

use std::path::{Path, PathBuf};
use std::process;

use dfa_core::Dfa;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable naming the automaton file.
pub const FILE_ENV: &str = "DFA_FILE";

/// File looked up in the working directory when nothing else is given.
const DEFAULT_FILE: &str = "dfa.json";

/// Number of missing transitions listed before eliding the rest.
pub const MISSING_PREVIEW: usize = 5;

/// Install the stderr log subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Resolve the automaton file.
///
/// Search order:
/// 1. `file` argument (if provided)
/// 2. `DFA_FILE` environment variable
/// 3. `dfa.json` in the current working directory
pub fn resolve_path(file: Option<&str>) -> PathBuf {
    if let Some(f) = file {
        return PathBuf::from(f);
    }
    if let Ok(env_path) = std::env::var(FILE_ENV) {
        if !env_path.is_empty() {
            return PathBuf::from(env_path);
        }
    }
    PathBuf::from(DEFAULT_FILE)
}

/// Read and decode an automaton document.
pub fn load_dfa_from(path: &Path) -> Result<Dfa, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "read automaton file");
    dfa_codec::decode(&text).map_err(|e| describe_construction_error(path, &e))
}

/// Resolve the file (see [`resolve_path`]) and load it.
pub fn load_dfa(file: Option<&str>) -> Result<Dfa, String> {
    load_dfa_from(&resolve_path(file))
}

/// One line per violation, under a header naming the file.
pub fn describe_construction_error(path: &Path, err: &dfa_core::ConstructionError) -> String {
    let mut msg = format!(
        "{} is not a valid automaton ({} problem{}):",
        path.display(),
        err.violations().len(),
        if err.violations().len() == 1 { "" } else { "s" }
    );
    for violation in err.violations() {
        msg.push_str("\n  - ");
        msg.push_str(&violation.to_string());
    }
    msg
}

/// Advisory summary of undefined transitions, or `None` if the automaton is
/// complete. Lists the first few pairs, then the total.
pub fn missing_summary(dfa: &Dfa) -> Option<String> {
    let missing = dfa.missing_transitions();
    if missing.is_empty() {
        return None;
    }
    let mut preview = missing
        .iter()
        .take(MISSING_PREVIEW)
        .map(|(s, a)| format!("({s}, {a})"))
        .collect::<Vec<_>>()
        .join(", ");
    if missing.len() > MISSING_PREVIEW {
        preview.push_str("...");
    }
    Some(format!(
        "missing transitions: {preview}\ntotal missing: {}",
        missing.len()
    ))
}

/// Parse a `--file=PATH`, `--file PATH` or `-f PATH` argument from command line args.
/// Arguments after a `--` separator are passed through untouched.
///
/// Returns `(file, remaining_args)`.
pub fn parse_file_arg(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut file = None;
    let mut remaining = Vec::new();
    let mut skip_next = false;

    for (i, arg) in args.iter().enumerate() {
        if skip_next {
            skip_next = false;
            continue;
        }
        if arg == "--" {
            remaining.extend(args[i..].iter().cloned());
            break;
        }
        if let Some(val) = arg.strip_prefix("--file=") {
            file = Some(val.to_string());
        } else if arg == "--file" || arg == "-f" {
            if i + 1 < args.len() {
                file = Some(args[i + 1].clone());
                skip_next = true;
            } else {
                fatal(&format!("{arg} requires a value"));
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    (file, remaining)
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Split args into `(flags, inputs)`.
///
/// Before a `--` separator, arguments starting with `-` are flags and the rest
/// are inputs. Everything after the separator is an input, so inputs such as
/// `-h` or `--x` can still be given.
pub fn split_inputs(args: &[String]) -> (Vec<String>, Vec<String>) {
    let mut flags = Vec::new();
    let mut inputs = Vec::new();
    let mut iter = args.iter();
    for arg in iter.by_ref() {
        if arg == "--" {
            break;
        }
        if arg.starts_with('-') {
            flags.push(arg.clone());
        } else {
            inputs.push(arg.clone());
        }
    }
    inputs.extend(iter.cloned());
    (flags, inputs)
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}

/// Check if a boolean flag is in the args.
pub fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}
