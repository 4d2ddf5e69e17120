// dfa-run: Decide membership for input strings.
//
// Each input is run against the automaton and reported as:
//   A: input              (accepted)
//   R: input              (rejected)
//   E: input: message     (run aborted)
//
// Usage:
//   dfa-run [-f FILE] [OPTIONS] [--] [INPUT...]
//
// Options:
//   -f, --file PATH   Automaton document (default: $DFA_FILE, then ./dfa.json)
//   --skip-empty      Ignore empty lines on stdin
//   -h, --help        Print help

use std::io::{self, BufRead, Write};

use dfa_core::Dfa;

fn report(out: &mut impl Write, dfa: &Dfa, input: &str) {
    let _ = match dfa_engine::decide(dfa, input) {
        Ok(true) => writeln!(out, "A: {input}"),
        Ok(false) => writeln!(out, "R: {input}"),
        Err(e) => writeln!(out, "E: {input}: {e}"),
    };
}

fn main() {
    dfa_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (file, args) = dfa_cli::parse_file_arg(&args);
    let (flags, inputs) = dfa_cli::split_inputs(&args);

    if dfa_cli::wants_help(&flags) {
        println!("dfa-run: Decide membership for input strings.");
        println!();
        println!("Usage: dfa-run [-f FILE] [OPTIONS] [--] [INPUT...]");
        println!();
        println!("If INPUT arguments are given, runs each of them.");
        println!("Otherwise reads inputs from stdin (one per line). Inputs after");
        println!("`--` are never read as options. Prints:");
        println!("  A: input            (accepted)");
        println!("  R: input            (rejected)");
        println!("  E: input: message   (invalid symbol or undefined transition)");
        println!();
        println!("Options:");
        println!("  -f, --file PATH   Automaton document (default: $DFA_FILE, then ./dfa.json)");
        println!("  --skip-empty      Ignore empty lines on stdin");
        println!("  -h, --help        Print this help");
        return;
    }

    let skip_empty = dfa_cli::has_flag(&flags, "--skip-empty");

    let dfa = dfa_cli::load_dfa(file.as_deref()).unwrap_or_else(|e| dfa_cli::fatal(&e));

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if !inputs.is_empty() {
        for input in inputs {
            report(&mut out, &dfa, &input);
        }
        return;
    }

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        if skip_empty && line.is_empty() {
            continue;
        }
        report(&mut out, &dfa, &line);
    }
}
