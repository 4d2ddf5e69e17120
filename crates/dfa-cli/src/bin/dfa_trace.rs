// dfa-trace: Print the step-by-step execution of one input.
//
// Usage:
//   dfa-trace [-f FILE] [OPTIONS] [--] INPUT
//
// Options:
//   -f, --file PATH   Automaton document (default: $DFA_FILE, then ./dfa.json)
//   --json            Print the step records as JSON
//   --path            Print only the visited states
//   -h, --help        Print help
//
// Exit status is 0 when the input is accepted, 1 on error and 3 when it is
// rejected.

use std::process;

fn main() {
    dfa_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (file, args) = dfa_cli::parse_file_arg(&args);
    let (flags, inputs) = dfa_cli::split_inputs(&args);

    if dfa_cli::wants_help(&flags) {
        println!("dfa-trace: Print the step-by-step execution of one input.");
        println!();
        println!("Usage: dfa-trace [-f FILE] [OPTIONS] [--] INPUT");
        println!();
        println!("An empty INPUT (\"\") traces the empty string. Put INPUT after");
        println!("`--` if it starts with `-`.");
        println!();
        println!("Options:");
        println!("  -f, --file PATH   Automaton document (default: $DFA_FILE, then ./dfa.json)");
        println!("  --json            Print the step records as JSON");
        println!("  --path            Print only the visited states");
        println!("  -h, --help        Print this help");
        return;
    }

    let as_json = dfa_cli::has_flag(&flags, "--json");
    let path_only = dfa_cli::has_flag(&flags, "--path");
    let input = match inputs.as_slice() {
        [input] => input.as_str(),
        [] => dfa_cli::fatal("missing INPUT (use \"\" for the empty string)"),
        _ => dfa_cli::fatal("expected exactly one INPUT"),
    };

    let dfa = dfa_cli::load_dfa(file.as_deref()).unwrap_or_else(|e| dfa_cli::fatal(&e));
    let trace = dfa_engine::trace(&dfa, input).unwrap_or_else(|e| dfa_cli::fatal(&e.to_string()));

    if as_json {
        let text = serde_json::to_string_pretty(trace.steps())
            .unwrap_or_else(|e| dfa_cli::fatal(&e.to_string()));
        println!("{text}");
    } else if path_only {
        let path: Vec<&str> = trace.path().into_iter().map(|s| s.as_str()).collect();
        println!("{}", path.join(" -> "));
    } else {
        print!("{trace}");
    }

    if !trace.accepted() {
        process::exit(3);
    }
}
