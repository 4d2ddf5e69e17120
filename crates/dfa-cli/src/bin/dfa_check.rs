// dfa-check: Validate an automaton document and summarize it.
//
// Usage:
//   dfa-check [-f FILE] [OPTIONS]
//
// Options:
//   -f, --file PATH   Automaton document (default: $DFA_FILE, then ./dfa.json)
//   --strict          Treat missing transitions as an error (exit status 2)
//   -h, --help        Print help

use std::process;

fn main() {
    dfa_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (file, args) = dfa_cli::parse_file_arg(&args);

    if dfa_cli::wants_help(&args) {
        println!("dfa-check: Validate an automaton document and summarize it.");
        println!();
        println!("Usage: dfa-check [-f FILE] [OPTIONS]");
        println!();
        println!("Every construction problem is listed. A valid but incomplete");
        println!("automaton only produces a warning unless --strict is given.");
        println!();
        println!("Options:");
        println!("  -f, --file PATH   Automaton document (default: $DFA_FILE, then ./dfa.json)");
        println!("  --strict          Treat missing transitions as an error (exit status 2)");
        println!("  -h, --help        Print this help");
        return;
    }

    let strict = dfa_cli::has_flag(&args, "--strict");
    let path = dfa_cli::resolve_path(file.as_deref());
    let dfa = dfa_cli::load_dfa_from(&path).unwrap_or_else(|e| dfa_cli::fatal(&e));

    let finals: Vec<&str> = dfa.final_states().iter().map(|s| s.as_str()).collect();
    println!("{}: ok", path.display());
    println!("  states:      {}", dfa.states().len());
    println!("  alphabet:    {}", dfa.alphabet().len());
    println!("  transitions: {}", dfa.transition_count());
    println!("  start:       {}", dfa.start_state());
    println!("  final:       {{{}}}", finals.join(", "));

    match dfa_cli::missing_summary(&dfa) {
        None => println!("  complete:    yes"),
        Some(summary) => {
            println!("  complete:    no");
            for line in summary.lines() {
                eprintln!("warning: {line}");
            }
            if strict {
                process::exit(2);
            }
        }
    }
}
