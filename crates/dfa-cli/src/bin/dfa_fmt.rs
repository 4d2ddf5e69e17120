// dfa-fmt: Rewrite an automaton document in canonical form.
//
// The document is decoded, validated and re-encoded with every list sorted,
// so equal automata always format to the same text.
//
// Usage:
//   dfa-fmt [-f FILE] [OPTIONS]
//
// Options:
//   -f, --file PATH   Automaton document (default: $DFA_FILE, then ./dfa.json)
//   --compact         Single-line output
//   -h, --help        Print help

use dfa_codec::EncodeOptions;

fn main() {
    dfa_cli::init_logging();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (file, args) = dfa_cli::parse_file_arg(&args);

    if dfa_cli::wants_help(&args) {
        println!("dfa-fmt: Rewrite an automaton document in canonical form.");
        println!();
        println!("Usage: dfa-fmt [-f FILE] [OPTIONS]");
        println!();
        println!("Writes the formatted document to stdout.");
        println!();
        println!("Options:");
        println!("  -f, --file PATH   Automaton document (default: $DFA_FILE, then ./dfa.json)");
        println!("  --compact         Single-line output");
        println!("  -h, --help        Print this help");
        return;
    }

    let options = EncodeOptions {
        pretty: !dfa_cli::has_flag(&args, "--compact"),
    };

    let dfa = dfa_cli::load_dfa(file.as_deref()).unwrap_or_else(|e| dfa_cli::fatal(&e));
    let text = dfa_codec::encode_with(&dfa, options)
        .unwrap_or_else(|e| dfa_cli::fatal(&e.to_string()));
    println!("{text}");
}
