// Plain-text trace report.
//
// `Trace` renders as a multi-line report; `Step` renders as its block in that
// report. `Step::log_line` gives the one-line form a step debugger appends to
// its log as the user advances.

use std::fmt;

use crate::trace::{Step, StepKind, Trace};

const RULE_WIDTH: usize = 50;

fn verdict(accepted: bool) -> &'static str {
    if accepted { "ACCEPTED" } else { "REJECTED" }
}

impl Step {
    /// One-line summary, e.g. `Step 2: Read '1' | q1 -> q0`.
    pub fn log_line(&self) -> String {
        match self.kind() {
            StepKind::Initial => format!("Initial state: {}", self.state_before),
            StepKind::Transition => format!(
                "Step {}: Read '{}' | {} -> {}",
                self.step_number,
                self.symbol.as_ref().map(|s| s.as_str()).unwrap_or_default(),
                self.state_before,
                self.current_state(),
            ),
            StepKind::Terminal => format!(
                "{} in {}",
                verdict(self.accepted == Some(true)),
                self.state_before
            ),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            StepKind::Initial => {
                writeln!(f, "Initial State: {}", self.state_before)?;
                write!(f, "Input: '{}'", self.remaining())
            }
            StepKind::Transition => {
                let symbol = self.symbol.as_ref().map(|s| s.as_str()).unwrap_or_default();
                writeln!(f, "Step {}: Read '{}'", self.step_number, symbol)?;
                writeln!(f, "  {} -> {}", self.state_before, self.current_state())?;
                writeln!(f, "  Processed: '{}'", self.processed())?;
                write!(f, "  Remaining: '{}'", self.remaining())
            }
            StepKind::Terminal => {
                writeln!(f, "Final State: {}", self.state_before)?;
                write!(f, "Result: {}", verdict(self.accepted == Some(true)))
            }
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tracing execution of: '{}'", self.input())?;
        writeln!(f, "{}", "=".repeat(RULE_WIDTH))?;
        for step in self {
            writeln!(f)?;
            writeln!(f, "{step}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::trace::trace;
    use dfa_core::Dfa;

    fn dfa() -> Dfa {
        Dfa::new(
            ["q0", "q1"],
            ["0", "1"],
            [
                ("q0", "0", "q0"),
                ("q0", "1", "q1"),
                ("q1", "0", "q1"),
                ("q1", "1", "q0"),
            ],
            "q0",
            ["q0"],
        )
        .unwrap()
    }

    #[test]
    fn report_layout() {
        let t = trace(&dfa(), "1").unwrap();
        let expected = "\
Tracing execution of: '1'
==================================================

Initial State: q0
Input: '1'

Step 1: Read '1'
  q0 -> q1
  Processed: '1'
  Remaining: ''

Final State: q1
Result: REJECTED
";
        assert_eq!(t.to_string(), expected);
    }

    #[test]
    fn log_lines() {
        let t = trace(&dfa(), "11").unwrap();
        let lines: Vec<String> = t.iter().map(|s| s.log_line()).collect();
        assert_eq!(
            lines,
            vec![
                "Initial state: q0",
                "Step 1: Read '1' | q0 -> q1",
                "Step 2: Read '1' | q1 -> q0",
                "ACCEPTED in q0",
            ]
        );
    }
}
