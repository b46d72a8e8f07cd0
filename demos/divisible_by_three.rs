//! Divisible by Three
//!
//! This example builds a DFA that accepts binary numbers divisible by three,
//! validates it, and prints the execution trace for a few inputs.
//!
//! Key concepts:
//! - Every builder call returns a new automaton
//! - Validation reports problems without failing
//! - Simulation only runs complete DFAs
//!
//! Run with: cargo run --example divisible_by_three

use automaton_engine::core::Label;
use automaton_engine::dfa;
use automaton_engine::simulation::run_simulation;
use automaton_engine::validation::validation_report;

fn main() {
    println!("=== Divisible by Three Example ===\n");

    // State n means "the bits read so far are n modulo 3"
    let machine = dfa! {
        alphabet: ["0", "1"],
        states: 3,
        start: 0,
        accept: [0],
        transitions: [
            (0, "0") => 0,
            (0, "1") => 1,
            (1, "0") => 2,
            (1, "1") => 0,
            (2, "0") => 1,
            (2, "1") => 2,
        ],
    }
    .unwrap();

    let report = validation_report(&machine);
    println!("Valid: {}", report.valid);

    for input in ["110", "101", "1001"] {
        println!("\nInput: {input}");
        match run_simulation(&machine, input) {
            Ok(run) => {
                for line in run.execution_trace() {
                    println!("  {line}");
                }
            }
            Err(e) => println!("  Error: {e}"),
        }
    }

    // Removing a transition leaves the original untouched
    let broken = machine.remove_transition(2, [2], &Label::symbol("1"));
    let report = validation_report(&broken);
    println!("\nAfter removing (2, '1'):");
    println!("Valid: {}", report.valid);
    for error in &report.errors {
        println!("  Error: {error}");
    }
    println!("Original still valid: {}", validation_report(&machine).valid);

    println!("\n=== Example Complete ===");
}
