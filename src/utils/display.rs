use crate::interview::InterruptPayload;
use crate::synth::TripOutcome;
use colored::*;

pub fn print_header(text: &str) {
    println!("\n{}", text.bright_cyan().bold());
    println!("{}", "=".repeat(text.len()).bright_cyan());
}

pub fn print_success(text: &str) {
    println!("{}", text.green());
}

pub fn print_error(text: &str) {
    eprintln!("{}", text.red().bold());
}

pub fn print_info(text: &str) {
    println!("{}", text.blue());
}

pub fn print_prompt(text: &str) {
    print!("{}", text.yellow().bold());
}

pub fn print_interrupt(payload: &InterruptPayload) {
    println!("{} {}", format!("[{}]", payload.kind).dimmed(), payload.data.bright_white());
}

/// Summary, companion line, then the trip card fields
pub fn print_trip(outcome: &TripOutcome) {
    for line in &outcome.message {
        print_success(line.trim_end());
    }

    let trips = &outcome.trips;
    print_header(&format!("Trip to {}", trips.destination));
    println!("  {} {}", "From:".bold(), trips.dates.start_date);
    println!("  {}   {}", "To:".bold(), trips.dates.end_date);
    println!("  {} {}", "Activities:".bold(), trips.activities.join(", "));
}
