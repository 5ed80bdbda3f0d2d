// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help and validating
//! time arguments.

use crate::model::parser;

pub fn print_help(binary_name: &str) {
    println!(
        "Agenda v{} - A simple flat-file appointment agenda manager",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] [COMMAND]", binary_name);
    println!();
    println!("COMMANDS:");
    println!("    list                      List all appointments sorted by starting time (default)");
    println!("    at <time>                 List appointments starting exactly at <time>");
    println!("    add <record>              Add one appointment from a raw record line");
    println!("    remove-title <title>      Remove every appointment with exactly this title");
    println!("    remove-time <time>        Remove every appointment starting at <time>");
    println!();
    println!("OPTIONS:");
    println!("    -f, --file <path>         Use a specific agenda file.");
    println!("    -r, --root <path>         Use a different directory for config and data.");
    println!("    -l, --long                Print the long listing form (date, weekday, time).");
    println!("    -v, --verbose             Enable debug logging to stderr.");
    println!("    -h, --help                Show this help message.");
    println!();
    println!("RECORD FORMAT:");
    println!("    title|year|month|day|time|duration");
    println!();
    println!("    Fields are separated by '|' and trimmed. The time is standard 12-hour");
    println!("    text (2:30pm, 12:05 AM); the duration is in minutes. Invalid fields");
    println!("    silently fall back to their defaults (N/A, 1, 1, 1, 12:00AM, 1).");
    println!("    The title itself must not contain '|'.");
    println!();
    println!("EXAMPLES:");
    println!("    {} add 'Dentist|2024|5|2|9:00am|30'", binary_name);
    println!("    {} list", binary_name);
    println!("    {} at 9:00am", binary_name);
    println!("    {} remove-title Dentist", binary_name);
    println!("    {} remove-time 9:00am --file ./work.agenda", binary_name);
}

/// Validates a CLI time argument and converts it to military form.
///
/// The conversion itself never fails (an unparseable time becomes midnight),
/// so argument shape is checked here instead: a time must carry a colon and
/// an `a`/`p` meridiem marker to be accepted.
pub fn parse_time_arg(arg: &str) -> Option<i32> {
    if !arg.contains(':') || !arg.chars().any(|c| matches!(c, 'a' | 'A' | 'p' | 'P')) {
        return None;
    }
    Some(parser::standard_to_military(arg))
}
