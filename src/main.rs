use agenda::cli;
use agenda::config::Config;
use agenda::context::StandardContext;
use agenda::storage::AgendaStorage;
use anyhow::Result;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

struct CliArgs {
    root: Option<PathBuf>,
    file: Option<PathBuf>,
    long: bool,
    verbose: bool,
    help: bool,
    positional: Vec<String>,
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        root: None,
        file: None,
        long: false,
        verbose: false,
        help: false,
        positional: Vec::new(),
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" | "help" => parsed.help = true,
            "-v" | "--verbose" => parsed.verbose = true,
            "-l" | "--long" => parsed.long = true,
            "-r" | "--root" => {
                i += 1;
                let value = args.get(i).ok_or("--root requires a path")?;
                parsed.root = Some(PathBuf::from(value));
            }
            "-f" | "--file" => {
                i += 1;
                let value = args.get(i).ok_or("--file requires a path")?;
                parsed.file = Some(PathBuf::from(value));
            }
            other if other.starts_with('-') => {
                return Err(format!("Unknown option: {}", other));
            }
            _ => parsed.positional.push(args[i].clone()),
        }
        i += 1;
    }
    Ok(parsed)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::FAILURE;
        }
    };

    if parsed.help {
        cli::print_help("agenda");
        return ExitCode::SUCCESS;
    }

    let level = if parsed.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    match run(parsed) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<ExitCode> {
    let ctx = StandardContext::new(args.root.clone());
    let config = Config::load_or_default(&ctx)?;
    let path = config.resolve_agenda_path(&ctx, args.file.as_ref())?;
    let long_listing = args.long || config.long_listing;

    let command = args.positional.first().map(String::as_str).unwrap_or("list");
    let argument = args.positional.get(1).map(String::as_str);

    match command {
        "list" => {
            let agenda = AgendaStorage::load(&path)?;
            for appointment in agenda.sorted() {
                if long_listing {
                    println!("{}", appointment.format_long());
                } else {
                    println!("{}", appointment.to_line());
                }
            }
        }
        "at" => {
            let Some(raw_time) = argument else {
                println!("Missing arguments.");
                return Ok(ExitCode::FAILURE);
            };
            let Some(time) = cli::parse_time_arg(raw_time) else {
                println!("Invalid time.");
                return Ok(ExitCode::FAILURE);
            };
            let agenda = AgendaStorage::load(&path)?;
            for appointment in agenda.at_time(time) {
                if long_listing {
                    println!("{}", appointment.format_long());
                } else {
                    println!("{}", appointment.to_line());
                }
            }
        }
        "add" => {
            let Some(line) = argument else {
                println!("Missing arguments.");
                return Ok(ExitCode::FAILURE);
            };
            let mut agenda = AgendaStorage::load(&path)?;
            let added = agenda.add_line(line).to_line();
            AgendaStorage::save(&path, &agenda)?;
            println!("Added: {}", added);
        }
        "remove-title" => {
            let Some(title) = argument else {
                println!("Missing arguments.");
                return Ok(ExitCode::FAILURE);
            };
            let mut agenda = AgendaStorage::load(&path)?;
            let removed = agenda.remove_title(title.trim());
            AgendaStorage::save(&path, &agenda)?;
            println!("Removed {} appointment(s).", removed);
        }
        "remove-time" => {
            let Some(raw_time) = argument else {
                println!("Missing arguments.");
                return Ok(ExitCode::FAILURE);
            };
            let Some(time) = cli::parse_time_arg(raw_time) else {
                println!("Invalid time.");
                return Ok(ExitCode::FAILURE);
            };
            let mut agenda = AgendaStorage::load(&path)?;
            let removed = agenda.remove_time(time);
            AgendaStorage::save(&path, &agenda)?;
            println!("Removed {} appointment(s).", removed);
        }
        other => {
            eprintln!("Unknown command: {}", other);
            cli::print_help("agenda");
            return Ok(ExitCode::FAILURE);
        }
    }

    Ok(ExitCode::SUCCESS)
}
