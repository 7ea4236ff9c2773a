use std::io::Write;

use nfa_paths::prelude::*;

use owo_colors::{AnsiColors, OwoColorize};
use tracing::{debug, error, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgMatches, Command};

fn cli() -> clap::Command {
    Command::new("nfr")
        .about("Exhaustively enumerates the runs of an NFA on one input word")
        .arg(
            Arg::new("file")
                .help("path of the automaton definition file, prompted for when absent"),
        )
        .arg(Arg::new("input").help("the input word, where ~ denotes the empty word"))
        .arg(
            Arg::new("budget")
                .long("budget")
                .value_parser(clap::value_parser!(usize))
                .help("abandon the search after exploring this many runs (guards against epsilon cycles)"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbosity")
                .num_args(0..=1)
                .require_equals(true)
                .value_parser(["info", "debug", "trace"])
                .default_missing_value("info"),
        )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stdout_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stdout_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn prompt(question: &str) -> String {
    print!("{question}");
    std::io::stdout().flush().expect("could not flush stdout");
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .expect("could not read from stdin");
    line.trim_end_matches(['\n', '\r']).to_string()
}

pub fn main() {
    let matches = cli().get_matches();

    setup_logging(&matches);

    let file = matches
        .get_one::<String>("file")
        .cloned()
        .unwrap_or_else(|| prompt("Enter NFA file name: "));
    let nfa = match load_definition(&file) {
        Ok(nfa) => nfa,
        Err(err) => {
            error!("could not load \"{file}\": {err}");
            std::process::exit(1);
        }
    };

    let word = matches
        .get_one::<String>("input")
        .cloned()
        .unwrap_or_else(|| prompt("Input a string: "));
    let input = Input::parse(&word);

    debug!("simulating \"{}\" on \"{input}\"", nfa.name());
    let result = match matches.get_one::<usize>("budget") {
        None => nfa.simulate(&input),
        Some(&budget) => match nfa.simulate_bounded(&input, budget) {
            Some(result) => result,
            None => {
                error!("search abandoned after {budget} runs, the automaton likely has a reachable epsilon cycle");
                std::process::exit(1);
            }
        },
    };

    let color = if result.accepting_paths > 0 {
        AnsiColors::Green
    } else {
        AnsiColors::Red
    };
    println!(
        "Total paths: {}, Accepting paths: {}",
        result.total_paths,
        result.accepting_paths.color(color)
    );

    let report = Report::new(&file, &nfa, &input, &result);
    println!("{}", report.table());

    match report.write_default() {
        Ok(path) => println!("results written to {}", path.display()),
        Err(err) => {
            error!("could not write results: {err}");
            std::process::exit(1);
        }
    }
}
