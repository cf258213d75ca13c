// AlgoRhythm: terminal algorithm visualizer with step-recorded playback

mod algorithms;
mod dataset;
mod playback;
mod snapshot;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use algorithms::AlgorithmId;
use playback::Player;
use ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [ALGORITHM] [OPTIONS]", program_name);
    eprintln!();
    eprintln!("Options:");
    eprintln!(
        "  --size N    array size, {}..={} (default {})",
        dataset::MIN_SIZE,
        dataset::MAX_SIZE,
        dataset::DEFAULT_SIZE
    );
    eprintln!(
        "  --speed N   playback speed, {}..={} (default {})",
        dataset::MIN_SPEED,
        dataset::MAX_SPEED,
        dataset::DEFAULT_SPEED
    );
    eprintln!("  --seed N    PRNG seed for a reproducible dataset");
    eprintln!("  --list      print the algorithm catalog and exit");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} bubble-sort               # the default run", program_name);
    eprintln!(
        "  {} binary-search --size 30   # search a sorted array",
        program_name
    );
    eprintln!(
        "  {} merge-sort-memory          # watch the call stack and heap",
        program_name
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("algorhythm")
        .to_string();

    let mut requested: Option<String> = None;
    let mut size = dataset::DEFAULT_SIZE;
    let mut speed = dataset::DEFAULT_SPEED;
    let mut seed: Option<u64> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list" => {
                for algorithm in AlgorithmId::ALL {
                    println!(
                        "{:<18} {:<26} [{}]",
                        algorithm.as_str(),
                        algorithm.label(),
                        algorithm.category().label()
                    );
                }
                return Ok(());
            }
            "-h" | "--help" => {
                print_usage(&program_name);
                return Ok(());
            }
            "--size" => {
                i += 1;
                size = match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(n) => n,
                    None => {
                        eprintln!("Error: --size expects an integer");
                        eprintln!();
                        print_usage(&program_name);
                        std::process::exit(1);
                    }
                };
            }
            "--speed" => {
                i += 1;
                speed = match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(n) => n,
                    None => {
                        eprintln!("Error: --speed expects an integer");
                        eprintln!();
                        print_usage(&program_name);
                        std::process::exit(1);
                    }
                };
            }
            "--seed" => {
                i += 1;
                seed = match args.get(i).and_then(|v| v.parse().ok()) {
                    Some(n) => Some(n),
                    None => {
                        eprintln!("Error: --seed expects an integer");
                        eprintln!();
                        print_usage(&program_name);
                        std::process::exit(1);
                    }
                };
            }
            flag if flag.starts_with("--") => {
                eprintln!("Error: unknown option '{}'", flag);
                eprintln!();
                print_usage(&program_name);
                std::process::exit(1);
            }
            id => {
                if requested.is_some() {
                    eprintln!("Error: more than one algorithm given ('{}')", id);
                    eprintln!();
                    print_usage(&program_name);
                    std::process::exit(1);
                }
                requested = Some(id.to_string());
            }
        }
        i += 1;
    }

    let requested =
        requested.unwrap_or_else(|| AlgorithmId::BubbleSort.as_str().to_string());

    // An unrecognized algorithm is not an error: the generator renders a
    // placeholder run for it, so the TUI always has something to show.
    if AlgorithmId::parse(&requested).is_none() {
        eprintln!(
            "Warning: unknown algorithm '{}'; showing a placeholder run",
            requested
        );
        eprintln!("Run with --list to see the supported algorithms.");
    }

    let seed = seed.unwrap_or_else(rand::random);

    // Record the full run before the TUI starts
    let mut player = Player::from_request(&requested, size, speed, seed);
    eprintln!("Seed: {}", player.seed());
    eprintln!(
        "Generating {} over {} values...",
        player.algorithm_label(),
        player.dataset().values.len()
    );
    player.generate();
    eprintln!("Recorded {} steps.", player.len());

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(player);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
