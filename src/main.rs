//! Sorting Visualizer CLI - Generate and verify animation traces.

use std::path::PathBuf;
use std::time::Instant;

use sortviz::{
    animation::{BarState, Player},
    compute::SortEngine,
    schema::{Algorithm, VisualizerConfig, generate_values},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <config.json | algorithm> [--dump] [--play]", args[0]);
        eprintln!();
        eprintln!("Record a sorting animation trace and verify it replays correctly.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  config.json  Path to visualizer configuration file");
        eprintln!("  algorithm    merge, quick, heap, bubble, insertion or selection");
        eprintln!("  --dump       Print the encoded event stream as JSON");
        eprintln!("  --play       Play back in real time using the configured delay");
        eprintln!();
        eprintln!("Example configuration is generated with --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_config();
        return;
    }

    let dump = args.iter().any(|a| a == "--dump");
    let play = args.iter().any(|a| a == "--play");

    let config = match args[1].parse::<Algorithm>() {
        Ok(algorithm) => VisualizerConfig {
            algorithm,
            ..Default::default()
        },
        Err(_) => {
            let path = PathBuf::from(&args[1]);
            VisualizerConfig::from_json_file(&path).unwrap_or_else(|e| {
                eprintln!("Error loading config {}: {}", path.display(), e);
                std::process::exit(1);
            })
        }
    };

    let original = generate_values(&config.array);
    let mut values = original.clone();

    log::info!(
        "Running {} over {} values",
        config.algorithm,
        config.array.size
    );

    let start = Instant::now();
    let mut engine = SortEngine::from_seed(config.array.seed);
    let trace = engine.run(config.algorithm, &mut values);
    let elapsed = start.elapsed();

    if dump {
        match serde_json::to_string(&trace.encode()) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error encoding trace: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    println!("Sorting Visualizer");
    println!("==================");
    println!("Algorithm: {}", config.algorithm);
    println!(
        "Array: {} values in [{}, {}]",
        config.array.size, config.array.min_value, config.array.max_value
    );
    println!("Dialect: {:?}", trace.dialect());
    println!();
    println!("{}", trace.stats());
    println!("Generated in {:.3}ms", elapsed.as_secs_f64() * 1000.0);

    // Replay the untagged stream the way a browser player would.
    let mut player_config = config.playback.clone();
    if !play {
        player_config.step_delay_ms = 0;
    }
    let player = Player::from_pairs(&trace.encode(), trace.dialect(), &player_config)
        .unwrap_or_else(|e| {
            eprintln!("Error decoding trace: {}", e);
            std::process::exit(1);
        });
    println!(
        "Playback: {} steps, {:.2}s at {}ms/step",
        player.steps().len(),
        player.steps().len() as f64 * config.playback.step_delay_ms as f64 / 1000.0,
        config.playback.step_delay_ms
    );

    let mut bars = BarState::new(original);
    if let Err(e) = player.play(&mut bars) {
        eprintln!("Error during playback: {}", e);
        std::process::exit(1);
    }

    if bars.heights == values {
        println!("Replay check: OK");
    } else {
        eprintln!("Replay check: FAILED (replayed bars differ from sorted array)");
        std::process::exit(1);
    }
}

fn print_example_config() {
    let config = VisualizerConfig {
        algorithm: Algorithm::Quick,
        ..Default::default()
    };

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error encoding example config: {}", e),
    }
}
