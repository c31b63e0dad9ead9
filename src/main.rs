//! dotmatrix CLI - Encode a JSON animation into a matrix board image.

use std::fs;
use std::path::PathBuf;

use dotmatrix::{
    animation::{Exporter, suggested_file_name},
    encode::{BinaryEncoder, LayoutStrategy, OutputMode},
    schema::{AnimationDocument, EditorConfig},
    store::{Animation, Pixel},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && args[1] == "--example" {
        print_example();
        return;
    }

    if args.len() < 2 {
        eprintln!("Usage: {} <animation.json> [output.bin]", args[0]);
        eprintln!();
        eprintln!("Encode a dot-matrix animation into a raw board image.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  animation.json  Animation document (frames as rows of '#' and '.')");
        eprintln!("  output.bin      Output path (default: ANIM_<rows>x<cols>.BIN)");
        eprintln!();
        eprintln!("An optional <animation>.config.json next to the input selects");
        eprintln!("the output mode. Run with --example to print sample files.");
        std::process::exit(1);
    }

    let input_path = PathBuf::from(&args[1]);

    // Load animation
    let input = fs::read_to_string(&input_path).unwrap_or_else(|e| {
        eprintln!("Error reading animation file: {}", e);
        std::process::exit(1);
    });

    let animation = AnimationDocument::from_json(&input)
        .and_then(AnimationDocument::into_animation)
        .unwrap_or_else(|e| {
            eprintln!("Error parsing animation: {}", e);
            std::process::exit(1);
        });

    // Load or default config
    let config_path = input_path.with_extension("config.json");
    let config: EditorConfig = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path).unwrap_or_else(|e| {
            eprintln!("Error reading config file: {}", e);
            std::process::exit(1);
        });
        serde_json::from_str(&config_str).unwrap_or_else(|e| {
            eprintln!("Error parsing config: {}", e);
            std::process::exit(1);
        })
    } else {
        EditorConfig::default()
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid config: {}", e);
        std::process::exit(1);
    }

    let dims = animation.dimensions();
    let strategy = LayoutStrategy::select(dims);
    let per_frame = strategy.bytes_per_frame(dims);

    println!("dotmatrix encoder");
    println!("=================");
    println!("Grid: {} ({} frames)", dims, animation.frame_count());
    println!("Layout: {} ({} bytes/frame)", strategy, per_frame);
    match config.output {
        OutputMode::Variable => println!("Output: variable length"),
        OutputMode::FixedCapacity(capacity) => {
            let fitting = (capacity / per_frame).min(animation.frame_count());
            println!(
                "Output: fixed {} bytes ({} of {} frames fit)",
                capacity,
                fitting,
                animation.frame_count()
            );
        }
    }
    println!();

    let encoder = BinaryEncoder::new(config.output);
    let image = encoder.encode(&animation);

    let output_path = args
        .get(2)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(suggested_file_name(dims)));

    match Exporter::save(&output_path, &image) {
        Ok(stats) => println!("{}", stats),
        Err(e) => {
            eprintln!("Error writing image: {}", e);
            std::process::exit(1);
        }
    }
}

fn print_example() {
    // Diagonal sweep across a single 8x8 module
    let frames = (0..8)
        .map(|i| {
            let mut frame = dotmatrix::Frame::empty(dotmatrix::Dimensions::new(8, 8));
            for r in 0..8 {
                let _ = frame.set(r, (r + i) % 8, Pixel::On);
            }
            frame
        })
        .collect();

    let doc = match Animation::from_frames(frames) {
        Ok(animation) => AnimationDocument::from_animation(&animation),
        Err(e) => {
            eprintln!("Error building example: {}", e);
            std::process::exit(1);
        }
    };
    let config = EditorConfig {
        rows: 8,
        cols: 8,
        output: OutputMode::eeprom(),
        ..Default::default()
    };

    println!("Example animation (animation.json):");
    println!("{}", serde_json::to_string_pretty(&doc).unwrap());
    println!();
    println!("Example config (animation.config.json):");
    println!("{}", serde_json::to_string_pretty(&config).unwrap());
}
