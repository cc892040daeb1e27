//! Flipbook CLI - Inspect and play back saved projects.

use std::fs;
use std::path::PathBuf;

use flipbook::{
    Editor,
    schema::{ProjectConfig, ProjectData},
};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <project.json> [ticks]", args[0]);
        eprintln!();
        eprintln!("Inspect a saved flipbook project and run playback ticks.");
        eprintln!();
        eprintln!("Arguments:");
        eprintln!("  project.json  Path to a saved project snapshot");
        eprintln!("  ticks         Number of playback ticks to run (default: 0)");
        eprintln!();
        eprintln!("A starter project is generated with the --example flag.");
        std::process::exit(1);
    }

    if args[1] == "--example" {
        print_example_project();
        return;
    }

    let project_path = PathBuf::from(&args[1]);
    let ticks: u64 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(0);

    let project_str = fs::read_to_string(&project_path).unwrap_or_else(|e| {
        eprintln!("Error reading project file: {}", e);
        std::process::exit(1);
    });

    let data: ProjectData = serde_json::from_str(&project_str).unwrap_or_else(|e| {
        eprintln!("Error parsing project: {}", e);
        std::process::exit(1);
    });

    let mut editor = Editor::new(&data.config());
    editor.restore(data).unwrap_or_else(|e| {
        eprintln!("Invalid project: {}", e);
        std::process::exit(1);
    });

    let (_, frame_count) = editor.frame_label();
    println!("Flipbook Project");
    println!("================");
    println!(
        "Frames: {} ({}x{} pixels)",
        frame_count,
        editor.timeline().sequence().frame_width(),
        editor.timeline().sequence().frame_height(),
    );
    println!(
        "Frame rate: {} fps (tick interval {:?})",
        editor.timeline().frame_rate(),
        editor.timeline().tick_interval(),
    );

    if ticks > 0 {
        editor.play();
        print!("Playback:");
        for _ in 0..ticks {
            editor.tick();
            print!(" {}", editor.timeline().sequence().play_cursor());
        }
        println!();
        editor.pause();
    }
}

fn print_example_project() {
    let data = ProjectData::new(&ProjectConfig::default());
    match serde_json::to_string_pretty(&data) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error generating example project: {}", e);
            std::process::exit(1);
        }
    }
}
