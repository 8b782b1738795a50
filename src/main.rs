// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use anyhow::{Context, Result};
use std::env;
use stepgrid::dom::VisualElement;
use stepgrid::sequencer::markup;
use stepgrid::ui::{App, Session};
use stepgrid::{Document, Sequencer, SequencerConfig};
use tracing::Level;

fn print_usage() {
    println!("STEPGRID - Observer-driven step sequencer grid");
    println!();
    println!("Usage: stepgrid [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --html [CONFIG]          Print the rendered grid as HTML");
    println!("  --demo [CONFIG]          Click mute/solo on the first track and show step classes");
    println!("  --tui [CONFIG]           Run the interactive terminal grid");
    println!("  --write-config <PATH>    Write the default config (YAML, or TOML for .toml)");
    println!("  --verbose, -v            Debug logging (not in --tui)");
    println!("  --help                   Show this help message");
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&String>) -> Result<SequencerConfig> {
    match path {
        Some(path) => SequencerConfig::load(path),
        None => Ok(SequencerConfig::default()),
    }
}

fn print_html(config: &SequencerConfig) -> Result<()> {
    let (document, _sequencer) = config.build()?;
    print!("{}", document.to_html());
    Ok(())
}

fn print_steps(sequencer: &Sequencer, track: &str) -> Result<()> {
    for step in 1..=sequencer.step_count() {
        let element = sequencer.step_element(track, step)?;
        println!("  {:<24} {}", markup::step_id(track, step), element.class_list().join(" "));
    }
    Ok(())
}

fn click(document: &Document, id: &str) -> Result<()> {
    println!("click #{}", id);
    document
        .click(id)
        .with_context(|| format!("Failed to click #{}", id))
}

fn run_demo(config: &SequencerConfig) -> Result<()> {
    let (document, sequencer) = config.build()?;
    let track = sequencer
        .tracks()
        .first()
        .context("Config has no tracks")?
        .clone();
    let name = track.name().to_string();

    println!("Tracks: {}", sequencer.track_names().join(", "));
    println!("Demo track: {} ({} steps)", name, sequencer.step_count());
    println!();

    click(&document, &markup::step_id(&name, 1))?;
    click(&document, &markup::mute_button_id(&name))?;
    println!("mute={} solo={}", track.is_mute(), track.is_solo());
    print_steps(&sequencer, &name)?;
    println!();

    click(&document, &markup::solo_button_id(&name))?;
    println!("mute={} solo={}", track.is_mute(), track.is_solo());
    print_steps(&sequencer, &name)?;
    println!();

    click(&document, &markup::mute_button_id(&name))?;
    println!("mute={} solo={}", track.is_mute(), track.is_solo());
    print_steps(&sequencer, &name)?;

    println!();
    println!("Demo complete!");
    Ok(())
}

fn run_tui(config: &SequencerConfig) -> Result<()> {
    let (document, sequencer) = config.build()?;
    let mut app = App::new(Session::new(document, sequencer))
        .context("Failed to set up terminal")?;
    app.run().context("Terminal UI failed")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");

    if args.len() < 2 {
        println!("STEPGRID - Observer-driven step sequencer grid");
        println!("Run with --help for usage information");
        return Ok(());
    }

    // The terminal UI owns the screen, so it gets no log output
    if args[1] != "--tui" {
        init_logging(verbose);
    }

    match args[1].as_str() {
        "--html" => {
            let config = load_config(args.get(2))?;
            print_html(&config)?;
        }
        "--demo" => {
            let config = load_config(args.get(2))?;
            run_demo(&config)?;
        }
        "--tui" => {
            let config = load_config(args.get(2))?;
            run_tui(&config)?;
        }
        "--write-config" => {
            if args.len() < 3 {
                eprintln!("Error: --write-config requires a path");
                std::process::exit(1);
            }
            SequencerConfig::default().save(&args[2])?;
            println!("Wrote {}", args[2]);
        }
        "--help" | "-h" => {
            print_usage();
        }
        _ => {
            eprintln!("Unknown option: {}", args[1]);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}
