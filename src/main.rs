use anyhow::{anyhow, Result};
use clap::Parser;

use drawer::cli::CliArgs;
use drawer::config::DrawerSettings;
use drawer::scenario::{Frame, Scenario};

fn main() -> Result<()> {
    drawer::tracing::init();

    let args = CliArgs::parse();

    let settings = match &args.settings {
        Some(path) => DrawerSettings::load_from(path).map_err(|e| anyhow!(e))?,
        None => DrawerSettings::load(),
    };

    let scenario = Scenario::load(&args.scenario).map_err(|e| anyhow!(e))?;
    tracing::info!(
        panels = scenario.panels.len(),
        steps = scenario.steps.len(),
        "replaying {}",
        args.scenario.display()
    );

    let frames = scenario.run(&settings).map_err(|e| anyhow!(e))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&frames)?);
    } else {
        for frame in &frames {
            print_frame(frame);
        }
    }

    Ok(())
}

fn print_frame(frame: &Frame) {
    println!("#{:<3} {}", frame.step, frame.input);
    for panel in &frame.panels {
        println!(
            "     {:<12} {:<9} offset={:>8.1} size={:>8.1} alpha={:.2}",
            panel.name,
            format!("{:?}", panel.phase),
            panel.offset,
            panel.size,
            panel.alpha
        );
    }
    for callback in &frame.callbacks {
        println!("     -> {:?}", callback);
    }
}
