use clap::Parser;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde_json::{json, Value};
use std::fs;

/// A CLI tool to generate random workflow JSON fixtures for the validator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Number of components to generate
    #[arg(short, long, default_value_t = 6)]
    components: usize,

    /// Probability (0.0..=1.0) that a component carries its optional config
    #[arg(long, default_value_t = 0.5)]
    config_rate: f64,

    /// Inject a reverse connection so the restricted cycle check fires
    #[arg(long)]
    tangle: bool,
}

const KINDS: [&str; 4] = ["input", "process", "output", "condition"];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if !(0.0..=1.0).contains(&cli.config_rate) {
        eprintln!("Error: --config-rate must be between 0.0 and 1.0");
        std::process::exit(1);
    }

    println!(
        "Generating workflow with {} component(s) (config rate {})...",
        cli.components, cli.config_rate
    );

    let components: Vec<Value> = (0..cli.components)
        .map(|i| generate_component(&mut rng, i, cli.components, cli.config_rate))
        .collect();
    let connections = generate_connections(&mut rng, cli.components, cli.tangle);

    let workflow = json!({
        "components": components,
        "connections": connections,
    });

    fs::write(&cli.output, serde_json::to_string_pretty(&workflow)?)?;
    println!("Successfully wrote workflow to '{}'", cli.output);

    Ok(())
}

fn generate_component(rng: &mut ThreadRng, index: usize, count: usize, config_rate: f64) -> Value {
    // First and last components get fixed roles so role coverage holds;
    // everything in between is random.
    let kind = if index == 0 {
        "input"
    } else if index == count - 1 {
        "output"
    } else {
        KINDS[rng.random_range(0..KINDS.len())]
    };

    let config = if rng.random_bool(config_rate) {
        match kind {
            "input" => json!({ "inputType": "file" }),
            "process" => json!({ "processType": "transform" }),
            "output" => json!({ "outputFormat": "json" }),
            _ => json!({ "condition": "value > 0" }),
        }
    } else {
        json!({})
    };

    json!({
        "id": format!("c{index}"),
        "type": "workflowNode",
        "data": {
            "type": kind,
            "label": format!("Component {index}"),
            "config": config,
        },
        "position": {
            "x": rng.random_range(0.0..1600.0),
            "y": rng.random_range(0.0..900.0),
        },
    })
}

fn generate_connections(rng: &mut ThreadRng, count: usize, tangle: bool) -> Vec<Value> {
    let mut connections: Vec<Value> = (1..count)
        .map(|i| {
            json!({
                "id": format!("e{i}"),
                "source": format!("c{}", i - 1),
                "target": format!("c{i}"),
                "sourceHandle": "out",
                "targetHandle": "in",
            })
        })
        .collect();

    if tangle && count >= 2 {
        let i = rng.random_range(1..count);
        connections.push(json!({
            "id": "tangle",
            "source": format!("c{i}"),
            "target": format!("c{}", i - 1),
        }));
        println!("-> Injected reverse connection c{i} -> c{}", i - 1);
    }

    connections
}
