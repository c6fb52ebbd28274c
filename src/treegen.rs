use anyhow::Result;
use arborview::{write_snapshot, SampleTreeGenerator};
use std::env;

struct Config {
    num_nodes: usize,
    seed: u64,
    output_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            num_nodes: arborview::sample::DEFAULT_NODE_BUDGET,
            seed: arborview::sample::DEFAULT_SEED,
            output_file: None,
        }
    }
}

fn parse_args() -> Result<Config> {
    let args: Vec<String> = env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-num_nodes" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-num_nodes requires an argument");
                }
                config.num_nodes = args[i].parse()?;
            }
            "-seed" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-seed requires an argument");
                }
                config.seed = args[i].parse()?;
            }
            "-out" => {
                i += 1;
                if i >= args.len() {
                    anyhow::bail!("-out requires a file path argument");
                }
                config.output_file = Some(args[i].clone());
            }
            "-h" | "-help" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                eprintln!("Warning: Unknown argument: {}", args[i]);
            }
        }
        i += 1;
    }

    Ok(config)
}

fn print_help() {
    println!("Binary Tree Snapshot Generator");
    println!("Usage: arbor-gen [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -num_nodes <N>         Number of tree nodes (default: 15)");
    println!("  -seed <N>              Random seed (default: 42)");
    println!("  -out <FILE>            Output file path (default: demo_tree.json)");
    println!("  -h, -help, --help      Show this help message");
}

fn main() -> Result<()> {
    let config = parse_args()?;

    let output_path = config
        .output_file
        .clone()
        .unwrap_or_else(|| "demo_tree.json".to_string());

    let snapshot = SampleTreeGenerator::with_seed(config.seed)
        .with_node_budget(config.num_nodes)
        .generate();
    snapshot.validate()?;

    write_snapshot(&output_path, &snapshot)?;

    println!(
        "Snapshot written to: {} ({} nodes, {} highlight steps)",
        output_path,
        snapshot.node_count(),
        snapshot.steps.len()
    );

    Ok(())
}
