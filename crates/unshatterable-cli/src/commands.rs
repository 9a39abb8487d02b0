use anyhow::Context;
use colored::Colorize;
use serde_json::Value;
use unshatterable_output::{FsDocumentWriter, OutputConfig};
use unshatterable_registry::Registry;
use unshatterable_types::{serialize, synthesize_json};

use crate::cli::*;
use crate::demo;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Build(args) => cmd_build(args),
        Command::Show(args) => cmd_show(args),
        Command::Condition(args) => cmd_condition(args),
    }
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let mut config = OutputConfig::load_or_default(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;
    if let Some(output) = args.output {
        config.output_path = Some(output);
    }
    if args.minimize {
        config.minimize_json = true;
    }

    let mut registry = Registry::new(FsDocumentWriter::new(config));
    for (identifier, block) in demo::blocks()? {
        let path = registry
            .register(identifier, block)
            .with_context(|| format!("registering {identifier}"))?;
        println!("{} {} → {}", "✓".green().bold(), identifier.yellow(), path.display());
    }
    println!("{} blocks written.", registry.len().to_string().bold());
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let (identifier, block) = demo::blocks()?
        .into_iter()
        .find(|(id, _)| *id == args.identifier)
        .with_context(|| format!("no demo block named {}", args.identifier))?;
    let document = serialize(&block, identifier);
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}

fn cmd_condition(args: ConditionArgs) -> anyhow::Result<()> {
    let value = parse_value(&args.value);
    let expression = synthesize_json(&args.property, &value)?;
    println!("{}", expression.cyan());
    Ok(())
}

fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}
