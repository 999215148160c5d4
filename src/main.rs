use adk_toolset::adk::agent::{LlmAgent, ToolUnion};
use adk_toolset::adk::context::InvocationContext;
use adk_toolset::adk::state::State;
use adk_toolset::calculator::{calculator_agent, SimpleMathToolset};
use adk_toolset::config::{default_registry, AgentFactory, AgentLoader};
use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the tools the agent exposes to its model
    Tools {
        /// Name prefix for the math toolset (ignored with --config)
        #[arg(short, long, default_value = "calculator_")]
        prefix: String,

        /// Load the agent from a YAML definition instead of the built-in example
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed conversation state, as key=value (value parsed as JSON when possible)
        #[arg(short, long = "state")]
        state: Vec<String>,
    },
    /// Print the agent configuration
    Describe {
        /// Name prefix for the math toolset (ignored with --config)
        #[arg(short, long, default_value = "calculator_")]
        prefix: String,

        /// Load the agent from a YAML definition instead of the built-in example
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

async fn load_agent(prefix: &str, config: Option<&PathBuf>) -> anyhow::Result<LlmAgent> {
    match config {
        Some(path) => {
            let def = AgentLoader::new()
                .load(path)
                .with_context(|| format!("loading {}", path.display()))?;
            let registry = default_registry().await;
            Ok(AgentFactory::new(&registry).build(&def).await?)
        }
        None => Ok(calculator_agent(Arc::new(SimpleMathToolset::new(prefix)))?),
    }
}

fn parse_state(pairs: &[String]) -> anyhow::Result<State> {
    let mut initial = HashMap::new();
    for pair in pairs {
        let (key, raw) = pair
            .split_once('=')
            .ok_or_else(|| anyhow!("state entry '{}' is not key=value", pair))?;
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        initial.insert(key.to_string(), value);
    }
    Ok(State::from_map(initial))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Tools {
            prefix,
            config,
            state,
        } => {
            let agent = load_agent(&prefix, config.as_ref()).await?;
            let invocation = InvocationContext::with_state(agent.name.clone(), parse_state(&state)?);
            log::info!(
                "Listing tools for agent {} (invocation {})",
                agent.name,
                invocation.invocation_id()
            );

            let tools = agent.canonical_tools(Some(&invocation.readonly())).await;
            for tool in &tools {
                println!("{}: {}", tool.name(), tool.description());
                println!("  schema: {}", tool.schema());
            }

            agent.close().await;
        }
        Commands::Describe { prefix, config } => {
            let agent = load_agent(&prefix, config.as_ref()).await?;
            println!("Agent: {}", agent.name);
            println!("Model: {} ({})", agent.model, agent.provider());
            if !agent.description.is_empty() {
                println!("Description: {}", agent.description);
            }
            println!("Instruction: {}", agent.instruction);
            println!("Tools:");
            for entry in &agent.tools {
                match entry {
                    ToolUnion::Tool(tool) => println!("  - tool {}", tool.name()),
                    ToolUnion::Toolset(toolset) => println!("  - toolset {}", toolset.name()),
                }
            }

            agent.close().await;
        }
    }

    Ok(())
}
