//! tallyloop CLI binary entry point.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tallyloop::agent_loop::{LoopRunner, RunEvent};
use tallyloop::cli::render::{render_event, render_tools, render_transcript};
use tallyloop::cli::{AskArgs, Cli, Commands, RunArgs, DEMO_PROMPTS};
use tallyloop::config::AgentConfig;
use tallyloop::error::Result;
use tallyloop::provider::{self, ModelProvider, ResilientProvider};
use tallyloop::tools::arithmetic_registry;
use tallyloop::types::GenerationSettings;
use tallyloop::util::RetryPolicy;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ask(args) => handle_ask(args).await,
        Commands::Demo(args) => handle_demo(args).await,
        Commands::Tools => handle_tools(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn build_runner(args: &RunArgs) -> Result<LoopRunner> {
    let mut config = AgentConfig::from_env();
    if let Some(model) = &args.model {
        config = config.with_model(model.clone());
    }
    let settings = GenerationSettings {
        temperature: Some(args.temperature),
        max_tokens: args.max_tokens,
    };
    config = config.with_settings(settings);

    // Fails here, before any request, when OPENAI_API_KEY is missing.
    let client: Arc<dyn ModelProvider> = Arc::new(provider::create_provider(&config)?);
    let mut resilient = ResilientProvider::new(client).with_retry(RetryPolicy::with_retries(args.retries));
    if let Some(secs) = args.timeout_secs {
        resilient = resilient.with_timeout(Duration::from_secs(secs));
    }

    let mut runner = LoopRunner::new(Arc::new(resilient), Arc::new(arithmetic_registry()?))
        .with_settings(config.settings.clone())
        .with_recursion_limit(args.max_iterations);
    if let Some(system) = &args.system {
        runner = runner.with_system_prompt(Some(system.clone()));
    }
    if args.trace {
        runner = runner.with_event_sink(Arc::new(|event: RunEvent| {
            eprintln!("{}", render_event(&event));
        }));
    }
    Ok(runner)
}

async fn handle_ask(args: AskArgs) -> Result<()> {
    let runner = build_runner(&args.run)?;
    let outcome = runner.run(args.prompt).await?;

    if args.transcript {
        println!("{}", render_transcript(&outcome.messages, outcome.llm_calls));
    } else {
        println!("{}", outcome.text);
    }
    Ok(())
}

async fn handle_demo(args: RunArgs) -> Result<()> {
    let runner = build_runner(&args)?;
    for (idx, prompt) in DEMO_PROMPTS.iter().enumerate() {
        println!("\n[case {idx}] {prompt}");
        let outcome = runner.run(*prompt).await?;
        println!("{}", render_transcript(&outcome.messages, outcome.llm_calls));
    }
    Ok(())
}

fn handle_tools() -> Result<()> {
    print!("{}", render_tools(&arithmetic_registry()?));
    Ok(())
}
