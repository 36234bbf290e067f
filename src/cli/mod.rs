//! Command-line interface for tallyloop.

pub mod render;

use clap::{Args, Parser, Subcommand};

/// Prompt used when neither an argument nor `TALLYLOOP_PROMPT` is given.
pub const DEFAULT_PROMPT: &str = "Add 3 and 4.";

/// Prompts run by `tallyloop demo`.
pub const DEMO_PROMPTS: [&str; 4] = ["こんにちは", "Add 3 and 4.", "Multiply 5 and 6.", "Divide 10 by 2."];

/// tallyloop: an arithmetic tool-calling agent
#[derive(Parser, Debug)]
#[command(name = "tallyloop", version, about = "Arithmetic tool-calling agent over OpenAI-compatible chat models")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one prompt to completion and print the answer
    Ask(AskArgs),
    /// Run the quickstart prompts and print each transcript
    Demo(RunArgs),
    /// List the registered tools and their parameter schemas
    Tools,
}

/// Options shared by every command that talks to the model.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Model name (overrides OPENAI_MODEL)
    #[arg(short, long)]
    pub model: Option<String>,

    /// System prompt
    #[arg(short, long)]
    pub system: Option<String>,

    /// Sampling temperature
    #[arg(short, long, default_value_t = 0.0)]
    pub temperature: f64,

    /// Max tokens per model reply
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Model calls allowed before the run is aborted
    #[arg(long, default_value_t = crate::agent_loop::DEFAULT_RECURSION_LIMIT)]
    pub max_iterations: usize,

    /// Extra attempts for retryable model-call failures
    #[arg(long, default_value_t = 0)]
    pub retries: u32,

    /// Deadline for each model call, in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Print each step as it happens (on stderr)
    #[arg(long)]
    pub trace: bool,
}

/// Arguments for `tallyloop ask`.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct AskArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Print every message and the model-call count instead of just the answer
    #[arg(long)]
    pub transcript: bool,

    /// User prompt
    #[arg(env = "TALLYLOOP_PROMPT", default_value = DEFAULT_PROMPT)]
    pub prompt: String,
}
