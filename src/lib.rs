//! tallyloop: an arithmetic tool-calling agent.
//!
//! A chat model is given three tools (`add`, `multiply`, `divide`) and driven
//! through a two-node cycle: ask the model, run whatever tools it requested,
//! and repeat until it answers without requesting any.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use tallyloop::prelude::*;
//!
//! # async fn example() -> tallyloop::error::Result<()> {
//! let config = AgentConfig::from_env();
//! let provider = Arc::new(tallyloop::provider::create_provider(&config)?);
//! let runner = LoopRunner::new(provider, Arc::new(arithmetic_registry()?))
//!     .with_settings(config.settings.clone());
//! let outcome = runner.run("Add 3 and 4.").await?;
//! println!("{}", outcome.text);
//! # Ok(())
//! # }
//! ```

pub mod agent_loop;
pub mod config;
pub mod error;
pub mod prelude;
pub mod provider;
pub mod tools;
pub mod types;
pub mod util;

#[cfg(feature = "cli")]
pub mod cli;
