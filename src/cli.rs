//! CLI host layer
//!
//! The thin collaborator that consumes the agent manager: it loads settings,
//! assembles an `AgentContext` from the filesystem workspace, and renders
//! `AgentResponse`s as plain text. All user-facing presentation lives here.

use anyhow::{anyhow, Context as _, Result};
use clap::{Parser, Subcommand};
use conclave_agents::{AgentManager, Settings, CODE_REVIEW_AGENT_ID};
use conclave_core::{AgentContext, AgentResponse, FsWorkspace, Workspace};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Multi-agent code assistant
#[derive(Debug, Parser)]
#[command(name = "conclave", version, about = "Multi-agent code assistant")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "conclave.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Review a file with the code review agent
    Review {
        /// File to review
        file: PathBuf,
        /// Specific focus for the review
        #[arg(long)]
        focus: Option<String>,
    },
    /// Route a free-text request to whichever agents claim it
    Route {
        /// The request text
        request: String,
        /// File whose content is attached as the selection
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// List registered agents and their capabilities
    Agents,
}

/// Run the parsed CLI
pub async fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(&cli.config)?;
    let mut manager = AgentManager::new(settings);

    if !manager.provider().is_available().await {
        warn!(
            provider = manager.provider().name(),
            "inference provider is not reachable; requests will fail"
        );
    }

    match cli.command {
        Command::Review { file, focus } => review(&manager, &file, focus.as_deref()).await,
        Command::Route { request, file } => route(&mut manager, &request, file.as_deref()).await,
        Command::Agents => {
            list_agents(&manager);
            Ok(())
        }
    }
}

fn load_settings(path: &Path) -> Result<Settings> {
    let mut builder = config::Config::builder();
    if path.exists() {
        builder = builder.add_source(config::File::from(path));
    }
    let raw = builder
        .add_source(config::Environment::with_prefix("CONCLAVE").separator("__"))
        .build()
        .with_context(|| format!("failed to load settings from {}", path.display()))?;

    Ok(raw.try_deserialize()?)
}

async fn build_context(workspace: &FsWorkspace, file: Option<&Path>) -> Result<AgentContext> {
    let root = workspace
        .workspace_path()
        .unwrap_or_default()
        .display()
        .to_string();
    let mut context = AgentContext::new(root);

    if let Some(file) = file {
        let code = workspace
            .read_file_content(file)
            .await
            .with_context(|| format!("failed to read {}", file.display()))?;
        context = context
            .with_current_file(workspace.relative_path(file).display().to_string())
            .with_selected_text(code);
    }

    Ok(context)
}

async fn review(manager: &AgentManager, file: &Path, focus: Option<&str>) -> Result<()> {
    let workspace = FsWorkspace::new(std::env::current_dir()?);
    let context = build_context(&workspace, Some(file)).await?;

    let response = manager
        .request_agent(CODE_REVIEW_AGENT_ID, &context, focus)
        .await;
    render_response(&response);

    if response.success {
        Ok(())
    } else {
        Err(anyhow!("review did not complete"))
    }
}

async fn route(manager: &mut AgentManager, request: &str, file: Option<&Path>) -> Result<()> {
    let workspace = FsWorkspace::new(std::env::current_dir()?);
    let context = build_context(&workspace, file).await?;

    let responses = manager.route_request(request, &context).await;
    if responses.is_empty() {
        return Err(anyhow!("no agents are registered"));
    }

    for response in &responses {
        render_response(response);
    }

    if responses.iter().all(|r| r.success) {
        Ok(())
    } else {
        Err(anyhow!("one or more agents reported failure"))
    }
}

fn list_agents(manager: &AgentManager) {
    for agent in manager.active_agents() {
        println!("{} - {}", agent.id(), agent.description());
        for capability in agent.capabilities() {
            println!("    {}: {}", capability.name, capability.description);
        }
    }
}

fn render_response(response: &AgentResponse) {
    println!("{}", response.message);
    for suggestion in &response.suggestions {
        match suggestion.line {
            // Line numbers are 0-based internally; print them 1-based.
            Some(line) => println!(
                "  [{}] line {}: {}",
                suggestion.kind.as_str(),
                line + 1,
                suggestion.message
            ),
            None => println!("  [{}] {}", suggestion.kind.as_str(), suggestion.message),
        }
    }
}
