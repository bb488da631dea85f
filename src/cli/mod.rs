// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use crate::wiki::{AnswerResult, QaOutcome, WikiConfig, WikiQaService};

/// Medical knowledge CLI
#[derive(Parser, Debug)]
#[command(name = "medwiki-cli")]
#[command(version = crate::version::VERSION_NUMBER)]
#[command(about = "Answer medical questions from encyclopedia articles", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub endpoints: EndpointArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Overrides for the encyclopedia endpoints
#[derive(Args, Debug, Clone, Default)]
pub struct EndpointArgs {
    /// Action API URL (search and parse)
    #[arg(long, global = true, env = "WIKI_API_URL")]
    pub api_url: Option<String>,

    /// REST API base URL (summary and sections)
    #[arg(long, global = true, env = "WIKI_REST_BASE")]
    pub rest_base: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(long, global = true, env = "WIKI_REQUEST_TIMEOUT_MS")]
    pub timeout_ms: Option<u64>,
}

impl EndpointArgs {
    /// Environment configuration with command-line overrides applied
    pub fn to_config(&self) -> Result<WikiConfig> {
        let mut config = WikiConfig::from_env();
        if let Some(api_url) = &self.api_url {
            config.api_url = api_url.clone();
        }
        if let Some(rest_base) = &self.rest_base {
            config.rest_base = rest_base.clone();
        }
        if let Some(timeout_ms) = self.timeout_ms {
            config.request_timeout_ms = timeout_ms;
        }
        config
            .validate()
            .map_err(anyhow::Error::msg)
            .context("Invalid encyclopedia configuration")?;
        Ok(config)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Answer a question
    Ask {
        /// Free-text question
        question: String,

        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// Print the article a query resolves to
    Resolve {
        /// Search query
        query: String,
    },
}

/// Execute CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let config = cli.endpoints.to_config()?;
    let service = WikiQaService::new(config)?;

    match cli.command {
        Commands::Ask { question, json } => {
            let outcome = service.answer_question(&question).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                println!("{}", render_outcome(&outcome));
            }
        }
        Commands::Resolve { query } => match service.resolve_title(&query).await? {
            Some(title) => println!("{}", title),
            None => println!("{}", crate::wiki::NO_ARTICLE_FOUND),
        },
    }

    Ok(())
}

/// Human-readable rendering of an outcome
pub fn render_outcome(outcome: &QaOutcome) -> String {
    match outcome {
        QaOutcome::NotFound(error) => error.error.clone(),
        QaOutcome::Answer(answer) => render_answer(answer),
    }
}

fn render_answer(answer: &AnswerResult) -> String {
    let mut lines = vec![format!("# {}", answer.title)];
    if !answer.answer.is_empty() {
        lines.push(answer.answer.clone());
    }
    for (label, text) in [
        ("Symptoms", &answer.symptoms),
        ("Causes", &answer.causes),
        ("Treatment", &answer.treatment),
    ] {
        if !text.is_empty() {
            lines.push(format!("{}: {}", label, text));
        }
    }
    lines.push(format!("Source: {}", answer.source));
    lines.join("\n\n")
}
