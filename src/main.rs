// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Print progress and a summary
// 4. Exit with proper code (0 = success, 1 = error)
//
// The build pipeline runs once, start to finish:
//   fetch issues -> extract sections -> render markdown -> write pages
// =============================================================================

mod cli; // src/cli.rs - command-line parsing
mod content; // src/content/ - [Question]/[Answer] extraction and markdown
mod error; // src/error.rs - typed errors
mod github; // src/github/ - GitHub search API
mod logging; // src/logging.rs - tracing setup
mod site; // src/site/ - template filling and page output

#[cfg(test)]
mod test_support;

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, SearchArgs, SiteArgs};
use github::Issue;
use site::{SiteConfig, SiteSummary};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    let exit_code = match run(cli).await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Build { search, site } => handle_build(&search, &site).await,
        Commands::Fetch { search, json } => handle_fetch(&search, json).await,
        Commands::Render { issues, label, site } => handle_render(&issues, &label, &site).await,
    }
}

// Handles the 'build' subcommand: fetch from GitHub, then generate
async fn handle_build(search: &SearchArgs, site: &SiteArgs) -> Result<()> {
    let issues = fetch(search).await?;
    generate(&issues, &site.config(&search.label)).await
}

// Handles the 'fetch' subcommand: list what the search returns
async fn handle_fetch(search: &SearchArgs, json: bool) -> Result<()> {
    let issues = fetch(search).await?;

    if json {
        println!("{}", issues_json(&issues)?);
    } else {
        print!("{}", format_table(&issues));
    }
    Ok(())
}

// Renders the issues with the same shape as the GitHub response,
// so `render --issues` can read the output of `fetch --json`
fn issues_json(issues: &[Issue]) -> Result<String> {
    let response = serde_json::json!({
        "total_count": issues.len(),
        "items": issues,
    });
    Ok(serde_json::to_string_pretty(&response)?)
}

// Handles the 'render' subcommand: generate from a saved search response
async fn handle_render(issues_file: &Path, label: &str, site: &SiteArgs) -> Result<()> {
    let json = tokio::fs::read_to_string(issues_file)
        .await
        .with_context(|| format!("could not read {}", issues_file.display()))?;
    let issues = github::parse_search_response(&json)
        .with_context(|| format!("could not load issues from {}", issues_file.display()))?;

    println!("📄 Loaded {} question(s) from {}", issues.len(), issues_file.display());
    generate(&issues, &site.config(label)).await
}

async fn fetch(search: &SearchArgs) -> Result<Vec<Issue>> {
    // Progress goes to stderr so `fetch --json` output stays clean
    eprintln!("🔍 Searching {} for {} questions", search.repo, search.label);

    let client = github::build_client()?;
    let issues = github::fetch_issues(&client, &search.api_url, &search.query())
        .await
        .context("could not fetch exam questions")?;

    eprintln!("📄 Found {} question(s)", issues.len());
    Ok(issues)
}

async fn generate(issues: &[Issue], config: &SiteConfig) -> Result<()> {
    if issues.is_empty() {
        println!("⚠️  No questions found; the {} output directory will be left empty", config.label);
    }

    let summary = site::generate_site(issues, config)
        .await
        .context("could not generate pages")?;

    print_summary(&summary);
    Ok(())
}

fn print_summary(summary: &SiteSummary) {
    for page in &summary.pages {
        println!("   wrote {}", page.display());
    }
    println!();
    println!("✅ {} page(s) in {}", summary.pages.len(), summary.output_dir.display());
}

// Formats the fetched issues as a human-readable table
fn format_table(issues: &[Issue]) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "{:<8} {:<22} {}", "NUMBER", "CREATED", "URL");
    let _ = writeln!(out, "{}", "=".repeat(90));

    for issue in issues {
        let created = issue.created_at.format("%Y-%m-%d %H:%M").to_string();
        let _ = writeln!(out, "{:<8} {:<22} {}", issue.number, created, issue.html_url);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "📋 Total: {}", issues.len());
    out
}
