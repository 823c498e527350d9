// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every option has a default matching the DumpExam repository layout, and
// most can also be set through a DUMP_EXAM_* environment variable.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::github::{SearchQuery, DEFAULT_API_URL};
use crate::site::{PublishOptions, SiteConfig};

#[derive(Parser, Debug)]
#[command(
    name = "dump-exam",
    version,
    about = "Generate static exam-question pages from labeled GitHub issues",
    long_about = "dump-exam searches a GitHub repository for issues labeled ExamQuestion and an exam label, \
                  splits each issue body at its [Question] and [Answer] markers, renders both to HTML \
                  and writes one page per issue from an HTML template."
)]
pub struct Cli {
    /// Print debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the issues of an exam and generate its pages
    ///
    /// Example: dump-exam build --label az-204
    Build {
        #[command(flatten)]
        search: SearchArgs,

        #[command(flatten)]
        site: SiteArgs,
    },

    /// Fetch the issues of an exam and list them, without writing anything
    ///
    /// Example: dump-exam fetch --label az-204 --json > az-204.json
    Fetch {
        #[command(flatten)]
        search: SearchArgs,

        /// Print the search response as JSON instead of a table
        ///
        /// The output can be fed back to `render --issues`.
        #[arg(long)]
        json: bool,
    },

    /// Generate pages from a saved search response instead of GitHub
    ///
    /// Example: dump-exam render --issues az-204.json --label az-204
    Render {
        /// JSON file holding a search response (an object with an `items` array)
        #[arg(long)]
        issues: PathBuf,

        /// Exam label, used for the page titles and the output directory
        #[arg(long, env = "DUMP_EXAM_LABEL", default_value = "az-204")]
        label: String,

        #[command(flatten)]
        site: SiteArgs,
    },
}

/// Which issues to search for
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Exam label to select, e.g. az-204
    #[arg(long, env = "DUMP_EXAM_LABEL", default_value = "az-204")]
    pub label: String,

    /// Only issues opened by this GitHub user
    #[arg(long, env = "DUMP_EXAM_AUTHOR", default_value = "VanDng")]
    pub author: String,

    /// Repository to search, as owner/name
    #[arg(long, env = "DUMP_EXAM_REPO", default_value = "VanDng/DumpExam")]
    pub repo: String,

    /// GitHub API root
    #[arg(long, env = "DUMP_EXAM_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
}

impl SearchArgs {
    pub fn query(&self) -> SearchQuery {
        SearchQuery {
            author: self.author.clone(),
            repo: self.repo.clone(),
            label: self.label.clone(),
        }
    }
}

/// Where the template is and where pages go
#[derive(Args, Debug, Clone)]
pub struct SiteArgs {
    /// HTML template with [Placeholder] tokens
    #[arg(long, env = "DUMP_EXAM_TEMPLATE", default_value = "docs/question_template.html")]
    pub template: PathBuf,

    /// Pages are written to <OUTPUT_ROOT>/<label>/, which is recreated on every run
    #[arg(long, env = "DUMP_EXAM_OUTPUT_ROOT", default_value = "docs/questions")]
    pub output_root: PathBuf,

    /// Milliseconds to wait after deleting the old output directory
    #[arg(long, default_value_t = 100)]
    pub settle_ms: u64,

    /// Write into a staging directory and swap it in at the end
    #[arg(long)]
    pub atomic: bool,
}

impl SiteArgs {
    pub fn config(&self, label: &str) -> SiteConfig {
        SiteConfig {
            template: self.template.clone(),
            output_root: self.output_root.clone(),
            label: label.to_string(),
            publish: PublishOptions {
                settle: Duration::from_millis(self.settle_ms),
                atomic: self.atomic,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_defaults() {
        let cli = Cli::try_parse_from(["dump-exam", "build"]).unwrap();
        let Commands::Build { search, site } = cli.command else {
            panic!("expected build");
        };

        // The env vars could be set on the machine running the tests
        if std::env::var_os("DUMP_EXAM_LABEL").is_none() {
            assert_eq!(search.label, "az-204");
        }
        assert_eq!(site.settle_ms, 100);
        assert!(!site.atomic);
    }

    #[test]
    fn test_site_config() {
        let cli = Cli::try_parse_from([
            "dump-exam",
            "render",
            "--issues",
            "saved.json",
            "--label",
            "dp-900",
            "--output-root",
            "out",
            "--template",
            "t.html",
            "--settle-ms",
            "0",
            "--atomic",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);

        let Commands::Render { issues, label, site } = cli.command else {
            panic!("expected render");
        };
        assert_eq!(issues, PathBuf::from("saved.json"));

        let config = site.config(&label);
        assert_eq!(config.output_dir().unwrap(), PathBuf::from("out").join("dp-900"));
        assert_eq!(config.template, PathBuf::from("t.html"));
        assert!(config.publish.settle.is_zero());
        assert!(config.publish.atomic);
    }

    #[test]
    fn test_search_query() {
        let cli = Cli::try_parse_from(["dump-exam", "fetch", "--label", "az-900", "--json"]).unwrap();
        let Commands::Fetch { search, json } = cli.command else {
            panic!("expected fetch");
        };
        assert!(json);
        assert_eq!(search.query().label, "az-900");
    }
}
