use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use pressbody_core::{
    FetchConfig, Fetcher, PressError, ScrapedArticle, SelectorEntry, fetch_file, fetch_stdin, resolve, scrape_html,
    supported_publishers,
};
use tracing_subscriber::EnvFilter;

mod echo;

use echo::{format_size, print_banner, print_detail, print_info, print_step, print_success, print_timing};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extract the body text of Korean news articles
#[derive(Parser, Debug)]
#[command(name = "pressbody")]
#[command(version)]
#[command(about = "Extract the body text of Korean news articles", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE", global = true)]
    output: Option<PathBuf>,

    /// Print the HTTP response payload ({"content": ...}) instead of plain text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch an article and print its body
    Scrape {
        /// Publisher name as stored upstream (e.g. "SBS", "매일 경제")
        source_name: String,

        /// Article URL
        url: String,

        /// HTTP timeout in seconds (default: none)
        #[arg(long, value_name = "SECS")]
        timeout: Option<u64>,

        /// Custom User-Agent for HTTP requests
        #[arg(long, value_name = "UA")]
        user_agent: Option<String>,
    },

    /// Extract the body from a saved page, or "-" for stdin
    Extract {
        /// Publisher name as stored upstream
        source_name: String,

        /// Local HTML file or "-"
        #[arg(value_name = "INPUT")]
        input: String,
    },

    /// List supported publisher names with their selectors
    Publishers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pressbody_core=debug"));
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    let output = match &args.command {
        Command::Scrape { source_name, url, timeout, user_agent } => {
            let config = FetchConfig {
                timeout: *timeout,
                user_agent: user_agent.clone().unwrap_or_else(|| FetchConfig::default().user_agent),
                ..Default::default()
            };
            let article = run_scrape(source_name, url, config, args.verbose).await?;
            render_article(&article, args.json)
        }
        Command::Extract { source_name, input } => {
            let article = run_extract(source_name, input, args.verbose)?;
            render_article(&article, args.json)
        }
        Command::Publishers => render_publishers(args.json),
    };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            println!("{}", output);
        }
    }

    Ok(())
}

async fn run_scrape(
    source_name: &str, url: &str, config: FetchConfig, verbose: bool,
) -> anyhow::Result<ScrapedArticle> {
    let entry = resolve(source_name).with_context(|| format!("Unsupported publisher: {source_name}"))?;

    if verbose {
        print_step(1, 3, &format!("Fetching from {}", url.bright_white().underline()));
    }

    let started = Instant::now();
    let fetcher = Fetcher::new(config).context("Failed to build HTTP client")?;
    let bytes = fetcher.fetch_bytes(url).await.context("Failed to fetch URL")?;

    if verbose {
        print_detail("Size", &format_size(bytes.len()));
        print_timing("Fetch", started.elapsed());
        eprintln!();
    }

    extract_step(entry, &bytes, verbose, 2, 3)
}

fn run_extract(source_name: &str, input: &str, verbose: bool) -> anyhow::Result<ScrapedArticle> {
    let entry = resolve(source_name).with_context(|| format!("Unsupported publisher: {source_name}"))?;

    let bytes = if input == "-" {
        if verbose {
            print_step(1, 3, "Reading from stdin");
        }
        fetch_stdin().context("Failed to read from stdin")?
    } else {
        if verbose {
            print_step(1, 3, &format!("Reading from file {}", input.bright_white()));
        }
        fetch_file(input).with_context(|| format!("Failed to read file: {}", input))?
    };

    if verbose {
        print_detail("Size", &format_size(bytes.len()));
        eprintln!();
    }

    extract_step(entry, &bytes, verbose, 2, 3)
}

fn extract_step(
    entry: &'static SelectorEntry, bytes: &[u8], verbose: bool, step: usize, total: usize,
) -> anyhow::Result<ScrapedArticle> {
    if verbose {
        print_step(step, total, "Extracting article body");
        print_detail("Publisher", entry.key);
        print_detail("Selector", entry.selector);
    }

    let started = Instant::now();
    let article = match scrape_html(entry, bytes) {
        Ok(article) => article,
        Err(PressError::NoContent) => bail!("No article body found with selector {}", entry.selector),
        Err(e) => return Err(e).context("Failed to extract content"),
    };

    if verbose {
        print_detail("Length", &format!("{} chars", article.length()));
        print_timing("Extract", started.elapsed());
        eprintln!();
        print_step(total, total, "Writing output");
    }

    Ok(article)
}

fn render_article(article: &ScrapedArticle, json: bool) -> String {
    if json { article.to_json().to_string() } else { article.content.clone() }
}

fn render_publishers(json: bool) -> String {
    if json {
        let rows: Vec<_> = supported_publishers()
            .map(|(name, entry)| serde_json::json!({ "name": name, "publisher": entry }))
            .collect();
        return serde_json::Value::Array(rows).to_string();
    }

    supported_publishers()
        .map(|(name, entry)| format!("{}\t{}\t{}\t{}", name, entry.key, entry.mode.as_str(), entry.selector))
        .collect::<Vec<_>>()
        .join("\n")
}
