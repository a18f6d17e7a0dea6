use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use wikilens_core::{
    AnalysisRecord, Analyzer, AnalyzerConfig, ConfigLoader, ConfigLoaderBuilder, OutputFormat, SearchHit, TextConfig,
    WikiClient, WikiConfig, record_to_json, record_to_text, record_to_toml,
};

mod echo;

use echo::{format_size, print_banner, print_field, print_info, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze encyclopedia articles: metrics, complexity, sentiment, topics
#[derive(Parser, Debug)]
#[command(name = "wikilens")]
#[command(author = "Wikilens Contributors")]
#[command(version)]
#[command(about = "Analyze encyclopedia articles and plain text", long_about = None)]
#[command(arg_required_else_help = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Analyzer directive file (applied after ~/.config/wikilens/analyzer.txt)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, global = true, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Show progress on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completion script and exit
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze local text from a file or stdin
    Analyze {
        /// Text file, or "-" / nothing for stdin
        #[arg(value_name = "INPUT")]
        input: Option<String>,

        /// Article title (defaults to the file name)
        #[arg(short, long, value_name = "TITLE")]
        title: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Fetch an article by title and analyze it
    Article {
        /// Article title, e.g. "Barack Obama"
        #[arg(value_name = "TITLE")]
        title: String,

        /// Encyclopedia language edition
        #[arg(short, long, default_value = "en", value_name = "LANG")]
        lang: String,

        /// Analyze the full article text instead of the summary
        #[arg(long)]
        full: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Search article titles
    Search {
        /// Search terms
        #[arg(value_name = "QUERY")]
        query: String,

        /// Encyclopedia language edition
        #[arg(short, long, default_value = "en", value_name = "LANG")]
        lang: String,

        /// Maximum number of results
        #[arg(long, default_value = "10", value_name = "N")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output format (json, text, toml)
    #[arg(short, long, default_value = "json", value_name = "FORMAT")]
    format: OutputFormat,

    /// Pretty print JSON output
    #[arg(long)]
    pretty: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        clap_complete::generate(shell, &mut Args::command(), "wikilens", &mut io::stdout());
        return Ok(());
    }

    if args.verbose {
        print_banner();
    }

    match &args.command {
        Some(Command::Analyze { input, title, output }) => run_analyze(&args, input.as_deref(), title.as_deref(), output),
        Some(Command::Article { title, lang, full, output }) => run_article(&args, title, lang, *full, output).await,
        Some(Command::Search { query, lang, limit, json }) => run_search(&args, query, lang, *limit, *json).await,
        None => {
            Args::command().print_help()?;
            Ok(())
        }
    }
}

fn run_analyze(args: &Args, input: Option<&str>, title: Option<&str>, output: &OutputArgs) -> anyhow::Result<()> {
    let analyzer = build_analyzer(args, None)?;

    let (title, body) = match input {
        None | Some("-") => {
            if args.verbose {
                print_step(1, 3, "Reading from stdin");
            }
            let body = wikilens_core::read_stdin().context("Failed to read from stdin")?;
            (title.unwrap_or_default().to_string(), body)
        }
        Some(path) => {
            if args.verbose {
                print_step(1, 3, &format!("Reading from file {}", path.bright_white()));
            }
            let article = wikilens_core::article_from_file(path, title)
                .with_context(|| format!("Failed to read file: {}", path))?;
            (article.title, article.body)
        }
    };

    if args.verbose {
        print_field("Size:", &format_size(body.len()));
        if !title.is_empty() {
            print_field("Title:", &title);
        }
        eprintln!();
        print_step(2, 3, "Analyzing text");
    }

    let record = analyzer.analyze(&title, &body);
    emit(args, 3, &title, &record, output)
}

async fn run_article(args: &Args, title: &str, lang: &str, full: bool, output: &OutputArgs) -> anyhow::Result<()> {
    let client = wiki_client(args, lang, 10)?;
    let page_base = client.config().page_base_url()?;
    let analyzer = build_analyzer(args, Some(page_base.as_str()))?;

    if args.verbose {
        print_step(1, 3, &format!("Fetching {} from {}.wikipedia.org", title.bright_white(), lang));
    }

    let summary = client.summary(title).await.with_context(|| format!("Failed to fetch article: {}", title))?;
    let body = if full {
        client
            .full_extract(&summary.title)
            .await
            .with_context(|| format!("Failed to fetch full text: {}", summary.title))?
    } else {
        summary.extract.clone()
    };

    if args.verbose {
        print_field("Title:", &summary.title);
        print_field("URL:", &summary.url);
        print_field("Size:", &format_size(body.len()));
        eprintln!();
        print_step(2, 3, "Analyzing text");
    }

    let record = analyzer.analyze(&summary.title, &body);
    emit(args, 3, &summary.title, &record, output)
}

async fn run_search(args: &Args, query: &str, lang: &str, limit: usize, json: bool) -> anyhow::Result<()> {
    if query.trim().is_empty() {
        bail!("Search query must not be empty");
    }

    let client = wiki_client(args, lang, limit)?;

    if args.verbose {
        print_step(1, 1, &format!("Searching {} for {}", format!("{}.wikipedia.org", lang).bright_white(), query));
    }

    let hits = client.search(query).await.context("Search failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
        return Ok(());
    }

    if hits.is_empty() {
        print_warning("No results");
        return Ok(());
    }

    for (i, hit) in hits.iter().enumerate() {
        println!("{}", format_hit(i + 1, hit));
    }

    Ok(())
}

fn format_hit(rank: usize, hit: &SearchHit) -> String {
    let snippet: String = hit.extract.chars().take(120).collect();
    let ellipsis = if hit.extract.chars().count() > 120 { "…" } else { "" };
    format!("{:>2}. {}\n    {}{}", rank, hit.title.bold(), snippet.dimmed(), ellipsis)
}

fn wiki_client(args: &Args, lang: &str, limit: usize) -> anyhow::Result<WikiClient> {
    let config = WikiConfig {
        language: lang.to_string(),
        timeout: args.timeout,
        search_limit: limit,
        ..Default::default()
    };
    WikiClient::new(config).context("Failed to create encyclopedia client")
}

/// Loads directive files on top of defaults; `page_base` sets the link base
/// for fetched articles before the files apply.
fn build_analyzer(args: &Args, page_base: Option<&str>) -> anyhow::Result<Analyzer> {
    let mut base = AnalyzerConfig::default();
    if let Some(page_base) = page_base {
        base.wiki_base_url = page_base.to_string();
    }

    let mut builder = ConfigLoaderBuilder::new().base(base);
    if let Some(dir) = ConfigLoader::default_user_dir() {
        builder = builder.user_dir(dir);
    }
    if let Some(file) = &args.config {
        if args.verbose {
            print_info(&format!("Using config {}", file.display()));
        }
        builder = builder.file(file);
    }

    let config = builder.build().load().context("Failed to load analyzer configuration")?;
    Analyzer::with_config(config).context("Invalid analyzer configuration")
}

fn emit(args: &Args, step: usize, title: &str, record: &AnalysisRecord, output: &OutputArgs) -> anyhow::Result<()> {
    let rendered = match output.format {
        OutputFormat::Json => record_to_json(record, output.pretty)? + "\n",
        OutputFormat::Text => record_to_text(title, record, &TextConfig::default())?,
        OutputFormat::Toml => record_to_toml(record)?,
    };

    if args.verbose {
        print_step(step, step, "Writing output");
        print_field("Format:", output.format.as_str());
        eprintln!();
    }

    match &output.output {
        Some(path) => write_output(path, &rendered),
        None => {
            print!("{}", rendered);
            Ok(())
        }
    }
}

fn write_output(path: &Path, rendered: &str) -> anyhow::Result<()> {
    fs::write(path, rendered).with_context(|| format!("Failed to write to file: {}", path.display()))?;
    print_success(&format!("Output written to {}", path.display().bright_white()));
    Ok(())
}
