use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use dishx_core::{StopWords, TfidfConfig};
use dishx_recommend::{
    matching_rows, recommend_filtered, recommend_similar, ContextCache, FilterQuery,
    Recommendation, RecommenderConfig, RecommenderContext, DEFAULT_FILTER_TOP_N,
    DEFAULT_SIMILAR_TOP_N,
};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Restaurant recommendations from a CSV table
#[derive(Parser, Debug)]
#[command(name = "dishx")]
#[command(about = "What should we eat tonight? Similar and filtered restaurant picks", long_about = None)]
struct Args {
    /// Path to the restaurant CSV
    #[arg(short, long, default_value = "Lineman_Shops_Final_Clean.csv")]
    data: PathBuf,

    /// Maximum TF-IDF vocabulary size
    #[arg(long, default_value_t = dishx_core::DEFAULT_MAX_FEATURES)]
    max_features: usize,

    /// Neighbor count the index is built with
    #[arg(long, default_value_t = dishx_core::DEFAULT_N_NEIGHBORS)]
    n_neighbors: usize,

    /// Keep English stop words in the vocabulary
    #[arg(long)]
    keep_stop_words: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Markdown)]
    format: Format,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Restaurants similar to the first one whose name contains NAME
    Similar {
        name: String,
        #[arg(short = 'n', long, default_value_t = DEFAULT_SIMILAR_TOP_N)]
        top_n: usize,
    },
    /// Browse by province, category and price level
    Filter {
        #[arg(long)]
        province: String,
        #[arg(long)]
        category: String,
        #[arg(long)]
        price_level: String,
        #[arg(short = 'n', long, default_value_t = DEFAULT_FILTER_TOP_N)]
        top_n: usize,
    },
    /// Every restaurant whose name contains NAME
    Matches { name: String },
    /// Selectable provinces, categories and price levels
    Options,
    /// Interactive session; the table is loaded once
    Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Markdown,
    Json,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting dishx v{}", env!("CARGO_PKG_VERSION"));
    info!("Data file: {:?}", args.data);

    let config = RecommenderConfig {
        indexer: TfidfConfig {
            max_features: args.max_features,
            stop_words: if args.keep_stop_words {
                StopWords::None
            } else {
                StopWords::English
            },
        },
        n_neighbors: args.n_neighbors,
        ..RecommenderConfig::default()
    };

    let cache = ContextCache::new();
    let ctx = cache
        .get_or_load(&args.data, &config)
        .with_context(|| format!("failed to load restaurants from {}", args.data.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Similar { name, top_n } => {
            print_results(&mut out, &recommend_similar(&ctx, &name, top_n), args.format)?;
        }
        Command::Filter {
            province,
            category,
            price_level,
            top_n,
        } => {
            let query = FilterQuery::new(province, category, price_level);
            print_results(&mut out, &recommend_filtered(&ctx, &query, top_n), args.format)?;
        }
        Command::Matches { name } => print_matches(&mut out, &ctx, &name, args.format)?,
        Command::Options => print_options(&mut out, &ctx, args.format)?,
        Command::Shell => {
            drop(out);
            run_shell(&cache, &args.data, &config, ctx, args.format)?;
        }
    }

    Ok(())
}

fn print_results<W: Write>(out: &mut W, results: &[Recommendation], format: Format) -> anyhow::Result<()> {
    match format {
        Format::Markdown => {
            for item in results {
                writeln!(out, "{}\n", item)?;
            }
        }
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(results)?)?,
    }
    Ok(())
}

fn print_matches<W: Write>(
    out: &mut W,
    ctx: &RecommenderContext,
    name: &str,
    format: Format,
) -> anyhow::Result<()> {
    let names: Vec<&str> = matching_rows(ctx, name)
        .into_iter()
        .filter_map(|row| ctx.dataset().get(row))
        .map(|r| r.name.as_str())
        .collect();

    match format {
        Format::Markdown => {
            if names.is_empty() {
                writeln!(out, "No restaurant name contains {:?}", name)?;
            }
            for (i, n) in names.iter().enumerate() {
                let marker = if i == 0 { " (used for similarity)" } else { "" };
                writeln!(out, "- {}{}", n, marker)?;
            }
        }
        Format::Json => writeln!(out, "{}", serde_json::to_string_pretty(&names)?)?,
    }
    Ok(())
}

fn print_options<W: Write>(out: &mut W, ctx: &RecommenderContext, format: Format) -> anyhow::Result<()> {
    let ds = ctx.dataset();
    match format {
        Format::Markdown => {
            writeln!(out, "### Provinces / streets")?;
            for s in ds.streets() {
                writeln!(out, "- {}", s)?;
            }
            writeln!(out, "\n### Categories")?;
            for c in ds.categories() {
                writeln!(out, "- {}", c)?;
            }
            writeln!(out, "\n### Price levels")?;
            for p in ds.price_levels() {
                writeln!(out, "- {}", p)?;
            }
        }
        Format::Json => {
            let value = serde_json::json!({
                "streets": ds.streets(),
                "categories": ds.categories(),
                "price_levels": ds.price_levels(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&value)?)?;
        }
    }
    Ok(())
}

const SHELL_HELP: &str = "\
Commands:
  similar <name>                          similar restaurants
  filter <province> | <category> | <price> browse with filters
  matches <name>                          list name matches
  options                                 list filter values
  reload                                  re-read the data file
  help                                    this text
  quit                                    leave
";

fn run_shell(
    cache: &ContextCache,
    path: &Path,
    config: &RecommenderConfig,
    mut ctx: Arc<RecommenderContext>,
    format: Format,
) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "dishx shell: {} restaurants loaded. Type 'help'.", ctx.dataset().len())?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        debug!("shell command {:?} {:?}", cmd, rest);

        match cmd {
            "" => continue,
            "quit" | "exit" => break,
            "help" => write!(out, "{}", SHELL_HELP)?,
            "similar" => {
                print_results(&mut out, &recommend_similar(&ctx, rest, DEFAULT_SIMILAR_TOP_N), format)?
            }
            "filter" => {
                let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
                match parts.as_slice() {
                    [province, category, price] => {
                        let query = FilterQuery::new(*province, *category, *price);
                        print_results(&mut out, &recommend_filtered(&ctx, &query, DEFAULT_FILTER_TOP_N), format)?;
                    }
                    _ => writeln!(out, "usage: filter <province> | <category> | <price>")?,
                }
            }
            "matches" => print_matches(&mut out, &ctx, rest, format)?,
            "options" => print_options(&mut out, &ctx, format)?,
            "reload" => {
                cache.invalidate(path);
                match cache.get_or_load(path, config) {
                    Ok(fresh) => {
                        ctx = fresh;
                        writeln!(out, "Reloaded {} restaurants", ctx.dataset().len())?;
                    }
                    Err(e) => writeln!(out, "Reload failed, keeping previous data: {}", e)?,
                }
            }
            other => writeln!(out, "Unknown command {:?}; type 'help'", other)?,
        }
    }

    Ok(())
}
