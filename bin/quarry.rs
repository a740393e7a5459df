use anyhow::Result;
use clap::Parser;
use quarry::{Filter, QueryConfig, SearchQuery};
use tracing::warn;

#[derive(Parser)]
#[command(name = "quarry")]
#[command(about = "Parse a faceted search query string", long_about = None)]
struct Args {
    /// Query string to parse
    query: String,

    /// Comma-separated list of recognized specification keys
    #[arg(long, env = "QUARRY_SPEC_KEYS", value_delimiter = ',')]
    keys: Vec<String>,

    /// Emit the index filters built from the query instead of the query model
    #[arg(long)]
    filters: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Exit with an error when the query is invalid
    #[arg(long)]
    strict: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let args = Args::parse();

    let config = if args.keys.is_empty() {
        QueryConfig::default()
    } else {
        QueryConfig::default().with_specification_keys(args.keys)
    };
    config.validate()?;

    let query = SearchQuery::parse(&args.query, &config);
    for diagnostic in query.diagnostics() {
        warn!("{}", diagnostic);
    }

    let output = if args.filters {
        let filters = Filter::from_query(&query);
        if args.pretty {
            serde_json::to_string_pretty(&filters)?
        } else {
            serde_json::to_string(&filters)?
        }
    } else if args.pretty {
        serde_json::to_string_pretty(&query)?
    } else {
        serde_json::to_string(&query)?
    };
    println!("{}", output);

    if args.strict {
        query.ensure_valid()?;
    }
    Ok(())
}
