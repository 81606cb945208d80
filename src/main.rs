//! page-links CLI: render a pagination control from the command line.
//! The main interface is the library and its WASM bindings.

use anyhow::Result;
use clap::Parser;

use page_links::{DisplayConfig, Paginator, RequestContext, RouteParams, RouteUrlBuilder};

#[derive(Parser, Debug)]
#[command(name = "page-links", about = "Render pagination links for a collection")]
struct Cli {
    /// Total number of records
    #[arg(long)]
    total: i64,

    /// Records per page
    #[arg(long, default_value_t = 10)]
    limit: i64,

    /// Current page (values below 1 mean page 1)
    #[arg(long)]
    page: Option<i64>,

    /// Maximum numbered links to show
    #[arg(long)]
    max_numbers: Option<usize>,

    #[arg(long, default_value = "posts")]
    controller: String,

    #[arg(long, default_value = "index")]
    action: String,

    #[arg(long)]
    library: Option<String>,

    /// Scheme and host prepended to every link
    #[arg(long, default_value = "http://localhost")]
    base_url: String,

    /// JSON display configuration
    #[arg(long)]
    config: Option<String>,

    /// Print the link descriptors as JSON instead of markup
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match cli.config.as_deref() {
        Some(json) => DisplayConfig::from_json(json)?,
        None => DisplayConfig::default(),
    };
    if let Some(max_numbers) = cli.max_numbers {
        config.max_numbers = max_numbers;
    }

    let mut route = RouteParams::new(cli.controller, cli.action);
    route.library = cli.library;
    let context = RequestContext::new(route, cli.page, cli.total, cli.limit);

    let paginator = Paginator::new(context)
        .with_config(config)
        .with_url_builder(RouteUrlBuilder::new(cli.base_url));

    if cli.json {
        let links = paginator.links(None)?;
        println!("{}", serde_json::to_string_pretty(&links)?);
    } else {
        println!("{}", paginator.paginate(None)?);
    }

    Ok(())
}
