use anyhow::Result;
use clap::Parser;
use gojo_search::interpreters::{
    Interpreter, InterpreterConfig, LocalInterpreter, OpenAiInterpreter,
};
use gojo_search::listings::{filter_listings, sample_listings, ListingsConfig, SupabaseListings};
use gojo_search::models::Property;
use gojo_search::session::SearchSession;
use gojo_search::suggestions::generate_search_suggestions;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Interpret a natural-language rental search for Addis Ababa
#[derive(Debug, Parser)]
#[command(name = "gojo-search", version)]
struct Cli {
    /// Free-text query, e.g. "2 bedroom apartment in Bole under 25,000 ETB"
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    /// Skip the remote interpreter even if a key is configured
    #[arg(long)]
    local: bool,

    /// Fetch matching listings from the backend
    #[arg(long)]
    fetch: bool,

    /// Print query suggestions instead of interpreting
    #[arg(long)]
    suggest: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let query = cli.query.join(" ");

    if cli.suggest {
        for suggestion in generate_search_suggestions(&query) {
            println!("{}", suggestion);
        }
        return Ok(());
    }

    if query.trim().is_empty() {
        anyhow::bail!("Please enter a search query");
    }

    let interpreter: Box<dyn Interpreter> = if cli.local {
        Box::new(LocalInterpreter)
    } else {
        Box::new(OpenAiInterpreter::new(InterpreterConfig::from_env())?)
    };

    info!("🔎 Interpreting with {} interpreter", interpreter.source_name());

    let mut session = SearchSession::new();
    let ticket = session.begin(&query);
    let result = interpreter.interpret(&query).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    session.apply(ticket, result);

    if cli.fetch {
        let properties = match ListingsConfig::from_env() {
            Some(config) => SupabaseListings::new(config)?.fetch(session.filters()).await?,
            None => {
                warn!("SUPABASE_URL / SUPABASE_ANON_KEY not set, searching sample listings");
                filter_listings(&sample_listings(), session.filters())
            }
        };
        info!("✅ {} listings match", properties.len());
        print_listings(&properties);
    }

    Ok(())
}

fn print_listings(properties: &[Property]) {
    for (i, property) in properties.iter().enumerate() {
        println!("{}. {} ({} ETB/month)", i + 1, property.title, property.price);
        println!("   {} · {}", property.location, property.property_type);
        if let Some(bedrooms) = property.bedrooms {
            println!("   {} bedrooms", bedrooms);
        }
        if !property.features.is_empty() {
            println!("   Features: {}", property.features.join(", "));
        }
    }
}
