mod card_cache;
mod cards;
mod error;
mod hearthpwn_image_resolver;
mod html_generator;
mod icy_veins_scraper;
mod lookup_service;
mod page_fetcher;
mod test;
mod utilities;

use clap::{Parser, ValueEnum};
use log::info;
use reqwest::blocking::Client;

use cards::card_record::FoundCard;
use html_generator::{generate_card_fragment, generate_not_found_fragment, wrap_fragment};
use lookup_service::LookupService;
use page_fetcher::HttpFetcher;
use utilities::config::Config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
    Json,
}

/// Looks up the arena tier of a Hearthstone card.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Game class whose tier list is searched, e.g. "mage"
    game_class: String,

    /// Part of the card name, matched ignoring case. Without it the class data is only loaded.
    pattern: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

fn render(found: Option<&FoundCard>, pattern: &str, format: OutputFormat) -> String {
    match (format, found) {
        (OutputFormat::Text, Some(found)) => format!(
            "{}\n  Rarity: {}\n  Tier:   {}\n  Image:  {}",
            found.card.name, found.card.rarity, found.card.tier, found.image_url
        ),
        (OutputFormat::Text, None) => format!("No card matching '{}' was found.", pattern),
        (OutputFormat::Html, Some(found)) => generate_card_fragment(found),
        (OutputFormat::Html, None) => generate_not_found_fragment(pattern),
        (OutputFormat::Json, Some(found)) => wrap_fragment(&generate_card_fragment(found)),
        (OutputFormat::Json, None) => wrap_fragment(&generate_not_found_fragment(pattern)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let config = Config::new();
    info!("Starting with {:?}", config);

    let service = LookupService::new(&config, HttpFetcher::new(Client::new()))?;

    match cli.pattern {
        Some(pattern) => {
            let found = service.find_card(&cli.game_class, &pattern)?;
            println!("{}", render(found.as_ref(), &pattern, cli.format));
        }
        None => {
            let count = service.preload(&cli.game_class)?;
            println!("Loaded {} cards for class '{}'", count, cli.game_class);
        }
    }

    Ok(())
}
