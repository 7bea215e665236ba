use log::{debug, info, warn};
use scraper::{ElementRef, Html, Selector};

use crate::cards::{card_record::CardRecord, catalog::CardCatalog, rarity::Rarity};
use crate::error::{LookupError, Result};
use crate::page_fetcher::PageFetcher;
use crate::utilities::config::Config;
use crate::utilities::string_manipulators::strip_tier_prefix;

// <table id="arena_spreadsheet_table_<rarity>">
//   <tr><th>Tier 1: Excellent</th></tr>
//   <tr><td><a data-tooltip-href="//www.hearthpwn.com/cards/...">Drakonid Crusher</a></td></tr>
// </table>

pub struct IcyVeinsScraper {
    config: Config,
}

impl IcyVeinsScraper {
    pub fn new(config: &Config) -> Self {
        IcyVeinsScraper {
            config: config.clone(),
        }
    }

    /// Fetches the arena tier list of a game class and extracts every card on it.
    pub fn scrape_class(
        &self,
        fetcher: &impl PageFetcher,
        game_class: &str,
    ) -> Result<CardCatalog> {
        let start_time = chrono::prelude::Local::now();
        let url = self.config.tier_list_url(game_class);
        info!("Fetching tier list for class '{}' from {}", game_class, url);

        let html_content = fetcher.fetch_page(&url)?;
        let cards = parse_tier_list(&html_content)?;
        if cards.is_empty() {
            warn!("Tier list for '{}' has rarity tables but no cards", game_class);
        }

        let end_time = chrono::prelude::Local::now();
        info!(
            "Tier list scrape for '{}' started at: {}. Finished at: {}. Took: {} ms and found {} cards",
            game_class,
            start_time,
            end_time,
            (end_time - start_time).num_milliseconds(),
            cards.len()
        );
        Ok(cards)
    }
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| LookupError::StructuralParse(format!("bad selector '{}': {:?}", selector, e)))
}

fn child_elements<'a>(element: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap)
}

fn non_blank_attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element
        .value()
        .attr(name)
        .filter(|value| !value.trim().is_empty())
}

/// Extracts all cards from a tier list page.
///
/// Every rarity table is walked row by row. A `th` cell sets the tier for the
/// cells that follow it in the same table; a cell holding a link is a card in
/// the current tier. A missing rarity table adds no cards, but a page without
/// any of them is an error. When two tables list the same name the later table
/// wins.
///
/// Cards are keyed by the link text with surrounding whitespace trimmed; case
/// and inner text are kept as on the page. Links with blank text, or without a
/// non-blank `data-tooltip-href` or `href`, are skipped.
pub fn parse_tier_list(html_content: &str) -> Result<CardCatalog> {
    let document = Html::parse_document(html_content);
    let row_selector = parse_selector("tr")?;

    let mut cards = CardCatalog::new();
    let mut tables_found = 0;

    for rarity in Rarity::ALL {
        let table_selector = parse_selector(&format!("table#{}", rarity.table_id()))?;
        let Some(table) = document.select(&table_selector).next() else {
            warn!("No {} table found on tier list page", rarity);
            continue;
        };
        tables_found += 1;

        let mut current_tier: Option<String> = None;
        for row in table.select(&row_selector) {
            for cell in child_elements(row) {
                if cell.value().name() == "th" {
                    current_tier = Some(strip_tier_prefix(&cell.text().collect::<String>()));
                    continue;
                }

                let Some(link) = child_elements(cell).find(|el| el.value().name() == "a") else {
                    continue;
                };

                let name = link.text().collect::<String>().trim().to_string();
                if name.is_empty() {
                    warn!("Skipping {} card link without a name", rarity);
                    continue;
                }

                let tier = current_tier.as_deref().ok_or_else(|| LookupError::TierPrecondition {
                    rarity,
                    card: name.clone(),
                })?;

                let Some(url) = non_blank_attr(link, "data-tooltip-href")
                    .or_else(|| non_blank_attr(link, "href"))
                else {
                    warn!("Skipping card '{}' without a detail url", name);
                    continue;
                };

                if let Some(previous) = cards.insert(CardRecord::new(&name, rarity, tier, url)) {
                    debug!(
                        "Card '{}' listed as {} replaced by {} entry",
                        name, previous.rarity, rarity
                    );
                }
            }
        }
    }

    if tables_found == 0 {
        return Err(LookupError::StructuralParse(
            "no rarity tables found on tier list page".to_string(),
        ));
    }

    Ok(cards)
}
