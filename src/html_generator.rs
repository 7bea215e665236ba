use serde_json::json;

use crate::cards::card_record::FoundCard;
use crate::utilities::string_manipulators::escape_html;

pub fn generate_card_fragment(found: &FoundCard) -> String {
    let card = &found.card;
    let name = escape_html(&card.name);
    format!(
        r#"<div class="card">
    <h3 class="card-name">{}</h3>
    <p class="card-rarity {}">Rarity: {}</p>
    <p class="card-tier">Tier: {}</p>
    <img class="card-image" src="{}" alt="{}">
</div>"#,
        name,
        card.rarity.as_str(),
        card.rarity,
        escape_html(&card.tier),
        escape_html(&found.image_url),
        name
    )
}

pub fn generate_not_found_fragment(pattern: &str) -> String {
    format!(
        r#"<div class="card card-not-found">
    <p>No card matching "{}" was found.</p>
</div>"#,
        escape_html(pattern)
    )
}

/// Wraps a fragment the way the lookup endpoint answers: `{"html": "..."}`.
pub fn wrap_fragment(fragment: &str) -> String {
    json!({ "html": fragment }).to_string()
}
