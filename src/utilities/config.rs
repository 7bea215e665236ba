use std::env;

use log::warn;

use super::constants::{CACHE_DIR, CARD_BASE_URL, ICY_VEINS_URL, TIER_LIST_PATH};

#[derive(Debug, Clone)]
pub struct Config {
    pub icy_veins_url: String,
    pub tier_list_path: String,
    pub card_base_url: String,
    pub cache_dir: String,
    pub use_cache: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            icy_veins_url: ICY_VEINS_URL.to_string(),
            tier_list_path: TIER_LIST_PATH.to_string(),
            card_base_url: CARD_BASE_URL.to_string(),
            cache_dir: CACHE_DIR.to_string(),
            use_cache: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from(|key| env::var(key).ok());
        config
    }

    fn update_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(icy_veins_url) = lookup("ICY_VEINS_URL") {
            self.icy_veins_url = icy_veins_url.trim_end_matches('/').to_string();
        }
        if let Some(tier_list_path) = lookup("TIER_LIST_PATH") {
            if tier_list_path.contains("{}") {
                self.tier_list_path = tier_list_path;
            } else {
                warn!(
                    "TIER_LIST_PATH '{}' has no {{}} placeholder for the class, keeping default",
                    tier_list_path
                );
            }
        }
        if let Some(card_base_url) = lookup("CARD_BASE_URL") {
            self.card_base_url = card_base_url;
        }
        if let Some(cache_dir) = lookup("CACHE_DIR") {
            if !cache_dir.is_empty() {
                self.cache_dir = cache_dir;
            }
        }
        // Only "0" turns the cache off
        if let Some(use_cache) = lookup("USE_CACHE") {
            self.use_cache = use_cache.trim() != "0";
        }
    }

    /// Url of the arena tier list page for a game class.
    pub fn tier_list_url(&self, game_class: &str) -> String {
        format!(
            "{}{}",
            self.icy_veins_url,
            self.tier_list_path.replace("{}", game_class)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_default_tier_list_url() {
        let config = Config::default();
        assert_eq!(
            config.tier_list_url("mage"),
            "http://www.icy-veins.com/hearthstone/arena-mage-tier-lists-league-of-explorers"
        );
    }

    #[test]
    fn test_tier_list_url_with_custom_base() {
        let config = Config {
            icy_veins_url: "http://127.0.0.1:1234".to_string(),
            tier_list_path: "/tiers/{}".to_string(),
            ..Config::default()
        };
        assert_eq!(config.tier_list_url("rogue"), "http://127.0.0.1:1234/tiers/rogue");
    }

    fn config_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        let mut config = Config::default();
        config.update_from(|key| vars.get(key).cloned());
        config
    }

    #[test]
    fn test_no_variables_keeps_defaults() {
        let config = config_from(&[]);
        assert_eq!(config.icy_veins_url, ICY_VEINS_URL);
        assert_eq!(config.tier_list_path, TIER_LIST_PATH);
        assert_eq!(config.card_base_url, CARD_BASE_URL);
        assert_eq!(config.cache_dir, CACHE_DIR);
        assert!(config.use_cache);
    }

    #[test]
    fn test_icy_veins_url_loses_trailing_slash() {
        let config = config_from(&[("ICY_VEINS_URL", "http://localhost:8080/")]);
        assert_eq!(config.icy_veins_url, "http://localhost:8080");
    }

    #[test]
    fn test_tier_list_path_without_placeholder_is_ignored() {
        let config = config_from(&[("TIER_LIST_PATH", "/tiers/mage")]);
        assert_eq!(config.tier_list_path, TIER_LIST_PATH);

        let config = config_from(&[("TIER_LIST_PATH", "/tiers/{}")]);
        assert_eq!(config.tier_list_path, "/tiers/{}");
    }

    #[test]
    fn test_empty_cache_dir_is_ignored() {
        assert_eq!(config_from(&[("CACHE_DIR", "")]).cache_dir, CACHE_DIR);
        assert_eq!(
            config_from(&[("CACHE_DIR", "/var/cache/arena")]).cache_dir,
            "/var/cache/arena"
        );
    }

    #[test]
    fn test_card_base_url_is_taken_as_is() {
        let config = config_from(&[("CARD_BASE_URL", "https://cards.example.com/")]);
        assert_eq!(config.card_base_url, "https://cards.example.com/");
    }

    #[test]
    fn test_only_zero_disables_cache() {
        assert!(!config_from(&[("USE_CACHE", "0")]).use_cache);
        assert!(config_from(&[("USE_CACHE", "1")]).use_cache);
        assert!(config_from(&[("USE_CACHE", "true")]).use_cache);
        assert!(config_from(&[("USE_CACHE", "yes")]).use_cache);
    }
}
