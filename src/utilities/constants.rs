pub const ICY_VEINS_URL: &str = "http://www.icy-veins.com";
pub const TIER_LIST_PATH: &str = "/hearthstone/arena-{}-tier-lists-league-of-explorers";

pub const CARD_BASE_URL: &str = "http://www.hearthpwn.com";
pub const TOOLTIP_SUFFIX: &str = "/tooltip";
pub const CARD_IMAGE_PATTERN: &str =
    r"https?://media-Hearth\.cursecdn\.com/avatars/[0-9]+/[0-9]+/[0-9]+\.png";

pub const CACHE_DIR: &str = ".";
pub const CACHE_FILE_SUFFIX: &str = "-data.json";

/// Length of the "Tier N: " prefix on tier headings.
pub const TIER_PREFIX_LEN: usize = 8;

pub const USER_AGENT: &str = "arena_tier_lookup/0.1";
