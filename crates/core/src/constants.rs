/// Maximum number of search candidates surfaced for a query
pub const MAX_SEARCH_RESULTS: usize = 5;

/// Reference currency for all current valuations.
///
/// Current values are always quoted in USD, independent of the fiat
/// currency a trade was originally settled in. Multi-currency valuation
/// would require an explicit exchange-rate input to the engine.
pub const VALUATION_CURRENCY: &str = "USD";

/// Setting key for the UI theme
pub const SETTING_KEY_THEME: &str = "appTheme";

/// Setting key for the stored price API key
pub const SETTING_KEY_API_KEY: &str = "cryptoApiKey";
