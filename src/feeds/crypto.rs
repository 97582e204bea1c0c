//! Crypto feed types and re-projection
//!
//! The market-data endpoint answers with a JSON object keyed by coin id, and
//! JSON object iteration order is not stable. Quotes are re-projected into
//! the fixed order of [`Coin::ALL`] so the crypto section never reshuffles.

use crate::feeds::error::FeedError;
use serde::Deserialize;
use std::collections::HashMap;

/// The coins tracked by the dashboard, in display order.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Coin {
    Bitcoin,
    Ethereum,
    Dogecoin,
}

impl Coin {
    /// Display order of the crypto section. Entries always follow this order,
    /// whatever order the endpoint answers in.
    pub const ALL: [Coin; 3] = [Coin::Bitcoin, Coin::Ethereum, Coin::Dogecoin];

    /// The id this coin is keyed by in the market-data response.
    pub fn id(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "bitcoin",
            Coin::Ethereum => "ethereum",
            Coin::Dogecoin => "dogecoin",
        }
    }

    /// Human-readable name shown in the crypto section.
    pub fn display_name(&self) -> &'static str {
        match self {
            Coin::Bitcoin => "Bitcoin",
            Coin::Ethereum => "Ethereum",
            Coin::Dogecoin => "Dogecoin",
        }
    }
}

/// Per-coin quote as returned by the market-data endpoint.
///
/// All three fields are required; a quote missing any of them fails
/// deserialization rather than defaulting to zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CoinQuote {
    pub usd: f64,
    pub usd_24h_change: f64,
    pub usd_market_cap: f64,
}

/// A normalized crypto entry for one tracked coin.
///
/// Values keep full upstream precision. Rounding and digit grouping are
/// display concerns and happen in the renderer only.
#[derive(Debug, Clone, PartialEq)]
pub struct CryptoEntry {
    pub name: &'static str,
    pub price_usd: f64,
    pub change_24h_percent: f64,
    pub market_cap_usd: f64,
}

/// Re-project a keyed quote map into the fixed display order.
///
/// All-or-nothing: if any tracked coin is missing from the map, the whole
/// projection fails and no partial entry list is produced.
pub fn project_quotes(quotes: &HashMap<String, CoinQuote>) -> Result<Vec<CryptoEntry>, FeedError> {
    Coin::ALL
        .iter()
        .map(|coin| {
            let quote = quotes
                .get(coin.id())
                .ok_or(FeedError::MissingCoin { coin_id: coin.id() })?;
            Ok(CryptoEntry {
                name: coin.display_name(),
                price_usd: quote.usd,
                change_24h_percent: quote.usd_24h_change,
                market_cap_usd: quote.usd_market_cap,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(usd: f64, change: f64, cap: f64) -> CoinQuote {
        CoinQuote {
            usd,
            usd_24h_change: change,
            usd_market_cap: cap,
        }
    }

    #[test]
    fn test_projection_follows_display_order_not_map_order() {
        // HashMap iteration order is arbitrary; insert in reverse to be sure
        let mut quotes = HashMap::new();
        quotes.insert("dogecoin".to_string(), quote(0.12, -2.1, 17_000_000_000.0));
        quotes.insert(
            "ethereum".to_string(),
            quote(3000.0, 0.5, 360_000_000_000.0),
        );
        quotes.insert(
            "bitcoin".to_string(),
            quote(60000.0, 1.2, 1_180_000_000_000.0),
        );

        let entries = project_quotes(&quotes).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["Bitcoin", "Ethereum", "Dogecoin"]);
    }

    #[test]
    fn test_missing_coin_fails_whole_projection() {
        let mut quotes = HashMap::new();
        quotes.insert(
            "bitcoin".to_string(),
            quote(60000.0, 1.2, 1_180_000_000_000.0),
        );
        quotes.insert("dogecoin".to_string(), quote(0.12, -2.1, 17_000_000_000.0));

        let result = project_quotes(&quotes);
        match result {
            Err(FeedError::MissingCoin { coin_id }) => assert_eq!(coin_id, "ethereum"),
            other => panic!("expected MissingCoin error, got {:?}", other),
        }
    }

    #[test]
    fn test_projection_keeps_upstream_precision() {
        let mut quotes = HashMap::new();
        quotes.insert(
            "bitcoin".to_string(),
            quote(60123.456789, 1.23456, 1_180_243_521_110.55),
        );
        quotes.insert(
            "ethereum".to_string(),
            quote(3000.0, 0.5, 360_000_000_000.0),
        );
        quotes.insert("dogecoin".to_string(), quote(0.12, -2.1, 17_000_000_000.0));

        let entries = project_quotes(&quotes).unwrap();
        assert_eq!(entries[0].price_usd, 60123.456789);
        assert_eq!(entries[0].change_24h_percent, 1.23456);
        assert_eq!(entries[0].market_cap_usd, 1_180_243_521_110.55);
    }

    #[test]
    fn test_extra_coins_in_response_are_ignored() {
        let mut quotes = HashMap::new();
        quotes.insert(
            "bitcoin".to_string(),
            quote(60000.0, 1.2, 1_180_000_000_000.0),
        );
        quotes.insert(
            "ethereum".to_string(),
            quote(3000.0, 0.5, 360_000_000_000.0),
        );
        quotes.insert("dogecoin".to_string(), quote(0.12, -2.1, 17_000_000_000.0));
        quotes.insert("litecoin".to_string(), quote(80.0, 0.1, 6_000_000_000.0));

        let entries = project_quotes(&quotes).unwrap();
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_quote_deserializes_from_market_data_shape() {
        let json = r#"{
            "usd": 60000.0,
            "usd_market_cap": 1180243521110.55,
            "usd_24h_change": 1.25
        }"#;
        let quote: CoinQuote = serde_json::from_str(json).unwrap();
        assert_eq!(quote.usd, 60000.0);
        assert_eq!(quote.usd_24h_change, 1.25);
    }

    #[test]
    fn test_quote_missing_field_fails_deserialization() {
        // No silent zero defaults for absent quote fields
        let json = r#"{ "usd": 60000.0 }"#;
        let result: Result<CoinQuote, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
