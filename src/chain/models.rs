// src/chain/models.rs

//! Wire models for the marketplace API.
//!
//! Every field the renderer reads is optional: the API omits nested objects
//! freely, and absence is handled with per-field fallbacks rather than decode
//! errors. Only the top-level container being missing counts as a malformed
//! response, and even that degrades to an empty list.

use serde::Deserialize;

// --- users/<address>/tokens/v7 ---

#[derive(Debug, Default, Deserialize)]
pub struct UserTokensResponse {
    #[serde(default)]
    pub tokens: Vec<OwnedToken>,
}

#[derive(Debug, Default, Deserialize)]
pub struct OwnedToken {
    #[serde(default)]
    pub token: TokenDetails,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    pub name: Option<String>,
    pub token_id: Option<String>,
    pub contract: Option<String>,
    pub kind: Option<String>,
    pub rarity_score: Option<f64>,
    pub rarity_rank: Option<i64>,
    pub image: Option<String>,
    pub collection: Option<TokenCollection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenCollection {
    pub name: Option<String>,
    pub floor_ask_price: Option<Price>,
}

/// Nested price object shared by floor asks and mint prices.
#[derive(Debug, Default, Deserialize)]
pub struct Price {
    pub amount: Option<PriceAmount>,
    pub currency: Option<Currency>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PriceAmount {
    pub decimal: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Currency {
    pub symbol: Option<String>,
}

// --- collections/trending-mints/v1 ---

#[derive(Debug, Default, Deserialize)]
pub struct TrendingMintsResponse {
    #[serde(default)]
    pub mints: Vec<TrendingCollection>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingCollection {
    pub id: Option<String>,
    pub name: Option<String>,
    pub contract_kind: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub token_count: Option<i64>,
    pub owner_count: Option<i64>,
    pub on_sale_count: Option<i64>,
    pub mint_type: Option<String>,
    pub mint_price: Option<Price>,
    pub max_supply: Option<i64>,
    pub mint_count: Option<i64>,
    pub one_hour_count: Option<i64>,
    pub six_hour_count: Option<i64>,
    pub volume_change: Option<VolumeChange>,
    pub volume: Option<Volume>,
    pub floor_ask: Option<FloorAsk>,
    #[serde(default)]
    pub mint_stages: Vec<MintStage>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VolumeChange {
    #[serde(rename = "1day")]
    pub one_day: Option<f64>,
    #[serde(rename = "7day")]
    pub seven_day: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Volume {
    #[serde(rename = "1day")]
    pub one_day: Option<f64>,
    #[serde(rename = "7day")]
    pub seven_day: Option<f64>,
    #[serde(rename = "30day")]
    pub thirty_day: Option<f64>,
    #[serde(rename = "allTime")]
    pub all_time: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorAsk {
    pub price: Option<Price>,
    pub source_domain: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MintStage {
    pub stage: Option<String>,
    pub kind: Option<String>,
    pub max_mints_per_wallet: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_with_missing_fields_decodes_to_defaults() {
        let raw = r#"{"tokens":[{"token":{"tokenId":"1","contract":"0xabc"}}]}"#;
        let resp: UserTokensResponse = serde_json::from_str(raw).unwrap();
        let t = &resp.tokens[0].token;
        assert_eq!(t.token_id.as_deref(), Some("1"));
        assert!(t.name.is_none());
        assert!(t.collection.is_none());
    }

    #[test]
    fn missing_tokens_container_decodes_as_empty() {
        let resp: UserTokensResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.tokens.is_empty());
    }

    #[test]
    fn volume_keys_use_wire_names() {
        let raw = r#"{"1day": 1.5, "30day": 2.0, "allTime": 3.25}"#;
        let v: Volume = serde_json::from_str(raw).unwrap();
        assert_eq!(v.one_day, Some(1.5));
        assert!(v.seven_day.is_none());
        assert_eq!(v.thirty_day, Some(2.0));
        assert_eq!(v.all_time, Some(3.25));
    }
}
