// src/render.rs

//! Turns loosely-structured upstream records into deterministic, human-
//! readable reports. Each record is an ordered list of lines; optional
//! clauses are pushed only when their governing fields are present, with
//! fixed fallback literals where the field order demands a line anyway.
//!
//! The fallback strings mirror one reference deployment of the marketplace
//! schema. If that schema shifts they are the first thing to revisit, which
//! is why they live here as named constants instead of inline literals.

use chrono::DateTime;

use crate::chain::models::{OwnedToken, Price, TrendingCollection, TrendingMintsResponse, UserTokensResponse};

pub const NATIVE_SYMBOL: &str = "MON";
const NATIVE_DECIMALS: u32 = 18;

const UNNAMED_NFT: &str = "Unnamed NFT";
const UNKNOWN_COLLECTION: &str = "Unknown collection";
const UNKNOWN_TYPE: &str = "Unknown type";
const UNNAMED_COLLECTION: &str = "Unnamed Collection";
const UNKNOWN_KIND: &str = "Unknown";
const UNKNOWN_MARKETPLACE: &str = "Unknown marketplace";
const FREE_MINT: &str = "Free";
const NO_DATE: &str = "N/A";

/// Formats a wei amount as a decimal MON string with trailing zeros trimmed,
/// so exactly 1 MON renders as `1`, not `1.000000000000000000`.
pub fn format_mon(wei: u128) -> String {
    let scale = 10u128.pow(NATIVE_DECIMALS);
    let whole = wei / scale;
    let frac = wei % scale;
    if frac == 0 {
        return whole.to_string();
    }
    let digits = format!("{:0width$}", frac, width = NATIVE_DECIMALS as usize);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

fn two_dp(value: f64) -> String {
    format!("{:.2}", value)
}

/// Currency symbol buried inside a nested price object, `MON` when absent.
fn price_symbol(price: &Price) -> &str {
    price
        .currency
        .as_ref()
        .and_then(|c| c.symbol.as_deref())
        .unwrap_or(NATIVE_SYMBOL)
}

fn price_decimal(price: &Price) -> Option<f64> {
    price.amount.as_ref().and_then(|a| a.decimal)
}

/// RFC 3339 timestamps become a readable UTC date; anything unparseable is
/// passed through as-is rather than dropped.
fn format_date(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}

pub fn balance_text(address: &str, wei: u128) -> String {
    format!(
        "Balance for {}: {} {}",
        address,
        format_mon(wei),
        NATIVE_SYMBOL
    )
}

pub fn portfolio_text(address: &str, resp: &UserTokensResponse) -> String {
    let records: Vec<String> = resp.tokens.iter().map(token_record).collect();
    format!(
        "NFT Portfolio for {}:\n\nTotal NFTs: {}\n\n{}",
        address,
        resp.tokens.len(),
        records.join("\n\n")
    )
}

fn token_record(owned: &OwnedToken) -> String {
    let t = &owned.token;
    let mut lines = vec![
        format!("- Name: {}", t.name.as_deref().unwrap_or(UNNAMED_NFT)),
        format!(
            "  Collection: {}",
            t.collection
                .as_ref()
                .and_then(|c| c.name.as_deref())
                .unwrap_or(UNKNOWN_COLLECTION)
        ),
        format!("  Token ID: {}", t.token_id.as_deref().unwrap_or_default()),
        format!("  Contract: {}", t.contract.as_deref().unwrap_or_default()),
        format!("  Type: {}", t.kind.as_deref().unwrap_or(UNKNOWN_TYPE)),
    ];

    if let (Some(score), Some(rank)) = (t.rarity_score, t.rarity_rank) {
        lines.push(format!("  Rarity: Score {}, Rank {}", two_dp(score), rank));
    }
    if let Some(price) = t.collection.as_ref().and_then(|c| c.floor_ask_price.as_ref()) {
        if let Some(decimal) = price_decimal(price) {
            lines.push(format!(
                "  Floor Price: {} {}",
                two_dp(decimal),
                price_symbol(price)
            ));
        }
    }
    if let Some(image) = t.image.as_deref() {
        lines.push(format!("  Image: {}", image));
    }

    lines.join("\n")
}

pub fn trending_text(resp: &TrendingMintsResponse) -> String {
    let records: Vec<String> = resp
        .mints
        .iter()
        .enumerate()
        .map(|(i, c)| collection_record(i + 1, c))
        .collect();
    format!(
        "\u{1f525} Trending NFT Collections on Monad Testnet \u{1f525}\n\nTotal Collections: {}\n\n{}",
        resp.mints.len(),
        records.join("\n\n")
    )
}

fn collection_record(index: usize, c: &TrendingCollection) -> String {
    let mut lines = vec![format!(
        "{}. {}",
        index,
        c.name.as_deref().unwrap_or(UNNAMED_COLLECTION)
    )];

    if let Some(id) = c.id.as_deref() {
        lines.push(format!(
            "   Contract: {} ({})",
            id,
            c.contract_kind.as_deref().unwrap_or(UNKNOWN_KIND)
        ));
    }
    if let Some(desc) = c.description.as_deref() {
        lines.push(format!("   Description: {}", desc));
    }

    let mut stats = Vec::new();
    if let Some(tokens) = c.token_count {
        stats.push(format!("{} tokens", tokens));
    }
    if let Some(owners) = c.owner_count {
        stats.push(format!("{} owners", owners));
    }
    if !stats.is_empty() {
        lines.push(format!("   Stats: {}", stats.join(", ")));
    }

    if let Some(on_sale) = c.on_sale_count {
        lines.push(format!("   On Sale: {}", on_sale));
    }

    if let Some(mint_type) = c.mint_type.as_deref() {
        let price = c
            .mint_price
            .as_ref()
            .and_then(price_decimal)
            .map(two_dp)
            .unwrap_or_else(|| FREE_MINT.to_string());
        let currency = c
            .mint_price
            .as_ref()
            .map(price_symbol)
            .unwrap_or(NATIVE_SYMBOL);
        let mut line = format!("   Mint: {}, Price: {} {}", mint_type, price, currency);
        if let Some(max) = c.max_supply {
            line.push_str(&format!(", Max Supply: {}", max));
        }
        lines.push(line);
    }

    if let Some(total) = c.mint_count {
        let mut line = format!("   Total Mints: {}", total);
        let mut windows = Vec::new();
        if let Some(h1) = c.one_hour_count {
            windows.push(format!("1h: {}", h1));
        }
        if let Some(h6) = c.six_hour_count {
            windows.push(format!("6h: {}", h6));
        }
        if !windows.is_empty() {
            line.push_str(&format!(" ({})", windows.join(", ")));
        }
        lines.push(line);
    }

    if let Some(change) = c.volume_change.as_ref() {
        if let Some(d1) = change.one_day {
            lines.push(format!("   Volume Change (24h): {}%", two_dp(d1 * 100.0)));
        }
        if let Some(d7) = change.seven_day {
            lines.push(format!("   Volume Change (7d): {}%", two_dp(d7 * 100.0)));
        }
    }

    if let Some(volume) = c.volume.as_ref() {
        lines.push(format!(
            "   Volume (24h): {}",
            two_dp(volume.one_day.unwrap_or(0.0))
        ));
        lines.push(format!(
            "   Volume (7d): {}",
            two_dp(volume.seven_day.unwrap_or(0.0))
        ));
        lines.push(format!(
            "   Volume (30d): {}",
            two_dp(volume.thirty_day.unwrap_or(0.0))
        ));
        lines.push(format!(
            "   Volume (All Time): {}",
            two_dp(volume.all_time.unwrap_or(0.0))
        ));
    }

    if let Some(ask) = c.floor_ask.as_ref() {
        if let Some(price) = ask.price.as_ref() {
            if let Some(decimal) = price_decimal(price) {
                lines.push(format!(
                    "   Floor Price: {} {} (on {})",
                    two_dp(decimal),
                    price_symbol(price),
                    ask.source_domain.as_deref().unwrap_or(UNKNOWN_MARKETPLACE)
                ));
            }
        }
    }

    if let Some(stage) = c.mint_stages.first() {
        let mut line = format!(
            "   Current Stage: {} ({})",
            stage.stage.as_deref().unwrap_or(UNKNOWN_KIND),
            stage.kind.as_deref().unwrap_or(UNKNOWN_KIND)
        );
        if let Some(max) = stage.max_mints_per_wallet {
            line.push_str(&format!(", Max Per Wallet: {}", max));
        }
        lines.push(line);
    }

    if c.start_date.is_some() || c.end_date.is_some() {
        let start = c
            .start_date
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| NO_DATE.to_string());
        let end = c
            .end_date
            .as_deref()
            .map(format_date)
            .unwrap_or_else(|| NO_DATE.to_string());
        lines.push(format!("   Mint Period: {} to {}", start, end));
    }

    if let Some(image) = c.image.as_deref() {
        lines.push(format!("   Image: {}", image));
    }

    lines.join("\n")
}
