use crate::core::normalize;
use crate::domain::model::{Listing, Price, RawItem, RawPrice};
use crate::utils::error::{AuctionError, Result};
use rust_decimal::Decimal;

/// Maps one raw search-result record into a normalized `Listing`.
///
/// A record without an identifier, price or end time is unusable and fails
/// with `IncompleteRecord`. A missing title is tolerated and becomes the
/// empty string, as do the purely cosmetic fields.
pub fn extract(raw: &RawItem) -> Result<Listing> {
    let id = raw
        .item_id
        .as_deref()
        .filter(|s| !s.is_empty())
        .ok_or(AuctionError::IncompleteRecord { field: "itemId" })?
        .to_string();

    let raw_price = raw
        .price
        .as_ref()
        .ok_or(AuctionError::IncompleteRecord {
            field: "currentPrice",
        })?;
    let price = parse_price(raw_price)?;

    let end_value = raw
        .end_time
        .as_ref()
        .ok_or(AuctionError::IncompleteRecord { field: "endTime" })?;
    let end_time = normalize::parse_end_time(end_value)?;

    Ok(Listing {
        id,
        title: raw.title.clone().unwrap_or_default(),
        price,
        end_time,
        url: raw.url.clone().unwrap_or_default(),
        category: raw.category.clone().unwrap_or_default(),
        location: raw.location.clone().unwrap_or_default(),
        condition: raw.condition.clone().unwrap_or_default(),
        bid_count: raw.bid_count.map(|n| n.to_string()).unwrap_or_default(),
    })
}

fn parse_price(raw: &RawPrice) -> Result<Price> {
    let text = match &raw.value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Null => {
            return Err(AuctionError::IncompleteRecord {
                field: "currentPrice.value",
            })
        }
        other => {
            return Err(AuctionError::InvalidPrice {
                value: other.to_string(),
            })
        }
    };

    let value: Decimal = text.trim().parse().map_err(|_| AuctionError::InvalidPrice {
        value: text.clone(),
    })?;
    if value < Decimal::ZERO {
        return Err(AuctionError::InvalidPrice { value: text });
    }

    Ok(Price {
        value,
        currency: raw.currency.clone().unwrap_or_else(|| "USD".to_string()),
    })
}

/// Extracts every record it can. Per-record failures are logged with the
/// item identifier when one is available and skipped; they never abort the
/// batch. Returns the surviving listings in input order plus the skip count.
pub fn extract_all(raws: &[RawItem]) -> Result<(Vec<Listing>, usize)> {
    let mut listings = Vec::with_capacity(raws.len());
    let mut skipped = 0usize;

    for raw in raws {
        match extract(raw) {
            Ok(listing) => listings.push(listing),
            Err(e) if e.is_record_error() => {
                skipped += 1;
                tracing::warn!(
                    item_id = raw.item_id.as_deref().unwrap_or("<unknown>"),
                    "skipping record: {}",
                    e
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok((listings, skipped))
}
