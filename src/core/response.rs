use crate::domain::model::{EndTimeValue, RawItem, RawPrice};
use crate::utils::error::{AuctionError, Result};
use serde_json::Value;

/// Walks a Finding API JSON body into raw items.
///
/// The service wraps every field in a single-element array
/// (`"title": ["..."]`), nests the price under `sellingStatus` and the end
/// time under `listingInfo`. Missing fields stay `None`; the extractor
/// decides what to do about them. A non-`Success` ack is a whole-response
/// failure, not a per-record one.
pub fn parse_search_response(body: &Value) -> Result<Vec<RawItem>> {
    let response = first(body, "findItemsAdvancedResponse").ok_or_else(|| {
        AuctionError::ProcessingError {
            message: "response has no findItemsAdvancedResponse element".to_string(),
        }
    })?;

    let ack = first_str(response, "ack").unwrap_or_default();
    if ack != "Success" {
        return Err(AuctionError::ProcessingError {
            message: format!("search failed with ack {:?}", ack),
        });
    }

    let Some(result) = first(response, "searchResult") else {
        return Ok(Vec::new());
    };
    let items = result
        .get("item")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    Ok(items.iter().map(raw_item_from_value).collect())
}

fn raw_item_from_value(item: &Value) -> RawItem {
    let selling_status = first(item, "sellingStatus");

    RawItem {
        item_id: first_str(item, "itemId"),
        title: first_str(item, "title"),
        price: selling_status
            .and_then(|s| first(s, "currentPrice"))
            .map(|price| RawPrice {
                value: price.get("__value__").cloned().unwrap_or(Value::Null),
                currency: price
                    .get("@currencyId")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            }),
        end_time: first(item, "listingInfo")
            .and_then(|info| first_str(info, "endTime"))
            .map(EndTimeValue::Text),
        url: first_str(item, "viewItemURL"),
        category: first(item, "primaryCategory").and_then(|c| first_str(c, "categoryName")),
        location: first_str(item, "location"),
        condition: first(item, "condition").and_then(|c| first_str(c, "conditionDisplayName")),
        bid_count: selling_status
            .and_then(|s| first_str(s, "bidCount"))
            .and_then(|n| n.parse().ok()),
        seller: first(item, "sellerInfo").and_then(|s| first_str(s, "sellerUserName")),
    }
}

fn first<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).and_then(|v| v.get(0))
}

fn first_str(value: &Value, key: &str) -> Option<String> {
    first(value, key)
        .and_then(Value::as_str)
        .map(str::to_string)
}
