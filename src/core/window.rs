use crate::domain::model::{Listing, TimeWindow};

/// Returns the listings whose auction end falls inside the window, as a
/// stable subsequence of the input (upstream already sorts by soonest
/// ending, and that order is preserved).
pub fn select_in_window(listings: Vec<Listing>, window: TimeWindow) -> Vec<Listing> {
    listings
        .into_iter()
        .filter(|listing| window.contains(listing.end_time))
        .collect()
}
