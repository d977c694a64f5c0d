//! Route to [`Line`] normalization
//!
//! Trip legs and stop departures label lines slightly differently when the
//! route has no short name: legs fall back to the full long name, departure
//! boards to its first four characters.

use domain::{Line, Product};

use crate::api::{RawRoute, text};
use crate::codec::parse_argb_color;

/// Characters of the long name kept as a departure-board label
const DEPARTURE_LABEL_CHARS: usize = 4;

/// Which caller a line is built for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineContext {
    /// A public leg inside a trip
    Trip,
    /// A departure-board entry
    Departure,
}

/// Build a canonical line from an upstream route
pub(crate) fn line_from_route(route: RawRoute, context: LineContext) -> Line {
    let short_name = text(route.short_name);
    let long_name = text(route.long_name);

    let label = match (&short_name, &long_name, context) {
        (Some(short), _, _) => short.clone(),
        (None, Some(long), LineContext::Trip) => long.clone(),
        (None, Some(long), LineContext::Departure) => {
            long.chars().take(DEPARTURE_LABEL_CHARS).collect()
        },
        (None, None, _) => String::new(),
    };
    let name = long_name.or(short_name).unwrap_or_default();

    Line {
        id: text(route.gtfs_id).unwrap_or_default(),
        label,
        name,
        product: route
            .mode
            .as_deref()
            .map_or(Product::Bus, Product::from_mode),
        color: parse_argb_color(route.color.as_deref()),
        text_color: parse_argb_color(route.text_color.as_deref()),
    }
}
