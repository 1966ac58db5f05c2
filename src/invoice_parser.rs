//! # Invoice Line-Item Extractor
//!
//! This module parses raw OCR text from a supplier invoice into structured
//! candidate ingredient/price pairs using line-oriented heuristics.
//!
//! ## Features
//!
//! - Trailing-price detection ("Item Name $12.50", "Item Name  12.50")
//! - Header/summary stoplist (total, subtotal, tax, ...) for short lines
//! - Price plausibility bounds to drop totals and OCR noise
//! - Leading quantity stripping and name cleanup
//!
//! OCR output is noisy by nature, so this is a best-effort extraction: missed
//! items and spurious items are both expected. Candidates must go through
//! user review (see [`crate::invoice_review`]) before anything is persisted;
//! the extractor never auto-commits its output.

use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};

// Lines shorter than this that mention a stoplist word are headers/summaries
const SHORT_LINE_CHARS: usize = 30;
// Prices outside this band are subtotals/totals (too large) or noise (too small)
const MIN_PLAUSIBLE_PRICE: f64 = 0.01;
const MAX_PLAUSIBLE_PRICE: f64 = 1000.0;

/// Header and summary words that disqualify a short line
static STOP_WORDS: &[&str] = &[
    "total",
    "subtotal",
    "tax",
    "invoice",
    "date",
    "due",
    "amount",
    "description",
    "item",
    "qty",
    "quantity",
    "price",
];

lazy_static! {
    /// Trailing price: optional dollar sign, digits, optional decimals, end of line
    static ref PRICE_PATTERN: Regex =
        Regex::new(r"\$?\s*(\d+\.?\d*)\s*$").expect("Price pattern should be valid");
    /// Leading quantity token at the start of a candidate name
    static ref QTY_PATTERN: Regex =
        Regex::new(r"^(\d+\.?\d*)\s+").expect("Quantity pattern should be valid");
    /// Characters to scrub out of candidate names
    static ref NAME_NOISE: Regex =
        Regex::new(r"[^\w\s&'-]").expect("Name noise pattern should be valid");
    /// Runs of whitespace, collapsed after scrubbing
    static ref MULTI_SPACE: Regex =
        Regex::new(r"\s+").expect("Whitespace pattern should be valid");
    /// A name that is nothing but digits is a stray number, not an item
    static ref PURELY_NUMERIC: Regex =
        Regex::new(r"^\d+$").expect("Numeric pattern should be valid");
}

/// One candidate line item extracted from invoice text
///
/// Transient: produced here, edited or discarded during review, and only then
/// promoted into an ingredient entry. Never persisted in this raw form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    /// Identifier unique within one parse run
    pub id: u64,
    /// Cleaned candidate ingredient name
    pub name: String,
    /// Price found at the end of the line
    pub price: f64,
    /// The original line text, kept for the review screen
    pub original_line: String,
}

/// Extract candidate line items from raw OCR invoice text
///
/// Walks the text line by line; each non-blank line either yields one
/// candidate or is dropped for a specific reason (stoplist header, no
/// trailing price, implausible price, unusable name).
///
/// # Examples
///
/// ```rust
/// use platecost::invoice_parser::parse_invoice_text;
///
/// let text = "Organic Tomatoes  $3.49\nSUBTOTAL $42.10\nTotal Due: $45.00";
/// let items = parse_invoice_text(text);
///
/// assert_eq!(items.len(), 1);
/// assert_eq!(items[0].name, "Organic Tomatoes");
/// assert_eq!(items[0].price, 3.49);
/// ```
pub fn parse_invoice_text(text: &str) -> Vec<InvoiceLineItem> {
    let mut items = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_header_or_summary(line) {
            debug!("Skipping header/summary line: '{}'", line);
            continue;
        }

        let Some(captures) = PRICE_PATTERN.captures(line) else {
            debug!("No trailing price in line: '{}'", line);
            continue;
        };

        let price: f64 = match captures[1].parse() {
            Ok(price) => price,
            Err(_) => continue,
        };

        if !(MIN_PLAUSIBLE_PRICE..=MAX_PLAUSIBLE_PRICE).contains(&price) {
            debug!("Implausible price {} in line: '{}'", price, line);
            continue;
        }

        let price_start = captures.get(0).map(|m| m.start()).unwrap_or(line.len());
        let name = clean_item_name(&line[..price_start]);

        if name.chars().count() < 2 || PURELY_NUMERIC.is_match(&name) {
            debug!("Unusable candidate name '{}' in line: '{}'", name, line);
            continue;
        }

        items.push(InvoiceLineItem {
            id: items.len() as u64,
            name,
            price,
            original_line: line.to_string(),
        });
    }

    info!("Extracted {} candidate line items", items.len());
    items
}

/// Whether a line is an invoice header or summary rather than an item
///
/// A stoplist word only disqualifies short lines; a long line that merely
/// mentions one of the words as part of a product name stays in.
fn is_header_or_summary(line: &str) -> bool {
    if line.chars().count() >= SHORT_LINE_CHARS {
        return false;
    }

    let lowered = line.to_lowercase();
    STOP_WORDS.iter().any(|word| lowered.contains(word))
}

/// Strip the quantity token and scrub OCR noise from a candidate name
fn clean_item_name(raw: &str) -> String {
    let mut name = raw.trim();

    if let Some(qty) = QTY_PATTERN.find(name) {
        name = &name[qty.end()..];
    }

    let scrubbed = NAME_NOISE.replace_all(name, " ");
    let collapsed = MULTI_SPACE.replace_all(&scrubbed, " ");
    collapsed.trim().to_string()
}
