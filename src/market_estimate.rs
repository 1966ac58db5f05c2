//! # Market Cost Estimator
//!
//! Heuristic cost-per-gram estimates for ingredient names, used to pre-fill
//! cost forms with a plausible starting point. The output is advisory and
//! never authoritative: the confidence field is a coarse matched/unmatched
//! signal, not a statistical measure, and nothing returned here is persisted.
//!
//! The lookup is asynchronous to mirror consulting an external pricing
//! source, but it is a local deterministic table walk; the suspension is an
//! artificial delay (with a little random jitter), not real I/O. Callers
//! embedding this in a strict request/response boundary should impose their
//! own timeout.

use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

/// Fallback cost per gram when no keyword matches (~$10/kg)
const DEFAULT_BASE: f64 = 0.010;
/// Fallback variance when no keyword matches
const DEFAULT_VARIANCE: f64 = 0.004;
/// Base latency of the simulated pricing lookup
const SIMULATED_LATENCY_MS: u64 = 900;
/// Upper bound of the random jitter added to the simulated latency
const LATENCY_JITTER_MS: u64 = 200;

/// Cost-per-gram center and spread for one keyword
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketRate {
    /// Typical wholesale cost per gram
    pub base: f64,
    /// Expected spread around the base
    pub variance: f64,
}

const fn rate(base: f64, variance: f64) -> MarketRate {
    MarketRate { base, variance }
}

/// Keyword rate table, in USD per gram at typical restaurant/wholesale prices.
///
/// Entry order is semantically significant: the first key that equals or is a
/// substring of the normalized name wins, so an early generic key ("chicken")
/// shadows a later specific one ("chicken breast"). That first-match-wins
/// behavior is part of the heuristic's contract; do not reorder entries or
/// replace this slice with a map.
static MARKET_RATES: &[(&str, MarketRate)] = &[
    // Grains & starches
    ("flour", rate(0.001, 0.0005)),  // ~$1/kg
    ("sugar", rate(0.0015, 0.0005)), // ~$1.50/kg
    ("salt", rate(0.0002, 0.0001)),  // ~$0.20/kg
    ("rice", rate(0.002, 0.001)),
    ("pasta", rate(0.002, 0.001)),
    ("bread", rate(0.003, 0.001)),
    // Poultry
    ("chicken", rate(0.008, 0.003)), // ~$8/kg
    ("chicken breast", rate(0.010, 0.004)),
    ("chicken thigh", rate(0.007, 0.003)),
    ("turkey", rate(0.009, 0.003)),
    // Red meat
    ("beef", rate(0.015, 0.006)), // ~$15/kg
    ("ground beef", rate(0.012, 0.005)),
    ("steak", rate(0.025, 0.010)),
    ("pork", rate(0.010, 0.004)),
    ("bacon", rate(0.020, 0.008)),
    ("lamb", rate(0.018, 0.007)),
    // Seafood
    ("salmon", rate(0.025, 0.010)), // ~$25/kg
    ("tuna", rate(0.020, 0.008)),
    ("fish", rate(0.015, 0.006)),
    ("shrimp", rate(0.030, 0.012)),
    ("crab", rate(0.035, 0.015)),
    ("lobster", rate(0.050, 0.020)),
    // Dairy
    ("cheese", rate(0.012, 0.005)),
    ("butter", rate(0.008, 0.003)),
    ("cream", rate(0.006, 0.002)),
    ("milk", rate(0.002, 0.001)),
    ("yogurt", rate(0.004, 0.002)),
    // Oils & fats
    ("olive oil", rate(0.015, 0.006)),
    ("oil", rate(0.010, 0.004)),
    ("vegetable oil", rate(0.008, 0.003)),
    ("coconut oil", rate(0.018, 0.007)),
    // Vegetables
    ("onion", rate(0.002, 0.001)),
    ("garlic", rate(0.008, 0.003)),
    ("tomato", rate(0.003, 0.001)),
    ("lettuce", rate(0.004, 0.002)),
    ("spinach", rate(0.005, 0.002)),
    ("potato", rate(0.002, 0.001)),
    ("carrot", rate(0.002, 0.001)),
    ("bell pepper", rate(0.004, 0.002)),
    ("mushroom", rate(0.008, 0.003)),
    // Herbs & spices (dried, expensive per gram)
    ("herb", rate(0.15, 0.05)),
    ("spice", rate(0.20, 0.08)),
    ("basil", rate(0.12, 0.04)),
    ("parsley", rate(0.010, 0.004)),
    ("oregano", rate(0.15, 0.05)),
    ("thyme", rate(0.18, 0.06)),
    ("rosemary", rate(0.15, 0.05)),
    ("pepper", rate(0.25, 0.10)), // black pepper, ground
    ("paprika", rate(0.12, 0.04)),
    // Other common ingredients
    ("egg", rate(0.003, 0.001)),
    ("eggs", rate(0.003, 0.001)),
    ("vinegar", rate(0.002, 0.001)),
    ("lemon", rate(0.004, 0.002)),
    ("lime", rate(0.004, 0.002)),
    ("wine", rate(0.01, 0.004)), // cooking wine
    ("stock", rate(0.003, 0.001)),
    ("broth", rate(0.003, 0.001)),
];

/// Second-pass shortlist tried when the full table produced no match
static COMMON_KEYWORDS: &[&str] = &[
    "flour", "sugar", "salt", "chicken", "beef", "pork", "fish", "salmon", "cheese", "butter",
    "oil", "herb", "spice", "tomato", "onion", "garlic",
];

/// A transient cost estimate for one ingredient name
///
/// Produced for form pre-fill only; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostEstimate {
    /// Estimated cost per unit (the table base after adjustments)
    pub per_unit_cost: f64,
    /// Low end of the plausible range
    pub min_cost: f64,
    /// High end of the plausible range
    pub max_cost: f64,
    /// Unit the estimate is expressed in (always grams)
    pub unit: String,
    /// 0.80 for a table match, 0.60 for the fallback
    pub confidence: f32,
    /// Human-readable provenance label
    pub source: String,
}

/// Estimate the market cost of an ingredient by name
///
/// Resolves after a simulated lookup delay. The returned values are fully
/// deterministic for a given name; only the delay varies.
///
/// # Examples
///
/// ```rust,no_run
/// use platecost::market_estimate::estimate_ingredient_cost;
///
/// # async fn demo() {
/// let estimate = estimate_ingredient_cost("organic salmon").await;
/// assert!(estimate.min_cost > 0.0);
/// assert!(estimate.max_cost > estimate.min_cost);
/// # }
/// ```
pub async fn estimate_ingredient_cost(name: &str) -> CostEstimate {
    let jitter = rand::thread_rng().gen_range(0..=LATENCY_JITTER_MS);
    sleep(Duration::from_millis(SIMULATED_LATENCY_MS + jitter)).await;

    let estimate = build_estimate(name);
    info!(
        "Market estimate for '{}': {:.4}/g ({:.4}-{:.4}), confidence {:.2}",
        name, estimate.per_unit_cost, estimate.min_cost, estimate.max_cost, estimate.confidence
    );
    estimate
}

/// Walk the rate table and apply adjustment/clamping rules
fn build_estimate(raw_name: &str) -> CostEstimate {
    let name = raw_name.trim().to_lowercase();

    let mut base = DEFAULT_BASE;
    let mut variance = DEFAULT_VARIANCE;

    // First pass: first table entry whose key equals or is contained in the
    // name wins. Compound names ("chicken oil") therefore take whichever of
    // their keywords appears earlier in the table.
    let matched = match MARKET_RATES
        .iter()
        .find(|(key, _)| name == *key || name.contains(key))
    {
        Some((key, rate)) => {
            debug!("Rate table hit '{}' for name '{}'", key, name);
            base = rate.base;
            variance = rate.variance;
            true
        }
        None => {
            // Second pass: common-keyword shortlist, still first-match-wins
            for keyword in COMMON_KEYWORDS {
                if name.contains(keyword) {
                    if let Some((_, rate)) = MARKET_RATES.iter().find(|(key, _)| key == keyword) {
                        debug!("Shortlist hit '{}' for name '{}'", keyword, name);
                        base = rate.base;
                        variance = rate.variance;
                        break;
                    }
                }
            }
            false
        }
    };

    // Premium descriptors push the estimate up
    if name.contains("organic") || name.contains("premium") || name.contains("artisan") {
        base *= 1.5;
        variance *= 1.2;
    }

    // Keep the center away from $0.00 and the spread visibly wide
    base = base.max(0.001);
    variance = variance.max(base * 0.2);

    let mut min_cost = (base - variance).max(0.0001);
    let mut max_cost = base + variance;

    if max_cost - min_cost < 0.001 {
        let center = (min_cost + max_cost) / 2.0;
        min_cost = (center - 0.0005).max(0.0001);
        max_cost = center + 0.0005;
    }

    CostEstimate {
        per_unit_cost: base,
        min_cost,
        max_cost,
        unit: "g".to_string(),
        confidence: if matched { 0.80 } else { 0.60 },
        source: "Market Estimate".to_string(),
    }
}
