//! # Plate Cost
//!
//! Costing engine for restaurant menus: converts ingredient purchase units,
//! prorates package prices, sums plate costs, derives suggested prices and
//! food-cost percentages, prices reusable sub-recipe templates, estimates
//! market costs for ingredient names, and extracts candidate line items from
//! OCR-scanned supplier invoices.
//!
//! The costing core ([`units`], [`costing`], [`menu_model`]) is pure and
//! synchronous, with no I/O and no shared state, safe to call on every keystroke.
//! The market estimator simulates an external pricing lookup and is async;
//! OCR recognition itself, persistence and all UI concerns live outside this
//! crate.

pub mod costing;
pub mod invoice_parser;
pub mod invoice_review;
pub mod market_estimate;
pub mod menu_model;
pub mod units;
