//! # Invoice Extraction Example
//!
//! This example runs the line-item extractor over a noisy OCR transcript of a
//! supplier invoice, applies the default review heuristics, and promotes the
//! surviving candidates into reusable ingredient templates.

use platecost::invoice_parser::parse_invoice_text;
use platecost::invoice_review::{promote_approved, ReviewedItem};

fn main() {
    env_logger::init();

    let ocr_text = r#"
FRESH FOODS WHOLESALE
Invoice #2024-0187
Date: 03/15/2024

2 Organic Tomatoes $6.98
Chicken Breast 4lb $18.40
1 Olive Oil - Extra Virgin $12.99

SUBTOTAL $38.37
TAX $3.07
TOTAL DUE $41.44
"#;

    println!("📄 Parsing invoice text...\n");
    let items = parse_invoice_text(ocr_text);

    println!("Found {} candidate line items:", items.len());
    for item in &items {
        println!("  • {} - ${:.2}   (from: '{}')", item.name, item.price, item.original_line);
    }

    // In the real flow a user reviews each row; here we accept the defaults
    let reviewed: Vec<ReviewedItem> = items.iter().map(ReviewedItem::from_line_item).collect();

    println!("\nReview defaults:");
    for row in &reviewed {
        println!("  • {} - ${:.2} per {}", row.name, row.price, row.unit);
    }

    let templates = promote_approved(&reviewed);
    println!("\n💾 Saved {} ingredient templates:", templates.len());
    for template in &templates {
        println!(
            "  • {} ({})",
            template.name,
            template.description.as_deref().unwrap_or("no description")
        );
    }
}
