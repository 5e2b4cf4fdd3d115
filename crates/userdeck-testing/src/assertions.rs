//! Custom assertions over the CLI's JSON output.

use anyhow::{Context, Result};
use serde_json::Value;

fn cards(json: &Value) -> Result<&Vec<Value>> {
    json["content"]["cards"]
        .as_array()
        .context("Expected 'content.cards' array in JSON")
}

/// Assert that the grid JSON contains exactly `expected` cards.
pub fn assert_card_count(json: &Value, expected: usize) -> Result<()> {
    let cards = cards(json)?;

    if cards.len() != expected {
        anyhow::bail!("Expected {} cards, got {}", expected, cards.len());
    }

    Ok(())
}

/// Assert the grid JSON lists exactly these full names, in order.
pub fn assert_card_names(json: &Value, expected: &[&str]) -> Result<()> {
    let names = cards(json)?
        .iter()
        .enumerate()
        .map(|(i, card)| {
            card["name"]
                .as_str()
                .with_context(|| format!("Card {} missing name", i))
        })
        .collect::<Result<Vec<_>>>()?;

    if names != expected {
        anyhow::bail!("Expected cards {:?}, got {:?}", expected, names);
    }

    Ok(())
}

/// Assert the detail JSON shows the given user.
pub fn assert_detail_name(json: &Value, expected: &str) -> Result<()> {
    let name = json["content"]["name"]
        .as_str()
        .context("Expected 'content.name' in detail JSON")?;

    if name != expected {
        anyhow::bail!("Expected detail for {}, got {}", expected, name);
    }

    Ok(())
}
