//! `userdeck list` against a saved response.

use anyhow::Result;
use predicates::prelude::*;
use userdeck_testing::{TestWorld, assertions, fixtures};

#[test]
fn test_list_prints_every_card_in_fetch_order() -> Result<()> {
    // Given
    let world = TestWorld::new().with_users(&fixtures::trio());

    // When
    let result = world.run(&["list", "--format", "json"])?;

    // Then
    assert!(result.success(), "stderr: {}", result.stderr());
    let json = result.json()?;
    assertions::assert_card_names(&json, &["Alice Smith", "Bob Jones", "Ann Lee"])?;
    assert_eq!(json["content"]["total"], 3);
    assert!(json["content"]["placeholder"].is_null());
    Ok(())
}

#[test]
fn test_search_keeps_card_numbers() -> Result<()> {
    // Given
    let world = TestWorld::new().with_users(&fixtures::trio());

    // When
    let result = world.run(&["list", "--search", "an", "--format", "json"])?;

    // Then
    assert!(result.success());
    let json = result.json()?;
    assertions::assert_card_names(&json, &["Ann Lee"])?;
    assert_eq!(json["content"]["cards"][0]["number"], 3);
    assert_eq!(json["content"]["query"], "an");
    Ok(())
}

#[test]
fn test_search_is_case_insensitive_and_checks_both_names() -> Result<()> {
    let world = TestWorld::new().with_users(&fixtures::trio());

    let li = world.run(&["list", "--search", "LI", "--format", "json"])?.json()?;
    assertions::assert_card_names(&li, &["Alice Smith"])?;

    let e = world.run(&["list", "--search", "e", "--format", "json"])?.json()?;
    assertions::assert_card_names(&e, &["Alice Smith", "Bob Jones", "Ann Lee"])?;
    Ok(())
}

#[test]
fn test_invalid_search_is_logged_and_ignored() -> Result<()> {
    // Given
    let world = TestWorld::new().with_users(&fixtures::trio());

    // When
    let result = world.run(&["list", "--search", "a-b", "--format", "json"])?;

    // Then
    assert!(result.success());
    assertions::assert_card_count(&result.json()?, 3)?;
    assert!(
        predicate::str::contains("Invalid characters detected in search field.")
            .eval(result.stderr())
    );
    Ok(())
}

#[test]
fn test_search_without_matches_shows_placeholder() -> Result<()> {
    // Given
    let world = TestWorld::new().with_users(&fixtures::trio());

    // When
    let json = world
        .run(&["list", "--search", "zzz", "--format", "json"])?
        .json()?;
    let text = world.run(&["list", "--search", "zzz"])?;

    // Then
    assertions::assert_card_count(&json, 0)?;
    assert_eq!(json["content"]["placeholder"], "No result");
    assert!(text.stdout().contains("No result"));
    Ok(())
}

#[test]
fn test_text_grid() -> Result<()> {
    // Given
    let world = TestWorld::new().with_users(&fixtures::trio());

    // When
    let result = world.run(&["list"])?;

    // Then
    assert!(result.success());
    let stdout = result.stdout();
    assert!(stdout.starts_with("Users: 3\n"));
    assert!(stdout.contains("#1 Alice Smith\nalice.smith@example.com\n"));
    assert!(stdout.contains("#3 Ann Lee"));
    assert!(stdout.contains("userdeck show 1"));
    Ok(())
}

#[test]
fn test_compact_grid_is_one_line_per_card() -> Result<()> {
    let world = TestWorld::new().with_users(&fixtures::trio());

    let result = world.run(&["list", "--compact"])?;

    let card_lines: Vec<&str> = result
        .stdout()
        .lines()
        .filter(|line| line.starts_with('#'))
        .collect();
    assert_eq!(card_lines.len(), 3);
    assert!(card_lines[1].starts_with("#2   Bob Jones"));
    Ok(())
}

#[test]
fn test_failed_fetch_prints_empty_grid() -> Result<()> {
    // Given: a response body that is not JSON
    let world = TestWorld::new().with_raw_response("<html>502 Bad Gateway</html>");

    // When
    let result = world.run(&["list", "--format", "json"])?;

    // Then: still a success, no cards and no placeholder
    assert!(result.success());
    let json = result.json()?;
    assertions::assert_card_count(&json, 0)?;
    assert!(json["content"]["placeholder"].is_null());
    assert!(result.stderr().contains("failed to fetch users"));
    Ok(())
}

#[test]
fn test_configured_batch_size_limits_cards() -> Result<()> {
    // Given
    let world = TestWorld::new().with_users(&fixtures::sample_users());
    std::fs::write(world.config_path(), "[api]\nresults = 5\n")?;

    // When
    let json = world.run(&["list", "--format", "json"])?.json()?;

    // Then
    assertions::assert_card_count(&json, 5)?;
    Ok(())
}

#[test]
fn test_browse_without_terminal_prints_grid() -> Result<()> {
    let world = TestWorld::new().with_users(&fixtures::trio());

    let result = world.run(&["browse", "--search", "an"])?;

    assert!(result.success());
    assert!(result.stdout().contains("#3 Ann Lee"));
    assert!(!result.stdout().contains("Bob Jones"));
    Ok(())
}
