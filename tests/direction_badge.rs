use alphapulse_wasm::domain::prediction::{DOWN_COLOR, Direction, UP_COLOR};
use std::str::FromStr;

#[test]
fn up_badge_class() {
    assert_eq!(Direction::Up.badge_class(), "prediction-badge up");
}

#[test]
fn down_badge_class() {
    assert_eq!(Direction::Down.badge_class(), "prediction-badge down");
}

#[test]
fn chart_colors_are_distinct() {
    assert_eq!(Direction::Up.chart_color(), UP_COLOR);
    assert_eq!(Direction::Down.chart_color(), DOWN_COLOR);
    assert_ne!(Direction::Up.chart_color(), Direction::Down.chart_color());
}

#[test]
fn parses_wire_strings() {
    assert_eq!(Direction::from_str("UP").unwrap(), Direction::Up);
    assert_eq!(Direction::from_str("DOWN").unwrap(), Direction::Down);
    assert!(Direction::from_str("up").is_err());
}

#[test]
fn display_matches_wire_format() {
    assert_eq!(Direction::Up.to_string(), "UP");
    assert_eq!(Direction::Down.to_string(), "DOWN");
}
