//! Tests for single and custom draws

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engine::{draw_custom, draw_custom_with_rng, draw_single, draw_single_with_rng};
use super::{dps, healer};

#[test]
fn test_draw_single_returns_pool_member() {
    let pool = vec![dps("d1"), dps("d2"), healer("h1")];
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..50 {
        let result = draw_single_with_rng(&pool, &mut rng).unwrap();
        assert!(pool.iter().any(|item| item.id == result.id));
        assert!(result.image.is_some());
        assert!(result.slot.is_none());
        assert!(result.member.is_none());
    }
}

#[test]
fn test_draw_single_empty_pool() {
    assert!(draw_single(&[]).is_none());
}

#[test]
fn test_draw_single_carries_category() {
    let pool = vec![healer("h1")];
    let result = draw_single(&pool).unwrap();
    assert!(result.is_healer());
    assert_eq!(result.image.as_deref(), Some("/xinfa/h1.png"));
}

#[test]
fn test_draw_custom_empty_list() {
    let labels: Vec<String> = Vec::new();
    assert!(draw_custom(&labels).is_none());
}

#[test]
fn test_draw_custom_has_no_image_or_category() {
    let result = draw_custom(&["Only"]).unwrap();
    assert_eq!(result.name, "Only");
    assert!(result.image.is_none());
    assert!(result.category.is_none());
    assert!(result.id.starts_with("custom-"));
}

#[test]
fn test_draw_custom_same_label_gets_new_id() {
    let labels = ["A", "B"];
    let mut rng = StdRng::seed_from_u64(3);

    // Keep drawing until the same label comes up twice in a row.
    let mut previous = draw_custom_with_rng(&labels, &mut rng).unwrap();
    let mut checked = false;
    for _ in 0..100 {
        let next = draw_custom_with_rng(&labels, &mut rng).unwrap();
        if next.name == previous.name {
            assert_ne!(next.id, previous.id);
            assert_ne!(next, previous);
            checked = true;
            break;
        }
        previous = next;
    }
    assert!(checked);
}

#[test]
fn test_draw_single_is_uniform() {
    let pool = vec![dps("d1"), dps("d2"), dps("d3"), healer("h1")];
    let mut rng = StdRng::seed_from_u64(7);
    let mut counts: HashMap<String, usize> = HashMap::new();

    for _ in 0..10_000 {
        let result = draw_single_with_rng(&pool, &mut rng).unwrap();
        *counts.entry(result.id).or_default() += 1;
    }

    assert_eq!(counts.len(), 4);
    for (id, &count) in &counts {
        assert!((2300..=2700).contains(&count), "{id} drawn {count} times");
    }
}

#[test]
fn test_draw_custom_is_uniform() {
    let labels = ["North", "East", "South", "West"];
    let mut rng = StdRng::seed_from_u64(11);
    let mut counts: HashMap<String, usize> = HashMap::new();

    for _ in 0..10_000 {
        let result = draw_custom_with_rng(&labels, &mut rng).unwrap();
        *counts.entry(result.name).or_default() += 1;
    }

    assert_eq!(counts.len(), 4);
    for (label, &count) in &counts {
        assert!((2300..=2700).contains(&count), "{label} drawn {count} times");
    }
}
