// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use futures::StreamExt;
use ripple_dictionary::ObservableDictionary;
use ripple_test_utils::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};
use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

#[tokio::test]
async fn test_initial_mapping_is_first_emission() {
    // Arrange
    let initial = HashMap::from([("a", 1), ("b", 2)]);
    let dictionary = ObservableDictionary::with_elements(initial.clone());

    // Act
    let mut items = dictionary.items();
    let mut count = dictionary.count();

    // Assert
    assert_eq!(*unwrap_stream(&mut items, 100).await, initial);
    assert_eq!(unwrap_stream(&mut count, 100).await, 2);
    assert_no_element_emitted(&mut items, 50).await;
}

#[tokio::test]
async fn test_empty_dictionary_emits_empty_snapshot() {
    let dictionary: ObservableDictionary<String, u32> = ObservableDictionary::default();

    let mut items = dictionary.items();
    let mut count = dictionary.count();

    assert!(unwrap_stream(&mut items, 100).await.is_empty());
    assert_eq!(unwrap_stream(&mut count, 100).await, 0);
}

#[tokio::test]
async fn test_sequential_mutations_publish_each_snapshot() {
    // Arrange
    let dictionary = ObservableDictionary::new();
    let mut items = dictionary.items();
    let mut count = dictionary.count();

    // Act
    dictionary.set_value("a", Some(1));
    dictionary.set_value("b", Some(2));
    dictionary.remove_value_for_key("a");

    // Assert
    assert_eq!(*unwrap_stream(&mut items, 100).await, HashMap::new());
    assert_eq!(*unwrap_stream(&mut items, 100).await, HashMap::from([("a", 1)]));
    assert_eq!(
        *unwrap_stream(&mut items, 100).await,
        HashMap::from([("a", 1), ("b", 2)])
    );
    assert_eq!(*unwrap_stream(&mut items, 100).await, HashMap::from([("b", 2)]));

    let counts: Vec<usize> = count.by_ref().take(4).collect().await;
    assert_eq!(counts, vec![0, 1, 2, 1]);
}

#[tokio::test]
async fn test_late_subscriber_sees_only_latest_snapshot() {
    // Arrange
    let dictionary = ObservableDictionary::new();
    dictionary.set_value("a", Some(1));
    dictionary.set_value("b", Some(2));
    dictionary.remove_value_for_key("a");

    // Act
    let mut items = dictionary.items();
    let mut count = dictionary.count();

    // Assert
    assert_eq!(*unwrap_stream(&mut items, 100).await, HashMap::from([("b", 2)]));
    assert_eq!(unwrap_stream(&mut count, 100).await, 1);
    assert_no_element_emitted(&mut items, 50).await;
}

#[tokio::test]
async fn test_late_subscriber_then_receives_later_mutations_in_order() {
    // Arrange
    let dictionary = ObservableDictionary::new();
    dictionary.set_value(1, Some("one"));
    let mut items = dictionary.items();

    // Act
    dictionary.set_value(2, Some("two"));

    // Assert
    assert_eq!(*unwrap_stream(&mut items, 100).await, HashMap::from([(1, "one")]));
    assert_eq!(
        *unwrap_stream(&mut items, 100).await,
        HashMap::from([(1, "one"), (2, "two")])
    );
}

#[tokio::test]
async fn test_set_value_overwrites_existing_key() {
    let dictionary = ObservableDictionary::new();

    dictionary.set_value("k", Some(1));
    dictionary.set_value("k", Some(5));

    assert_eq!(dictionary.value_for_key("k"), Some(5));
    assert_eq!(dictionary.len(), 1);
}

#[tokio::test]
async fn test_removing_absent_key_keeps_content() {
    // Arrange
    let dictionary = ObservableDictionary::with_elements(HashMap::from([("a", 1)]));
    let mut items = dictionary.items();
    let _ = unwrap_stream(&mut items, 100).await;

    // Act
    dictionary.set_value("missing", None);

    // Assert - a snapshot is published, with unchanged content
    assert_eq!(*unwrap_stream(&mut items, 100).await, HashMap::from([("a", 1)]));
    assert_eq!(dictionary.snapshot(), HashMap::from([("a", 1)]));
}

#[tokio::test]
async fn test_set_value_none_removes_key() {
    let dictionary = ObservableDictionary::with_elements(HashMap::from([("a", 1), ("b", 2)]));

    dictionary.set_value("a", None);

    assert_eq!(dictionary.value_for_key("a"), None);
    assert!(!dictionary.contains_key("a"));
    assert!(dictionary.contains_key("b"));
}

#[test]
fn test_value_for_key_accepts_borrowed_keys() {
    let dictionary: ObservableDictionary<String, i32> =
        [("alpha".to_string(), 1)].into_iter().collect();

    assert_eq!(dictionary.value_for_key("alpha"), Some(1));
    assert_eq!(dictionary.value_for_key("beta"), None);

    dictionary.remove_value_for_key("alpha");
    assert!(dictionary.is_empty());
}

#[test]
fn test_first_returns_a_matching_pair() {
    let dictionary = ObservableDictionary::with_elements(HashMap::from([("a", 1), ("b", 2), ("c", 3)]));

    let found = dictionary.first(|_, value| *value > 1);

    let (key, value) = found.expect("a matching entry");
    assert!(value == 2 || value == 3);
    assert_eq!(dictionary.value_for_key(key), Some(value));
}

#[test]
fn test_first_without_match_returns_none() {
    let dictionary = ObservableDictionary::with_elements(HashMap::from([("a", 1)]));
    assert_eq!(dictionary.first(|key, _| *key == "z"), None);
}

#[tokio::test]
async fn test_unsubscribing_does_not_affect_other_subscribers() {
    // Arrange
    let dictionary = ObservableDictionary::new();
    let dropped = dictionary.items();
    let mut kept = dictionary.items();
    assert_eq!(dictionary.subscriber_count(), 2);

    // Act
    drop(dropped);
    dictionary.set_value("a", Some(1));

    // Assert
    assert_eq!(*unwrap_stream(&mut kept, 100).await, HashMap::new());
    assert_eq!(*unwrap_stream(&mut kept, 100).await, HashMap::from([("a", 1)]));
    assert_eq!(dictionary.subscriber_count(), 1);
    assert_eq!(dictionary.value_for_key("a"), Some(1));
}

#[tokio::test]
async fn test_clones_share_storage() {
    // Arrange
    let dictionary = ObservableDictionary::new();
    let handle = dictionary.clone();
    let mut items = dictionary.items();

    // Act
    handle.set_value("shared", Some(true));

    // Assert
    assert_eq!(dictionary.value_for_key("shared"), Some(true));
    assert_eq!(*unwrap_stream(&mut items, 100).await, HashMap::new());
    assert_eq!(
        *unwrap_stream(&mut items, 100).await,
        HashMap::from([("shared", true)])
    );
}

#[tokio::test]
async fn test_dropping_last_handle_completes_streams() {
    // Arrange
    let dictionary = ObservableDictionary::with_elements(HashMap::from([("a", 1)]));
    let mut items = dictionary.items();
    let mut count = dictionary.count();

    // Act
    drop(dictionary);

    // Assert - the replayed snapshot is still delivered, then completion
    assert_eq!(*unwrap_stream(&mut items, 100).await, HashMap::from([("a", 1)]));
    assert_stream_ended(&mut items, 100).await;
    assert_eq!(unwrap_stream(&mut count, 100).await, 1);
    assert_stream_ended(&mut count, 100).await;
}

#[tokio::test]
async fn test_subscriber_can_mutate_while_reacting_to_a_snapshot() {
    // Arrange
    let dictionary = ObservableDictionary::new();
    let mut items = dictionary.items();
    dictionary.set_value("trigger", Some(1));

    // Act - react to each snapshot by writing back into the same dictionary
    let _ = unwrap_stream(&mut items, 100).await;
    let snapshot = unwrap_stream(&mut items, 100).await;
    if snapshot.contains_key("trigger") {
        dictionary.set_value("reaction", Some(2));
    }

    // Assert
    assert_eq!(
        *unwrap_stream(&mut items, 100).await,
        HashMap::from([("trigger", 1), ("reaction", 2)])
    );
}

#[tokio::test]
async fn test_published_snapshot_is_unaffected_by_later_mutations() {
    // Arrange
    let dictionary = ObservableDictionary::new();
    dictionary.set_value("a", Some(1));
    let mut items = dictionary.items();
    let held = unwrap_stream(&mut items, 100).await;

    // Act
    dictionary.set_value("b", Some(2));
    dictionary.remove_value_for_key("a");

    // Assert
    assert_eq!(*held, HashMap::from([("a", 1)]));
    assert_eq!(*unwrap_stream(&mut items, 100).await, HashMap::from([("a", 1), ("b", 2)]));
    assert_eq!(dictionary.snapshot(), HashMap::from([("b", 2)]));
}

#[tokio::test]
async fn test_snapshots_are_copies() {
    // Arrange
    let dictionary = ObservableDictionary::new();
    dictionary.set_value("a", Some(1));
    let mut items = dictionary.items();

    // Act
    let mut received = unwrap_stream(&mut items, 100).await;
    Arc::make_mut(&mut received).insert("b", 2);
    let mut copy = dictionary.snapshot();
    copy.clear();

    // Assert
    assert_eq!(dictionary.snapshot(), HashMap::from([("a", 1)]));
    assert_eq!(*dictionary.current(), HashMap::from([("a", 1)]));
}

#[test]
fn test_first_predicate_can_read_the_same_dictionary() {
    // Arrange
    let dictionary = ObservableDictionary::with_elements(HashMap::from([("a", 1), ("b", 2)]));
    let handle = dictionary.clone();
    let (tx, rx) = mpsc::channel();

    // Act
    thread::spawn(move || {
        let found = handle.first(|key, _| handle.contains_key(*key) && handle.len() == 2);
        let _ = tx.send(found);
    });

    // Assert
    let found = rx
        .recv_timeout(Duration::from_secs(2))
        .expect("first() returned while its predicate read the dictionary");
    assert!(found.is_some());
}

#[test]
fn test_first_predicate_can_mutate_the_same_dictionary() {
    // Arrange
    let dictionary = ObservableDictionary::with_elements(HashMap::from([("a", 1)]));

    // Act
    let found = dictionary.first(|key, value| {
        dictionary.set_value("seen", Some(*value));
        *key == "a"
    });

    // Assert - the search ran over the snapshot taken before the mutation
    assert_eq!(found, Some(("a", 1)));
    assert_eq!(dictionary.value_for_key("seen"), Some(1));
}
