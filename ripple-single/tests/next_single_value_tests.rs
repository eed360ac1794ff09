// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::{LatestValueSubject, StreamItem};
use ripple_single::NextSingleValueExt;
use ripple_test_utils::{assert_no_element_emitted, assert_stream_ended, unwrap_stream};

#[tokio::test]
async fn test_next_single_value_ignores_current_value() {
    // Arrange
    let subject = LatestValueSubject::new(1);

    // Act
    let mut next = subject.next_single_value();

    // Assert
    assert_no_element_emitted(&mut next, 50).await;
}

#[tokio::test]
async fn test_next_single_value_completes_after_next_push() -> anyhow::Result<()> {
    // Arrange
    let subject = LatestValueSubject::new(1);
    let mut next = subject.next_single_value();

    // Act
    subject.send(2)?;
    subject.send(3)?;

    // Assert
    assert_eq!(unwrap_stream(&mut next, 100).await, StreamItem::Value(2));
    assert_stream_ended(&mut next, 100).await;

    Ok(())
}

#[tokio::test]
async fn test_next_single_value_sees_push_from_another_task() -> anyhow::Result<()> {
    // Arrange
    let subject = LatestValueSubject::new(String::from("idle"));
    let next = subject.next_single_value();
    let producer = subject.clone();

    // Act
    let handle = tokio::spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        producer.send(String::from("running"))
    });

    // Assert
    assert_eq!(next.outcome().await, Some(Ok(String::from("running"))));
    handle.await??;

    Ok(())
}

#[tokio::test]
async fn test_next_single_value_completes_empty_when_subject_closes() {
    // Arrange
    let subject = LatestValueSubject::new(1);
    let next = subject.next_single_value();

    // Act
    subject.close();

    // Assert
    assert_eq!(next.outcome().await, None);
}

#[tokio::test]
async fn test_next_single_value_releases_its_subscription() -> anyhow::Result<()> {
    // Arrange
    let subject = LatestValueSubject::new(1);

    // Act
    let outcome = {
        let next = subject.next_single_value();
        subject.send(2)?;
        next.outcome().await
    };
    subject.send(3)?;

    // Assert
    assert_eq!(outcome, Some(Ok(2)));
    assert_eq!(subject.subscriber_count(), 0);

    Ok(())
}
