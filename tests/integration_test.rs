use std::sync::Arc;
use std::time::Duration;

use jumu::core::{PluralLabel, Rejection};
use jumu::display::DisplayCell;
use jumu::session::{Alert, ClassificationSession, Phase, SubmitOutcome};

mod common;
use common::mock_classifier::MockClassifier;

#[tokio::test]
async fn test_end_to_end_mixed_results() {
    let backend = Arc::new(
        MockClassifier::new()
            .classify_as("كتب", PluralLabel::Broken, 97.5)
            .classify_as("مهندسات", PluralLabel::SoundFeminine, 88.25)
            .fail_word("لاعبون", "model unavailable"),
    );
    let session = ClassificationSession::new(backend.clone());

    let outcome = session
        .submit("كتب، مهندسات، لاعبون")
        .await
        .expect("session lock");
    assert_eq!(outcome, SubmitOutcome::Displayed);

    // Exactly one request carrying the words in order
    let requests = backend.requests.lock().unwrap().clone();
    assert_eq!(requests, vec![vec!["كتب", "مهندسات", "لاعبون"]]);

    let state = session.display().unwrap();
    assert_eq!(state.phase, Phase::Settled);
    assert_eq!(state.alert, None);

    let rows = state.rows();
    let words: Vec<&str> = rows.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["كتب", "مهندسات", "لاعبون"]);

    match &rows[0].cell {
        DisplayCell::Classified {
            label,
            confidence_text,
            bar_percent,
        } => {
            assert_eq!(label, &PluralLabel::Broken);
            assert_eq!(confidence_text, "97.50%");
            assert_eq!(*bar_percent, 98);
        }
        other => panic!("expected classified row, got {:?}", other),
    }
    assert!(matches!(
        &rows[1].cell,
        DisplayCell::Classified { label: PluralLabel::SoundFeminine, .. }
    ));
    assert_eq!(
        rows[2].cell,
        DisplayCell::Error {
            message: "model unavailable".to_string()
        }
    );
}

#[tokio::test]
async fn test_notice_is_surfaced() {
    let backend = Arc::new(MockClassifier::new().with_notice("تم تجاهل بعض الكلمات"));
    let session = ClassificationSession::new(backend);

    session.submit("طلاب").await.unwrap();
    let state = session.display().unwrap();
    assert_eq!(state.notice.as_deref(), Some("تم تجاهل بعض الكلمات"));
    assert_eq!(state.results.len(), 1);
}

#[tokio::test]
async fn test_rejections_never_reach_the_network() {
    let backend = Arc::new(MockClassifier::new());
    let session = ClassificationSession::new(backend.clone());

    let cases = [
        ("كتب مهندسات لاعبون", Rejection::AmbiguousDelimiter),
        ("من", Rejection::NoValidWords),
        ("من، إلى، على", Rejection::NoValidWords),
        ("books, pens", Rejection::NoValidWords),
        ("", Rejection::NoValidWords),
    ];
    for (input, expected) in cases {
        let outcome = session.submit(input).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Rejected(expected), "input: {input:?}");
        let state = session.display().unwrap();
        assert_eq!(state.phase, Phase::Idle);
        assert_eq!(state.alert, Some(Alert::Rejected(expected)));
    }

    assert_eq!(backend.request_count(), 0);
}

#[tokio::test]
async fn test_repeated_submissions_each_send() {
    let backend = Arc::new(MockClassifier::new());
    let session = ClassificationSession::new(backend.clone());

    for _ in 0..3 {
        assert_eq!(
            session.submit("كتب").await.unwrap(),
            SubmitOutcome::Displayed
        );
    }
    assert_eq!(backend.request_count(), 3);
}

#[tokio::test]
async fn test_connectivity_error_replaces_previous_results() {
    let backend = Arc::new(MockClassifier::new().with_notice("notice"));
    let session = ClassificationSession::new(backend.clone());
    session.submit("كتب").await.unwrap();
    assert_eq!(session.display().unwrap().results.len(), 1);

    backend.set_failing(true);
    let outcome = session.submit("كتب، طلاب").await.unwrap();
    assert_eq!(outcome, SubmitOutcome::ConnectivityError);

    let state = session.display().unwrap();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.results.is_empty());
    assert_eq!(state.notice, None);
    assert_eq!(state.alert, Some(Alert::Connectivity));
}

#[tokio::test]
async fn test_loading_while_in_flight() {
    let backend = Arc::new(MockClassifier::new().with_delay("كتب", Duration::from_millis(100)));
    let session = Arc::new(ClassificationSession::new(backend));

    let task = {
        let session = session.clone();
        tokio::spawn(async move { session.submit("كتب").await })
    };

    tokio::time::sleep(Duration::from_millis(30)).await;
    assert!(session.is_loading().unwrap());

    let outcome = task.await.expect("task panicked").unwrap();
    assert_eq!(outcome, SubmitOutcome::Displayed);
    assert!(!session.is_loading().unwrap());
}

#[tokio::test]
async fn test_late_response_does_not_overwrite_newer_results() {
    let backend = Arc::new(
        MockClassifier::new()
            .classify_as("كتب", PluralLabel::Broken, 91.0)
            .classify_as("مهندسات", PluralLabel::SoundFeminine, 84.0)
            .with_delay("كتب", Duration::from_millis(150))
            .with_delay("مهندسات", Duration::from_millis(10)),
    );
    let session = ClassificationSession::new(backend.clone());

    // First submission is slow, second is fast and settles first
    let (first, second) = futures::future::join(session.submit("كتب"), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        session.submit("مهندسات").await
    })
    .await;

    assert_eq!(first.unwrap(), SubmitOutcome::Superseded);
    assert_eq!(second.unwrap(), SubmitOutcome::Displayed);
    assert_eq!(backend.request_count(), 2);

    let state = session.display().unwrap();
    assert_eq!(state.phase, Phase::Settled);
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].word(), "مهندسات");
}

#[tokio::test]
async fn test_rejection_supersedes_request_in_flight() {
    let backend = Arc::new(
        MockClassifier::new()
            .classify_as("كتب", PluralLabel::Broken, 91.0)
            .with_delay("كتب", Duration::from_millis(100)),
    );
    let session = ClassificationSession::new(backend.clone());

    // The ambiguous input is refused while the first request is still pending
    let (first, second) = futures::future::join(session.submit("كتب"), async {
        tokio::time::sleep(Duration::from_millis(20)).await;
        session.submit("كتب مهندسات").await
    })
    .await;

    assert_eq!(first.unwrap(), SubmitOutcome::Superseded);
    assert_eq!(
        second.unwrap(),
        SubmitOutcome::Rejected(Rejection::AmbiguousDelimiter)
    );
    assert_eq!(backend.request_count(), 1);

    let state = session.display().unwrap();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.results.is_empty());
    assert_eq!(
        state.alert,
        Some(Alert::Rejected(Rejection::AmbiguousDelimiter))
    );
}
