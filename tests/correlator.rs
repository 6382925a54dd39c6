// tests/correlator.rs

mod common;
use crate::common::builders::{
    closed_write, created, deleted, modified, move_self, moved_from, moved_to, opened,
    RecordBuilder,
};
use crate::common::{drain, init_tracing, ScriptedSource};

use std::time::Duration;

use fstalk::engine::{Correlator, EventKind, DEFAULT_MOVE_WINDOW};
use fstalk::errors::FstalkError;
use fstalk::source::mask::{IN_CREATE, IN_Q_OVERFLOW};

#[test]
fn move_pair_becomes_one_event() {
    init_tracing();
    let mut source = ScriptedSource::new([moved_from(7, "a"), moved_to(7, "b")]);
    let mut correlator = Correlator::new();

    let event = correlator.next_event(&mut source).unwrap();
    assert_eq!(event.kind, EventKind::Move);
    assert_eq!(event.target, "a");
    assert_eq!(event.destination.as_deref(), Some("b"));

    assert_eq!(source.remaining(), 0);
    assert!(correlator.pending().is_empty());
    assert!(matches!(
        correlator.next_event(&mut source),
        Err(FstalkError::EndOfStream)
    ));
}

#[test]
fn interleaved_record_is_delivered_after_the_move() {
    init_tracing();
    let mut source = ScriptedSource::new([moved_from(7, "a"), created("x"), moved_to(7, "b")]);
    let mut correlator = Correlator::new();

    let first = correlator.next_event(&mut source).unwrap();
    assert_eq!(first.kind, EventKind::Move);
    assert_eq!(first.target, "a");
    assert_eq!(first.destination.as_deref(), Some("b"));
    assert_eq!(correlator.pending().len(), 1);

    let second = correlator.next_event(&mut source).unwrap();
    assert_eq!(second.kind, EventKind::Create);
    assert_eq!(second.target, "x");
    assert_eq!(second.destination, None);
    assert!(correlator.pending().is_empty());
}

#[test]
fn moved_to_arriving_first_names_the_target() {
    let mut source = ScriptedSource::new([moved_to(3, "new"), moved_from(3, "old")]);
    let mut correlator = Correlator::new();

    let event = correlator.next_event(&mut source).unwrap();
    assert_eq!(event.target, "new");
    assert_eq!(event.destination.as_deref(), Some("old"));
}

#[test]
fn unmatched_move_times_out_and_keeps_skipped_records() {
    init_tracing();
    let skipped: Vec<_> = (0..DEFAULT_MOVE_WINDOW)
        .map(|i| modified(&format!("f{i}")))
        .collect();
    let mut script = vec![moved_from(9, "lost")];
    script.extend(skipped.iter().cloned());

    let mut source = ScriptedSource::new(script);
    let mut correlator = Correlator::new();

    match correlator.next_event(&mut source) {
        Err(FstalkError::MoveTimeout {
            cookie,
            target,
            window,
        }) => {
            assert_eq!(cookie, 9);
            assert_eq!(target, "lost");
            assert_eq!(window, DEFAULT_MOVE_WINDOW);
        }
        other => panic!("Expected MoveTimeout, got: {other:?}"),
    }
    assert_eq!(source.reads(), DEFAULT_MOVE_WINDOW + 1);
    assert_eq!(correlator.pending().len(), DEFAULT_MOVE_WINDOW);

    let names: Vec<String> = drain(&mut correlator, &mut source)
        .into_iter()
        .map(|res| res.unwrap())
        .inspect(|event| assert_eq!(event.kind, EventKind::Modify))
        .map(|event| event.target)
        .collect();
    let expected: Vec<String> = skipped.into_iter().map(|r| r.name).collect();
    assert_eq!(names, expected);
}

#[test]
fn lookahead_stops_at_the_window() {
    let mut source = ScriptedSource::new([
        moved_from(5, "a"),
        created("x"),
        created("y"),
        created("z"),
        moved_to(5, "b"),
    ]);
    let mut correlator = Correlator::with_window(2);

    let err = correlator.next_event(&mut source).unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(source.reads(), 3);

    // "b" is found only after the queue drains; its own lookahead then runs
    // off the end of the script.
    let kinds: Vec<_> = drain(&mut correlator, &mut source)
        .into_iter()
        .map(|res| res.unwrap())
        .map(|event| (event.kind, event.target))
        .collect();
    assert_eq!(
        kinds,
        vec![
            (EventKind::Create, "x".to_string()),
            (EventKind::Create, "y".to_string()),
            (EventKind::Create, "z".to_string()),
        ]
    );
}

#[test]
fn zero_window_is_clamped_to_one() {
    assert_eq!(Correlator::with_window(0).window(), 1);
}

#[test]
fn non_move_records_never_read_ahead() {
    let mut source = ScriptedSource::new([
        opened("f"),
        modified("f"),
        closed_write("f"),
        deleted("f"),
        created("g"),
    ]);
    let mut correlator = Correlator::new();

    let expected = [
        EventKind::Open,
        EventKind::Modify,
        EventKind::Close,
        EventKind::Delete,
        EventKind::Create,
    ];
    for (i, kind) in expected.into_iter().enumerate() {
        let event = correlator.next_event(&mut source).unwrap();
        assert_eq!(event.kind, kind);
        assert_eq!(event.destination, None);
        assert_eq!(source.reads(), i + 1);
    }
}

#[test]
fn move_self_without_cookie_is_finalized_immediately() {
    let mut source = ScriptedSource::new([move_self(), created("after")]);
    let mut correlator = Correlator::new();

    let event = correlator.next_event(&mut source).unwrap();
    assert_eq!(event.kind, EventKind::Move);
    assert_eq!(event.target, "");
    assert_eq!(event.destination, None);
    assert_eq!(source.reads(), 1);
}

#[test]
fn queued_half_of_a_later_move_is_paired_from_the_queue() {
    // The lookahead for cookie 1 queues both halves of move 2; when move 2's
    // first half is drained, its partner is already waiting in the queue.
    let mut source = ScriptedSource::new([
        moved_from(1, "a"),
        moved_from(2, "c"),
        created("x"),
        moved_to(2, "d"),
        moved_to(1, "b"),
        deleted("y"),
    ]);
    let mut correlator = Correlator::new();

    let events: Vec<_> = drain(&mut correlator, &mut source)
        .into_iter()
        .map(|res| res.unwrap())
        .map(|e| (e.kind, e.target, e.destination))
        .collect();

    assert_eq!(
        events,
        vec![
            (EventKind::Move, "a".to_string(), Some("b".to_string())),
            (EventKind::Move, "c".to_string(), Some("d".to_string())),
            (EventKind::Create, "x".to_string(), None),
            (EventKind::Delete, "y".to_string(), None),
        ]
    );
}

#[test]
fn empty_names_are_not_errors() {
    let mut source = ScriptedSource::new([
        RecordBuilder::new(IN_CREATE).build(),
        moved_from(4, ""),
        moved_to(4, ""),
    ]);
    let mut correlator = Correlator::new();

    let created = correlator.next_event(&mut source).unwrap();
    assert_eq!(created.target, "");

    let moved = correlator.next_event(&mut source).unwrap();
    assert_eq!(moved.target, "");
    assert_eq!(moved.destination.as_deref(), Some(""));
}

#[test]
fn directory_flag_does_not_affect_kind() {
    let mut source = ScriptedSource::new([RecordBuilder::new(IN_CREATE).name("d").isdir().build()]);
    let mut correlator = Correlator::new();

    assert_eq!(correlator.next_event(&mut source).unwrap().kind, EventKind::Create);
}

#[test]
fn queue_overflow_is_reported_as_modify() {
    let mut source = ScriptedSource::new([RecordBuilder::new(IN_Q_OVERFLOW).build()]);
    let mut correlator = Correlator::new();

    assert_eq!(correlator.next_event(&mut source).unwrap().kind, EventKind::Modify);
}

#[test]
fn read_failure_during_lookahead_is_fatal_but_keeps_queue() {
    let mut source = ScriptedSource::new([moved_from(8, "a"), created("x")])
        .then_fail(std::io::ErrorKind::BrokenPipe);
    let mut correlator = Correlator::new();

    let err = correlator.next_event(&mut source).unwrap_err();
    assert!(!err.is_recoverable());
    assert!(matches!(err, FstalkError::Read(_)));

    let queued = correlator.next_event(&mut source).unwrap();
    assert_eq!(queued.kind, EventKind::Create);
    assert_eq!(queued.target, "x");
}

#[test]
fn move_timestamp_is_taken_from_the_first_half() {
    let mut source = ScriptedSource::new([moved_from(6, "a"), created("x"), moved_to(6, "b")])
        .delay_before(2, Duration::from_millis(25));
    let mut correlator = Correlator::new();

    let moved = correlator.next_event(&mut source).unwrap();
    assert_eq!(moved.kind, EventKind::Move);

    let log = source.read_log();
    assert_eq!(log.len(), 3);
    assert!(moved.timestamp >= log[0]);
    assert!(
        moved.timestamp < log[2],
        "move stamped at {} but partner read at {}",
        moved.timestamp,
        log[2]
    );
}
