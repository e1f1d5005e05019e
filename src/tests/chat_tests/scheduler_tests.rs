// Reply scheduler tests

use crate::chat::{ReplyLatency, ReplyScheduler};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

#[test]
fn test_default_latency_range() {
    let latency = ReplyLatency::default();
    assert_eq!(latency.min, Duration::from_millis(1200));
    assert_eq!(latency.max, Duration::from_millis(2000));
}

#[test]
fn test_sample_within_range() {
    let latency = ReplyLatency::default();
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..500 {
        let delay = latency.sample(&mut rng);
        assert!(delay >= latency.min, "{:?} below minimum", delay);
        assert!(delay < latency.max, "{:?} not below maximum", delay);
    }
}

#[test]
fn test_degenerate_range_yields_min() {
    let latency = ReplyLatency::from_millis(500, 500);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(latency.sample(&mut rng), Duration::from_millis(500));
}

#[test]
fn test_sample_saturates_oversized_durations() {
    let mut rng = StdRng::seed_from_u64(1);

    // Both bounds exceed u64 milliseconds and collapse to the same value
    let huge = ReplyLatency {
        min: Duration::from_secs(u64::MAX),
        max: Duration::MAX,
    };
    assert_eq!(huge.sample(&mut rng), huge.min);

    // Only the upper bound overflows; the draw stays inside u64 millis
    let wide = ReplyLatency {
        min: Duration::from_millis(5),
        max: Duration::MAX,
    };
    let delay = wide.sample(&mut rng);
    assert!(delay >= wide.min);
    assert!(delay < Duration::from_millis(u64::MAX));
}

#[test]
fn test_single_reply_deadline() {
    let mut scheduler = ReplyScheduler::with_seed(ReplyLatency::default(), 7);
    let now = Instant::now();

    let due = scheduler.schedule("hello".to_string(), now);

    assert!(due >= now + Duration::from_millis(1200));
    assert!(due < now + Duration::from_millis(2000));
    assert_eq!(scheduler.next_deadline(), Some(due));
    assert_eq!(scheduler.pending_count(), 1);
}

#[test]
fn test_overlapping_replies_are_serialized() {
    let mut scheduler = ReplyScheduler::with_seed(ReplyLatency::default(), 7);
    let now = Instant::now();

    let first = scheduler.schedule("one".to_string(), now);
    let second = scheduler.schedule("two".to_string(), now + Duration::from_millis(10));
    let third = scheduler.schedule("three".to_string(), now + Duration::from_millis(20));

    assert!(second >= first + Duration::from_millis(1200));
    assert!(third >= second + Duration::from_millis(1200));
}

#[test]
fn test_late_schedule_starts_from_now() {
    let mut scheduler = ReplyScheduler::with_seed(ReplyLatency::default(), 3);
    let now = Instant::now();

    let first = scheduler.schedule("one".to_string(), now);
    let later = now + Duration::from_secs(10);
    let second = scheduler.schedule("two".to_string(), later);

    assert!(first < later);
    assert!(second >= later + Duration::from_millis(1200));
}

#[test]
fn test_take_due_in_order() {
    let mut scheduler = ReplyScheduler::with_seed(ReplyLatency::default(), 11);
    let now = Instant::now();

    let first = scheduler.schedule("one".to_string(), now);
    scheduler.schedule("two".to_string(), now);

    assert!(scheduler.take_due(now).is_empty(), "Nothing is due yet");

    let due = scheduler.take_due(first);
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].prompt, "one");
    assert!(!scheduler.is_idle());

    let due = scheduler.take_due(now + Duration::from_secs(60));
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].prompt, "two");
    assert!(scheduler.is_idle());
    assert_eq!(scheduler.next_deadline(), None);
}

#[test]
fn test_cancel_all() {
    let mut scheduler = ReplyScheduler::with_seed(ReplyLatency::default(), 5);
    let now = Instant::now();
    scheduler.schedule("one".to_string(), now);
    scheduler.schedule("two".to_string(), now);

    assert_eq!(scheduler.cancel_all(), 2);
    assert!(scheduler.is_idle());
    assert!(scheduler.take_due(now + Duration::from_secs(60)).is_empty());
    assert_eq!(scheduler.cancel_all(), 0);
}

#[test]
fn test_same_seed_same_delays() {
    let now = Instant::now();
    let mut a = ReplyScheduler::with_seed(ReplyLatency::default(), 99);
    let mut b = ReplyScheduler::with_seed(ReplyLatency::default(), 99);

    assert_eq!(
        a.schedule("x".to_string(), now),
        b.schedule("x".to_string(), now)
    );
}
