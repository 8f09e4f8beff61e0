use super::*;

const LIMIT: usize = 5;
const WINDOW: Duration = Duration::from_secs(600);

#[test]
fn allows_up_to_limit() {
    let rl = RateLimiter::new(LIMIT, WINDOW);
    let now = Instant::now();

    for i in 0..LIMIT {
        assert!(rl.check_and_record_at("10.0.0.1", now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at("10.0.0.1", now),
        Err(RateLimitError::Exceeded { limit: LIMIT, window_secs: 600 })
    );
}

#[test]
fn keys_are_independent() {
    let rl = RateLimiter::new(1, WINDOW);
    let now = Instant::now();

    assert!(rl.check_and_record_at("a", now).is_ok());
    assert!(rl.check_and_record_at("b", now).is_ok());
    assert!(rl.check_and_record_at("a", now).is_err());
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = RateLimiter::new(LIMIT, WINDOW);
    let start = Instant::now();

    for _ in 0..LIMIT {
        rl.check_and_record_at("client", start).unwrap();
    }
    assert!(rl.check_and_record_at("client", start).is_err());

    let later = start + WINDOW + Duration::from_secs(1);
    assert!(rl.check_and_record_at("client", later).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = RateLimiter::new(1, WINDOW);
    let start = Instant::now();

    rl.check_and_record_at("client", start).unwrap();
    for _ in 0..10 {
        assert!(rl.check_and_record_at("client", start + Duration::from_secs(300)).is_err());
    }
    // Only the first request counts toward the window.
    assert!(rl.check_and_record_at("client", start + WINDOW + Duration::from_secs(1)).is_ok());
}

#[test]
fn zero_limit_rejects_everything() {
    let rl = RateLimiter::new(0, WINDOW);
    assert!(rl.check_and_record_at("client", Instant::now()).is_err());
}

#[test]
fn drained_keys_are_swept() {
    let rl = RateLimiter::new(LIMIT, WINDOW);
    let start = Instant::now();

    for i in 0..=SWEEP_THRESHOLD {
        rl.check_and_record_at(&format!("client-{i}"), start).unwrap();
    }
    assert_eq!(rl.tracked_keys(), SWEEP_THRESHOLD + 1);

    let later = start + WINDOW + Duration::from_secs(1);
    rl.check_and_record_at("fresh", later).unwrap();
    assert_eq!(rl.tracked_keys(), 1);
}
