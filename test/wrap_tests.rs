//! Once and memoize wrapper tests, including concurrent callers

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use collkit::{memoize, once, CollkitConfig, MemoPolicy, Memoize};
use serde_json::{json, Value};

// ============================================================================
// once
// ============================================================================

#[test]
fn test_once_three_calls_one_invocation() {
    let calls = AtomicUsize::new(0);
    let wrapped = once(|greeting: &str| {
        calls.fetch_add(1, Ordering::SeqCst);
        format!("{greeting}, world")
    });

    let a = wrapped.call("hello").unwrap();
    let b = wrapped.call("goodbye").unwrap();
    let c = wrapped.call("hey").unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(a, "hello, world");
    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn test_once_concurrent_callers() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let wrapped = Arc::new(once(move |id: usize| {
        counter.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(20));
        id
    }));

    let barrier = Arc::new(Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|id| {
            let wrapped = Arc::clone(&wrapped);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                wrapped.call(id).unwrap()
            })
        })
        .collect();

    let results: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(results.iter().all(|r| *r == results[0]));
}

// ============================================================================
// memoize
// ============================================================================

#[test]
fn test_memoize_per_argument() {
    let calls = AtomicUsize::new(0);
    let fib_like = memoize(|n: u32| {
        calls.fetch_add(1, Ordering::SeqCst);
        (0..=n).sum::<u32>()
    });

    for n in [3, 4, 3, 4, 5, 3] {
        fib_like.call(n);
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(fib_like.call(4), 10);
    assert_eq!(fib_like.len(), 3);
}

#[test]
fn test_memoize_first_non_null_caches_empty_string() {
    let calls = AtomicUsize::new(0);
    let upper = Memoize::with_policy(
        |s: String| {
            calls.fetch_add(1, Ordering::SeqCst);
            s.to_uppercase()
        },
        MemoPolicy::FirstNonNull,
    );

    // An empty string is falsy but not null, so it fills the slot.
    assert_eq!(upper.call(String::new()), "");
    assert_eq!(upper.call("abc".to_string()), "");
    assert_eq!(upper.call("xyz".to_string()), "");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_memoize_first_non_null_retries_json_null() {
    let calls = AtomicUsize::new(0);
    let lookup = Memoize::with_policy(
        |key: &str| {
            calls.fetch_add(1, Ordering::SeqCst);
            match key {
                "zero" => json!(0),
                "flag" => json!(false),
                _ => Value::Null,
            }
        },
        MemoPolicy::FirstNonNull,
    );

    assert_eq!(lookup.call("missing"), Value::Null);
    assert_eq!(lookup.call("zero"), json!(0));
    assert_eq!(lookup.call("flag"), json!(0));
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn test_memoize_policy_from_config() {
    let config = CollkitConfig::from_toml("[compat]\nmemo_policy = \"first_non_null\"\n").unwrap();
    let ident = Memoize::with_policy(|x: i64| x, config.compat.memo_policy);
    assert_eq!(ident.policy(), MemoPolicy::FirstNonNull);
    assert_eq!(ident.call(7), 7);
    assert_eq!(ident.call(8), 7);
}

#[test]
fn test_memoize_concurrent_same_argument() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let slow_double = Arc::new(memoize(move |x: u64| {
        counter.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(10));
        x * 2
    }));

    let handles: Vec<_> = (0..6)
        .map(|i| {
            let memo = Arc::clone(&slow_double);
            thread::spawn(move || memo.call(i % 2))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(calls.load(Ordering::SeqCst), 2);
    let stats = slow_double.stats();
    assert_eq!(stats.lookups, 6);
    assert_eq!(stats.hits, 4);
}
