//! Property-based tests for rust_kv_logger using proptest

use proptest::prelude::*;
use rust_kv_logger::prelude::*;
use rust_kv_logger::sinks::{json, logfmt};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

fn value_strategy() -> impl Strategy<Value = rust_kv_logger::Value> {
    prop_oneof![
        "[a-z ]{0,12}".prop_map(rust_kv_logger::Value::from),
        any::<i64>().prop_map(rust_kv_logger::Value::from),
        any::<u32>().prop_map(rust_kv_logger::Value::from),
        any::<bool>().prop_map(rust_kv_logger::Value::from),
        Just(rust_kv_logger::Value::Null),
    ]
}

// ============================================================================
// Record Tests
// ============================================================================

proptest! {
    /// Flat key/value lists always pair up, padding a trailing key
    #[test]
    fn test_record_pairs_and_padding(keyvals in prop::collection::vec(value_strategy(), 0..20)) {
        let len = keyvals.len();
        let record = Record::from_keyvals(keyvals.clone());

        prop_assert_eq!(record.len(), len.div_ceil(2));
        for (i, (k, v)) in record.iter().enumerate() {
            prop_assert_eq!(k, &keyvals[2 * i]);
            match keyvals.get(2 * i + 1) {
                Some(expected) => prop_assert_eq!(v, expected),
                None => prop_assert!(v.is_missing()),
            }
        }
    }

    /// Flattening an even-length record gives back the original list
    #[test]
    fn test_record_flatten_even(pairs in prop::collection::vec((value_strategy(), value_strategy()), 0..10)) {
        let flat: Vec<_> = pairs.iter().flat_map(|(k, v)| [k.clone(), v.clone()]).collect();
        let record: Record = pairs.into_iter().collect();
        prop_assert_eq!(record.into_keyvals(), flat);
    }
}

// ============================================================================
// Encoder Tests
// ============================================================================

proptest! {
    /// logfmt output is a single line with one `=` separator per pair outside quotes
    #[test]
    fn test_logfmt_single_line(
        pairs in prop::collection::vec(("[a-z]{1,8}", "[ -~\n\t]{0,16}"), 1..8)
    ) {
        let record: Record = pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        let line = logfmt::encode(&record);

        prop_assert!(!line.contains('\n'));

        let mut in_quotes = false;
        let mut escaped = false;
        let mut separators = 0;
        for c in line.chars() {
            match c {
                _ if escaped => escaped = false,
                '\\' if in_quotes => escaped = true,
                '"' => in_quotes = !in_quotes,
                '=' if !in_quotes => separators += 1,
                _ => {}
            }
        }
        prop_assert_eq!(separators, pairs.len());
    }

    /// JSON output parses back to an object holding every distinct key
    #[test]
    fn test_json_keys(
        pairs in prop::collection::vec(("[a-z]{1,4}", any::<i64>()), 0..10)
    ) {
        let record: Record = pairs.iter().map(|(k, v)| (k.as_str(), *v)).collect();
        let object = json::to_json(record);
        let object = object.as_object().expect("json object");

        for (k, _) in &pairs {
            prop_assert!(object.contains_key(k));
            // Later duplicates win
            let last = pairs.iter().rev().find(|(k2, _)| k2 == k).map(|(_, v)| *v);
            prop_assert_eq!(object[k].as_i64(), last);
        }
    }
}

// ============================================================================
// Dispatch Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Records from a single producer reach the sink in emit order
    #[test]
    fn test_async_fifo(capacity in 1usize..8, count in 0i64..200) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            sink_fn(move |record: Record| {
                seen.lock().push(record.get("key").and_then(rust_kv_logger::Value::as_i64));
                Ok(())
            })
        };

        let mut logger = AsyncLogger::new(sink, capacity).unwrap();
        for i in 0..count {
            logger.emit(Record::new().with("key", i)).unwrap();
        }
        prop_assert!(logger.shutdown(Duration::from_secs(10)));

        let expected: Vec<_> = (0..count).map(Some).collect();
        let seen = seen.lock();
        prop_assert_eq!(&*seen, &expected);
    }

    /// Nonblocking delivery is an ordered subsequence of what was emitted,
    /// and exactly the accepted records are delivered
    #[test]
    fn test_nonblocking_accepted_delivered(capacity in 1usize..8, count in 0i64..200) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = {
            let seen = Arc::clone(&seen);
            sink_fn(move |record: Record| {
                seen.lock().push(record.get("key").and_then(rust_kv_logger::Value::as_i64));
                Ok(())
            })
        };

        let logger = NonblockingLogger::new(sink, capacity).unwrap();
        let mut accepted = Vec::new();
        for i in 0..count {
            match logger.emit(Record::new().with("key", i)) {
                Ok(()) => accepted.push(Some(i)),
                Err(LoggerError::Overflow { .. }) => {}
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }
        logger.stop();
        prop_assert!(logger.stopped().wait_timeout(Duration::from_secs(10)));

        let seen = seen.lock();
        prop_assert_eq!(&*seen, &accepted);
        prop_assert_eq!(
            logger.metrics().overflowed() + logger.metrics().enqueued(),
            count as u64
        );
    }
}
