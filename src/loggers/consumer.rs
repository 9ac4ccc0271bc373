//! Consumer thread shared by the dispatching loggers

use crate::core::{LoggerError, LoggerMetrics, Record, Result, Sink};
use crossbeam_channel::Receiver;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Spawn the single thread that owns `sink`
///
/// The thread delivers records in queue order until every sender is gone
/// and the queue is empty, then runs `on_drained` and exits. Sink errors are
/// counted and discarded; a panicking sink is isolated so later records
/// still get delivered.
pub(crate) fn spawn<S, F>(
    thread_name: &str,
    sink: S,
    receiver: Receiver<Record>,
    metrics: Arc<LoggerMetrics>,
    on_drained: F,
) -> Result<JoinHandle<()>>
where
    S: Sink + 'static,
    F: FnOnce() + Send + 'static,
{
    thread::Builder::new()
        .name(thread_name.to_string())
        .spawn(move || {
            for record in receiver.iter() {
                deliver(&sink, record, &metrics);
            }
            on_drained();
        })
        .map_err(|e| {
            LoggerError::io_operation(
                "spawning consumer thread",
                format!("cannot start '{}'", thread_name),
                e,
            )
        })
}

fn deliver<S: Sink>(sink: &S, record: Record, metrics: &LoggerMetrics) {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.emit(record)));

    match result {
        Ok(Ok(())) => {
            metrics.record_delivered();
        }
        Ok(Err(_)) => {
            // Producers only ever learn about admission failures
            metrics.record_sink_error();
        }
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            eprintln!(
                "[LOGGER CRITICAL] Sink panicked in consumer thread: {}. \
                 Consumer continues with the next record.",
                panic_msg
            );
            metrics.record_sink_error();
        }
    }
}

/// Wait for the consumer to exit, giving up after `timeout`
///
/// Returns `true` if the thread finished and did not panic.
pub(crate) fn join_with_timeout(handle: JoinHandle<()>, timeout: Duration) -> bool {
    let start = Instant::now();

    loop {
        if handle.is_finished() {
            if let Err(e) = handle.join() {
                eprintln!("[LOGGER ERROR] Consumer thread panicked during shutdown: {:?}", e);
                return false;
            }
            return true;
        }

        if start.elapsed() >= timeout {
            eprintln!(
                "[LOGGER WARNING] Consumer thread did not drain within {:?}. \
                 Some records may be lost.",
                timeout
            );
            return false;
        }

        thread::sleep(Duration::from_millis(10));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink_fn;
    use crossbeam_channel::bounded;
    use parking_lot::Mutex;

    #[test]
    fn test_delivers_in_order_then_drains() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_clone = Arc::clone(&seen);
        let (tx, rx) = bounded(8);
        let (done_tx, done_rx) = bounded(1);
        let metrics = Arc::new(LoggerMetrics::new());

        let handle = spawn(
            "consumer-test",
            sink_fn(move |record: Record| {
                seen_clone.lock().push(record.get("i").and_then(|v| v.as_i64()));
                Ok(())
            }),
            rx,
            Arc::clone(&metrics),
            move || {
                let _ = done_tx.send(());
            },
        )
        .unwrap();

        for i in 0..5 {
            tx.send(Record::new().with("i", i)).unwrap();
        }
        drop(tx);

        done_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(join_with_timeout(handle, Duration::from_secs(5)));
        assert_eq!(*seen.lock(), (0..5).map(Some).collect::<Vec<_>>());
        assert_eq!(metrics.delivered(), 5);
    }

    #[test]
    fn test_sink_errors_and_panics_are_counted() {
        let (tx, rx) = bounded(8);
        let metrics = Arc::new(LoggerMetrics::new());

        let handle = spawn(
            "consumer-failing",
            sink_fn(|record: Record| match record.get("kind").and_then(|v| v.as_str()) {
                Some("err") => Err(LoggerError::sink("rejected")),
                Some("panic") => panic!("sink exploded"),
                _ => Ok(()),
            }),
            rx,
            Arc::clone(&metrics),
            || {},
        )
        .unwrap();

        for kind in ["ok", "err", "panic", "ok"] {
            tx.send(Record::new().with("kind", kind)).unwrap();
        }
        drop(tx);

        assert!(join_with_timeout(handle, Duration::from_secs(5)));
        assert_eq!(metrics.delivered(), 2);
        assert_eq!(metrics.sink_errors(), 2);
    }
}
