use std::sync::atomic::{AtomicU64, Ordering};

use crate::generator::TokenBuilder;
use crate::helpers::time::now_u64;

/// Counter + node id hybrid: `{node_id}-{started_at}-{counter}` in hex.
///
/// Unique within the process through the counter, and across processes as
/// long as no two live processes share both node id and start second.
#[derive(Debug)]
pub struct SequenceToken {
    node_id: u16,
    started_at_unix_ts: u64,
    counter: AtomicU64,
}

impl SequenceToken {
    pub fn new(node_id: u16) -> Self {
        Self::with_start(node_id, now_u64())
    }

    pub fn with_start(node_id: u16, started_at_unix_ts: u64) -> Self {
        Self {
            node_id,
            started_at_unix_ts,
            counter: AtomicU64::new(0),
        }
    }

    pub fn node_id(&self) -> u16 {
        self.node_id
    }
}

impl TokenBuilder for SequenceToken {
    fn build(&self) -> String {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        format!(
            "{:04x}-{:010x}-{:016x}",
            self.node_id, self.started_at_unix_ts, seq
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn format_is_stable() {
        let generator = SequenceToken::with_start(0x2a, 0x1234);
        assert_eq!(generator.build(), "002a-0000001234-0000000000000000");
        assert_eq!(generator.build(), "002a-0000001234-0000000000000001");
    }

    #[test]
    fn distinct_across_threads() {
        let generator = SequenceToken::new(7);
        let tokens: Vec<String> = thread::scope(|s| {
            let handles: Vec<_> = (0..8)
                .map(|_| s.spawn(|| (0..500).map(|_| generator.build()).collect::<Vec<_>>()))
                .collect();
            handles.into_iter().flat_map(|h| h.join().unwrap()).collect()
        });

        let unique: HashSet<&String> = tokens.iter().collect();
        assert_eq!(unique.len(), 4000);
    }
}
