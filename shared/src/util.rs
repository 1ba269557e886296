use std::sync::atomic::{AtomicI64, Ordering};

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Custom epoch: 2024-01-01 00:00:00 UTC
const EPOCH_MS: i64 = 1_704_067_200_000;

/// Last id handed out by this process
static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Generate a Snowflake-style i64 for use as resource ID.
///
/// Layout (53 bits, fits in JavaScript's Number.MAX_SAFE_INTEGER):
///   - 41 bits: milliseconds since 2024-01-01 UTC (~69 years)
///   - 12 bits: random (4096 values per ms)
///
/// Ids are strictly increasing within one process: when two calls land in
/// the same millisecond (or the clock steps back) the previous id + 1 is
/// used instead. Cross-process uniqueness is left to the store's record key.
pub fn snowflake_id() -> i64 {
    use rand::Rng;
    let ts = (now_millis() - EPOCH_MS) & 0x1FF_FFFF_FFFF; // 41 bits
    let rand_bits: i64 = rand::thread_rng().gen_range(0..0x1000); // 12 bits
    let candidate = (ts << 12) | rand_bits;

    let next = |last: i64| candidate.max(last + 1);
    match LAST_ID.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| Some(next(last))) {
        Ok(prev) | Err(prev) => next(prev),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snowflake_ids_are_strictly_increasing() {
        let ids: Vec<i64> = (0..10_000).map(|_| snowflake_id()).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn snowflake_id_is_a_safe_json_integer() {
        const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
        let id = snowflake_id();
        assert!(id > 0);
        assert!(id <= MAX_SAFE_INTEGER);
    }

    #[test]
    fn snowflake_ids_are_unique_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| (0..2_000).map(|_| snowflake_id()).collect::<Vec<_>>()))
            .collect();
        let mut all: Vec<i64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        let total = all.len();
        all.sort_unstable();
        all.dedup();
        assert_eq!(all.len(), total);
    }
}
