use anyhow::{Context, Result};
use chrono::Utc;
use rand::Rng;
use sqlx::sqlite::SqlitePool;

use crate::domain::PostPair;

/// Key holding the most recently submitted post until it is revised or
/// overwritten. At most one value is live at a time.
pub const CURRENT_POST_KEY: &str = "currentPost";
/// Key holding the append-only collection of original/revised pairs.
pub const POST_PAIRS_KEY: &str = "postPairs";

#[derive(Clone)]
pub struct PairStore {
    pool: SqlitePool,
}

impl PairStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    pub async fn set_current(&self, content: &str) -> Result<()> {
        sqlx::query(r#"INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)"#)
            .bind(CURRENT_POST_KEY)
            .bind(content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn current(&self) -> Result<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as(r#"SELECT value FROM kv_store WHERE key = ?1"#)
                .bind(CURRENT_POST_KEY)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(|(value,)| value))
    }

    /// Stored pairs in insertion order. An absent or unreadable blob is
    /// treated as an empty collection.
    pub async fn pairs(&self) -> Result<Vec<PostPair>> {
        let row: Option<(String,)> =
            sqlx::query_as(r#"SELECT value FROM kv_store WHERE key = ?1"#)
                .bind(POST_PAIRS_KEY)
                .fetch_optional(&self.pool)
                .await?;
        Ok(decode_pairs(row.map(|(blob,)| blob)))
    }

    /// Appends a pair and clears the transient original in one transaction.
    /// On failure neither key changes.
    pub async fn save_pair(&self, original: &str, revised: &str) -> Result<PostPair> {
        let pair = PostPair {
            id: next_pair_id(),
            original: original.to_string(),
            revised: revised.to_string(),
        };

        let mut tx = self
            .pool
            .begin()
            .await
            .context("failed to open store transaction")?;

        let row: Option<(String,)> =
            sqlx::query_as(r#"SELECT value FROM kv_store WHERE key = ?1"#)
                .bind(POST_PAIRS_KEY)
                .fetch_optional(&mut *tx)
                .await?;
        let mut pairs = decode_pairs(row.map(|(blob,)| blob));
        pairs.push(pair.clone());
        let blob = serde_json::to_string(&pairs).context("failed to encode post pairs")?;

        sqlx::query(r#"INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)"#)
            .bind(POST_PAIRS_KEY)
            .bind(blob)
            .execute(&mut *tx)
            .await?;
        sqlx::query(r#"DELETE FROM kv_store WHERE key = ?1"#)
            .bind(CURRENT_POST_KEY)
            .execute(&mut *tx)
            .await?;

        tx.commit().await.context("failed to commit post pair")?;
        Ok(pair)
    }
}

fn decode_pairs(blob: Option<String>) -> Vec<PostPair> {
    match blob {
        None => Vec::new(),
        Some(blob) => match serde_json::from_str(&blob) {
            Ok(pairs) => pairs,
            Err(err) => {
                tracing::warn!(
                    target: "store",
                    error = %err,
                    "post pair blob is unreadable; treating collection as empty"
                );
                Vec::new()
            }
        },
    }
}

/// Timestamp plus a random tie-breaker. Unique enough for one interactive
/// session; not cryptographic.
fn next_pair_id() -> String {
    let tiebreak = rand::thread_rng().gen_range(0..1000);
    format!("id-{}-{}", Utc::now().timestamp_millis(), tiebreak)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_pool;
    use tempfile::TempDir;

    async fn open_store() -> (TempDir, PairStore) {
        let dir = TempDir::new().expect("temp dir");
        let pool = init_pool(&dir.path().join("test.db")).await.expect("pool");
        (dir, PairStore::new(pool))
    }

    #[tokio::test]
    async fn save_pair_appends_and_clears_current() {
        let (_dir, store) = open_store().await;
        store.set_current("original text").await.unwrap();

        let pair = store.save_pair("original text", "revised text").await.unwrap();
        assert!(pair.id.starts_with("id-"));

        let pairs = store.pairs().await.unwrap();
        assert_eq!(pairs, vec![pair]);
        assert_eq!(store.current().await.unwrap(), None);
    }

    #[tokio::test]
    async fn pairs_keep_insertion_order() {
        let (_dir, store) = open_store().await;
        for n in 0..4 {
            store
                .save_pair(&format!("original {n}"), &format!("revised {n}"))
                .await
                .unwrap();
        }
        let originals: Vec<_> = store
            .pairs()
            .await
            .unwrap()
            .into_iter()
            .map(|pair| pair.original)
            .collect();
        assert_eq!(
            originals,
            vec!["original 0", "original 1", "original 2", "original 3"]
        );
    }

    #[tokio::test]
    async fn current_is_overwritten_by_newer_post() {
        let (_dir, store) = open_store().await;
        store.set_current("first").await.unwrap();
        store.set_current("second").await.unwrap();
        assert_eq!(store.current().await.unwrap(), Some("second".to_string()));
    }

    #[tokio::test]
    async fn corrupt_blob_reads_as_empty() {
        let (_dir, store) = open_store().await;
        sqlx::query(r#"INSERT OR REPLACE INTO kv_store (key, value) VALUES (?1, ?2)"#)
            .bind(POST_PAIRS_KEY)
            .bind("not json at all")
            .execute(&store.pool)
            .await
            .unwrap();
        assert!(store.pairs().await.unwrap().is_empty());

        // A save over a corrupt blob starts a fresh collection.
        store.save_pair("o", "r").await.unwrap();
        assert_eq!(store.pairs().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn absent_collection_reads_as_empty() {
        let (_dir, store) = open_store().await;
        assert!(store.pairs().await.unwrap().is_empty());
    }
}
