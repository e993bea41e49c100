use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

use crate::services::history_store::{SearchHistoryStore, StoreError};

pub mod migrator;
pub mod repositories;

pub use crate::entities::search_history::Model as SearchRecord;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        if !is_in_memory(db_url) {
            let path_str = db_url.trim_start_matches("sqlite:").trim_start_matches("//");
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        // An in-memory database lives only as long as its connections
        if !is_in_memory(db_url) {
            opt.idle_timeout(Duration::from_secs(300))
                .max_lifetime(Duration::from_secs(600));
        }

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn search_history_repo(&self) -> repositories::search_history::SearchHistoryRepository {
        repositories::search_history::SearchHistoryRepository::new(self.conn.clone())
    }

    pub async fn add_search(&self, input_string: &str, result_count: i32) -> Result<SearchRecord> {
        self.search_history_repo()
            .add(input_string, result_count)
            .await
    }

    pub async fn list_search_history(&self) -> Result<Vec<SearchRecord>> {
        self.search_history_repo().list_desc().await
    }

    pub async fn count_search_history(&self) -> Result<u64> {
        self.search_history_repo().count().await
    }
}

fn is_in_memory(db_url: &str) -> bool {
    db_url.contains(":memory:") || db_url.contains("mode=memory")
}

#[async_trait]
impl SearchHistoryStore for Store {
    async fn append(&self, input_string: &str, result_count: u32) -> Result<SearchRecord, StoreError> {
        let result_count = i32::try_from(result_count)
            .map_err(|_| StoreError::Database(format!("result count {result_count} out of range")))?;

        self.add_search(input_string, result_count)
            .await
            .map_err(StoreError::from)
    }

    async fn list_descending(&self) -> Result<Vec<SearchRecord>, StoreError> {
        self.list_search_history().await.map_err(StoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_store() -> Store {
        Store::new("sqlite::memory:")
            .await
            .expect("failed to open in-memory store")
    }

    #[test]
    fn test_is_in_memory() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite:file:test?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite:data/flight-finder.db"));
    }

    #[tokio::test]
    async fn test_empty_history() {
        let store = memory_store().await;
        let rows = store.list_descending().await.unwrap();
        assert!(rows.is_empty());
        assert_eq!(store.count_search_history().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_append_assigns_id_and_timestamp() {
        let store = memory_store().await;
        let before = chrono::Utc::now();

        let first = store.append("flight", 1).await.unwrap();
        let second = store.append("abc", 0).await.unwrap();

        assert!(second.id > first.id);
        assert_eq!(first.input_string, "flight");
        assert_eq!(first.result_count, 1);
        assert!(first.created_at >= before - chrono::Duration::seconds(1));
    }

    #[tokio::test]
    async fn test_list_descending_newest_first() {
        let store = memory_store().await;
        store.append("flight", 1).await.unwrap();
        store.append("flightflight", 2).await.unwrap();
        let newest = store.append("tghilf", 1).await.unwrap();

        let rows = store.list_descending().await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].id, newest.id);
        assert_eq!(rows[1].input_string, "flightflight");
        assert_eq!(rows[2].input_string, "flight");
    }

    #[tokio::test]
    async fn test_list_descending_ignores_clock_going_backwards() {
        use crate::entities::search_history;
        use sea_orm::{ActiveModelTrait, Set};

        let store = memory_store().await;
        let older = store.append("flight", 1).await.unwrap();

        // Written after `older` but stamped an hour earlier
        let newer = search_history::ActiveModel {
            input_string: Set("flightflight".to_string()),
            result_count: Set(2),
            created_at: Set(older.created_at - chrono::Duration::hours(1)),
            ..Default::default()
        }
        .insert(&store.conn)
        .await
        .unwrap();

        let rows = store.list_descending().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].id, newer.id);
        assert_eq!(rows[1].id, older.id);
    }

    #[tokio::test]
    async fn test_list_descending_is_repeatable() {
        let store = memory_store().await;
        store.append("flight", 1).await.unwrap();
        store.append("lightfabc", 1).await.unwrap();

        let first = store.list_descending().await.unwrap();
        let second = store.list_descending().await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_ping() {
        let store = memory_store().await;
        assert!(store.ping().await.is_ok());
    }
}
