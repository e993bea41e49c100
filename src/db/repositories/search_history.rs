use crate::entities::{prelude::*, search_history};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};

pub struct SearchHistoryRepository {
    conn: DatabaseConnection,
}

impl SearchHistoryRepository {
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn add(&self, input_string: &str, result_count: i32) -> Result<search_history::Model> {
        let active_model = search_history::ActiveModel {
            input_string: Set(input_string.to_string()),
            result_count: Set(result_count),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active_model.insert(&self.conn).await?;
        Ok(model)
    }

    /// Newest first. Ordered by id rather than `created_at`, which follows
    /// the wall clock and can step backwards.
    pub async fn list_desc(&self) -> Result<Vec<search_history::Model>> {
        let rows = SearchHistory::find()
            .order_by_desc(search_history::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows)
    }

    pub async fn count(&self) -> Result<u64> {
        use sea_orm::PaginatorTrait;

        Ok(SearchHistory::find().count(&self.conn).await?)
    }
}
