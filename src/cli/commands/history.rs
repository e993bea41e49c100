use crate::config::Config;
use crate::db::Store;
use crate::services::SearchHistoryStore;

pub async fn cmd_history(config: &Config, limit: usize) -> anyhow::Result<()> {
    let store = Store::new(&config.general.database_path).await?;

    for line in history_lines(&store, limit).await? {
        println!("{line}");
    }

    Ok(())
}

/// Renders at most `limit` records, newest first.
async fn history_lines(
    store: &dyn SearchHistoryStore,
    limit: usize,
) -> anyhow::Result<Vec<String>> {
    let records = store.list_descending().await?;

    if records.is_empty() {
        return Ok(vec!["No search history.".to_string()]);
    }

    let shown = records.len().min(limit);
    let mut lines = Vec::with_capacity(2 + shown * 2);
    lines.push(format!("Recent Searches ({} of {}):", shown, records.len()));
    lines.push(format!("{:-<70}", ""));

    for record in records.into_iter().take(limit) {
        lines.push(format!(
            "#{:<5} {:<3} {}",
            record.id, record.result_count, record.input_string
        ));
        lines.push(format!("       {}", record.created_at.to_rfc3339()));
    }

    Ok(lines)
}
