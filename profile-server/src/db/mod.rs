use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub async fn connect(database_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = if is_memory_url(database_url) {
        // Every in-memory connection is a separate database, so keep exactly
        // one connection alive for the lifetime of the pool.
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(SqliteConnectOptions::from_str(database_url)?)
            .await?
    } else {
        // Resolve the file path and ensure the parent directory exists.
        // Handles both "sqlite:./foo.db" and "sqlite:../foo.db" forms.
        let file_path = database_url.strip_prefix("sqlite:").unwrap_or(database_url);

        let abs_path = std::env::current_dir()?.join(file_path);
        if let Some(parent) = abs_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        SqlitePool::connect_with(
            SqliteConnectOptions::new()
                .filename(&abs_path)
                .create_if_missing(true),
        )
        .await?
    };

    sqlx::migrate!("./migrations").run(&pool).await?;
    Ok(pool)
}

fn is_memory_url(database_url: &str) -> bool {
    database_url == "sqlite::memory:" || database_url.contains("mode=memory")
}
