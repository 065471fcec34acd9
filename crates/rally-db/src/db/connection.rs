use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::AsyncDieselConnectionManager;
use diesel_async::pooled_connection::bb8::{Pool, PooledConnection};
use rally_core::config::DatabaseConfig;

use crate::db::DbProvider;
use crate::error::DbResult;

pub type DbPool = Pool<AsyncPgConnection>;
pub type DbConnection<'pool> = PooledConnection<'pool, AsyncPgConnection>;

/// ## Summary
/// Creates the connection pool described by `config`.
///
/// Idle connections above `min_idle` are closed after the configured
/// timeout; connections are checked before being handed out.
///
/// ## Errors
/// Returns an error if the pool cannot be created with the configured URL.
#[tracing::instrument(skip(config), fields(pool_size = config.pool_size()))]
pub async fn create_pool(config: &DatabaseConfig) -> anyhow::Result<DbPool> {
    let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(config.url.as_str());

    let pool = Pool::builder()
        .max_size(config.pool_size())
        .min_idle(config.min_idle())
        .idle_timeout(config.idle_timeout())
        .test_on_check_out(true)
        .build(manager)
        .await?;

    tracing::info!(
        min_idle = ?config.min_idle(),
        idle_timeout = ?config.idle_timeout(),
        "Database connection pool ready"
    );

    Ok(pool)
}

impl DbProvider for DbPool {
    fn get_connection<'a>(
        &'a self,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = DbResult<DbConnection<'a>>> + Send + 'a>>
    {
        Box::pin(async move { Ok(self.get().await?) })
    }
}
