use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::Connection;
use tracing::error;

use crate::config::DbConfig;

/// Opens a fresh MySQL connection for one request.
///
/// Deliberately no pool: each handler acquires its own connection and drops
/// it on every exit path. Callers must map a failure here to the
/// `Database connection failed` envelope before issuing any query.
pub async fn connect(config: &DbConfig) -> Result<MySqlConnection, sqlx::Error> {
    let options = MySqlConnectOptions::new()
        .host(&config.host)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database);

    match MySqlConnection::connect_with(&options).await {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Database connection failed: {e}");
            Err(e)
        }
    }
}
