use anyhow::Result;
use sea_orm::Database;

use crate::schemas::AppState;
use crate::session::SessionStore;

/// Connect to the database and build the shared application state.
///
/// The session store starts empty: sessions are process-held and do not
/// survive a restart.
pub async fn initialize_app_state_with_url(database_url: &str) -> Result<AppState> {
    tracing::info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url).await?;

    Ok(AppState {
        db,
        sessions: SessionStore::new(),
    })
}
