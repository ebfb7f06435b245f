/**
 * Store Configuration
 *
 * Chooses the document store from `AppConfig`:
 *
 * - `MONGODB_URI` set: connect, ping, and ensure the unique indexes on the
 *   user collection. Any failure here is a startup error.
 * - `MONGODB_URI` unset: in-memory collections. Data does not survive a
 *   restart, so a warning is logged.
 */

use mongodb::bson::doc;
use mongodb::Client;

use crate::backend::store::{Collections, MongoCollection, StoreError, USERS, USER_UNIQUE_FIELDS};
use crate::shared::AppConfig;

/// Load the configured store
pub async fn load_store(config: &AppConfig) -> Result<Collections, StoreError> {
    let Some(uri) = config.mongodb_uri.as_deref() else {
        tracing::warn!("MONGODB_URI not set. Using in-memory store; data will not persist.");
        return Ok(Collections::memory());
    };

    let client = Client::with_uri_str(uri).await?;
    let db = client.database(&config.database_name);

    db.run_command(doc! { "ping": 1 }).await?;
    tracing::info!("Connected to MongoDB database '{}'", config.database_name);

    MongoCollection::new(&db, USERS)
        .ensure_unique(&USER_UNIQUE_FIELDS)
        .await?;

    Ok(Collections::mongo(&db))
}
