//! Request deadline integration tests

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use mongodb::bson::Document;
use resto_api::backend::store::{
    Collection, Collections, InsertAck, MemoryCollection, MergePatch, StoreError, UpdateAck,
};
use resto_api::shared::{Page, PageWindow};

use crate::assert_error;
use crate::common::{
    create_unique_test_user, spawn_app_with, test_config_with_timeout, with_token,
};

/// Collection whose reads stall before answering
struct SlowCollection {
    inner: MemoryCollection,
    delay: Duration,
}

impl SlowCollection {
    fn new(name: &str, delay: Duration) -> Self {
        Self {
            inner: MemoryCollection::new(name),
            delay,
        }
    }
}

#[async_trait]
impl Collection for SlowCollection {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn insert_one(&self, document: Document) -> Result<InsertAck, StoreError> {
        self.inner.insert_one(document).await
    }

    async fn find_one(&self, filter: Document) -> Result<Option<Document>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.find_one(filter).await
    }

    async fn find(&self, filter: Document) -> Result<Vec<Document>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.find(filter).await
    }

    async fn count(&self, filter: Document) -> Result<u64, StoreError> {
        self.inner.count(filter).await
    }

    async fn update_one(
        &self,
        filter: Document,
        patch: MergePatch,
        upsert: bool,
    ) -> Result<UpdateAck, StoreError> {
        self.inner.update_one(filter, patch, upsert).await
    }

    async fn delete_one(&self, filter: Document) -> Result<u64, StoreError> {
        self.inner.delete_one(filter).await
    }

    async fn paginate(
        &self,
        filter: Document,
        window: PageWindow,
        items_field: &'static str,
    ) -> Result<Page<Document>, StoreError> {
        tokio::time::sleep(self.delay).await;
        self.inner.paginate(filter, window, items_field).await
    }
}

fn slow_foods() -> Collections {
    let mut collections = Collections::memory();
    collections.foods = Arc::new(SlowCollection::new("food", Duration::from_secs(5)));
    collections
}

#[tokio::test]
async fn test_slow_store_hits_deadline() {
    let app = spawn_app_with(slow_foods(), test_config_with_timeout(Duration::from_millis(200)));
    let user = create_unique_test_user(&app.server).await;

    let response = with_token(app.server.get("/foods"), &user.token).await;
    assert_error!(response, StatusCode::INTERNAL_SERVER_ERROR, "request timed out");

    let response = with_token(
        app.server.get("/foods/000000000000000000000000"),
        &user.token,
    )
    .await;
    assert_error!(response, StatusCode::INTERNAL_SERVER_ERROR, "request timed out");
}

#[tokio::test]
async fn test_fast_routes_unaffected_by_slow_collection() {
    let app = spawn_app_with(slow_foods(), test_config_with_timeout(Duration::from_millis(200)));
    let user = create_unique_test_user(&app.server).await;

    let response = with_token(app.server.get("/menus"), &user.token).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}
