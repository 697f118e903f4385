use crate::{ApiClient, ApiPath, ClientResult};

use cb_core::{Document, DocumentChunk, DocumentStatus, DocumentUpdate, NewDocument};

use std::sync::Arc;

use serde_json::Value;

const TENANT_PATH: &str = "/v1/tenant";

pub struct DocumentService {
    api: Arc<ApiClient>,
}

impl DocumentService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list_for_dataset(
        &self,
        dataset_id: &str,
        status: Option<DocumentStatus>,
        search: Option<&str>,
    ) -> ClientResult<Vec<Document>> {
        let params = [
            ("status", status.map(|s| s.as_str().to_string())),
            ("search", search.map(String::from)),
        ];
        self.api
            .get_with_query(
                dataset_documents_path(dataset_id),
                &params,
            )
            .await
    }

    /// Documents across every dataset of the tenant
    pub async fn list_all(
        &self,
        dataset_id: Option<&str>,
        status: Option<DocumentStatus>,
        search: Option<&str>,
    ) -> ClientResult<Vec<Document>> {
        let params = [
            ("dataset_id", dataset_id.map(String::from)),
            ("status", status.map(|s| s.as_str().to_string())),
            ("search", search.map(String::from)),
        ];
        self.api
            .get_with_query(format!("{TENANT_PATH}/documents"), &params)
            .await
    }

    pub async fn create_text(
        &self,
        dataset_id: &str,
        document: &NewDocument,
    ) -> ClientResult<Document> {
        document.validate()?;
        self.api
            .post(
                dataset_documents_path(dataset_id),
                document,
            )
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Document> {
        self.api.get(document_path(id)).await
    }

    /// Full text plus metadata
    pub async fn content(&self, id: &str) -> ClientResult<Value> {
        self.api
            .get(document_path(id).segment("content"))
            .await
    }

    pub async fn update(&self, id: &str, update: &DocumentUpdate) -> ClientResult<Document> {
        update.validate()?;
        self.api
            .put(document_path(id), update)
            .await
    }

    pub async fn delete(&self, id: &str) -> ClientResult<()> {
        self.api.delete(document_path(id)).await
    }

    pub async fn chunks(&self, id: &str) -> ClientResult<Vec<DocumentChunk>> {
        self.api
            .get(document_path(id).segment("chunks"))
            .await
    }

    /// Queue the document for chunking and embedding again
    pub async fn reprocess(&self, id: &str) -> ClientResult<Value> {
        self.api
            .post_empty(document_path(id).segment("reprocess"))
            .await
    }
}

fn document_path(id: &str) -> ApiPath {
    ApiPath::new(TENANT_PATH).segment("documents").segment(id)
}

fn dataset_documents_path(dataset_id: &str) -> ApiPath {
    ApiPath::new(TENANT_PATH)
        .segment("datasets")
        .segment(dataset_id)
        .segment("documents")
}
