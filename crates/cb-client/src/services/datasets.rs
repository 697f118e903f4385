use crate::{ApiClient, ApiPath, ClientResult};

use cb_core::{Dataset, DatasetUpdate, NewDataset};

use std::sync::Arc;

use serde_json::Value;

const DATASETS_PATH: &str = "/v1/tenant/datasets";

pub struct DatasetService {
    api: Arc<ApiClient>,
}

impl DatasetService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }

    pub async fn list(
        &self,
        search: Option<&str>,
        is_active: Option<bool>,
    ) -> ClientResult<Vec<Dataset>> {
        let params = [
            ("search", search.map(String::from)),
            ("is_active", is_active.map(|v| v.to_string())),
        ];
        self.api
            .get_with_query(format!("{DATASETS_PATH}/"), &params)
            .await
    }

    pub async fn get(&self, id: &str) -> ClientResult<Dataset> {
        self.api.get(dataset_path(id)).await
    }

    pub async fn create(&self, dataset: &NewDataset) -> ClientResult<Dataset> {
        dataset.validate()?;
        self.api.post(format!("{DATASETS_PATH}/"), dataset).await
    }

    pub async fn update(&self, id: &str, update: &DatasetUpdate) -> ClientResult<Dataset> {
        update.validate()?;
        self.api.put(dataset_path(id), update).await
    }

    /// `force` deletes even when documents or bots still reference the dataset
    pub async fn delete(&self, id: &str, force: bool) -> ClientResult<()> {
        let params = [("force", force.then(|| "true".to_string()))];
        self.api.delete_with_query(dataset_path(id), &params).await
    }

    pub async fn statistics(&self, id: &str) -> ClientResult<Value> {
        self.api
            .get(dataset_path(id).segment("statistics"))
            .await
    }

    pub async fn overview(&self) -> ClientResult<Value> {
        self.api
            .get(format!("{DATASETS_PATH}/statistics/overview"))
            .await
    }
}

fn dataset_path(id: &str) -> ApiPath {
    ApiPath::new(DATASETS_PATH).segment(id)
}
