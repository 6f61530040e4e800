#![allow(async_fn_in_trait)]

use reqwest::{Client, Response};

use crate::error::ClientError;
use crate::model::{NewWorkOrder, WorkOrder};

/// The four work-order round trips the board depends on.
pub trait WorkOrderApi {
    async fn list(&self) -> Result<Vec<WorkOrder>, ClientError>;
    async fn create(&self, draft: &NewWorkOrder) -> Result<WorkOrder, ClientError>;
    /// Full-entity replace. The server answers with no body.
    async fn replace(&self, work_order: &WorkOrder) -> Result<(), ClientError>;
    async fn delete(&self, id: i32) -> Result<(), ClientError>;
}

pub struct HttpWorkOrderApi {
    client: Client,
    base_url: String,
}

impl HttpWorkOrderApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/WorkOrder{path}", self.base_url)
    }
}

impl WorkOrderApi for HttpWorkOrderApi {
    async fn list(&self) -> Result<Vec<WorkOrder>, ClientError> {
        let resp = self.client.get(self.url("")).send().await?;
        Ok(success(resp).await?.json().await?)
    }

    async fn create(&self, draft: &NewWorkOrder) -> Result<WorkOrder, ClientError> {
        let resp = self.client.post(self.url("")).json(draft).send().await?;
        Ok(success(resp).await?.json().await?)
    }

    async fn replace(&self, work_order: &WorkOrder) -> Result<(), ClientError> {
        let resp = self
            .client
            .put(self.url(&format!("/{}", work_order.id)))
            .json(work_order)
            .send()
            .await?;
        success(resp).await?;
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), ClientError> {
        let resp = self
            .client
            .delete(self.url(&format!("/{id}")))
            .send()
            .await?;
        success(resp).await?;
        Ok(())
    }
}

async fn success(resp: Response) -> Result<Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ClientError::Status {
        status: status.as_u16(),
        body,
    })
}
