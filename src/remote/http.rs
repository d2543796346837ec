//! HTTP gateway transport for the compute network.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use crate::errors::{Error, Result};
use crate::remote::{ComputeTransport, Tag};
use crate::wallet::Wallet;

pub struct HttpTransport {
    client: Client,
    base: String,
}

impl HttpTransport {
    pub fn new(base: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;
        Ok(Self { client, base: base.into() })
    }
}

#[derive(Serialize)]
struct MessageBody<'a> {
    data: &'a str,
    tags: &'a [Tag],
    owner: String,
    signature: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    id: String,
}

#[async_trait]
impl ComputeTransport for HttpTransport {
    async fn submit(
        &self,
        address: &str,
        data: &str,
        tags: &[Tag],
        wallet: &dyn Wallet,
    ) -> Result<String> {
        let signature = wallet.sign(data)?;
        let owner = wallet.active_address()?;
        let body = MessageBody { data, tags, owner, signature };

        let url = format!("{}/processes/{}/messages", self.base, address);
        let resp = self.client.post(&url).json(&body).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::Transport(format!("submit failed ({}): {}", status, text)));
        }
        let decoded: SubmitResponse = resp.json().await?;
        Ok(decoded.id)
    }

    async fn await_result(&self, address: &str, message_id: &str) -> Result<Value> {
        let url = format!("{}/processes/{}/results/{}", self.base, address, message_id);
        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(Error::Transport(format!("result fetch failed ({}): {}", status, text)));
        }
        let value: Value = resp.json().await?;
        Ok(value)
    }
}
