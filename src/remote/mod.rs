//! Remote computation adapter.
//!
//! Model fitting is delegated to an external compute process: the
//! adapter builds a `{X, y}` feature/target payload, signs it with the
//! wallet capability, submits it through an injected transport and
//! awaits the result by message id. The result payload is opaque to
//! this crate; only an `error` field is interpreted. No retries, no
//! cancellation — a failed call surfaces directly to the caller.

pub mod http;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{Error, Result};
use crate::logging::{json_log, obj, v_num, v_str};
use crate::series::{coerce, common_rows, extract_at};
use crate::table::Table;
use crate::wallet::Wallet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub value: String,
}

impl Tag {
    pub fn new(name: &str, value: impl Into<String>) -> Self {
        Self { name: name.to_string(), value: value.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Model {
    Linear,
    Ridge,
    Lasso,
}

impl Model {
    pub fn as_str(&self) -> &'static str {
        match self {
            Model::Linear => "linear",
            Model::Ridge => "ridge",
            Model::Lasso => "lasso",
        }
    }

    /// Combined model/regularization token the compute process expects,
    /// e.g. `ridge_0.1`.
    pub fn spec_token(&self, alpha: f64) -> String {
        format!("{}_{}", self.as_str(), alpha)
    }
}

impl std::str::FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "linear" => Ok(Model::Linear),
            "ridge" => Ok(Model::Ridge),
            "lasso" => Ok(Model::Lasso),
            other => Err(Error::Validation(format!("unknown model: {}", other))),
        }
    }
}

/// Feature matrix and target vector, serialized as the `{X, y}` JSON
/// object the compute process consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionRequest {
    #[serde(rename = "X")]
    pub x: Vec<Vec<f64>>,
    pub y: Vec<f64>,
}

/// Message-passing boundary to the compute network: submit a signed
/// payload, then await the result correlated by message id.
#[async_trait]
pub trait ComputeTransport: Send + Sync {
    async fn submit(
        &self,
        address: &str,
        data: &str,
        tags: &[Tag],
        wallet: &dyn Wallet,
    ) -> Result<String>;

    async fn await_result(&self, address: &str, message_id: &str) -> Result<Value>;
}

// Stub transport to make integration explicit; echoes the request back.
pub struct NullTransport;

#[async_trait]
impl ComputeTransport for NullTransport {
    async fn submit(
        &self,
        _address: &str,
        data: &str,
        _tags: &[Tag],
        wallet: &dyn Wallet,
    ) -> Result<String> {
        wallet.sign(data)?;
        Ok(format!("stub-{}", data.len()))
    }

    async fn await_result(&self, _address: &str, message_id: &str) -> Result<Value> {
        Ok(serde_json::json!({ "status": "stub", "id": message_id }))
    }
}

/// Build the regression request from the table and submit it.
///
/// Rows are selected on the intersection of indices numeric in every
/// feature column *and* the target, so the matrix and the target
/// vector stay co-indexed however each column's cells fail coercion.
#[allow(clippy::too_many_arguments)]
pub async fn compute_regression(
    table: &Table,
    feature_columns: &[String],
    target_column: &str,
    model: Model,
    alpha: f64,
    transport: &dyn ComputeTransport,
    address: &str,
    wallet: &dyn Wallet,
) -> Result<Value> {
    if feature_columns.is_empty() {
        return Err(Error::Validation("no feature columns selected".to_string()));
    }
    if target_column.is_empty() {
        return Err(Error::Validation("no target column selected".to_string()));
    }
    if !alpha.is_finite() || alpha < 0.0 {
        return Err(Error::Validation(format!(
            "regularization strength must be non-negative, got {}",
            alpha
        )));
    }
    if address.is_empty() {
        return Err(Error::Validation("no compute process address".to_string()));
    }

    let mut involved: Vec<&str> = feature_columns.iter().map(|c| c.as_str()).collect();
    involved.push(target_column);
    let rows = common_rows(table, &involved);
    if rows.is_empty() {
        return Err(Error::Validation(
            "no rows are numeric across the selected columns".to_string(),
        ));
    }

    let x: Vec<Vec<f64>> = rows
        .iter()
        .map(|&r| {
            feature_columns
                .iter()
                // row is in common_rows, so every cell coerces
                .filter_map(|col| table.cell(r, col).and_then(coerce))
                .collect()
        })
        .collect();
    let y = extract_at(table, target_column, &rows);

    let request = RegressionRequest { x, y };
    let payload = serde_json::to_string(&request)?;
    let tags = vec![
        Tag::new("Action", "regress"),
        Tag::new("Model-Spec", model.spec_token(alpha)),
    ];

    json_log(
        "compute_submit",
        obj(&[
            ("model", v_str(model.as_str())),
            ("alpha", v_num(alpha)),
            ("rows", v_num(request.x.len() as f64)),
            ("features", v_num(feature_columns.len() as f64)),
        ]),
    );

    let message_id = transport.submit(address, &payload, &tags, wallet).await?;
    let result = transport.await_result(address, &message_id).await?;

    if let Some(err) = result.get("error") {
        let msg = err.as_str().map(|s| s.to_string()).unwrap_or_else(|| err.to_string());
        return Err(Error::RemoteCompute(msg));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_spec_token() {
        assert_eq!(Model::Ridge.spec_token(0.1), "ridge_0.1");
        assert_eq!(Model::Linear.spec_token(0.0), "linear_0");
        assert_eq!("lasso".parse::<Model>().unwrap(), Model::Lasso);
        assert!("svm".parse::<Model>().is_err());
    }

    #[test]
    fn request_serializes_with_capital_x() {
        let req = RegressionRequest { x: vec![vec![1.0, 2.0]], y: vec![3.0] };
        let json = serde_json::to_string(&req).unwrap();
        assert_eq!(json, r#"{"X":[[1.0,2.0]],"y":[3.0]}"#);
    }
}
