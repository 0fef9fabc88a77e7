//! Calculate Cart Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::carts::pricing::{QuoteLine, calculate_total};

use crate::validate::{Validate, ValidationError, min_len, positive};

/// One sku and quantity pair to quote.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct QuoteLineRequest {
    /// Stock keeping unit
    pub sku: String,
    /// Quantity, positive
    pub qty: i64,
}

/// Calculate Cart Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CalculateRequest {
    /// Lines to quote
    pub items: Vec<QuoteLineRequest>,
}

impl Validate for CalculateRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        for item in &self.items {
            min_len("items.sku", &item.sku, 1)?;
            positive("items.qty", item.qty)?;
        }

        Ok(())
    }
}

/// Calculate Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CalculateResponse {
    /// The submitted lines, echoed back
    pub items: Vec<QuoteLineRequest>,
    /// Quoted total; zero until pricing rules land
    pub total_cents: u64,
    /// Quote currency
    pub currency: String,
}

/// Calculate Cart Handler
///
/// Quotes a set of lines without touching any stored cart.
#[endpoint(
    tags("carts"),
    summary = "Calculate Cart Total",
    responses(
        (status_code = StatusCode::OK, description = "Quote"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failure"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CalculateRequest>,
) -> Result<Json<CalculateResponse>, StatusError> {
    let request = json.into_inner();

    request
        .validate()
        .map_err(ValidationError::into_status_error)?;

    let quote = calculate_total(
        request
            .items
            .into_iter()
            .map(|item| QuoteLine {
                sku: item.sku,
                qty: item.qty,
            })
            .collect(),
    );

    Ok(Json(CalculateResponse {
        items: quote
            .items
            .into_iter()
            .map(|line| QuoteLineRequest {
                sku: line.sku,
                qty: line.qty,
            })
            .collect(),
        total_cents: quote.total_cents,
        currency: quote.currency,
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn make_service() -> Service {
        Service::new(Router::new().push(
            Router::with_path("cart").push(Router::with_path("calculate").post(handler)),
        ))
    }

    #[tokio::test]
    async fn test_calculate_echoes_lines_with_zero_total() -> TestResult {
        let response: CalculateResponse = TestClient::post("http://example.com/cart/calculate")
            .json(&json!({
                "items": [
                    { "sku": "TEE-RED-M", "qty": 2 },
                    { "sku": "MUG-01", "qty": 1 },
                ],
            }))
            .send(&make_service())
            .await
            .take_json()
            .await?;

        assert_eq!(response.total_cents, 0, "pricing is a stub");
        assert_eq!(response.currency, "USD");
        assert_eq!(response.items.len(), 2, "lines are echoed back");
        assert_eq!(response.items[0].sku, "TEE-RED-M");
        assert_eq!(response.items[0].qty, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_empty_items_is_ok() -> TestResult {
        let response: CalculateResponse = TestClient::post("http://example.com/cart/calculate")
            .json(&json!({ "items": [] }))
            .send(&make_service())
            .await
            .take_json()
            .await?;

        assert_eq!(response.total_cents, 0);
        assert!(response.items.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_calculate_zero_qty_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/cart/calculate")
            .json(&json!({ "items": [{ "sku": "TEE-RED-M", "qty": 0 }] }))
            .send(&make_service())
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
