//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::{products::records::NewProduct, tenants::records::TenantUuid};

use crate::{
    extensions::*,
    products::{errors::into_status_error, handlers::index::ProductResponse},
    state::State,
    validate::{Validate, ValidationError, exact_len, min_len},
};

fn default_currency() -> String {
    "USD".to_string()
}

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateProductRequest {
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Stock keeping unit, unique across the platform
    pub sku: String,
    /// Display title, at least two characters
    pub title: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Unit price in minor currency units
    pub price_cents: u64,
    /// ISO 4217 currency code
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("sku", &self.sku, 1)?;
        min_len("title", &self.title, 2)?;
        exact_len("currency", &self.currency, 3)?;

        Ok(())
    }
}

impl From<CreateProductRequest> for NewProduct {
    fn from(request: CreateProductRequest) -> Self {
        Self {
            tenant_uuid: TenantUuid::from_uuid(request.tenant_id),
            sku: request.sku,
            title: request.title,
            description: request.description,
            price_cents: request.price_cents,
            currency: request.currency,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation or write failure"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request
        .validate()
        .map_err(ValidationError::into_status_error)?;

    let created = state
        .app
        .products
        .create_product(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/products/{}", created.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(created.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bazaar_app::domain::products::{
        ProductsServiceError,
        records::{ProductRecord, ProductUuid},
    };

    use crate::test_helpers::TestApp;

    use super::*;

    fn make_service(app: TestApp) -> Service {
        app.into_service(Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success_defaults_currency() -> TestResult {
        let uuid = ProductUuid::new();
        let tenant = TenantUuid::new();

        let mut app = TestApp::new();

        app.products
            .expect_create_product()
            .once()
            .withf(move |new| {
                new.tenant_uuid == tenant
                    && new.sku == "TEE-RED-M"
                    && new.price_cents == 1999
                    && new.currency == "USD"
            })
            .return_once(move |new| {
                Ok(ProductRecord {
                    uuid,
                    tenant_uuid: new.tenant_uuid,
                    sku: new.sku,
                    title: new.title,
                    description: new.description,
                    price_cents: new.price_cents,
                    currency: new.currency,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        app.products.expect_list_products().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "tenantId": tenant.into_uuid(),
                "sku": "TEE-RED-M",
                "title": "Red Tee",
                "priceCents": 1999,
            }))
            .send(&make_service(app))
            .await;

        let body: ProductResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.currency, "USD");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_empty_sku_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.products.expect_create_product().never();
        app.products.expect_list_products().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "tenantId": Uuid::now_v7(),
                "sku": "",
                "title": "Red Tee",
                "priceCents": 1999,
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_bad_currency_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.products.expect_create_product().never();
        app.products.expect_list_products().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "tenantId": Uuid::now_v7(),
                "sku": "TEE-RED-M",
                "title": "Red Tee",
                "priceCents": 1999,
                "currency": "US",
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_duplicate_sku_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        app.products.expect_list_products().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "tenantId": Uuid::now_v7(),
                "sku": "TEE-RED-M",
                "title": "Red Tee",
                "priceCents": 1999,
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_unknown_tenant_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidReference));

        app.products.expect_list_products().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({
                "tenantId": Uuid::now_v7(),
                "sku": "TEE-RED-M",
                "title": "Red Tee",
                "priceCents": 1999,
            }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
