//! Create Warehouse Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bazaar_app::domain::{tenants::records::TenantUuid, warehouses::records::NewWarehouse};

use crate::{
    extensions::*,
    state::State,
    validate::{Validate, ValidationError, min_len},
    warehouses::{errors::into_status_error, handlers::index::WarehouseResponse},
};

/// Create Warehouse Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateWarehouseRequest {
    /// Owning tenant
    pub tenant_id: Uuid,
    /// Display name
    pub name: String,
    /// Optional free-form location
    #[serde(default)]
    pub location: Option<String>,
}

impl Validate for CreateWarehouseRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("name", &self.name, 1)?;

        Ok(())
    }
}

impl From<CreateWarehouseRequest> for NewWarehouse {
    fn from(request: CreateWarehouseRequest) -> Self {
        Self {
            tenant_uuid: TenantUuid::from_uuid(request.tenant_id),
            name: request.name,
            location: request.location,
        }
    }
}

/// Create Warehouse Handler
#[endpoint(
    tags("warehouses"),
    summary = "Create Warehouse",
    responses(
        (status_code = StatusCode::CREATED, description = "Warehouse created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation or write failure"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateWarehouseRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<WarehouseResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request
        .validate()
        .map_err(ValidationError::into_status_error)?;

    let created = state
        .app
        .warehouses
        .create_warehouse(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/warehouses/{}", created.uuid), true)
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

    use bazaar_app::domain::warehouses::{
        WarehousesServiceError,
        records::{WarehouseRecord, WarehouseUuid},
    };

    use crate::test_helpers::TestApp;

    use super::*;

    fn make_service(app: TestApp) -> Service {
        app.into_service(Router::with_path("warehouses").post(handler))
    }

    #[tokio::test]
    async fn test_create_warehouse_success() -> TestResult {
        let uuid = WarehouseUuid::new();
        let tenant = TenantUuid::new();

        let mut app = TestApp::new();

        app.warehouses
            .expect_create_warehouse()
            .once()
            .withf(move |new| new.tenant_uuid == tenant && new.name == "Dhaka North")
            .return_once(move |new| {
                Ok(WarehouseRecord {
                    uuid,
                    tenant_uuid: new.tenant_uuid,
                    name: new.name,
                    location: new.location,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        app.warehouses.expect_list_warehouses().never();

        let mut res = TestClient::post("http://example.com/warehouses")
            .json(&json!({ "tenantId": tenant.into_uuid(), "name": "Dhaka North" }))
            .send(&make_service(app))
            .await;

        let body: WarehouseResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(body.id, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_warehouse_empty_name_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.warehouses.expect_create_warehouse().never();
        app.warehouses.expect_list_warehouses().never();

        let res = TestClient::post("http://example.com/warehouses")
            .json(&json!({ "tenantId": Uuid::now_v7(), "name": "" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_warehouse_unknown_tenant_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.warehouses
            .expect_create_warehouse()
            .once()
            .return_once(|_| Err(WarehousesServiceError::InvalidReference));

        app.warehouses.expect_list_warehouses().never();

        let res = TestClient::post("http://example.com/warehouses")
            .json(&json!({ "tenantId": Uuid::now_v7(), "name": "Dhaka North" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
