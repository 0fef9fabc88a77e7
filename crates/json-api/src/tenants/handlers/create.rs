//! Create Tenant Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use bazaar_app::domain::tenants::records::NewTenant;

use crate::{
    extensions::*,
    state::State,
    tenants::{errors::into_status_error, handlers::index::TenantResponse},
    validate::{Validate, ValidationError, min_len},
};

/// Create Tenant Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateTenantRequest {
    /// Display name, at least two characters
    pub name: String,
    /// Unique domain, at least three characters
    pub domain: String,
}

impl Validate for CreateTenantRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        min_len("name", &self.name, 2)?;
        min_len("domain", &self.domain, 3)?;

        Ok(())
    }
}

impl From<CreateTenantRequest> for NewTenant {
    fn from(request: CreateTenantRequest) -> Self {
        Self {
            name: request.name,
            domain: request.domain,
        }
    }
}

/// Create Tenant Handler
#[endpoint(
    tags("tenants"),
    summary = "Create Tenant",
    responses(
        (status_code = StatusCode::CREATED, description = "Tenant created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation or write failure"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateTenantRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<TenantResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let request = json.into_inner();

    request
        .validate()
        .map_err(ValidationError::into_status_error)?;

    let created = state
        .app
        .tenants
        .create_tenant(request.into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/tenants/{}", created.uuid), true)
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

    use bazaar_app::domain::tenants::{
        TenantsServiceError,
        records::{TenantRecord, TenantUuid},
    };

    use crate::test_helpers::TestApp;

    use super::*;

    fn make_service(app: TestApp) -> Service {
        app.into_service(Router::with_path("tenants").post(handler))
    }

    #[tokio::test]
    async fn test_create_tenant_success() -> TestResult {
        let uuid = TenantUuid::new();

        let mut app = TestApp::new();

        app.tenants
            .expect_create_tenant()
            .once()
            .withf(|new| new.name == "Acme Outfitters" && new.domain == "acme.example")
            .return_once(move |new| {
                Ok(TenantRecord {
                    uuid,
                    name: new.name,
                    domain: new.domain,
                    created_at: Timestamp::UNIX_EPOCH,
                    updated_at: Timestamp::UNIX_EPOCH,
                })
            });

        app.tenants.expect_list_tenants().never();

        let mut res = TestClient::post("http://example.com/tenants")
            .json(&json!({ "name": "Acme Outfitters", "domain": "acme.example" }))
            .send(&make_service(app))
            .await;

        let body: TenantResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/tenants/{uuid}").as_str()));
        assert_eq!(body.id, uuid.into_uuid());
        assert_eq!(body.domain, "acme.example");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tenant_short_name_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.tenants.expect_create_tenant().never();
        app.tenants.expect_list_tenants().never();

        let res = TestClient::post("http://example.com/tenants")
            .json(&json!({ "name": "A", "domain": "acme.example" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tenant_short_domain_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.tenants.expect_create_tenant().never();
        app.tenants.expect_list_tenants().never();

        let res = TestClient::post("http://example.com/tenants")
            .json(&json!({ "name": "Acme", "domain": "ab" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tenant_duplicate_domain_returns_400() -> TestResult {
        let mut app = TestApp::new();

        app.tenants
            .expect_create_tenant()
            .once()
            .return_once(|_| Err(TenantsServiceError::AlreadyExists));

        app.tenants.expect_list_tenants().never();

        let res = TestClient::post("http://example.com/tenants")
            .json(&json!({ "name": "Acme", "domain": "acme.example" }))
            .send(&make_service(app))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
