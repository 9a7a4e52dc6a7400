//! Create User Handler

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront::users::{NewUser, User};

use crate::{
    extensions::*,
    outcome::settle,
    users::views::{self, RoleField},
};

/// Create Account Request
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateUserRequest {
    /// Display name
    pub name: String,

    /// Contact email
    pub email: String,

    /// Plain-text password
    pub password: String,

    /// Whether the account starts enabled
    #[serde(default = "active_by_default")]
    pub active: bool,

    /// Account role
    #[serde(default)]
    pub role: RoleField,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            email: request.email,
            password: request.password,
            role: request.role.into(),
            active: request.active,
        }
    }
}

/// Create-account form fields to redisplay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct UserForm {
    /// Name field
    pub name: String,

    /// Email field
    pub email: String,

    /// Password field
    pub password: String,

    /// Active checkbox
    pub active: bool,
}

impl UserForm {
    /// Blank form, ready for the next account.
    fn reset() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            active: active_by_default(),
        }
    }
}

impl From<&CreateUserRequest> for UserForm {
    fn from(request: &CreateUserRequest) -> Self {
        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            password: request.password.clone(),
            active: request.active,
        }
    }
}

/// Create Account Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateUserResponse {
    /// Success summary or error message
    pub message: String,

    /// Form values: reset on success, echoed back on failure
    pub form: UserForm,
}

const fn active_by_default() -> bool {
    true
}

fn created(user: &User) -> String {
    format!("User created.\n{}", views::summary(user))
}

/// Create User Handler
///
/// Gateway failures are reported in `message` with the submitted form
/// echoed back; they never change the HTTP status.
#[endpoint(tags("users"), summary = "Create Account")]
pub(crate) async fn handler(
    json: JsonBody<CreateUserRequest>,
    depot: &mut Depot,
) -> Result<Json<CreateUserResponse>, StatusError> {
    let state = depot.state()?;
    let request = json.into_inner();
    let submitted = UserForm::from(&request);

    let response = match settle(
        "create_user",
        state.app.users.create_user(request.into()).await,
    ) {
        Ok(user) => CreateUserResponse {
            message: created(&user),
            form: UserForm::reset(),
        },
        Err(message) => CreateUserResponse {
            message,
            form: submitted,
        },
    };

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront::users::Role;
    use storefront_app::{domain::users::MockUsersService, gateway::GatewayError};

    use crate::{test_helpers::users_service, users::views::make_user};

    use super::*;

    fn make_service(users: MockUsersService) -> Service {
        users_service(users, Router::with_path("users").post(handler))
    }

    fn form() -> serde_json::Value {
        json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter22",
            "active": false,
        })
    }

    #[tokio::test]
    async fn test_create_user_success_resets_form() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .withf(|user| {
                user.name == "Ada"
                    && user.password == "hunter22"
                    && !user.active
                    && user.role == Role::Customer
            })
            .return_once(|_| {
                Ok(User {
                    active: false,
                    ..make_user("u-1", "Ada")
                })
            });

        let response: CreateUserResponse = TestClient::post("http://example.com/users")
            .json(&form())
            .send(&make_service(users))
            .await
            .take_json()
            .await?;

        assert!(response.message.contains("ID: u-1"), "missing id");
        assert!(response.message.contains("Name: Ada"), "missing name");
        assert!(
            response.message.contains("Email: ada@example.com"),
            "missing email"
        );
        assert!(response.message.contains("Active: false"), "missing active");
        assert_eq!(response.form, UserForm::reset());
        assert!(response.form.active, "active resets to true");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_application_error_echoes_form() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .return_once(|_| Err(GatewayError::Application("email already taken".into())));

        let mut res = TestClient::post("http://example.com/users")
            .json(&form())
            .send(&make_service(users))
            .await;

        let response: CreateUserResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.message, "email already taken");
        assert_eq!(response.form.name, "Ada");
        assert_eq!(response.form.password, "hunter22");
        assert!(!response.form.active, "submitted value is kept");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_no_response() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .return_once(|_| Err(GatewayError::NoResponse));

        let response: CreateUserResponse = TestClient::post("http://example.com/users")
            .json(&form())
            .send(&make_service(users))
            .await
            .take_json()
            .await?;

        assert_eq!(response.message, "Error: no response from server");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_unexpected_format_embeds_payload() -> TestResult {
        let mut users = MockUsersService::new();

        users.expect_create_user().once().return_once(|_| {
            Err(GatewayError::Shape {
                operation: "createUser",
                payload: r#"{"data":{"other":1}}"#.into(),
            })
        });

        let response: CreateUserResponse = TestClient::post("http://example.com/users")
            .json(&form())
            .send(&make_service(users))
            .await
            .take_json()
            .await?;

        assert!(
            response.message.contains("unexpected response format"),
            "expected format error"
        );
        assert!(
            response.message.contains(r#"{"data":{"other":1}}"#),
            "expected raw payload"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_defaults_active_and_role() -> TestResult {
        let mut users = MockUsersService::new();

        users
            .expect_create_user()
            .once()
            .withf(|user| user.active && user.role == Role::Customer)
            .return_once(|_| Ok(make_user("u-2", "Grace")));

        let res = TestClient::post("http://example.com/users")
            .json(&json!({ "name": "Grace", "email": "grace@example.com", "password": "pw" }))
            .send(&make_service(users))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_user_malformed_body_returns_400() -> TestResult {
        let res = TestClient::post("http://example.com/users")
            .json(&json!({ "name": "Ada" }))
            .send(&make_service(MockUsersService::new()))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
