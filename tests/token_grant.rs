use std::sync::{Arc, Mutex};

use mockito::{Matcher, Server};
use serde_json::json;

use ecoverse_client::auth::{AuthConfig, AuthConfigFactory, AuthenticationClient};

fn base_config() -> AuthConfig {
    AuthConfig {
        client_id: "app-id".into(),
        client_secret: "s3cret".into(),
        scope: "hub.default".into(),
        tenant: "contoso".into(),
        username: "user@contoso.org".into(),
        password: "hunter2".into(),
    }
}

fn fixed(config: AuthConfig) -> AuthConfigFactory {
    Arc::new(move || config.clone())
}

#[tokio::test]
async fn password_flow_sends_exactly_the_ropc_fields() {
    let mut server = Server::new_async().await;
    let client = AuthenticationClient::with_issuer(server.url(), fixed(base_config())).unwrap();

    let mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .match_header(
            "content-type",
            Matcher::Exact("application/x-www-form-urlencoded".into()),
        )
        .match_body(Matcher::Exact(
            "client_id=app-id&scope=hub.default&username=user%40contoso.org\
             &password=hunter2&grant_type=password"
                .into(),
        ))
        .with_body(r#"{"access_token":"abc","token_type":"Bearer"}"#)
        .create_async()
        .await;

    let outcome = client.authenticate_password_credentials().await.unwrap();
    assert!(outcome.granted().is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn client_credentials_flow_omits_resource_owner_fields() {
    let mut server = Server::new_async().await;
    let client = AuthenticationClient::with_issuer(server.url(), fixed(base_config())).unwrap();

    let mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .match_body(Matcher::Exact(
            "client_id=app-id&client_secret=s3cret&scope=hub.default\
             &grant_type=client_credentials"
                .into(),
        ))
        .with_body(r#"{"access_token":"abc","token_type":"Bearer"}"#)
        .create_async()
        .await;

    let outcome = client.authenticate_client_credentials().await.unwrap();
    assert!(outcome.granted().is_some());
    mock.assert_async().await;
}

#[tokio::test]
async fn success_body_comes_back_as_a_token() {
    let mut server = Server::new_async().await;
    let client = AuthenticationClient::with_issuer(server.url(), fixed(base_config())).unwrap();

    let _mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .with_status(200)
        .with_body(r#"{"access_token":"abc","token_type":"Bearer"}"#)
        .create_async()
        .await;

    let outcome = client.authenticate_client_credentials().await.unwrap();
    let token = outcome.granted().expect("expected a granted token");
    assert_eq!(token.access_token, "abc");
    assert_eq!(token.token_type, "Bearer");
    assert_eq!(
        serde_json::to_value(token).unwrap(),
        json!({"access_token": "abc", "token_type": "Bearer"})
    );
}

#[tokio::test]
async fn rejection_body_comes_back_as_a_token_error_not_a_failure() {
    let mut server = Server::new_async().await;
    let client = AuthenticationClient::with_issuer(server.url(), fixed(base_config())).unwrap();

    let _mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .with_status(400)
        .with_body(r#"{"error":"invalid_grant"}"#)
        .create_async()
        .await;

    let outcome = client.authenticate_password_credentials().await.unwrap();
    let err = outcome.denied().expect("expected a denied outcome");
    assert_eq!(err.error, "invalid_grant");
    assert_eq!(
        serde_json::to_value(err).unwrap(),
        json!({"error": "invalid_grant"})
    );
}

#[tokio::test]
async fn connection_failure_raises() {
    // Nothing listens here; the send itself fails.
    let client =
        AuthenticationClient::with_issuer("http://127.0.0.1:9", fixed(base_config())).unwrap();

    let result = client.authenticate_client_credentials().await;
    let err = result.expect_err("expected a transport fault");
    assert!(err.to_string().contains("sending token request"));
}

#[tokio::test]
async fn repeated_grants_with_fixed_config_are_identical() {
    let mut server = Server::new_async().await;
    let client = AuthenticationClient::with_issuer(server.url(), fixed(base_config())).unwrap();

    let mock = server
        .mock("POST", "/contoso/oauth2/v2.0/token")
        .with_body(r#"{"access_token":"abc","token_type":"Bearer","expires_in":3599}"#)
        .expect(2)
        .create_async()
        .await;

    let first = client.authenticate_client_credentials().await.unwrap();
    let second = client.authenticate_client_credentials().await.unwrap();
    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn tenant_is_re_resolved_on_every_attempt() {
    let mut server = Server::new_async().await;

    let tenant = Arc::new(Mutex::new("tenant-one".to_string()));
    let tenant_for_factory = tenant.clone();
    let factory: AuthConfigFactory = Arc::new(move || AuthConfig {
        tenant: tenant_for_factory.lock().unwrap().clone(),
        ..base_config()
    });
    let client = AuthenticationClient::with_issuer(server.url(), factory).unwrap();

    let expected_body = Matcher::Exact(
        "client_id=app-id&client_secret=s3cret&scope=hub.default\
         &grant_type=client_credentials"
            .into(),
    );
    let first = server
        .mock("POST", "/tenant-one/oauth2/v2.0/token")
        .match_body(expected_body.clone())
        .with_body(r#"{"access_token":"abc","token_type":"Bearer"}"#)
        .create_async()
        .await;
    let second = server
        .mock("POST", "/tenant-two/oauth2/v2.0/token")
        .match_body(expected_body)
        .with_body(r#"{"access_token":"abc","token_type":"Bearer"}"#)
        .create_async()
        .await;

    client.authenticate_client_credentials().await.unwrap();
    *tenant.lock().unwrap() = "tenant-two".to_string();
    client.authenticate_client_credentials().await.unwrap();

    // Only the path's tenant segment moved between the two requests; the
    // body matcher above pins everything else.
    first.assert_async().await;
    second.assert_async().await;
}
