use std::time::Duration;

use eproc_api::auth::transport_builder;
use eproc_api::user_agent::DEFAULT_USER_AGENT;
use eproc_api::{AuthConfig, AuthState, Error, SessionAuthenticator};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOGIN_PATH: &str = "/eproc/lib/priv/login_cert.php";
const ENTRY_PATH: &str = "/eproc/externo_controlador.php";
const EXPECTED_REDIRECT: &str = "../../externo_controlador.php?acao=entrar_cert";
const HASH: &str = "0123456789abcdef0123456789abcdef";

fn authenticator(server: &MockServer) -> SessionAuthenticator {
    let config = AuthConfig::new("unused.pfx", "secret").with_base_url(&server.uri());
    let transport = transport_builder(DEFAULT_USER_AGENT, Duration::from_secs(5))
        .build()
        .unwrap();
    SessionAuthenticator::with_transport(config, transport).unwrap()
}

fn login_response(location: &str, cookies: &[&str]) -> ResponseTemplate {
    let mut template = ResponseTemplate::new(302).insert_header("Location", location);
    for cookie in cookies {
        template = template.append_header("Set-Cookie", *cookie);
    }
    template
}

async fn mount_home(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(ENTRY_PATH))
        .and(query_param("acao", "entrar_cert"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("controlador.php?acao=principal&hash={}", HASH)),
        )
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/eproc/controlador.php"))
        .and(query_param("acao", "principal"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>home</html>"))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_authenticate_captures_cookies_and_home_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .respond_with(login_response(
            EXPECTED_REDIRECT,
            &["PHPSESSID=abc123; path=/; HttpOnly", "infra_sessao=xyz; Secure"],
        ))
        .expect(1)
        .mount(&server)
        .await;
    mount_home(&server).await;

    let auth = authenticator(&server);
    auth.authenticate().await.unwrap();

    assert_eq!(auth.state(), AuthState::Authenticated);
    let cookies = auth.session_cookies().unwrap();
    assert_eq!(cookies.len(), 2);
    assert_eq!(cookies.get("PHPSESSID"), Some("abc123"));
    assert_eq!(
        auth.cookie_header().unwrap(),
        "PHPSESSID=abc123; infra_sessao=xyz"
    );

    let home = auth.home_url().unwrap();
    assert!(home.as_str().contains("hash="));
    assert_eq!(
        home.as_str(),
        format!("{}/eproc/controlador.php?acao=principal&hash={}", server.uri(), HASH)
    );
}

#[tokio::test]
async fn test_entry_page_receives_session_cookies() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .respond_with(login_response(EXPECTED_REDIRECT, &["PHPSESSID=abc123; path=/"]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ENTRY_PATH))
        .and(header("Cookie", "PHPSESSID=abc123"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("controlador.php?acao=principal&hash={}", HASH)),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/eproc/controlador.php"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let auth = authenticator(&server);
    auth.authenticate().await.unwrap();
}

#[tokio::test]
async fn test_colliding_cookie_names_keep_last_value() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .respond_with(login_response(
            EXPECTED_REDIRECT,
            &["PHPSESSID=first; path=/", "lang=pt", "PHPSESSID=second; path=/eproc"],
        ))
        .mount(&server)
        .await;
    mount_home(&server).await;

    let auth = authenticator(&server);
    auth.authenticate().await.unwrap();

    let cookies = auth.session_cookies().unwrap();
    assert_eq!(cookies.len(), 2);
    assert_eq!(cookies.get("PHPSESSID"), Some("second"));
    assert_eq!(auth.cookie_header().unwrap(), "PHPSESSID=second; lang=pt");
}

#[tokio::test]
async fn test_unexpected_redirect_target_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .respond_with(login_response(
            "../../externo_controlador.php?acao=login_falhou",
            &["PHPSESSID=abc123"],
        ))
        .mount(&server)
        .await;

    let auth = authenticator(&server);
    let err = auth.authenticate().await.unwrap_err();

    assert!(matches!(err, Error::Authentication(_)));
    assert_eq!(auth.state(), AuthState::Failed);
    assert!(auth.session().is_none());
    assert!(auth.cookie_header().is_none());
}

#[tokio::test]
async fn test_non_redirect_login_status_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let auth = authenticator(&server);
    let err = auth.authenticate().await.unwrap_err();
    assert!(matches!(err, Error::Authentication(_)));
    assert!(auth.home_url().is_none());
}

#[tokio::test]
async fn test_missing_hash_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .respond_with(login_response(EXPECTED_REDIRECT, &["PHPSESSID=abc123"]))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(ENTRY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&server)
        .await;

    let auth = authenticator(&server);
    let err = auth.authenticate().await.unwrap_err();

    match err {
        Error::Authentication(msg) => assert!(msg.contains("hash is missing")),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(auth.state(), AuthState::Failed);
}

#[tokio::test]
async fn test_reauthenticating_overwrites_session() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .respond_with(login_response(EXPECTED_REDIRECT, &["PHPSESSID=first"]))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(LOGIN_PATH))
        .respond_with(login_response(EXPECTED_REDIRECT, &["PHPSESSID=second"]))
        .expect(1)
        .mount(&server)
        .await;
    mount_home(&server).await;

    let auth = authenticator(&server);
    auth.authenticate().await.unwrap();
    assert_eq!(auth.cookie_header().unwrap(), "PHPSESSID=first");

    auth.authenticate().await.unwrap();
    assert_eq!(auth.cookie_header().unwrap(), "PHPSESSID=second");
    assert_eq!(auth.state(), AuthState::Authenticated);
}
