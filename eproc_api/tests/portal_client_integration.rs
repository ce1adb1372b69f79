use std::time::Duration;

use eproc_api::auth::transport_builder;
use eproc_api::types::DocumentSearchResponse;
use eproc_api::user_agent::DEFAULT_USER_AGENT;
use eproc_api::{AuthConfig, DocumentSearchForm, Error, PortalClient, QuickSearchForm, SessionAuthenticator};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const HASH: &str = "0123456789abcdef0123456789abcdef";

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

async fn logged_in_server() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/eproc/lib/priv/login_cert.php"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", "../../externo_controlador.php?acao=entrar_cert")
                .append_header("Set-Cookie", "PHPSESSID=abc123; path=/"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/eproc/externo_controlador.php"))
        .respond_with(
            ResponseTemplate::new(302)
                .insert_header("Location", format!("controlador.php?acao=principal&hash={}", HASH)),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/eproc/controlador.php"))
        .and(query_param("acao", "principal"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>home</html>"))
        .mount(&server)
        .await;

    server
}

fn client(server: &MockServer) -> PortalClient {
    let config = AuthConfig::new("unused.pfx", "secret").with_base_url(&server.uri());
    let transport = transport_builder(DEFAULT_USER_AGENT, Duration::from_secs(5))
        .build()
        .unwrap();
    PortalClient::new(SessionAuthenticator::with_transport(config, transport).unwrap())
}

#[test]
fn test_deserialize_document_search_fixture() {
    let json = load_fixture("document_search.json");
    let resp: DocumentSearchResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(resp.resultados.len(), 2);
    assert!(resp.resultados[0]
        .link_processo_assinado
        .starts_with("controlador.php?acao=processo_selecionar"));
}

#[test]
fn test_deserialize_document_search_without_results() {
    let resp: DocumentSearchResponse = serde_json::from_str("{}").unwrap();
    assert!(resp.resultados.is_empty());
}

#[tokio::test]
async fn test_get_page_authenticates_once_and_decodes_latin1() {
    let server = logged_in_server().await;

    Mock::given(method("GET"))
        .and(path("/eproc/pagina.php"))
        .and(header("Cookie", "PHPSESSID=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x41, 0xE7, 0xE3, 0x6F]))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.urls().resolve("pagina.php").unwrap();

    assert_eq!(client.get_page(url.clone()).await.unwrap(), "Ação");
    assert_eq!(client.get_page(url).await.unwrap(), "Ação");
}

#[tokio::test]
async fn test_get_page_error_status() {
    let server = logged_in_server().await;

    Mock::given(method("GET"))
        .and(path("/eproc/pagina.php"))
        .respond_with(ResponseTemplate::new(500).set_body_string("erro"))
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.urls().resolve("pagina.php").unwrap();
    let err = client.get_page(url).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
}

#[tokio::test]
async fn test_redirect_loop_is_capped() {
    let server = logged_in_server().await;

    Mock::given(method("GET"))
        .and(path("/eproc/loop.php"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "loop.php"))
        .expect(11)
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.urls().resolve("loop.php").unwrap();
    let err = client.get_page(url).await.unwrap_err();
    assert!(matches!(err, Error::TooManyRedirects(start) if start.ends_with("/eproc/loop.php")));
}

#[tokio::test]
async fn test_quick_search_redirect_resolved_against_portal_dir() {
    let server = logged_in_server().await;

    Mock::given(method("POST"))
        .and(path("/eproc/controlador.php"))
        .and(query_param("acao", "processo_pesquisa_rapida"))
        .and(body_string_contains("txtNumProcessoPesquisaRapida=50012345620238210001"))
        .and(body_string_contains("acao_retorno_pesquisa_rapida=processo_consultar"))
        .respond_with(ResponseTemplate::new(302).insert_header(
            "Location",
            "controlador.php?acao=processo_selecionar&num_processo=50012345620238210001",
        ))
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client
        .urls()
        .resolve(&format!("controlador.php?acao=processo_pesquisa_rapida&hash={}", HASH))
        .unwrap();
    let target = client
        .post_form_for_redirect(url, &QuickSearchForm::new("50012345620238210001"))
        .await
        .unwrap();

    assert_eq!(
        target.as_str(),
        format!(
            "{}/eproc/controlador.php?acao=processo_selecionar&num_processo=50012345620238210001",
            server.uri()
        )
    );
}

#[tokio::test]
async fn test_quick_search_without_redirect_fails() {
    let server = logged_in_server().await;

    Mock::given(method("POST"))
        .and(path("/eproc/controlador.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>nada</html>"))
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.urls().resolve("controlador.php?acao=processo_pesquisa_rapida").unwrap();
    let err = client
        .post_form_for_redirect(url, &QuickSearchForm::new("1"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 200, .. }));
}

#[tokio::test]
async fn test_document_search_posts_form_and_parses_json() {
    let server = logged_in_server().await;

    Mock::given(method("POST"))
        .and(path("/eproc/controlador_ajax.php"))
        .and(header("Content-Type", "application/x-www-form-urlencoded; charset=UTF-8"))
        .and(body_string_contains("strDocParte=52998224725"))
        .respond_with(ResponseTemplate::new(200).set_body_string(load_fixture("document_search.json")))
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client
        .urls()
        .resolve("controlador_ajax.php?acao_ajax=processos_consulta_por_documento_identificacao")
        .unwrap();
    let resp: DocumentSearchResponse = client
        .post_form_json(url, &DocumentSearchForm::new("52998224725"))
        .await
        .unwrap();
    assert_eq!(resp.resultados.len(), 2);
}

#[tokio::test]
async fn test_malformed_json_is_reported() {
    let server = logged_in_server().await;

    Mock::given(method("POST"))
        .and(path("/eproc/controlador_ajax.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>sessão expirada</html>"))
        .mount(&server)
        .await;

    let client = client(&server);
    let url = client.urls().resolve("controlador_ajax.php").unwrap();
    let result: Result<DocumentSearchResponse, Error> = client
        .post_form_json(url, &DocumentSearchForm::new("52998224725"))
        .await;
    assert!(matches!(result.unwrap_err(), Error::Json(_)));
}
