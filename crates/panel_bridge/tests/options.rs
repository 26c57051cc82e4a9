use std::sync::Once;

use panel_bridge::{resolve_card_size, resolve_theme, HttpOptionsSource, DISPLAY_OPTIONS_PATH};
use panel_core::CardSize;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(panel_logging::initialize_for_tests);
}

async fn server_with_body(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DISPLAY_OPTIONS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn theme_and_size_come_from_the_endpoint() {
    init_logging();
    let server =
        server_with_body(r#"{"theme": "dark", "card_width": 300, "card_height": 420}"#).await;
    let source = HttpOptionsSource::new(server.uri());

    let theme = resolve_theme("http://127.0.0.1:7860/", &source).await;
    assert_eq!(theme, "dark");

    let size = resolve_card_size(&source).await;
    assert_eq!(
        size,
        CardSize {
            width: 300,
            height: 420
        }
    );
}

#[tokio::test]
async fn url_theme_parameter_skips_the_request() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DISPLAY_OPTIONS_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let source = HttpOptionsSource::new(server.uri());

    let theme = resolve_theme("http://127.0.0.1:7860/?__theme=dark", &source).await;
    assert_eq!(theme, "dark");
}

#[tokio::test]
async fn http_error_falls_back_to_defaults() {
    init_logging();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(DISPLAY_OPTIONS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let source = HttpOptionsSource::new(server.uri());

    assert_eq!(resolve_theme("http://127.0.0.1:7860/", &source).await, "light");
    assert_eq!(resolve_card_size(&source).await, CardSize::FALLBACK);
    assert_eq!(
        CardSize::FALLBACK,
        CardSize {
            width: 250,
            height: 350
        }
    );
}

#[tokio::test]
async fn malformed_body_falls_back_to_defaults() {
    init_logging();
    let server = server_with_body(r#"{"theme": 12}"#).await;
    let source = HttpOptionsSource::new(server.uri());

    assert_eq!(resolve_theme("http://127.0.0.1:7860/", &source).await, "light");
    assert_eq!(resolve_card_size(&source).await, CardSize::FALLBACK);
}

#[tokio::test]
async fn unreachable_host_falls_back_to_defaults() {
    init_logging();
    // Nothing listens here; connection is refused immediately.
    let source = HttpOptionsSource::new("http://127.0.0.1:1");

    assert_eq!(resolve_theme("http://127.0.0.1:7860/", &source).await, "light");
    assert_eq!(resolve_card_size(&source).await, CardSize::FALLBACK);
}
