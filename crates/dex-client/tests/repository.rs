//! Repository tests against a local `tiny_http` server standing in for the API.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread::JoinHandle;

use dex_client::{ClientError, DexClient, Repository};
use dex_config::ApiConfig;
use dex_core::EntityState;
use pretty_assertions::assert_eq;

// ── Mock API ───────────────────────────────────────────────────────

struct MockApi {
    base_url: String,
    server: Arc<tiny_http::Server>,
    hits: Arc<AtomicUsize>,
    worker: Option<JoinHandle<()>>,
}

impl MockApi {
    /// Serve `routes` (request path incl. query → status, body). `{base}` in a
    /// body is replaced with the server's own URL. Unknown paths get a 404.
    fn start(routes: &[(&str, u16, &str)]) -> Self {
        let server = Arc::new(tiny_http::Server::http("127.0.0.1:0").unwrap());
        let port = server.server_addr().to_ip().unwrap().port();
        let base_url = format!("http://127.0.0.1:{port}");

        let routes: HashMap<String, (u16, String)> = routes
            .iter()
            .map(|(path, status, body)| {
                (
                    (*path).to_string(),
                    (*status, body.replace("{base}", &base_url)),
                )
            })
            .collect();

        let hits = Arc::new(AtomicUsize::new(0));
        let worker = {
            let server = Arc::clone(&server);
            let hits = Arc::clone(&hits);
            std::thread::spawn(move || {
                for request in server.incoming_requests() {
                    hits.fetch_add(1, Ordering::SeqCst);
                    let (status, body) = routes
                        .get(request.url())
                        .cloned()
                        .unwrap_or_else(|| (404, String::from("Not Found")));
                    let response = tiny_http::Response::from_string(body)
                        .with_status_code(status)
                        .with_header(
                            tiny_http::Header::from_bytes("Content-Type", "application/json")
                                .unwrap(),
                        );
                    let _ = request.respond(response);
                }
            })
        };

        Self {
            base_url,
            server,
            hits,
            worker: Some(worker),
        }
    }

    fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn repository(&self, page_limit: u32, include_weight: bool) -> Repository {
        repository_for(&self.base_url, page_limit, include_weight)
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

fn repository_for(base_url: &str, page_limit: u32, include_weight: bool) -> Repository {
    let config = ApiConfig {
        base_url: base_url.to_string(),
        page_limit,
        ..Default::default()
    };
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    Repository::new(DexClient::with_http(http, &config), include_weight)
}

const LISTING: &str = r#"{
    "count": 3,
    "results": [
        { "name": "bulbasaur", "url": "{base}/pokemon/1/" },
        { "name": "ivysaur", "url": "{base}/pokemon/2/" },
        { "name": "venusaur", "url": "{base}/pokemon/3/" }
    ]
}"#;

const BULBASAUR: &str = r#"{
    "height": 7,
    "weight": 69,
    "sprites": { "front_default": "https://img.example/1.png" },
    "types": [
        { "slot": 1, "type": { "name": "grass" } },
        { "slot": 2, "type": { "name": "poison" } }
    ]
}"#;

// ── load_all ───────────────────────────────────────────────────────

#[tokio::test]
async fn load_all_appends_entries_in_order_with_capitalized_names() {
    let api = MockApi::start(&[("/pokemon/?limit=3", 200, LISTING)]);
    let repo = api.repository(3, true);

    let count = repo.load_all().await.unwrap();
    assert_eq!(count, 3);

    let entities = repo.snapshot().await;
    let names: Vec<&str> = entities.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Bulbasaur", "Ivysaur", "Venusaur"]);
    assert_eq!(
        entities[1].details_url,
        format!("{}/pokemon/2/", api.base_url)
    );
    assert!(entities.iter().all(|e| e.state() == EntityState::Summary));
}

#[tokio::test]
async fn load_all_handles_empty_name() {
    let listing = r#"{ "results": [ { "name": "", "url": "{base}/pokemon/0/" } ] }"#;
    let api = MockApi::start(&[("/pokemon/?limit=1", 200, listing)]);
    let repo = api.repository(1, true);

    assert_eq!(repo.load_all().await.unwrap(), 1);
    assert_eq!(repo.snapshot().await[0].name, "");
}

#[tokio::test]
async fn load_all_empty_listing_adds_nothing() {
    let api = MockApi::start(&[("/pokemon/?limit=3", 200, r#"{ "results": [] }"#)]);
    let repo = api.repository(3, true);

    assert_eq!(repo.load_all().await.unwrap(), 0);
    assert!(repo.is_empty().await);
    assert!(repo.get_all().await.is_empty());
    assert!(repo.find("Bulbasaur").await.is_none());
}

#[tokio::test]
async fn load_all_twice_duplicates_entries() {
    let api = MockApi::start(&[("/pokemon/?limit=3", 200, LISTING)]);
    let repo = api.repository(3, true);

    repo.load_all().await.unwrap();
    repo.load_all().await.unwrap();

    assert_eq!(repo.len().await, 6);
    assert_eq!(repo.find("Ivysaur").await.map(|m| m.len()), Some(2));
    assert_eq!(api.hits(), 2);
}

#[tokio::test]
async fn load_all_server_error_adds_nothing() {
    let api = MockApi::start(&[("/pokemon/?limit=3", 500, "boom")]);
    let repo = api.repository(3, true);

    let err = repo.load_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, .. }));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn load_all_malformed_json_adds_nothing() {
    let api = MockApi::start(&[("/pokemon/?limit=3", 200, "{ not json")]);
    let repo = api.repository(3, true);

    let err = repo.load_all().await.unwrap_err();
    assert!(matches!(err, ClientError::Http(_)));
    assert!(repo.is_empty().await);
}

#[tokio::test]
async fn load_all_connection_refused_adds_nothing() {
    let base_url = {
        let api = MockApi::start(&[]);
        api.base_url.clone()
    };
    let repo = repository_for(&base_url, 3, true);

    assert!(repo.load_all().await.is_err());
    assert!(repo.is_empty().await);
}

// ── find ───────────────────────────────────────────────────────────

#[tokio::test]
async fn find_after_load_is_exact_and_case_sensitive() {
    let api = MockApi::start(&[("/pokemon/?limit=3", 200, LISTING)]);
    let repo = api.repository(3, true);
    repo.load_all().await.unwrap();

    assert_eq!(repo.find("Venusaur").await.map(|m| m.len()), Some(1));
    assert!(repo.find("venusaur").await.is_none());
    assert!(repo.find("Venu").await.is_none());
}

// ── load_details ───────────────────────────────────────────────────

#[tokio::test]
async fn load_details_enriches_shared_handle() {
    let api = MockApi::start(&[
        ("/pokemon/?limit=3", 200, LISTING),
        ("/pokemon/1/", 200, BULBASAUR),
    ]);
    let repo = api.repository(3, true);
    repo.load_all().await.unwrap();

    let all = repo.get_all().await;
    let found = repo.find("Bulbasaur").await.unwrap();
    repo.load_details(&found[0]).await.unwrap();

    // Observed through the handle obtained before enrichment.
    let entity = all[0].read().await;
    assert_eq!(entity.state(), EntityState::Detailed);
    assert_eq!(entity.name, "Bulbasaur");
    assert_eq!(entity.details_url, format!("{}/pokemon/1/", api.base_url));
    assert_eq!(entity.image_url(), Some("https://img.example/1.png"));
    assert_eq!(entity.height(), Some(7));
    assert_eq!(entity.weight(), Some(69));
    assert_eq!(entity.types_joined().as_deref(), Some("grass, poison"));
}

#[tokio::test]
async fn load_details_without_weight_when_disabled() {
    let api = MockApi::start(&[
        ("/pokemon/?limit=3", 200, LISTING),
        ("/pokemon/1/", 200, BULBASAUR),
    ]);
    let repo = api.repository(3, false);
    repo.load_all().await.unwrap();

    let handle = repo.find("Bulbasaur").await.unwrap().remove(0);
    repo.load_details(&handle).await.unwrap();

    let entity = handle.read().await;
    assert_eq!(entity.height(), Some(7));
    assert!(entity.weight().is_none());
}

#[tokio::test]
async fn load_details_failure_leaves_entity_summary_only() {
    // No route for /pokemon/2/, so the detail request 404s.
    let api = MockApi::start(&[("/pokemon/?limit=3", 200, LISTING)]);
    let repo = api.repository(3, true);
    repo.load_all().await.unwrap();

    let handle = repo.find("Ivysaur").await.unwrap().remove(0);
    let before = handle.read().await.clone();

    let err = repo.load_details(&handle).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 404, .. }));

    let after = handle.read().await.clone();
    assert_eq!(after, before);
    assert_eq!(after.state(), EntityState::Summary);
}

#[tokio::test]
async fn load_details_partial_payload_sets_nothing() {
    let api = MockApi::start(&[
        ("/pokemon/?limit=3", 200, LISTING),
        ("/pokemon/3/", 200, r#"{ "weight": 1000, "types": [] }"#),
    ]);
    let repo = api.repository(3, true);
    repo.load_all().await.unwrap();

    let handle = repo.find("Venusaur").await.unwrap().remove(0);
    assert!(repo.load_details(&handle).await.is_err());
    assert!(handle.read().await.details.is_none());
}

#[tokio::test]
async fn load_details_missing_weight_sets_nothing() {
    let no_weight = r#"{
        "height": 7,
        "sprites": { "front_default": "https://img.example/1.png" },
        "types": [ { "slot": 1, "type": { "name": "grass" } } ]
    }"#;
    let api = MockApi::start(&[
        ("/pokemon/?limit=3", 200, LISTING),
        ("/pokemon/1/", 200, no_weight),
    ]);
    let repo = api.repository(3, true);
    repo.load_all().await.unwrap();

    let handle = repo.find("Bulbasaur").await.unwrap().remove(0);
    let err = repo.load_details(&handle).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingField("weight")));

    let entity = handle.read().await;
    assert_eq!(entity.state(), EntityState::Summary);
    assert!(entity.details.is_none());
}

#[tokio::test]
async fn load_details_missing_weight_accepted_when_not_collected() {
    let no_weight = r#"{ "height": 7, "sprites": { "front_default": null }, "types": [] }"#;
    let api = MockApi::start(&[
        ("/pokemon/?limit=3", 200, LISTING),
        ("/pokemon/1/", 200, no_weight),
    ]);
    let repo = api.repository(3, false);
    repo.load_all().await.unwrap();

    let handle = repo.find("Bulbasaur").await.unwrap().remove(0);
    repo.load_details(&handle).await.unwrap();
    assert_eq!(handle.read().await.state(), EntityState::Detailed);
}

#[tokio::test]
async fn load_details_twice_issues_two_requests() {
    let api = MockApi::start(&[
        ("/pokemon/?limit=3", 200, LISTING),
        ("/pokemon/1/", 200, BULBASAUR),
    ]);
    let repo = api.repository(3, true);
    repo.load_all().await.unwrap();

    let handle = repo.find("Bulbasaur").await.unwrap().remove(0);
    repo.load_details(&handle).await.unwrap();
    repo.load_details(&handle).await.unwrap();

    assert_eq!(api.hits(), 3);
    assert_eq!(handle.read().await.height(), Some(7));
}

#[tokio::test]
#[ignore] // requires network
async fn live_load_all_and_details() {
    let repo = Repository::from_config(&dex_config::DexConfig::default()).unwrap();
    let count = repo.load_all().await.unwrap();
    assert_eq!(count, 150);

    let pikachu = repo.find("Pikachu").await.unwrap().remove(0);
    repo.load_details(&pikachu).await.unwrap();
    println!("{:#?}", pikachu.read().await);
}
