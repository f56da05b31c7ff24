//! HTTP transport against a canned backend on a local socket.

use std::sync::Arc;

use item_sync::{
    ApiError, DraftField, HttpItemsApi, Item, ItemId, ItemPayload, ItemsApi, SyncConfig, Synchronizer,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Debug, Clone)]
struct RecordedRequest {
    method: String,
    path: String,
    body: String,
}

impl RecordedRequest {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is json")
    }
}

type Handler = Arc<dyn Fn(&RecordedRequest) -> (u16, String) + Send + Sync>;

struct CannedServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl CannedServer {
    async fn start(handler: impl Fn(&RecordedRequest) -> (u16, String) + Send + Sync + 'static) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("addr");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let handler: Handler = Arc::new(handler);

        let requests_bg = Arc::clone(&requests);
        tokio::spawn(async move {
            loop {
                let (mut stream, _) = match listener.accept().await {
                    Ok(v) => v,
                    Err(_) => break,
                };
                let Some(request) = read_request(&mut stream).await else {
                    continue;
                };
                let (status, body) = handler(&request);
                requests_bg.lock().push(request);
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason(status),
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    fn api(&self) -> HttpItemsApi {
        HttpItemsApi::new(SyncConfig::new(&self.base_url)).expect("valid config")
    }

    fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().clone()
    }
}

async fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let header_end = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.lines();
    let mut first = lines.next()?.split_whitespace();
    let method = first.next()?.to_string();
    let path = first.next()?.to_string();
    let content_length = lines
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let end = buf.len().min(header_end + content_length);
    let body = String::from_utf8_lossy(&buf[header_end..end]).to_string();

    Some(RecordedRequest { method, path, body })
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        201 => "Created",
        204 => "No Content",
        404 => "Not Found",
        _ => "Error",
    }
}

fn tea_payload() -> ItemPayload {
    ItemPayload {
        name: "Tea".to_string(),
        description: None,
        price: 4.0,
    }
}

#[tokio::test]
async fn list_fetches_collection() {
    let server = CannedServer::start(|_| {
        (
            200,
            json!([
                {"id": 1, "name": "Coffee", "description": null, "price": 12.5},
                {"id": 2, "name": "Tea", "description": "Green", "price": 4}
            ])
            .to_string(),
        )
    })
    .await;

    let items = server.api().list().await.expect("list");

    assert_eq!(
        items,
        vec![
            Item::new(1, "Coffee", None, 12.5),
            Item::new(2, "Tea", Some("Green"), 4.0),
        ]
    );
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/items");
}

#[tokio::test]
async fn create_posts_payload_with_null_description() {
    let server = CannedServer::start(|_| (201, r#"{"id": 9, "name": "Tea", "description": null, "price": 4.0}"#.to_string())).await;

    server.api().create(&tea_payload()).await.expect("create");

    let requests = server.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/items");
    assert_eq!(
        requests[0].json(),
        json!({"name": "Tea", "description": null, "price": 4.0})
    );
}

#[tokio::test]
async fn update_and_delete_address_the_item() {
    let server = CannedServer::start(|request| match request.method.as_str() {
        "DELETE" => (204, String::new()),
        _ => (200, "{}".to_string()),
    })
    .await;
    let api = server.api();

    api.update(&ItemId::Number(7), &tea_payload()).await.expect("update");
    api.delete(&ItemId::Number(7)).await.expect("delete");

    let requests = server.requests();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/items/7");
    assert_eq!(requests[0].json()["name"], "Tea");
    assert_eq!(requests[1].method, "DELETE");
    assert_eq!(requests[1].path, "/items/7");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = CannedServer::start(|_| (404, r#"{"detail": "Item not found"}"#.to_string())).await;

    let err = server.api().delete(&ItemId::Number(3)).await.unwrap_err();

    assert_eq!(err, ApiError::Status(404));
}

#[tokio::test]
async fn malformed_list_body_is_a_decode_error() {
    let server = CannedServer::start(|_| (200, r#"{"items": []}"#.to_string())).await;

    let err = server.api().list().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)), "got {:?}", err);
}

#[tokio::test]
async fn refused_connection_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let api = HttpItemsApi::new(SyncConfig::new(format!("http://{}", addr))).expect("valid config");
    let err = api.list().await.unwrap_err();

    assert!(matches!(err, ApiError::Network(_)), "got {:?}", err);
}

#[tokio::test]
async fn synchronizer_reloads_after_create() {
    let stored = Arc::new(Mutex::new(Vec::<Value>::new()));
    let backend = Arc::clone(&stored);
    let server = CannedServer::start(move |request| {
        let mut items = backend.lock();
        match request.method.as_str() {
            "POST" => {
                let mut item = request.json();
                item["id"] = json!(items.len() + 1);
                items.push(item.clone());
                (201, item.to_string())
            }
            _ => (200, Value::Array(items.clone()).to_string()),
        }
    })
    .await;
    let sync = Synchronizer::new(server.api());

    sync.load().await.expect("initial load");
    sync.edit_draft(DraftField::Name, "Tea");
    sync.edit_draft(DraftField::Price, "4");
    sync.submit().await.expect("submit");

    let methods: Vec<_> = server.requests().into_iter().map(|r| r.method).collect();
    assert_eq!(methods, vec!["GET", "POST", "GET"]);
    assert_eq!(sync.items(), vec![Item::new(1, "Tea", None, 4.0)]);
    assert!(sync.draft().is_empty());
}
