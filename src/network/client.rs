//! HTTP client wrapper - typed API calls over a pluggable transport

use std::future::Future;
use std::time::{Duration, Instant};

use reqwest::{Method, Url};
use serde_json::Value;

use crate::error::ApiError;
use crate::models::{ItemList, Resource};

/// A request as handed to the transport
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: Url,
    pub body: Option<Value>,
}

/// Raw answer from the server
#[derive(Clone, Debug, PartialEq)]
pub struct ApiReply {
    pub status: u16,
    pub body: String,
}

impl ApiReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one request and returns the raw reply.
///
/// Errors from this layer are transport failures only; status handling
/// belongs to [`ApiClient`].
pub trait Transport: Clone + Send + Sync + 'static {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiReply, ApiError>> + Send;
}

/// reqwest-backed transport
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// No timeout unless one is given; a hung request stays pending
    pub fn new(timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        HttpTransport {
            client: builder.build().unwrap_or_else(|_| reqwest::Client::new()),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiReply, ApiError>> + Send {
        let client = self.client.clone();
        async move {
            let start = Instant::now();
            let mut builder = client.request(request.method.clone(), request.url.clone());
            if let Some(body) = &request.body {
                builder = builder.json(body);
            }

            let resp = builder.send().await?;
            let status = resp.status().as_u16();
            let body = resp.text().await?;

            tracing::debug!(
                method = %request.method,
                url = %request.url,
                status,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Request finished"
            );
            Ok::<_, ApiError>(ApiReply { status, body })
        }
    }
}

/// Typed operations against the collection endpoints under one base URL
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    base: Url,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, base: Url) -> Self {
        ApiClient { transport, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `<base>/<collection>/`
    pub fn collection_url<R: Resource>(&self) -> Result<Url, ApiError> {
        self.url_with(&[R::COLLECTION, ""])
    }

    /// `<base>/<collection>/<key>/`, with the key percent-encoded
    pub fn item_url<R: Resource>(&self, key: &str) -> Result<Url, ApiError> {
        self.url_with(&[R::COLLECTION, key, ""])
    }

    fn url_with(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Url(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// GET the collection and decode its `items`
    pub async fn list<R: Resource>(&self) -> Result<Vec<R>, ApiError> {
        let url = self.collection_url::<R>()?;
        let reply = self.execute(Method::GET, url, None).await?;
        let list: ItemList<R> =
            serde_json::from_str(&reply.body).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(list.items)
    }

    /// GET one record by its identifier
    pub async fn get<R: Resource>(&self, key: &str) -> Result<R, ApiError> {
        let url = self.item_url::<R>(key)?;
        let reply = self.execute(Method::GET, url, None).await?;
        serde_json::from_str(&reply.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// POST a new record; the reply body is ignored
    pub async fn create<R: Resource>(&self, record: &R) -> Result<u16, ApiError> {
        let url = self.collection_url::<R>()?;
        let body = encode(record)?;
        self.execute(Method::POST, url, Some(body)).await.map(|r| r.status)
    }

    /// PUT a record over the one currently stored under `old_key`
    pub async fn update<R: Resource>(&self, old_key: &str, record: &R) -> Result<u16, ApiError> {
        let url = self.item_url::<R>(old_key)?;
        let body = encode(record)?;
        self.execute(Method::PUT, url, Some(body)).await.map(|r| r.status)
    }

    pub async fn delete<R: Resource>(&self, key: &str) -> Result<u16, ApiError> {
        let url = self.item_url::<R>(key)?;
        self.execute(Method::DELETE, url, None).await.map(|r| r.status)
    }

    async fn execute(&self, method: Method, url: Url, body: Option<Value>) -> Result<ApiReply, ApiError> {
        let reply = self.transport.send(ApiRequest { method, url, body }).await?;
        if reply.is_success() {
            Ok(reply)
        } else {
            Err(ApiError::from_response(reply.status, reply.body))
        }
    }
}

fn encode<R: Resource>(record: &R) -> Result<Value, ApiError> {
    serde_json::to_value(record).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
pub(crate) mod testing {
    //! In-memory transport shared by the unit tests

    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Records every request and answers from a queue of canned replies
    #[derive(Clone, Default)]
    pub struct FakeTransport {
        pub sent: Arc<Mutex<Vec<ApiRequest>>>,
        replies: Arc<Mutex<VecDeque<Result<ApiReply, ApiError>>>>,
    }

    impl FakeTransport {
        pub fn reply(&self, status: u16, body: &str) -> &Self {
            self.replies.lock().unwrap().push_back(Ok(ApiReply {
                status,
                body: body.to_string(),
            }));
            self
        }

        pub fn fail(&self, error: ApiError) -> &Self {
            self.replies.lock().unwrap().push_back(Err(error));
            self
        }

        pub fn sent(&self) -> Vec<ApiRequest> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        fn send(&self, request: ApiRequest) -> impl Future<Output = Result<ApiReply, ApiError>> + Send {
            self.sent.lock().unwrap().push(request);
            let next = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Connect("no reply queued".into())));
            async move { next }
        }
    }

    pub fn client(transport: &FakeTransport) -> ApiClient<FakeTransport> {
        let base = Url::parse(crate::constants::DEFAULT_API_BASE).unwrap();
        ApiClient::new(transport.clone(), base)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{client, FakeTransport};
    use super::*;
    use crate::models::{Artist, Choreography};

    #[test]
    fn test_collection_and_item_urls() {
        let api = client(&FakeTransport::default());
        assert_eq!(
            api.collection_url::<Artist>().unwrap().as_str(),
            "http://127.0.0.1:5000/api/artists/"
        );
        assert_eq!(
            api.item_url::<Choreography>("Solo").unwrap().as_str(),
            "http://127.0.0.1:5000/api/choreographies/Solo/"
        );
    }

    #[test]
    fn test_item_url_encodes_key() {
        let api = client(&FakeTransport::default());
        assert_eq!(
            api.item_url::<Artist>("a b/c").unwrap().as_str(),
            "http://127.0.0.1:5000/api/artists/a%20b%2Fc/"
        );
    }

    #[test]
    fn test_base_without_trailing_slash() {
        let base = Url::parse("http://localhost:8080/api").unwrap();
        let api = ApiClient::new(FakeTransport::default(), base);
        assert_eq!(
            api.collection_url::<Artist>().unwrap().as_str(),
            "http://localhost:8080/api/artists/"
        );
    }

    #[tokio::test]
    async fn test_list_decodes_items() {
        let transport = FakeTransport::default();
        transport.reply(200, r#"{"items":[{"name":"Solo","description":"Intro"}]}"#);

        let items = client(&transport).list::<Choreography>().await.unwrap();

        assert_eq!(items, vec![Choreography::new("Solo", "Intro")]);
        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].body, None);
    }

    #[tokio::test]
    async fn test_get_single_item() {
        let transport = FakeTransport::default();
        transport
            .reply(
                200,
                r#"{"name":"salo","unique_name":"Ramzi","@controls":{"self":{"href":"/api/artists/Ramzi/"}}}"#,
            )
            .reply(404, r#"{"@error":{"@message":"Not found","@messages":["No artist was found with the name nobody"]}}"#);
        let api = client(&transport);

        let artist = api.get::<Artist>("Ramzi").await.unwrap();
        assert_eq!(artist, Artist::new("salo", "Ramzi"));

        let err = api.get::<Artist>("nobody").await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.page_message().as_deref(),
            Some("No artist was found with the name nobody")
        );

        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].url.path(), "/api/artists/Ramzi/");
        assert_eq!(sent[1].url.path(), "/api/artists/nobody/");
    }

    #[tokio::test]
    async fn test_list_malformed_success_body() {
        let transport = FakeTransport::default();
        transport.reply(200, "not json");

        let err = client(&transport).list::<Artist>().await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_posts_structured_body() {
        let transport = FakeTransport::default();
        transport.reply(201, "");

        let record = Choreography::new("So\"lo", "Intro");
        let status = client(&transport).create(&record).await.unwrap();

        assert_eq!(status, 201);
        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::POST);
        assert_eq!(sent[0].url.path(), "/api/choreographies/");
        assert_eq!(
            sent[0].body,
            Some(serde_json::json!({"name": "So\"lo", "description": "Intro"}))
        );
    }

    #[tokio::test]
    async fn test_update_rejected() {
        let transport = FakeTransport::default();
        transport.reply(400, r#"{"message":"duplicate unique_name"}"#);

        let err = client(&transport)
            .update("A1", &Artist::new("A2", "u2"))
            .await
            .unwrap_err();

        assert_eq!(err.page_message().as_deref(), Some("duplicate unique_name"));
        assert_eq!(transport.sent()[0].url.path(), "/api/artists/A1/");
        assert_eq!(transport.sent()[0].method, Method::PUT);
    }

    #[tokio::test]
    async fn test_delete_propagates_transport_error() {
        let transport = FakeTransport::default();
        transport.fail(ApiError::Connect("refused".into()));

        let err = client(&transport).delete::<Choreography>("Solo").await.unwrap_err();
        assert_eq!(err, ApiError::Connect("refused".into()));
        assert_eq!(transport.sent()[0].method, Method::DELETE);
    }
}
