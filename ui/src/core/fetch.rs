//! Resource fetching for the widgets.
//!
//! Widgets only ever talk to a [`Fetcher`]: the web launcher installs an
//! [`HttpFetcher`] rooted at the page URL, the desktop launcher a
//! [`LocalFetcher`] rooted at the site directory, and tests their own fakes.
//! Requests never reuse a cached copy; every call revalidates.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use url::Url;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FetchError {
    #[error("can't resolve {path}: {reason}")]
    InvalidPath { path: String, reason: String },
    #[error("request for {path} failed: {message}")]
    Transport { path: String, message: String },
    #[error("{path} answered with HTTP {status}")]
    Status { path: String, status: u16 },
    #[error("{path} is not valid: {message}")]
    Parse { path: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Head,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchResponse {
    pub status: u16,
    pub body: String,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport used by every widget. Implementations report HTTP-level failures
/// as a response with a non-success status and reserve `Err` for requests that
/// never produced a response.
#[async_trait(?Send)]
pub trait Fetcher {
    async fn send(&self, method: Method, path: &str) -> Result<FetchResponse, FetchError>;
}

/// GET `path` and return its body; non-2xx statuses are errors.
pub async fn fetch_text(fetcher: &dyn Fetcher, path: &str) -> Result<String, FetchError> {
    let response = fetcher.send(Method::Get, path).await?;
    if !response.is_success() {
        return Err(FetchError::Status {
            path: path.to_string(),
            status: response.status,
        });
    }
    tracing::debug!("fetched {path} ({} bytes)", response.body.len());
    Ok(response.body)
}

/// GET `path` and decode it as JSON.
pub async fn fetch_json<T: DeserializeOwned>(
    fetcher: &dyn Fetcher,
    path: &str,
) -> Result<T, FetchError> {
    let body = fetch_text(fetcher, path).await?;
    serde_json::from_str(&body).map_err(|err| FetchError::Parse {
        path: path.to_string(),
        message: err.to_string(),
    })
}

/// Existence probe: HEAD first, GET when the HEAD status is inconclusive.
/// Any transport error counts as "missing".
pub async fn asset_exists(fetcher: &dyn Fetcher, path: &str) -> bool {
    match fetcher.send(Method::Head, path).await {
        Ok(head) if head.is_success() => true,
        Ok(head) => {
            tracing::debug!("HEAD {path} -> {}; retrying with GET", head.status);
            match fetcher.send(Method::Get, path).await {
                Ok(get) => get.is_success(),
                Err(err) => {
                    tracing::debug!("probe {path}: {err}");
                    false
                }
            }
        }
        Err(err) => {
            tracing::debug!("probe {path}: {err}");
            false
        }
    }
}

/// reqwest-backed fetcher resolving relative paths against a base URL.
pub struct HttpFetcher {
    client: reqwest::Client,
    base: Url,
}

impl HttpFetcher {
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base).map_err(|err| FetchError::InvalidPath {
            path: base.to_string(),
            reason: err.to_string(),
        })?;
        Ok(Self {
            client: reqwest::Client::new(),
            base,
        })
    }

    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.base.join(path).map_err(|err| FetchError::InvalidPath {
            path: path.to_string(),
            reason: err.to_string(),
        })
    }
}

#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    async fn send(&self, method: Method, path: &str) -> Result<FetchResponse, FetchError> {
        let url = self.resolve(path)?;
        let method = match method {
            Method::Get => reqwest::Method::GET,
            Method::Head => reqwest::Method::HEAD,
        };
        let transport = |err: reqwest::Error| FetchError::Transport {
            path: path.to_string(),
            message: err.to_string(),
        };

        let response = self
            .client
            .request(method, url)
            .header("Cache-Control", "no-cache")
            .header("Pragma", "no-cache")
            .send()
            .await
            .map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;
        Ok(FetchResponse { status, body })
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use local::LocalFetcher;

#[cfg(not(target_arch = "wasm32"))]
mod local {
    use std::io::ErrorKind;
    use std::path::{Component, Path, PathBuf};

    use async_trait::async_trait;

    use super::{FetchError, FetchResponse, Fetcher, Method};

    /// Serves site paths from a directory, answering like a static file server.
    pub struct LocalFetcher {
        root: PathBuf,
    }

    impl LocalFetcher {
        pub fn new(root: impl Into<PathBuf>) -> Self {
            Self { root: root.into() }
        }

        pub fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
            let mut resolved = self.root.clone();
            for component in Path::new(path).components() {
                match component {
                    Component::CurDir => {}
                    Component::Normal(part) => resolved.push(part),
                    _ => {
                        return Err(FetchError::InvalidPath {
                            path: path.to_string(),
                            reason: "path leaves the site directory".into(),
                        })
                    }
                }
            }
            Ok(resolved)
        }
    }

    #[async_trait(?Send)]
    impl Fetcher for LocalFetcher {
        async fn send(&self, method: Method, path: &str) -> Result<FetchResponse, FetchError> {
            let file = self.resolve(path)?;
            let outcome = match method {
                Method::Head => tokio::fs::metadata(&file).await.map(|meta| FetchResponse {
                    status: if meta.is_file() { 200 } else { 404 },
                    body: String::new(),
                }),
                Method::Get => tokio::fs::read_to_string(&file)
                    .await
                    .map(|body| FetchResponse { status: 200, body }),
            };

            match outcome {
                Ok(response) => Ok(response),
                Err(err) if err.kind() == ErrorKind::NotFound => Ok(FetchResponse {
                    status: 404,
                    body: String::new(),
                }),
                Err(err) => Err(FetchError::Transport {
                    path: path.to_string(),
                    message: err.to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::{FetchError, FetchResponse, Fetcher, Method};

    /// Scripted fetcher that records every request it sees.
    #[derive(Default)]
    pub struct FakeFetcher {
        routes: HashMap<(Method, String), Result<FetchResponse, FetchError>>,
        pub calls: RefCell<Vec<(Method, String)>>,
    }

    impl FakeFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
            self.routes.insert(
                (method, path.to_string()),
                Ok(FetchResponse {
                    status,
                    body: body.to_string(),
                }),
            );
            self
        }

        pub fn fail(mut self, method: Method, path: &str) -> Self {
            self.routes.insert(
                (method, path.to_string()),
                Err(FetchError::Transport {
                    path: path.to_string(),
                    message: "connection refused".into(),
                }),
            );
            self
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Fetcher for FakeFetcher {
        async fn send(&self, method: Method, path: &str) -> Result<FetchResponse, FetchError> {
            self.calls.borrow_mut().push((method, path.to_string()));
            self.routes
                .get(&(method, path.to_string()))
                .cloned()
                .unwrap_or(Ok(FetchResponse {
                    status: 404,
                    body: String::new(),
                }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeFetcher;
    use super::*;
    use futures::executor::block_on;
    use serde::Deserialize;

    #[test]
    fn fetch_text_returns_body_on_success() {
        let fetcher = FakeFetcher::new().respond(Method::Get, "./a.md", 200, "# A");
        assert_eq!(block_on(fetch_text(&fetcher, "./a.md")).unwrap(), "# A");
    }

    #[test]
    fn fetch_text_rejects_error_status() {
        let fetcher = FakeFetcher::new().respond(Method::Get, "./a.md", 500, "oops");
        let err = block_on(fetch_text(&fetcher, "./a.md")).unwrap_err();
        assert_eq!(
            err,
            FetchError::Status {
                path: "./a.md".into(),
                status: 500
            }
        );
    }

    #[test]
    fn fetch_json_reports_parse_errors() {
        #[derive(Debug, Deserialize)]
        struct Probe {
            #[allow(dead_code)]
            value: u32,
        }
        let fetcher = FakeFetcher::new().respond(Method::Get, "./m.json", 200, "{not json");
        let err = block_on(fetch_json::<Probe>(&fetcher, "./m.json")).unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
    }

    #[test]
    fn head_success_skips_get() {
        let fetcher = FakeFetcher::new().respond(Method::Head, "./model.js", 200, "");
        assert!(block_on(asset_exists(&fetcher, "./model.js")));
        assert_eq!(fetcher.call_count(), 1);
    }

    #[test]
    fn inconclusive_head_falls_back_to_get() {
        let fetcher = FakeFetcher::new()
            .respond(Method::Head, "./model.html", 405, "")
            .respond(Method::Get, "./model.html", 200, "<html></html>");
        assert!(block_on(asset_exists(&fetcher, "./model.html")));
        assert_eq!(
            *fetcher.calls.borrow(),
            vec![
                (Method::Head, "./model.html".to_string()),
                (Method::Get, "./model.html".to_string())
            ]
        );
    }

    #[test]
    fn transport_errors_fail_closed() {
        let fetcher = FakeFetcher::new().fail(Method::Head, "./model.css");
        assert!(!block_on(asset_exists(&fetcher, "./model.css")));
        assert_eq!(fetcher.call_count(), 1);
    }

    #[test]
    fn http_fetcher_resolves_relative_paths() {
        let fetcher = HttpFetcher::new("https://demo.example/protector/index.html").unwrap();
        let url = fetcher.resolve("./signals/baseline_metrics.json").unwrap();
        assert_eq!(
            url.as_str(),
            "https://demo.example/protector/signals/baseline_metrics.json"
        );
    }

    #[test]
    fn http_fetcher_rejects_bad_base() {
        assert!(matches!(
            HttpFetcher::new("not a url"),
            Err(FetchError::InvalidPath { .. })
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn local_fetcher_refuses_parent_components() {
        let fetcher = LocalFetcher::new("/srv/site");
        assert!(fetcher.resolve("../secrets.txt").is_err());
        assert_eq!(
            fetcher.resolve("./data/external/fraud.md").unwrap(),
            std::path::PathBuf::from("/srv/site/data/external/fraud.md")
        );
    }
}
