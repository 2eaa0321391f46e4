//! Feed sources.
//!
//! A [`DataSource`] produces the decoded feed once per run. Failures are
//! returned, never papered over with defaults.

use ft_common::{Error, Feed, Result, SectionKind};
use std::io::Read;
use std::time::Instant;
use tracing::{debug, info};

/// Produces the forecast feed.
pub trait DataSource {
    fn fetch(&self) -> Result<Feed>;
}

/// Blocking HTTP GET of a JSON feed.
///
/// One request per call, no retries and no timeout.
#[derive(Debug)]
pub struct HttpSource {
    url: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            agent: ureq::AgentBuilder::new().build(),
        }
    }

    fn fetch_error(&self, reason: impl std::fmt::Display) -> Error {
        Error::Fetch {
            url: self.url.clone(),
            reason: reason.to_string(),
        }
    }
}

impl DataSource for HttpSource {
    fn fetch(&self) -> Result<Feed> {
        let started = Instant::now();
        debug!(url = %self.url, "Fetching feed");

        let response = match self.agent.get(&self.url).call() {
            Ok(response) => response,
            Err(ureq::Error::Status(status, _)) => {
                return Err(Error::HttpStatus {
                    url: self.url.clone(),
                    status,
                })
            }
            Err(ureq::Error::Transport(transport)) => return Err(self.fetch_error(transport)),
        };

        let status = response.status();
        if status != 200 {
            return Err(Error::HttpStatus {
                url: self.url.clone(),
                status,
            });
        }

        let mut body = Vec::new();
        response
            .into_reader()
            .read_to_end(&mut body)
            .map_err(|e| self.fetch_error(e))?;
        let feed = Feed::from_slice(&body)?;

        info!(
            url = %self.url,
            status,
            bytes = body.len(),
            forecasts = feed.section(SectionKind::Forecasts).len(),
            markets = feed.section(SectionKind::Markets).len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Feed fetched"
        );
        Ok(feed)
    }
}

/// An in-memory feed.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    feed: Feed,
}

impl StaticSource {
    pub fn new(feed: Feed) -> Self {
        Self { feed }
    }

    /// Decode the feed from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(Feed::from_slice(json.as_bytes())?))
    }
}

impl DataSource for StaticSource {
    fn fetch(&self) -> Result<Feed> {
        Ok(self.feed.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes::ExitCode;
    use ft_common::{ErrorCategory, Record};

    #[test]
    fn test_static_source_returns_feed() {
        let feed = Feed::new(vec![Record::new("Poll1", 52.3, 47.1)], vec![]);
        let source = StaticSource::new(feed.clone());
        assert_eq!(source.fetch().unwrap(), feed);
    }

    #[test]
    fn test_static_source_from_json() {
        let source =
            StaticSource::from_json(r#"{"percent": {"forecasts": [], "markets": []}}"#).unwrap();
        assert_eq!(source.fetch().unwrap(), Feed::default());
    }

    #[test]
    fn test_static_source_rejects_bad_json() {
        let err = StaticSource::from_json(r#"{"percent": 3}"#).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Data);
    }

    /// Serve exactly one request with `status` and `body`, returning the URL.
    fn serve_once(status: u16, body: &'static str) -> (String, std::thread::JoinHandle<()>) {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind local server");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("local server listens on an IP address");
        let handle = std::thread::spawn(move || {
            if let Ok(request) = server.recv() {
                let _ = request
                    .respond(tiny_http::Response::from_string(body).with_status_code(status));
            }
        });
        (format!("http://{}/percent.json", addr), handle)
    }

    #[test]
    fn test_http_source_ok() {
        let (url, handle) = serve_once(
            200,
            r#"{"percent": {"forecasts": [{"name": "Poll1", "rep": 52.3, "dem": 47.1}], "markets": []}}"#,
        );
        let feed = HttpSource::new(url).fetch().unwrap();
        handle.join().unwrap();
        assert_eq!(feed.section(SectionKind::Forecasts).len(), 1);
        assert!(feed.section(SectionKind::Markets).is_empty());
    }

    #[test]
    fn test_http_source_error_status() {
        let (url, handle) = serve_once(503, "unavailable");
        let err = HttpSource::new(url).fetch().unwrap_err();
        handle.join().unwrap();
        assert!(matches!(err, Error::HttpStatus { status: 503, .. }));
        assert_eq!(err.category(), ErrorCategory::Network);
        assert_eq!(ExitCode::from(&err), ExitCode::NetworkError);
    }

    #[test]
    fn test_http_source_non_200_success_status() {
        let (url, handle) = serve_once(204, "");
        let err = HttpSource::new(url).fetch().unwrap_err();
        handle.join().unwrap();
        assert!(matches!(err, Error::HttpStatus { status: 204, .. }));
        assert_eq!(ExitCode::from(&err), ExitCode::NetworkError);
    }

    #[test]
    fn test_http_source_missing_percent_is_data_error() {
        let (url, handle) = serve_once(200, r#"{"forecasts": [], "markets": []}"#);
        let err = HttpSource::new(url).fetch().unwrap_err();
        handle.join().unwrap();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.category(), ErrorCategory::Data);
        assert_eq!(ExitCode::from(&err), ExitCode::DataError);
    }

    #[test]
    fn test_http_source_unreachable_is_network_error() {
        // Port 9 on localhost is the discard service; nothing listens in CI.
        let source = HttpSource::new("http://127.0.0.1:9/percent.json");
        let err = source.fetch().unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Network);
        assert!(err.to_string().contains("127.0.0.1:9"));
    }
}
