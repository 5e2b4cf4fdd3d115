//! Startup fetch orchestration.
//!
//! The directory fetches exactly once. A failed fetch is logged and yields
//! no batch at all, so the caller never loads a collection; nothing
//! downstream ever sees a `FetchError`.

use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use userdeck_providers::{FetchRequest, RandomUserApi, ResponseFile, UserSource};
use userdeck_types::UserRecord;

use crate::{ApiConfig, Result};

/// Which source to build for this session
#[derive(Debug, Clone, Default)]
pub struct SourceOptions {
    /// Replay a saved response body instead of calling the API
    pub input: Option<PathBuf>,
}

pub fn build_source(api: &ApiConfig, options: &SourceOptions) -> Result<Arc<dyn UserSource>> {
    let source: Arc<dyn UserSource> = match &options.input {
        Some(path) => Arc::new(ResponseFile::new(path)),
        None => Arc::new(RandomUserApi::with_timeout(&api.base_url, api.timeout())?),
    };
    tracing::debug!(source = %source.describe(), "user source ready");
    Ok(source)
}

async fn fetch_logged(source: &dyn UserSource, request: &FetchRequest) -> Option<Vec<UserRecord>> {
    match source.fetch_users(request).await {
        Ok(users) => {
            tracing::info!(source = %source.describe(), count = users.len(), "users fetched");
            Some(users)
        }
        Err(err) => {
            tracing::warn!(source = %source.describe(), error = %err, "failed to fetch users");
            None
        }
    }
}

fn current_thread_runtime() -> std::io::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
}

/// Fetch on the calling thread, blocking until the source answers.
/// `None` means the fetch failed and was logged.
pub fn fetch_blocking(
    source: &dyn UserSource,
    request: &FetchRequest,
) -> Result<Option<Vec<UserRecord>>> {
    let runtime = current_thread_runtime()?;
    Ok(runtime.block_on(fetch_logged(source, request)))
}

/// Fetch on a helper thread. The receiver yields at most one batch; on
/// failure the sender is dropped without sending.
pub fn spawn_fetch(source: Arc<dyn UserSource>, request: FetchRequest) -> Receiver<Vec<UserRecord>> {
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let users = match current_thread_runtime() {
            Ok(runtime) => runtime.block_on(fetch_logged(source.as_ref(), &request)),
            Err(err) => {
                tracing::warn!(error = %err, "failed to start fetch runtime");
                None
            }
        };
        if let Some(users) = users {
            // Receiver gone means the UI already quit
            let _ = tx.send(users);
        }
    });

    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use userdeck_providers::FetchError;
    use userdeck_testing::fixtures;

    struct StubSource {
        outcome: std::result::Result<Vec<UserRecord>, u16>,
        calls: AtomicUsize,
    }

    impl StubSource {
        fn ok(users: Vec<UserRecord>) -> Self {
            Self {
                outcome: Ok(users),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing(code: u16) -> Self {
            Self {
                outcome: Err(code),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl UserSource for StubSource {
        fn describe(&self) -> String {
            "stub".to_string()
        }

        async fn fetch_users(
            &self,
            _request: &FetchRequest,
        ) -> userdeck_providers::Result<Vec<UserRecord>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Ok(users) => Ok(users.clone()),
                Err(code) => Err(FetchError::Status {
                    code: *code,
                    body_preview: "unavailable".to_string(),
                }),
            }
        }
    }

    #[test]
    fn test_fetch_blocking_returns_users() -> Result<()> {
        let source = StubSource::ok(fixtures::trio());

        let users = fetch_blocking(&source, &FetchRequest::default())?;

        assert_eq!(users.map(|users| users.len()), Some(3));
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[test]
    fn test_failed_fetch_yields_no_batch() -> Result<()> {
        let source = StubSource::failing(503);

        let users = fetch_blocking(&source, &FetchRequest::default())?;

        assert!(users.is_none());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[test]
    fn test_spawn_fetch_delivers_one_batch() {
        let source = Arc::new(StubSource::ok(fixtures::trio()));

        let rx = spawn_fetch(source.clone(), FetchRequest::default());

        let users = rx
            .recv_timeout(Duration::from_secs(5))
            .expect("fetch thread should deliver");
        assert_eq!(users.len(), 3);
        assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_spawn_fetch_failure_disconnects_without_batch() {
        let source = Arc::new(StubSource::failing(500));

        let rx = spawn_fetch(source.clone(), FetchRequest::default());

        assert_eq!(
            rx.recv_timeout(Duration::from_secs(5)),
            Err(mpsc::RecvTimeoutError::Disconnected)
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_build_source_prefers_input_file() -> Result<()> {
        let options = SourceOptions {
            input: Some(PathBuf::from("saved.json")),
        };

        let source = build_source(&ApiConfig::default(), &options)?;

        assert_eq!(source.describe(), "file saved.json");
        Ok(())
    }

    #[test]
    fn test_build_source_defaults_to_api() -> Result<()> {
        let source = build_source(&ApiConfig::default(), &SourceOptions::default())?;
        assert!(source.describe().starts_with("https://randomuser.me/api"));
        Ok(())
    }
}
