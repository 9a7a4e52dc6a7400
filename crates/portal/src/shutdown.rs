//! Graceful shutdown of the portal server

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    future::Future,
    io,
    time::Duration,
};

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Signal that ended the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    CtrlC,
    Terminate,
}

impl Display for ShutdownSignal {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::CtrlC => f.write_str("ctrl_c"),
            Self::Terminate => f.write_str("terminate"),
        }
    }
}

/// Wait for Ctrl+C or, on Unix, SIGTERM.
async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    let ctrl_c = async {
        signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)?;

        Ok::<_, ShutdownSignalError>(ShutdownSignal::CtrlC)
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok::<_, ShutdownSignalError>(ShutdownSignal::Terminate)
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<ShutdownSignal, ShutdownSignalError>>();

    tokio::select! {
        signal = ctrl_c => signal,
        signal = terminate => signal,
    }
}

/// Stop the server once `signal` resolves, giving in-flight gateway calls
/// `grace` to finish.
pub(crate) async fn stop_on<F>(
    handle: ServerHandle,
    signal: F,
    grace: Option<Duration>,
) -> Result<ShutdownSignal, ShutdownSignalError>
where
    F: Future<Output = Result<ShutdownSignal, ShutdownSignalError>>,
{
    let signal = signal.await?;

    info!(
        %signal,
        grace_seconds = grace.map(|grace| grace.as_secs()),
        "stopping storefront portal"
    );

    handle.stop_graceful(grace);

    Ok(signal)
}

/// Stop the server on the first process shutdown signal.
pub(crate) async fn listen(
    handle: ServerHandle,
    grace: Option<Duration>,
) -> Result<ShutdownSignal, ShutdownSignalError> {
    stop_on(handle, wait_for_signal(), grace).await
}

#[cfg(test)]
mod tests {
    use salvo::prelude::*;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn signal_labels_are_stable() {
        assert_eq!(ShutdownSignal::CtrlC.to_string(), "ctrl_c");
        assert_eq!(ShutdownSignal::Terminate.to_string(), "terminate");
    }

    #[tokio::test]
    async fn test_signal_stops_running_server() -> TestResult {
        let acceptor = TcpListener::new("127.0.0.1:0").bind().await;
        let server = Server::new(acceptor);

        let stopper = tokio::spawn(stop_on(
            server.handle(),
            async { Ok(ShutdownSignal::Terminate) },
            Some(Duration::from_secs(1)),
        ));

        tokio::time::timeout(Duration::from_secs(5), server.serve(Router::new())).await?;

        assert_eq!(stopper.await??, ShutdownSignal::Terminate);

        Ok(())
    }

    #[tokio::test]
    async fn test_signal_handler_failure_is_reported() -> TestResult {
        let acceptor = TcpListener::new("127.0.0.1:0").bind().await;
        let server = Server::new(acceptor);

        let result = stop_on(
            server.handle(),
            async { Err(ShutdownSignalError::CtrlC(io::Error::other("no tty"))) },
            None,
        )
        .await;

        assert!(
            matches!(result, Err(ShutdownSignalError::CtrlC(_))),
            "expected CtrlC error, got {result:?}"
        );

        Ok(())
    }
}
