//! Definitions of errors that can occur during deployment of the contract

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// The underlying cause of a deployment error
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Errors that can occur while deploying the contract
#[derive(Debug)]
pub enum DeployError {
    /// A transport or node failure while querying the network
    Network {
        /// What the script was doing when the error occurred
        context: String,
        /// The underlying cause, if any
        source: Option<BoxError>,
    },
    /// A failure submitting or confirming the deployment transaction
    Transaction {
        /// What the script was doing when the error occurred
        context: String,
        /// The underlying cause, if any
        source: Option<BoxError>,
    },
    /// A missing or invalid signer, RPC URL, or contract artifact
    Configuration {
        /// What the script was doing when the error occurred
        context: String,
        /// The underlying cause, if any
        source: Option<BoxError>,
    },
}

impl DeployError {
    /// A network error with no underlying cause
    pub fn network(context: impl Into<String>) -> Self {
        DeployError::Network {
            context: context.into(),
            source: None,
        }
    }

    /// A transaction error with no underlying cause
    pub fn transaction(context: impl Into<String>) -> Self {
        DeployError::Transaction {
            context: context.into(),
            source: None,
        }
    }

    /// A configuration error with no underlying cause
    pub fn configuration(context: impl Into<String>) -> Self {
        DeployError::Configuration {
            context: context.into(),
            source: None,
        }
    }

    /// Attach the underlying cause of the error
    pub fn with_source(mut self, cause: impl Into<BoxError>) -> Self {
        match &mut self {
            DeployError::Network { source, .. }
            | DeployError::Transaction { source, .. }
            | DeployError::Configuration { source, .. } => *source = Some(cause.into()),
        }
        self
    }

    /// What the script was doing when the error occurred
    pub fn context(&self) -> &str {
        match self {
            DeployError::Network { context, .. }
            | DeployError::Transaction { context, .. }
            | DeployError::Configuration { context, .. } => context,
        }
    }
}

impl Display for DeployError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            DeployError::Network { context, .. } => write!(f, "network error: {}", context),
            DeployError::Transaction { context, .. } => {
                write!(f, "transaction error: {}", context)
            }
            DeployError::Configuration { context, .. } => {
                write!(f, "configuration error: {}", context)
            }
        }
    }
}

impl Error for DeployError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DeployError::Network { source, .. }
            | DeployError::Transaction { source, .. }
            | DeployError::Configuration { source, .. } => {
                source.as_deref().map(|e| e as &(dyn Error + 'static))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        error::Error,
        fmt::{self, Display},
        io,
    };

    use super::DeployError;

    /// A transport error wrapping the I/O error that caused it
    #[derive(Debug)]
    struct SendError(io::Error);

    impl Display for SendError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request for url (http://127.0.0.1:1/)")
        }
    }

    impl Error for SendError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    /// A network error two causes deep, as returned by a refused connection
    fn refused_connection() -> DeployError {
        let io_err = io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused");
        DeployError::network("failed to query the gas price").with_source(SendError(io_err))
    }

    #[test]
    fn test_source_chain_is_kept() {
        let err = refused_connection();

        let chain: Vec<String> = std::iter::successors(err.source(), |e| (*e).source())
            .map(|e| e.to_string())
            .collect();
        assert_eq!(
            chain,
            [
                "error sending request for url (http://127.0.0.1:1/)",
                "connection refused"
            ]
        );
    }

    #[test]
    fn test_report_shows_root_cause() {
        let report = eyre::Report::new(refused_connection());
        let rendered = format!("{:?}", report);

        assert!(rendered.starts_with("network error: failed to query the gas price"));
        assert!(rendered.contains("Caused by:"));
        assert!(rendered.contains("error sending request for url"));
        assert!(rendered.contains("connection refused"));
    }

    #[test]
    fn test_error_without_source() {
        let err = DeployError::transaction("deployment reverted");

        assert_eq!(err.to_string(), "transaction error: deployment reverted");
        assert_eq!(err.context(), "deployment reverted");
        assert!(err.source().is_none());
    }
}
