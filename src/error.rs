//! The error type shared by every call against the Patroni API.
//!
use std::error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, PatroniError>;

/// Boxed cause of a transport failure, as handed back by a [`crate::transport::HttpTransport`].
pub type TransportCause = Box<dyn error::Error + Send + Sync>;

#[derive(Debug)]
pub enum PatroniError {
    /// The reported address of a member is not an IPv4 or IPv6 literal.
    /// No request was sent.
    InvalidAddress(String),
    /// A request body could not be serialized, or a response body could not be deserialized.
    Encoding(serde_json::Error),
    /// The request could not be sent, or the response body could not be read.
    Transport {
        context: &'static str,
        source: TransportCause,
    },
    /// Patroni answered with a status other than 200.
    Remote {
        status: u16,
        body: String,
    },
    /// Closing the response body failed.
    /// `prior` holds the error the call had already run into, if any.
    ResourceRelease {
        source: io::Error,
        prior: Option<Box<PatroniError>>,
    },
    /// The default http client could not be built.
    ClientBuild(reqwest::Error),
}

impl PatroniError {
    pub fn transport<E>(context: &'static str, source: E) -> Self
    where
        E: Into<TransportCause>,
    {
        PatroniError::Transport { context, source: source.into() }
    }
    /// Merge a failure to close the response body into the outcome of the call.
    pub fn merge_release<T>(
        outcome: Result<T>,
        release: io::Result<()>,
    ) -> Result<T>
    {
        match (outcome, release) {
            (outcome, Ok(())) => outcome,
            (Ok(_), Err(source)) => Err(PatroniError::ResourceRelease { source, prior: None }),
            (Err(prior), Err(source)) => Err(PatroniError::ResourceRelease { source, prior: Some(Box::new(prior)) }),
        }
    }
    /// The http status code, if Patroni was reached and answered with a non-OK status.
    pub fn status(&self) -> Option<u16> {
        match self {
            PatroniError::Remote { status, .. } => Some(*status),
            PatroniError::ResourceRelease { prior: Some(prior), .. } => prior.status(),
            _ => None,
        }
    }
}

impl fmt::Display for PatroniError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PatroniError::InvalidAddress(address) => write!(f, "{} is not a valid IPv4/IPv6 address", address),
            PatroniError::Encoding(e) => write!(f, "could not encode or decode json: {}", e),
            PatroniError::Transport { context, source } => write!(f, "{}: {}", context, source),
            PatroniError::Remote { status, body } => write!(f, "patroni returned {}: '{}'", status, body),
            PatroniError::ResourceRelease { source, prior: None } => write!(f, "could not close response: {}", source),
            PatroniError::ResourceRelease { source, prior: Some(prior) } => write!(f, "could not close response: {}, prior error: {}", source, prior),
            PatroniError::ClientBuild(e) => write!(f, "could not build http client: {}", e),
        }
    }
}

impl error::Error for PatroniError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            PatroniError::InvalidAddress(_) => None,
            PatroniError::Remote { .. } => None,
            PatroniError::Encoding(e) => Some(e),
            PatroniError::Transport { source, .. } => Some(source.as_ref()),
            PatroniError::ResourceRelease { source, .. } => Some(source),
            PatroniError::ClientBuild(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for PatroniError {
    fn from(e: serde_json::Error) -> Self {
        PatroniError::Encoding(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_merge_release_keeps_prior_error() {
        let prior: Result<()> = Err(PatroniError::Remote { status: 503, body: "overloaded".to_string() });
        let release = Err(io::Error::new(io::ErrorKind::Other, "broken pipe"));
        let result = PatroniError::merge_release(prior, release).unwrap_err();
        let message = result.to_string();
        assert!(message.contains("broken pipe"));
        assert!(message.contains("overloaded"));
        assert_eq!(result.status(), Some(503));
    }

    #[test]
    fn unit_merge_release_without_prior_error() {
        let release = Err(io::Error::new(io::ErrorKind::Other, "broken pipe"));
        let result = PatroniError::merge_release(Ok(()), release).unwrap_err();
        assert!(matches!(result, PatroniError::ResourceRelease { prior: None, .. }));
        assert_eq!(result.to_string(), "could not close response: broken pipe");
    }

    #[test]
    fn unit_merge_release_successful_close() {
        assert!(PatroniError::merge_release(Ok(()), Ok(())).is_ok());
        let result = PatroniError::merge_release::<()>(Err(PatroniError::InvalidAddress("x".to_string())), Ok(())).unwrap_err();
        assert!(matches!(result, PatroniError::InvalidAddress(_)));
    }

    #[test]
    fn unit_transport_error_keeps_source() {
        let e = PatroniError::transport("could not make request", io::Error::new(io::ErrorKind::TimedOut, "timed out"));
        assert_eq!(e.to_string(), "could not make request: timed out");
        assert!(error::Error::source(&e).is_some());
    }
}
