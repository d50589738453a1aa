use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

const USAGE_EXAMPLES: &str =
    "for example:\n  kubectl helper ip nginx\nor:\n  kubectl helper ip -n dev nginx";

/// Fatal errors of the `ip` command.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("please provide a search pattern, {examples}", examples = USAGE_EXAMPLES)]
    MissingPattern,

    #[error("search pattern must not be empty, {examples}", examples = USAGE_EXAMPLES)]
    EmptyPattern,

    #[error("failed to connect to the cluster")]
    Connect(#[source] BoxError),

    #[error("failed to retrieve pods")]
    ListPods(#[source] BoxError),

    #[error("failed to retrieve nodes")]
    ListNodes(#[source] BoxError),
}

/// A single pod that cannot be turned into a [`crate::models::PodIpInfo`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("pod has no name")]
    MissingName,
    #[error("pod {0} has no spec")]
    MissingSpec(String),
    #[error("pod {0} has no status")]
    MissingStatus(String),
}
