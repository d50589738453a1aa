use std::fmt;

use crate::error::QueryError;

/// One matching pod together with the node it runs on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PodIpInfo {
    pub name: String,
    pub namespace: String,
    pub pod_ip: String,
    pub node_name: String,
    pub node_ip: String,
}

impl fmt::Display for PodIpInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {} @ {} {}",
            self.name, self.namespace, self.pod_ip, self.node_name, self.node_ip
        )
    }
}

/// Which namespaces a pod listing covers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Scope {
    All,
    Namespace(String),
}

impl From<Option<String>> for Scope {
    fn from(namespace: Option<String>) -> Self {
        match namespace {
            Some(ns) if !ns.is_empty() => Scope::Namespace(ns),
            _ => Scope::All,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::All => write!(f, "all namespaces"),
            Scope::Namespace(ns) => write!(f, "namespace {ns}"),
        }
    }
}

/// Validated input of the `ip` command.
#[derive(Clone, Debug)]
pub struct QueryParams {
    scope: Scope,
    pattern: String,
}

impl QueryParams {
    pub fn new(scope: Scope, pattern: Option<String>) -> Result<Self, QueryError> {
        match pattern {
            None => Err(QueryError::MissingPattern),
            Some(p) if p.trim().is_empty() => Err(QueryError::EmptyPattern),
            Some(pattern) => Ok(Self { scope, pattern }),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}
