use std::path::PathBuf;

use k8s_openapi::api::core::v1::{Node, Pod};
use kube::config::{Config, KubeConfigOptions, Kubeconfig};
use kube::{Api, Client, api::ListParams};
use tracing::debug;

use crate::error::{BoxError, QueryError};
use crate::models::Scope;

/// Where to find cluster credentials. Empty means ambient discovery.
#[derive(Clone, Debug, Default)]
pub struct KubeOptions {
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
}

pub async fn connect(opts: &KubeOptions) -> Result<Client, QueryError> {
    let config = load_config(opts).await.map_err(QueryError::Connect)?;
    debug!(
        cluster = %config.cluster_url,
        namespace = %config.default_namespace,
        "resolved kube config"
    );
    Client::try_from(config).map_err(|e| QueryError::Connect(e.into()))
}

async fn load_config(opts: &KubeOptions) -> Result<Config, BoxError> {
    let options = KubeConfigOptions {
        context: opts.context.clone(),
        ..Default::default()
    };

    let config = match (&opts.kubeconfig, &opts.context) {
        (Some(path), _) => {
            let kubeconfig = Kubeconfig::read_from(path)?;
            Config::from_custom_kubeconfig(kubeconfig, &options).await?
        }
        (None, Some(_)) => Config::from_kubeconfig(&options).await?,
        (None, None) => Config::infer().await?,
    };
    Ok(config)
}

/// Read-only view of the cluster objects the `ip` command joins.
pub trait PodSource {
    async fn list_pods(&self, scope: &Scope) -> Result<Vec<Pod>, BoxError>;
    async fn list_nodes(&self) -> Result<Vec<Node>, BoxError>;
}

impl PodSource for Client {
    async fn list_pods(&self, scope: &Scope) -> Result<Vec<Pod>, BoxError> {
        let api: Api<Pod> = match scope {
            Scope::All => Api::all(self.clone()),
            Scope::Namespace(ns) => Api::namespaced(self.clone(), ns),
        };
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items)
    }

    async fn list_nodes(&self) -> Result<Vec<Node>, BoxError> {
        let api: Api<Node> = Api::all(self.clone());
        let list = api.list(&ListParams::default()).await?;
        Ok(list.items)
    }
}
