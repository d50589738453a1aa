use crate::error::QueryError;
use crate::k8s::{self, KubeOptions, PodSource};
use crate::models::{PodIpInfo, QueryParams, Scope};
use crate::utils;
use colored::*;
use comfy_table::{Attribute, Cell, Color, Table};
use tracing::{debug, info, trace};

const HEADERS: [&str; 5] = ["NAME", "NAMESPACE", "POD IP", "NODE NAME", "NODE IP"];

pub async fn run(
    kube_opts: &KubeOptions,
    namespace_arg: Option<String>,
    pattern_arg: Option<String>,
) -> Result<(), QueryError> {
    // Reject bad input before touching the cluster.
    let params = QueryParams::new(Scope::from(namespace_arg), pattern_arg)?;

    let pb = utils::create_spinner("Initializing Kubernetes client...");
    let client = k8s::connect(kube_opts).await;
    pb.finish_and_clear();
    let client = client?;

    if let Scope::Namespace(ns) = params.scope() {
        println!("Using namespace: {}", ns.cyan());
    }

    let pb = utils::create_spinner("Fetching pods and nodes...");
    let records = find_matching_pods(&client, &params).await;
    pb.finish_and_clear();

    println!("{}", render(&records?, params.pattern()));
    Ok(())
}

/// Lists pods in the requested scope and all nodes, joins every pod with
/// its node's internal IP and keeps the pods whose name contains the
/// pattern, ignoring case.
///
/// Pods that cannot be interpreted are skipped. Listing failures abort
/// the whole query.
pub async fn find_matching_pods<S: PodSource>(
    source: &S,
    params: &QueryParams,
) -> Result<Vec<PodIpInfo>, QueryError> {
    let pods = source.list_pods(params.scope()).await.map_err(QueryError::ListPods)?;
    let nodes = source.list_nodes().await.map_err(QueryError::ListNodes)?;
    info!(
        pods = pods.len(),
        nodes = nodes.len(),
        scope = %params.scope(),
        "listed cluster objects"
    );

    let index = utils::node_address_index(&nodes);
    let fallback_ns = match params.scope() {
        Scope::Namespace(ns) => Some(ns.as_str()),
        Scope::All => None,
    };
    let needle = params.pattern().to_lowercase();

    let matching = pods
        .into_iter()
        .filter_map(|pod| match utils::pod_ip_info(pod, &index, fallback_ns) {
            Ok(info) => Some(info),
            Err(e) => {
                debug!(error = %e, "skipping pod");
                None
            }
        })
        .filter(|info| info.name.to_lowercase().contains(&needle))
        .inspect(|info| trace!(pod = %info, "matched"))
        .collect();

    Ok(matching)
}

pub fn render(records: &[PodIpInfo], pattern: &str) -> String {
    if records.is_empty() {
        return format!("No pods found matching the pattern: {}", pattern.yellow());
    }

    let mut table = Table::new();
    let header: Vec<Cell> = HEADERS
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(header);
    for r in records {
        table.add_row(vec![&r.name, &r.namespace, &r.pod_ip, &r.node_name, &r.node_ip]);
    }
    table.to_string()
}
