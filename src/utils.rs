use std::collections::HashMap;

use crate::error::ConversionError;
use crate::models::PodIpInfo;
use indicatif::{ProgressBar, ProgressStyle};
use k8s_openapi::api::core::v1::{Node, Pod};

const INTERNAL_IP: &str = "InternalIP";

// --- SHARED SPINNER ---
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    pb
}

/// Node name -> first `InternalIP` address of that node.
pub type NodeAddressIndex = HashMap<String, String>;

pub fn node_address_index(nodes: &[Node]) -> NodeAddressIndex {
    nodes
        .iter()
        .filter_map(|node| {
            let name = node.metadata.name.clone()?;
            let ip = node
                .status
                .as_ref()
                .and_then(|s| s.addresses.as_ref())
                .and_then(|addrs| addrs.iter().find(|a| a.type_ == INTERNAL_IP))
                .map(|a| a.address.clone())?;
            Some((name, ip))
        })
        .collect()
}

/// Joins a pod with the node index. `fallback_namespace` fills in pods
/// returned without `metadata.namespace`.
pub fn pod_ip_info(
    pod: Pod,
    index: &NodeAddressIndex,
    fallback_namespace: Option<&str>,
) -> Result<PodIpInfo, ConversionError> {
    let name = pod.metadata.name.ok_or(ConversionError::MissingName)?;
    let spec = pod.spec.ok_or_else(|| ConversionError::MissingSpec(name.clone()))?;
    let status = pod.status.ok_or_else(|| ConversionError::MissingStatus(name.clone()))?;

    let namespace = pod
        .metadata
        .namespace
        .or_else(|| fallback_namespace.map(str::to_string))
        .unwrap_or_default();
    let node_name = spec.node_name.unwrap_or_default();
    let node_ip = index.get(&node_name).cloned().unwrap_or_default();

    Ok(PodIpInfo {
        name,
        namespace,
        pod_ip: status.pod_ip.unwrap_or_default(),
        node_name,
        node_ip,
    })
}


#[cfg(test)]
mod tests {
    use super::fixtures::{node, pod};
    use super::*;

    #[test]
    fn index_takes_first_internal_ip() {
        let nodes = vec![
            node(
                "h1",
                &[
                    ("Hostname", "h1"),
                    ("ExternalIP", "1.2.3.4"),
                    ("InternalIP", "10.0.0.1"),
                    ("InternalIP", "10.0.0.9"),
                ],
            ),
            node("h2", &[("InternalIP", "10.0.0.2")]),
            node("h3", &[("ExternalIP", "5.6.7.8")]),
            Node::default(),
        ];
        let index = node_address_index(&nodes);

        assert_eq!(index.len(), 2);
        assert_eq!(index["h1"], "10.0.0.1");
        assert_eq!(index["h2"], "10.0.0.2");
        assert!(!index.contains_key("h3"));
    }

    #[test]
    fn pod_joined_with_node_ip() {
        let index = node_address_index(&[
            node("h1", &[("InternalIP", "10.0.0.1")]),
            node("h2", &[("InternalIP", "10.0.0.2")]),
        ]);
        let web = pod("web-1", "dev", Some("172.16.0.5"), Some("h1"));
        let info = pod_ip_info(web, &index, None).unwrap();

        assert_eq!(
            info,
            PodIpInfo {
                name: "web-1".into(),
                namespace: "dev".into(),
                pod_ip: "172.16.0.5".into(),
                node_name: "h1".into(),
                node_ip: "10.0.0.1".into(),
            }
        );
    }

    #[test]
    fn unknown_node_and_missing_ip_are_empty() {
        let index = node_address_index(&[node("h1", &[("InternalIP", "10.0.0.1")])]);

        let info = pod_ip_info(pod("web-1", "dev", None, Some("gone")), &index, None).unwrap();
        assert_eq!(info.pod_ip, "");
        assert_eq!(info.node_name, "gone");
        assert_eq!(info.node_ip, "");

        let pending = pod_ip_info(pod("web-2", "dev", None, None), &index, None).unwrap();
        assert_eq!(pending.node_name, "");
        assert_eq!(pending.node_ip, "");
    }

    #[test]
    fn malformed_pods_are_rejected() {
        let index = NodeAddressIndex::new();

        let mut no_status = pod("a", "dev", None, None);
        no_status.status = None;
        assert_eq!(
            pod_ip_info(no_status, &index, None),
            Err(ConversionError::MissingStatus("a".into()))
        );

        let mut no_spec = pod("b", "dev", None, None);
        no_spec.spec = None;
        assert_eq!(
            pod_ip_info(no_spec, &index, None),
            Err(ConversionError::MissingSpec("b".into()))
        );

        let mut no_name = pod("c", "dev", None, None);
        no_name.metadata.name = None;
        assert_eq!(pod_ip_info(no_name, &index, None), Err(ConversionError::MissingName));
    }

    #[test]
    fn namespace_falls_back_to_scope() {
        let mut p = pod("a", "dev", None, None);
        p.metadata.namespace = None;
        let info = pod_ip_info(p, &NodeAddressIndex::new(), Some("prod")).unwrap();
        assert_eq!(info.namespace, "prod");
    }
}
