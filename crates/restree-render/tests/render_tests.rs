use chrono::{DateTime, Utc};
use restree_core::{
    Detail, GraphDefect, NodeId, RenderConfig, RenderError, ResourceNode, ResourceTree, Snapshot,
};
use restree_render::{
    FlatRenderer, RowSink, Selection, TabWriter, Table, TreeRenderer, render_listing,
    render_tree_view,
};

const SNAPSHOT: &str = r#"{
    "nodes": [
        {"uid": "p1", "kind": "Pod", "name": "guestbook-ui-85d-x2", "namespace": "default",
         "parentRefs": ["rs1"], "health": {"status": "Healthy"}, "createdAt": "2024-06-01T08:00:00Z"},
        {"uid": "s1", "kind": "Service", "name": "guestbook-ui", "namespace": "default",
         "health": {"status": "Healthy"}},
        {"uid": "d1", "kind": "Deployment", "name": "guestbook-ui", "group": "apps", "namespace": "default",
         "health": {"status": "Healthy"}, "createdAt": "2024-06-01T09:00:00Z"},
        {"uid": "e1", "kind": "Endpoints", "name": "guestbook-ui", "namespace": "default",
         "parentRefs": ["s1"]},
        {"uid": "p2", "kind": "Pod", "name": "guestbook-ui-85d-a1", "namespace": "default",
         "parentRefs": ["rs1"], "health": {"status": "Progressing", "message": "ContainerCreating"},
         "createdAt": "2024-06-01T11:58:30Z"},
        {"uid": "rs1", "kind": "ReplicaSet", "name": "guestbook-ui-85d", "group": "apps", "namespace": "default",
         "parentRefs": ["d1"], "health": {"status": "Healthy"}, "createdAt": "2024-06-01T09:00:00Z"}
    ],
    "orphanedNodes": [
        {"uid": "sec1", "kind": "Secret", "name": "stale-token", "namespace": "default"},
        {"uid": "cm1", "kind": "ConfigMap", "name": "kube-root-ca.crt", "namespace": "default"}
    ],
    "resources": [
        {"kind": "Deployment", "name": "guestbook-ui", "status": "Synced", "health": "Healthy"},
        {"kind": "Service", "name": "guestbook-ui", "status": "Synced", "health": "Healthy",
         "message": "service/guestbook-ui unchanged"}
    ]
}"#;

const TREE: &str = concat!(
    "KIND/NAME                      STATUS  HEALTH       MESSAGE\n",
    "Deployment/guestbook-ui        Synced  Healthy      \n",
    "└─ReplicaSet/guestbook-ui-85d          Healthy      \n",
    "  ├─Pod/guestbook-ui-85d-a1            Progressing  \n",
    "  └─Pod/guestbook-ui-85d-x2            Healthy      \n",
    "Service/guestbook-ui           Synced  Healthy      service/guestbook-ui unchanged\n",
    "└─Endpoints/guestbook-ui                            \n",
);

const DETAILED_TREE: &str = concat!(
    "KIND/NAME                      STATUS  HEALTH       AGE        MESSAGE                         REASON\n",
    "Deployment/guestbook-ui        Synced  Healthy      3h                                         \n",
    "└─ReplicaSet/guestbook-ui-85d          Healthy      3h                                         \n",
    "  ├─Pod/guestbook-ui-85d-a1            Progressing  90s                                        ContainerCreating\n",
    "  └─Pod/guestbook-ui-85d-x2            Healthy      4h                                         \n",
    "Service/guestbook-ui           Synced  Healthy      <unknown>  service/guestbook-ui unchanged  \n",
    "└─Endpoints/guestbook-ui                            <unknown>                                  \n",
);

const LISTING_ALL: &str = concat!(
    "GROUP  KIND        NAMESPACE  NAME                 ORPHANED\n",
    "apps   ReplicaSet  default    guestbook-ui-85d     No\n",
    "       Pod         default    guestbook-ui-85d-a1  No\n",
    "       Pod         default    guestbook-ui-85d-x2  No\n",
    "       Endpoints   default    guestbook-ui         No\n",
    "       ConfigMap   default    kube-root-ca.crt     Yes\n",
    "       Secret      default    stale-token          Yes\n",
);

fn snapshot() -> Snapshot {
    Snapshot::from_reader(SNAPSHOT.as_bytes()).unwrap()
}

fn config(detail: Detail) -> RenderConfig {
    let reference_time: DateTime<Utc> = "2024-06-01T12:00:00Z".parse().unwrap();
    RenderConfig::builder()
        .detail(detail)
        .reference_time(reference_time)
        .build()
        .unwrap()
}

fn tree_text(tree: &ResourceTree, snapshot: &Snapshot, detail: Detail) -> String {
    let overlay = snapshot.overlay();
    let config = config(detail);
    let mut out = TabWriter::new(Vec::new()).padding(config.padding);
    render_tree_view(tree, Some(&overlay), &config, &mut out).unwrap();
    String::from_utf8(out.into_inner().unwrap()).unwrap()
}

#[test]
fn test_tree_view() {
    let snapshot = snapshot();
    let tree = snapshot.managed_tree().unwrap();
    assert_eq!(tree_text(&tree, &snapshot, Detail::Terse), TREE);
}

#[test]
fn test_detailed_tree_view() {
    let snapshot = snapshot();
    let tree = snapshot.managed_tree().unwrap();
    assert_eq!(tree_text(&tree, &snapshot, Detail::Detailed), DETAILED_TREE);
}

#[test]
fn test_output_independent_of_input_order() {
    let snapshot = snapshot();
    let forward = snapshot.managed_tree().unwrap();

    let mut shuffled_nodes = snapshot.nodes.clone();
    shuffled_nodes.reverse();
    shuffled_nodes.rotate_left(2);
    let shuffled = ResourceTree::from_nodes(shuffled_nodes).unwrap();

    for detail in [Detail::Terse, Detail::Detailed] {
        let first = tree_text(&forward, &snapshot, detail);
        let again = tree_text(&forward, &snapshot, detail);
        let reordered = tree_text(&shuffled, &snapshot, detail);
        assert_eq!(first, again);
        assert_eq!(first, reordered);
    }
}

#[test]
fn test_listing_all() {
    let snapshot = snapshot();
    let managed = snapshot.managed_tree().unwrap();
    let orphaned = snapshot.orphaned_tree().unwrap();
    let config = config(Detail::Terse);

    let mut out = TabWriter::new(Vec::new());
    let rows = render_listing(&managed, &orphaned, Selection::All, &config, &mut out).unwrap();
    let text = String::from_utf8(out.into_inner().unwrap()).unwrap();

    assert_eq!(rows, 6);
    assert_eq!(text, LISTING_ALL);
}

#[test]
fn test_listing_orphaned_detailed() {
    let snapshot = snapshot();
    let managed = snapshot.managed_tree().unwrap();
    let orphaned = snapshot.orphaned_tree().unwrap();
    let config = config(Detail::Detailed);

    let mut rows: Vec<Vec<String>> = Vec::new();
    render_listing(&managed, &orphaned, Selection::Orphaned, &config, &mut rows).unwrap();

    assert_eq!(
        rows,
        vec![
            vec!["GROUP", "KIND", "NAMESPACE", "NAME", "ORPHANED", "AGE", "HEALTH", "REASON"],
            vec!["", "ConfigMap", "default", "kube-root-ca.crt", "Yes", "<unknown>", "", ""],
            vec!["", "Secret", "default", "stale-token", "Yes", "<unknown>", "", ""],
        ]
    );
}

#[test]
fn test_not_orphaned_partition() {
    let snapshot = snapshot();
    let tree = snapshot.managed_tree().unwrap();
    let config = config(Detail::Terse);
    let renderer = FlatRenderer::new(&tree, &config);

    let mut rows: Vec<Vec<String>> = Vec::new();
    renderer.render_forest(Table::NotOrphaned, &mut rows).unwrap();

    let listed: Vec<&str> = rows.iter().map(|row| row[3].as_str()).collect();
    let expected: Vec<&str> = tree
        .iter()
        .filter(|node| !node.is_orphan())
        .map(|node| node.name.as_str())
        .collect();
    assert_eq!(listed.len(), expected.len());
    for name in expected {
        assert!(listed.contains(&name), "{name} missing from not-orphaned table");
    }
    assert!(rows.iter().all(|row| row[4] == "No"));
}

#[test]
fn test_deep_connectors() {
    let tree = ResourceTree::from_nodes(vec![
        ResourceNode::new("r", "A", "root"),
        ResourceNode::new("a", "B", "a").with_parent("r"),
        ResourceNode::new("b", "B", "b").with_parent("r"),
        ResourceNode::new("a1", "C", "a1").with_parent("a"),
        ResourceNode::new("a1x", "D", "a1x").with_parent("a1"),
        ResourceNode::new("a1y", "D", "a1y").with_parent("a1"),
        ResourceNode::new("b1", "C", "b1").with_parent("b"),
        ResourceNode::new("b1x", "D", "b1x").with_parent("b1"),
    ])
    .unwrap();
    let config = RenderConfig::default();
    let mut rows: Vec<Vec<String>> = Vec::new();
    TreeRenderer::new(&tree, &config)
        .render_forest(&mut rows)
        .unwrap();

    let labels: Vec<&str> = rows.iter().map(|row| row[0].as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "A/root",
            "├─B/a",
            "│ └─C/a1",
            "│   ├─D/a1x",
            "│   └─D/a1y",
            "└─B/b",
            "  └─C/b1",
            "    └─D/b1x",
        ]
    );
}

#[test]
fn test_childless_root_renders_one_line() {
    let tree = ResourceTree::from_nodes(vec![ResourceNode::new("x", "ConfigMap", "cfg")]).unwrap();
    let config = RenderConfig::default();
    let root = tree.get(&NodeId::new("x")).unwrap();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let written = TreeRenderer::new(&tree, &config)
        .render_tree(root, &mut rows)
        .unwrap();
    assert_eq!(written, 1);

    let mut flat_rows: Vec<Vec<String>> = Vec::new();
    let flat_written = FlatRenderer::new(&tree, &config)
        .render_flat(root, Table::Orphaned, &mut flat_rows)
        .unwrap();
    assert_eq!(flat_written, 1);
}

#[test]
fn test_cycle_fails_fast() {
    let tree = ResourceTree::from_nodes(vec![
        ResourceNode::new("r", "App", "root"),
        ResourceNode::new("a", "Svc", "a").with_parent("r").with_parent("b"),
        ResourceNode::new("b", "Pod", "b").with_parent("a"),
    ])
    .unwrap();
    let config = RenderConfig::default();
    let root = tree.get(&NodeId::new("r")).unwrap();

    let mut rows: Vec<Vec<String>> = Vec::new();
    let err = TreeRenderer::new(&tree, &config)
        .render_tree(root, &mut rows)
        .unwrap_err();
    assert!(matches!(
        err,
        RenderError::MalformedGraph {
            defect: GraphDefect::Cycle,
            ..
        }
    ));
}

struct FailingSink;

impl RowSink for FailingSink {
    fn write_row(&mut self, _cells: &[&str]) -> std::io::Result<()> {
        Err(std::io::Error::other("sink closed"))
    }
}

#[test]
fn test_sink_errors_propagate() {
    let tree = ResourceTree::from_nodes(vec![ResourceNode::new("x", "Pod", "p")]).unwrap();
    let config = RenderConfig::default();
    let err = render_tree_view(&tree, None, &config, &mut FailingSink).unwrap_err();
    assert!(matches!(err, RenderError::Io { .. }));
}
