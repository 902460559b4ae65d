use portfolio_core::{resolve, Topic, TopicGraph, Viewpoint};

fn graph(topics: Vec<Topic>) -> TopicGraph {
    TopicGraph::build(&[Viewpoint::new("v1", "Test", topics)])
}

#[test]
fn resolved_path_ends_with_queried_id_and_is_never_empty() {
    let graph = graph(vec![
        Topic::root("era", "Era"),
        Topic::narrower("antique", "Antiquity", ["era"]),
        Topic::narrower("roman", "Roman", ["antique"]),
    ]);

    for id in ["era", "antique", "roman", "unknown"] {
        let path = resolve(&graph, id).unwrap();
        assert!(!path.is_empty());
        assert_eq!(path.last().map(String::as_str), Some(id));
    }
}

#[test]
fn deep_chain_resolves_root_first() {
    let graph = graph(vec![
        Topic::root("era", "Era"),
        Topic::narrower("antique", "Antiquity", ["era"]),
        Topic::narrower("roman", "Roman", ["antique"]),
    ]);

    let path = resolve(&graph, "roman").unwrap();
    assert_eq!(path, vec!["era", "antique", "roman"]);
}

#[test]
fn first_seen_viewpoint_defines_the_chain_on_collision() {
    // Both viewpoints define "roman", with different parents; the first
    // scanned viewpoint wins and the second definition is shadowed.
    let materials = Viewpoint::new(
        "v1",
        "Materials",
        vec![
            Topic::root("pottery", "Pottery"),
            Topic::narrower("roman", "Roman ware", ["pottery"]),
        ],
    );
    let periods = Viewpoint::new(
        "v2",
        "Periods",
        vec![
            Topic::root("era", "Era"),
            Topic::narrower("roman", "Roman period", ["era"]),
        ],
    );

    let graph = TopicGraph::build(&[materials, periods]);
    assert_eq!(graph.shadowed_count(), 1);

    let path = resolve(&graph, "roman").unwrap();
    assert_eq!(path, vec!["pottery", "roman"]);
}

#[test]
fn self_parented_topic_is_reported_as_cycle() {
    let graph = graph(vec![Topic::narrower("loop", "Loop", ["loop"])]);

    let err = resolve(&graph, "loop").unwrap_err();
    assert_eq!(err.topic_id, "loop");
    assert_eq!(err.cycle.first().map(String::as_str), Some("loop"));
    assert_eq!(err.cycle.last().map(String::as_str), Some("loop"));
}

#[test]
fn long_cycle_is_reported_from_any_entry_point() {
    let graph = graph(vec![
        Topic::narrower("a", "A", ["b"]),
        Topic::narrower("b", "B", ["c"]),
        Topic::narrower("c", "C", ["a"]),
    ]);

    for entry in ["a", "b", "c"] {
        let err = resolve(&graph, entry).unwrap_err();
        assert_eq!(err.topic_id, entry);
        assert_eq!(err.cycle.len(), 4);
    }
}

#[test]
fn branch_below_a_cycle_still_fails() {
    let graph = graph(vec![
        Topic::narrower("a", "A", ["b"]),
        Topic::narrower("b", "B", ["a"]),
        Topic::narrower("leaf", "Leaf", ["a"]),
    ]);

    assert!(resolve(&graph, "leaf").is_err());
}
