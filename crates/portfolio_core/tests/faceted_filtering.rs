use portfolio_core::{
    closure, matches, Catalog, InvertedIndex, ItemRecord, ParentPolicy, PortfolioService,
    Selection, Topic, TopicGraph, Viewpoint,
};

fn food_viewpoint() -> Viewpoint {
    Viewpoint::new(
        "v1",
        "Food",
        vec![
            Topic::root("fruit", "Fruit"),
            Topic::narrower("apple", "Apple", ["fruit"]),
            Topic::root("vegetable", "Vegetable"),
        ],
    )
}

fn record(id: &str, name: &str, topics: &[&str]) -> ItemRecord {
    ItemRecord {
        id: id.to_string(),
        name: Some(name.to_string()),
        thumbnail: Some(format!("{id}.jpg")),
        corpus: "c1".to_string(),
        topics: topics.iter().map(|t| t.to_string()).collect(),
    }
}

fn catalog() -> Catalog {
    Catalog::from_records([
        record("i1", "Apple still life", &["apple"]),
        record("i2", "Untagged sketch", &[]),
        record("i3", "Carrot study", &["vegetable"]),
    ])
}

#[test]
fn closure_is_a_superset_of_direct_topics() {
    let graph = TopicGraph::build(&[food_viewpoint()]);
    let catalog = catalog();

    for item in catalog.items() {
        let closed = closure(&graph, item, ParentPolicy::default()).unwrap();
        for direct in &item.topics {
            assert!(closed.contains(direct), "closure must contain {direct}");
        }
    }
}

#[test]
fn ancestor_selection_matches_descendant_tagged_item() {
    let graph = TopicGraph::build(&[food_viewpoint()]);
    let catalog = catalog();
    let apple_item = &catalog.items()[0];
    assert_eq!(apple_item.id, "i1");

    for selected in [vec!["fruit"], vec!["fruit", "apple"]] {
        let selection = Selection::from_values(selected);
        assert!(matches(&graph, apple_item, &selection, ParentPolicy::default()).unwrap());
    }

    let vegetable = Selection::from_values(["vegetable"]);
    assert!(!matches(&graph, apple_item, &vegetable, ParentPolicy::default()).unwrap());
}

#[test]
fn conjunction_is_the_and_of_memberships() {
    let graph = TopicGraph::build(&[food_viewpoint()]);
    let catalog = catalog();

    let selection = Selection::from_values(["fruit", "vegetable"]);
    for item in catalog.items() {
        let closed = closure(&graph, item, ParentPolicy::default()).unwrap();
        let expected = closed.contains("fruit") && closed.contains("vegetable");
        let matched = matches(&graph, item, &selection, ParentPolicy::default()).unwrap();
        assert_eq!(matched, expected, "item {}", item.id);
    }
}

#[test]
fn topicless_item_matches_only_the_empty_selection() {
    let service = PortfolioService::with_defaults();
    let viewpoints = vec![food_viewpoint()];
    let catalog = catalog();

    let everything = service
        .recompute(&viewpoints, &catalog, &Selection::empty())
        .unwrap();
    assert!(everything.items.iter().any(|item| item.id == "i2"));

    let fruity = service
        .recompute(&viewpoints, &catalog, &Selection::from_values(["fruit"]))
        .unwrap();
    assert!(fruity.items.iter().all(|item| item.id != "i2"));
}

#[test]
fn index_membership_mirrors_match_and_closure() {
    let graph = TopicGraph::build(&[food_viewpoint()]);
    let catalog = catalog();
    let selection = Selection::from_values(["fruit"]);

    let mut matched = Vec::new();
    for item in catalog.items() {
        if matches(&graph, item, &selection, ParentPolicy::default()).unwrap() {
            matched.push(item.clone());
        }
    }
    let index = InvertedIndex::build(&graph, &matched, ParentPolicy::default()).unwrap();

    // Matched items appear under every topic of their closure, and only
    // there; unmatched items appear nowhere.
    for topic in ["fruit", "apple", "vegetable"] {
        for item in catalog.items() {
            let closed = closure(&graph, item, ParentPolicy::default()).unwrap();
            let is_matched = matched.iter().any(|m| m.id == item.id);
            let listed = index
                .items_under(topic)
                .map(|ids| ids.contains(&item.id))
                .unwrap_or(false);
            assert_eq!(listed, is_matched && closed.contains(topic));
        }
    }

    assert_eq!(index.count_under("fruit"), 1);
    assert_eq!(index.count_under("apple"), 1);
    assert_eq!(index.count_under("vegetable"), 0);
}

#[test]
fn recompute_reports_catalog_summary() {
    let service = PortfolioService::with_defaults();
    let view = service
        .recompute(
            &[food_viewpoint()],
            &catalog(),
            &Selection::from_values(["fruit"]),
        )
        .unwrap();

    assert_eq!(view.items.len(), 1);
    assert_eq!(view.total_items, 3);
    assert_eq!(view.corpus_ids.len(), 1);
    assert!(view.corpus_ids.contains("c1"));
    assert_eq!(view.status, "Fruit");
}

#[test]
fn recompute_is_idempotent_for_unchanged_snapshots() {
    let service = PortfolioService::with_defaults();
    let viewpoints = vec![food_viewpoint()];
    let catalog = catalog();
    let selection = Selection::from_values(["fruit"]);

    let first = service.recompute(&viewpoints, &catalog, &selection).unwrap();
    let second = service.recompute(&viewpoints, &catalog, &selection).unwrap();
    assert_eq!(first, second);
}

#[test]
fn cyclic_taxonomy_surfaces_as_an_error_not_a_hang() {
    let service = PortfolioService::with_defaults();
    let viewpoints = vec![Viewpoint::new(
        "v1",
        "Broken",
        vec![
            Topic::narrower("a", "A", ["b"]),
            Topic::narrower("b", "B", ["a"]),
        ],
    )];
    let catalog = Catalog::from_records([record("i1", "Tagged into the cycle", &["a"])]);

    let err = service
        .recompute(&viewpoints, &catalog, &Selection::empty())
        .unwrap_err();
    assert_eq!(err.topic_id, "a");
}
