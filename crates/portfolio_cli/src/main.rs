//! CLI smoke entry point.
//!
//! # Responsibility
//! - Run one recomputation over built-in sample data to verify
//!   `portfolio_core` wiring end to end.
//! - Keep output deterministic for quick local sanity checks.

use portfolio_core::{
    Catalog, ItemRecord, PortfolioService, Selection, Topic, Viewpoint,
};
use std::process::ExitCode;

fn sample_viewpoints() -> Vec<Viewpoint> {
    vec![Viewpoint::new(
        "v1",
        "Food",
        vec![
            Topic::root("fruit", "Fruit"),
            Topic::narrower("apple", "Apple", ["fruit"]),
            Topic::root("vegetable", "Vegetable"),
        ],
    )]
}

fn sample_catalog() -> Catalog {
    let records = [
        ("i1", "Apple still life", vec!["apple"]),
        ("i2", "Carrot study", vec!["vegetable"]),
        ("i3", "Fruit basket", vec!["fruit"]),
    ]
    .map(|(id, name, topics)| ItemRecord {
        id: id.to_string(),
        name: Some(name.to_string()),
        thumbnail: Some(format!("{id}.jpg")),
        corpus: "samples".to_string(),
        topics: topics.into_iter().map(str::to_string).collect(),
    });
    Catalog::from_records(records)
}

fn main() -> ExitCode {
    // Topic ids passed as arguments become the selection; no arguments
    // means the show-everything default.
    let selection = Selection::from_values(std::env::args().skip(1));

    let service = PortfolioService::with_defaults();
    let view = match service.recompute(&sample_viewpoints(), &sample_catalog(), &selection) {
        Ok(view) => view,
        Err(err) => {
            eprintln!("portfolio_core error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("portfolio_core version={}", portfolio_core::core_version());
    println!("status: {}", view.status);
    println!("matched {} of {} items", view.items.len(), view.total_items);
    for item in &view.items {
        println!("  {} ({})", item.name, item.id);
    }
    for viewpoint in &view.viewpoints {
        println!("{}:", viewpoint.name);
        for (topic_id, topic) in &viewpoint.topics {
            println!("  {} [{}]", topic.name, view.index.count_under(topic_id));
        }
    }

    ExitCode::SUCCESS
}
