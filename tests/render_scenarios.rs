//! Integration tests for full render passes over an in-memory store.

use eventlens::core::catalog::Severity;
use eventlens::core::pagination::PageRequest;
use eventlens::core::record::Row;
use eventlens::core::render_pass::{RenderPlan, SecurityViewPipeline};
use eventlens::store::query::SearchQuery;
use eventlens::store::{IndexStore, SearchSource};
use eventlens::ui::render_plan;

fn security_store(ids: &[&str]) -> IndexStore {
    let rows = ids
        .iter()
        .map(|&id| {
            [("EventID", id), ("Computer", "DC01")]
                .into_iter()
                .collect::<Row>()
        })
        .collect();
    let mut store = IndexStore::new();
    store.insert_index("SecurityEvents", rows);
    store
}

#[test]
fn empty_store_renders_nothing() {
    let store = IndexStore::new();
    let plan = SecurityViewPipeline::default().plan(
        store.index_count(),
        &store.search_results(),
        PageRequest::new(1, 10),
    );
    assert_eq!(plan, RenderPlan::Nothing);
    assert_eq!(render_plan(&plan, false), "");
}

#[test]
fn twenty_five_results_paged_by_ten() {
    let mut store = IndexStore::new();
    let rows = (0..25)
        .map(|i| [("seq", i.to_string())].into_iter().collect::<Row>())
        .collect();
    store.insert_index("Proxy", rows);

    let results = store.search_results();
    assert_eq!(results.len(), 25);

    let plan = SecurityViewPipeline::default().plan(
        store.index_count(),
        &results,
        PageRequest::new(1, 10),
    );
    let summary = plan.summary().expect("summary");
    assert_eq!(summary.total_pages, 3);
    assert!(!summary.has_previous);
    let RenderPlan::Table(table) = &plan else {
        panic!("expected table view");
    };
    assert_eq!(table.rows.len(), 10);
    assert_eq!(table.rows[0].cells, vec!["0"]);
}

#[test]
fn totals_reflect_filtered_population() {
    let mut ids = vec!["4625"; 15];
    ids.extend(vec!["5156"; 10]);
    let store = security_store(&ids);

    let plan = SecurityViewPipeline::default().plan(
        store.index_count(),
        &store.search_results(),
        PageRequest::new(2, 10),
    );
    let RenderPlan::Cards(page) = plan else {
        panic!("expected card view");
    };
    assert_eq!(page.summary.displayed_count, 15);
    assert_eq!(page.summary.hidden_count, 10);
    assert_eq!(page.summary.total_pages, 2);
    assert_eq!(page.cards.len(), 5);
    assert!(page.cards.iter().all(|c| c.view.severity == Severity::Warn));
}

#[test]
fn query_that_matches_nothing_falls_back_to_table() {
    let mut store = security_store(&["4624", "4625"]);
    store.set_query(SearchQuery::substring("no-such-value"));

    let plan = SecurityViewPipeline::default().plan(
        store.index_count(),
        &store.search_results(),
        PageRequest::new(1, 10),
    );
    assert!(matches!(plan, RenderPlan::Table(_)));
    let text = render_plan(&plan, false);
    assert!(text.contains("No results found"));
    assert!(text.starts_with("0 results from 0 indexes"));
}

#[test]
fn adding_a_second_index_disables_cards() {
    let mut store = security_store(&["4624", "9999"]);
    store.insert_index(
        "Dns",
        vec![[("query", "example.org")].into_iter().collect::<Row>()],
    );

    let plan = SecurityViewPipeline::default().plan(
        store.index_count(),
        &store.search_results(),
        PageRequest::new(1, 10),
    );
    let RenderPlan::Table(table) = plan else {
        panic!("expected table view");
    };
    assert_eq!(table.summary.hidden_count, 0);
    assert_eq!(table.summary.displayed_count, 3);
    assert_eq!(table.columns, vec!["query", "EventID", "Computer"]);
}

#[test]
fn card_text_output() {
    let store = security_store(&["1102"]);
    let plan = SecurityViewPipeline::default().plan(
        store.index_count(),
        &store.search_results(),
        PageRequest::new(1, 10),
    );
    let text = render_plan(&plan, false);
    assert!(text.starts_with("1 high-value events from 1 index"));
    assert!(text.contains("[X] 1102 Audit Log Was Cleared [Defense Evasion]"));
}

#[test]
fn demo_dataset_end_to_end() {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let mut store = IndexStore::new();
    let loaded = store
        .load_csv_path(&demos.join("SecurityEvents.csv"))
        .expect("load demo csv");
    assert_eq!(loaded, 5);

    let config = eventlens::util::config::ViewConfig::from_path(&demos.join("config.json"))
        .expect("load demo config");
    let pipeline = config.build_pipeline().expect("pipeline");
    let plan = pipeline.plan(
        store.index_count(),
        &store.search_results(),
        PageRequest::new(1, config.page_size),
    );
    let RenderPlan::Cards(page) = plan else {
        panic!("expected card view");
    };
    assert_eq!(page.summary.displayed_count, 4);
    assert_eq!(page.summary.hidden_count, 1);

    let failed = &page.cards[0].view;
    assert_eq!(failed.field("Source IP"), Some("10.0.0.5"));
    assert_eq!(failed.field("Failure Reason"), Some("%%2313"));
    // SubStatus is a lower-priority alias of Failure Reason, so it stays extra.
    assert_eq!(failed.extra_fields.len(), 1);
    assert_eq!(failed.extra_fields[0].key, "SubStatus");
}

#[test]
fn demo_catalog_narrows_high_value_set() {
    let demos = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos");
    let mut store = IndexStore::new();
    store
        .load_csv_path(&demos.join("SecurityEvents.csv"))
        .expect("load demo csv");
    let config = eventlens::util::config::ViewConfig {
        catalog_path: Some(demos.join("catalog.json")),
        ..Default::default()
    };
    let pipeline = config.build_pipeline().expect("pipeline");
    let results = store.search_results();
    let (displayed, hidden) = pipeline.displayed(&results);
    assert_eq!(displayed.len(), 3);
    assert_eq!(hidden, 2);
}
