use perf_rater::parser::parse_feed;
use perf_rater::ranking::engine::report;
use perf_rater::ranking::selector::{search, selector_order};
use perf_rater::schema::FeedSchema;

#[test]
fn test_full_pipeline() {
    let bytes = include_bytes!("fixtures/sample_feed.json");
    let dataset = parse_feed(bytes, &FeedSchema::default()).expect("Failed to parse feed");

    assert_eq!(dataset.len(), 5);

    let result = report(&dataset, Some("influencer-0000-03"), "1st_total");

    // 120 + 40 + 310 + 0 (empty string) + 88 over 5 rows
    assert_eq!(result.average, 111.6);
    assert_eq!(result.total, 5);
    assert_eq!(result.rank, Some(2));
    assert_eq!(result.percentile, Some(75.0));
    assert_eq!(result.badge.as_deref(), Some("top-25%"));
    assert_eq!(
        result.selected.as_ref().and_then(|r| r.tier.as_deref()),
        Some("Gold")
    );

    let top = report(&dataset, Some("influencer-0000-10"), "1st_total");
    assert_eq!(top.rank, Some(1));
    assert_eq!(top.percentile, Some(100.0));
    assert_eq!(top.badge.as_deref(), Some("top-10%"));
}

#[test]
fn test_selector_pipeline() {
    let bytes = include_bytes!("fixtures/sample_feed.json");
    let dataset = parse_feed(bytes, &FeedSchema::default()).expect("Failed to parse feed");

    let ordered = selector_order(&dataset);
    let ids: Vec<_> = ordered.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "influencer-0000-01",
            "influencer-0000-02",
            "influencer-0000-03",
            "influencer-0000-07",
            "influencer-0000-10",
        ]
    );

    let hits = search(&ordered, "0000-0");
    assert_eq!(hits.len(), 4);
    assert!(hits.iter().all(|r| r.id.contains("0000-0")));
}
