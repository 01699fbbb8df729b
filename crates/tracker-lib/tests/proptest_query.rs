//! Property-based tests for the list query engine.
//!
//! Uses proptest to verify that:
//! - Title filtering has no false positives or negatives
//! - Sorting is stable among tied issues in both directions
//! - Pagination returns the expected slice sizes
//! - Status-only updates leave other fields alone

use proptest::prelude::*;
use tracing::info;

use tracker_lib::filter::apply_filters;
use tracker_lib::sort::sort_issues;
use tracker_lib::{
    IssueUpdate, ListFilters, ListQuery, NewIssue, PageRequest, Priority, SortField, SortOrder,
    Status, Tracker,
};

/// Initialize test logging for proptest
fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_test_writer()
        .try_init();
}

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop::sample::select(Priority::ALL.to_vec())
}

fn status_strategy() -> impl Strategy<Value = Status> {
    prop::sample::select(Status::ALL.to_vec())
}

fn payload_strategy() -> impl Strategy<Value = NewIssue> {
    (
        "[a-zA-Z ]{1,12}",
        status_strategy(),
        priority_strategy(),
        prop::option::of("[a-zA-Z]{1,6}"),
    )
        .prop_map(|(title, status, priority, assignee)| NewIssue {
            title: Some(title),
            description: None,
            status: Some(status),
            priority: Some(priority),
            assignee,
        })
}

fn tracker_with(payloads: Vec<NewIssue>) -> Tracker {
    let mut tracker = Tracker::new();
    for payload in payloads {
        tracker.create_issue(payload).expect("create");
    }
    tracker
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..Default::default()
    })]

    /// Property: title filter returns exactly the issues whose title contains the needle
    #[test]
    fn title_filter_is_exact(
        payloads in prop::collection::vec(payload_strategy(), 0..40),
        needle in "[a-zA-Z]{1,2}",
    ) {
        init_test_logging();
        info!("proptest_title_filter: issues={} needle={needle}", payloads.len());

        let tracker = tracker_with(payloads);
        let filters = ListFilters {
            title_contains: Some(needle.clone()),
            ..Default::default()
        };
        let lowered = needle.to_lowercase();

        let got: Vec<&str> = apply_filters(tracker.store_scan(), &filters)
            .map(|i| i.id.as_str())
            .collect();
        let expected: Vec<&str> = tracker
            .store_scan()
            .filter(|i| i.title.to_lowercase().contains(&lowered))
            .map(|i| i.id.as_str())
            .collect();

        prop_assert_eq!(got, expected);
    }

    /// Property: sorting by priority keeps insertion order among ties
    #[test]
    fn priority_sort_is_stable(
        payloads in prop::collection::vec(payload_strategy(), 0..40),
        ascending in any::<bool>(),
    ) {
        init_test_logging();
        let order = if ascending { SortOrder::Asc } else { SortOrder::Desc };
        info!("proptest_priority_sort: issues={} order={order:?}", payloads.len());

        let tracker = tracker_with(payloads);
        let original: Vec<&str> = tracker.store_scan().map(|i| i.id.as_str()).collect();
        let mut sorted: Vec<_> = tracker.store_scan().collect();
        sort_issues(&mut sorted, Some(SortField::Priority), order);

        for pair in sorted.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if a.priority == b.priority {
                let pos_a = original.iter().position(|id| *id == a.id);
                let pos_b = original.iter().position(|id| *id == b.id);
                prop_assert!(pos_a < pos_b, "tie {} / {} out of input order", a.id, b.id);
            } else if ascending {
                prop_assert!(a.priority.as_str() < b.priority.as_str());
            } else {
                prop_assert!(a.priority.as_str() > b.priority.as_str());
            }
        }
    }

    /// Property: page sizes follow from the total count
    #[test]
    fn page_sizes_match_total(
        count in 0usize..60,
        page in 1usize..10,
        page_size in 1usize..=100,
    ) {
        init_test_logging();
        info!("proptest_pagination: count={count} page={page} size={page_size}");

        let tracker = tracker_with((0..count).map(|n| NewIssue::titled(format!("t{n}"))).collect());
        let query = ListQuery {
            page: PageRequest::new(page, page_size).expect("valid page"),
            ..Default::default()
        };
        let got = tracker.list_issues(&query).len();
        let expected = count.saturating_sub((page - 1) * page_size).min(page_size);
        prop_assert_eq!(got, expected);
    }

    /// Property: updating only status leaves every other field untouched
    #[test]
    fn status_update_is_sparse(payload in payload_strategy(), status in status_strategy()) {
        init_test_logging();

        let mut tracker = Tracker::new();
        let before = tracker.create_issue(payload).expect("create");
        let update = IssueUpdate { status: Some(status), ..Default::default() };
        let after = tracker.update_issue(&before.id, &update).expect("update");

        prop_assert_eq!(after.status, status);
        prop_assert_eq!(&after.title, &before.title);
        prop_assert_eq!(&after.description, &before.description);
        prop_assert_eq!(&after.assignee, &before.assignee);
        prop_assert_eq!(after.priority, before.priority);
        prop_assert_eq!(after.created_at, before.created_at);
        prop_assert!(after.updated_at >= before.updated_at);
    }
}

/// Scan helper so the properties read against the tracker's own store.
trait StoreScan {
    fn store_scan(&self) -> Box<dyn Iterator<Item = &tracker_lib::Issue> + '_>;
}

impl StoreScan for Tracker {
    fn store_scan(&self) -> Box<dyn Iterator<Item = &tracker_lib::Issue> + '_> {
        use tracker_lib::IssueStore;
        self.store().scan()
    }
}

#[test]
fn pagination_over_25_issues() {
    init_test_logging();
    let tracker = tracker_with((0..25).map(|n| NewIssue::titled(format!("t{n}"))).collect());
    let sizes: Vec<usize> = (1..=4)
        .map(|page| {
            let query = ListQuery {
                page: PageRequest::new(page, 10).expect("valid page"),
                ..Default::default()
            };
            tracker.list_issues(&query).len()
        })
        .collect();
    assert_eq!(sizes, vec![10, 10, 5, 0]);
}
