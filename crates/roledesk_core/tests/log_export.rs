use roledesk_core::export::csv::LOG_CSV_HEADER;
use roledesk_core::query::logs::{filter_logs, LogFilter, LogWindow};
use roledesk_core::{export_logs_csv, DomainStore};

fn fixed_now() -> i64 {
    1_700_000_000_000
}

#[test]
fn export_replaces_commas_in_details() {
    let mut store = DomainStore::empty_with_clock(fixed_now);
    store.add_system_log("Note", "1", "Admin User", "alpha, beta, gamma");

    let csv = export_logs_csv(store.system_logs());
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], LOG_CSV_HEADER);
    assert!(lines[1].ends_with(",Note,Admin User,alpha; beta; gamma"));
    assert_eq!(lines[1].split(',').count(), 4);
}

#[test]
fn export_of_filtered_view_keeps_order() {
    let mut store = DomainStore::seeded_with_clock(fixed_now);
    store.add_system_log("Export Check", "1", "Admin User", "first");
    store.add_system_log("Export Check", "1", "Admin User", "second");

    let filter = LogFilter {
        action: Some("Export Check".to_string()),
        window: LogWindow::All,
        ..LogFilter::default()
    };
    let entries = filter_logs(&store, &filter, fixed_now());
    let csv = export_logs_csv(entries);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with(",second"));
    assert!(lines[2].ends_with(",first"));
}
