use navigation::{LocationPrimitive, MemoryLocation, NavigationHistory};
use pretty_assertions::assert_eq;

/// Deliver whatever the location currently says, as the host's change
/// notification would.
fn settle(history: &mut NavigationHistory, location: &MemoryLocation) -> bool {
    history.observe(&location.current_path())
}

#[test]
fn back_then_navigate_replaces_forward_entries() {
    let mut location = MemoryLocation::new("/a");
    let mut history = NavigationHistory::from_location(&location);

    history.navigate("/b", &mut location);
    settle(&mut history, &location);
    assert_eq!(history.entries(), ["/a", "/b"]);
    assert_eq!(history.current_index(), 1);

    assert!(history.go_back(&mut location));
    settle(&mut history, &location);
    assert_eq!(history.current_index(), 0);
    assert_eq!(location.current_path(), "/a");

    history.navigate("/c", &mut location);
    settle(&mut history, &location);
    assert_eq!(history.entries(), ["/a", "/c"]);
    assert_eq!(history.current_index(), 1);
    assert_eq!(location.requests(), ["/b", "/a", "/c"]);
}

#[test]
fn back_at_start_requests_nothing() {
    let mut location = MemoryLocation::new("/dashboard/clinician");
    let mut history = NavigationHistory::from_location(&location);

    assert!(!history.go_back(&mut location));
    assert!(!history.is_navigating());
    assert_eq!(history.entries(), ["/dashboard/clinician"]);
    assert!(location.requests().is_empty());
}

#[test]
fn forward_at_end_requests_nothing() {
    let mut location = MemoryLocation::new("/a");
    let mut history = NavigationHistory::from_location(&location);
    history.navigate("/b", &mut location);
    settle(&mut history, &location);

    assert!(!history.go_forward(&mut location));
    assert_eq!(location.requests(), ["/b"]);
    assert_eq!(history.current(), "/b");
}

#[test]
fn external_location_changes_are_not_recorded() {
    let mut location = MemoryLocation::new("/a");
    let mut history = NavigationHistory::from_location(&location);

    // A redirect or the browser's own back button moves the location
    // without going through the tracker.
    location.set_location("/dashboard/recruiter").unwrap();
    assert!(!settle(&mut history, &location));
    assert_eq!(history.entries(), ["/a"]);
    assert_eq!(history.current_index(), 0);
}

#[test]
fn traversal_settles_without_appending() {
    let mut location = MemoryLocation::new("/a");
    let mut history = NavigationHistory::from_location(&location);
    for path in ["/b", "/c"] {
        history.navigate(path, &mut location);
        settle(&mut history, &location);
    }

    history.go_back(&mut location);
    assert!(history.is_navigating());
    assert!(!settle(&mut history, &location));
    assert!(!history.is_navigating());

    history.go_forward(&mut location);
    settle(&mut history, &location);
    assert_eq!(history.entries(), ["/a", "/b", "/c"]);
    assert_eq!(history.current(), "/c");
}

#[test]
fn index_stays_in_bounds_through_mixed_operations() {
    let mut location = MemoryLocation::new("/");
    let mut history = NavigationHistory::from_location(&location);

    let script: [&str; 10] = ["n:/x", "b", "b", "n:/y", "f", "n:/z", "b", "b", "b", "f"];
    for step in script {
        match step.split_once(':') {
            Some(("n", path)) => {
                history.navigate(path, &mut location);
            }
            _ if step == "b" => {
                history.go_back(&mut location);
            }
            _ => {
                history.go_forward(&mut location);
            }
        }
        settle(&mut history, &location);
        assert!(history.current_index() < history.entries().len());
        assert_eq!(history.current(), location.current_path());
    }
    assert_eq!(history.entries(), ["/", "/y", "/z"]);
    assert_eq!(history.current_index(), 1);
}

#[test]
fn breadcrumbs_follow_current_index() {
    let mut location = MemoryLocation::new("/dashboard/clinician");
    let mut history = NavigationHistory::from_location(&location);
    for path in ["/referrals", "/referrals/r-1"] {
        history.navigate(path, &mut location);
        settle(&mut history, &location);
    }
    assert_eq!(
        history.breadcrumbs(),
        ["/dashboard/clinician", "/referrals", "/referrals/r-1"]
    );
    history.go_back(&mut location);
    settle(&mut history, &location);
    assert_eq!(history.breadcrumbs(), ["/dashboard/clinician", "/referrals"]);
}

#[test]
fn clicking_the_current_page_does_not_arm_the_next_change() {
    let mut location = MemoryLocation::new("/jobs");
    let mut history = NavigationHistory::from_location(&location);

    // Sidebar link for the page already shown: the router has nothing to
    // report, so no observation follows.
    assert!(!history.navigate("/jobs", &mut location));
    assert!(!history.is_navigating());

    // A later redirect or browser back still goes unrecorded.
    location.set_location("/rewards").unwrap();
    assert!(!settle(&mut history, &location));
    assert_eq!(history.entries(), ["/jobs"]);
    assert_eq!(history.current_index(), 0);
}

#[test]
fn click_after_same_page_click_is_still_recorded() {
    let mut location = MemoryLocation::new("/referrals/new");
    let mut history = NavigationHistory::from_location(&location);

    history.navigate("/referrals/new", &mut location);
    history.navigate("/referrals", &mut location);
    assert!(settle(&mut history, &location));
    assert_eq!(history.entries(), ["/referrals/new", "/referrals"]);
    assert_eq!(location.requests(), ["/referrals"]);
}
