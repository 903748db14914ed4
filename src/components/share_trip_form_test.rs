use super::*;

#[test]
fn validate_share_trip_trims_content_and_location() {
    let data = validate_share_trip("  Sunset at Cox's Bazar  ", "  Cox's Bazar ", vec!["a.jpg".to_owned()]).unwrap();
    assert_eq!(data.content, "Sunset at Cox's Bazar");
    assert_eq!(data.location.as_deref(), Some("Cox's Bazar"));
    assert_eq!(data.images, ["a.jpg"]);
}

#[test]
fn validate_share_trip_blank_location_is_none() {
    let data = validate_share_trip("Hiking", "   ", Vec::new()).unwrap();
    assert_eq!(data.location, None);
}

#[test]
fn validate_share_trip_requires_content() {
    assert_eq!(validate_share_trip("   ", "Bandarban", Vec::new()), Err(EMPTY_CONTENT_MESSAGE));
    assert_eq!(validate_share_trip("", "", Vec::new()), Err(EMPTY_CONTENT_MESSAGE));
}

#[test]
fn mock_image_urls_are_unique() {
    let a = mock_image_url();
    let b = mock_image_url();
    assert_ne!(a, b);
    assert!(a.starts_with("https://images.unsplash.com/photo-"));
}

#[test]
fn remove_image_drops_index() {
    let mut images = vec!["a".to_owned(), "b".to_owned(), "c".to_owned()];
    remove_image(&mut images, 1);
    assert_eq!(images, ["a", "c"]);
}

#[test]
fn remove_image_out_of_range_is_noop() {
    let mut images = vec!["a".to_owned()];
    remove_image(&mut images, 5);
    assert_eq!(images, ["a"]);
}

// =============================================================
// Submit status
// =============================================================

fn submitting() -> SubmitStatus {
    let mut status = SubmitStatus::default();
    status.start();
    status
}

#[test]
fn rejected_submit_keeps_form_open_for_retry() {
    let mut status = submitting();
    let close = status.settle(&Err(SubmitError::Rejected("sign in to share a trip".to_owned())));
    assert!(!close);
    assert!(!status.is_submitting);
    assert_eq!(status.error.as_deref(), Some(REJECTED_MESSAGE));
}

#[test]
fn accepted_submit_closes_and_resets() {
    let mut status = submitting();
    assert!(status.settle(&Ok(())));
    assert_eq!(status, SubmitStatus::default());
}

#[test]
fn cancelled_submit_leaves_status_alone() {
    let mut status = submitting();
    assert!(!status.settle(&Err(SubmitError::Cancelled)));
    assert!(status.is_submitting);
}

#[test]
fn start_clears_previous_error() {
    let mut status = SubmitStatus { is_submitting: false, error: Some("old".to_owned()) };
    status.start();
    assert!(status.is_submitting);
    assert_eq!(status.error, None);
}
