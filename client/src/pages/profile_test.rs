use super::*;

#[test]
fn update_copies_editable_fields() {
    let profile = OwnFreelancerProfile {
        public_slug: "ava-designs".to_owned(),
        headline: "Brand designer".to_owned(),
        work_types: vec!["remote".to_owned()],
        specialty_ids: vec![3, 5],
        flair_ids: vec![1],
        custom_specialties: vec!["Lettering".to_owned()],
        is_public: Some(false),
        status: "PENDING".to_owned(),
        ..OwnFreelancerProfile::default()
    };
    let update = update_from_profile(&profile);
    assert_eq!(update.public_slug, "ava-designs");
    assert_eq!(update.specialty_ids, vec![3, 5]);
    assert_eq!(update.custom_specialties, vec!["Lettering".to_owned()]);
    assert!(!update.is_public);
}

#[test]
fn missing_visibility_defaults_to_public() {
    assert!(update_from_profile(&OwnFreelancerProfile::default()).is_public);
}

#[test]
fn not_found_profile_is_empty() {
    let missing = Err(ApiError::Status {
        status: 404,
        message: "Not found.".to_owned(),
    });
    assert_eq!(profile_or_default(missing).unwrap(), OwnFreelancerProfile::default());

    let denied = Err(ApiError::Status {
        status: 403,
        message: "nope".to_owned(),
    });
    assert!(profile_or_default(denied).is_err());
}

#[test]
fn toggles_add_then_remove() {
    let mut ids = vec![1, 2];
    toggle_id(&mut ids, 3);
    assert_eq!(ids, vec![1, 2, 3]);
    toggle_id(&mut ids, 1);
    assert_eq!(ids, vec![2, 3]);

    let mut work = Vec::new();
    toggle_value(&mut work, "hybrid");
    assert_eq!(work, vec!["hybrid".to_owned()]);
    toggle_value(&mut work, "hybrid");
    assert!(work.is_empty());
}

#[test]
fn status_label_maps_known_states() {
    assert_eq!(status_label(""), "Draft");
    assert_eq!(status_label("APPROVED"), "Published");
    assert_eq!(status_label("ARCHIVED"), "ARCHIVED");
}
