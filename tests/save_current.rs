mod common;

use cc_switch::profile::Profile;
use cc_switch::switcher::CaptureRequest;
use cc_switch::StoreError;
use common::Fixture;
use serde_json::json;

#[test]
fn captures_known_fields_with_suggestions() {
    let fixture = Fixture::with_settings(json!({
        "env": {
            "ANTHROPIC_AUTH_TOKEN": "sk-or-v1-abcdef",
            "ANTHROPIC_BASE_URL": "https://openrouter.ai/api/v1",
            "SOME_OTHER_VAR": "x"
        }
    }));

    let profile = fixture
        .switcher
        .capture_current(CaptureRequest::default())
        .unwrap();

    assert_eq!(profile.id, "openrouter");
    assert_eq!(profile.name, "OpenRouter");
    assert_eq!(profile.icon.as_deref(), Some("🔀"));
    assert_eq!(profile.env_var("SOME_OTHER_VAR"), None);
    assert_eq!(fixture.switcher.load_profile("openrouter").unwrap(), profile);
}

#[test]
fn explicit_id_is_sanitized() {
    let fixture = Fixture::with_settings(json!({"env": {"ANTHROPIC_AUTH_TOKEN": "t"}}));

    let profile = fixture
        .switcher
        .capture_current(CaptureRequest {
            id: Some("My Laptop".into()),
            name: Some("Laptop".into()),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(profile.id, "my-laptop");
    assert_eq!(profile.name, "Laptop");
}

#[test]
fn missing_token_is_rejected() {
    let fixture = Fixture::with_settings(json!({"env": {"ANTHROPIC_BASE_URL": "https://x"}}));
    let err = fixture
        .switcher
        .capture_current(CaptureRequest::default())
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingAuthToken));
}

#[test]
fn already_saved_current_profile_needs_copy_flag() {
    let fixture = Fixture::with_settings(json!({"env": {}}));
    fixture.add_profile(&Profile::new("work", "Work", "tok"));
    fixture.switcher.use_profile("work").unwrap();

    let err = fixture
        .switcher
        .capture_current(CaptureRequest {
            id: Some("work-copy".into()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::AlreadySaved { ref id } if id == "work"));

    let copy = fixture
        .switcher
        .capture_current(CaptureRequest {
            id: Some("work-copy".into()),
            allow_copy: true,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(copy.env_var("ANTHROPIC_AUTH_TOKEN"), Some("tok"));
}

#[test]
fn colliding_id_is_already_exists() {
    let fixture = Fixture::with_settings(json!({"env": {"ANTHROPIC_AUTH_TOKEN": "t"}}));
    fixture.add_profile(&Profile::new("taken", "Taken", "x"));

    let err = fixture
        .switcher
        .capture_current(CaptureRequest {
            id: Some("taken".into()),
            ..Default::default()
        })
        .unwrap_err();
    assert!(matches!(err, StoreError::AlreadyExists { .. }));
}

#[test]
fn missing_token_wins_over_already_saved() {
    let fixture = Fixture::with_settings(json!({"env": {}}));
    fixture.add_profile(&Profile::new("work", "Work", "tok"));
    fixture.write_settings(&json!({
        "env": {"ANTHROPIC_BASE_URL": "https://x"},
        "currentProfileId": "work"
    }));

    let err = fixture
        .switcher
        .capture_current(CaptureRequest::default())
        .unwrap_err();
    assert!(matches!(err, StoreError::MissingAuthToken), "{err:?}");
}

#[test]
fn blank_name_is_rejected() {
    let fixture = Fixture::with_settings(json!({"env": {"ANTHROPIC_AUTH_TOKEN": "t"}}));

    let err = fixture
        .switcher
        .capture_current(CaptureRequest {
            id: Some("laptop".into()),
            name: Some(String::new()),
            ..Default::default()
        })
        .unwrap_err();

    assert!(matches!(err, StoreError::InvalidProfile { .. }), "{err:?}");
    assert!(!fixture.switcher.profiles().exists("laptop"));
}
