//! Form submissions through the listing editor.

use mapventures_auth::Decision;
use mapventures_core::{CompanyPatch, EventPatch, ResourceType};
use mapventures_guard::{Error, Outcome};

use crate::common::{failing_catalog, TestHarness, ADMIN, METALURGICA, ORGANIZER, TECHJOINVILLE};

#[tokio::test]
async fn test_edit_flow_end_to_end() {
    let harness = TestHarness::new();
    harness.login_as(ORGANIZER);
    let nav = harness.navigator();
    let editor = harness.editor();

    assert!(matches!(nav.navigate("/admin/events/2/edit").await, Outcome::Edit(_)));

    let patch = EventPatch {
        location: Some("Expoville, Pavilhão B".to_string()),
        ..Default::default()
    };
    let event = editor.update_event("2", patch).await.unwrap();
    assert_eq!(event.location, "Expoville, Pavilhão B");
    assert_eq!(event.owner_id, "4");
}

#[tokio::test]
async fn test_stale_form_rejected_after_identity_change() {
    let harness = TestHarness::new();
    harness.login_as(TECHJOINVILLE);
    let editor = harness.editor();
    assert!(matches!(
        harness.navigator().navigate("/admin/companies/1/edit").await,
        Outcome::Edit(_)
    ));

    harness.login_as(METALURGICA);
    let patch = CompanyPatch {
        description: Some("Tampered".to_string()),
        ..Default::default()
    };
    let err = editor.update_company("1", patch).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Denied {
            kind: ResourceType::Company,
            decision: Decision::NotAffiliated,
            ..
        }
    ));

    harness.session.logout();
    let err = editor.delete_company("1").await.unwrap_err();
    assert!(matches!(err, Error::Unauthenticated));
}

#[tokio::test]
async fn test_company_role_has_no_event_rights() {
    let harness = TestHarness::new();
    harness.login_as(METALURGICA);
    let err = harness.editor().delete_event("1").await.unwrap_err();
    assert!(matches!(
        err,
        Error::Denied {
            decision: Decision::NoRule,
            ..
        }
    ));
    assert!(err.is_access_denied());
}

#[tokio::test]
async fn test_admin_deletes_then_gate_reports_not_found() {
    let harness = TestHarness::new();
    harness.login_as(ADMIN);
    harness.editor().delete_company("2").await.unwrap();

    let nav = harness.navigator();
    assert_eq!(
        nav.navigate("/admin/companies/2/edit").await,
        Outcome::Redirect(mapventures_guard::Destination::NotFound)
    );
}

#[tokio::test]
async fn test_provider_failure_surfaces_as_store_error() {
    let harness = TestHarness::with_catalog(failing_catalog());
    harness.login_as(ADMIN);

    let err = harness
        .editor()
        .update_event("1", EventPatch::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Store(_)));
    assert!(!err.is_access_denied());
}
