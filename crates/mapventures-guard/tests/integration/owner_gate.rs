//! Owner gate outcomes for every role against the seeded listings.

use std::time::Duration;

use mapventures_core::{Company, ResourceType};
use mapventures_guard::{Destination, GateState, OwnerGate, Verdict};

use crate::common::{
    delayed_companies, failing_catalog, TestHarness, ADMIN, METALURGICA, ORGANIZER, TECHJOINVILLE,
};

#[tokio::test]
async fn test_admin_may_edit_everything() {
    let harness = TestHarness::new();
    harness.login_as(ADMIN);
    let gate = OwnerGate::new(harness.session.clone());

    for id in ["1", "2"] {
        let verdict = gate.check(harness.catalog.companies.as_ref(), id).await;
        assert!(matches!(verdict, Verdict::Allowed(ref c) if c.id == id));
        let verdict = gate.check(harness.catalog.events.as_ref(), id).await;
        assert!(matches!(verdict, Verdict::Allowed(ref e) if e.id == id));
    }
}

#[tokio::test]
async fn test_company_identity_limited_to_its_company() {
    let harness = TestHarness::new();
    harness.login_as(TECHJOINVILLE);
    let gate = OwnerGate::new(harness.session.clone());

    let own = gate.check(harness.catalog.companies.as_ref(), "1").await;
    assert!(matches!(own, Verdict::Allowed(_)));

    let other = gate.check(harness.catalog.companies.as_ref(), "2").await;
    assert_eq!(other, Verdict::Denied(ResourceType::Company));
    assert_eq!(gate.handle().state(), GateState::Denied(ResourceType::Company));
}

#[tokio::test]
async fn test_company_identity_cannot_edit_events() {
    let harness = TestHarness::new();
    harness.login_as(METALURGICA);
    let gate = OwnerGate::new(harness.session.clone());

    let verdict = gate.check(harness.catalog.events.as_ref(), "1").await;
    assert_eq!(verdict, Verdict::Denied(ResourceType::Event));
}

#[tokio::test]
async fn test_organizer_owns_both_events_but_no_company() {
    let harness = TestHarness::new();
    harness.login_as(ORGANIZER);
    let gate = OwnerGate::new(harness.session.clone());

    assert!(matches!(
        gate.check(harness.catalog.events.as_ref(), "2").await,
        Verdict::Allowed(_)
    ));
    assert_eq!(
        gate.check(harness.catalog.companies.as_ref(), "1").await,
        Verdict::Denied(ResourceType::Company)
    );
}

#[tokio::test]
async fn test_missing_listing_is_not_found_for_every_role() {
    for email in [ADMIN, TECHJOINVILLE, METALURGICA, ORGANIZER] {
        let harness = TestHarness::new();
        harness.login_as(email);
        let gate = OwnerGate::new(harness.session.clone());

        let verdict: Verdict<Company> = gate.check(harness.catalog.companies.as_ref(), "999").await;
        assert_eq!(verdict, Verdict::NotFound, "role of {email}");
        assert_eq!(gate.handle().state(), GateState::NotFound);
    }
}

#[tokio::test]
async fn test_provider_failure_reads_as_not_found() {
    let harness = TestHarness::with_catalog(failing_catalog());
    harness.login_as(ADMIN);
    let gate = OwnerGate::new(harness.session.clone());

    let verdict = gate.check(harness.catalog.events.as_ref(), "1").await;
    assert_eq!(verdict, Verdict::NotFound);
}

#[tokio::test]
async fn test_logout_flips_gate_back_to_login() {
    let harness = TestHarness::new();
    harness.login_as(ADMIN);
    let gate = OwnerGate::new(harness.session.clone());
    assert!(matches!(
        gate.check(harness.catalog.companies.as_ref(), "1").await,
        Verdict::Allowed(_)
    ));

    harness.session.logout();
    let verdict = gate.check(harness.catalog.companies.as_ref(), "1").await;
    assert!(matches!(verdict, Verdict::Redirect(_)));
    assert!(gate.handle().state().is_settled());
}

#[tokio::test(start_paused = true)]
async fn test_logout_during_lookup_redirects_to_login() {
    let harness = TestHarness::with_catalog(delayed_companies(&[("1", 500)]));
    harness.login_as(ADMIN);
    let gate = OwnerGate::new(harness.session.clone());

    let (verdict, ()) = tokio::join!(gate.check(harness.catalog.companies.as_ref(), "1"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        harness.session.logout();
    });

    assert_eq!(verdict, Verdict::Redirect(Destination::Login));
    assert_eq!(gate.handle().state(), GateState::Redirect(Destination::Login));
}
