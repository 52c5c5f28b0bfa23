//! Overlapping navigations and simulated latency, on a paused clock.

use std::sync::Arc;
use std::time::Duration;

use mapventures_core::ResourceType;
use mapventures_guard::{GateState, Navigator, Outcome, OwnerGate, Route, Verdict};
use mapventures_store::{Catalog, Latency};

use crate::common::{delayed_companies, TestHarness, ADMIN, TECHJOINVILLE};

#[tokio::test(start_paused = true)]
async fn test_slow_fetch_cannot_overwrite_newer_navigation() {
    let harness = TestHarness::with_catalog(delayed_companies(&[("1", 500), ("999", 100)]));
    harness.login_as(ADMIN);
    let gate = OwnerGate::new(harness.session.clone());
    let companies = harness.catalog.companies.as_ref();

    let (first, second) = tokio::join!(gate.check(companies, "1"), gate.check(companies, "999"));

    assert_eq!(first, Verdict::Superseded);
    assert_eq!(second, Verdict::NotFound);
    assert_eq!(gate.handle().state(), GateState::NotFound);
}

#[tokio::test(start_paused = true)]
async fn test_faster_older_fetch_is_still_dropped() {
    let harness = TestHarness::with_catalog(delayed_companies(&[("1", 100), ("2", 500)]));
    harness.login_as(TECHJOINVILLE);
    let gate = OwnerGate::new(harness.session.clone());
    let companies = harness.catalog.companies.as_ref();

    let (first, second) = tokio::join!(gate.check(companies, "1"), gate.check(companies, "2"));

    // The first fetch lands before the second, but the second navigation is already current.
    assert_eq!(first, Verdict::Superseded);
    assert_eq!(second, Verdict::Denied(ResourceType::Company));
    assert_eq!(gate.handle().state(), GateState::Denied(ResourceType::Company));
}

#[tokio::test(start_paused = true)]
async fn test_sequential_navigations_each_settle() {
    let harness = TestHarness::with_catalog(delayed_companies(&[("1", 200)]));
    harness.login_as(TECHJOINVILLE);
    let nav = harness.navigator();

    assert!(matches!(nav.navigate("/admin/companies/1/edit").await, Outcome::Edit(_)));
    assert_eq!(
        nav.navigate("/admin/companies/2/edit").await,
        Outcome::Denied(ResourceType::Company)
    );
}

#[tokio::test(start_paused = true)]
async fn test_loading_is_published_before_verdict() {
    let harness = TestHarness::with_catalog(Catalog::mock(Latency::mock()));
    harness.login_as(ADMIN);
    let nav = Arc::new(harness.navigator());
    let handle = nav.handle().clone();
    let mut rx = handle.subscribe();

    let task = {
        let nav = Arc::clone(&nav);
        tokio::spawn(async move { nav.navigate("/admin/events/1/edit").await })
    };

    let loading = rx
        .wait_for(|state| matches!(state, GateState::Loading { .. }))
        .await
        .unwrap()
        .clone();
    assert_eq!(
        loading,
        GateState::Loading {
            resource_type: ResourceType::Event,
            id: "1".to_string(),
        }
    );

    let settled = handle.wait_settled(Duration::from_secs(5)).await.unwrap();
    assert!(settled.is_allowed());
    assert!(matches!(task.await.unwrap(), Outcome::Edit(_)));
}

#[tokio::test(start_paused = true)]
async fn test_owner_gate_waits_out_lookup_latency() {
    let harness = TestHarness::with_catalog(Catalog::mock(Latency::mock()));
    harness.login_as(ADMIN);
    let nav: Navigator = harness.navigator();

    let start = tokio::time::Instant::now();
    nav.navigate("/admin/companies/2/edit").await;
    assert!(start.elapsed() >= Latency::mock().get_by_id);
}

#[tokio::test(start_paused = true)]
async fn test_leaving_edit_route_drops_pending_lookup() {
    let harness = TestHarness::with_catalog(delayed_companies(&[("1", 500)]));
    harness.login_as(ADMIN);
    let nav = harness.navigator();

    let (edit, home) = tokio::join!(nav.navigate("/admin/companies/1/edit"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        nav.navigate("/").await
    });

    assert_eq!(edit, Outcome::Superseded);
    assert_eq!(home, Outcome::Render(Route::Home));
    assert_eq!(nav.handle().state(), GateState::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_back_office_navigation_drops_pending_lookup() {
    let harness = TestHarness::with_catalog(delayed_companies(&[("1", 500)]));
    harness.login_as(ADMIN);
    let nav = harness.navigator();

    let (edit, back_office) = tokio::join!(nav.navigate("/admin/companies/1/edit"), async {
        tokio::time::sleep(Duration::from_millis(10)).await;
        nav.navigate("/admin/events/new").await
    });

    assert_eq!(edit, Outcome::Superseded);
    assert_eq!(back_office, Outcome::Render(Route::NewEvent));
    assert_eq!(nav.handle().state(), GateState::Idle);
}
