//! Path-level navigation across the whole route table.

use mapventures_core::ResourceType;
use mapventures_guard::{denied_message, Destination, EditTarget, Outcome, Route};

use crate::common::{TestHarness, ADMIN, METALURGICA, ORGANIZER, TECHJOINVILLE};

const BACK_OFFICE: [&str; 6] = [
    "/admin",
    "/admin/companies",
    "/admin/companies/new",
    "/admin/events",
    "/admin/events/new",
    "/admin/profile",
];

#[tokio::test]
async fn test_anonymous_visitor_browses_but_cannot_manage() {
    let harness = TestHarness::new();
    let nav = harness.navigator();

    for path in ["/", "/companies", "/events", "/companies/2", "/login"] {
        assert!(matches!(nav.navigate(path).await, Outcome::Render(_)), "{path}");
    }
    for path in BACK_OFFICE {
        assert_eq!(
            nav.navigate(path).await,
            Outcome::Redirect(Destination::Login),
            "{path}"
        );
    }
    assert_eq!(
        nav.navigate("/admin/events/1/edit").await,
        Outcome::Redirect(Destination::Login)
    );
}

#[tokio::test]
async fn test_any_role_reaches_back_office() {
    for email in [ADMIN, TECHJOINVILLE, METALURGICA, ORGANIZER] {
        let harness = TestHarness::new();
        harness.login_as(email);
        let nav = harness.navigator();
        for path in BACK_OFFICE {
            assert_eq!(
                nav.navigate(path).await,
                Outcome::Render(Route::parse(path)),
                "{email} -> {path}"
            );
        }
    }
}

#[tokio::test]
async fn test_denied_edit_renders_message_not_redirect() {
    let harness = TestHarness::new();
    harness.login_as(TECHJOINVILLE);
    let nav = harness.navigator();

    let outcome = nav.navigate("/admin/companies/2/edit").await;
    assert_eq!(outcome, Outcome::Denied(ResourceType::Company));
    assert!(denied_message(ResourceType::Company).contains("company"));
}

#[tokio::test]
async fn test_allowed_edit_carries_listing() {
    let harness = TestHarness::new();
    harness.login_as(METALURGICA);
    let nav = harness.navigator();

    let outcome = nav.navigate("/companies/2/edit").await;
    match outcome {
        Outcome::Edit(EditTarget::Company(company)) => {
            assert_eq!(company.name, "Metalúrgica Norte SC");
            assert_eq!(company.owner_id, "3");
        }
        other => unreachable!("unexpected outcome {other:?}"),
    }
    assert!(nav.handle().state().is_allowed());
}

#[tokio::test]
async fn test_unknown_collection_edit_is_not_found_page() {
    let harness = TestHarness::new();
    harness.login_as(ADMIN);
    let nav = harness.navigator();

    assert_eq!(
        nav.navigate("/admin/venues/1/edit").await,
        Outcome::Render(Route::NotFound)
    );
}

#[test]
fn test_redirect_to_edit_follows_affiliation() {
    let harness = TestHarness::new();
    let nav = harness.navigator();
    assert_eq!(nav.redirect_to_edit(), Some(Destination::Login));

    harness.login_as(TECHJOINVILLE);
    let destination = nav.redirect_to_edit().unwrap();
    assert_eq!(destination.path(), "/admin/companies/1/edit");

    harness.login_as(ORGANIZER);
    assert_eq!(nav.redirect_to_edit(), None);
}

#[tokio::test]
async fn test_redirect_to_edit_lands_on_allowed_form() {
    let harness = TestHarness::new();
    harness.login_as(TECHJOINVILLE);
    let nav = harness.navigator();

    let destination = nav.redirect_to_edit().unwrap();
    let outcome = nav.navigate(destination.path()).await;
    assert!(matches!(outcome, Outcome::Edit(EditTarget::Company(ref c)) if c.id == "1"));
}
