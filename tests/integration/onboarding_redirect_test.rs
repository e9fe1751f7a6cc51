//! Integration tests for the onboarding redirect and logout.

use revo::navigation::{NavigationStack, Route};
use revo::settings::{SettingsController, ViewMode};
use revo::storage::{KeyValueStore, MemoryStore, ONBOARDING_COMPLETED_KEY, USER_NAME_KEY};
use revo::ui::screens::complete_onboarding;

fn mount(store: &MemoryStore) -> (SettingsController, NavigationStack, bool) {
    let mut nav = NavigationStack::new(Route::Settings);
    let mut ctl = SettingsController::new();
    let redirected = ctl.on_mount(store, &mut nav);
    (ctl, nav, redirected)
}

#[test]
fn test_missing_flag_redirects() {
    let (_, nav, redirected) = mount(&MemoryStore::new());
    assert!(redirected);
    assert_eq!(nav.current(), Route::OnBoarding);
}

#[test]
fn test_completed_flag_stays() {
    let store = MemoryStore::with_entries([(ONBOARDING_COMPLETED_KEY, "true")]);
    let (_, nav, redirected) = mount(&store);
    assert!(!redirected);
    assert_eq!(nav.current(), Route::Settings);
    assert_eq!(nav.depth(), 1);
}

#[test]
fn test_flag_other_than_true_redirects() {
    for value in ["false", "", "TRUE", "1", " true"] {
        let store = MemoryStore::with_entries([(ONBOARDING_COMPLETED_KEY, value)]);
        let (_, nav, redirected) = mount(&store);
        assert!(redirected, "value {:?} should redirect", value);
        assert_eq!(nav.current(), Route::OnBoarding);
    }
}

#[test]
fn test_mount_loads_user_summary() {
    let store = MemoryStore::with_entries([(ONBOARDING_COMPLETED_KEY, "true"), (USER_NAME_KEY, "Jun")]);
    let (ctl, _, _) = mount(&store);
    assert_eq!(ctl.user.subtitle(), "Jun, traveller");
}

#[test]
fn test_logout_clears_flag_and_redirects() {
    let mut store = MemoryStore::with_entries([(ONBOARDING_COMPLETED_KEY, "true")]);
    let (mut ctl, mut nav, _) = mount(&store);
    ctl.open(ViewMode::Other);

    ctl.logout(&mut store, &mut nav);
    assert_eq!(store.get(ONBOARDING_COMPLETED_KEY).unwrap(), None);
    assert_eq!(nav.current(), Route::OnBoarding);
    assert_eq!(ctl.view(), ViewMode::Main);

    // A fresh mount after logout redirects again
    let (_, nav, redirected) = mount(&store);
    assert!(redirected);
    assert_eq!(nav.current(), Route::OnBoarding);
}

#[test]
fn test_completing_onboarding_stops_redirect() {
    let mut store = MemoryStore::new();
    complete_onboarding(&mut store, "Jun", chrono::Utc::now()).unwrap();

    let (ctl, nav, redirected) = mount(&store);
    assert!(!redirected);
    assert_eq!(nav.current(), Route::Settings);
    assert_eq!(ctl.user.days_badge(chrono::Utc::now()), "D+0");
}
