#![cfg(not(feature = "hydrate"))]

use super::*;
use crate::state::theme::ThemeStore;

#[test]
fn read_preference_is_light_in_non_hydrate_tests() {
    assert_eq!(read_preference(), Theme::Light);
}

#[test]
fn apply_and_persist_are_noops_but_callable() {
    apply(Theme::Dark);
    persist(Theme::Dark);
    apply(Theme::Light);
}

#[test]
fn browser_provider_seeds_store_with_light() {
    let mut store = ThemeStore::new(BrowserThemeProvider);
    assert_eq!(store.theme(), Theme::Light);
    assert_eq!(store.toggle(), Theme::Dark);
}
