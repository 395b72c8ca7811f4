//! Selection screens: Start → CharacterSelect → SuitSelect → Playing
//!
//! Driven purely by click hit tests. A click that misses every region is a
//! no-op; a click on a screen already left behind can never match because
//! only the active screen's regions are tested.

use glam::Vec2;

use super::collision::contains_point;
use super::entity::Hero;
use super::layout::{layout_options, start_button};
use super::state::{GameState, SessionPhase};
use crate::assets::AssetSource;
use crate::tuning::Tuning;

/// Apply one click. Returns the new phase if the click caused a transition.
pub fn on_click<A: AssetSource>(
    state: &mut GameState,
    point: Vec2,
    assets: &A,
    tuning: &Tuning,
) -> Option<SessionPhase> {
    let next = match state.phase {
        SessionPhase::Start => click_start(state, point, tuning),
        SessionPhase::CharacterSelect => click_character(state, point, assets, tuning),
        SessionPhase::SuitSelect => click_suit(state, point),
        SessionPhase::Playing => None,
    }?;

    log::info!("Session phase {:?} -> {:?}", state.phase, next);
    state.phase = next;
    Some(next)
}

fn click_start(state: &mut GameState, point: Vec2, tuning: &Tuning) -> Option<SessionPhase> {
    if !contains_point(&start_button(state.viewport.x), point) {
        return None;
    }

    let portraits = state.roster.select_keys();
    state.options = layout_options(&portraits, &tuning.hero_grid, state.viewport.x);
    Some(SessionPhase::CharacterSelect)
}

fn click_character<A: AssetSource>(
    state: &mut GameState,
    point: Vec2,
    assets: &A,
    tuning: &Tuning,
) -> Option<SessionPhase> {
    let id = state
        .options
        .iter()
        .find(|region| contains_point(&region.rect, point))?
        .id;
    let profile = state.roster.get(id)?.clone();

    log::info!("Hero selected: {}", profile.name);
    state.chosen_hero = Some(id);
    state.hero = Some(Hero::at_anchor(
        state.viewport,
        tuning.hero_size,
        profile.main_key(),
    ));

    state.available_suits = profile
        .suit_keys()
        .into_iter()
        .filter(|key| assets.get(key).is_some())
        .collect();

    if state.available_suits.is_empty() {
        state.options.clear();
        Some(SessionPhase::Playing)
    } else {
        state.options = layout_options(&state.available_suits, &tuning.suit_grid, state.viewport.x);
        Some(SessionPhase::SuitSelect)
    }
}

fn click_suit(state: &mut GameState, point: Vec2) -> Option<SessionPhase> {
    let region = state
        .options
        .iter()
        .find(|region| contains_point(&region.rect, point))?;
    let (id, key) = (region.id, region.asset_key.clone());

    let hero = state.hero.as_mut()?;
    log::info!("Suit selected: {}", key);
    hero.sprite_key = key;
    state.chosen_suit = Some(id);
    state.options.clear();
    Some(SessionPhase::Playing)
}
