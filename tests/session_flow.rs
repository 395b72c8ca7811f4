//! End-to-end session: menus, play, villain defeat, through the frame driver

use glam::Vec2;

use heroes_unleashed::sim::{EntityKind, SessionPhase};
use heroes_unleashed::{AssetError, AssetRegistry, FrameView, Game, Renderer, Roster, Tuning};

#[derive(Default)]
struct RecordingRenderer {
    phases: Vec<SessionPhase>,
    projectile_counts: Vec<usize>,
    health_bars: Vec<Option<f32>>,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, view: &FrameView<'_>) {
        self.phases.push(view.phase);
        self.projectile_counts.push(
            view.entities
                .iter()
                .filter(|e| e.kind == EntityKind::Projectile)
                .count(),
        );
        self.health_bars.push(
            view.entities
                .iter()
                .find(|e| e.kind == EntityKind::Villain)
                .and_then(|e| e.health_ratio),
        );
    }
}

fn settled_assets(roster: &Roster, missing: &[&str]) -> AssetRegistry<()> {
    let mut assets = AssetRegistry::new();
    let keys = roster.required_assets();
    assets.request(keys.iter().cloned());
    for key in &keys {
        let result = if missing.contains(&key.as_str()) {
            Err(AssetError::LoadFailed {
                key: key.clone(),
                reason: "404".to_string(),
            })
        } else {
            Ok(())
        };
        assets.settle(key, result).unwrap();
    }
    assert!(assets.all_settled(&keys));
    assets
}

fn click_region(game: &mut Game, id: usize) {
    let center = game.view().hit_regions[id].rect.center();
    game.input.click(center.x, center.y);
}

#[test]
fn full_session_defeats_villain() {
    let roster = Roster::default();
    let assets = settled_assets(&roster, &["deadpool_suit1.png"]);
    let mut game = Game::new(Vec2::new(800.0, 600.0), roster, Tuning::default());
    game.mark_assets_ready();
    let mut renderer = RecordingRenderer::default();
    let mut now = 0.0;

    // Start -> CharacterSelect
    click_region(&mut game, 0);
    game.frame(now, &assets, &mut renderer);
    assert_eq!(game.state.phase, SessionPhase::CharacterSelect);

    // Deadpool, with two of three suits available
    now += 16.0;
    click_region(&mut game, 2);
    game.frame(now, &assets, &mut renderer);
    assert_eq!(game.state.phase, SessionPhase::SuitSelect);
    assert_eq!(
        game.state.available_suits,
        vec!["deadpool_suit2.png", "deadpool_suit3.png"]
    );

    // Pick deadpool_suit3
    now += 16.0;
    click_region(&mut game, 1);
    game.frame(now, &assets, &mut renderer);
    assert_eq!(game.state.phase, SessionPhase::Playing);
    assert_eq!(
        game.state.hero.as_ref().unwrap().sprite_key,
        "deadpool_suit3.png"
    );

    // Hold up + fire: the hero flies under the villain shooting upward
    game.input.key_down("ArrowUp");
    game.input.key_down("Space");
    let mut frames = 0;
    while game.state.villain.alive() && frames < 600 {
        now += 16.0;
        frames += 1;
        game.frame(now, &assets, &mut renderer);
    }

    assert!(!game.state.villain.alive());
    assert_eq!(game.state.villain.health.health, 0);
    assert_eq!(renderer.health_bars.last(), Some(&None));
    assert_eq!(renderer.phases.len(), 3 + frames);
    assert!(renderer.projectile_counts.iter().any(|&n| n > 0));

    // Clicks while playing never leave Playing
    game.input.click(400.0, 155.0);
    game.frame(now + 16.0, &assets, &mut renderer);
    assert_eq!(game.state.phase, SessionPhase::Playing);
}

#[test]
fn health_bar_tracks_hits() {
    let roster = Roster::from_names(&["Solo"]);
    let assets = settled_assets(
        &roster,
        &["solo_suit1.png", "solo_suit2.png", "solo_suit3.png"],
    );
    let mut game = Game::new(Vec2::new(800.0, 600.0), roster, Tuning::default());
    game.mark_assets_ready();
    let mut renderer = RecordingRenderer::default();

    click_region(&mut game, 0);
    game.frame(0.0, &assets, &mut renderer);
    click_region(&mut game, 0);
    game.frame(16.0, &assets, &mut renderer);
    // No suits loaded: straight to Playing
    assert_eq!(game.state.phase, SessionPhase::Playing);

    // Park the hero on the villain so each web hits on its spawn frame
    let villain_center = game.state.villain.rect.center();
    let hero = game.state.hero.as_mut().unwrap();
    hero.rect.pos = villain_center - hero.rect.size / 2.0;

    game.input.key_down("Space");
    let mut now = 16.0;
    for _ in 0..3 {
        now += 300.0;
        let report = game.frame(now, &assets, &mut renderer).unwrap();
        assert_eq!(report.hits, 1);
    }

    let bars: Vec<_> = renderer.health_bars.iter().rev().take(3).rev().cloned().collect();
    assert_eq!(bars, vec![Some(0.8), Some(0.6), Some(0.4)]);
}

#[test]
fn closed_gate_drops_nothing() {
    let roster = Roster::default();
    let assets = settled_assets(&roster, &[]);
    let mut game = Game::new(Vec2::new(800.0, 600.0), roster, Tuning::default());
    let mut renderer = RecordingRenderer::default();

    click_region(&mut game, 0);
    for frame in 0..5 {
        assert!(game.frame(frame as f64, &assets, &mut renderer).is_none());
    }
    assert!(renderer.phases.is_empty());

    game.mark_assets_ready();
    game.frame(100.0, &assets, &mut renderer);
    assert_eq!(renderer.phases, vec![SessionPhase::CharacterSelect]);
}
