//! Full-run smoke test: auto-walk a seeded run down several dungeon levels,
//! resolving every interaction on the way.

use delve_core::{CellKind, Game, GameConfig, LogEvent, MESSAGE_CAP};

/// Repeatedly route the player at the current exit until the run reaches
/// `target_level`. Returns false if the tick budget runs out first.
fn drive_to_level(game: &mut Game, target_level: i32, max_ticks: u32) -> bool {
    let mut clock = 0.0;
    for _ in 0..max_ticks {
        if game.level() >= target_level {
            return true;
        }
        if game.player().path.is_empty() {
            let exit = game.grid().exit;
            game.move_to(exit);
        }
        clock += 0.05;
        game.update(clock);
    }
    game.level() >= target_level
}

#[test]
fn a_seeded_run_descends_three_levels() {
    let mut game = Game::new(1_337, GameConfig::default()).expect("valid config");

    assert!(
        drive_to_level(&mut game, 3, 60_000),
        "auto-walk should always reach the exit of a generated level"
    );

    assert_eq!(game.level(), 3);
    assert_eq!(game.player().pos, game.grid().entrance);
    assert!(game.player().score >= 40, "two exit bonuses alone are worth 40");

    let descents: Vec<_> = game
        .log()
        .iter()
        .filter(|event| matches!(event, LogEvent::Descended { .. }))
        .collect();
    assert_eq!(
        descents,
        [&LogEvent::Descended { level: 2 }, &LogEvent::Descended { level: 3 }]
    );
}

#[test]
fn the_message_log_stays_bounded_during_play() {
    let mut game = Game::new(8_080, GameConfig::default()).expect("valid config");
    let mut clock = 0.0;
    for _ in 0..5_000 {
        if game.player().path.is_empty() {
            let exit = game.grid().exit;
            game.move_to(exit);
        }
        clock += 0.05;
        game.update(clock);
        assert!(game.messages().len() <= MESSAGE_CAP);
    }
}

#[test]
fn every_generated_level_is_playable_without_fov() {
    let config = GameConfig { fov_enabled: false, ..GameConfig::default() };
    let mut game = Game::new(60_601, config).expect("valid config");

    assert!(drive_to_level(&mut game, 4, 90_000));
    assert!(game.grid().cell_at(game.grid().exit).kind == CellKind::Exit);
    assert!(game.grid().is_visible(game.grid().exit), "disabled fov reveals everything");
}
