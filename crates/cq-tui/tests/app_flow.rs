//! Drive the App with key events and render it off-screen.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;

use cq_core::combat::Outcome;
use cq_core::map::{Map, Tile};
use cq_core::{Difficulty, GameLoopResult, GameRng, GameState, Phase};
use cq_tui::{App, GraphicsMode, Theme, UiMode};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// Feed one key; run the command it produces, if any.
fn press(app: &mut App, code: KeyCode) -> Option<GameLoopResult> {
    app.handle_event(key(code)).map(|cmd| app.execute(cmd))
}

fn type_line(app: &mut App, text: &str) -> Option<GameLoopResult> {
    for c in text.chars() {
        assert_eq!(press(app, KeyCode::Char(c)), None);
    }
    press(app, KeyCode::Enter)
}

/// Blank map with one special tile east of the start.
fn app_with_neighbor(tile: Tile, difficulty: Difficulty, seed: u64) -> App {
    let mut map = Map::new();
    map.set(19, 19, Tile::Goal);
    map.set(1, 0, tile);
    let state = GameState::with_map(map, difficulty, GameRng::new(seed));
    App::with_game(state, Theme::dark(), GraphicsMode::Classic)
}

/// First seed whose step into the forest starts a battle.
fn app_in_battle() -> App {
    for seed in 0..500 {
        let mut app = app_with_neighbor(Tile::Forest, Difficulty::Normal, seed);
        press(&mut app, KeyCode::Right);
        if matches!(app.mode(), UiMode::Battle { .. }) {
            return app;
        }
    }
    panic!("no seed produced a forest battle");
}

fn screen_text(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_menu_picks_difficulty() {
    let mut app = App::new(Theme::dark(), GraphicsMode::Classic, Some(3));
    assert_eq!(app.mode(), &UiMode::DifficultySelect { cursor: 0 });
    assert!(app.state().is_none());
    assert!(screen_text(&mut app).contains("Choose your difficulty"));

    press(&mut app, KeyCode::Down);
    assert_eq!(app.mode(), &UiMode::DifficultySelect { cursor: 1 });
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode(), &UiMode::Normal);
    let state = app.state().unwrap();
    assert_eq!(state.difficulty, Difficulty::Normal);
    assert_eq!(state.map.count(Tile::Forest), 60);
}

#[test]
fn test_menu_number_keys() {
    let mut app = App::new(Theme::dark(), GraphicsMode::Classic, Some(3));
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state().unwrap().difficulty, Difficulty::Hard);
}

#[test]
fn test_menu_cursor_wraps() {
    let mut app = App::new(Theme::dark(), GraphicsMode::Classic, None);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.mode(), &UiMode::DifficultySelect { cursor: 2 });
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_same_seed_same_map() {
    let a = App::with_difficulty(Difficulty::Hard, Theme::dark(), GraphicsMode::Classic, Some(11));
    let b = App::with_difficulty(Difficulty::Hard, Theme::dark(), GraphicsMode::Classic, Some(11));
    assert_eq!(a.state().unwrap().map, b.state().unwrap().map);
}

#[test]
fn test_map_screen_shows_status() {
    let mut app = app_with_neighbor(Tile::Plain, Difficulty::Easy, 1);
    let text = screen_text(&mut app);
    assert!(text.contains("ConsoleQuest"));
    assert!(text.contains("HP: 100/100"));
    assert!(text.contains("Gold: 0G"));
    assert!(text.contains("Difficulty: Easy"));
    assert!(text.contains("Open plains."));
}

#[test]
fn test_quit_from_map() {
    let mut app = app_with_neighbor(Tile::Plain, Difficulty::Easy, 1);
    assert_eq!(press(&mut app, KeyCode::Char('q')), Some(GameLoopResult::PlayerQuit));
    assert!(app.should_quit());
}

#[test]
fn test_shop_buy_and_leave() {
    let mut app = app_with_neighbor(Tile::Shop, Difficulty::Easy, 5);
    app.state_mut().unwrap().player.gold = 100;

    assert_eq!(press(&mut app, KeyCode::Right), Some(GameLoopResult::Continue));
    assert!(matches!(app.mode(), UiMode::Shop { .. }));
    assert!(app.take_flush_request());
    assert!(!app.take_flush_request());
    assert!(screen_text(&mut app).contains("Sharp Sword"));

    type_line(&mut app, "3");
    let player = &app.state().unwrap().player;
    assert_eq!(player.gold, 100);
    assert_eq!(player.attack, 10);
    assert!(screen_text(&mut app).contains("Not enough gold"));

    type_line(&mut app, "1");
    assert_eq!(app.state().unwrap().player.gold, 70);
    assert!(matches!(app.mode(), UiMode::Shop { .. }));
    // Staying in the shop does not ask for another flush
    assert!(!app.take_flush_request());

    type_line(&mut app, "0");
    assert_eq!(app.mode(), &UiMode::Normal);
    assert_eq!(app.state().unwrap().phase, Phase::Exploring);
}

#[test]
fn test_prompt_backspace() {
    let mut app = app_with_neighbor(Tile::Shop, Difficulty::Easy, 5);
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Char('7'));
    assert_eq!(app.mode(), &UiMode::Shop { input: "7".into() });
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.mode(), &UiMode::Shop { input: String::new() });
}

#[test]
fn test_reaching_goal_shows_victory() {
    let mut app = app_with_neighbor(Tile::Goal, Difficulty::Hard, 9);
    assert_eq!(press(&mut app, KeyCode::Right), Some(GameLoopResult::PlayerWon));
    assert_eq!(app.mode(), &UiMode::Victory);
    assert!(app.take_flush_request());

    let text = screen_text(&mut app);
    assert!(text.contains("Final HP: 100"));
    assert!(text.contains("Final gold: 0 G"));

    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('x'));
    assert!(app.should_quit());
}

#[test]
fn test_battle_fumble_then_back_to_map() {
    let mut app = app_in_battle();
    assert!(app.take_flush_request());
    assert!(screen_text(&mut app).contains("1: Scissors, 2: Rock, 3: Paper"));

    assert_eq!(type_line(&mut app, "banana"), Some(GameLoopResult::Continue));
    let UiMode::BattleReport(report) = app.mode().clone() else {
        panic!("expected battle report, got {:?}", app.mode());
    };
    // Keys typed ahead must not close the report unseen
    assert!(app.take_flush_request());
    assert_eq!(report.outcome, Outcome::Fumble);
    assert_eq!(report.monster_hand, None);
    assert!(screen_text(&mut app).contains("Invalid input!"));

    let hp = app.state().unwrap().player.hp;
    assert_eq!(hp, 100 - report.hp_lost);

    press(&mut app, KeyCode::Char(' '));
    assert_eq!(app.mode(), &UiMode::Normal);
}

#[test]
fn test_death_after_battle_report() {
    let mut app = app_in_battle();
    app.state_mut().unwrap().player.hp = 1;

    let result = type_line(&mut app, "0");
    assert!(matches!(result, Some(GameLoopResult::PlayerDied(_))));
    assert!(matches!(app.mode(), UiMode::BattleReport(_)));
    assert!(app.take_flush_request());

    press(&mut app, KeyCode::Enter);
    let UiMode::DeathScreen { cause } = app.mode().clone() else {
        panic!("expected death screen, got {:?}", app.mode());
    };
    assert!(app.take_flush_request());
    assert!(cause.starts_with("killed by the "));
    assert!(screen_text(&mut app).contains("GAME OVER"));

    press(&mut app, KeyCode::Enter);
    assert!(app.should_quit());
}

#[test]
fn test_release_events_ignored() {
    let mut app = app_with_neighbor(Tile::Plain, Difficulty::Easy, 1);
    let release = KeyEvent {
        kind: crossterm::event::KeyEventKind::Release,
        ..KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)
    };
    assert_eq!(app.handle_event(Event::Key(release)), None);
}

#[test]
fn test_battle_report_waits_after_queued_key_drained() {
    let mut app = app_in_battle();
    app.take_flush_request();

    type_line(&mut app, "2");
    assert!(matches!(app.mode(), UiMode::BattleReport(_)));
    assert!(app.take_flush_request());
    // The main loop drains here, so the next key the report sees is a fresh one
    assert!(!app.take_flush_request());
    assert!(matches!(app.mode(), UiMode::BattleReport(_)));

    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.mode(), &UiMode::Normal);
    assert!(!app.take_flush_request());
}
