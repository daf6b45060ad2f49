//! Application state and main UI controller

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use strum::IntoEnumIterator;

use cq_core::combat::{BattleReport, Outcome};
use cq_core::shop::ShopItem;
use cq_core::{
    Command, Difficulty, GameLoop, GameLoopResult, GameRng, GameState, MAP_HEIGHT, MAP_WIDTH, Phase,
};

use crate::display::{self, GlyphSet, GraphicsMode};
use crate::input::{LineEdit, edit_line, key_to_command};
use crate::theme::Theme;
use crate::widgets::{CELL_WIDTH, MapWidget, MessagesWidget, StatusWidget};

/// Width of the bordered map box
const MAP_BOX_WIDTH: u16 = MAP_WIDTH as u16 * CELL_WIDTH + 2;

/// UI mode - what the app is currently displaying/waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMode {
    /// Picking a difficulty before the map exists
    DifficultySelect { cursor: usize },
    /// Walking the map
    Normal,
    /// Typing a hand at the battle prompt
    Battle { input: String },
    /// Showing how a battle ended until a key is pressed
    BattleReport(BattleReport),
    /// Typing a selection at the shop prompt
    Shop { input: String },
    /// Goal reached
    Victory,
    /// Death screen showing final statistics
    DeathScreen { cause: String },
}

/// Application state
pub struct App {
    /// Game loop controller, created once a difficulty is chosen
    game_loop: Option<GameLoop>,

    /// Seed for the session RNG; None seeds from entropy
    seed: Option<u64>,

    /// Should quit
    should_quit: bool,

    /// Current UI mode
    mode: UiMode,

    /// Death cause held back while the final battle report is shown
    pending_death: Option<String>,

    /// Set when a prompt or key-wait screen opens so stale key presses can be discarded
    flush_input: bool,

    /// Color theme (adapts to light/dark terminal background)
    theme: Theme,

    /// Glyph set for rendering the map
    glyph_set: Box<dyn GlyphSet>,
}

impl App {
    /// Create an app that starts at the difficulty menu
    pub fn new(theme: Theme, graphics_mode: GraphicsMode, seed: Option<u64>) -> Self {
        Self {
            game_loop: None,
            seed,
            should_quit: false,
            mode: UiMode::DifficultySelect { cursor: 0 },
            pending_death: None,
            flush_input: false,
            theme,
            glyph_set: display::detect_glyph_set(graphics_mode),
        }
    }

    /// Create an app that skips the menu and starts at `difficulty`
    pub fn with_difficulty(
        difficulty: Difficulty,
        theme: Theme,
        graphics_mode: GraphicsMode,
        seed: Option<u64>,
    ) -> Self {
        let mut app = Self::new(theme, graphics_mode, seed);
        app.start_game(difficulty);
        app
    }

    /// Create an app around an already built session
    pub fn with_game(state: GameState, theme: Theme, graphics_mode: GraphicsMode) -> Self {
        let mut app = Self::new(theme, graphics_mode, Some(state.rng.seed()));
        app.game_loop = Some(GameLoop::new(state));
        app.mode = UiMode::Normal;
        app
    }

    /// Get game state, once the game has started
    pub fn state(&self) -> Option<&GameState> {
        self.game_loop.as_ref().map(GameLoop::state)
    }

    /// Get mutable game state
    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.game_loop.as_mut().map(GameLoop::state_mut)
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns true once after a prompt or key-wait screen opened; the caller
    /// should drop any input that was queued before it was drawn.
    pub fn take_flush_request(&mut self) -> bool {
        std::mem::take(&mut self.flush_input)
    }

    fn start_game(&mut self, difficulty: Difficulty) {
        let rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        self.game_loop = Some(GameLoop::new(GameState::new(difficulty, rng)));
        self.mode = UiMode::Normal;
    }

    /// Handle input event - returns a command if one should be executed
    pub fn handle_event(&mut self, event: Event) -> Option<Command> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }

        match &mut self.mode {
            UiMode::DifficultySelect { .. } => {
                self.handle_difficulty_input(key);
                None
            }
            UiMode::Normal => key_to_command(key),
            UiMode::Battle { input } | UiMode::Shop { input } => match edit_line(input, key) {
                LineEdit::Submit(line) => Some(Command::Respond(line)),
                LineEdit::Editing | LineEdit::Ignored => None,
            },
            UiMode::BattleReport(_) => {
                self.dismiss_battle_report();
                None
            }
            UiMode::Victory | UiMode::DeathScreen { .. } => {
                self.should_quit = true;
                None
            }
        }
    }

    fn handle_difficulty_input(&mut self, key: KeyEvent) {
        let UiMode::DifficultySelect { cursor } = &mut self.mode else {
            return;
        };
        let choices: Vec<Difficulty> = Difficulty::iter().collect();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                *cursor = cursor.checked_sub(1).unwrap_or(choices.len() - 1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                *cursor = (*cursor + 1) % choices.len();
            }
            KeyCode::Enter => {
                let difficulty = choices[*cursor];
                self.start_game(difficulty);
            }
            KeyCode::Char(c @ '1'..='3') => {
                if let Ok(difficulty) = c.to_string().parse::<Difficulty>() {
                    self.start_game(difficulty);
                }
            }
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn dismiss_battle_report(&mut self) {
        let next = match self.pending_death.take() {
            Some(cause) => UiMode::DeathScreen { cause },
            None => UiMode::Normal,
        };
        self.switch_mode(next);
    }

    /// Enter `next`, asking for a drain of queued keys whenever a new
    /// prompt or key-wait screen opens
    fn switch_mode(&mut self, next: UiMode) {
        let waits_for_key = matches!(
            next,
            UiMode::Battle { .. }
                | UiMode::Shop { .. }
                | UiMode::BattleReport(_)
                | UiMode::Victory
                | UiMode::DeathScreen { .. }
        );
        if waits_for_key && std::mem::discriminant(&next) != std::mem::discriminant(&self.mode) {
            debug!("input wait opened: {:?}", next);
            self.flush_input = true;
        }
        self.mode = next;
    }

    /// Execute a command and update state
    pub fn execute(&mut self, command: Command) -> GameLoopResult {
        let Some(game_loop) = self.game_loop.as_mut() else {
            return GameLoopResult::Continue;
        };
        let result = game_loop.tick(command);
        let state = game_loop.state();

        let next = match &result {
            GameLoopResult::PlayerDied(cause) => match &state.last_battle {
                Some(report) => {
                    self.pending_death = Some(cause.clone());
                    UiMode::BattleReport(report.clone())
                }
                None => UiMode::DeathScreen {
                    cause: cause.clone(),
                },
            },
            GameLoopResult::PlayerWon => UiMode::Victory,
            GameLoopResult::PlayerQuit => {
                self.should_quit = true;
                self.mode.clone()
            }
            GameLoopResult::Continue => match (&state.last_battle, state.phase) {
                (Some(report), _) => UiMode::BattleReport(report.clone()),
                (None, Phase::Battle(_)) => UiMode::Battle {
                    input: String::new(),
                },
                (None, Phase::Shopping) => UiMode::Shop {
                    input: String::new(),
                },
                (None, Phase::Exploring) => UiMode::Normal,
            },
        };

        self.switch_mode(next);

        result
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let Some(game_loop) = self.game_loop.as_ref() else {
            if let UiMode::DifficultySelect { cursor } = self.mode {
                self.render_difficulty_select(frame, cursor);
            }
            return;
        };
        let state = game_loop.state();

        // Layout: map at top, status in middle, messages at bottom
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(MAP_HEIGHT as u16 + 2), // Map + border
                Constraint::Length(3),                     // Status lines
                Constraint::Min(2),                        // Messages
            ])
            .split(frame.area());

        let map_area = Rect {
            width: chunks[0].width.min(MAP_BOX_WIDTH),
            ..chunks[0]
        };
        let map_widget = MapWidget::new(
            &state.map,
            &state.player,
            &self.theme,
            self.glyph_set.as_ref(),
        );
        frame.render_widget(map_widget, map_area);

        frame.render_widget(StatusWidget::new(state, &self.theme), chunks[1]);

        // Prompt overlays show the turn's messages themselves
        if matches!(self.mode, UiMode::Normal) {
            frame.render_widget(MessagesWidget::new(&state.messages, &self.theme), chunks[2]);
        }

        // Render modal overlays based on mode (clone to avoid borrow conflicts)
        match self.mode.clone() {
            UiMode::DifficultySelect { .. } | UiMode::Normal => {}
            UiMode::Battle { input } => self.render_battle(frame, &input),
            UiMode::BattleReport(report) => self.render_battle_report(frame, &report),
            UiMode::Shop { input } => self.render_shop(frame, &input),
            UiMode::Victory => self.render_victory(frame),
            UiMode::DeathScreen { cause } => self.render_death_screen(frame, &cause),
        }
    }

    /// Render the difficulty picker
    fn render_difficulty_select(&self, frame: &mut Frame, cursor: usize) {
        let area = centered_rect(60, 50, frame.area());
        frame.render_widget(Clear, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Choose your difficulty",
                Style::default().fg(self.theme.accent).bold(),
            )),
            Line::from(""),
        ];
        for (i, difficulty) in Difficulty::iter().enumerate() {
            let text = format!(
                "{}. {:<7} forests {:>2}, shops {}, plains danger {:>2}%",
                difficulty.menu_number(),
                difficulty.to_string(),
                difficulty.forest_count(),
                difficulty.shop_count(),
                difficulty.plains_encounter_chance(),
            );
            let style = if i == cursor {
                Style::default().fg(self.theme.cursor_fg).bg(self.theme.cursor_bg)
            } else {
                Style::default().fg(self.theme.text)
            };
            lines.push(Line::from(Span::styled(text, style)));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Up/Down + Enter, or press 1-3. q to quit.",
            Style::default().fg(self.theme.text_dim),
        )));

        let block = Block::default()
            .title(" ConsoleQuest ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render the battle prompt
    fn render_battle(&self, frame: &mut Frame, input: &str) {
        let area = centered_rect(70, 80, frame.area());
        frame.render_widget(Clear, area);

        let Some(Phase::Battle(encounter)) = self.state().map(|s| s.phase) else {
            return;
        };

        let mut lines: Vec<Line> = display::monster_art(encounter.kind)
            .iter()
            .map(|row| Line::from(Span::styled(*row, Style::default().fg(self.theme.good))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("A wild {} appeared!", encounter.kind),
            Style::default().fg(self.theme.good).bold(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from("Rock-paper-scissors! (1: Scissors, 2: Rock, 3: Paper)"));
        lines.push(Line::from(format!("Your hand: {}_", input)));

        let block = Block::default()
            .title(" Battle ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            area,
        );
    }

    /// Render the result of the last battle
    fn render_battle_report(&self, frame: &mut Frame, report: &BattleReport) {
        let area = centered_rect(60, 40, frame.area());
        frame.render_widget(Clear, area);

        let color = match report.outcome {
            Outcome::Win => self.theme.good,
            Outcome::Tie => self.theme.text,
            Outcome::Loss | Outcome::Fumble => self.theme.bad,
        };
        let mut lines: Vec<Line> = report
            .messages()
            .into_iter()
            .map(|msg| Line::from(Span::styled(msg, Style::default().fg(color))))
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press any key to return to the map.",
            Style::default().fg(self.theme.text_dim),
        )));

        let block = Block::default()
            .title(format!(" vs {} ", report.encounter.kind))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_action));
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            area,
        );
    }

    /// Render the shop menu
    fn render_shop(&self, frame: &mut Frame, input: &str) {
        let area = centered_rect(70, 70, frame.area());
        frame.render_widget(Clear, area);

        let Some(state) = self.state() else {
            return;
        };
        let player = &state.player;

        let mut lines = vec![
            Line::from(format!("Gold: {} G", player.gold)),
            Line::from(format!("HP: {}/{}", player.hp, player.hp_max)),
            Line::from(format!("Attack: {}", player.attack)),
            Line::from(Span::styled(
                "─".repeat(40),
                Style::default().fg(self.theme.text_dim),
            )),
        ];
        for item in ShopItem::iter() {
            let affordable = player.gold >= item.price();
            let style = if affordable {
                Style::default().fg(self.theme.text)
            } else {
                Style::default().fg(self.theme.text_dim)
            };
            lines.push(Line::from(vec![
                Span::styled(format!("{}. {}", item.menu_number(), item.label()), style),
                Span::styled(
                    format!(" - {} G", item.price()),
                    Style::default().fg(self.theme.header),
                ),
            ]));
        }
        lines.push(Line::from("0. Leave"));
        lines.push(Line::from(""));
        for msg in &state.messages {
            lines.push(Line::from(Span::styled(
                msg.as_str(),
                Style::default().fg(self.theme.accent),
            )));
        }
        lines.push(Line::from(format!("What would you like? {}_", input)));

        let block = Block::default()
            .title(" Shop ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.header));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Render the victory screen
    fn render_victory(&self, frame: &mut Frame) {
        let area = centered_rect(60, 60, frame.area());
        frame.render_widget(Clear, area);

        let Some(state) = self.state() else {
            return;
        };
        let banner = Style::default().fg(self.theme.accent).bold();
        let lines = vec![
            Line::from(Span::styled("****************************************", banner)),
            Line::from(Span::styled("*          G A M E   C L E A R         *", banner)),
            Line::from(Span::styled("****************************************", banner)),
            Line::from(""),
            Line::from("Congratulations! You made it to the destination!"),
            Line::from(format!("Final HP: {}", state.player.hp)),
            Line::from(format!("Final gold: {} G", state.player.gold)),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to exit.",
                Style::default().fg(self.theme.text_dim),
            )),
        ];

        let block = Block::default()
            .title(" Victory ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_accent));
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            area,
        );
    }

    /// Render the death screen modal with player statistics
    fn render_death_screen(&self, frame: &mut Frame, cause: &str) {
        let area = centered_rect(60, 50, frame.area());
        frame.render_widget(Clear, area);

        let Some(state) = self.state() else {
            return;
        };
        let player = &state.player;

        let lines = vec![
            Line::from(Span::styled(
                "  GAME OVER  ",
                Style::default().fg(self.theme.bad).bold(),
            )),
            Line::from(""),
            Line::from("You have no health left..."),
            Line::from(vec![
                Span::raw("Cause: "),
                Span::styled(cause, Style::default().fg(self.theme.bad)),
            ]),
            Line::from(""),
            Line::from(format!(
                "HP: {}/{}    Gold: {} G    Attack: {}",
                player.hp.max(0),
                player.hp_max,
                player.gold,
                player.attack
            )),
            Line::from(format!("Difficulty: {}", state.difficulty)),
            Line::from(""),
            Line::from(Span::styled(
                "Press any key to exit.",
                Style::default().fg(self.theme.text_dim),
            )),
        ];

        let block = Block::default()
            .title(" Game Over ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.border_danger));
        frame.render_widget(
            Paragraph::new(lines).block(block).alignment(Alignment::Center),
            area,
        );
    }
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
