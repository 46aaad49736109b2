//! Game session frame
//!
//! Owns the running simulation plus the overlay popups: pause, game over,
//! and new-record name entry. While a popup is open the simulation does not
//! tick and gameplay keys are not delivered.

use glam::Vec2;

use super::{Ctx, NavCommand};
use crate::audio;
use crate::consts::*;
use crate::platform::{DrawCommand, InputEvent, Key};
use crate::records::RecordTable;
use crate::sim::{GameEvent, GamePhase, GameState, LevelPool, TickInput, tick};
use crate::sprites;
use crate::store::Store;

/// Longest name accepted by the record entry textbox
const MAX_NAME_LEN: usize = 15;

const PAUSE_ITEMS: [&str; 4] = ["resume", "sound fx", "music", "menu"];
const GAME_OVER_ITEMS: [&str; 2] = ["again", "menu"];
const RECORD_ITEMS: [&str; 3] = ["save", "again", "menu"];

#[derive(Debug)]
enum Popup {
    Pause { selected: usize },
    GameOver { selected: usize },
    NewRecord { name: String, saved: bool, selected: usize },
}

#[derive(Debug, Default)]
struct HeldKeys {
    left: bool,
    right: bool,
    fire: bool,
}

/// One game session and its overlays.
pub struct GameFrame {
    state: GameState,
    held: HeldKeys,
    popup: Option<Popup>,
}

impl GameFrame {
    pub fn new(store: &Store, seed: u64) -> Self {
        let pool = LevelPool::new(store.levels().clone());
        let records = RecordTable::from_pairs(store.records().to_vec());
        Self {
            state: GameState::new(seed, pool, records),
            held: HeldKeys::default(),
            popup: None,
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut Ctx) -> Option<NavCommand> {
        match event {
            InputEvent::KeyDown(key) => {
                if self.popup.is_some() {
                    return self.popup_key(*key, ctx);
                }
                match key {
                    Key::Left => self.held.left = true,
                    Key::Right => self.held.right = true,
                    Key::Space => self.held.fire = true,
                    Key::Escape => {
                        // Game over popups cannot be dismissed
                        if self.state.phase != GamePhase::GameOver {
                            self.state.pause();
                            self.popup = Some(Popup::Pause { selected: 0 });
                        }
                    }
                    _ => {}
                }
            }
            // Releases always land so keys cannot stick across a popup
            InputEvent::KeyUp(key) => match key {
                Key::Left => self.held.left = false,
                Key::Right => self.held.right = false,
                Key::Space => self.held.fire = false,
                _ => {}
            },
            _ => {}
        }
        None
    }

    fn popup_key(&mut self, key: Key, ctx: &mut Ctx) -> Option<NavCommand> {
        // Whether to dismiss the popup and resume, decided inside the match
        // where the popup is still borrowed.
        let mut resume = false;
        let command = self.popup_key_inner(key, ctx, &mut resume);
        if resume {
            self.popup = None;
            self.state.resume();
        }
        command
    }

    fn popup_key_inner(
        &mut self,
        key: Key,
        ctx: &mut Ctx,
        resume: &mut bool,
    ) -> Option<NavCommand> {
        match self.popup.as_mut()? {
            Popup::Pause { selected } => match key {
                Key::Escape => *resume = true,
                Key::Left | Key::Up => {
                    *selected = selected.checked_sub(1).unwrap_or(PAUSE_ITEMS.len() - 1);
                }
                Key::Right | Key::Down => *selected = (*selected + 1) % PAUSE_ITEMS.len(),
                Key::Enter => match *selected {
                    0 => *resume = true,
                    1 => ctx.settings.toggle_fx(),
                    2 => ctx.settings.toggle_music(),
                    _ => return Some(NavCommand::ToMenu),
                },
                _ => {}
            },
            Popup::GameOver { selected } => match key {
                Key::Left | Key::Up => {
                    *selected = selected.checked_sub(1).unwrap_or(GAME_OVER_ITEMS.len() - 1);
                }
                Key::Right | Key::Down => *selected = (*selected + 1) % GAME_OVER_ITEMS.len(),
                Key::Enter => {
                    return Some(if *selected == 0 {
                        NavCommand::ToGame
                    } else {
                        NavCommand::ToMenu
                    });
                }
                _ => {}
            },
            Popup::NewRecord {
                name,
                saved,
                selected,
            } => match key {
                Key::Char(c) => {
                    if !*saved && name.len() < MAX_NAME_LEN {
                        name.push(c);
                    }
                }
                Key::Backspace => {
                    if !*saved {
                        name.pop();
                    }
                }
                Key::Left | Key::Up => {
                    *selected = selected.checked_sub(1).unwrap_or(RECORD_ITEMS.len() - 1);
                }
                Key::Right | Key::Down => *selected = (*selected + 1) % RECORD_ITEMS.len(),
                Key::Enter => match *selected {
                    0 => {
                        // Blank names re-prompt; the popup stays open
                        if !*saved && !name.trim().is_empty() {
                            self.state.records.commit_pending(name);
                            if let Err(err) =
                                ctx.store.save_records(self.state.records.to_pairs())
                            {
                                log::error!("failed to save records: {err:#}");
                            }
                            *saved = true;
                        }
                    }
                    1 => return Some(NavCommand::ToGame),
                    _ => return Some(NavCommand::ToMenu),
                },
                _ => {}
            },
        }
        None
    }

    /// Advance the simulation one tick unless an overlay holds it.
    pub fn update(&mut self, ctx: &mut Ctx) {
        if self.popup.is_some() {
            return;
        }
        let input = TickInput {
            left: self.held.left,
            right: self.held.right,
            fire: self.held.fire,
        };
        let mut events = Vec::new();
        tick(&mut self.state, &input, &mut events);
        audio::play_events(ctx.audio, ctx.settings, &events);

        if events.contains(&GameEvent::GameOver) {
            if self.state.records.qualifies(self.state.score) {
                self.state.records.insert_pending(self.state.score);
                self.popup = Some(Popup::NewRecord {
                    name: String::new(),
                    saved: false,
                    selected: 0,
                });
            } else {
                self.popup = Some(Popup::GameOver { selected: 0 });
            }
        }
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::new();

        // HUD bar
        commands.push(DrawCommand::Text {
            text: "Life".to_string(),
            pos: Vec2::new(20.0, 10.0),
            size: 50.0,
        });
        for i in 0..self.state.lives {
            commands.push(DrawCommand::Blit {
                src: sprites::LIFE_ICON,
                dst: crate::sim::Aabb::from_pos_size(
                    Vec2::new(160.0 + 45.0 * i as f32, 15.0),
                    Vec2::new(40.0, 40.0),
                ),
            });
        }
        commands.push(DrawCommand::Text {
            text: format!("Points  {}", self.state.score),
            pos: Vec2::new(550.0, 10.0),
            size: 50.0,
        });

        // Field entities
        commands.push(DrawCommand::Blit {
            src: sprites::paddle_region(self.state.paddle.size),
            dst: self.state.paddle.rect(),
        });
        for projectile in &self.state.paddle.projectiles {
            commands.push(DrawCommand::Blit {
                src: sprites::PROJECTILE,
                dst: projectile.rect(),
            });
        }
        for block in &self.state.blocks {
            commands.push(DrawCommand::Blit {
                src: sprites::block_region(block.stamina),
                dst: block.rect,
            });
        }
        for ball in &self.state.balls {
            commands.push(DrawCommand::Blit {
                src: sprites::BALL,
                dst: ball.rect(),
            });
            if let Some(fireball) = &ball.fireball {
                commands.push(DrawCommand::Blit {
                    src: sprites::FIREBALL_PHASES[fireball.anim_phase % FIREBALL_ANIM_PHASES],
                    dst: ball.rect(),
                });
            }
        }
        for reward in &self.state.rewards {
            commands.push(DrawCommand::Blit {
                src: sprites::reward_region(reward.kind),
                dst: reward.rect(),
            });
        }

        if let Some(popup) = &self.popup {
            self.render_popup(popup, &mut commands);
        }
        commands
    }

    fn render_popup(&self, popup: &Popup, commands: &mut Vec<DrawCommand>) {
        let panel = crate::sim::Aabb::from_pos_size(
            Vec2::new((FIELD_WIDTH - 400.0) / 2.0, (FIELD_HEIGHT - 250.0) / 2.0),
            Vec2::new(400.0, 250.0),
        );
        commands.push(DrawCommand::Panel { dst: panel });
        let origin = panel.min;

        let (title, items, selected) = match popup {
            Popup::Pause { selected } => ("PAUSED", &PAUSE_ITEMS[..], *selected),
            Popup::GameOver { selected } => ("Game Over", &GAME_OVER_ITEMS[..], *selected),
            Popup::NewRecord { selected, .. } => {
                ("New  record  achieved", &RECORD_ITEMS[..], *selected)
            }
        };
        commands.push(DrawCommand::Text {
            text: title.to_string(),
            pos: origin + Vec2::new(40.0, 20.0),
            size: 36.0,
        });
        if let Popup::NewRecord { name, saved, .. } = popup {
            commands.push(DrawCommand::Text {
                text: format!("Record              {} Pts", self.state.score),
                pos: origin + Vec2::new(40.0, 70.0),
                size: 30.0,
            });
            let field = if *saved { "Saved" } else { name.as_str() };
            commands.push(DrawCommand::Text {
                text: format!("Enter  name: {}", field),
                pos: origin + Vec2::new(40.0, 120.0),
                size: 20.0,
            });
        }
        for (i, label) in items.iter().enumerate() {
            let marker = if i == selected { "> " } else { "  " };
            commands.push(DrawCommand::Text {
                text: format!("{}{}", marker, label),
                pos: origin + Vec2::new(40.0 + 120.0 * i as f32, 200.0),
                size: 26.0,
            });
        }
    }
}
