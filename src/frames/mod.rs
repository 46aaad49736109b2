//! Frame navigation
//!
//! The app shows one frame at a time: the main menu, a game session, or the
//! record table. Frames request switches by returning a [`NavCommand`];
//! [`Nav`] performs them, constructing the target frame fresh. Only the
//! settings and the store survive a switch.

pub mod game;
pub mod menu;
pub mod records_view;

pub use game::GameFrame;
pub use menu::MenuFrame;
pub use records_view::RecordsFrame;

use crate::platform::{AudioSink, DrawCommand, InputEvent};
use crate::settings::Settings;
use crate::store::Store;

/// Frame switch requested by the active frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    ToMenu,
    ToGame,
    ToRecords,
    Quit,
}

/// Shared services frames borrow while handling a step
pub struct Ctx<'a> {
    pub settings: &'a mut Settings,
    pub store: &'a mut Store,
    pub audio: &'a mut dyn AudioSink,
}

enum Scene {
    Menu(MenuFrame),
    Game(Box<GameFrame>),
    Records(RecordsFrame),
}

/// Top-level frame controller
pub struct Nav {
    pub settings: Settings,
    pub store: Store,
    scene: Scene,
    next_seed: u64,
    should_quit: bool,
}

impl Nav {
    pub fn new(store: Store, settings: Settings, seed: u64) -> Self {
        Self {
            settings,
            store,
            scene: Scene::Menu(MenuFrame::new()),
            next_seed: seed,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run one frame step: feed input, advance the active frame, and apply
    /// any requested switch.
    pub fn step(&mut self, events: &[InputEvent], audio: &mut dyn AudioSink) {
        let mut command = None;
        {
            let mut ctx = Ctx {
                settings: &mut self.settings,
                store: &mut self.store,
                audio,
            };
            for event in events {
                if *event == InputEvent::Quit {
                    command = Some(NavCommand::Quit);
                    break;
                }
                let handled = match &mut self.scene {
                    Scene::Menu(frame) => frame.handle_event(event),
                    Scene::Game(frame) => frame.handle_event(event, &mut ctx),
                    Scene::Records(frame) => frame.handle_event(event),
                };
                if handled.is_some() {
                    command = handled;
                    break;
                }
            }
            if command.is_none() {
                if let Scene::Game(frame) = &mut self.scene {
                    frame.update(&mut ctx);
                }
            }
        }
        if let Some(command) = command {
            self.switch(command);
        }
    }

    fn switch(&mut self, command: NavCommand) {
        match command {
            NavCommand::ToMenu => self.scene = Scene::Menu(MenuFrame::new()),
            NavCommand::ToGame => {
                let seed = self.next_seed;
                self.next_seed = self.next_seed.wrapping_add(1);
                self.scene = Scene::Game(Box::new(GameFrame::new(&self.store, seed)));
            }
            NavCommand::ToRecords => {
                self.scene = Scene::Records(RecordsFrame::new(&self.store));
            }
            NavCommand::Quit => self.should_quit = true,
        }
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        match &self.scene {
            Scene::Menu(frame) => frame.render(),
            Scene::Game(frame) => frame.render(),
            Scene::Records(frame) => frame.render(),
        }
    }
}
