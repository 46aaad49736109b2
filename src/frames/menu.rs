//! Main menu frame

use glam::Vec2;

use super::NavCommand;
use crate::platform::{DrawCommand, InputEvent, Key};

const ITEMS: [(&str, NavCommand); 3] = [
    ("Start Game", NavCommand::ToGame),
    ("Records", NavCommand::ToRecords),
    ("Exit", NavCommand::Quit),
];

/// Main menu: a vertical list of items, Up/Down to move, Enter to activate.
pub struct MenuFrame {
    selected: usize,
}

impl MenuFrame {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Option<NavCommand> {
        if let InputEvent::MouseDown(pos) = event {
            for (i, (_, command)) in ITEMS.iter().enumerate() {
                let top = 350.0 + 100.0 * i as f32;
                if pos.y >= top && pos.y < top + 72.0 {
                    self.selected = i;
                    return Some(*command);
                }
            }
            return None;
        }
        let InputEvent::KeyDown(key) = event else {
            return None;
        };
        match key {
            Key::Up => {
                self.selected = self.selected.checked_sub(1).unwrap_or(ITEMS.len() - 1);
            }
            Key::Down => {
                self.selected = (self.selected + 1) % ITEMS.len();
            }
            Key::Enter => return Some(ITEMS[self.selected].1),
            _ => {}
        }
        None
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Text {
            text: "BRICKBREAK".to_string(),
            pos: Vec2::new(250.0, 100.0),
            size: 90.0,
        }];
        for (i, (label, _)) in ITEMS.iter().enumerate() {
            let marker = if i == self.selected { "> " } else { "  " };
            commands.push(DrawCommand::Text {
                text: format!("{}{}", marker, label),
                pos: Vec2::new(300.0, 350.0 + 100.0 * i as f32),
                size: 72.0,
            });
        }
        commands
    }
}

impl Default for MenuFrame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_wraps_both_ways() {
        let mut menu = MenuFrame::new();
        menu.handle_event(&InputEvent::KeyDown(Key::Up));
        assert_eq!(menu.selected(), ITEMS.len() - 1);
        menu.handle_event(&InputEvent::KeyDown(Key::Down));
        assert_eq!(menu.selected(), 0);
    }

    #[test]
    fn test_enter_activates_the_selected_item() {
        let mut menu = MenuFrame::new();
        assert_eq!(
            menu.handle_event(&InputEvent::KeyDown(Key::Enter)),
            Some(NavCommand::ToGame)
        );
        menu.handle_event(&InputEvent::KeyDown(Key::Down));
        assert_eq!(
            menu.handle_event(&InputEvent::KeyDown(Key::Enter)),
            Some(NavCommand::ToRecords)
        );
    }

    #[test]
    fn test_click_activates_the_item_under_the_cursor() {
        let mut menu = MenuFrame::new();
        assert_eq!(
            menu.handle_event(&InputEvent::MouseDown(Vec2::new(400.0, 460.0))),
            Some(NavCommand::ToRecords)
        );
        assert_eq!(
            menu.handle_event(&InputEvent::MouseDown(Vec2::new(400.0, 300.0))),
            None
        );
    }

    #[test]
    fn test_escape_is_ignored_on_the_menu() {
        let mut menu = MenuFrame::new();
        assert_eq!(menu.handle_event(&InputEvent::KeyDown(Key::Escape)), None);
    }
}
