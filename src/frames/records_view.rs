//! Record table frame

use glam::Vec2;

use super::NavCommand;
use crate::platform::{DrawCommand, InputEvent, Key};
use crate::records::RecordTable;
use crate::store::Store;

/// Read-only view of the persisted record table.
pub struct RecordsFrame {
    records: RecordTable,
}

impl RecordsFrame {
    pub fn new(store: &Store) -> Self {
        Self {
            records: RecordTable::from_pairs(store.records().to_vec()),
        }
    }

    pub fn handle_event(&mut self, event: &InputEvent) -> Option<NavCommand> {
        match event {
            InputEvent::KeyDown(Key::Escape) | InputEvent::KeyDown(Key::Enter) => {
                Some(NavCommand::ToMenu)
            }
            _ => None,
        }
    }

    pub fn render(&self) -> Vec<DrawCommand> {
        let mut commands = vec![DrawCommand::Text {
            text: "Records".to_string(),
            pos: Vec2::new(320.0, 50.0),
            size: 90.0,
        }];
        for (i, entry) in self.records.entries().iter().enumerate() {
            let name = entry.name.as_deref().unwrap_or("---");
            commands.push(DrawCommand::Text {
                text: format!("{:2}  {:<15} {:>8}", i + 1, name, entry.score),
                pos: Vec2::new(100.0, 160.0 + 50.0 * i as f32),
                size: 60.0,
            });
        }
        commands.push(DrawCommand::Text {
            text: "back".to_string(),
            pos: Vec2::new(390.0, 680.0),
            size: 70.0,
        });
        commands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_escape_returns_to_menu() {
        let path = std::env::temp_dir().join(format!(
            "brickbreak-recview-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"levels": {"a": [[1]]}, "records": [[900, "zed"]]}"#).unwrap();
        let store = Store::load(&path).unwrap();
        let mut frame = RecordsFrame::new(&store);
        assert_eq!(
            frame.handle_event(&InputEvent::KeyDown(Key::Escape)),
            Some(NavCommand::ToMenu)
        );
        assert_eq!(frame.handle_event(&InputEvent::KeyDown(Key::Left)), None);
        fs::remove_file(path).unwrap();
    }
}
