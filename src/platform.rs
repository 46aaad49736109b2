//! Platform abstraction layer
//!
//! The frame layer talks to the host through these traits so the whole
//! game runs headless in tests: input comes in as [`InputEvent`]s, drawing
//! goes out as [`DrawCommand`]s against the sprite atlas, and audio goes
//! through [`AudioSink`].

use glam::Vec2;

use crate::audio::SoundEffect;
use crate::sim::Aabb;
use crate::sprites::SpriteRegion;

/// Keys the game responds to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Space,
    Escape,
    Enter,
    Backspace,
    /// A printable character (name entry)
    Char(char),
}

/// One host input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(Key),
    KeyUp(Key),
    MouseMove(Vec2),
    MouseDown(Vec2),
    /// Window close requested
    Quit,
}

/// One drawing operation for the host renderer
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Copy an atlas region to a destination box
    Blit { src: SpriteRegion, dst: Aabb },
    /// Draw text anchored at its top-left corner
    Text { text: String, pos: Vec2, size: f32 },
    /// Filled panel (popup backgrounds, HUD bars)
    Panel { dst: Aabb },
}

/// Host input source, polled once per frame
pub trait InputSource {
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Host audio output
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, volume: f32);
}

/// Host render target, cleared and redrawn every frame
pub trait DrawSurface {
    fn submit(&mut self, commands: &[DrawCommand]);
}

/// No-op sink for headless runs and tests
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect, _volume: f32) {}
}

/// Scripted input source replaying a fixed event stream, one batch per poll
#[derive(Debug, Default)]
pub struct ScriptedInput {
    batches: Vec<Vec<InputEvent>>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(batches: Vec<Vec<InputEvent>>) -> Self {
        Self { batches, cursor: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        let batch = self.batches.get(self.cursor).cloned().unwrap_or_default();
        self.cursor += 1;
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_input_replays_in_order_then_runs_dry() {
        let mut input = ScriptedInput::new(vec![
            vec![InputEvent::KeyDown(Key::Left)],
            vec![],
            vec![InputEvent::KeyUp(Key::Left), InputEvent::Quit],
        ]);
        assert_eq!(input.poll(), vec![InputEvent::KeyDown(Key::Left)]);
        assert_eq!(input.poll(), vec![]);
        assert_eq!(input.poll().len(), 2);
        assert_eq!(input.poll(), vec![], "exhausted script polls empty");
    }
}
