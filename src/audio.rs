//! Sound effect routing
//!
//! Maps simulation events to sound effects and plays them through the
//! platform's audio sink at the configured volume.

use crate::platform::AudioSink;
use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits wall
    WallHit,
    /// Ball or projectile hits a block
    BlockHit,
    /// Block destroyed
    BlockBreak,
    /// Reward collected
    RewardCollect,
    /// Projectile fired
    Shot,
    /// Ball lost past the kill line
    BallLost,
    /// Level cleared
    LevelClear,
    /// Game over
    GameOver,
}

/// Sound effect for a simulation event, if it has one.
pub fn sound_for_event(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::WallHit => Some(SoundEffect::WallHit),
        GameEvent::PaddleHit => Some(SoundEffect::PaddleHit),
        GameEvent::BlockHit => Some(SoundEffect::BlockHit),
        GameEvent::BlockDestroyed => Some(SoundEffect::BlockBreak),
        GameEvent::BallLost => Some(SoundEffect::BallLost),
        GameEvent::LevelCleared => Some(SoundEffect::LevelClear),
        GameEvent::GameOver => Some(SoundEffect::GameOver),
        GameEvent::Shot => Some(SoundEffect::Shot),
        GameEvent::RewardCollected(_) => Some(SoundEffect::RewardCollect),
    }
}

/// Play the sounds for one tick's worth of events.
pub fn play_events(sink: &mut dyn AudioSink, settings: &Settings, events: &[GameEvent]) {
    let vol = settings.effective_fx_volume();
    if vol <= 0.0 {
        return;
    }
    for event in events {
        if let Some(effect) = sound_for_event(event) {
            sink.play(effect, vol);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::RewardKind;

    #[derive(Default)]
    struct RecordingSink {
        played: Vec<(SoundEffect, f32)>,
    }

    impl AudioSink for RecordingSink {
        fn play(&mut self, effect: SoundEffect, volume: f32) {
            self.played.push((effect, volume));
        }
    }

    #[test]
    fn test_every_event_maps_to_a_sound() {
        let events = [
            GameEvent::WallHit,
            GameEvent::PaddleHit,
            GameEvent::BlockHit,
            GameEvent::BlockDestroyed,
            GameEvent::BallLost,
            GameEvent::LevelCleared,
            GameEvent::GameOver,
            GameEvent::Shot,
            GameEvent::RewardCollected(RewardKind::ExtraLife),
        ];
        assert!(events.iter().all(|e| sound_for_event(e).is_some()));
    }

    #[test]
    fn test_muted_fx_plays_nothing() {
        let mut sink = RecordingSink::default();
        let mut settings = Settings::default();
        settings.toggle_fx();
        play_events(&mut sink, &settings, &[GameEvent::WallHit]);
        assert!(sink.played.is_empty());
    }

    #[test]
    fn test_events_play_at_fx_volume() {
        let mut sink = RecordingSink::default();
        let settings = Settings::default();
        play_events(
            &mut sink,
            &settings,
            &[GameEvent::WallHit, GameEvent::BlockHit],
        );
        assert_eq!(
            sink.played,
            vec![
                (SoundEffect::WallHit, 0.1),
                (SoundEffect::BlockHit, 0.1)
            ]
        );
    }
}
