//! Audio cues using the Web Audio API
//!
//! Every cue is a single synthesized beep - no external files needed.

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioContext, OscillatorType};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Drop landed in the pot
    Catch,
    /// Drop hit the ground
    Miss,
    /// Bug bit the plant
    Nibble,
    /// Session started
    Start,
    /// Plant wilted
    GameOver,
    /// Bug swatted
    Swat,
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One beep: frequency (Hz), shape, length (s) and peak gain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    pub waveform: Waveform,
    pub duration: f64,
    pub gain: f32,
}

impl SoundEffect {
    /// The cue for a simulation event
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::Started => SoundEffect::Start,
            GameEvent::Caught => SoundEffect::Catch,
            GameEvent::Missed => SoundEffect::Miss,
            GameEvent::Nibbled => SoundEffect::Nibble,
            GameEvent::Swatted => SoundEffect::Swat,
            GameEvent::GameOver => SoundEffect::GameOver,
        }
    }

    pub fn tone(self) -> Tone {
        let (freq, waveform, duration, gain) = match self {
            SoundEffect::Catch => (880.0, Waveform::Sine, 0.05, 0.06),
            SoundEffect::Miss => (220.0, Waveform::Sawtooth, 0.08, 0.06),
            SoundEffect::Nibble => (260.0, Waveform::Triangle, 0.12, 0.08),
            SoundEffect::Start => (880.0, Waveform::Sine, 0.06, 0.06),
            SoundEffect::GameOver => (120.0, Waveform::Sine, 0.6, 0.12),
            SoundEffect::Swat => (800.0, Waveform::Square, 0.06, 0.09),
        };
        Tone {
            freq,
            waveform,
            duration,
            gain,
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<Waveform> for OscillatorType {
    fn from(w: Waveform) -> Self {
        match w {
            Waveform::Sine => OscillatorType::Sine,
            Waveform::Square => OscillatorType::Square,
            Waveform::Sawtooth => OscillatorType::Sawtooth,
            Waveform::Triangle => OscillatorType::Triangle,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    master_volume: f32,
    muted: bool,
    /// Cues that actually sounded (or would have, natively)
    played: u64,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    pub fn new() -> Self {
        Self {
            #[cfg(target_arch = "wasm32")]
            ctx: Self::create_context(),
            master_volume: 1.0,
            muted: false,
            played: 0,
        }
    }

    /// Manager configured from saved preferences
    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::new();
        audio.set_master_volume(settings.master_volume);
        audio.set_muted(settings.muted);
        audio
    }

    #[cfg(target_arch = "wasm32")]
    fn create_context() -> Option<AudioContext> {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        ctx
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Number of cues played so far
    pub fn played(&self) -> u64 {
        self.played
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    /// Play the cue for every drained simulation event
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for &event in events {
            self.play(SoundEffect::for_event(event));
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.played += 1;

        #[cfg(target_arch = "wasm32")]
        self.beep(effect.tone(), vol);
        #[cfg(not(target_arch = "wasm32"))]
        log::trace!("cue {:?}", effect);
    }

    /// Single oscillator through a decaying gain
    #[cfg(target_arch = "wasm32")]
    fn beep(&self, tone: Tone, vol: f32) {
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        let Ok(osc) = ctx.create_oscillator() else { return };
        let Ok(gain) = ctx.create_gain() else { return };
        osc.set_type(tone.waveform.into());
        osc.frequency().set_value(tone.freq);
        if osc.connect_with_audio_node(&gain).is_err()
            || gain.connect_with_audio_node(&ctx.destination()).is_err()
        {
            return;
        }

        let t = ctx.current_time();
        gain.gain().set_value_at_time(tone.gain * vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.0001, t + tone.duration)
            .ok();
        osc.start().ok();
        osc.stop_with_when(t + tone.duration).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_event_has_a_cue() {
        let pairs = [
            (GameEvent::Started, SoundEffect::Start),
            (GameEvent::Caught, SoundEffect::Catch),
            (GameEvent::Missed, SoundEffect::Miss),
            (GameEvent::Nibbled, SoundEffect::Nibble),
            (GameEvent::Swatted, SoundEffect::Swat),
            (GameEvent::GameOver, SoundEffect::GameOver),
        ];
        for (event, effect) in pairs {
            assert_eq!(SoundEffect::for_event(event), effect);
        }
    }

    #[test]
    fn test_tones() {
        let catch = SoundEffect::Catch.tone();
        assert_eq!(catch.freq, 880.0);
        assert_eq!(catch.waveform, Waveform::Sine);

        let swat = SoundEffect::Swat.tone();
        assert_eq!(swat.waveform, Waveform::Square);
        assert_eq!(swat.gain, 0.09);

        assert!(SoundEffect::GameOver.tone().duration > SoundEffect::Nibble.tone().duration);
    }

    #[test]
    fn test_mute_suppresses_cues() {
        let mut audio = AudioManager::new();
        audio.play_events(&[GameEvent::Caught, GameEvent::Missed]);
        assert_eq!(audio.played(), 2);

        audio.set_muted(true);
        audio.play(SoundEffect::Swat);
        assert_eq!(audio.played(), 2);
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            muted: true,
            master_volume: 0.5,
        };
        let mut audio = AudioManager::from_settings(&settings);
        assert!(audio.is_muted());
        audio.play(SoundEffect::Start);
        assert_eq!(audio.played(), 0);

        audio.set_muted(false);
        audio.set_master_volume(0.0);
        audio.play(SoundEffect::Start);
        assert_eq!(audio.played(), 0);
    }
}
