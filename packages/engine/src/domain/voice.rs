//! Synth voices attached to bodies.
//!
//! The engine does not render audio. A voice describes which synth the JS
//! audio layer should build for a body, and collisions turn into
//! [`SoundEvent`]s that the host plays on that synth.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceKind {
    #[serde(rename = "MembraneSynth")]
    Membrane,
    #[serde(rename = "MetalSynth")]
    Metal,
    #[serde(rename = "FMSynth")]
    Fm,
    #[serde(rename = "AMSynth")]
    Am,
    #[serde(rename = "PluckSynth")]
    Pluck,
    #[serde(rename = "Synth")]
    Synth,
}

impl VoiceKind {
    /// Constructor name in the audio library
    pub fn synth_name(self) -> &'static str {
        match self {
            VoiceKind::Membrane => "MembraneSynth",
            VoiceKind::Metal => "MetalSynth",
            VoiceKind::Fm => "FMSynth",
            VoiceKind::Am => "AMSynth",
            VoiceKind::Pluck => "PluckSynth",
            VoiceKind::Synth => "Synth",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DecayCurve {
    Linear,
    Exponential,
}

/// Amplitude envelope, times in seconds
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub attack: f32,
    pub decay: f32,
    pub sustain: f32,
    pub release: f32,
    pub decay_curve: DecayCurve,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceSpec {
    pub kind: VoiceKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub envelope: Option<Envelope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub octaves: Option<f32>,
}

impl VoiceSpec {
    /// Library defaults for everything but the synth type
    pub const fn plain(kind: VoiceKind) -> Self {
        Self {
            kind,
            envelope: None,
            octaves: None,
        }
    }
}

/// One voice, owned by exactly one body
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voice {
    pub spec: VoiceSpec,
    muted: bool,
}

impl Voice {
    /// Voices start silent so nothing sounds while a body is being set up.
    pub fn new(spec: VoiceSpec) -> Self {
        Self { spec, muted: true }
    }

    pub fn kind(&self) -> VoiceKind {
        self.spec.kind
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn arm(&mut self) {
        self.muted = false;
    }

    pub fn silence(&mut self) {
        self.muted = true;
    }

    /// Produce a trigger for the host, or nothing while muted
    pub fn trigger(&self, body_id: u32, pitch: f32, velocity: f32) -> Option<SoundEvent> {
        if self.muted {
            return None;
        }
        Some(SoundEvent {
            body_id,
            voice: self.spec.kind,
            pitch,
            velocity,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundEvent {
    pub body_id: u32,
    pub voice: VoiceKind,
    pub pitch: f32,
    /// Approach speed at contact, engine units per frame
    pub velocity: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_voice_is_muted_until_armed() {
        let mut voice = Voice::new(VoiceSpec::plain(VoiceKind::Metal));
        assert!(voice.is_muted());
        assert!(voice.trigger(1, 17.0, 2.0).is_none());

        voice.arm();
        let ev = voice.trigger(1, 17.0, 2.0).unwrap();
        assert_eq!(ev.voice, VoiceKind::Metal);
        assert_eq!(ev.pitch, 17.0);

        voice.silence();
        assert!(voice.trigger(1, 17.0, 2.0).is_none());
    }

    #[test]
    fn voice_kind_serializes_to_synth_constructor_name() {
        let json = serde_json::to_string(&VoiceKind::Fm).unwrap();
        assert_eq!(json, "\"FMSynth\"");
        assert_eq!(VoiceKind::Am.synth_name(), "AMSynth");
    }
}
