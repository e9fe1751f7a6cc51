//! Privacy flow pages and values.

use super::pager::FlowPage;

/// Pages of the privacy flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PrivacyPage {
    /// Ambient noise suppression while recording
    #[default]
    NoiseReduction,
    /// Boost the speaker's voice over background sound
    VoiceAmplification,
}

impl FlowPage for PrivacyPage {
    fn all() -> &'static [Self] {
        &[PrivacyPage::NoiseReduction, PrivacyPage::VoiceAmplification]
    }

    fn title(&self) -> &'static str {
        match self {
            PrivacyPage::NoiseReduction => "Noise reduction",
            PrivacyPage::VoiceAmplification => "Voice boost",
        }
    }

    fn description(&self) -> &'static str {
        match self {
            PrivacyPage::NoiseReduction => "Cuts outside noise\nto protect your records",
            PrivacyPage::VoiceAmplification => "Keeps only your voice\nclear in recordings",
        }
    }
}

/// Values edited by the privacy flow. Session-local.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrivacySettings {
    /// Noise reduction enabled
    pub noise_reduction: bool,
    /// Voice amplification enabled
    pub voice_amplification: bool,
}
