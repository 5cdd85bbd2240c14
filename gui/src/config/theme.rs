// Chart and gauge colours
use engine::view::Tone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    pub background: String,
    pub foreground: String,
    pub line: String,
    pub marker: String,
    pub grid: String,
    pub positive: String,
    pub negative: String,
    pub neutral: String,
    pub gauge_track: String,
}

impl ChartPalette {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            foreground: "#1f2933".to_string(),
            line: "#2f6f4f".to_string(),
            marker: "#d97706".to_string(),
            grid: "#e5e7eb".to_string(),
            positive: "#15803d".to_string(),
            negative: "#b91c1c".to_string(),
            neutral: "#6b7280".to_string(),
            gauge_track: "#f3f4f6".to_string(),
        }
    }

    pub fn tone_color(&self, tone: Tone) -> &str {
        match tone {
            Tone::Positive => &self.positive,
            Tone::Negative => &self.negative,
            Tone::Neutral => &self.neutral,
        }
    }
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self::default_light()
    }
}
