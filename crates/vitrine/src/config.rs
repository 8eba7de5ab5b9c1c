//! # Site Configuration
//!
//! Loaded once from TOML. Every field has a default, so an empty file is a
//! valid configuration:
//!
//! ```toml
//! [particles]
//! area_per_particle = 15000.0
//! seed = 42
//!
//! [reveal]
//! start = "top 85%"
//!
//! [preview]
//! language = "en"
//! frames = 600
//! ```

use std::path::Path;

use serde::Deserialize;
use vitrine_core::{VitrineError, VitrineResult};
use vitrine_fx::{NetworkConfig, RevealConfig, TypewriterConfig};

use crate::locale::Language;

/// Headless preview run parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Viewport width in px.
    pub width: f32,
    /// Viewport height in px.
    pub height: f32,
    /// Frames to simulate.
    pub frames: u32,
    /// Simulated frame rate.
    pub fps: f64,
    /// Initial locale.
    pub language: Language,
    /// Page scroll per frame in px.
    pub scroll_speed: f32,
    /// Simulate a touch device (no cursor glow).
    pub touch: bool,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            frames: 600,
            fps: 60.0,
            language: Language::Es,
            scroll_speed: 20.0,
            touch: false,
        }
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Contact section particle network.
    pub particles: NetworkConfig,
    /// Default reveal parameters.
    pub reveal: RevealConfig,
    /// Hero typewriter timing.
    pub typewriter: TypewriterConfig,
    /// Preview binary settings.
    pub preview: PreviewConfig,
}

impl SiteConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value is out of range.
    pub fn from_toml_str(source: &str) -> VitrineResult<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is invalid.
    pub fn load<P: AsRef<Path>>(path: P) -> VitrineResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::info!("loaded site config from {}", path.display());
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`VitrineError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> VitrineResult<()> {
        let p = &self.particles;
        check(p.area_per_particle > 0.0, "particles.area_per_particle must be positive")?;
        check(p.link_distance > 0.0, "particles.link_distance must be positive")?;
        check(p.max_speed >= 0.0, "particles.max_speed must not be negative")?;
        check(
            p.radius_min > 0.0 && p.radius_min < p.radius_max,
            "particles.radius_min must be positive and below radius_max",
        )?;

        let r = &self.reveal;
        check(r.duration >= 0.0, "reveal.duration must not be negative")?;
        check(r.delay >= 0.0, "reveal.delay must not be negative")?;
        check(r.stagger >= 0.0, "reveal.stagger must not be negative")?;

        let t = &self.typewriter;
        check(
            t.typing >= 0.0 && t.deleting >= 0.0 && t.pause >= 0.0,
            "typewriter intervals must not be negative",
        )?;

        let v = &self.preview;
        check(v.width > 0.0 && v.height > 0.0, "preview size must be positive")?;
        check(v.fps > 0.0, "preview.fps must be positive")?;
        Ok(())
    }
}

fn check(ok: bool, message: &str) -> VitrineResult<()> {
    if ok {
        Ok(())
    } else {
        Err(VitrineError::InvalidConfig(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitrine_fx::{Direction, Easing, TriggerStart};

    #[test]
    fn test_empty_document_is_default() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config.preview, PreviewConfig::default());
        assert_eq!(config.reveal, RevealConfig::default());
        assert!((config.particles.area_per_particle - 15_000.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_partial_sections() {
        let config = SiteConfig::from_toml_str(
            r#"
            [particles]
            seed = 7
            link_distance = 120.0

            [reveal]
            direction = "left"
            start = "top 80%"
            easing = "power3_out"

            [typewriter]
            pause = 1.5

            [preview]
            language = "en"
            touch = true
            "#,
        )
        .unwrap();

        assert_eq!(config.particles.seed, 7);
        assert!((config.particles.link_distance - 120.0).abs() < f32::EPSILON);
        assert_eq!(config.reveal.direction, Direction::Left);
        assert_eq!(config.reveal.start, TriggerStart::TOP_80);
        assert_eq!(config.reveal.easing, Easing::Power3Out);
        assert!((config.reveal.duration - 0.6).abs() < f32::EPSILON);
        assert!((config.typewriter.pause - 1.5).abs() < f64::EPSILON);
        assert_eq!(config.preview.language, Language::En);
        assert!(config.preview.touch);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = SiteConfig::from_toml_str("[particles]\narea_per_particle = 0.0").unwrap_err();
        assert!(matches!(err, VitrineError::InvalidConfig(_)));

        let err = SiteConfig::from_toml_str("[preview]\nlanguage = \"fr\"").unwrap_err();
        assert!(matches!(err, VitrineError::ConfigParse(_)));

        let err = SiteConfig::from_toml_str("[reveal]\nstart = \"middle\"").unwrap_err();
        assert!(matches!(err, VitrineError::ConfigParse(_)));

        // Only the curves the page animates with are accepted
        let err = SiteConfig::from_toml_str("[reveal]\neasing = \"sine_in_out\"").unwrap_err();
        assert!(matches!(err, VitrineError::ConfigParse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteConfig::load("/nonexistent/vitrine.toml").unwrap_err();
        assert!(matches!(err, VitrineError::Io(_)));
    }
}
