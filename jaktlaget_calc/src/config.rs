//! Scenario files and their resolution against command-line overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::calculator::{CalculatorInput, PriceTier};
use crate::regions::Region;

/// Scenario file format. Every field is optional; missing ones fall back to
/// the page defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ScenarioFile {
    pub region: Option<String>,
    pub adoption_pct: Option<f64>,
    /// Monthly price in SEK (19 or 49).
    pub price: Option<u32>,
    pub mau_pct: Option<f64>,
    pub views_per_mau: Option<u32>,
    pub share_of_voice_pct: Option<f64>,
}

/// Command-line values that override a scenario file.
///
/// Lets the binary feed its flags into [`resolve_input`] without the library
/// depending on clap types.
pub trait ScenarioOverrides {
    fn region(&self) -> Option<String>;
    fn adoption_pct(&self) -> Option<f64>;
    fn price(&self) -> Option<u32>;
    fn mau_pct(&self) -> Option<f64>;
    fn views_per_mau(&self) -> Option<u32>;
    fn share_of_voice_pct(&self) -> Option<f64>;
}

/// Reads a scenario file. A missing file is not an error.
///
/// `.toml` files are parsed as TOML, anything else as JSON.
pub fn load_scenario(path: &Path) -> Result<Option<ScenarioFile>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no scenario file");
        return Ok(None);
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let scenario: ScenarioFile = match ext.as_str() {
        "toml" => toml::from_str(&data)
            .with_context(|| format!("failed to parse toml scenario {}", path.display()))?,
        _ => serde_json::from_str(&data)
            .with_context(|| format!("failed to parse json scenario {}", path.display()))?,
    };
    tracing::debug!(path = %path.display(), ?scenario, "loaded scenario");
    Ok(Some(scenario))
}

/// Merges overrides, file and defaults (in that order of precedence).
pub fn resolve_input<O: ScenarioOverrides>(
    cli: &O,
    file: Option<&ScenarioFile>,
) -> Result<CalculatorInput> {
    let defaults = CalculatorInput::default();
    let from_file = |pick: fn(&ScenarioFile) -> Option<f64>| file.and_then(pick);

    let region = match cli.region().or_else(|| file.and_then(|f| f.region.clone())) {
        Some(key) => key.parse::<Region>()?,
        None => defaults.region,
    };

    let price = match cli.price().or_else(|| file.and_then(|f| f.price)) {
        Some(sek) => PriceTier::try_from(sek)?,
        None => defaults.price,
    };

    Ok(CalculatorInput {
        region,
        adoption_pct: cli
            .adoption_pct()
            .or_else(|| from_file(|f| f.adoption_pct))
            .unwrap_or(defaults.adoption_pct),
        price,
        mau_pct: cli
            .mau_pct()
            .or_else(|| from_file(|f| f.mau_pct))
            .unwrap_or(defaults.mau_pct),
        views_per_mau: cli
            .views_per_mau()
            .or_else(|| file.and_then(|f| f.views_per_mau))
            .unwrap_or(defaults.views_per_mau),
        share_of_voice_pct: cli
            .share_of_voice_pct()
            .or_else(|| from_file(|f| f.share_of_voice_pct))
            .unwrap_or(defaults.share_of_voice_pct),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[derive(Default)]
    struct Flags {
        region: Option<String>,
        adoption_pct: Option<f64>,
        price: Option<u32>,
        views_per_mau: Option<u32>,
    }

    impl ScenarioOverrides for Flags {
        fn region(&self) -> Option<String> {
            self.region.clone()
        }
        fn adoption_pct(&self) -> Option<f64> {
            self.adoption_pct
        }
        fn price(&self) -> Option<u32> {
            self.price
        }
        fn mau_pct(&self) -> Option<f64> {
            None
        }
        fn views_per_mau(&self) -> Option<u32> {
            self.views_per_mau
        }
        fn share_of_voice_pct(&self) -> Option<f64> {
            None
        }
    }

    fn write_file(name: &str, body: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(name);
        let mut f = fs::File::create(&path).unwrap();
        f.write_all(body.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_without_file_or_flags() {
        let input = resolve_input(&Flags::default(), None).unwrap();
        assert_eq!(input, CalculatorInput::default());
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_scenario(&dir.path().join("nope.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn toml_scenario_loads() {
        let (_dir, path) = write_file(
            "pitch.toml",
            "region = \"DK\"\nadoption_pct = 25.0\nprice = 49\nshare_of_voice_pct = 40.0\n",
        );
        let file = load_scenario(&path).unwrap().unwrap();
        let input = resolve_input(&Flags::default(), Some(&file)).unwrap();
        assert_eq!(input.region, Region::Denmark);
        assert_eq!(input.adoption_pct, 25.0);
        assert_eq!(input.price, PriceTier::Sek49);
        assert_eq!(input.share_of_voice_pct, 40.0);
        assert_eq!(input.mau_pct, 60.0);
    }

    #[test]
    fn json_scenario_loads() {
        let (_dir, path) = write_file("pitch.json", r#"{"region": "fi", "views_per_mau": 90}"#);
        let file = load_scenario(&path).unwrap().unwrap();
        let input = resolve_input(&Flags::default(), Some(&file)).unwrap();
        assert_eq!(input.region, Region::Finland);
        assert_eq!(input.views_per_mau, 90);
    }

    #[test]
    fn flags_win_over_file() {
        let file = ScenarioFile {
            region: Some("SE".into()),
            adoption_pct: Some(5.0),
            views_per_mau: Some(10),
            ..ScenarioFile::default()
        };
        let flags = Flags {
            region: Some("NO".into()),
            adoption_pct: Some(15.0),
            ..Flags::default()
        };
        let input = resolve_input(&flags, Some(&file)).unwrap();
        assert_eq!(input.region, Region::Norway);
        assert_eq!(input.adoption_pct, 15.0);
        assert_eq!(input.views_per_mau, 10);
    }

    #[test]
    fn bad_values_surface_as_errors() {
        let flags = Flags {
            price: Some(29),
            ..Flags::default()
        };
        let err = resolve_input(&flags, None).unwrap_err();
        assert!(err.to_string().contains("unknown price tier 29"));

        let flags = Flags {
            region: Some("IS".into()),
            ..Flags::default()
        };
        let err = resolve_input(&flags, None).unwrap_err();
        assert!(err.to_string().contains("unknown region 'IS'"));
    }

    #[test]
    fn unknown_keys_rejected() {
        let (_dir, path) = write_file("pitch.toml", "adoption = 10\n");
        let err = load_scenario(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse toml scenario"));
    }
}
