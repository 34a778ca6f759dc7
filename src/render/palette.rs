// Terminal colouring of a label map.
//
// The palette is plain configuration handed to `Renderer`. Entry 0 colours
// the background, entry k colours patch k, so a palette of n entries can
// show at most n - 1 patches.

use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::core::{ChartError, Result};
use super::labels::LabelMap;

pub const TOO_MANY_PATCHES: &str = "too many patches for coloured display";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub palette: Vec<String>,
    pub reset: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            palette: [
                "\x1b[0m", "\x1b[41m", "\x1b[43m", "\x1b[42m",
                "\x1b[46m", "\x1b[44m", "\x1b[45m", "\x1b[101m",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            reset: "\x1b[0m".into(),
        }
    }
}

impl RenderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ChartError::MalformedInput(format!("bad render config: {}", e)))
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ChartError::MalformedInput(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn colours(&self) -> usize {
        self.palette.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendering {
    Coloured(String),
    Declined { patches: usize, colours: usize },
}

impl Rendering {
    pub fn text(&self) -> &str {
        match self {
            Rendering::Coloured(s) => s,
            Rendering::Declined { .. } => TOO_MANY_PATCHES,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// One coloured space per cell, newline after each row.
    pub fn render(&self, labels: &LabelMap, patch_count: usize) -> Rendering {
        let colours = self.config.colours();
        if patch_count >= colours {
            log::warn!("{} patches but only {} colours, not rendering", patch_count, colours);
            return Rendering::Declined { patches: patch_count, colours };
        }
        let mut out = String::new();
        for row in labels.rows() {
            for &label in row {
                let colour = self.config.palette.get(label).map(String::as_str).unwrap_or("");
                out.push_str(colour);
                out.push(' ');
                out.push_str(&self.config.reset);
            }
            out.push('\n');
        }
        Rendering::Coloured(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::regions::Patch;

    fn two_patch_map() -> LabelMap {
        let a = Patch::new(1, [0usize].into_iter().collect());
        let b = Patch::new(2, [3usize].into_iter().collect());
        LabelMap::from_patches(2, 2, &[a, b])
    }

    #[test]
    fn default_palette_has_eight_colours() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.colours(), 8);
        assert_eq!(cfg.palette[0], cfg.reset);
    }

    #[test]
    fn renders_with_injected_palette() {
        let cfg = RenderConfig {
            palette: vec!["<0>".into(), "<1>".into(), "<2>".into()],
            reset: "</>".into(),
        };
        let out = Renderer::new(cfg).render(&two_patch_map(), 2);
        assert_eq!(out, Rendering::Coloured("<1> </><0> </>\n<0> </><2> </>\n".into()));
    }

    #[test]
    fn declines_when_palette_too_small() {
        let cfg = RenderConfig { palette: vec!["a".into(), "b".into()], reset: String::new() };
        let out = Renderer::new(cfg).render(&two_patch_map(), 2);
        assert_eq!(out, Rendering::Declined { patches: 2, colours: 2 });
        assert_eq!(out.text(), TOO_MANY_PATCHES);
    }

    #[test]
    fn config_from_json_fills_defaults() {
        let cfg = RenderConfig::from_json_str(r#"{"palette": ["x", "y"]}"#).unwrap();
        assert_eq!(cfg.palette, vec!["x", "y"]);
        assert_eq!(cfg.reset, "\x1b[0m");
        assert!(RenderConfig::from_json_str("not json").is_err());
    }
}
