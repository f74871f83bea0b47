// SPDX-License-Identifier: PMPL-1.0-or-later

//! The files that carry a generated locale list, and how each one
//! spells a locale.

use crate::types::{LocaleCode, LocaleSet, MarkerPair};
use std::path::{Path, PathBuf};

pub const GRADLE_PATH: &str = "app/build.gradle.kts";
pub const GRADLE_START: &str = "/* locale list begin */";
pub const GRADLE_END: &str = "/* locale list end */";

pub const LOCALES_CONFIG_PATH: &str = "app/src/main/res/xml/locales_config.xml";
pub const LOCALES_CONFIG_START: &str = "<!--locale list begin-->";
pub const LOCALES_CONFIG_END: &str = "<!--locale list end-->";

/// Syntax used for one rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineFormat {
    /// `"de"`
    Quoted,
    /// `<locale android:name="de" />`
    XmlLocale,
}

impl LineFormat {
    pub fn render_one(&self, code: &LocaleCode) -> String {
        match self {
            LineFormat::Quoted => format!("\"{}\"", code),
            LineFormat::XmlLocale => format!("<locale android:name=\"{}\" />", code),
        }
    }

    /// Render every locale, in sorted set order.
    pub fn render(&self, locales: &LocaleSet) -> Vec<String> {
        locales.iter().map(|code| self.render_one(code)).collect()
    }

    /// Separator that fits the syntax: list items need a trailing comma.
    pub fn default_separator(&self) -> &'static str {
        match self {
            LineFormat::Quoted => ",\n",
            LineFormat::XmlLocale => "\n",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub path: PathBuf,
    pub markers: MarkerPair,
    pub separator: String,
    pub format: LineFormat,
}

impl Target {
    pub fn new(name: &str, path: PathBuf, markers: MarkerPair, format: LineFormat) -> Self {
        Self {
            name: name.to_string(),
            path,
            markers,
            separator: format.default_separator().to_string(),
            format,
        }
    }

    /// `resourceConfigurations` list in the app build script
    pub fn gradle(root: &Path) -> Self {
        Self::new(
            "build.gradle.kts",
            root.join(GRADLE_PATH),
            MarkerPair::new(GRADLE_START, GRADLE_END),
            LineFormat::Quoted,
        )
    }

    /// Per-app language manifest
    pub fn locales_config(root: &Path) -> Self {
        Self::new(
            "locales_config.xml",
            root.join(LOCALES_CONFIG_PATH),
            MarkerPair::new(LOCALES_CONFIG_START, LOCALES_CONFIG_END),
            LineFormat::XmlLocale,
        )
    }

    pub fn defaults(root: &Path) -> Vec<Self> {
        vec![Self::gradle(root), Self::locales_config(root)]
    }

    pub fn render(&self, locales: &LocaleSet) -> Vec<String> {
        self.format.render(locales)
    }
}
