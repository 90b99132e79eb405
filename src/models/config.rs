use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::error::{LineageError, LineageResult};

/// Standarddjup för alla vandringar uppåt i trädet.
/// Skyddar mot cykler i felaktig data.
pub const DEFAULT_MAX_DEPTH: usize = 20;

pub const DEFAULT_SON_CONNECTOR: &str = "بن";
pub const DEFAULT_DAUGHTER_CONNECTOR: &str = "بنت";

/// Hur ett fullständigt släktnamn byggs
///
/// Appen har två konventioner: med och utan personens eget namn, med och
/// utan familjenamnet sist. Båda styrs härifrån.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameFormat {
    pub include_own_name: bool,
    pub include_family_name: bool,
    /// Bindeord efter första namnet för män ("son till")
    pub son_connector: String,
    /// Bindeord efter första namnet för kvinnor ("dotter till")
    pub daughter_connector: String,
}

impl Default for NameFormat {
    fn default() -> Self {
        Self {
            include_own_name: true,
            include_family_name: true,
            son_connector: DEFAULT_SON_CONNECTOR.to_string(),
            daughter_connector: DEFAULT_DAUGHTER_CONNECTOR.to_string(),
        }
    }
}

impl NameFormat {
    /// Kort variant: bara närmaste släktled, utan familjenamn
    pub fn common() -> Self {
        Self {
            include_family_name: false,
            ..Self::default()
        }
    }

    pub fn connector_for(&self, gender: crate::models::Gender) -> &str {
        match gender {
            crate::models::Gender::Male => &self.son_connector,
            crate::models::Gender::Female => &self.daughter_connector,
        }
    }
}

/// Inställningar för släktträdskärnan
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineageSettings {
    pub max_depth: usize,
    pub family_name: String,
    pub name_format: NameFormat,
}

impl Default for LineageSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            family_name: String::new(),
            name_format: NameFormat::default(),
        }
    }
}

impl LineageSettings {
    fn config_dir() -> PathBuf {
        directories::ProjectDirs::from("se", "genlib", "Genlib")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn default_path() -> PathBuf {
        Self::config_dir().join("settings.toml")
    }

    /// Ladda från standardplatsen, eller defaults om filen saknas/är trasig
    pub fn load() -> Self {
        let path = Self::default_path();
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::debug!("Använder standardinställningar ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> LineageResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self) -> LineageResult<()> {
        self.save_to(&Self::default_path())
    }

    pub fn save_to(&self, path: &Path) -> LineageResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| LineageError::other(format!("Kunde inte serialisera inställningar: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> LineageResult<()> {
        if self.max_depth == 0 {
            return Err(LineageError::validation("max_depth måste vara minst 1"));
        }
        Ok(())
    }
}
