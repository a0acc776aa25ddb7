// Theme preference: light or dark, persisted through a ThemeStorage

use crate::error::Result;
use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Token written to storage.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Light => "light-mode",
            Self::Dark => "dark-mode",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "light-mode" => Some(Self::Light),
            "dark-mode" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn from_system(theme: egui::Theme) -> Self {
        match theme {
            egui::Theme::Light => Self::Light,
            egui::Theme::Dark => Self::Dark,
        }
    }

    pub fn egui_theme(&self) -> egui::Theme {
        match self {
            Self::Light => egui::Theme::Light,
            Self::Dark => egui::Theme::Dark,
        }
    }

    /// Icon for the toggle button: the moon offers dark mode, the sun light mode.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀",
        }
    }
}

/// Persistence backend for the theme preference.
pub trait ThemeStorage {
    fn load(&self) -> Option<String>;
    fn save(&mut self, token: &str) -> Result<()>;
}

/// Current theme plus the storage it is written through.
pub struct ThemeStore<S: ThemeStorage> {
    storage: S,
    current: ThemeMode,
}

impl<S: ThemeStorage> ThemeStore<S> {
    /// Stored preference first, then the system theme, then dark.
    pub fn initialize(storage: S, system: Option<ThemeMode>) -> Self {
        let stored = storage.load().and_then(|token| {
            let mode = ThemeMode::from_token(&token);
            if mode.is_none() {
                log::warn!("Ignoring unrecognized theme token {:?}", token);
            }
            mode
        });
        let current = stored.or(system).unwrap_or_default();
        log::debug!("Initial theme: {}", current.token());
        Self { storage, current }
    }

    pub fn get(&self) -> ThemeMode {
        self.current
    }

    /// Set the mode and persist it. The mode changes even if saving fails.
    pub fn set(&mut self, mode: ThemeMode) -> Result<()> {
        self.current = mode;
        self.storage.save(mode.token())
    }

    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.current.toggle();
        self.set(next)?;
        Ok(next)
    }

    #[cfg(test)]
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

/// In-memory storage for tests.
#[cfg(test)]
#[derive(Default, Debug)]
pub struct MemoryStorage {
    pub value: Option<String>,
    pub writes: usize,
}

#[cfg(test)]
impl ThemeStorage for MemoryStorage {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, token: &str) -> Result<()> {
        self.value = Some(token.to_string());
        self.writes += 1;
        Ok(())
    }
}
