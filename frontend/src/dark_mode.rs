//! Dark mode state shared through Leptos context.
//!
//! The initial theme comes from `localStorage`, falling back to the browser's
//! `prefers-color-scheme`. Changes are mirrored onto the `dark` class of the
//! `<html>` element and written back to storage.

use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use leptos::*;
use shared::Theme;
use thiserror::Error;

pub const THEME_STORAGE_KEY: &str = "nav_header_theme";
pub const DARK_CLASS: &str = "dark";

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Error)]
pub enum DarkModeError {
    #[error("failed to persist theme: {0}")]
    Storage(#[from] StorageError),
    #[error("document has no root element")]
    NoRootElement,
    #[error("failed to update class list: {0}")]
    ClassList(String),
}

/// Read/toggle handle for the current theme.
#[derive(Clone, Copy)]
pub struct DarkMode {
    theme: RwSignal<Theme>,
}

impl DarkMode {
    /// Wrap an existing signal. No storage or DOM side effects are attached.
    pub fn from_signal(theme: RwSignal<Theme>) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn is_dark(&self) -> bool {
        self.theme.with(Theme::is_dark)
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
    }
}

fn stored_theme() -> Option<Theme> {
    LocalStorage::get(THEME_STORAGE_KEY).ok()
}

fn system_theme() -> Theme {
    let prefers_dark = window()
        .match_media(DARK_SCHEME_QUERY)
        .ok()
        .flatten()
        .map(|media| media.matches())
        .unwrap_or_default();
    Theme::from_dark(prefers_dark)
}

pub fn initial_theme() -> Theme {
    stored_theme().unwrap_or_else(system_theme)
}

pub fn persist(theme: Theme) -> Result<(), DarkModeError> {
    LocalStorage::set(THEME_STORAGE_KEY, theme)?;
    Ok(())
}

pub fn apply_to_document(theme: Theme) -> Result<(), DarkModeError> {
    let root = document()
        .document_element()
        .ok_or(DarkModeError::NoRootElement)?;
    root.class_list()
        .toggle_with_force(DARK_CLASS, theme.is_dark())
        .map_err(|e| DarkModeError::ClassList(format!("{:?}", e)))?;
    Ok(())
}

/// Create the app-wide [`DarkMode`] and provide it as context.
pub fn provide_dark_mode() -> DarkMode {
    let dark_mode = DarkMode::from_signal(create_rw_signal(initial_theme()));

    create_effect(move |previous: Option<Theme>| {
        let theme = dark_mode.theme();
        if let Err(e) = apply_to_document(theme) {
            leptos::logging::warn!("could not apply {} theme: {}", theme, e);
        }
        // Only explicit changes are stored, so the OS preference keeps
        // applying until the user picks a theme.
        if previous.is_some_and(|prev| prev != theme) {
            if let Err(e) = persist(theme) {
                leptos::logging::warn!("{}", e);
            }
        }
        theme
    });

    provide_context(dark_mode);
    dark_mode
}

pub fn use_dark_mode() -> DarkMode {
    expect_context::<DarkMode>()
}
