pub mod menu;
pub mod nav;
pub mod theme;

pub use menu::MenuState;
pub use nav::{is_active, NavLink, NAV_LINKS, TOOLS_PREFIXES};
pub use theme::{ParseThemeError, Theme, ThemeIcon};
