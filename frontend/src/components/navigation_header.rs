use leptos::*;
use leptos_router::*;
use shared::{MenuState, NAV_LINKS};

use crate::dark_mode::use_dark_mode;

pub const DEFAULT_BRAND: &str = "Toolbox";
pub const MOBILE_MENU_ID: &str = "nav-mobile-menu";

/// Sticky top bar with brand, route links, theme toggle and a mobile menu.
///
/// Must be rendered inside a `<Router>` with a [`DarkMode`](crate::dark_mode::DarkMode)
/// in context.
#[component]
pub fn NavigationHeader(#[prop(optional, into)] brand: Option<String>) -> impl IntoView {
    let pathname = use_location().pathname;
    let dark_mode = use_dark_mode();
    let (menu, set_menu) = create_signal(MenuState::default());

    let brand = brand.unwrap_or_else(|| DEFAULT_BRAND.to_string());
    let close_menu = Callback::new(move |_: ()| set_menu.update(|m| *m = m.link_activated()));

    view! {
        <header class="nav-header">
            <nav class="container nav-header-bar">
                <a href="/" class="nav-brand" on:click=move |_| close_menu.call(())>
                    <img
                        class="nav-logo"
                        src=move || dark_mode.theme().logo_asset()
                        alt="Logo"
                    />
                    <span class="nav-brand-name">{brand}</span>
                </a>
                <div class="nav-links nav-links-desktop">
                    <NavLinks current_path=pathname on_navigate=close_menu />
                </div>
                <div class="nav-actions">
                    <button
                        type="button"
                        class="btn btn-icon nav-theme-toggle"
                        aria-label=move || dark_mode.theme().toggle_label()
                        on:click=move |_| dark_mode.toggle()
                    >
                        {move || dark_mode.theme().icon().glyph()}
                    </button>
                    <button
                        type="button"
                        class="btn btn-icon nav-menu-toggle"
                        aria-controls=MOBILE_MENU_ID
                        aria-expanded=move || menu.get().aria_expanded()
                        on:click=move |_| set_menu.update(|m| *m = m.toggled())
                    >
                        <span class="sr-only">"Open main menu"</span>
                        <svg
                            class="nav-menu-icon"
                            aria-hidden="true"
                            xmlns="http://www.w3.org/2000/svg"
                            fill="none"
                            viewBox="0 0 17 14"
                        >
                            <path
                                stroke="currentColor"
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M1 1h15M1 7h15M1 13h15"
                            ></path>
                        </svg>
                    </button>
                </div>
            </nav>
            <Show when=move || menu.get().is_open()>
                <div id=MOBILE_MENU_ID class="nav-links nav-links-mobile">
                    <NavLinks current_path=pathname on_navigate=close_menu />
                </div>
            </Show>
        </header>
    }
}

#[component]
fn NavLinks(
    #[prop(into)] current_path: Signal<String>,
    on_navigate: Callback<()>,
) -> impl IntoView {
    NAV_LINKS
        .iter()
        .copied()
        .map(|link| {
            let active = move || current_path.with(|path| link.is_active(path));
            view! {
                <a
                    href=link.path
                    class="nav-link"
                    class:active=active
                    aria-current=move || active().then_some("page")
                    on:click=move |_| on_navigate.call(())
                >
                    {link.label}
                </a>
            }
        })
        .collect_view()
}
