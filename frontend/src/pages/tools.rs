use leptos::*;
use leptos_router::*;

/// Tool sections that the header groups under its "Tools" entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToolCategory {
    General,
    Gis,
    Dev,
    Va,
    Marketing,
}

impl ToolCategory {
    pub const ALL: [ToolCategory; 5] = [
        ToolCategory::General,
        ToolCategory::Gis,
        ToolCategory::Dev,
        ToolCategory::Va,
        ToolCategory::Marketing,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            ToolCategory::General => "/tools",
            ToolCategory::Gis => "/gis-tools",
            ToolCategory::Dev => "/dev-tools",
            ToolCategory::Va => "/va-tools",
            ToolCategory::Marketing => "/marketing-tools",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ToolCategory::General => "Tools",
            ToolCategory::Gis => "GIS Tools",
            ToolCategory::Dev => "Developer Tools",
            ToolCategory::Va => "VA Tools",
            ToolCategory::Marketing => "Marketing Tools",
        }
    }

    /// Category whose section contains `path`, matched on whole path segments.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| {
            path.strip_prefix(category.path())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
        })
    }
}

#[component]
pub fn ToolsPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let category = move || pathname.with(|path| ToolCategory::from_path(path));

    view! {
        <section class="page page-tools">
            <h1>{move || category().map(|c| c.title()).unwrap_or("Tools")}</h1>
            <ul class="tool-categories">
                {ToolCategory::ALL
                    .into_iter()
                    .map(|c| {
                        let class = move || {
                            if category() == Some(c) { "tool-category active" } else { "tool-category" }
                        };
                        view! {
                            <li class=class>
                                <a href=c.path()>{c.title()}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_category_paths() {
        assert_eq!(ToolCategory::General.path(), "/tools");
        assert_eq!(ToolCategory::Marketing.path(), "/marketing-tools");
    }

    #[wasm_bindgen_test]
    fn test_from_path() {
        assert_eq!(ToolCategory::from_path("/tools"), Some(ToolCategory::General));
        assert_eq!(ToolCategory::from_path("/gis-tools/reproject"), Some(ToolCategory::Gis));
        assert_eq!(ToolCategory::from_path("/dev-tools/"), Some(ToolCategory::Dev));
        assert_eq!(ToolCategory::from_path("/toolshed"), None);
        assert_eq!(ToolCategory::from_path("/"), None);
    }

    #[wasm_bindgen_test]
    fn test_every_category_is_a_tools_route() {
        for category in ToolCategory::ALL {
            assert!(shared::is_active("/tools", category.path()));
        }
    }
}
