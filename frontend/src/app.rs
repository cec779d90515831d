use leptos::*;
use leptos_router::*;

use crate::components::navigation_header::NavigationHeader;
use crate::dark_mode::provide_dark_mode;
use crate::pages::{home::HomePage, not_found::NotFound, tools::ToolsPage};

#[component]
pub fn App() -> impl IntoView {
    // Must run before the header asks for the context
    provide_dark_mode();

    view! {
        <Router>
            <NavigationHeader />
            <main class="container">
                <Routes>
                    <Route path="/" view=HomePage />
                    <Route path="/tools/*rest" view=ToolsPage />
                    <Route path="/gis-tools/*rest" view=ToolsPage />
                    <Route path="/dev-tools/*rest" view=ToolsPage />
                    <Route path="/va-tools/*rest" view=ToolsPage />
                    <Route path="/marketing-tools/*rest" view=ToolsPage />
                    <Route path="/*any" view=NotFound />
                </Routes>
            </main>
        </Router>
    }
}
