use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="page page-home">
            <h1>"Home"</h1>
            <p>"Pick a tool category from the navigation bar."</p>
            <a href="/tools" class="btn btn-primary">"Browse tools"</a>
        </section>
    }
}
