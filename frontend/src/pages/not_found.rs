use leptos::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="page page-not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to home"</a>
        </section>
    }
}
