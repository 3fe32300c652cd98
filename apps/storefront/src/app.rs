//! Application shell: router and layout.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use leptos_router::components::{Route, Router, Routes, A};
use leptos_router::path;

use crate::pages::{DetailPage, ListingPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content="Vitrine - a small storefront front-end in Rust + WASM"/>
        <Title text="Vitrine Store"/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=ListingPage/>
                    <Route path=path!("/product/:id") view=DetailPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <h1><A href="/">"Vitrine"</A></h1>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p>"Vitrine - a storefront front-end in pure Rust"</p>
        </footer>
    }
}

/// Fallback for unknown paths.
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <A href="/">"Back to Home"</A>
        </div>
    }
}
