//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::register::RegisterPage;
use crate::state::feedback::FeedbackState;
use crate::state::form::FormState;
use crate::state::roster::RosterState;
use crate::state::submission::SubmitPhase;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the API configuration and the shared state contexts, then sets
/// up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Resolved once at startup; pages and api calls read it from context.
    provide_context(ApiConfig::resolve());

    // Reactive state contexts for the register page and its components.
    let form = RwSignal::new(FormState::default());
    let feedback = RwSignal::new(FeedbackState::default());
    let phase = RwSignal::new(SubmitPhase::default());
    let roster = RwSignal::new(RosterState::default());

    provide_context(form);
    provide_context(feedback);
    provide_context(phase);
    provide_context(roster);

    view! {
        <Stylesheet id="leptos" href="/pkg/student-registry.css"/>
        <Title text="Student Data Entry"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RegisterPage/>
            </Routes>
        </Router>
    }
}
