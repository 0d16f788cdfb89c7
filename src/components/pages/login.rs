//! Operator sign-in form.
//!
//! Local state only: there is no authentication backend. A filled-in form
//! continues to the main dashboard.

use leptos::{ev, prelude::*};

use super::widgets::Panel;
use crate::components::icons::IconName;
use crate::components::layout::PageLayout;
use crate::components::router::use_navigator;
use crate::components::ui::Button;
use crate::models::Page;

stylance::import_crate_style!(css, "src/components/pages/login.module.css");

/// Check that both fields were filled in.
fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    match (email.trim().is_empty(), password.is_empty()) {
        (true, true) => Err("Enter your email and password."),
        (true, false) => Err("Enter your email."),
        (false, true) => Err("Enter your password."),
        (false, false) => Ok(()),
    }
}

/// Validate a submission and log the outcome. Credentials are never logged.
fn submit_login(email: &str, password: &str) -> Result<(), &'static str> {
    let outcome = validate_login(email, password);
    match outcome {
        Ok(()) => log::debug!("login form accepted"),
        Err(reason) => log::debug!("login form rejected: {reason}"),
    }
    outcome
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigator = use_navigator();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<&'static str>);

    let on_submit = move |event: ev::SubmitEvent| {
        event.prevent_default();
        match email.with(|e| password.with(|p| submit_login(e, p))) {
            Ok(()) => {
                error.set(None);
                navigator.navigate(Page::MainDashboard.path().unwrap_or("/"));
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <PageLayout page=Page::Login>
            <Panel title="Operator sign-in">
                <form class=css::form on:submit=on_submit novalidate=true>
                    <label class=css::field>
                        <span>"Email"</span>
                        <input
                            class=css::input
                            type="email"
                            autocomplete="username"
                            placeholder="operator@coastwatch.example"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class=css::field>
                        <span>"Password"</span>
                        <input
                            class=css::input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    {move || error.get().map(|message| view! {
                        <p class=css::formError role="alert">{message}</p>
                    })}
                    <div class=css::formActions>
                        <Button button_type="submit" icon=IconName::Login>
                            "Sign in"
                        </Button>
                    </div>
                </form>
            </Panel>
        </PageLayout>
    }
}
