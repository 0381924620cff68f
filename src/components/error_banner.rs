//! Error Banner Component

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::store_error;

/// Shows the last storage error with a dismiss button
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    move || store_error(&ctx.store).map(|message| view! {
        <div class="error-banner" role="alert">
            <span class="error-text">{message}</span>
            <button class="dismiss-btn" on:click=move |_| ctx.dismiss_error()>"×"</button>
        </div>
    })
}
