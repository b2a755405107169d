//! Sticky header with brand link, optional back link and wishlist button.

use leptos::prelude::*;

#[component]
pub fn SiteHeader(
    /// Show a "Back" link to the listing.
    #[prop(optional)]
    back: bool,
    /// Show the wishlist shortcut.
    #[prop(optional)]
    wishlist_link: bool,
) -> impl IntoView {
    view! {
        <header class="site-header">
            <Show when=move || back>
                <a class="site-header__back" href="/">"‹ Back"</a>
            </Show>
            <a class="site-header__brand" href="/">"CarFindr"</a>
            <span class="site-header__spacer"></span>
            <Show when=move || wishlist_link>
                <a class="btn site-header__wishlist" href="/wishlist">"♥ Wishlist"</a>
            </Show>
        </header>
    }
}
