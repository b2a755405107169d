//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notices::NoticeStack;
use crate::pages::{car_detail::CarDetailPage, listing::ListingPage, wishlist::WishlistPage};
use crate::state::notice::NoticeState;

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
/// Provides the notice queue to every surface and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let notices = RwSignal::new(NoticeState::default());
    provide_context(notices);

    view! {
        <Stylesheet id="leptos" href="/pkg/carfindr.css"/>
        <Title text="CarFindr"/>

        <Router>
            <NoticeStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ListingPage/>
                <Route path=StaticSegment("wishlist") view=WishlistPage/>
                <Route path=(StaticSegment("car"), ParamSegment("id")) view=CarDetailPage/>
            </Routes>
        </Router>
    }
}
