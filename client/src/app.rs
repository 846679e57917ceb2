//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_shell::AppShell;
use crate::components::guard::{AuthGuard, StaffGuard};
use crate::net::api::{ApiClient, ApiConfig};
use crate::pages::{
    blog_list::BlogListPage, blog_post::BlogPostPage, cafe_cart::CafeCartPage, cafe_checkout::CafeCheckoutPage,
    cafe_menu::CafeMenuPage, cafe_orders::CafeOrdersPage, cowork_booking::CoworkBookingPage,
    cowork_my_bookings::CoworkMyBookingsPage, cowork_spaces::CoworkSpacesPage,
    freelancer_profile::FreelancerProfilePage, freelancers_list::FreelancersListPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, register::RegisterPage,
    staff_analytics::StaffAnalyticsPage, staff_lookup::StaffLookupPage, staff_manual_order::StaffManualOrderPage,
    staff_menu_stock::StaffMenuStockPage, staff_orders::StaffOrdersPage, staff_users::StaffUsersPage,
};
use crate::state::auth::provide_auth;

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
/// Provides the API client and auth context, starts the session load, and
/// sets up client-side routing. Guarded routes render a placeholder until
/// the session is known.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = provide_auth(ApiClient::new(ApiConfig::default()));
    Effect::new(move || {
        let auth = auth.clone();
        spawn_local(async move { auth.bootstrap().await });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/cowork-ui.css"/>

        <Router>
            <AppShell>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("profile") view=|| view! { <AuthGuard><ProfilePage/></AuthGuard> }/>

                    <Route path=(StaticSegment("cafe"), StaticSegment("menu")) view=CafeMenuPage/>
                    <Route path=(StaticSegment("cafe"), StaticSegment("cart")) view=CafeCartPage/>
                    <Route
                        path=(StaticSegment("cafe"), StaticSegment("checkout"))
                        view=|| view! { <AuthGuard><CafeCheckoutPage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("cafe"), StaticSegment("orders"))
                        view=|| view! { <AuthGuard><CafeOrdersPage/></AuthGuard> }
                    />

                    <Route path=StaticSegment("cowork") view=CoworkSpacesPage/>
                    <Route
                        path=(StaticSegment("cowork"), StaticSegment("book"), ParamSegment("space_id"))
                        view=|| view! { <AuthGuard><CoworkBookingPage/></AuthGuard> }
                    />
                    <Route
                        path=(StaticSegment("cowork"), StaticSegment("my-bookings"))
                        view=|| view! { <AuthGuard><CoworkMyBookingsPage/></AuthGuard> }
                    />

                    <Route path=StaticSegment("blog") view=BlogListPage/>
                    <Route path=(StaticSegment("blog"), ParamSegment("slug")) view=BlogPostPage/>
                    <Route path=StaticSegment("freelancers") view=FreelancersListPage/>
                    <Route path=(StaticSegment("freelancers"), ParamSegment("slug")) view=FreelancerProfilePage/>

                    <Route
                        path=(StaticSegment("cafe"), StaticSegment("dashboard"))
                        view=|| view! { <StaffGuard><StaffOrdersPage/></StaffGuard> }
                    />
                    <Route
                        path=(StaticSegment("cafe"), StaticSegment("manual-order"))
                        view=|| view! { <StaffGuard><StaffManualOrderPage/></StaffGuard> }
                    />
                    <Route
                        path=(StaticSegment("cafe"), StaticSegment("manage-menu"))
                        view=|| view! { <StaffGuard><StaffMenuStockPage/></StaffGuard> }
                    />
                    <Route
                        path=(StaticSegment("cafe"), StaticSegment("lookup"))
                        view=|| view! { <StaffGuard><StaffLookupPage/></StaffGuard> }
                    />
                    <Route
                        path=(StaticSegment("cafe"), StaticSegment("analytics"))
                        view=|| view! { <StaffGuard><StaffAnalyticsPage/></StaffGuard> }
                    />
                    <Route
                        path=(StaticSegment("staff"), StaticSegment("users"))
                        view=|| view! { <StaffGuard><StaffUsersPage/></StaffGuard> }
                    />
                </Routes>
            </AppShell>
        </Router>
    }
}
