// frontend_portfolio/src/router.rs
use crate::pages::about::About;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Routable, PartialEq, Clone, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch. Must be mounted below a router (`BrowserRouter` in the app).
#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <Switch<Route> render={switch} />
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::About} /> },
        Route::About => html! { <About /> },
        Route::NotFound => html! { <h1>{ "404 - Page not found" }</h1> },
    }
}
