use yew::prelude::*;
use yew_router::prelude::*;

use crate::about::About;
use crate::contact::Contact;
use crate::home::Home;
use crate::projects::Projects;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Routable)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/projects")]
    Projects,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::Contact => "Contact",
            Route::NotFound => "Not Found",
        }
    }
}

/// Header navigation order.
pub(crate) const NAV_ROUTES: &[Route] =
    &[Route::Home, Route::About, Route::Projects, Route::Contact];

pub(crate) fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::About => html! { <About /> },
        Route::Projects => html! { <Projects /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}
