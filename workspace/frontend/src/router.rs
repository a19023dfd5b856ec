use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::layout::Layout;
use crate::pages::trends::TrendsPage;
use crate::pages::urgent::UrgentPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/trends")]
    Trends,
    #[at("/urgent")]
    Urgent,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Trends => {
            log::trace!("Rendering Trends page");
            html! { <TrendsPage /> }
        }
        Route::Urgent => {
            log::trace!("Rendering Urgent page");
            html! { <UrgentPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <Layout title="404"><h1>{"Страница не найдена"}</h1></Layout> }
        }
    }
}
