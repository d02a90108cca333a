//! Routing definitions for the TubeStream UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/category/:slug")]
    Category { slug: String },
    #[at("/watch/:id")]
    Watch { id: String },
    #[at("/channel/:id")]
    Channel { id: String },
    #[at("/search")]
    Search,
    #[at("/upload")]
    Upload,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}
