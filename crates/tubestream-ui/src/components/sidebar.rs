//! Left navigation rail.

use crate::app::Route;
use crate::app::session::use_session;
use crate::core::nav::{NavItem, NavSection, sidebar_sections};
use crate::core::store::UiStore;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(Sidebar)]
pub(crate) fn sidebar() -> Html {
    let session = use_session();
    let expanded = use_selector(|store: &UiStore| store.sidebar_expanded);
    let current = use_location().map(|location| location.path().to_string()).unwrap_or_default();
    let sections = sidebar_sections(session.user());
    let expanded = *expanded;

    html! {
        <aside class={classes!("sidebar", if expanded { "expanded" } else { "collapsed" })}>
            {for sections.iter().map(|section| render_section(section, &current, expanded))}
        </aside>
    }
}

fn render_section(section: &NavSection, current: &str, expanded: bool) -> Html {
    html! {
        <nav class="sidebar-section">
            {section.title.filter(|_| expanded).map(|title| html! {
                <h3 class="sidebar-heading">{title}</h3>
            }).unwrap_or_default()}
            {for section.items.iter().map(|item| render_item(item, current, expanded))}
        </nav>
    }
}

fn render_item(item: &NavItem, current: &str, expanded: bool) -> Html {
    let target = Route::recognize(&item.path).unwrap_or(Route::NotFound);
    let class = classes!("sidebar-item", item.is_active(current).then_some("active"));
    html! {
        <Link<Route> to={target} classes={class}>
            <span class="sidebar-icon" aria-hidden="true">{item.icon.glyph()}</span>
            {if expanded {
                html! { <span class="sidebar-label">{item.label}</span> }
            } else {
                html! {}
            }}
        </Link<Route>>
    }
}
