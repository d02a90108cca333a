//! Horizontally scrolling category chips with edge arrows.

use crate::app::Route;
use crate::core::categories::{ArrowVisibility, BAR_CATEGORIES, SCROLL_STEP, category_href};
use crate::features::home::state::is_active_chip;
use gloo::events::EventListener;
use web_sys::{Element, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CategoryBarProps {
    #[prop_or_default]
    pub active_slug: Option<AttrValue>,
}

#[function_component(CategoryBar)]
pub(crate) fn category_bar(props: &CategoryBarProps) -> Html {
    let scroller = use_node_ref();
    let arrows = use_state(ArrowVisibility::default);

    {
        let scroller = scroller.clone();
        let arrows = arrows.clone();
        use_effect_with_deps(
            move |_| {
                let listener = scroller.cast::<Element>().map(|element| {
                    arrows.set(measure(&element));
                    let target = element.clone();
                    EventListener::new(&element, "scroll", move |_| arrows.set(measure(&target)))
                });
                move || drop(listener)
            },
            (),
        );
    }

    let scroll_by = |delta: f64| {
        let scroller = scroller.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(element) = scroller.cast::<Element>() {
                let options = ScrollToOptions::new();
                options.set_left(delta);
                options.set_behavior(ScrollBehavior::Smooth);
                element.scroll_by_with_scroll_to_options(&options);
            }
        })
    };

    let active = props.active_slug.as_deref();
    html! {
        <div class="category-bar">
            {if arrows.left {
                html! { <button class="category-arrow left" onclick={scroll_by(-SCROLL_STEP)} aria-label="Scroll left">{"‹"}</button> }
            } else {
                html! {}
            }}
            <div class="category-scroller" ref={scroller.clone()}>
                {for BAR_CATEGORIES.iter().map(|name| {
                    let target = Route::recognize(&category_href(name)).unwrap_or(Route::Home);
                    let class = classes!("chip", is_active_chip(name, active).then_some("active"));
                    html! { <Link<Route> to={target} classes={class}>{*name}</Link<Route>> }
                })}
            </div>
            {if arrows.right {
                html! { <button class="category-arrow right" onclick={scroll_by(SCROLL_STEP)} aria-label="Scroll right">{"›"}</button> }
            } else {
                html! {}
            }}
        </div>
    }
}

fn measure(element: &Element) -> ArrowVisibility {
    ArrowVisibility::from_scroll(
        f64::from(element.scroll_left()),
        f64::from(element.scroll_width()),
        f64::from(element.client_width()),
    )
}
