//! Channel avatars: picture with the shared default, or a lettered fallback.

use crate::core::format::{avatar_initial, avatar_url};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AvatarProps {
    pub picture: Option<AttrValue>,
    pub name: AttrValue,
    #[prop_or(36)]
    pub size: u32,
}

#[function_component(Avatar)]
pub(crate) fn avatar(props: &AvatarProps) -> Html {
    let src = avatar_url(props.picture.as_deref()).to_string();
    html! {
        <img
            class="avatar"
            src={src}
            alt={props.name.clone()}
            width={props.size.to_string()}
            height={props.size.to_string()}
        />
    }
}

/// Picture when present, otherwise the upper-cased first letter.
#[function_component(InitialAvatar)]
pub(crate) fn initial_avatar(props: &AvatarProps) -> Html {
    match props.picture.as_deref().filter(|url| !url.trim().is_empty()) {
        Some(src) => html! {
            <img
                class="avatar"
                src={src.to_string()}
                alt={props.name.clone()}
                width={props.size.to_string()}
                height={props.size.to_string()}
            />
        },
        None => html! {
            <span class="avatar avatar-initial">{avatar_initial(&props.name)}</span>
        },
    }
}
