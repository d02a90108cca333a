//! Page frame: navbar on top, sidebar on the left, routed content in the middle.

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::components::toast::ToastHost;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub children: Children,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    html! {
        <div class="app-shell">
            <Navbar />
            <div class="app-body">
                <Sidebar />
                <main class="app-main">
                    {for props.children.iter()}
                </main>
            </div>
            <ToastHost />
        </div>
    }
}
