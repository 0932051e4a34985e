use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_hooks::use_click_away;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::models::app_state::AppState;
use crate::models::navigation::NavItem;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct UserDropdownProps {
    /// Entries shown in the menu.
    pub items: Vec<NavItem>,
    pub open: bool,
    pub on_toggle: Callback<()>,
    /// Called when an entry is chosen or the user clicks elsewhere.
    pub on_dismiss: Callback<()>,
    pub on_logout: Callback<()>,
}

#[function_component(UserDropdown)]
pub fn user_dropdown(props: &UserDropdownProps) -> Html {
    let (i18n, ..) = use_translation();
    let user = use_selector(|state: &AppState| state.session.user.clone());
    let node = use_node_ref();

    {
        let on_dismiss = props.on_dismiss.clone();
        let open = props.open;
        use_click_away(node.clone(), move |_: Event| {
            if open {
                on_dismiss.emit(());
            }
        });
    }

    let on_toggle = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };

    let render_item = |item: &NavItem| match item {
        NavItem::Link { route, label } => {
            let on_dismiss = props.on_dismiss.clone();
            html! {
                <li onclick={Callback::from(move |_: MouseEvent| on_dismiss.emit(()))}>
                    <Link<Route> to={route.clone()}>{i18n.t(label)}</Link<Route>>
                </li>
            }
        }
        NavItem::Logout => {
            let on_logout = props.on_logout.clone();
            let onclick = Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                on_logout.emit(());
            });
            html! { <li><a {onclick}>{i18n.t("nav.logout")}</a></li> }
        }
        NavItem::SignupCta | NavItem::UserMenu(_) => html! {},
    };

    html! {
        <div ref={node} class={classes!("dropdown", "dropdown-end", props.open.then_some("dropdown-open"))}>
            <button type="button" class="btn btn-ghost btn-circle" onclick={on_toggle}>
                <Icon icon_id={IconId::HeroiconsOutlineUserCircle} class="w-6 h-6" />
            </button>
            if props.open {
                <ul class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                    if let Some(user) = (*user).as_ref() {
                        <li class="menu-title">
                            <span class="text-sm font-semibold">{user.display_name()}</span>
                            <span class="text-xs opacity-70">{&user.email}</span>
                        </li>
                    }
                    { for props.items.iter().map(render_item) }
                </ul>
            }
        </div>
    }
}
