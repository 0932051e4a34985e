use i18nrs::yew::use_translation;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_hooks::use_click_away;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::{use_dispatch, use_selector};

use crate::actions::catalog::fetch_categories;
use crate::actions::session::logout;
use crate::api::StorefrontClient;
use crate::components::cart_badge::CartBadge;
use crate::components::language_selector::LanguageSelector;
use crate::components::search_box::SearchBox;
use crate::components::user_dropdown::UserDropdown;
use crate::components::wishlist_badge::WishlistBadge;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use crate::models::navigation::{
    Menu, MenuEvent, MenuState, NavItem, Viewport, is_active, link_set, shows_search_box,
};
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Route being shown, for active-tab styling.
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let dispatch = use_dispatch::<AppState>();
    let is_authenticated = use_selector(|state: &AppState| state.session.is_authenticated);
    let menus = use_reducer(MenuState::default);
    let panel = use_node_ref();

    {
        let dispatch = dispatch.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                fetch_categories(&StorefrontClient::shared(), &dispatch).await;
            });
            || ()
        });
    }

    {
        let menus = menus.clone();
        use_click_away(panel.clone(), move |_: Event| {
            if menus.is_open(Menu::MobilePanel) {
                menus.dispatch(MenuEvent::Dismiss(Menu::MobilePanel));
            }
        });
    }

    let toggle = |menu: Menu| {
        let menus = menus.clone();
        Callback::from(move |()| menus.dispatch(MenuEvent::Toggle(menu)))
    };
    let dismiss = |menu: Menu| {
        let menus = menus.clone();
        Callback::from(move |()| menus.dispatch(MenuEvent::Dismiss(menu)))
    };

    let on_logout = {
        let menus = menus.clone();
        Callback::from(move |()| {
            menus.dispatch(MenuEvent::Dismiss(Menu::UserDropdown));
            menus.dispatch(MenuEvent::Dismiss(Menu::MobilePanel));
            logout(&StorefrontClient::shared(), &dispatch, |route| match &navigator {
                Some(navigator) => navigator.push(&route),
                None => log::error!("no router available after logout"),
            });
        })
    };

    let current = props.current_route.as_ref();
    let render_item = |item: &NavItem, viewport: Viewport| -> Html {
        let menu = match viewport {
            Viewport::Desktop => Menu::UserDropdown,
            Viewport::Mobile => Menu::MobilePanel,
        };
        let close = dismiss(menu);
        let onclick = Callback::from(move |_: MouseEvent| close.emit(()));
        match item {
            NavItem::Link { route, label } => html! {
                <li {onclick}>
                    <Link<Route>
                        to={route.clone()}
                        classes={classes!(is_active(current, route).then_some("menu-active"))}
                    >
                        {i18n.t(label)}
                    </Link<Route>>
                </li>
            },
            NavItem::SignupCta => html! {
                <li {onclick} class="mt-2">
                    <Link<Route> to={Route::Signup} classes="btn btn-primary btn-sm">
                        {i18n.t("nav.create_account")}
                    </Link<Route>>
                </li>
            },
            NavItem::UserMenu(items) => html! {
                <UserDropdown
                    items={items.clone()}
                    open={menus.is_open(Menu::UserDropdown)}
                    on_toggle={toggle(Menu::UserDropdown)}
                    on_dismiss={dismiss(Menu::UserDropdown)}
                    on_logout={on_logout.clone()}
                />
            },
            NavItem::Logout => {
                let on_logout = on_logout.clone();
                let onclick = Callback::from(move |event: MouseEvent| {
                    event.prevent_default();
                    on_logout.emit(());
                });
                html! { <li><a {onclick}>{i18n.t("nav.logout")}</a></li> }
            }
        }
    };

    let desktop = link_set(*is_authenticated, Viewport::Desktop);
    let mobile = link_set(*is_authenticated, Viewport::Mobile);
    let on_menu_toggle = {
        let toggle = toggle(Menu::MobilePanel);
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <nav class="navbar bg-base-300 gap-2 flex-wrap">
            <div class="navbar-start">
                <Link<Route> to={Route::Home} classes="btn btn-ghost">
                    <img src={FrontendConfig::default().logo_url()} alt={i18n.t("app.title")} class="h-8" />
                </Link<Route>>
            </div>
            <div class="navbar-center hidden md:flex">
                if shows_search_box(current) {
                    <SearchBox />
                }
            </div>
            <div class="navbar-end gap-1">
                <ul class="hidden md:flex menu menu-horizontal items-center gap-1">
                    { for desktop.iter().map(|item| render_item(item, Viewport::Desktop)) }
                </ul>
                <LanguageSelector />
                <WishlistBadge />
                <CartBadge />
                <div ref={panel} class="md:hidden">
                    <button type="button" class="btn btn-ghost btn-circle" onclick={on_menu_toggle}>
                        <Icon
                            icon_id={if menus.is_open(Menu::MobilePanel) { IconId::HeroiconsOutlineXMark } else { IconId::HeroiconsOutlineBars3 }}
                            class="w-6 h-6"
                        />
                    </button>
                    if menus.is_open(Menu::MobilePanel) {
                        <div class="absolute right-2 top-16 z-20 w-64 rounded-box bg-base-200 p-4 shadow">
                            if shows_search_box(current) {
                                <SearchBox />
                            }
                            <ul class="menu">
                                { for mobile.iter().map(|item| render_item(item, Viewport::Mobile)) }
                            </ul>
                        </div>
                    }
                </div>
            </div>
        </nav>
    }
}
