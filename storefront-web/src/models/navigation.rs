//! What the navigation shell shows, independent of markup.

use std::rc::Rc;
use yew::Reducible;

use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Desktop,
    Mobile,
}

/// One entry of a navbar link set. Labels are translation keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavItem {
    Link { route: Route, label: &'static str },
    /// The mobile panel's highlighted "create account" button.
    SignupCta,
    /// Holds the authenticated desktop entries behind the user menu.
    UserMenu(Vec<NavItem>),
    Logout,
}

impl NavItem {
    const fn link(route: Route, label: &'static str) -> Self {
        Self::Link { route, label }
    }
}

/// The link set for the given session and viewport.
pub fn link_set(is_authenticated: bool, viewport: Viewport) -> Vec<NavItem> {
    let mut items = vec![
        NavItem::link(Route::Home, "nav.home"),
        NavItem::link(Route::Shop, "nav.shop"),
    ];
    match (is_authenticated, viewport) {
        (false, Viewport::Desktop) => {
            items.push(NavItem::link(Route::Login, "nav.login"));
            items.push(NavItem::link(Route::Signup, "nav.signup"));
        }
        (false, Viewport::Mobile) => {
            items.push(NavItem::link(Route::Login, "nav.login"));
            items.push(NavItem::SignupCta);
        }
        (true, Viewport::Desktop) => {
            items.push(NavItem::UserMenu(vec![
                NavItem::link(Route::Dashboard, "nav.dashboard"),
                NavItem::link(Route::Wishlist, "nav.wishlist"),
                NavItem::Logout,
            ]));
        }
        (true, Viewport::Mobile) => {
            items.push(NavItem::link(Route::Dashboard, "nav.dashboard"));
            items.push(NavItem::link(Route::Wishlist, "nav.wishlist"));
            items.push(NavItem::Logout);
        }
    }
    items
}

/// The search box is redundant on the results page.
pub fn shows_search_box(current: Option<&Route>) -> bool {
    current != Some(&Route::Search)
}

/// Whether `target`'s tab gets the active style.
pub fn is_active(current: Option<&Route>, target: &Route) -> bool {
    match (current, target) {
        (Some(Route::Product { .. }), Route::Shop) | (Some(Route::Order { .. }), Route::Dashboard) => true,
        (Some(current), target) => current == target,
        (None, _) => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    MobilePanel,
    UserDropdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    Toggle(Menu),
    /// An item was selected or the user clicked outside.
    Dismiss(Menu),
}

/// Open/closed state of the navbar's two menus. Each menu only reacts to
/// its own events.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub mobile_open: bool,
    pub user_open: bool,
}

impl MenuState {
    pub fn is_open(self, menu: Menu) -> bool {
        match menu {
            Menu::MobilePanel => self.mobile_open,
            Menu::UserDropdown => self.user_open,
        }
    }

    fn slot(&mut self, menu: Menu) -> &mut bool {
        match menu {
            Menu::MobilePanel => &mut self.mobile_open,
            Menu::UserDropdown => &mut self.user_open,
        }
    }
}

impl Reducible for MenuState {
    type Action = MenuEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            MenuEvent::Toggle(menu) => {
                let slot = next.slot(menu);
                *slot = !*slot;
            }
            MenuEvent::Dismiss(menu) => *next.slot(menu) = false,
        }
        if next == *self { self } else { Rc::new(next) }
    }
}
