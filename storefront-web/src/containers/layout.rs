use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, classes, function_component, html};

use crate::components::alert::Alert;
use crate::containers::navbar::Navbar;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<Route>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <div class="min-h-screen flex flex-col bg-base-100">
            <Navbar current_route={props.current_route.clone()} />
            <Alert />
            <main class={classes!("flex-grow", "container", "mx-auto", "p-4")}>
                {props.children.clone()}
            </main>
            <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                <p>{i18n.t("app.footer")}</p>
            </footer>
        </div>
    }
}
