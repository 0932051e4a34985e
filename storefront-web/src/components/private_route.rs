use yew::prelude::*;
use yew_router::prelude::Redirect;
use yewdux::prelude::use_selector;

use crate::components::loading::Loading;
use crate::config::{FrontendConfig, GuardPolicy};
use crate::models::app_state::AppState;
use crate::routes::Route;

/// What the guard does with a protected view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the protected view.
    Render,
    /// Send the visitor elsewhere.
    Redirect(Route),
    /// Wait for the session check before deciding.
    Hold,
}

/// Redirects to the login page only once the session is known to be
/// signed out. With [`GuardPolicy::RenderWhileLoading`] protected content is
/// rendered while the check is still in flight.
pub fn decide(policy: GuardPolicy, is_authenticated: bool, loading: bool) -> GuardDecision {
    match (is_authenticated, loading, policy) {
        (false, false, _) => GuardDecision::Redirect(Route::Login),
        (false, true, GuardPolicy::HoldWhileLoading) => GuardDecision::Hold,
        _ => GuardDecision::Render,
    }
}

#[derive(Properties, PartialEq)]
pub struct PrivateRouteProps {
    /// The protected view.
    pub children: Children,
}

/// Guard around the account pages.
#[function_component(PrivateRoute)]
pub fn private_route(props: &PrivateRouteProps) -> Html {
    let session = use_selector(|state: &AppState| {
        (state.session.is_authenticated, state.session.loading)
    });
    let policy = use_memo((), |()| FrontendConfig::default().guard_policy);
    let (is_authenticated, loading) = *session;

    match decide(*policy, is_authenticated, loading) {
        GuardDecision::Redirect(to) => html! { <Redirect<Route> {to} /> },
        GuardDecision::Hold => html! { <Loading /> },
        GuardDecision::Render => {
            if !is_authenticated {
                log::warn!("rendering protected view before the session check settled");
            }
            html! { <>{ props.children.clone() }</> }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(false, false, GuardDecision::Redirect(Route::Login) ; "guest redirects")]
    #[test_case(false, true, GuardDecision::Render ; "unconfirmed renders")]
    #[test_case(true, false, GuardDecision::Render ; "authenticated renders")]
    #[test_case(true, true, GuardDecision::Render ; "authenticated while loading renders")]
    fn default_policy_truth_table(is_authenticated: bool, loading: bool, expected: GuardDecision) {
        assert_eq!(
            decide(GuardPolicy::RenderWhileLoading, is_authenticated, loading),
            expected
        );
    }

    #[test_case(false, false, GuardDecision::Redirect(Route::Login) ; "guest redirects")]
    #[test_case(false, true, GuardDecision::Hold ; "unconfirmed holds")]
    #[test_case(true, false, GuardDecision::Render ; "authenticated renders")]
    #[test_case(true, true, GuardDecision::Render ; "authenticated while loading renders")]
    fn hold_policy_truth_table(is_authenticated: bool, loading: bool, expected: GuardDecision) {
        assert_eq!(
            decide(GuardPolicy::HoldWhileLoading, is_authenticated, loading),
            expected
        );
    }
}
