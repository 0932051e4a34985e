use shared::models::{LoginRequest, SignupRequest, User};
use yewdux::Dispatch;

use super::cart::{merge_guest_cart, sync_cart};
use super::session_epoch;
use super::wishlist::sync_wishlist;
use crate::api::{ApiError, StorefrontApi};
use crate::models::app_state::{AppState, ResetAll};
use crate::models::session::SessionAction;
use crate::routes::Route;

/// Verify the stored access token, refreshing it once if it has expired,
/// and load the account it belongs to.
async fn restore_user(api: &dyn StorefrontApi) -> Result<User, ApiError> {
    match api.verify_session().await {
        Ok(()) => {}
        Err(err) if err.is_unauthorized() => {
            log::debug!("access token rejected, refreshing");
            api.refresh_session().await?;
        }
        Err(err) => return Err(err),
    }
    api.current_user().await
}

/// Load the cart and wishlist of the session that began at `epoch`.
async fn load_account_lists(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, epoch: u64) {
    sync_cart(api, dispatch, epoch).await;
    sync_wishlist(api, dispatch, epoch).await;
}

/// Settle the start-up session check.
///
/// Rejected tokens are forgotten. When the backend cannot be reached the
/// session settles as signed out but the tokens are kept for the next visit.
pub async fn check_session(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>) {
    dispatch.apply(SessionAction::CheckStarted);
    if !api.has_session() {
        dispatch.apply(SessionAction::CheckFinished(None));
        return;
    }
    match restore_user(api).await {
        Ok(user) => {
            log::info!("restored session for {}", user.email);
            dispatch.apply(SessionAction::CheckFinished(Some(user)));
            load_account_lists(api, dispatch, session_epoch(dispatch)).await;
        }
        Err(err) if err.is_unauthorized() => {
            log::info!("stored session is no longer valid: {err}");
            api.clear_session();
            dispatch.apply(SessionAction::CheckFinished(None));
        }
        Err(err) => {
            log::error!("session check failed: {err}");
            dispatch.apply(SessionAction::CheckFinished(None));
            dispatch.apply(SessionAction::Failed(err.user_message()));
        }
    }
}

/// Sign in and move any guest cart lines into the account's cart.
///
/// Returns whether the user is now signed in.
pub async fn login(
    api: &dyn StorefrontApi,
    dispatch: &Dispatch<AppState>,
    email: String,
    password: String,
) -> bool {
    let guest_items = dispatch.get().cart.items.clone();
    dispatch.apply(SessionAction::LoginStarted);

    let request = LoginRequest { email, password };
    let signed_in = async {
        api.login(&request).await?;
        api.current_user().await
    }
    .await;

    match signed_in {
        Ok(user) => {
            log::info!("signed in as {}", user.email);
            dispatch.apply(SessionAction::LoginSucceeded(user));
            let epoch = session_epoch(dispatch);
            if !guest_items.is_empty() {
                merge_guest_cart(api, &guest_items).await;
            }
            load_account_lists(api, dispatch, epoch).await;
            true
        }
        Err(err) => {
            log::warn!("login failed: {err}");
            api.clear_session();
            dispatch.apply(SessionAction::LoginFailed(err.user_message()));
            false
        }
    }
}

/// Create an account. The user still has to sign in afterwards.
pub async fn signup(
    api: &dyn StorefrontApi,
    dispatch: &Dispatch<AppState>,
    request: &SignupRequest,
) -> bool {
    if let Err(err) = request.validate() {
        dispatch.apply(SessionAction::Failed(err.to_string()));
        return false;
    }
    match api.signup(request).await {
        Ok(()) => {
            log::info!("created account for {}", request.email);
            true
        }
        Err(err) => {
            log::warn!("signup failed: {err}");
            dispatch.apply(SessionAction::Failed(err.user_message()));
            false
        }
    }
}

/// Reload the signed-in user's profile.
pub async fn refresh_user(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>) {
    match api.current_user().await {
        Ok(user) => dispatch.apply(SessionAction::UserLoaded(user)),
        Err(err) => log::warn!("could not refresh profile: {err}"),
    }
}

/// Forget the session, reset the store and go home.
pub fn logout(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, navigate: impl FnOnce(Route)) {
    api.clear_session();
    dispatch.apply(ResetAll);
    log::info!("signed out");
    navigate(Route::Home);
}
