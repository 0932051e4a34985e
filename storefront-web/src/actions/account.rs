use shared::models::UserProfile;
use yewdux::Dispatch;

use super::{session_epoch, signed_in};
use crate::api::{ApiError, StorefrontApi};
use crate::models::account::AccountAction;
use crate::models::app_state::{AppState, SessionScoped};

/// Load the shipping profile and order history for the dashboard.
pub async fn load_account(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>) {
    if !signed_in(dispatch) {
        return;
    }
    let epoch = session_epoch(dispatch);
    dispatch.apply(SessionScoped::new(epoch, AccountAction::OverviewStarted));
    let overview = async {
        let profile = api.profile().await?;
        let orders = api.orders().await?;
        Ok::<_, ApiError>((profile, orders))
    }
    .await;
    let reply = match overview {
        Ok((profile, orders)) => {
            log::debug!("loaded {} orders", orders.len());
            AccountAction::OverviewLoaded { profile, orders }
        }
        Err(err) => {
            log::error!("failed to load account: {err}");
            AccountAction::Failed(err.user_message())
        }
    };
    dispatch.apply(SessionScoped::new(epoch, reply));
}

/// Open the detail view of one order.
pub async fn load_order(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, transaction_id: String) {
    if !signed_in(dispatch) {
        return;
    }
    let epoch = session_epoch(dispatch);
    dispatch.apply(SessionScoped::new(
        epoch,
        AccountAction::OrderStarted(transaction_id.clone()),
    ));
    let reply = match api.order(&transaction_id).await {
        Ok(order) => AccountAction::OrderLoaded(order),
        Err(err) => {
            log::error!("failed to load order {transaction_id}: {err}");
            AccountAction::Failed(err.user_message())
        }
    };
    dispatch.apply(SessionScoped::new(epoch, reply));
}

/// Store an edited shipping profile. Returns whether it was saved.
pub async fn save_profile(api: &dyn StorefrontApi, dispatch: &Dispatch<AppState>, profile: &UserProfile) -> bool {
    if !signed_in(dispatch) {
        return false;
    }
    let epoch = session_epoch(dispatch);
    dispatch.apply(SessionScoped::new(epoch, AccountAction::SaveStarted));
    let (reply, ok) = match api.update_profile(profile).await {
        Ok(saved) => {
            log::info!("updated shipping profile");
            (AccountAction::ProfileSaved(saved), true)
        }
        Err(err) => {
            log::warn!("profile update failed: {err}");
            (AccountAction::Failed(err.user_message()), false)
        }
    };
    dispatch.apply(SessionScoped::new(epoch, reply));
    ok
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::models::app_state::ResetAll;
    use crate::models::session::SessionAction;
    use crate::test_support::{Call, FakeApi, order, user};

    fn signed_in_store() -> Dispatch<AppState> {
        let dispatch = Dispatch::new(&yewdux::Context::new());
        dispatch.apply(SessionAction::LoginSucceeded(user()));
        dispatch
    }

    fn api() -> FakeApi {
        FakeApi {
            orders: vec![order("tx-1"), order("tx-2")],
            ..FakeApi::default()
        }
        .signed_in()
    }

    #[tokio::test]
    async fn dashboard_loads_profile_and_orders() {
        let api = api();
        api.profile.borrow_mut().city = "Lima".into();
        let dispatch = signed_in_store();

        load_account(&api, &dispatch).await;

        let state = dispatch.get();
        assert_eq!(state.account.orders.as_ref().map(Vec::len), Some(2));
        assert_eq!(state.account.profile.as_ref().map(|p| p.city.as_str()), Some("Lima"));
        assert!(!state.account.loading);
    }

    #[tokio::test]
    async fn order_detail_is_fetched_by_transaction() {
        let api = api();
        let dispatch = signed_in_store();

        load_order(&api, &dispatch, "tx-2".into()).await;

        let state = dispatch.get();
        assert_eq!(
            state.account.order.as_ref().map(|o| o.transaction_id.as_str()),
            Some("tx-2")
        );
        assert_eq!(api.calls(), vec![Call::Order("tx-2".into())]);
    }

    #[tokio::test]
    async fn unknown_order_goes_to_the_banner() {
        let api = api();
        let dispatch = signed_in_store();

        load_order(&api, &dispatch, "tx-9".into()).await;

        assert_eq!(
            dispatch.get().first_error(),
            Some("Order with this transaction ID does not exist")
        );
    }

    #[tokio::test]
    async fn saved_profile_replaces_the_old_one() {
        let api = api();
        let dispatch = signed_in_store();
        let mut edited = UserProfile::default();
        assert!(edited.set_field("phone", "555-0101".into()));

        assert!(save_profile(&api, &dispatch, &edited).await);

        assert_eq!(dispatch.get().account.profile, Some(edited.clone()));
        assert_eq!(*api.profile.borrow(), edited);
    }

    #[tokio::test]
    async fn guests_load_nothing() {
        let api = api();
        let dispatch = Dispatch::<AppState>::new(&yewdux::Context::new());

        load_account(&api, &dispatch).await;
        load_order(&api, &dispatch, "tx-1".into()).await;

        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn overview_answered_after_logout_is_dropped() {
        let api = api();
        let dispatch = signed_in_store();

        tokio::join!(load_account(&api, &dispatch), async {
            while api.count(&Call::Orders) == 0 {
                tokio::task::yield_now().await;
            }
            api.clear_session();
            dispatch.apply(ResetAll);
        });

        assert!(dispatch.get().account.orders.is_none());
    }
}
