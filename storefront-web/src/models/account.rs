//! Dashboard data: the shipping profile and past orders.

use shared::models::{Order, UserProfile};
use std::rc::Rc;
use yewdux::prelude::Reducer;

use super::app_state::AppState;

/// Per-account data shown on the dashboard. Emptied on logout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountState {
    /// Shipping profile, once loaded.
    pub profile: Option<UserProfile>,
    /// Past orders, newest first, once loaded.
    pub orders: Option<Vec<Order>>,
    /// Transaction whose detail page is open.
    pub selected_order: Option<String>,
    /// The selected order, once loaded.
    pub order: Option<Order>,
    /// Profile, orders or an order detail are being fetched.
    pub loading: bool,
    /// A profile update is in flight.
    pub saving: bool,
    /// Last failed account request.
    pub error: Option<String>,
}

impl AccountState {
    /// Apply one account action.
    pub fn reduce(&mut self, action: AccountAction) {
        match action {
            AccountAction::OverviewStarted => {
                self.loading = true;
                self.error = None;
            }
            AccountAction::OverviewLoaded { profile, orders } => {
                self.profile = Some(profile);
                self.orders = Some(orders);
                self.loading = false;
            }
            AccountAction::OrderStarted(transaction_id) => {
                if self.selected_order.as_deref() != Some(transaction_id.as_str()) {
                    self.order = None;
                }
                self.selected_order = Some(transaction_id);
                self.loading = true;
                self.error = None;
            }
            AccountAction::OrderLoaded(order) => {
                if self.selected_order.as_deref() != Some(order.transaction_id.as_str()) {
                    log::debug!("dropping order {}, no longer shown", order.transaction_id);
                    return;
                }
                self.order = Some(order);
                self.loading = false;
            }
            AccountAction::SaveStarted => {
                self.saving = true;
                self.error = None;
            }
            AccountAction::ProfileSaved(profile) => {
                self.profile = Some(profile);
                self.saving = false;
            }
            AccountAction::Failed(message) => {
                self.loading = false;
                self.saving = false;
                self.error = Some(message);
            }
        }
    }
}

/// Changes to [`AccountState`].
#[derive(Debug, Clone, PartialEq)]
pub enum AccountAction {
    /// The dashboard began loading.
    OverviewStarted,
    /// Profile and order history for the dashboard.
    OverviewLoaded {
        /// Shipping profile.
        profile: UserProfile,
        /// Order history.
        orders: Vec<Order>,
    },
    /// An order detail page opened.
    OrderStarted(String),
    /// The selected order; ignored if another was selected since.
    OrderLoaded(Order),
    /// A profile update was sent.
    SaveStarted,
    /// The profile as stored by the backend.
    ProfileSaved(UserProfile),
    /// An account request failed.
    Failed(String),
}

impl Reducer<AppState> for AccountAction {
    fn apply(self, mut state: Rc<AppState>) -> Rc<AppState> {
        Rc::make_mut(&mut state).account.reduce(self);
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::order;

    #[test]
    fn overview_fills_profile_and_orders() {
        let mut account = AccountState::default();
        account.reduce(AccountAction::OverviewStarted);
        assert!(account.loading);
        account.reduce(AccountAction::OverviewLoaded {
            profile: UserProfile {
                city: "Lima".into(),
                ..UserProfile::default()
            },
            orders: vec![order("tx-1")],
        });
        assert!(!account.loading);
        assert_eq!(account.profile.as_ref().map(|p| p.city.as_str()), Some("Lima"));
        assert_eq!(account.orders.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn late_order_detail_is_dropped() {
        let mut account = AccountState::default();
        account.reduce(AccountAction::OrderStarted("tx-1".into()));
        account.reduce(AccountAction::OrderStarted("tx-2".into()));
        account.reduce(AccountAction::OrderLoaded(order("tx-1")));
        assert!(account.order.is_none());
        assert!(account.loading);

        account.reduce(AccountAction::OrderLoaded(order("tx-2")));
        assert_eq!(
            account.order.as_ref().map(|o| o.transaction_id.as_str()),
            Some("tx-2")
        );
    }

    #[test]
    fn failed_save_keeps_the_profile() {
        let mut account = AccountState::default();
        account.reduce(AccountAction::ProfileSaved(UserProfile {
            phone: "555".into(),
            ..UserProfile::default()
        }));
        account.reduce(AccountAction::SaveStarted);
        account.reduce(AccountAction::Failed("Service Unavailable".into()));
        assert!(!account.saving);
        assert_eq!(account.profile.as_ref().map(|p| p.phone.as_str()), Some("555"));
    }
}
