//! Past orders of the signed-in user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

/// Fulfilment state of an order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Paid, not yet handled.
    #[default]
    NotProcessed,
    /// Being prepared.
    Processed,
    /// Handed to the carrier.
    Shipping,
    /// Received by the customer.
    Delivered,
    /// Cancelled before delivery.
    Cancelled,
    /// A status this client does not know.
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// Translation key for the status label.
    #[must_use]
    pub const fn label_key(self) -> &'static str {
        match self {
            Self::NotProcessed => "orders.status.not_processed",
            Self::Processed => "orders.status.processed",
            Self::Shipping => "orders.status.shipping",
            Self::Delivered => "orders.status.delivered",
            Self::Cancelled => "orders.status.cancelled",
            Self::Unknown => "orders.status.unknown",
        }
    }
}

/// One purchased line, frozen at checkout time.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    /// Product name when ordered.
    pub name: String,
    /// Unit price when ordered.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub price: f64,
    /// Units ordered.
    pub count: u32,
}

impl OrderItem {
    /// Price times count.
    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.price * f64::from(self.count)
    }
}

/// A placed order. The list endpoint omits `order_items`; the detail
/// endpoint includes them.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Payment transaction identifier, also the order's public key.
    pub transaction_id: String,
    /// Amount charged, shipping included.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub amount: f64,
    /// Fulfilment state.
    #[serde(default)]
    pub status: OrderStatus,
    /// When the order was placed.
    #[serde(default)]
    pub date_issued: Option<DateTime<Utc>>,
    /// Recipient name.
    #[serde(default)]
    pub full_name: String,
    /// Street address.
    #[serde(default)]
    pub address_line_1: String,
    /// City of delivery.
    #[serde(default)]
    pub city: String,
    /// Country of delivery.
    #[serde(default)]
    pub country_region: String,
    /// Chosen shipping option.
    #[serde(default)]
    pub shipping_name: String,
    /// Delivery estimate of the shipping option.
    #[serde(default)]
    pub shipping_time: String,
    /// Shipping cost.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    #[serde(default)]
    pub shipping_price: f64,
    /// Purchased lines.
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl Order {
    /// Units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.order_items.iter().map(|item| item.count).sum()
    }
}

/// Body of `GET /api/orders/get-orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrdersResponse {
    /// Orders of the signed-in user, newest first.
    pub orders: Vec<Order>,
}

/// Body of `GET /api/orders/get-order/{transaction_id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDetailResponse {
    /// The requested order with its lines.
    pub order: Order,
}
