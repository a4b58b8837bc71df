//! Reserved event and parameter names.

/// Event: a screen was shown.
pub const EVENT_SCREEN_VIEW: &str = "screen_view";
/// Event: checkout began.
pub const EVENT_BEGIN_CHECKOUT: &str = "begin_checkout";
/// Event: a purchase completed.
pub const EVENT_PURCHASE: &str = "purchase";
/// Event: the store (cart) was viewed.
pub const EVENT_VIEW_CART: &str = "view_cart";

// Parameter keys.
pub const PARAM_AFFILIATION: &str = "affiliation";
pub const PARAM_COUPON: &str = "coupon";
pub const PARAM_CURRENCY: &str = "currency";
pub const PARAM_ITEMS: &str = "items";
pub const PARAM_SCREEN_CLASS: &str = "screen_class";
pub const PARAM_SCREEN_NAME: &str = "screen_name";
pub const PARAM_SHIPPING: &str = "shipping";
pub const PARAM_TAX: &str = "tax";
pub const PARAM_TRANSACTION_ID: &str = "transaction_id";
pub const PARAM_VALUE: &str = "value";
