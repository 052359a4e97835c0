//! UI Components
//!
//! Reusable Leptos components.

mod error_list;
mod group_list;
mod group_view;
mod log_panel;
mod payment_popup;
mod profile_form;
mod sign_in_form;

pub use error_list::ErrorList;
pub use group_list::GroupList;
pub use group_view::GroupView;
pub use log_panel::LogPanel;
pub use payment_popup::{MarkPaidRequest, PayPalRequest, PaymentPopup};
pub use profile_form::ProfileForm;
pub use sign_in_form::SignInForm;
