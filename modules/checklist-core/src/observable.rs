
mod listener_registry;
mod observable_checklist;
mod ready_listener;
mod ready_subscription;

pub use observable_checklist::ObservableChecklist;
pub use ready_listener::ReadyListener;
pub use ready_subscription::ReadySubscription;
