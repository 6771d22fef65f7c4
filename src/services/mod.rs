pub mod credentials;
pub mod notifier;

pub use credentials::{find_cookie, BrowserCookieSource, JarTokenSource, TokenSource};
pub use notifier::{LogNotifier, Notification, Notifier};
