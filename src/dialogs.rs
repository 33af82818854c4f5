//! Blocking Dialogs

/// Blocking user notifications and yes/no prompts
pub trait Notifier {
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

/// `window.alert` / `window.confirm`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDialogs;

impl Notifier for BrowserDialogs {
    fn alert(&self, message: &str) {
        gloo::dialogs::alert(message);
    }

    fn confirm(&self, message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }
}
