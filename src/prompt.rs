/// Asks the user for a line of text.
///
/// Returns `None` when the user cancels.
pub trait TextPrompt {
    fn prompt(&mut self, message: &str, default: &str) -> Option<String>;
}

impl<F> TextPrompt for F
where
    F: FnMut(&str, &str) -> Option<String>,
{
    fn prompt(&mut self, message: &str, default: &str) -> Option<String> {
        self(message, default)
    }
}
