#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ring the terminal bell as swipe feedback.
    Bell,
    Quit,
}
