#[derive(Default)]
pub struct AppState {
    pub ui: UiState,
}

#[derive(Default)]
pub struct UiState {
    /// Highlighted entry in the sidebar, follows the shown page.
    pub sidebar_index: usize,
    /// While true, plain keys go to a text field instead of navigation.
    pub text_entry: bool,
    /// Transient status line under the player bar.
    pub status: Option<String>,
}
