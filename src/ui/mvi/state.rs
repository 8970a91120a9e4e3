/// Plain-data UI state that a view renders from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
