/// Something the user or the runtime asked the UI to do.
pub trait Intent: Send + 'static {}
