/// User events for the window event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render settled on the worker thread.
    ///
    /// The handler still has to request a redraw; the presenter picks the
    /// frame up on the next `render`.
    Wake,
}
