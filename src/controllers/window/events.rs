use crate::controllers::render_canvas::CanvasFrame;

/// What the background render hands to the window once it settles.
#[derive(Debug)]
pub enum FrameEvent {
    Frame(CanvasFrame),
    Error(String),
}
