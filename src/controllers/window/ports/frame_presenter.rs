use crate::controllers::window::events::FrameEvent;

pub trait FramePresenterPort: Send + Sync {
    fn present(&self, event: FrameEvent);
}
