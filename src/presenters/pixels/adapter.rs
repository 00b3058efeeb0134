use std::sync::Mutex;

use winit::event_loop::EventLoopProxy;

use crate::controllers::window::events::FrameEvent;
use crate::controllers::window::ports::frame_presenter::FramePresenterPort;
use crate::input::gui::events::GuiEvent;

/// Mailbox between the render worker and the UI thread. Holds the latest event only.
pub struct PixelsAdapter {
    frame_event: Mutex<Option<FrameEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl FramePresenterPort for PixelsAdapter {
    fn present(&self, event: FrameEvent) {
        if let Ok(mut slot) = self.frame_event.lock() {
            *slot = Some(event);
        }
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            frame_event: Mutex::new(None),
            event_loop_proxy,
        }
    }

    pub fn take_frame_event(&self) -> Option<FrameEvent> {
        self.frame_event.lock().ok().and_then(|mut slot| slot.take())
    }
}
