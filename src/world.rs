use crate::{Frame, winit::KeyEvent};

/// Seam between the simulation core and the render/input loop.
///
/// The app calls [`World::update`] once per tick and uploads the frame to
/// the window texture; the core never draws on its own.
pub trait World {
    fn init_frame(&mut self) -> Frame;

    #[inline]
    fn update(&mut self, frame: &mut Frame) {
        let _ = frame;
    }

    #[inline]
    fn keyboard_input(&mut self, event: KeyEvent, frame: &mut Frame) {
        let _ = (event, frame);
    }
}
