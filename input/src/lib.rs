//! Touch gesture recognition: taps, double taps, drags, and two contact pinches.
mod callbacks;
mod config;
mod contact;
mod driver;
mod external_event;
mod recognizer;
mod scheduled;
mod state;
mod touch_aggregator;

pub use callbacks::*;
pub use config::*;
pub use contact::{Contact, TouchPoint};
pub use driver::*;
pub use external_event::*;
pub use recognizer::*;
pub use scheduled::*;
pub use state::*;
pub use touch_aggregator::*;

use winit::event::{Touch, WindowEvent};

pub trait WindowEventExtensions {
    fn touch(&self) -> Option<&Touch>;
}

impl WindowEventExtensions for WindowEvent {
    fn touch(&self) -> Option<&Touch> {
        match self {
            WindowEvent::Touch(touch) => Some(touch),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use winit::{
        dpi::PhysicalPosition,
        event::{DeviceId, TouchPhase},
    };

    use super::*;

    #[test]
    fn touch_is_extracted_from_window_events() {
        let touch = Touch {
            device_id: DeviceId::dummy(),
            phase: TouchPhase::Started,
            location: PhysicalPosition::new(1.0, 2.0),
            force: None,
            id: 3,
        };
        let event = WindowEvent::Touch(touch);
        assert_eq!(event.touch().map(|t| t.id), Some(3));
        assert!(WindowEvent::Focused(true).touch().is_none());
    }
}
