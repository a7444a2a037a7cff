use std::{future, time::Instant};

use log::debug;
use tokio::{sync::mpsc::UnboundedReceiver, time};

use crate::{ExternalEvent, Recognizer};

/// Feeds queued events into a [`Recognizer`] and ticks it when a deferred gesture becomes due.
#[derive(Debug)]
pub struct GestureDriver {
    recognizer: Recognizer,
    events: UnboundedReceiver<ExternalEvent>,
}

impl GestureDriver {
    pub fn new(recognizer: Recognizer, events: UnboundedReceiver<ExternalEvent>) -> Self {
        Self { recognizer, events }
    }

    /// Runs until the sender disconnects and no deferred gesture is pending anymore.
    ///
    /// Returns the recognizer.
    pub async fn run(mut self) -> Recognizer {
        let mut connected = true;
        loop {
            let deadline = self.recognizer.next_deadline();
            if !connected && deadline.is_none() {
                debug!("Sender disconnected, gesture driver stops");
                return self.recognizer;
            }

            tokio::select! {
                biased;

                event = self.events.recv(), if connected => match event {
                    Some(event) => {
                        self.recognizer.handle(&event);
                    }
                    None => connected = false,
                },
                due = sleep_until(deadline) => self.recognizer.tick(due),
            }
        }
    }
}

/// Waits until `deadline` and returns it. Never completes without a deadline.
async fn sleep_until(deadline: Option<Instant>) -> Instant {
    match deadline {
        Some(deadline) => {
            time::sleep_until(time::Instant::from_std(deadline)).await;
            deadline
        }
        None => future::pending().await,
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use tokio::sync::mpsc;
    use winit::event::TouchPhase;

    use super::*;
    use crate::{Contact, GestureCallbacks, GestureState, TouchContacts};

    fn touch_event(phase: TouchPhase, down: bool, time: Instant) -> ExternalEvent {
        let contact = vec![Contact::new(1, 4.0, 2.0)];
        let active = if down { contact.clone() } else { Vec::new() };
        ExternalEvent::Touch {
            phase,
            contacts: TouchContacts {
                all_active: active.clone(),
                target: active,
                changed: contact,
            },
            time,
        }
    }

    fn recognizer(log: &Rc<RefCell<Vec<String>>>) -> Recognizer {
        let single = log.clone();
        let double = log.clone();
        Recognizer::new(
            GestureCallbacks::new()
                .on_single_tap(move |x, y| single.borrow_mut().push(format!("single {x} {y}")))
                .on_double_tap(move |x, y| double.borrow_mut().push(format!("double {x} {y}"))),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn pending_tap_is_delivered_after_disconnect() {
        let log: Rc<RefCell<Vec<String>>> = Rc::default();
        let (sender, receiver) = mpsc::unbounded_channel();
        let now = time::Instant::now().into_std();
        sender
            .send(touch_event(TouchPhase::Started, true, now))
            .unwrap();
        sender
            .send(touch_event(
                TouchPhase::Ended,
                false,
                now + Duration::from_millis(30),
            ))
            .unwrap();
        drop(sender);

        let recognizer = GestureDriver::new(recognizer(&log), receiver).run().await;
        assert_eq!(*log.borrow(), ["single 4 2"]);
        assert_eq!(recognizer.state(), GestureState::Idle);
        assert!(time::Instant::now().into_std() >= now + Duration::from_millis(380));
    }

    #[tokio::test(start_paused = true)]
    async fn queued_second_tap_is_a_double_tap() {
        let log: Rc<RefCell<Vec<String>>> = Rc::default();
        let (sender, receiver) = mpsc::unbounded_channel();
        let now = time::Instant::now().into_std();
        let at = |ms| now + Duration::from_millis(ms);
        for (phase, down, ms) in [
            (TouchPhase::Started, true, 0),
            (TouchPhase::Ended, false, 40),
            (TouchPhase::Started, true, 120),
            (TouchPhase::Ended, false, 160),
        ] {
            sender.send(touch_event(phase, down, at(ms))).unwrap();
        }
        drop(sender);

        let recognizer = GestureDriver::new(recognizer(&log), receiver).run().await;
        assert_eq!(*log.borrow(), ["double 4 2"]);
        assert_eq!(recognizer.state(), GestureState::Idle);
    }
}
