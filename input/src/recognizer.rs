//! Classifies touch events into taps, double taps, drags, and pinches.
//!
//! Hosts do not deliver touch events reliably: Contacts outside of the surface are reported,
//! `end` events go missing, and events arrive in unexpected states. None of these is an error
//! here. Anomalies cancel the current gesture and the recognizer waits in
//! [`GestureState::Error`] until all contacts are lifted.
use std::time::Instant;

use log::{debug, info, warn};
use tactile_geometry::Point;
use winit::event::TouchPhase;

use crate::{
    Contact, ExternalEvent, GestureCallbacks, GestureState, RecognizerConfig, Scheduled,
    TouchInput, TouchPoint,
};

/// More contacts on the surface are not a gesture.
const MAX_CONTACTS: usize = 2;

/// What the host should do with its default handling of the event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Disposition {
    Default,
    /// The event was consumed by a gesture, the host should suppress its default behavior (like
    /// scrolling or an emulated double click).
    SuppressDefault,
}

#[derive(Debug)]
pub struct Recognizer {
    config: RecognizerConfig,
    callbacks: GestureCallbacks,
    state: GestureState,
    /// Where the current gesture started.
    start_contacts: Vec<Contact>,
    /// The most recent positions of the current gesture.
    end_contacts: Vec<Contact>,
    /// When the last move got reported.
    start_time: Option<Instant>,
    /// The single tap waiting for a possible second tap.
    pending_tap: Scheduled<Point>,
}

impl Recognizer {
    pub fn new(callbacks: GestureCallbacks) -> Self {
        Self::with_config(RecognizerConfig::default(), callbacks)
    }

    pub fn with_config(config: RecognizerConfig, callbacks: GestureCallbacks) -> Self {
        Self {
            config,
            callbacks,
            state: GestureState::Idle,
            start_contacts: Vec::new(),
            end_contacts: Vec::new(),
            start_time: None,
            pending_tap: Scheduled::default(),
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// When the recognizer needs to be ticked next, if at all.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending_tap.due()
    }

    pub fn handle(&mut self, event: &ExternalEvent) -> Disposition {
        match event {
            ExternalEvent::Touch {
                phase,
                contacts,
                time,
            } => {
                let input = contacts.input();
                match phase {
                    TouchPhase::Started => self.touch_start(*time, &input),
                    TouchPhase::Moved => self.touch_move(*time, &input),
                    TouchPhase::Ended => self.touch_end(*time, &input),
                    TouchPhase::Cancelled => {
                        self.touch_cancel(*time, &input);
                        Disposition::Default
                    }
                }
            }
            ExternalEvent::FrameTick(now) => {
                self.tick(*now);
                Disposition::Default
            }
        }
    }

    /// Reports a pending single tap if its waiting period is over at `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(at) = self.pending_tap.take_due(now) else {
            return;
        };
        if self.state != GestureState::Tap {
            warn!("Single tap became due in {}", self.state);
        }
        debug!("Single tap at {at:?}");
        self.callbacks.single_tap(at);
        self.callbacks.touch_end();
        self.state = GestureState::Idle;
    }

    pub fn touch_start<T: TouchPoint>(
        &mut self,
        time: Instant,
        input: &TouchInput<'_, T>,
    ) -> Disposition {
        use GestureState::*;

        self.tick(time);
        if self.state == Error {
            return Disposition::Default;
        }
        if input.has_foreign_contacts() || input.target.len() > MAX_CONTACTS {
            info!(
                "Touch start with {} of {} contacts on the surface, cancelling",
                input.target.len(),
                input.all_active.len()
            );
            self.abort(input.target.len());
            return Disposition::Default;
        }

        debug!("Touch start in {}: {} contacts", self.state, input.target.len());
        self.start_contacts = Contact::snapshot_all(input.target);
        match self.state {
            Idle => {
                if let Some(init) = self.callbacks.init.take() {
                    init();
                }
                self.callbacks.touch_start();
                self.state = Touching;
            }
            Tap => {
                if self.callbacks.detects_double_taps() {
                    self.pending_tap.cancel();
                    self.state = DoubleTap;
                } else {
                    // Without double tap detection, the second tap can't be told apart from the
                    // start of a drag.
                    self.cancel();
                }
            }
            Drag => {
                self.drag_end();
                self.state = Touching;
            }
            Pinch => warn!("Touch start while pinching"),
            Touching | DoubleTap | EndPinch | Error => {}
        }
        Disposition::Default
    }

    pub fn touch_move<T: TouchPoint>(
        &mut self,
        time: Instant,
        input: &TouchInput<'_, T>,
    ) -> Disposition {
        use GestureState::*;

        self.tick(time);
        if self.state == Error {
            return Disposition::Default;
        }
        if input.has_foreign_contacts() {
            info!(
                "Touch move with {} of {} contacts on the surface, cancelling",
                input.target.len(),
                input.all_active.len()
            );
            self.abort(input.target.len());
            return Disposition::Default;
        }

        match self.state {
            Touching | DoubleTap | EndPinch => match input.target.len() {
                1 => {
                    debug!("Drag starts");
                    self.begin_moving(time, input.target, 1);
                    self.state = Drag;
                    self.callbacks.drag_start();
                    self.callbacks
                        .drag_move(&self.start_contacts, &self.end_contacts);
                }
                2 => {
                    debug!("Pinch starts");
                    self.begin_moving(time, input.target, 2);
                    self.state = Pinch;
                    self.callbacks.pinch_start();
                    self.callbacks
                        .pinch_move(&self.start_contacts, &self.end_contacts);
                }
                n => debug!("Touch move with {n} contacts in {}", self.state),
            },
            Drag => {
                if !input.target.is_empty() && self.move_due(time) {
                    self.end_contacts = Contact::snapshot_all(input.target);
                    self.start_time = Some(time);
                    self.callbacks
                        .drag_move(&self.start_contacts, &self.end_contacts);
                }
            }
            Pinch => {
                // Some hosts report a move with the lifted contact missing before its end event.
                if input.target.len() == MAX_CONTACTS && self.move_due(time) {
                    self.end_contacts = Contact::snapshot_all(input.target);
                    self.start_time = Some(time);
                    self.callbacks
                        .pinch_move(&self.start_contacts, &self.end_contacts);
                }
            }
            Idle | Tap => warn!("Touch move in {}", self.state),
            Error => {}
        }
        Disposition::SuppressDefault
    }

    pub fn touch_end<T: TouchPoint>(
        &mut self,
        time: Instant,
        input: &TouchInput<'_, T>,
    ) -> Disposition {
        use GestureState::*;

        self.tick(time);
        debug!(
            "Touch end in {}: {} start contacts, {} remaining",
            self.state,
            self.start_contacts.len(),
            input.target.len()
        );
        let mut disposition = Disposition::Default;
        let touch_ended = match self.state {
            Idle | Tap => {
                warn!("Touch end in {}", self.state);
                false
            }
            Touching => {
                if self.start_contacts.len() > 1 {
                    // Multi contact taps are not supported.
                    self.cancel();
                } else {
                    let at = self.lifted_location(input);
                    self.pending_tap
                        .schedule(time + self.config.single_tap_delay, at);
                    self.state = Tap;
                }
                false
            }
            DoubleTap => {
                disposition = Disposition::SuppressDefault;
                let at = self.lifted_location(input);
                debug!("Double tap at {at:?}");
                self.callbacks.double_tap(at);
                true
            }
            Drag => {
                self.drag_end();
                true
            }
            Pinch => {
                self.pinch_end();
                if input.target.len() == 1 {
                    self.start_contacts = Contact::snapshot_all(input.target);
                    self.end_contacts = self.start_contacts.clone();
                    self.state = EndPinch;
                    false
                } else {
                    true
                }
            }
            EndPinch => true,
            Error => {
                if input.target.is_empty() {
                    self.state = Idle;
                }
                false
            }
        };

        if touch_ended {
            self.callbacks.touch_end();
            self.state = Idle;
        }
        disposition
    }

    /// The host cancelled the touch interaction.
    pub fn touch_cancel<T: TouchPoint>(&mut self, time: Instant, input: &TouchInput<'_, T>) {
        self.tick(time);
        debug!(
            "Touch cancel in {}: {} remaining",
            self.state,
            input.target.len()
        );
        self.cancel();
        if input.target.is_empty() {
            self.state = GestureState::Idle;
        }
    }

    /// Cancels the current gesture because of anomalous input.
    fn abort(&mut self, remaining: usize) {
        self.cancel();
        self.state = if remaining == 0 {
            GestureState::Idle
        } else {
            GestureState::Error
        };
    }

    /// Ends the current gesture and waits for the contacts to lift.
    ///
    /// An idle recognizer stays idle, so cancelling again has no effect.
    fn cancel(&mut self) {
        use GestureState::*;
        match self.state {
            Drag => self.drag_end(),
            Pinch => self.pinch_end(),
            Tap => {
                self.pending_tap.cancel();
            }
            _ => {}
        }

        if !matches!(self.state, Idle | Error) {
            self.callbacks.touch_end();
            self.state = Error;
        }
    }

    fn drag_end(&mut self) {
        debug!("Drag ends");
        self.callbacks
            .drag_end(&self.start_contacts, &self.end_contacts);
    }

    fn pinch_end(&mut self) {
        debug!("Pinch ends");
        self.callbacks
            .pinch_end(&self.start_contacts, &self.end_contacts);
    }

    /// Takes the current contacts as the latest positions of a drag (`expected` = 1) or a pinch
    /// (`expected` = 2) that begins at `time`.
    fn begin_moving<T: TouchPoint>(&mut self, time: Instant, target: &[T], expected: usize) {
        self.end_contacts = Contact::snapshot_all(target);
        if self.start_contacts.len() != expected {
            debug!(
                "{} start contacts do not match the gesture, starting at the current contacts",
                self.start_contacts.len()
            );
            self.start_contacts = self.end_contacts.clone();
        }
        self.start_time = Some(time);
    }

    fn move_due(&self, now: Instant) -> bool {
        self.start_time.is_none_or(|reported| {
            now.saturating_duration_since(reported) >= self.config.move_interval()
        })
    }

    /// The location where a contact was lifted. Falls back to where the gesture started if the
    /// host did not report the changed contact.
    fn lifted_location<T: TouchPoint>(&self, input: &TouchInput<'_, T>) -> Point {
        input
            .changed
            .first()
            .map(TouchPoint::location)
            .or_else(|| self.start_contacts.first().map(Contact::location))
            .unwrap_or_default()
    }
}
