use std::time::Instant;

use winit::event::TouchPhase;

use crate::{Contact, TouchPoint};

/// The contacts reported with a single touch event.
#[derive(Debug)]
pub struct TouchInput<'a, T> {
    /// All contacts currently down, anywhere.
    pub all_active: &'a [T],
    /// The active contacts that belong to the bound surface.
    pub target: &'a [T],
    /// The contacts that caused this event.
    pub changed: &'a [T],
}

impl<'a, T: TouchPoint> TouchInput<'a, T> {
    pub fn new(all_active: &'a [T], target: &'a [T], changed: &'a [T]) -> Self {
        Self {
            all_active,
            target,
            changed,
        }
    }

    /// `true` if some active contact lies outside of the bound surface.
    pub fn has_foreign_contacts(&self) -> bool {
        self.target.len() != self.all_active.len()
    }
}

/// Owned contact collections, so that touch events can be queued.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchContacts {
    pub all_active: Vec<Contact>,
    pub target: Vec<Contact>,
    pub changed: Vec<Contact>,
}

impl TouchContacts {
    pub fn input(&self) -> TouchInput<'_, Contact> {
        TouchInput::new(&self.all_active, &self.target, &self.changed)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExternalEvent {
    Touch {
        phase: TouchPhase,
        contacts: TouchContacts,
        time: Instant,
    },
    /// Time has passed, deferred gestures may become due.
    FrameTick(Instant),
}
