//! An aggregator that collects the touch events of one window and tracks which contacts are
//! down, and which of them belong to the bound surface.
//!
//! A contact belongs to the surface if it started inside of it, and keeps belonging to it until
//! it is lifted, even when it moves outside.
use std::time::Instant;

use log::warn;
use tactile_geometry::{Contains, Rect};
use winit::event::{DeviceId, Touch, TouchPhase};

use crate::{Contact, ExternalEvent, TouchContacts};

#[derive(Debug, Clone)]
pub struct TouchAggregator {
    surface: Rect,
    /// The active contacts, in the order they started.
    contacts: Vec<TrackedContact>,
}

#[derive(Debug, Clone)]
struct TrackedContact {
    device: DeviceId,
    contact: Contact,
    on_surface: bool,
}

impl TouchAggregator {
    pub fn new(surface: Rect) -> Self {
        Self {
            surface,
            contacts: Vec::new(),
        }
    }

    /// Updates the active contacts and returns the event for the recognizer.
    ///
    /// `None` if the touch refers to a contact that was never seen starting.
    pub fn update(&mut self, touch: &Touch, time: Instant) -> Option<ExternalEvent> {
        let contact = Contact::snapshot(touch);
        let index = self.index_of(touch);

        match (touch.phase, index) {
            (TouchPhase::Started, None) => self.contacts.push(TrackedContact {
                device: touch.device_id,
                contact,
                on_surface: self.surface.contains(contact.location()),
            }),
            (TouchPhase::Started, Some(index)) => {
                // The end of the previous contact with this id was never reported.
                warn!("Contact {} started twice", touch.id);
                self.contacts[index] = TrackedContact {
                    device: touch.device_id,
                    contact,
                    on_surface: self.surface.contains(contact.location()),
                };
            }
            (TouchPhase::Moved, Some(index)) => self.contacts[index].contact = contact,
            (TouchPhase::Ended | TouchPhase::Cancelled, Some(index)) => {
                self.contacts.remove(index);
            }
            (phase, None) => {
                warn!("Ignoring {phase:?} of unknown contact {}", touch.id);
                return None;
            }
        }

        Some(ExternalEvent::Touch {
            phase: touch.phase,
            contacts: self.to_contacts(contact),
            time,
        })
    }

    /// The number of contacts currently down.
    pub fn active(&self) -> usize {
        self.contacts.len()
    }

    fn index_of(&self, touch: &Touch) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.device == touch.device_id && c.contact.identifier == touch.id)
    }

    fn to_contacts(&self, changed: Contact) -> TouchContacts {
        TouchContacts {
            all_active: self.contacts.iter().map(|c| c.contact).collect(),
            target: self
                .contacts
                .iter()
                .filter(|c| c.on_surface)
                .map(|c| c.contact)
                .collect(),
            changed: vec![changed],
        }
    }
}
