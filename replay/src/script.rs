//! Touch scripts: a recognizer configuration and a timed sequence of touch events.
use std::{
    cell::RefCell,
    rc::Rc,
    time::{Duration, Instant},
};

use anyhow::{Result, bail};
use serde::Deserialize;
use tactile_input::{
    Contact, ExternalEvent, GestureCallbacks, GestureState, Recognizer, RecognizerConfig,
    TouchContacts,
};
use winit::event::TouchPhase;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub config: RecognizerConfig,
    #[serde(default)]
    pub event: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScriptEvent {
    /// Milliseconds since the start of the script.
    pub at_ms: u64,
    pub phase: Phase,
    /// All active contacts. Defaults to `target`.
    #[serde(default)]
    pub all: Option<Vec<Contact>>,
    #[serde(default)]
    pub target: Vec<Contact>,
    #[serde(default)]
    pub changed: Vec<Contact>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Start,
    Move,
    End,
    Cancel,
    Tick,
}

#[derive(Debug)]
pub struct Replay {
    /// The reported gestures, in order.
    pub gestures: Vec<String>,
    pub state: GestureState,
}

impl Script {
    pub fn from_toml(source: &str) -> Result<Self> {
        let script: Self = toml::from_str(source)?;
        script.config.validate()?;
        if let Some(pair) = script.event.windows(2).find(|w| w[1].at_ms < w[0].at_ms) {
            bail!(
                "Events must be ordered by time, {} ms comes after {} ms",
                pair[1].at_ms,
                pair[0].at_ms
            );
        }
        Ok(script)
    }

    /// Replays the events as if the script started at `base` and waits for a pending tap at the
    /// end.
    pub fn replay(&self, base: Instant) -> Replay {
        let gestures = Rc::new(RefCell::new(Vec::new()));
        let mut recognizer = Recognizer::with_config(self.config, logging_callbacks(&gestures));

        for event in &self.event {
            recognizer.handle(&event.to_external_event(base));
        }
        if let Some(deadline) = recognizer.next_deadline() {
            recognizer.tick(deadline);
        }

        let gestures = gestures.borrow().clone();
        Replay {
            gestures,
            state: recognizer.state(),
        }
    }
}

impl ScriptEvent {
    fn to_external_event(&self, base: Instant) -> ExternalEvent {
        let time = base + Duration::from_millis(self.at_ms);
        let phase = match self.phase {
            Phase::Start => TouchPhase::Started,
            Phase::Move => TouchPhase::Moved,
            Phase::End => TouchPhase::Ended,
            Phase::Cancel => TouchPhase::Cancelled,
            Phase::Tick => return ExternalEvent::FrameTick(time),
        };
        ExternalEvent::Touch {
            phase,
            contacts: TouchContacts {
                all_active: self.all.clone().unwrap_or_else(|| self.target.clone()),
                target: self.target.clone(),
                changed: self.changed.clone(),
            },
            time,
        }
    }
}

fn logging_callbacks(gestures: &Rc<RefCell<Vec<String>>>) -> GestureCallbacks {
    let report = |name: &'static str| {
        let gestures = gestures.clone();
        move || gestures.borrow_mut().push(name.to_string())
    };
    let report_point = |name: &'static str| {
        let gestures = gestures.clone();
        move |x: f64, y: f64| gestures.borrow_mut().push(format!("{name} ({x}, {y})"))
    };
    let report_drag = |name: &'static str| {
        let gestures = gestures.clone();
        move |sx: f64, sy: f64, ex: f64, ey: f64| {
            gestures
                .borrow_mut()
                .push(format!("{name} ({sx}, {sy}) -> ({ex}, {ey})"))
        }
    };
    let report_pinch = |name: &'static str| {
        let gestures = gestures.clone();
        move |s: [f64; 4], e: [f64; 4]| {
            gestures.borrow_mut().push(format!(
                "{name} ({}, {}) ({}, {}) -> ({}, {}) ({}, {})",
                s[0], s[1], s[2], s[3], e[0], e[1], e[2], e[3]
            ))
        }
    };

    GestureCallbacks::new()
        .on_init(report("init"))
        .on_touch_start(report("touch start"))
        .on_touch_end(report("touch end"))
        .on_drag_start(report("drag start"))
        .on_drag_move(report_drag("drag move"))
        .on_drag_end(report_drag("drag end"))
        .on_single_tap(report_point("single tap"))
        .on_double_tap(report_point("double tap"))
        .on_pinch_start(report("pinch start"))
        .on_pinch_move(report_pinch("pinch move"))
        .on_pinch_end(report_pinch("pinch end"))
}
