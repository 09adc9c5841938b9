//! Input funnel
//!
//! Window/keyboard callbacks may fire on any thread at any time. They push
//! events through an [`InputSender`]; the session drains the queue once per
//! tick, so the simulation only ever has one writer.

use std::sync::mpsc::{self, Receiver, Sender};

use crate::sim::InputEvent;

/// Cloneable producer handle for input events
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<InputEvent>,
}

impl InputSender {
    /// Queue an event. Returns false if the session is gone.
    pub fn send(&self, event: InputEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// Single-consumer end of the input queue
#[derive(Debug)]
pub struct InputQueue {
    tx: Sender<InputEvent>,
    rx: Receiver<InputEvent>,
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl InputQueue {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self { tx, rx }
    }

    /// New producer handle for this queue
    pub fn sender(&self) -> InputSender {
        InputSender { tx: self.tx.clone() }
    }

    /// Take every queued event in arrival order
    pub fn drain(&self) -> Vec<InputEvent> {
        self.rx.try_iter().collect()
    }
}

/// Map a key name from a windowing layer to an input event
pub fn key_event(key: &str, pressed: bool) -> Option<InputEvent> {
    match (key.to_lowercase().as_str(), pressed) {
        ("arrowleft" | "left" | "a", true) => Some(InputEvent::LaneLeft),
        ("arrowright" | "right" | "d", true) => Some(InputEvent::LaneRight),
        ("shift" | "shiftleft" | "shiftright", true) => Some(InputEvent::BoostDown),
        ("shift" | "shiftleft" | "shiftright", false) => Some(InputEvent::BoostUp),
        ("r", true) => Some(InputEvent::Restart),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_keeps_order() {
        let queue = InputQueue::new();
        let sender = queue.sender();
        assert!(sender.send(InputEvent::LaneLeft));
        assert!(sender.send(InputEvent::BoostDown));
        assert!(sender.send(InputEvent::LaneRight));

        assert_eq!(
            queue.drain(),
            vec![InputEvent::LaneLeft, InputEvent::BoostDown, InputEvent::LaneRight]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_events_from_other_threads() {
        let queue = InputQueue::new();
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let sender = queue.sender();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        sender.send(InputEvent::LaneRight);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(queue.drain().len(), 100);
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_event("ArrowLeft", true), Some(InputEvent::LaneLeft));
        assert_eq!(key_event("ArrowLeft", false), None);
        assert_eq!(key_event("Shift", false), Some(InputEvent::BoostUp));
        assert_eq!(key_event("R", true), Some(InputEvent::Restart));
        assert_eq!(key_event("q", true), None);
    }
}
