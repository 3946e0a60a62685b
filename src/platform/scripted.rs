//! Pre-recorded input, one batch per frame

use std::collections::VecDeque;

use super::EventSource;
use super::input::InputEvent;

/// Replays a fixed sequence of per-frame event batches, then stays quiet
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEvents {
    pub fn new<I>(frames: I) -> Self
    where
        I: IntoIterator<Item = Vec<InputEvent>>,
    {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue another frame's batch
    pub fn push_frame(&mut self, events: Vec<InputEvent>) {
        self.frames.push_back(events);
    }

    /// Batches not yet delivered
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedEvents {
    fn poll_events(&mut self, out: &mut Vec<InputEvent>) {
        if let Some(batch) = self.frames.pop_front() {
            out.extend(batch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_batch_per_poll() {
        let mut events = ScriptedEvents::new([
            vec![InputEvent::PointerPress, InputEvent::Other],
            vec![],
            vec![InputEvent::WindowCloseRequested],
        ]);
        let mut out = Vec::new();

        events.poll_events(&mut out);
        assert_eq!(out, vec![InputEvent::PointerPress, InputEvent::Other]);

        out.clear();
        events.poll_events(&mut out);
        assert!(out.is_empty());

        events.poll_events(&mut out);
        assert_eq!(out, vec![InputEvent::WindowCloseRequested]);
        assert_eq!(events.remaining(), 0);

        out.clear();
        events.poll_events(&mut out);
        assert!(out.is_empty());
    }
}
