//! Keystroke dispatch
//!
//! Physical keypresses arrive one character at a time. Each one is appended
//! to a short buffer and looked up in the keymap. A hit resolves through the
//! controller and engine, a miss is left in the buffer until it grows past
//! [`BUFFER_LIMIT`] characters and is thrown away.

use crate::controller::{ControllerContext, handle_key};
use crate::effect::Effects;
use crate::engine::reduce;
use crate::keymap::Keymap;
use crate::session::Session;
use log::{debug, trace};

/// Unrecognized input is discarded once the buffer holds more than this
pub const BUFFER_LIMIT: usize = 5;

#[derive(Debug, Clone, Default)]
pub struct InputDispatcher {
    buffer: String,
    keymap: Keymap,
}

impl InputDispatcher {
    pub fn new(keymap: Keymap) -> Self {
        Self {
            buffer: String::new(),
            keymap,
        }
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Characters received since the last recognized key
    pub fn buffered(&self) -> &str {
        &self.buffer
    }

    /// Feed one character and apply whatever it resolves to
    pub fn feed(&mut self, key: char, session: &mut Session) -> Effects {
        self.buffer.push(key);

        let Some(command) = self.keymap.lookup(key) else {
            if self.buffer.chars().count() > BUFFER_LIMIT {
                trace!("discarding unrecognized input {:?}", self.buffer);
                self.buffer.clear();
            }
            return Effects::new();
        };

        self.buffer.clear();
        let ctx = ControllerContext::from_session(session);
        let action = handle_key(&ctx, command);
        debug!("key {key:?} -> {command:?} -> {action:?}");
        reduce(session, action)
    }

    /// Feed every character of `keys` in order, collecting all effects
    pub fn feed_str(&mut self, keys: &str, session: &mut Session) -> Effects {
        keys.chars()
            .flat_map(|key| self.feed(key, session))
            .collect()
    }
}
