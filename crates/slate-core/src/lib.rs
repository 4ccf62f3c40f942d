//! Slate core
//!
//! State and input handling for a film production slate: roll numbers for up
//! to four cameras, scene number with a letter suffix and an optional dual
//! prefix, and take number with its mode.
//!
//! Keystrokes flow through [`InputDispatcher`] → [`Keymap`] → controller →
//! [`Action`] → [`engine::reduce`] → [`Effect`]s. Taps and edit dialogs skip
//! the first three steps and hand actions straight to the engine.

pub mod action;
pub mod camera;
pub mod controller;
pub mod counter;
pub mod dispatcher;
pub mod dual;
pub mod effect;
pub mod engine;
pub mod entry;
pub mod keymap;
pub mod letter;
pub mod scene;
pub mod session;
pub mod take;

pub use action::Action;
pub use counter::SceneOverflow;
pub use dispatcher::InputDispatcher;
pub use effect::{Effect, Effects};
pub use entry::{EntryError, EntryField};
pub use keymap::{KeyCommand, Keymap};
pub use letter::SceneLetter;
pub use session::Session;
pub use take::TakeMode;
