//! Action types
//!
//! Actions are resolved intents. Keystrokes become actions through the
//! controller, taps and edit dialogs in the presentation layer build them
//! directly. The engine is the only consumer.

use crate::letter::SceneLetter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // QR overlay
    ShowQrOverlay,
    HideQrOverlay,

    // Roll (selected camera)
    RollIncrement,
    RollDecrement,
    CycleCamera,
    JumpRollToNextHundred,
    AddCamera,

    // Roll taps, addressed to one camera regardless of selection
    RollTapIncrement(usize),
    RollTapDecrement(usize),
    SelectCamera(usize),
    SetRoll { cam: usize, value: u16 },
    ResetRoll(usize),

    // Scene number, routed through dual mode
    IncrementActive,
    DecrementActive,
    JumpSceneToNextHundred,
    ToggleDualMode,
    ToggleEditTarget,

    // Scene number taps
    SceneIncrement,
    SceneDecrement,

    // Scene letter
    NextLetter,
    PreviousLetter,
    ToggleLetter,
    ResetLetter,
    SetSceneLetter(Option<SceneLetter>),

    // Take
    TakeIncrement,
    TakeDecrement,
    ToggleSeries,
    ResetTake,
    CycleTakeMode,
    SetTakeNumber(u16),

    // Edit dialogs, committed only if the text validates
    EnterRoll { cam: usize, text: String },
    EnterNumCams(String),
    EnterSceneNumber(String),
    EnterSceneLetter(String),
    EnterTakeNumber(String),
}
