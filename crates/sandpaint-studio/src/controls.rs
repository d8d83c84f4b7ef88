//! Keyboard bindings per sketch variant.
//!
//! Sand: `0`..`9` stroke, `s` subdivide, `d` toggle drawing, `r` reset,
//! held `j`/`k` inset/outset. Outline: `s` subdivide. Escape quits both.

use sandpaint_engine::input::{InputState, Key};
use sandpaint_sketch::{Command, Held, Variant};

/// Key that closes the window.
pub const QUIT: Key = Key::Escape;

/// Discrete command bound to `key`, if any.
pub fn command_for(variant: Variant, key: Key) -> Option<Command> {
    match (variant, key) {
        (_, Key::S) => Some(Command::Subdivide),
        (Variant::Sand, Key::D) => Some(Command::ToggleDrawing),
        (Variant::Sand, Key::R) => Some(Command::Reset),
        (Variant::Sand, key) => key.digit().map(Command::SelectStroke),
        (Variant::Outline, _) => None,
    }
}

/// Continuous inputs for this frame.
pub fn held(variant: Variant, input: &InputState) -> Held {
    match variant {
        Variant::Sand => Held {
            inset: input.key_down(Key::J),
            outset: input.key_down(Key::K),
        },
        Variant::Outline => Held::default(),
    }
}
