//! Error types for the enigma library.

use thiserror::Error;

/// Errors produced while configuring an Enigma machine.
///
/// Every variant is raised synchronously at construction time; once a
/// machine exists its processing is total and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnigmaError {
    /// Rotor index does not name an entry in the fixed wiring table.
    #[error("Rotor index {0} is outside the wiring table (valid: 0..=4)")]
    InvalidRotorIndex(usize),
    /// Rotor position is outside the valid range.
    #[error("Rotor position {0} is outside the valid range 0..=25")]
    PositionOutOfRange(u8),
    /// Ring setting is outside the valid range.
    #[error("Ring setting {0} is outside the valid range 0..=25")]
    RingSettingOutOfRange(u8),
    /// Plugboard pair contains a character that is not a letter.
    #[error("Plugboard pair contains a non-letter: {0:?}")]
    PlugboardNotALetter(char),
    /// Plugboard pair connects a letter to itself.
    #[error("Plugboard pair connects {0} to itself")]
    PlugboardSelfPair(char),
    /// Letter appears in more than one plugboard pair.
    #[error("Letter {0} appears in more than one plugboard pair")]
    PlugboardDuplicateLetter(char),
    /// Wiring is not a 26-letter permutation of A-Z.
    #[error("Wiring is not a permutation of the 26-letter alphabet")]
    InvalidWiring,
    /// Reflector wiring is not its own inverse.
    #[error("Reflector wiring is not an involution")]
    ReflectorNotInvolutive,
    /// Reflector wiring maps a letter to itself.
    #[error("Reflector wiring maps {0} to itself")]
    ReflectorFixedPoint(char),
}
