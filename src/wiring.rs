//! Historical wiring tables for the Enigma I.
//!
//! The rotor set of the machine is closed and non-extensible, so the
//! wirings live here as tagged constant data keyed by [`RotorType`]
//! rather than as one type per rotor. Each table maps the contact at
//! alphabet position `i` to the letter `wiring[i]`.

use crate::alphabet::index_of;
use crate::error::EnigmaError;

/// Reflector B (UKW-B) wiring, as fitted to the Wehrmacht Enigma I.
pub const REFLECTOR_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

/// The five rotors issued for the Enigma I, identified by their
/// historical Roman numerals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorType {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorType {
    /// Resolves a 0-based index into the fixed rotor table.
    ///
    /// # Parameters
    /// - `index`: Position in the table (0 → rotor I, …, 4 → rotor V).
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorIndex`] if `index > 4`.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::RotorType;
    ///
    /// assert_eq!(RotorType::from_index(2).unwrap(), RotorType::III);
    /// assert!(RotorType::from_index(5).is_err());
    /// ```
    pub fn from_index(index: usize) -> Result<Self, EnigmaError> {
        match index {
            0 => Ok(RotorType::I),
            1 => Ok(RotorType::II),
            2 => Ok(RotorType::III),
            3 => Ok(RotorType::IV),
            4 => Ok(RotorType::V),
            _ => Err(EnigmaError::InvalidRotorIndex(index)),
        }
    }

    /// Returns the substitution wiring of this rotor.
    pub fn wiring(self) -> &'static str {
        match self {
            RotorType::I => "EKMFLGDQVZNTOWYHXUSPAIBRCJ",
            RotorType::II => "AJDKSIRUXBLHWTMCQGZNPYFVOE",
            RotorType::III => "BDFHJLCPRTXVZNYEIWGAKMUSQO",
            RotorType::IV => "ESOVPZJAYQUIRHXLNFTGKDCMWB",
            RotorType::V => "VZBRGITYUPSDNHLXAWMJQOFECK",
        }
    }

    /// Returns the turnover notch position of this rotor.
    ///
    /// When the rotor sits at this position, the next keypress advances
    /// the rotor to its left.
    pub fn notch(self) -> u8 {
        match self {
            RotorType::I => 16,    // Q
            RotorType::II => 4,    // E
            RotorType::III => 21,  // V
            RotorType::IV => 9,    // J
            RotorType::V => 25,    // Z
        }
    }
}

/// Parses a 26-letter wiring string into an index table, validating
/// that it is a full bijection over A-Z.
///
/// # Parameters
/// - `wiring`: Exactly 26 uppercase letters, each appearing once.
///
/// # Errors
/// Returns [`EnigmaError::InvalidWiring`] on wrong length, non-letter
/// characters or duplicate outputs.
pub(crate) fn parse_wiring(wiring: &str) -> Result<[u8; 26], EnigmaError> {
    let mut table = [0u8; 26];
    let mut seen = [false; 26];
    let mut len = 0usize;
    for c in wiring.chars() {
        if len == 26 {
            return Err(EnigmaError::InvalidWiring);
        }
        let idx = index_of(c).ok_or(EnigmaError::InvalidWiring)?;
        if seen[idx as usize] {
            return Err(EnigmaError::InvalidWiring);
        }
        seen[idx as usize] = true;
        table[len] = idx;
        len += 1;
    }
    if len != 26 {
        return Err(EnigmaError::InvalidWiring);
    }
    Ok(table)
}
