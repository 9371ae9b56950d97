//! EnigmaMachine: rotor stepping and the full signal path.
//!
//! Composes three rotors, the plugboard and the B reflector, and drives
//! the per-character cycle: step the rotors, then trace the electrical
//! path through the machine. The stepping mechanism reproduces the
//! historical double-stepping anomaly of the middle rotor.

use crate::alphabet::{index_of, letter_at};
use crate::error::EnigmaError;
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::Rotor;
use crate::wiring::{RotorType, REFLECTOR_B};

/// Three-rotor Enigma I with plugboard and B reflector.
///
/// # Architecture
///
/// Each alphabetic character first advances the rotors, then travels:
///
/// ```text
/// plugboard → right → middle → left → reflector
///                                         ↓
/// plugboard ← right ← middle ← left ←─────┘
/// ```
///
/// The second plugboard pass is load-bearing: without it the machine
/// loses reciprocity and ciphertext no longer decrypts on an
/// identically configured instance.
///
/// Rotor positions mutate as text is processed, so decryption uses a
/// second machine built with the same configuration rather than a
/// reset.
pub struct EnigmaMachine {
    left: Rotor,
    middle: Rotor,
    right: Rotor,
    plugboard: Plugboard,
    reflector: Reflector,
}

impl EnigmaMachine {
    /// Creates a machine from rotor types and settings.
    ///
    /// All arrays are ordered left, middle, right — the order the
    /// rotors sit in the machine.
    ///
    /// # Parameters
    /// - `rotor_types`: The three rotors, drawn from the historical set.
    /// - `positions`: Initial rotor positions (each 0..=25).
    /// - `ring_settings`: Ring settings (each 0..=25).
    /// - `plugboard_pairs`: Up to 13 letter pairs, each letter used at
    ///   most once.
    ///
    /// # Errors
    /// Returns the corresponding [`EnigmaError`] for out-of-range
    /// positions or ring settings and for malformed plugboard pairs.
    /// No partially-built machine is ever observable.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{EnigmaMachine, RotorType};
    ///
    /// let rotors = [RotorType::I, RotorType::II, RotorType::III];
    /// let machine = EnigmaMachine::new(rotors, [0, 0, 0], [0, 0, 0], &[]);
    /// assert!(machine.is_ok());
    ///
    /// let bad = EnigmaMachine::new(rotors, [0, 0, 26], [0, 0, 0], &[]);
    /// assert!(bad.is_err());
    /// ```
    pub fn new(
        rotor_types: [RotorType; 3],
        positions: [u8; 3],
        ring_settings: [u8; 3],
        plugboard_pairs: &[(char, char)],
    ) -> Result<Self, EnigmaError> {
        let [left_type, middle_type, right_type] = rotor_types;
        let left = Rotor::new(left_type, ring_settings[0], positions[0])?;
        let middle = Rotor::new(middle_type, ring_settings[1], positions[1])?;
        let right = Rotor::new(right_type, ring_settings[2], positions[2])?;
        let plugboard = Plugboard::new(plugboard_pairs)?;
        let reflector = Reflector::from_wiring(REFLECTOR_B)?;

        Ok(EnigmaMachine {
            left,
            middle,
            right,
            plugboard,
            reflector,
        })
    }

    /// Creates a machine from raw 0-based indices into the rotor table.
    ///
    /// # Parameters
    /// - `rotor_indices`: Indices 0..=4 selecting rotors I..V, ordered
    ///   left, middle, right.
    /// - `positions`, `ring_settings`, `plugboard_pairs`: as
    ///   [`new`](Self::new).
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidRotorIndex`] for an index outside
    /// the table, plus everything [`new`](Self::new) reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::EnigmaMachine;
    ///
    /// let machine = EnigmaMachine::from_indices([0, 1, 2], [0, 0, 0], [0, 0, 0], &[]);
    /// assert!(machine.is_ok());
    ///
    /// let bad = EnigmaMachine::from_indices([0, 1, 9], [0, 0, 0], [0, 0, 0], &[]);
    /// assert!(bad.is_err());
    /// ```
    pub fn from_indices(
        rotor_indices: [usize; 3],
        positions: [u8; 3],
        ring_settings: [u8; 3],
        plugboard_pairs: &[(char, char)],
    ) -> Result<Self, EnigmaError> {
        let rotor_types = [
            RotorType::from_index(rotor_indices[0])?,
            RotorType::from_index(rotor_indices[1])?,
            RotorType::from_index(rotor_indices[2])?,
        ];
        Self::new(rotor_types, positions, ring_settings, plugboard_pairs)
    }

    /// Returns the current rotor positions, ordered left, middle, right.
    pub fn rotor_positions(&self) -> [u8; 3] {
        [
            self.left.position(),
            self.middle.position(),
            self.right.position(),
        ]
    }

    /// Advances the rotors for one keypress.
    ///
    /// Both notch flags are latched before any rotor moves; reading
    /// them mid-mutation would break the double-step.
    fn step_rotors(&mut self) {
        let middle_at_notch = self.middle.at_notch();
        let right_at_notch = self.right.at_notch();

        if right_at_notch || middle_at_notch {
            self.middle.step();
        }
        // Double-stepping anomaly: a middle rotor on its own notch
        // drags the left rotor along on the same keypress.
        if middle_at_notch {
            self.left.step();
        }
        self.right.step();
    }

    /// Runs one letter index through the full signal path.
    ///
    /// Steps the rotors first, exactly as the keypress does on the
    /// physical machine.
    fn encipher(&mut self, idx: u8) -> u8 {
        self.step_rotors();

        let mut c = self.plugboard.swap(idx);
        c = self.right.forward(c);
        c = self.middle.forward(c);
        c = self.left.forward(c);
        c = self.reflector.reflect(c);
        c = self.left.backward(c);
        c = self.middle.backward(c);
        c = self.right.backward(c);
        // Second plugboard pass — required for reciprocity.
        self.plugboard.swap(c)
    }

    /// Processes a text through the machine.
    ///
    /// Input is uppercase-folded. Characters outside A-Z pass through
    /// unchanged and do not advance any rotor. Output always has the
    /// same length and character order as the input; processing never
    /// fails.
    ///
    /// # Parameters
    /// - `text`: The text to encrypt or decrypt.
    ///
    /// # Returns
    /// The processed text.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::{EnigmaMachine, RotorType};
    ///
    /// let rotors = [RotorType::I, RotorType::II, RotorType::III];
    /// let mut machine = EnigmaMachine::new(rotors, [0, 0, 0], [0, 0, 0], &[]).unwrap();
    /// assert_eq!(machine.process("AAAAA"), "BDZGO");
    /// ```
    pub fn process(&mut self, text: &str) -> String {
        text.chars()
            .map(|raw| {
                let folded = raw.to_ascii_uppercase();
                match index_of(folded) {
                    Some(idx) => letter_at(self.encipher(idx)),
                    None => raw,
                }
            })
            .collect()
    }
}
