//! Rotor: rotating 26-contact substitution wheel.
//!
//! Implements the atomic cipher unit of the machine. Each rotor holds a
//! fixed wiring bijection plus its precomputed inverse, a ring setting
//! offsetting the wiring against the letter ring, and the only mutable
//! state in the whole machine: the rotation position.

use crate::alphabet::ALPHABET_LEN;
use crate::error::EnigmaError;
use crate::wiring::{parse_wiring, RotorType};

/// A single substitution wheel.
///
/// The signal passes through every rotor twice per character: once on
/// the way to the reflector ([`forward`](Self::forward)) and once on the
/// way back ([`backward`](Self::backward)). Both directions account for
/// the current position and the ring setting, so the effective mapping
/// changes as the rotor turns.
pub struct Rotor {
    wiring: [u8; 26],
    inverse: [u8; 26],
    notch: u8,
    ring_setting: u8,
    position: u8,
}

impl Rotor {
    /// Creates a rotor from the fixed historical table.
    ///
    /// # Parameters
    /// - `rotor_type`: Which historical rotor to build.
    /// - `ring_setting`: Ring offset (0..=25).
    /// - `position`: Initial rotation position (0..=25).
    ///
    /// # Errors
    /// Returns [`EnigmaError::PositionOutOfRange`] or
    /// [`EnigmaError::RingSettingOutOfRange`] for out-of-range values.
    pub fn new(rotor_type: RotorType, ring_setting: u8, position: u8) -> Result<Self, EnigmaError> {
        Self::from_wiring(rotor_type.wiring(), rotor_type.notch(), ring_setting, position)
    }

    /// Creates a rotor from an arbitrary wiring string.
    ///
    /// # Parameters
    /// - `wiring`: 26 uppercase letters forming a full bijection.
    /// - `notch`: Turnover notch position (0..=25).
    /// - `ring_setting`: Ring offset (0..=25).
    /// - `position`: Initial rotation position (0..=25).
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the wiring is not a
    /// permutation of A-Z, [`EnigmaError::PositionOutOfRange`] /
    /// [`EnigmaError::RingSettingOutOfRange`] for out-of-range values.
    pub fn from_wiring(
        wiring: &str,
        notch: u8,
        ring_setting: u8,
        position: u8,
    ) -> Result<Self, EnigmaError> {
        let table = parse_wiring(wiring)?;
        if notch >= ALPHABET_LEN {
            return Err(EnigmaError::PositionOutOfRange(notch));
        }
        if position >= ALPHABET_LEN {
            return Err(EnigmaError::PositionOutOfRange(position));
        }
        if ring_setting >= ALPHABET_LEN {
            return Err(EnigmaError::RingSettingOutOfRange(ring_setting));
        }

        // Invert the bijection once so backward() is a plain lookup.
        let mut inverse = [0u8; 26];
        for (i, &out) in table.iter().enumerate() {
            inverse[out as usize] = i as u8;
        }

        Ok(Rotor {
            wiring: table,
            inverse,
            notch,
            ring_setting,
            position,
        })
    }

    /// Substitutes a letter index on the way toward the reflector.
    ///
    /// # Parameters
    /// - `idx`: Letter index (0..26) entering the rotor.
    ///
    /// # Returns
    /// The substituted letter index leaving the rotor.
    pub fn forward(&self, idx: u8) -> u8 {
        let entry = (idx + self.position + ALPHABET_LEN - self.ring_setting) % ALPHABET_LEN;
        let mapped = self.wiring[entry as usize];
        (mapped + ALPHABET_LEN + self.ring_setting - self.position) % ALPHABET_LEN
    }

    /// Substitutes a letter index on the way back from the reflector.
    ///
    /// Identical offset arithmetic to [`forward`](Self::forward), over
    /// the precomputed inverse table.
    pub fn backward(&self, idx: u8) -> u8 {
        let entry = (idx + self.position + ALPHABET_LEN - self.ring_setting) % ALPHABET_LEN;
        let mapped = self.inverse[entry as usize];
        (mapped + ALPHABET_LEN + self.ring_setting - self.position) % ALPHABET_LEN
    }

    /// Returns whether the rotor sits on its turnover notch.
    ///
    /// Must be read before any stepping in the current cycle; the
    /// machine latches the result and then mutates positions.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Advances the rotor by one position, wrapping at 26.
    pub fn step(&mut self) {
        self.position = (self.position + 1) % ALPHABET_LEN;
    }

    /// Returns the current rotation position.
    pub fn position(&self) -> u8 {
        self.position
    }

    /// Returns the ring setting.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting
    }
}
