//! Reflector (Umkehrwalze): fixed involutive substitution.
//!
//! The reflector never moves. It pairs up the 26 contacts and sends the
//! signal back through the rotor stack, which is what makes the whole
//! machine reciprocal — and what guarantees no letter ever encrypts to
//! itself.

use crate::alphabet::letter_at;
use crate::error::EnigmaError;
use crate::wiring::parse_wiring;

/// Fixed, position-independent involutive wiring.
pub struct Reflector {
    map: [u8; 26],
}

impl Reflector {
    /// Builds a reflector from a 26-letter wiring string.
    ///
    /// # Parameters
    /// - `wiring`: 26 uppercase letters forming a bijection over A-Z.
    ///
    /// # Errors
    /// Returns [`EnigmaError::InvalidWiring`] if the string is not a
    /// permutation, [`EnigmaError::ReflectorFixedPoint`] if any letter
    /// maps to itself, and [`EnigmaError::ReflectorNotInvolutive`] if
    /// the table is not its own inverse.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::reflector::Reflector;
    /// use enigma::wiring::REFLECTOR_B;
    ///
    /// let reflector = Reflector::from_wiring(REFLECTOR_B).unwrap();
    /// assert_eq!(reflector.reflect(0), 24); // A <-> Y
    /// assert_eq!(reflector.reflect(24), 0);
    /// ```
    pub fn from_wiring(wiring: &str) -> Result<Self, EnigmaError> {
        let map = parse_wiring(wiring)?;
        for (i, &mapped) in map.iter().enumerate() {
            if mapped as usize == i {
                return Err(EnigmaError::ReflectorFixedPoint(letter_at(mapped)));
            }
            if map[mapped as usize] as usize != i {
                return Err(EnigmaError::ReflectorNotInvolutive);
            }
        }
        Ok(Reflector { map })
    }

    /// Reflects a letter index back into the rotor stack.
    pub fn reflect(&self, idx: u8) -> u8 {
        self.map[idx as usize]
    }
}
