//! Plugboard (Steckerbrett): symmetric pairwise letter swap.
//!
//! The plugboard sits between the keyboard and the rotor stack, so the
//! machine applies it twice per character: once before the forward pass
//! and once after the backward pass. The pairing is stored as a full
//! 26-entry involution table, identity where no cable is plugged.

use crate::alphabet::{index_of, letter_at};
use crate::error::EnigmaError;

/// Symmetric letter-pair substitution panel.
pub struct Plugboard {
    map: [u8; 26],
}

impl Plugboard {
    /// Builds a plugboard from a list of letter pairs.
    ///
    /// Pair letters are case-folded to uppercase. Up to 13 pairs fit;
    /// the reuse check enforces that bound.
    ///
    /// # Parameters
    /// - `pairs`: Unordered letter pairs, each letter used at most once.
    ///
    /// # Errors
    /// Returns [`EnigmaError::PlugboardNotALetter`] for characters
    /// outside A-Z, [`EnigmaError::PlugboardSelfPair`] for a pair like
    /// `('A', 'A')`, and [`EnigmaError::PlugboardDuplicateLetter`] when
    /// a letter appears in more than one pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use enigma::plugboard::Plugboard;
    ///
    /// let board = Plugboard::new(&[('A', 'B')]).unwrap();
    /// assert_eq!(board.swap(0), 1);
    /// assert_eq!(board.swap(1), 0);
    /// assert_eq!(board.swap(2), 2);
    /// ```
    pub fn new(pairs: &[(char, char)]) -> Result<Self, EnigmaError> {
        let mut map = [0u8; 26];
        for (i, slot) in map.iter_mut().enumerate() {
            *slot = i as u8;
        }
        let mut used = [false; 26];

        for &(a, b) in pairs {
            let a_idx = index_of(a.to_ascii_uppercase()).ok_or(EnigmaError::PlugboardNotALetter(a))?;
            let b_idx = index_of(b.to_ascii_uppercase()).ok_or(EnigmaError::PlugboardNotALetter(b))?;
            if a_idx == b_idx {
                return Err(EnigmaError::PlugboardSelfPair(letter_at(a_idx)));
            }
            if used[a_idx as usize] {
                return Err(EnigmaError::PlugboardDuplicateLetter(letter_at(a_idx)));
            }
            if used[b_idx as usize] {
                return Err(EnigmaError::PlugboardDuplicateLetter(letter_at(b_idx)));
            }
            used[a_idx as usize] = true;
            used[b_idx as usize] = true;
            map[a_idx as usize] = b_idx;
            map[b_idx as usize] = a_idx;
        }

        Ok(Plugboard { map })
    }

    /// Swaps a letter index through the panel.
    ///
    /// Returns the paired index if a cable is plugged, the input
    /// unchanged otherwise. Involutive for every input:
    /// `swap(swap(idx)) == idx`.
    pub fn swap(&self, idx: u8) -> u8 {
        self.map[idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::ALPHABET_LEN;

    #[test]
    fn test_empty_board_is_identity() {
        let board = Plugboard::new(&[]).unwrap();
        for idx in 0..ALPHABET_LEN {
            assert_eq!(board.swap(idx), idx);
        }
    }

    #[test]
    fn test_pairs_swap_both_ways() {
        let board = Plugboard::new(&[('Q', 'Z'), ('E', 'R')]).unwrap();
        assert_eq!(board.swap(16), 25); // Q -> Z
        assert_eq!(board.swap(25), 16); // Z -> Q
        assert_eq!(board.swap(4), 17);  // E -> R
        assert_eq!(board.swap(17), 4);  // R -> E
    }

    #[test]
    fn test_lowercase_pairs_fold() {
        let board = Plugboard::new(&[('a', 'b')]).unwrap();
        assert_eq!(board.swap(0), 1);
    }

    #[test]
    fn test_involution_over_all_letters() {
        let board = Plugboard::new(&[('A', 'B'), ('C', 'D'), ('Y', 'Z')]).unwrap();
        for idx in 0..ALPHABET_LEN {
            assert_eq!(board.swap(board.swap(idx)), idx);
        }
    }

    #[test]
    fn test_rejects_non_letter() {
        assert!(matches!(
            Plugboard::new(&[('A', '1')]),
            Err(EnigmaError::PlugboardNotALetter('1'))
        ));
        assert!(matches!(
            Plugboard::new(&[(' ', 'B')]),
            Err(EnigmaError::PlugboardNotALetter(' '))
        ));
    }

    #[test]
    fn test_rejects_self_pair() {
        assert!(matches!(
            Plugboard::new(&[('A', 'A')]),
            Err(EnigmaError::PlugboardSelfPair('A'))
        ));
        // Case-folded self pair is still a self pair.
        assert!(matches!(
            Plugboard::new(&[('a', 'A')]),
            Err(EnigmaError::PlugboardSelfPair('A'))
        ));
    }

    #[test]
    fn test_rejects_reused_letter() {
        assert!(matches!(
            Plugboard::new(&[('A', 'B'), ('A', 'C')]),
            Err(EnigmaError::PlugboardDuplicateLetter('A'))
        ));
        assert!(matches!(
            Plugboard::new(&[('A', 'B'), ('C', 'B')]),
            Err(EnigmaError::PlugboardDuplicateLetter('B'))
        ));
    }

    #[test]
    fn test_full_thirteen_pairs() {
        let pairs: Vec<(char, char)> = (0..13u8)
            .map(|i| (letter_at(2 * i), letter_at(2 * i + 1)))
            .collect();
        let board = Plugboard::new(&pairs).unwrap();
        for idx in 0..ALPHABET_LEN {
            assert_ne!(board.swap(idx), idx, "Every letter should be paired");
        }
    }
}
