//! Enigma I cipher core.
//!
//! Implements the electromechanical cipher of the Wehrmacht Enigma I:
//! three rotors chosen from the historical set I–V, the B reflector and
//! the plugboard, driven by the original stepping mechanism including
//! the double-stepping anomaly of the middle rotor.
//!
//! # Architecture
//!
//! ```text
//! Rotor         (atomic unit — rotating 26-contact substitution wheel
//!               with ring setting and turnover notch)
//!     ↕ three in cascade (right → middle → left, then back)
//! Reflector     (fixed involutive wiring — turns the signal around)
//! Plugboard     (symmetric letter pairs — applied twice per character)
//! EnigmaMachine (orchestrator — stepping state machine + signal path)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use enigma::{EnigmaMachine, RotorType};
//!
//! let rotors = [RotorType::I, RotorType::II, RotorType::III];
//!
//! let mut encoder = EnigmaMachine::new(rotors, [0, 0, 0], [0, 0, 0], &[]).unwrap();
//! let ciphertext = encoder.process("HELLO WORLD");
//! assert_ne!(ciphertext, "HELLO WORLD");
//!
//! let mut decoder = EnigmaMachine::new(rotors, [0, 0, 0], [0, 0, 0], &[]).unwrap();
//! assert_eq!(decoder.process(&ciphertext), "HELLO WORLD");
//! ```
//!
//! Use plugboard pairs:
//!
//! ```
//! use enigma::{EnigmaMachine, RotorType};
//!
//! let rotors = [RotorType::II, RotorType::IV, RotorType::V];
//! let pairs = [('A', 'B'), ('C', 'D')];
//!
//! let mut machine = EnigmaMachine::new(rotors, [3, 7, 11], [1, 1, 1], &pairs).unwrap();
//! let ciphertext = machine.process("ATTACKATDAWN");
//! assert_eq!(ciphertext.len(), 12);
//! ```

#![deny(clippy::all)]

pub mod error;

pub(crate) mod alphabet;
mod enigma;
pub mod plugboard;
pub mod reflector;
pub mod rotor;
pub mod wiring;

pub use enigma::EnigmaMachine;
pub use wiring::RotorType;
