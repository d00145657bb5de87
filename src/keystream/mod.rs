//! Shift sources for the cipher engine.
//!
//! Every cipher in this crate is the same modular rotation driven by a
//! different sequence of shifts. The [`Keystream`] trait is that sequence;
//! [`CyclicKey`], [`FixedShift`] and [`LfsrKeystream`] are the
//! implementations the ciphers use.

pub mod lfsr;
pub mod schedule;

pub use lfsr::{Lfsr, LfsrKeystream};
pub use schedule::{CyclicKey, FixedShift, Inverted, Keystream};
