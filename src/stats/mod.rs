//! Statistics over cipher output: byte frequency tables, bitmap channel
//! histograms and Shannon entropy.
//!
//! Results are plain values. A renderer receives a [`FrequencyTable`] and
//! never touches analyzer state.

pub mod bitmap;
pub mod entropy;
pub mod frequency;

pub use bitmap::{BitmapHeader, ChannelHistograms};
pub use entropy::{max_entropy, shannon_entropy};
pub use frequency::FrequencyTable;
