//! Library side of the `slidedeck` binary.

pub mod logging;
pub mod present;
