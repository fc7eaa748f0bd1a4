//! Test suite for the block support library
//!
//! Organized by subsystem, with shared fixture blocks and a recording host
//! in `example_blocks`.

#[cfg(test)]
mod example_blocks;
#[cfg(test)]
mod attribute_tests;
#[cfg(test)]
mod property_tests;
