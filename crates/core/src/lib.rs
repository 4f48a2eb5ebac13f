//! Functional core for the moviedemo walkthrough.
//!
//! Pure types and logic only: the movie data model, the menu command parser,
//! the sample catalog parser, and the gateway capability trait with its
//! scan-pagination loop. Anything that talks to the network lives in the
//! `moviedemo` crate.

pub mod catalog;
pub mod command;
pub mod movie;
pub mod storage;
