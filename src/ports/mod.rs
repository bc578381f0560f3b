//! Ports (trait boundaries) between the estimators and their callers.
//!
//! The ranking core never prints. Callers that want feedback while a long
//! estimate runs plug an adapter into these traits.

pub mod observer;

pub use observer::SampleObserver;
