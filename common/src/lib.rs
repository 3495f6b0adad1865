//! Types shared by the clinic backend and the browser client.
//!
//! Everything here compiles both natively and to `wasm32-unknown-unknown`, so the
//! same validation rules run on both sides of the wire.

pub mod datetime;
pub mod filter;
pub mod model;
pub mod requests;
pub mod validation;
