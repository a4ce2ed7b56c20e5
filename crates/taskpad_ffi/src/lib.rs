//! FFI crate exposing taskpad_core to the Flutter UI.

pub mod api;
