//! Session-level use-case services.
//!
//! # Responsibility
//! - Orchestrate model mutations and snapshot persistence into the
//!   entry points the UI/FFI layers call.
//! - Keep those layers decoupled from storage details.

pub mod task_service;
