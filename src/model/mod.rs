//! Domain models shared across the pipeline.
//!
//! The central type is [`relay::RelayRequest`], the canonical value both input
//! surfaces (text commands and slash interactions) are normalized into before
//! authorization, quota accounting, and delivery.

pub mod relay;
