//! bioventure-web: Web GUI for BioVenture Nexus
//! Provides:
//!   - Market opportunity explorer with sector filter and charts
//!   - AI Architect form and blueprint result panel
//!   - JSON API mirroring both pages
//!   - Server-sent generation progress events

pub mod controller;
pub mod error;
pub mod handlers;
pub mod router;
pub mod sse;
pub mod state;
pub mod templates;
pub mod ticker;
pub mod view;
