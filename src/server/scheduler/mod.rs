//! Cron jobs running beside the HTTP server.

pub mod creation_flow_sweep;
