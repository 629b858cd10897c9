//! Inbound/outbound adapters: CSV catalog and session readers, report writer.

pub mod csv;
