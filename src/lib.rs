//! trendsig: moving-average crossover signal engine.
//!
//! Ingests a time-ordered series of price bars and derives discrete
//! Buy/Sell signals from short/long SMA crossovers, each tagged with a
//! bounded confidence score. Three sequential stages:
//!
//! 1. series normalizer (ordering and numeric coercion)
//! 2. rolling average tracker (paired trailing SMAs)
//! 3. crossover classifier (crossing detection and scoring)
//!
//! The engine itself is a pure synchronous function; ingestion and the
//! dataset store are the thin boundary around it.

pub mod config;
pub mod indicators;
pub mod ingest;
pub mod logging;
pub mod models;
pub mod series;
pub mod signals;
pub mod store;
