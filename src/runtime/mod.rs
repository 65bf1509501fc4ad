//! Application runtime: execution mode routing

pub mod modes;
