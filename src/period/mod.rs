//! Free-text period expressions and their canonical annualization

mod parser;
mod tables;

pub use parser::{parse_period, PeriodDescriptor, UnrecognizedPeriod};
