//! Domain services - Pure rules operating on domain types

mod sheet_derivation;

pub use sheet_derivation::derive_sheet;
