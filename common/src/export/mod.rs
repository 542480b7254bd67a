//! Export tabulek do sešitů

#[cfg(feature = "excel")]
pub mod excel_core;
