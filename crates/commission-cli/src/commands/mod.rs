pub mod calculate;
pub mod configure;
pub mod performance;
pub mod workbook;
