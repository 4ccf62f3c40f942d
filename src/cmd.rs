pub mod capture;
pub mod replay;
pub mod slate;
