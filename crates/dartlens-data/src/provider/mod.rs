//! 외부 데이터 프로바이더.

pub mod dart;

pub use dart::DartClient;
