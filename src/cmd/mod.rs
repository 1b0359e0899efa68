pub mod calendar;
pub mod init;
pub mod slots;
pub mod stats;
