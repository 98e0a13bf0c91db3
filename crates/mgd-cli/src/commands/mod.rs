pub mod dispatch;
pub mod shared;

pub mod bank;
pub mod capture;
pub mod course;
pub mod dashboard;
pub mod doc;
pub mod event;
pub mod growth;
pub mod import;
pub mod init;
pub mod pipeline;
pub mod practice;
pub mod remind;
pub mod ritual;
pub mod shas;
pub mod sync;
pub mod task;
pub mod usage;
