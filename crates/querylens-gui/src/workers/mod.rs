mod dispatch;
mod requests;

pub use dispatch::spawn_worker;
pub(crate) use dispatch::send_log;
