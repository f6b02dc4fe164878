mod lookalike_service;
mod notification_sink;

pub use lookalike_service::LookalikeService;
pub use notification_sink::LookupNotificationSink;
