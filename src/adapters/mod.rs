mod console_notification_sink;
mod file_image_source;
mod http_lookalike_client;

pub use console_notification_sink::ConsoleNotificationSink;
pub use file_image_source::FileImageSource;
pub use http_lookalike_client::LookalikeClient;
