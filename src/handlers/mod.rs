pub mod bye;
pub mod hello;
pub mod hello_json;

pub use bye::bye_handler;
pub use hello::hello_handler;
pub use hello_json::hello_json_handler;
