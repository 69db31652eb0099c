// Route path constants - single source of truth for all paths

pub const HELLO: &str = "/hello";
pub const BYE: &str = "/bye";
