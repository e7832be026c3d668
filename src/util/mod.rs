mod body;
mod request_path;

pub use self::body::*;

pub(crate) use self::request_path::*;
