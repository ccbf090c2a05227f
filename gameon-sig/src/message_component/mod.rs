mod component_identity;
mod component_method;
mod component_path;
mod component_timestamp;

pub use component_identity::Identity;
pub use component_method::RequestMethod;
pub use component_path::RequestPath;
pub use component_timestamp::Timestamp;
