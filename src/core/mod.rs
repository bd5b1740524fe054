pub mod device_id;
pub mod resolver;
pub mod view;

pub use device_id::DeviceId;
pub use resolver::{DefaultResolver, DeviceIdResolver};
pub use view::DeviceIdView;
