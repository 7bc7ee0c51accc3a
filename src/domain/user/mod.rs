pub mod entity;
pub mod repository;
pub mod settings;
pub mod value_objects;

pub use entity::User;
pub use repository::UserRepository;
pub use settings::NotificationSettings;
pub use value_objects::{EmailAddress, UserId, Username};
