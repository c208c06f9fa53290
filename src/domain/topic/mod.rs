pub mod entity;

pub use entity::{Topic, TopicId};
