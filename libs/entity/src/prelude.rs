pub use crate::event::Event as EventEntity;
