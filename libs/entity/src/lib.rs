pub mod event;
pub mod prelude;
