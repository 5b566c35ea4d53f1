pub mod prelude;

pub mod event;
