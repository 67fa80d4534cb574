pub mod add;
pub mod aggregate;
pub mod classify;
pub mod gate;
