pub mod count;
pub mod locate;
pub mod registry;
