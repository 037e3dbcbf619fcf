pub mod hiring;
pub mod roster;
