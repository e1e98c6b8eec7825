pub mod components;
pub mod decision;
pub mod ghost;
pub mod movement;
pub mod player;
