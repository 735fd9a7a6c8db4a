pub mod algorithms;
pub mod checkers;
pub mod connect_four;
pub mod definitions;
pub mod game;
pub mod utils;
