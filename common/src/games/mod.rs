mod move_rng;

pub mod tictactoe;

pub use move_rng::MoveRng;
