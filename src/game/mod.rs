pub mod bag;
pub mod board;
pub mod distribution;
pub mod orientation;
pub mod tile;

pub use bag::TileBag;
pub use board::{Board, BOARD_SIZE, CENTER};
pub use distribution::{count_of, distribution, point_value_of, LetterSpec, FULL_BAG_SIZE};
pub use orientation::Orientation;
pub use tile::{Tile, BLANK};
