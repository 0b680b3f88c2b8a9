mod all;
mod board;
mod footer;
mod log;

use self::log::log;
use super::*;
use board::board;
use footer::footer;

pub use all::all as render;
