//! Board, fleet and turn engine for the classic two-player grid battle game.
//!
//! Each player places a fleet of straight ships on a private 10x10 [`Board`]. Ships may
//! not overlap or touch, not even diagonally. Players then take turns shooting at each
//! other's board; a hit earns another shot, a miss passes the turn, and the first player
//! to sink the whole enemy fleet wins. Hits score [`BASE_SCORE`] points, reduced by the
//! number of misses since the shooter's previous hit.
//!
//! [`board`] holds the grid and the placement and shot rules, [`ships`] describes ships
//! and fleets, [`player`] keeps score, and [`game`] sequences a [`Match`] either step by
//! step or against a [`Console`](game::Console).
//!
//! [`Board`]: board::Board
//! [`BASE_SCORE`]: player::BASE_SCORE
//! [`Match`]: game::Match

pub mod board;
pub mod game;
pub mod player;
pub mod ships;
