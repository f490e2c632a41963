#![no_std]

pub mod board;
pub mod hd44780;
