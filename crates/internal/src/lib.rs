//! Internal utilities shared by sigengine crates

#![no_std]

pub mod constant_time;
