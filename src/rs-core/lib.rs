#![allow(dead_code)]

use wasm_bindgen::prelude::*;

mod bindings;
mod controller;
pub mod dispatcher;
mod fullscreen;
mod gesture;
mod layout;
mod playback;
mod registry;
mod utils;
mod visibility;

pub use utils::logger::Logger;
