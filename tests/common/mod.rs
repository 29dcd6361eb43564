#![allow(dead_code)] // not every test binary uses every scene helper

pub mod synthetic_image;
