//! Common test infrastructure for linrgb integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]

use std::io::Cursor;

use linrgb::error::AppError;
use linrgb::session;
use srgb_transfer::{srgb_to_linear, LinearRgb};

/// Prompt the session prints, without a newline, before the color line.
pub const COLOR_PROMPT: &str = "sRGB color: ";

/// Outcome of one in-memory session: the result and everything written to stdout.
pub struct Transcript {
    pub result: Result<LinearRgb, AppError>,
    pub stdout: String,
}

impl Transcript {
    /// Text written after the final color prompt, which is the tuple on success.
    pub fn tuple(&self) -> &str {
        let last = self.stdout.lines().last().unwrap_or("");
        last.rsplit(COLOR_PROMPT).next().unwrap_or(last)
    }

    pub fn linear(&self) -> LinearRgb {
        match &self.result {
            Ok(linear) => *linear,
            Err(e) => panic!("Expected a converted color, got error: {e}"),
        }
    }
}

pub fn simple(input: &str) -> Transcript {
    let mut stdout = Vec::new();
    let result = session::run_simple(Cursor::new(input.to_string()), &mut stdout);
    Transcript {
        result,
        stdout: String::from_utf8(stdout).expect("stdout is UTF-8"),
    }
}

pub fn multi(input: &str, preset: Option<&str>) -> Transcript {
    let mut stdout = Vec::new();
    let result = session::run_multi(Cursor::new(input.to_string()), &mut stdout, preset);
    Transcript {
        result,
        stdout: String::from_utf8(stdout).expect("stdout is UTF-8"),
    }
}

/// Expected tuple text for three encoded channel values.
pub fn expected_tuple(r: f64, g: f64, b: f64) -> String {
    format!(
        "({:?}, {:?}, {:?})",
        srgb_to_linear(r),
        srgb_to_linear(g),
        srgb_to_linear(b)
    )
}
