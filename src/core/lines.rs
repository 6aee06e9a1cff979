//! Registry of known TfL lines and their brand colours.
//!
//! Every line the tool knows about lives in a single table, [`LINES`], keyed by the [`Line`]
//! enum. Adding a line means adding a variant and a table row, nothing else.
//!
//! # Public API
//! - [`Line`]: Known lines, with lookup by API code
//! - [`colour_for`]: Background colour for any line code, unknown codes included
//! - [`DEFAULT_LINES`]: Lines queried when no selection is given
//!
//! # Colour Scheme
//! Colours follow the TfL brand palette. Codes the registry does not know render on a neutral
//! grey so a new line added upstream still shows up.

use colored::Color;

/// Colour used for line codes missing from the registry
pub const UNKNOWN_LINE_COLOUR: Color = rgb(0x80, 0x80, 0x80);

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::TrueColor { r, g, b }
}

/// A line known to the registry. Variant order matches the rows of [`LINES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    Bakerloo,
    Central,
    Circle,
    District,
    HammersmithCity,
    Jubilee,
    Metropolitan,
    Northern,
    Piccadilly,
    Victoria,
    WaterlooCity,
    Dlr,
    Overground,
    Tram,
}

/// Registry row for a single line
#[derive(Debug, Clone, Copy)]
pub struct LineInfo {
    pub line: Line,
    /// Identifier used by the TfL API
    pub code: &'static str,
    pub name: &'static str,
    pub colour: Color,
}

pub static LINES: &[LineInfo] = &[
    LineInfo {
        line: Line::Bakerloo,
        code: "bakerloo",
        name: "Bakerloo",
        colour: rgb(0xB3, 0x63, 0x05),
    },
    LineInfo {
        line: Line::Central,
        code: "central",
        name: "Central",
        colour: rgb(0xE3, 0x20, 0x17),
    },
    LineInfo {
        line: Line::Circle,
        code: "circle",
        name: "Circle",
        colour: rgb(0xFF, 0xD3, 0x00),
    },
    LineInfo {
        line: Line::District,
        code: "district",
        name: "District",
        colour: rgb(0x00, 0x78, 0x2A),
    },
    LineInfo {
        line: Line::HammersmithCity,
        code: "hammersmith-city",
        name: "Hammersmith & City",
        colour: rgb(0xF3, 0xA9, 0xBB),
    },
    LineInfo {
        line: Line::Jubilee,
        code: "jubilee",
        name: "Jubilee",
        colour: rgb(0xA0, 0xA5, 0xA9),
    },
    LineInfo {
        line: Line::Metropolitan,
        code: "metropolitan",
        name: "Metropolitan",
        colour: rgb(0x9B, 0x00, 0x56),
    },
    LineInfo {
        line: Line::Northern,
        code: "northern",
        name: "Northern",
        colour: rgb(0x00, 0x00, 0x00),
    },
    LineInfo {
        line: Line::Piccadilly,
        code: "piccadilly",
        name: "Piccadilly",
        colour: rgb(0x00, 0x36, 0x88),
    },
    LineInfo {
        line: Line::Victoria,
        code: "victoria",
        name: "Victoria",
        colour: rgb(0x00, 0x98, 0xD4),
    },
    LineInfo {
        line: Line::WaterlooCity,
        code: "waterloo-city",
        name: "Waterloo & City",
        colour: rgb(0x95, 0xCD, 0xBA),
    },
    LineInfo {
        line: Line::Dlr,
        code: "dlr",
        name: "DLR",
        colour: rgb(0x00, 0xA4, 0xA7),
    },
    LineInfo {
        line: Line::Overground,
        code: "overground",
        name: "London Overground",
        colour: rgb(0xEE, 0x7C, 0x0E),
    },
    LineInfo {
        line: Line::Tram,
        code: "tram",
        name: "Tram",
        colour: rgb(0x84, 0xB8, 0x17),
    },
];

/// Lines queried when the user does not pick any
pub const DEFAULT_LINES: &[Line] = &[
    Line::Bakerloo,
    Line::Central,
    Line::Circle,
    Line::District,
    Line::HammersmithCity,
    Line::Jubilee,
    Line::Metropolitan,
    Line::Northern,
    Line::Piccadilly,
    Line::Victoria,
    Line::WaterlooCity,
    Line::Dlr,
];

impl Line {
    /// Look up a line by its API code (case-insensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        LINES
            .iter()
            .find(|info| info.code.eq_ignore_ascii_case(code))
            .map(|info| info.line)
    }

    pub fn info(self) -> &'static LineInfo {
        // LINES rows are in variant order
        &LINES[self as usize]
    }

    pub fn code(self) -> &'static str {
        self.info().code
    }

    /// Canonical display name, used when the API sends none
    pub fn display_name(self) -> &'static str {
        self.info().name
    }

    pub fn colour(self) -> Color {
        self.info().colour
    }
}

/// Background colour for a line code. Total: unknown codes get [`UNKNOWN_LINE_COLOUR`].
pub fn colour_for(code: &str) -> Color {
    Line::from_code(code)
        .map(Line::colour)
        .unwrap_or(UNKNOWN_LINE_COLOUR)
}

/// Comma-joined API codes of [`DEFAULT_LINES`]
pub fn default_line_codes() -> String {
    DEFAULT_LINES
        .iter()
        .map(|line| line.code())
        .collect::<Vec<_>>()
        .join(",")
}
