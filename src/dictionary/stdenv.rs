//! The standard tables.
//!
//! Each binary connective has a code, and each code is written with the [canonical order](crate::structures::assignment) of assignments.

/// Each binary connective, by code.
pub const TRUTH_TABLE: [(&str, &str); 16] = [
    ("opq", "ffff"),
    ("xpq", "ffft"),
    ("mpq", "fftf"),
    ("fpq", "fftt"),
    ("lpq", "ftff"),
    ("gpq", "ftft"),
    ("jpq", "fttf"),
    ("dpq", "fttt"),
    ("kpq", "tfff"),
    ("epq", "tfft"),
    ("hpq", "tftf"),
    ("cpq", "tftt"),
    ("llpq", "ttff"),
    ("bpq", "ttft"),
    ("apq", "tttf"),
    ("vpq", "tttt"),
];

/// Friendly names for codes of the [TRUTH_TABLE].
pub const ALIASES: [(&str, &str); 16] = [
    ("false", "opq"),
    ("true", "vpq"),
    ("nor", "xpq"),
    ("xor", "jpq"),
    ("nand", "dpq"),
    ("and", "kpq"),
    ("xnor", "epq"),
    ("or", "apq"),
    ("p", "lpq"),
    ("q", "hpq"),
    ("pneg", "fpq"),
    ("qneg", "gpq"),
    ("cnon", "mpq"),
    ("mnon", "lpq"),
    ("minpl", "cpq"),
    ("cinpl", "bpq"),
];

/// Friendly names for the unary connectives and the constants, written as literal truth vectors.
pub const LITERAL_ALIASES: [(&str, &str); 4] = [
    ("lf", "ff"),
    ("not", "ft"),
    ("id", "tf"),
    ("lt", "tt"),
];
