//! `LINESTRING` text ⇄ [`Polyline`].
//!
//! WKT stores each vertex as `lon lat`; every function here flips to and
//! from the `(lat, lon)` order of [`GeoPoint`].
//!
//! Two parsers share the same tokenizer:
//!
//! - [`parse_wkt`] is lenient.  A missing keyword or parenthesis is ignored
//!   and an unparseable number becomes `NaN`.  This is what the geometry
//!   operations use, so they never fail on odd input.
//! - [`parse_wkt_strict`] (and `Wkt::from_str`) reports the first problem as
//!   a [`WktError`].  Use it where text enters the system from outside.

use std::fmt;
use std::str::FromStr;

use dv_core::{GeoPoint, Polyline};

use crate::{WktError, WktResult};

const KEYWORD: &str = "LINESTRING";

// ── Tokenizer ─────────────────────────────────────────────────────────────────

/// Strip the keyword if present (any case).
fn strip_keyword(s: &str) -> Option<&str> {
    let head = s.get(..KEYWORD.len())?;
    head.eq_ignore_ascii_case(KEYWORD).then(|| &s[KEYWORD.len()..])
}

/// The text between the parentheses, tolerating either one being absent.
fn lenient_body(wkt: &str) -> &str {
    let s = wkt.trim();
    let s = strip_keyword(s).unwrap_or(s).trim_start();
    let s = s.strip_prefix('(').unwrap_or(s);
    s.strip_suffix(')').unwrap_or(s)
}

/// Trimmed `lon lat` tokens of a linestring, in order.
///
/// `LINESTRING()` (or an all-whitespace body) yields nothing.
pub fn coordinate_tokens(wkt: &str) -> impl Iterator<Item = &str> {
    let body = lenient_body(wkt);
    let empty = body.trim().is_empty();
    body.split(',')
        .map(str::trim)
        .filter(move |_| !empty)
}

/// Parse one `lon lat` token leniently.  Missing or malformed numbers
/// become `NaN`.
pub fn parse_token(token: &str) -> GeoPoint {
    let mut parts = token.split_whitespace();
    let lon = lenient_f64(parts.next());
    let lat = lenient_f64(parts.next());
    GeoPoint::new(lat, lon)
}

#[inline]
fn lenient_f64(s: Option<&str>) -> f64 {
    s.and_then(|s| s.parse().ok()).unwrap_or(f64::NAN)
}

// ── Lenient codec ─────────────────────────────────────────────────────────────

/// Parse a `LINESTRING(...)` into `(lat, lon)` points.  Never fails.
pub fn parse_wkt(wkt: &str) -> Polyline {
    coordinate_tokens(wkt).map(parse_token).collect()
}

/// Serialize points as `LINESTRING(lon lat,lon lat,...)`.
///
/// `f64`'s `Display` is the shortest text that parses back to the same
/// value, so `parse_wkt(&to_wkt(p)) == p` for finite coordinates.
pub fn to_wkt(points: &[GeoPoint]) -> String {
    let mut out = String::with_capacity(KEYWORD.len() + 2 + points.len() * 24);
    out.push_str(KEYWORD);
    out.push('(');
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_vertex(&mut out, *p);
    }
    out.push(')');
    out
}

/// Rebuild a linestring from `lon lat` tokens.  Number text is copied
/// verbatim; whitespace inside a token collapses to a single space.
pub fn tokens_to_wkt<'a>(tokens: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::from(KEYWORD);
    out.push('(');
    for (i, t) in tokens.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        for (j, part) in t.split_whitespace().enumerate() {
            if j > 0 {
                out.push(' ');
            }
            out.push_str(part);
        }
    }
    out.push(')');
    out
}

fn push_vertex(out: &mut String, p: GeoPoint) {
    use std::fmt::Write;
    // Writing into a String cannot fail.
    let _ = write!(out, "{} {}", p.lon, p.lat);
}

// ── Strict parser ─────────────────────────────────────────────────────────────

/// Parse a `LINESTRING(...)`, rejecting anything the lenient parser would
/// have papered over.  Numbers must be finite.
pub fn parse_wkt_strict(wkt: &str) -> WktResult<Polyline> {
    let s = wkt.trim();
    let s = strip_keyword(s).ok_or(WktError::MissingKeyword)?.trim_start();
    let s = s.strip_prefix('(').ok_or(WktError::MissingOpenParen)?;
    let body = s.strip_suffix(')').ok_or(WktError::MissingCloseParen)?;

    if body.trim().is_empty() {
        return Ok(Polyline::empty());
    }

    body.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(index, token)| strict_token(index, token))
        .collect()
}

fn strict_token(index: usize, token: &str) -> WktResult<GeoPoint> {
    let mut parts = token.split_whitespace();
    let (Some(lon), Some(lat), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(WktError::BadVertex { index, token: token.to_string() });
    };
    Ok(GeoPoint::new(strict_f64(index, lat)?, strict_f64(index, lon)?))
}

fn strict_f64(index: usize, s: &str) -> WktResult<f64> {
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(WktError::BadNumber { index, text: s.to_string() }),
    }
}

// ── Wkt newtype ───────────────────────────────────────────────────────────────

/// A validated linestring.  `FromStr` is strict, `Display` is [`to_wkt`].
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Wkt(pub Polyline);

impl FromStr for Wkt {
    type Err = WktError;

    fn from_str(s: &str) -> WktResult<Self> {
        parse_wkt_strict(s).map(Wkt)
    }
}

impl fmt::Display for Wkt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_wkt(&self.0))
    }
}

impl From<Polyline> for Wkt {
    fn from(line: Polyline) -> Self {
        Wkt(line)
    }
}
