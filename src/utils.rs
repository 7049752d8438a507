/// Utility functions

const CARDINALS: [&str; 17] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW", "N",
];

/// Discretize a wind bearing (degrees clockwise from true north) onto the
/// 16-point compass rose.
///
/// The `x10 mod 3600 / 225` scaling keeps the arithmetic on whole tenths of
/// a degree; the 17th table entry absorbs rounding in the 348.75-360 band
/// back to "N".
pub fn wind_direction(deg: f64) -> &'static str {
    let index = ((deg * 10.0) % 3600.0 / 225.0).round() as usize;
    CARDINALS[index]
}
