//! Unit conversion utilities.
//!
//! Slide geometry is laid out in inches (the natural unit for a 13.333" × 7.5"
//! widescreen page) and written to DrawingML in English Metric Units.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;

/// Hundredths of a point, the unit of `sz` on DrawingML run properties.
pub const CENTIPOINTS_PER_PT: f64 = 100.0;

#[inline]
pub fn inches_to_emu(inches: f64) -> i64 {
    (inches * EMUS_PER_INCH as f64).round() as i64
}

#[inline]
pub fn emu_to_inches(emu: i64) -> f64 {
    emu as f64 / EMUS_PER_INCH as f64
}

#[inline]
pub fn pt_to_emu(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64).round() as i64
}

#[inline]
pub fn pt_to_centipoints(pt: f64) -> u32 {
    (pt * CENTIPOINTS_PER_PT).round() as u32
}

/// Angle in 60000ths of a degree, as used by `a:lin ang`.
#[inline]
pub fn degrees_to_ooxml_angle(degrees: f64) -> i64 {
    (degrees.rem_euclid(360.0) * 60_000.0).round() as i64
}

/// Percentage in 1000ths of a percent, as used by gradient stop positions.
#[inline]
pub fn fraction_to_ooxml_pct(fraction: f64) -> i64 {
    (fraction.clamp(0.0, 1.0) * 100_000.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widescreen_page_in_emu() {
        assert_eq!(inches_to_emu(7.5), 6_858_000);
        assert_eq!(inches_to_emu(13.333), 12_191_695);
        assert!((emu_to_inches(914_400) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_font_sizes() {
        assert_eq!(pt_to_centipoints(18.0), 1800);
        assert_eq!(pt_to_centipoints(10.5), 1050);
        assert_eq!(pt_to_emu(1.0), 12_700);
    }

    #[test]
    fn test_angles_and_percentages() {
        assert_eq!(degrees_to_ooxml_angle(90.0), 5_400_000);
        assert_eq!(degrees_to_ooxml_angle(-90.0), 16_200_000);
        assert_eq!(fraction_to_ooxml_pct(0.5), 50_000);
        assert_eq!(fraction_to_ooxml_pct(2.0), 100_000);
    }
}
