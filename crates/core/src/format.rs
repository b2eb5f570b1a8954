// SPDX-License-Identifier: MIT

//!
//! Human readable YBP labels
//!

use crate::{LabelFormat, Ybp, ybp_to_ce};

/// Pick a label format from the magnitude of the value alone
fn detect_label_format(ybp: Ybp) -> LabelFormat {
    let abs_ybp = ybp.abs();
    if abs_ybp >= 1_000_000_000.0 {
        LabelFormat::Bya
    } else if abs_ybp >= 1_000_000.0 {
        LabelFormat::Mya
    } else if abs_ybp >= 50_000.0 {
        LabelFormat::Kya
    } else {
        LabelFormat::BceCe
    }
}

/// Round a calendar year to a whole number
fn whole_year(ce: f64) -> i64 {
    ce.round() as i64
}

/// Format a YBP value for an axis or label (e.g. `4.5 Bya`, `66 Mya`,
/// `300 kya`, `500 BCE`, `1066 CE`).  If no format is given one is chosen from
/// the value's magnitude.
pub fn format_ybp(ybp: Ybp, format: Option<LabelFormat>) -> String {
    let abs_ybp = ybp.abs();
    let format = format.unwrap_or_else(|| detect_label_format(ybp));

    match format {
        LabelFormat::Bya => {
            let value = abs_ybp / 1_000_000_000.0;
            if value >= 10.0 {
                format!("{value:.0} Bya")
            } else {
                format!("{value:.1} Bya")
            }
        }
        LabelFormat::Mya => {
            let value = abs_ybp / 1_000_000.0;
            if value >= 10.0 {
                format!("{value:.0} Mya")
            } else {
                format!("{value:.1} Mya")
            }
        }
        LabelFormat::Kya => {
            let value = abs_ybp / 1_000.0;
            format!("{value:.0} kya")
        }
        LabelFormat::Ce | LabelFormat::Year | LabelFormat::BceCe => {
            let ce = ybp_to_ce(ybp);
            let era = if ce < 0.0 { "BCE" } else { "CE" };
            format!("{} {era}", whole_year(ce).abs())
        }
    }
}

/// A compact label (e.g. `13.8B`, `66M`, `12k`, `500BC`, `1990`)
pub fn format_ybp_short(ybp: Ybp) -> String {
    let abs_ybp = ybp.abs();
    if abs_ybp >= 1_000_000_000.0 {
        return format!("{:.1}B", abs_ybp / 1_000_000_000.0);
    }
    if abs_ybp >= 1_000_000.0 {
        return format!("{:.0}M", abs_ybp / 1_000_000.0);
    }
    if abs_ybp >= 1_000.0 {
        return format!("{:.0}k", abs_ybp / 1_000.0);
    }
    let ce = ybp_to_ce(ybp);
    let suffix = if ce < 0.0 { "BC" } else { "" };
    format!("{}{suffix}", whole_year(ce).abs())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn auto_detected() {
        assert_eq!(format_ybp(-13_800_000_000.0, None), "14 Bya");
        assert_eq!(format_ybp(-4_540_000_000.0, None), "4.5 Bya");
        assert_eq!(format_ybp(-66_000_000.0, None), "66 Mya");
        assert_eq!(format_ybp(-2_600_000.0, None), "2.6 Mya");
        assert_eq!(format_ybp(-300_000.0, None), "300 kya");
        assert_eq!(format_ybp(-2_526.0, None), "500 BCE");
        assert_eq!(format_ybp(-960.0, None), "1066 CE");
    }

    #[test]
    fn explicit() {
        assert_eq!(format_ybp(-12_000.0, Some(LabelFormat::Kya)), "12 kya");
        assert_eq!(format_ybp(-36.0, Some(LabelFormat::Ce)), "1990 CE");
        assert_eq!(format_ybp(24.0, Some(LabelFormat::Year)), "2050 CE");
        assert_eq!(format_ybp(-3_026.0, Some(LabelFormat::Year)), "1000 BCE");
    }

    #[test]
    fn short() {
        assert_eq!(format_ybp_short(-13_800_000_000.0), "13.8B");
        assert_eq!(format_ybp_short(-66_000_000.0), "66M");
        assert_eq!(format_ybp_short(-12_000.0), "12k");
        assert_eq!(format_ybp_short(-36.0), "1990");
        assert_eq!(format_ybp_short(-2_526.0), "3k");
        assert_eq!(format_ybp_short(-500.0), "1526");
    }
}
