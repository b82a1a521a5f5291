/// Raw numbers behind the ROI calculator. All values are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiInputs {
    pub visitors: f64,
    pub conversion_rate_percent: f64,
    pub value_per_lead: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiEstimate {
    pub leads: u64,
    pub revenue: f64,
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            visitors: 1000.0,
            conversion_rate_percent: 2.0,
            value_per_lead: 100.0,
        }
    }
}

/// Turns form text into a number. Anything that is not a finite,
/// non-negative number counts as 0.
pub fn coerce_number(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

impl RoiInputs {
    pub fn from_fields(visitors: &str, conversion_rate_percent: &str, value_per_lead: &str) -> Self {
        Self {
            visitors: coerce_number(visitors),
            conversion_rate_percent: coerce_number(conversion_rate_percent),
            value_per_lead: coerce_number(value_per_lead),
        }
    }

    pub fn estimate(&self) -> RoiEstimate {
        let leads = (self.visitors * self.conversion_rate_percent / 100.0).round();
        // `as` saturates, so absurd inputs cap instead of wrapping.
        let leads = leads as u64;
        RoiEstimate {
            leads,
            revenue: leads as f64 * self.value_per_lead,
        }
    }
}

/// Groups the digits of `value` in threes: 1234567 -> "1,234,567".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Dollar amount with grouped thousands; cents only when there are any.
pub fn format_usd(amount: f64) -> String {
    let cents = (amount.max(0.0) * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);
    if frac == 0 {
        format!("${}", group_thousands(whole))
    } else {
        format!("${}.{:02}", group_thousands(whole), frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_inputs_give_twenty_leads() {
        let estimate = RoiInputs::default().estimate();
        assert_eq!(estimate.leads, 20);
        assert_eq!(estimate.revenue, 2000.0);
    }

    #[test]
    fn zero_visitors_give_nothing() {
        let estimate = RoiInputs::from_fields("0", "2", "100").estimate();
        assert_eq!(estimate, RoiEstimate { leads: 0, revenue: 0.0 });
    }

    #[test]
    fn non_numeric_value_counts_as_zero() {
        let inputs = RoiInputs::from_fields("1000", "2", "lots");
        assert_eq!(inputs.value_per_lead, 0.0);
        let estimate = inputs.estimate();
        assert_eq!(estimate.leads, 20);
        assert_eq!(estimate.revenue, 0.0);
    }

    #[test]
    fn coercion_rejects_junk() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("  42 "), 42.0);
        assert_eq!(coerce_number("2.5"), 2.5);
        assert_eq!(coerce_number("-3"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
    }

    #[test]
    fn leads_round_half_up() {
        // 150 * 1% = 1.5
        assert_eq!(RoiInputs::from_fields("150", "1", "10").estimate().leads, 2);
        // 140 * 1% = 1.4
        assert_eq!(RoiInputs::from_fields("140", "1", "10").estimate().leads, 1);
    }

    #[test]
    fn fractional_lead_value_keeps_cents() {
        let estimate = RoiInputs::from_fields("1000", "2", "99.5").estimate();
        assert_eq!(estimate.revenue, 1990.0);
        assert_eq!(format_usd(RoiInputs::from_fields("100", "1", "12.25").estimate().revenue), "$12.25");
    }

    #[test]
    fn formats_money() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(2000.0), "$2,000");
        assert_eq!(format_usd(3745.0), "$3,745");
        assert_eq!(format_usd(1234567.5), "$1,234,567.50");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
    }
}
