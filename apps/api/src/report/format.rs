//! INR amount formatting shared by the catalog listing and reports.

const CRORE: f64 = 10_000_000.0;
const LAKH: f64 = 100_000.0;

/// Formats an annual INR amount as crores, lakhs or thousands:
/// `₹1.2Cr`, `₹6.0L`, `₹85K`.
pub fn format_salary(amount: u64) -> String {
    let amount = amount as f64;
    if amount >= CRORE {
        format!("₹{:.1}Cr", amount / CRORE)
    } else if amount >= LAKH {
        format!("₹{:.1}L", amount / LAKH)
    } else {
        format!("₹{:.0}K", amount / 1_000.0)
    }
}

/// Always in lakhs, one decimal (`₹25.0L`). Reports compare in this unit.
pub fn format_lakhs(amount: u64) -> String {
    format!("₹{:.1}L", amount as f64 / LAKH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_salary_units() {
        assert_eq!(format_salary(25_000_000), "₹2.5Cr");
        assert_eq!(format_salary(10_000_000), "₹1.0Cr");
        assert_eq!(format_salary(600_000), "₹6.0L");
        assert_eq!(format_salary(100_000), "₹1.0L");
        assert_eq!(format_salary(85_000), "₹85K");
        assert_eq!(format_salary(0), "₹0K");
    }

    #[test]
    fn test_format_lakhs_keeps_unit_for_large_amounts() {
        assert_eq!(format_lakhs(25_000_000), "₹250.0L");
        assert_eq!(format_lakhs(650_000), "₹6.5L");
    }
}
