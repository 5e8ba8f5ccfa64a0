use crate::domain::model::{Lead, LeadCategory};

#[allow(clippy::too_many_arguments)]
fn lead(
    name: &str,
    phone: &str,
    email: &str,
    address: &str,
    category: LeadCategory,
    reason: &str,
    source: &str,
    posted_date: &str,
    distance_miles: u32,
) -> Lead {
    Lead {
        category,
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        distance_miles,
        reason: reason.to_string(),
        source: source.to_string(),
        posted_date: posted_date.to_string(),
    }
}

/// The fixed demo batch loaded in place of a real scrape.
pub fn sample_leads() -> Vec<Lead> {
    vec![
        lead(
            "John Smith",
            "(903) 555-0101",
            "john.smith@email.com",
            "123 Main St, Tyler, TX 75701",
            LeadCategory::Hot,
            "Posted \"need drywall repair ASAP\" 2 days ago",
            "Craigslist",
            "2026-02-15",
            35,
        ),
        lead(
            "Sarah Johnson",
            "(903) 555-0202",
            "sarah@propertymgmt.com",
            "456 Oak Ave, Longview, TX 75606",
            LeadCategory::Hot,
            "Property manager for 12-unit apartment complex",
            "Google Maps",
            "2026-02-17",
            58,
        ),
        lead(
            "Mike Davis",
            "(903) 555-0303",
            "",
            "789 Elm St, Beaumont, TX 77701",
            LeadCategory::Warm,
            "Posted \"fence repair needed\" 10 days ago",
            "Craigslist",
            "2026-02-07",
            92,
        ),
        lead(
            "Property Management LLC",
            "(903) 555-0404",
            "info@propmgmt.com",
            "321 Commerce Dr, Texarkana, TX 75501",
            LeadCategory::Hot,
            "Manages 25 rental properties in area",
            "Google Maps",
            "2026-02-17",
            68,
        ),
        lead(
            "Lisa Brown",
            "(903) 555-0505",
            "",
            "555 Main St, Gladewater, TX 75647",
            LeadCategory::Cold,
            "Vague repair mention, no clear timeline",
            "Craigslist",
            "2026-01-20",
            22,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::CategoryBreakdown;

    #[test]
    fn test_five_samples_with_fixed_distribution() {
        let leads = sample_leads();
        assert_eq!(leads.len(), 5);
        assert_eq!(
            CategoryBreakdown::from_leads(&leads),
            CategoryBreakdown {
                hot: 3,
                warm: 1,
                cold: 1
            }
        );
    }

    #[test]
    fn test_samples_are_deterministic() {
        assert_eq!(sample_leads(), sample_leads());
    }

    #[test]
    fn test_two_samples_have_no_email() {
        let without_email: Vec<String> = sample_leads()
            .into_iter()
            .filter(|l| !l.has_email())
            .map(|l| l.name)
            .collect();
        assert_eq!(without_email, vec!["Mike Davis", "Lisa Brown"]);
    }
}
