use crate::domain::model::{CategoryBreakdown, Lead};

#[derive(Debug, Clone, PartialEq)]
pub struct LeadStats {
    pub breakdown: CategoryBreakdown,
    pub with_email: usize,
    pub mean_distance: f64,
    pub closest: Lead,
    pub farthest: Lead,
}

impl LeadStats {
    pub fn total(&self) -> usize {
        self.breakdown.total()
    }

    /// Returns `None` for an empty batch. On equal distances the earliest
    /// lead wins for both closest and farthest.
    pub fn compute(leads: &[Lead]) -> Option<Self> {
        let first = leads.first()?;

        let mut closest = first;
        let mut farthest = first;
        let mut distance_sum: u64 = 0;
        for lead in leads {
            if lead.distance_miles < closest.distance_miles {
                closest = lead;
            }
            if lead.distance_miles > farthest.distance_miles {
                farthest = lead;
            }
            distance_sum += u64::from(lead.distance_miles);
        }

        Some(Self {
            breakdown: CategoryBreakdown::from_leads(leads),
            with_email: leads.iter().filter(|lead| lead.has_email()).count(),
            mean_distance: distance_sum as f64 / leads.len() as f64,
            closest: closest.clone(),
            farthest: farthest.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample::sample_leads;

    #[test]
    fn test_sample_statistics() {
        let stats = LeadStats::compute(&sample_leads()).unwrap();
        assert_eq!(stats.total(), 5);
        assert_eq!(stats.with_email, 3);
        assert_eq!(stats.breakdown.hot, 3);
        assert!((stats.mean_distance - 55.0).abs() < f64::EPSILON);
        assert_eq!(stats.closest.distance_miles, 22);
        assert_eq!(stats.closest.name, "Lisa Brown");
        assert_eq!(stats.farthest.distance_miles, 92);
        assert_eq!(stats.farthest.name, "Mike Davis");
    }

    #[test]
    fn test_empty_has_no_statistics() {
        assert!(LeadStats::compute(&[]).is_none());
    }

    #[test]
    fn test_ties_keep_first_lead() {
        let mut leads = sample_leads();
        for lead in &mut leads {
            lead.distance_miles = 40;
        }
        let stats = LeadStats::compute(&leads).unwrap();
        assert_eq!(stats.closest.name, "John Smith");
        assert_eq!(stats.farthest.name, "John Smith");
        assert!((stats.mean_distance - 40.0).abs() < f64::EPSILON);
    }
}
