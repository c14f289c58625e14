//! Admin dashboard payloads (`admin/*`).

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// Response of `GET admin/stats/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DashboardStats {
    pub overview: Overview,
    pub recent_stats: RecentStats,
    #[serde(default)]
    pub category_stats: Vec<CategoryStat>,
    #[serde(default)]
    pub popular_events: Vec<PopularEvent>,
    #[serde(default)]
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Overview {
    pub total_events: i64,
    pub active_events: i64,
    pub total_tickets_sold: i64,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub total_revenue: f64,
}

impl Overview {
    /// Share of active events in percent, `None` when there are no events
    pub fn active_ratio(&self) -> Option<f64> {
        if self.total_events == 0 {
            None
        } else {
            Some(self.active_events as f64 / self.total_events as f64 * 100.0)
        }
    }
}

/// Figures for the last 30 days
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RecentStats {
    pub events_last_30_days: i64,
    pub tickets_last_30_days: i64,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub revenue_last_30_days: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryStat {
    pub name: String,
    pub event_count: i64,
    #[serde(default)]
    pub ticket_count: i64,
}

/// One month of revenue, month formatted `YYYY-MM`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyRevenue {
    pub month: String,
    #[serde(deserialize_with = "crate::decimal::deserialize")]
    pub revenue: f64,
}

/// An event in the popular-events table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PopularEvent {
    #[serde(flatten)]
    pub event: Event,
    #[serde(default)]
    pub ticket_count: i64,
}

impl PopularEvent {
    /// Revenue estimate shown in the table (sold count × unit price)
    pub fn revenue(&self) -> f64 {
        self.ticket_count as f64 * self.event.price
    }
}

/// Row of `GET admin/users_management/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManagedUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub date_joined: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub ticket_count: i64,
    #[serde(default, deserialize_with = "crate::decimal::deserialize")]
    pub total_spent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_deserialization() {
        let json = r#"{
            "overview": {"total_events": 8, "active_events": 6, "total_tickets_sold": 120, "total_revenue": 36000.0},
            "recent_stats": {"events_last_30_days": 2, "tickets_last_30_days": 40, "revenue_last_30_days": 12000.0},
            "category_stats": [{"name": "Konser", "event_count": 5, "ticket_count": 90}],
            "popular_events": [
                {"id": 1, "title": "Rock", "date": "2024-08-01", "price": "300.00", "ticket_count": 50}
            ],
            "monthly_revenue": [{"month": "2024-07", "revenue": 9000.0}]
        }"#;
        let stats: DashboardStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.overview.active_ratio(), Some(75.0));
        assert_eq!(stats.popular_events[0].ticket_count, 50);
        assert_eq!(stats.popular_events[0].revenue(), 15000.0);
        assert_eq!(stats.monthly_revenue[0].month, "2024-07");
    }

    #[test]
    fn test_active_ratio_without_events() {
        assert_eq!(Overview::default().active_ratio(), None);
    }
}
