//! Admin dashboard: overview statistics with charts, plus management
//! listings for events, users and tickets.

use dioxus::prelude::*;
use eventticket_wire::{DashboardStats, Event, ManagedUser, Ticket};

use crate::app::components::{DoughnutView, Layout, LineChartView, RequireAuth};
use crate::app::session::use_session;
use crate::charts::{category_series, revenue_series};
use crate::error::{messages, StoreError};
use crate::format;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Events,
    Users,
    Tickets,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Overview, Tab::Events, Tab::Users, Tab::Tickets];

    fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Genel Bakış",
            Tab::Events => "Etkinlikler",
            Tab::Users => "Kullanıcılar",
            Tab::Tickets => "Biletler",
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        Layout {
            title: "Admin Dashboard".to_string(),
            nav_active: "admin".to_string(),
            RequireAuth {
                DashboardBody {}
            }
        }
    }
}

#[component]
fn DashboardBody() -> Element {
    let mut active = use_signal(|| Tab::Overview);

    let tabs: Vec<(Tab, &'static str, &'static str)> = Tab::ALL
        .iter()
        .map(|tab| {
            let class = if active() == *tab { "btn btn-primary" } else { "btn btn-outline" };
            (*tab, tab.label(), class)
        })
        .collect();

    rsx! {
        div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",
            div { class: "mb-6",
                h1 { class: "text-3xl font-bold", "Admin Dashboard" }
                p { class: "text-gray-500", "Etkinlik yönetim sistemi" }
            }

            div { class: "flex flex-wrap gap-2 mb-8",
                for (tab, label, class) in tabs {
                    button { key: "{label}", class: "{class}", onclick: move |_| active.set(tab), "{label}" }
                }
            }

            {match active() {
                Tab::Overview => rsx! { OverviewTab {} },
                Tab::Events => rsx! { EventsTab {} },
                Tab::Users => rsx! { UsersTab {} },
                Tab::Tickets => rsx! { TicketsTab {} },
            }}
        }
    }
}

#[component]
fn OverviewTab() -> Element {
    let ctx = use_session();
    let stats = use_resource(move || async move { ctx.api().admin_stats().await });

    let content = match &*stats.read() {
        None => rsx! {
            div { class: "card p-6 text-center text-gray-500", aria_busy: "true", "Yükleniyor..." }
        },
        Some(Err(e)) => {
            tracing::warn!("Failed to load dashboard stats: {}", e);
            rsx! {
                div { class: "alert alert-danger", {messages::STATS_FAILED} }
            }
        }
        Some(Ok(loaded)) => rsx! {
            OverviewContent { stats: loaded.clone() }
        },
    };
    content
}

#[component]
fn OverviewContent(stats: DashboardStats) -> Element {
    let overview = &stats.overview;
    let recent = &stats.recent_stats;
    let ratio = overview
        .active_ratio()
        .map(|r| format!("{:.1}% oran", r))
        .unwrap_or_else(|| "-".to_string());
    let revenue = format::price(overview.total_revenue);
    let recent_revenue = format::price(recent.revenue_last_30_days);
    let monthly = revenue_series(&stats.monthly_revenue);
    let categories = category_series(&stats.category_stats);

    let popular: Vec<(String, String, String, i64, String, String)> = stats
        .popular_events
        .iter()
        .map(|p| {
            (
                p.event.title.clone(),
                p.event.location.clone(),
                p.event.category_name().to_string(),
                p.ticket_count,
                format::price(p.revenue()),
                format::date(&p.event.date),
            )
        })
        .collect();

    rsx! {
        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8",
            StatCard { icon: "📅", value: overview.total_events.to_string(), label: "Toplam Etkinlik", hint: format!("+{} son 30 gün", recent.events_last_30_days) }
            StatCard { icon: "🎫", value: overview.total_tickets_sold.to_string(), label: "Satılan Bilet", hint: format!("+{} son 30 gün", recent.tickets_last_30_days) }
            StatCard { icon: "₺", value: revenue, label: "Toplam Gelir", hint: format!("+{} son 30 gün", recent_revenue) }
            StatCard { icon: "✅", value: overview.active_events.to_string(), label: "Aktif Etkinlik", hint: ratio }
        }

        div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6 mb-8",
            div { class: "card p-6 lg:col-span-2",
                h5 { class: "font-semibold mb-1", "Aylık Gelir Grafiği" }
                p { class: "text-xs text-gray-500 mb-4", "Son 12 Ay Gelir Trendi" }
                LineChartView { series: monthly, empty_text: "Henüz gelir verisi yok.".to_string() }
            }
            div { class: "card p-6",
                h5 { class: "font-semibold mb-4", "Kategori Dağılımı" }
                DoughnutView { items: categories, empty_text: "Henüz kategori verisi yok.".to_string() }
            }
        }

        div { class: "card p-6 overflow-x-auto",
            h5 { class: "font-semibold mb-4", "En Popüler Etkinlikler" }
            table { class: "w-full text-sm",
                thead {
                    tr { class: "text-left text-gray-500 border-b",
                        th { class: "py-2", "Etkinlik" }
                        th { class: "py-2", "Kategori" }
                        th { class: "py-2", "Satılan Bilet" }
                        th { class: "py-2", "Gelir" }
                        th { class: "py-2", "Tarih" }
                    }
                }
                tbody {
                    for (i, (title, location, category, sold, revenue, date)) in popular.into_iter().enumerate() {
                        tr { key: "{i}", class: "border-b last:border-0",
                            td { class: "py-2",
                                strong { "{title}" }
                                br {}
                                small { class: "text-gray-500", "{location}" }
                            }
                            td { class: "py-2", span { class: "badge bg-indigo-100 text-indigo-700", "{category}" } }
                            td { class: "py-2", "{sold}" }
                            td { class: "py-2", "{revenue}" }
                            td { class: "py-2", "{date}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(icon: &'static str, value: String, label: &'static str, hint: String) -> Element {
    rsx! {
        div { class: "card p-6",
            div { class: "text-2xl mb-2", "{icon}" }
            h3 { class: "text-2xl font-bold", "{value}" }
            p { class: "text-gray-600", "{label}" }
            small { class: "text-green-600", "{hint}" }
        }
    }
}

type TableState = Option<Result<Vec<Vec<String>>, StoreError>>;

/// Table shell shared by the management tabs
#[component]
fn ManagementTable(
    title: &'static str,
    headers: Vec<&'static str>,
    loading_text: &'static str,
    state: TableState,
) -> Element {
    let columns = headers.len();
    let body = match state {
        None => rsx! {
            tr { td { colspan: "{columns}", class: "py-4 text-center text-gray-500", "{loading_text}" } }
        },
        Some(Err(e)) => {
            let msg = e.user_message(messages::GENERIC);
            rsx! {
                tr { td { colspan: "{columns}", class: "py-4 text-center text-red-600", "{msg}" } }
            }
        }
        Some(Ok(rows)) if rows.is_empty() => rsx! {
            tr { td { colspan: "{columns}", class: "py-4 text-center text-gray-500", "Kayıt bulunamadı." } }
        },
        Some(Ok(rows)) => rsx! {
            for (i, row) in rows.into_iter().enumerate() {
                tr { key: "{i}", class: "border-b last:border-0",
                    for cell in row {
                        td { class: "py-2 pr-4", "{cell}" }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "card p-6 overflow-x-auto",
            h5 { class: "font-semibold mb-4", "{title}" }
            table { class: "w-full text-sm",
                thead {
                    tr { class: "text-left text-gray-500 border-b",
                        for header in headers.iter() {
                            th { class: "py-2 pr-4", "{header}" }
                        }
                    }
                }
                tbody { {body} }
            }
        }
    }
}

fn event_row(event: &Event) -> Vec<String> {
    vec![
        event.title.clone(),
        event.category_name().to_string(),
        format::date(&event.date),
        format::price(event.price),
        if event.is_active { "Aktif" } else { "Pasif" }.to_string(),
        format!("{} / {}", event.remaining_tickets, event.available_tickets),
    ]
}

fn user_row(user: &ManagedUser) -> Vec<String> {
    vec![
        format!("{} {} (@{})", user.first_name, user.last_name, user.username)
            .trim()
            .to_string(),
        user.email.clone(),
        format::date(&user.date_joined),
        user.ticket_count.to_string(),
        format::price(user.total_spent),
        if user.is_active { "Aktif" } else { "Pasif" }.to_string(),
    ]
}

fn ticket_row(ticket: &Ticket) -> Vec<String> {
    vec![
        ticket.ticket_number.clone(),
        ticket.event.title.clone(),
        ticket.quantity.to_string(),
        format::price(ticket.total_price),
        ticket.status.label().to_string(),
        format::datetime(&ticket.purchase_date),
    ]
}

#[component]
fn EventsTab() -> Element {
    let ctx = use_session();
    let events = use_resource(move || async move { ctx.api().admin_events().await });
    let state: TableState = events
        .read()
        .as_ref()
        .map(|r| r.as_ref().map(|list| list.iter().map(event_row).collect()).map_err(Clone::clone));

    rsx! {
        ManagementTable {
            title: "Etkinlik Yönetimi",
            headers: vec!["Etkinlik", "Kategori", "Tarih", "Fiyat", "Durum", "Kalan / Kapasite"],
            loading_text: "Etkinlik verileri yükleniyor...",
            state,
        }
    }
}

#[component]
fn UsersTab() -> Element {
    let ctx = use_session();
    let users = use_resource(move || async move { ctx.api().admin_users().await });
    let state: TableState = users
        .read()
        .as_ref()
        .map(|r| r.as_ref().map(|list| list.iter().map(user_row).collect()).map_err(Clone::clone));

    rsx! {
        ManagementTable {
            title: "Kullanıcı Yönetimi",
            headers: vec!["Kullanıcı", "E-posta", "Kayıt Tarihi", "Bilet Sayısı", "Toplam Harcama", "Durum"],
            loading_text: "Kullanıcı verileri yükleniyor...",
            state,
        }
    }
}

#[component]
fn TicketsTab() -> Element {
    let ctx = use_session();
    let tickets = use_resource(move || async move { ctx.api().admin_tickets().await });
    let state: TableState = tickets
        .read()
        .as_ref()
        .map(|r| r.as_ref().map(|list| list.iter().map(ticket_row).collect()).map_err(Clone::clone));

    rsx! {
        ManagementTable {
            title: "Bilet Yönetimi",
            headers: vec!["Bilet No", "Etkinlik", "Miktar", "Tutar", "Durum", "Satın Alma Tarihi"],
            loading_text: "Bilet verileri yükleniyor...",
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_formats_spend_and_status() {
        let user: ManagedUser = serde_json::from_str(
            r#"{"id":3,"username":"elif","email":"elif@example.com","first_name":"Elif","last_name":"Demir",
                "date_joined":"2024-05-02T09:00:00Z","is_active":false,"ticket_count":2,"total_spent":"450.00"}"#,
        )
        .unwrap();
        let row = user_row(&user);
        assert_eq!(row[0], "Elif Demir (@elif)");
        assert_eq!(row[2], "02.05.2024");
        assert_eq!(row[4], "₺450,00");
        assert_eq!(row[5], "Pasif");
    }

    #[test]
    fn test_tabs_in_display_order() {
        let labels: Vec<&str> = Tab::ALL.iter().map(Tab::label).collect();
        assert_eq!(labels, vec!["Genel Bakış", "Etkinlikler", "Kullanıcılar", "Biletler"]);
    }
}
