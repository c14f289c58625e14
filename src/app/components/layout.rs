//! Layout component wrapping all pages with the navbar and footer.

use dioxus::prelude::*;

use super::footer::Footer;
use super::nav::Nav;

/// CSS styles for the application (extends Tailwind).
const CUSTOM_STYLES: &str = r#"
.card { background: #fff; border-radius: 0.75rem; box-shadow: 0 1px 3px rgba(0,0,0,.08); }
.btn { display: inline-flex; align-items: center; justify-content: center; gap: .4rem; padding: .5rem 1rem; border-radius: .5rem; font-weight: 500; }
.btn:disabled { opacity: .5; cursor: not-allowed; }
.btn-primary { background: #667eea; color: #fff; }
.btn-primary:hover:not(:disabled) { background: #5a67d8; }
.btn-outline { border: 1px solid #667eea; color: #667eea; }
.btn-secondary { background: #e5e7eb; color: #374151; }
.input { width: 100%; border: 1px solid #d1d5db; border-radius: .5rem; padding: .5rem .75rem; }
.alert { border-radius: .5rem; padding: .75rem 1rem; }
.alert-danger { background: #fee2e2; color: #991b1b; }
.alert-warning { background: #fef3c7; color: #92400e; }
.alert-info { background: #dbeafe; color: #1e40af; }
.alert-success { background: #dcfce7; color: #166534; }
.badge { display: inline-block; padding: .15rem .5rem; border-radius: 9999px; font-size: .75rem; font-weight: 600; }
.badge-ok { background: #16a34a; color: #fff; }
.badge-err { background: #dc2626; color: #fff; }
.badge-muted { background: #9ca3af; color: #fff; }
.modal-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,.5); display: flex; align-items: center; justify-content: center; z-index: 50; padding: 1rem; }
.modal-panel { background: #fff; border-radius: .75rem; max-height: 90vh; overflow-y: auto; width: 100%; }
.seat { width: 2rem; height: 2rem; margin: .1rem; border-radius: .35rem .35rem .6rem .6rem; font-size: .7rem; color: #fff; }
.seat-vip { background: #d97706; }
.seat-premium { background: #7c3aed; }
.seat-standard { background: #2563eb; }
.seat-selected { background: #16a34a; }
.seat-occupied { background: #d1d5db; color: #6b7280; cursor: not-allowed; }
.stage { background: linear-gradient(90deg,#667eea,#764ba2); color: #fff; text-align: center; border-radius: .5rem; padding: .35rem; }
.hero { background: linear-gradient(135deg,#667eea 0%,#764ba2 100%); color: #fff; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Active navigation item ID
    pub nav_active: String,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let full_title = format!("{} - EventTicket", props.title);

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{full_title}" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Style { {CUSTOM_STYLES} }

        div { class: "min-h-screen flex flex-col bg-gray-50 text-gray-900",
            header {
                Nav { active: props.nav_active.clone() }
            }
            main { class: "flex-1",
                {props.children}
            }
            Footer {}
        }
    }
}
