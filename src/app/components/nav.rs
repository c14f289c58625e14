//! Navigation bar using Tailwind CSS.

use dioxus::prelude::*;

use crate::app::session::use_session;
use crate::app::Route;

#[derive(Props, Clone, PartialEq)]
pub struct NavProps {
    /// The currently active page ID (e.g., "home", "events")
    pub active: String,
}

/// Navigation bar with mobile toggle and the account menu.
#[component]
pub fn Nav(props: NavProps) -> Element {
    let mut ctx = use_session();
    let navigator = use_navigator();
    let mut menu_open = use_signal(|| false);
    let mut account_open = use_signal(|| false);

    let session = ctx.session.read().clone();
    let user = session.user.clone().filter(|_| session.is_authenticated());
    let is_staff = session.is_staff();
    let account = user.as_ref().map(|u| (u.initial(), u.username.clone()));

    let nav_link_class = |page: &str| {
        if props.active == page {
            "block px-3 py-2 rounded-md text-sm font-medium text-white bg-white/20"
        } else {
            "block px-3 py-2 rounded-md text-sm font-medium text-indigo-100 hover:text-white hover:bg-white/10"
        }
    };

    let mobile_menu_class = if menu_open() {
        "block lg:hidden"
    } else {
        "hidden lg:hidden"
    };

    let logout = move |_: MouseEvent| {
        ctx.sign_out();
        account_open.set(false);
        menu_open.set(false);
        navigator.push(Route::Home {});
    };

    rsx! {
        nav { class: "hero shadow",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center justify-between h-16",
                    // Brand
                    div { class: "flex items-center",
                        Link { class: "text-white font-bold text-xl", to: Route::Home {}, "🎫 EventTicket" }
                    }

                    // Desktop navigation
                    div { class: "hidden lg:flex items-center space-x-4",
                        Link { class: nav_link_class("home"), to: Route::Home {}, "Ana Sayfa" }
                        Link { class: nav_link_class("events"), to: Route::Events {}, "Etkinlikler" }
                        if is_staff {
                            Link { class: nav_link_class("admin"), to: Route::AdminDashboard {}, "Admin" }
                        }
                    }

                    div { class: "hidden lg:flex items-center space-x-2",
                        if let Some((initial, username)) = account.clone() {
                            div { class: "relative",
                                button {
                                    class: "flex items-center gap-2 text-white px-3 py-2 rounded-md hover:bg-white/10",
                                    r#type: "button",
                                    onclick: move |_| account_open.toggle(),
                                    span { class: "w-8 h-8 rounded-full bg-white text-indigo-600 font-bold flex items-center justify-center",
                                        "{initial}"
                                    }
                                    span { class: "text-sm", "{username}" }
                                }
                                if account_open() {
                                    div { class: "absolute right-0 mt-2 w-48 bg-white rounded-md shadow-lg py-1 z-40",
                                        Link {
                                            class: "block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100",
                                            to: Route::Profile {},
                                            onclick: move |_| account_open.set(false),
                                            "Profilim"
                                        }
                                        Link {
                                            class: "block px-4 py-2 text-sm text-gray-700 hover:bg-gray-100",
                                            to: Route::Profile {},
                                            onclick: move |_| account_open.set(false),
                                            "Biletlerim"
                                        }
                                        hr { class: "my-1" }
                                        button {
                                            class: "block w-full text-left px-4 py-2 text-sm text-red-600 hover:bg-gray-100",
                                            onclick: logout,
                                            "Çıkış Yap"
                                        }
                                    }
                                }
                            }
                        } else {
                            Link { class: "btn bg-white/10 text-white border border-white", to: Route::Login {}, "Giriş Yap" }
                            Link { class: "btn bg-white text-indigo-600", to: Route::Register {}, "Kayıt Ol" }
                        }
                    }

                    // Mobile menu button
                    div { class: "lg:hidden",
                        button {
                            class: "inline-flex items-center justify-center p-2 rounded-md text-indigo-100 hover:text-white hover:bg-white/10 focus:outline-none",
                            r#type: "button",
                            onclick: move |_| menu_open.toggle(),
                            span { class: "sr-only", "Toggle menu" }
                            if menu_open() {
                                // X icon
                                svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M6 18L18 6M6 6l12 12" }
                                }
                            } else {
                                // Hamburger icon
                                svg { class: "h-6 w-6", fill: "none", view_box: "0 0 24 24", stroke: "currentColor", "stroke-width": "2",
                                    path { "stroke-linecap": "round", "stroke-linejoin": "round", d: "M4 6h16M4 12h16M4 18h16" }
                                }
                            }
                        }
                    }
                }
            }

            // Mobile menu
            div { class: "{mobile_menu_class}", id: "mobile-menu",
                div { class: "px-2 pt-2 pb-3 space-y-1",
                    Link { class: nav_link_class("home"), to: Route::Home {}, onclick: move |_| menu_open.set(false), "Ana Sayfa" }
                    Link { class: nav_link_class("events"), to: Route::Events {}, onclick: move |_| menu_open.set(false), "Etkinlikler" }
                    if is_staff {
                        Link { class: nav_link_class("admin"), to: Route::AdminDashboard {}, onclick: move |_| menu_open.set(false), "Admin" }
                    }
                    if user.is_some() {
                        Link { class: nav_link_class("profile"), to: Route::Profile {}, onclick: move |_| menu_open.set(false), "Profilim" }
                        button {
                            class: "block w-full text-left px-3 py-2 rounded-md text-sm font-medium text-indigo-100 hover:text-white hover:bg-white/10",
                            onclick: logout,
                            "Çıkış Yap"
                        }
                    } else {
                        Link { class: nav_link_class("login"), to: Route::Login {}, onclick: move |_| menu_open.set(false), "Giriş Yap" }
                        Link { class: nav_link_class("register"), to: Route::Register {}, onclick: move |_| menu_open.set(false), "Kayıt Ol" }
                    }
                }
            }
        }
    }
}
