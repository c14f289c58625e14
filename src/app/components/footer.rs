//! Site footer.

use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "bg-gray-900 text-gray-300 mt-12",
            div { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-10",
                div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                    div {
                        h5 { class: "text-white text-lg font-bold mb-2", "🎫 EventTicket" }
                        p { class: "text-sm", "En iyi etkinlikleri keşfedin ve biletlerinizi güvenle satın alın." }
                    }
                    div {
                        h6 { class: "text-white font-semibold mb-2", "Hızlı Linkler" }
                        ul { class: "space-y-1 text-sm",
                            li { Link { class: "hover:text-white", to: Route::Home {}, "Ana Sayfa" } }
                            li { Link { class: "hover:text-white", to: Route::Events {}, "Etkinlikler" } }
                            li { Link { class: "hover:text-white", to: Route::Login {}, "Giriş Yap" } }
                            li { Link { class: "hover:text-white", to: Route::Register {}, "Kayıt Ol" } }
                        }
                    }
                    div {
                        h6 { class: "text-white font-semibold mb-2", "İletişim" }
                        div { class: "space-y-1 text-sm",
                            p { "📧 info@eventticket.com" }
                            p { "📞 +90 (212) 555 0123" }
                            p { "📍 İstanbul, Türkiye" }
                        }
                    }
                }
                hr { class: "border-gray-700 my-6" }
                p { class: "text-center text-sm", "© 2024 EventTicket. Tüm hakları saklıdır." }
            }
        }
    }
}
