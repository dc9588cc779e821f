use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "Xadrez Pontevedra";

const NAV: [(&str, &str); 3] = [("/", "Inicio"), ("/partidas", "Partidas"), ("/contacto", "Contacto")];

/// Page shell shared by every route. `head` carries page-specific assets.
pub fn page(title: &str, head: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="es" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · " (SITE_NAME) }
                script src="https://cdn.tailwindcss.com" {}
                (head)
            }
            body class="bg-gray-50 text-gray-600" {
                header class="flex items-center justify-between px-6 py-4" {
                    a class="text-xl font-bold text-blue-900" href="/" { (SITE_NAME) }
                    nav class="flex gap-4" {
                        @for (href, label) in NAV {
                            a class="hover:text-blue-900" href=(href) { (label) }
                        }
                    }
                }
                main class="max-w-6xl mx-auto px-6 py-8" {
                    (body)
                }
                footer class="text-center text-sm py-8" {
                    "© " (SITE_NAME)
                }
            }
        }
    }
}
