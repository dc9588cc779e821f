use maud::{html, Markup};

use super::boards::skeleton_grid;
use super::layout::{page, SITE_NAME};

const CHESSGROUND_CSS: [&str; 3] = [
    "https://esm.sh/@lichess-org/chessground/assets/chessground.base.css",
    "https://esm.sh/@lichess-org/chessground/assets/chessground.brown.css",
    "https://esm.sh/@lichess-org/chessground/assets/chessground.cburnett.css",
];

const BUTTON_CLASS: &str = "px-4 py-2 rounded-full font-bold text-base text-center shadow-md transition-all duration-300 hover:ring-2 active:scale-95 bg-blue-900 text-white hover:ring-blue-600/50 hover:shadow-lg w-fit cursor-pointer";
const INPUT_CLASS: &str = "border border-gray-200 rounded-xl p-3 text-gray-600 focus:outline-none focus:ring-2 focus:ring-blue-600";

pub fn index_page() -> Markup {
    page(
        "Inicio",
        html! {},
        html! {
            section class="flex flex-col gap-6" {
                h1 class="text-4xl md:text-5xl font-bold text-blue-900" { (SITE_NAME) }
                p class="text-lg" {
                    "Escuela y club de ajedrez. Clases para todas las edades, torneos y mucho más."
                }
                div class="flex gap-4" {
                    a class=(BUTTON_CLASS) href="/partidas" { "Partidas en directo" }
                    a class=(BUTTON_CLASS) href="/contacto" { "Contacto" }
                }
            }
        },
    )
}

/// Live board page: the round picker and the grid start out loading; the
/// viewer session fills them in over the socket.
pub fn live_games_page() -> Markup {
    page(
        "Partidas",
        html! {
            @for href in CHESSGROUND_CSS {
                link rel="stylesheet" href=(href);
            }
            script type="module" src="/static/live-boards.js" {}
        },
        html! {
            section class="mb-12" {
                div class="flex flex-col gap-4" {
                    h2 class="text-3xl md:text-4xl font-bold text-blue-900" {
                        "Sigue el torneo en directo"
                    }
                    select id="round-select" class="bg-white text-gray-600 text-base rounded-full px-4 py-2 shadow-md h-fit w-fit" {
                        option { "Cargando rondas..." }
                    }
                    div id="broadcast-grid" class="grid grid-cols-1 md:grid-cols-3 gap-4" {
                        (skeleton_grid())
                    }
                    template id="board-skeleton" {
                        (skeleton_grid())
                    }
                }
            }
        },
    )
}

pub fn contact_page() -> Markup {
    page(
        "Contacto",
        html! {},
        html! {
            section class="flex flex-col gap-4 max-w-xl" {
                h2 class="text-3xl md:text-4xl font-bold text-blue-900" { "Contacto" }
                form class="flex flex-col gap-4" method="get" action="/contacto/enviar" target="_blank" {
                    input type="text" name="name" placeholder="Tu nombre" required class=(INPUT_CLASS);
                    input type="text" name="subject" placeholder="Asunto" required class=(INPUT_CLASS);
                    textarea name="message" placeholder="Tu mensaje" rows="9" required class=(INPUT_CLASS) {}
                    button type="submit" class=(BUTTON_CLASS) { "Enviar mensaje" }
                }
            }
        },
    )
}
