use broadcast_core::board::{PlayerCard, BLACK_PLACEHOLDER, WHITE_PLACEHOLDER};
use broadcast_core::{BoardSlot, DisplayMode};
use maud::{html, Markup};

/// Skeleton cards shown while a round loads.
pub const SKELETON_BOARDS: usize = 6;

/// Everything one board card displays.
#[derive(Debug, Clone)]
pub struct BoardCard {
    pub index: usize,
    pub white: PlayerCard,
    pub black: PlayerCard,
    pub link: String,
}

impl BoardCard {
    pub fn skeleton(index: usize) -> Self {
        Self {
            index,
            white: PlayerCard::placeholder(WHITE_PLACEHOLDER),
            black: PlayerCard::placeholder(BLACK_PLACEHOLDER),
            link: "#".to_string(),
        }
    }

    pub fn live(slot: &BoardSlot<'_>) -> Self {
        Self {
            index: slot.index,
            white: slot.white(),
            black: slot.black(),
            link: slot.link(),
        }
    }
}

/// One board card. `Loading` draws a pulsing skeleton; `Live` draws the
/// widget mount point and the (initially hidden) result overlay.
pub fn board_card(mode: DisplayMode, card: &BoardCard) -> Markup {
    let live = mode == DisplayMode::Live;
    let class = match mode {
        DisplayMode::Loading => "board flex flex-col bg-white rounded-3xl shadow-lg gap-4 p-4 animate-pulse",
        DisplayMode::Live => "board flex flex-col bg-white rounded-3xl shadow-lg gap-4 p-4",
    };

    html! {
        div class=(class) {
            span class="text-sm font-bold uppercase tracking-widest text-blue-900" {
                "Mesa " (card.index + 1)
            }
            (player_row(&card.black, live))
            div class="relative aspect-square bg-gray-50 rounded-lg overflow-hidden shadow-inner" {
                @if live {
                    div class="cg-board w-full h-full" {}
                    div class="board-overlay absolute inset-0 bg-blue-900/20 flex items-center justify-center z-20 transition-opacity duration-500 opacity-0 pointer-events-none" {
                        span class="board-result text-6xl font-bold text-white drop-shadow-lg" {}
                    }
                } @else {
                    div class="w-full h-full bg-gray-200" {}
                }
            }
            (player_row(&card.white, live))
            a class="link text-xs self-end" href=(card.link) target="_blank" rel="noopener noreferrer" {
                "Ver en Lichess"
            }
        }
    }
}

fn player_row(player: &PlayerCard, live: bool) -> Markup {
    html! {
        div class="flex items-center justify-between gap-4" {
            h3 class="flex-1 truncate text-gray-600" {
                span class="text-blue-900 font-bold" {
                    @if live { (player.title) }
                }
                " "
                (player.name)
            }
            span class="text-blue-900" { (player.rating) }
        }
    }
}

/// The grid contents while loading.
pub fn skeleton_grid() -> Markup {
    html! {
        @for i in 0..SKELETON_BOARDS {
            (board_card(DisplayMode::Loading, &BoardCard::skeleton(i)))
        }
    }
}
