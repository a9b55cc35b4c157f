mod banner;
mod footer_bar;
mod input;
mod server_card;

pub use banner::{Banner, BannerWidget, FALLBACK_TITLE};
pub use footer_bar::{FocusContext, FooterBar, FooterBarStyle};
pub use input::TextInput;
pub use server_card::{CARD_HEIGHT, CardControl, ServerCard};
